use crate::authentication::{validate_credentials, AdminRole, AuthError, Credentials};
use crate::credential_store::CredentialStore;
use crate::routes::ErrorBody;
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use secrecy::Secret;
use std::fmt::Debug;

#[derive(thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    AuthFailed(#[source] anyhow::Error),
    #[error("User is not an admin")]
    NotAnAdmin,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for LoginError {
    fn status_code(&self) -> StatusCode {
        match self {
            LoginError::AuthFailed(_) => StatusCode::UNAUTHORIZED,
            LoginError::NotAnAdmin => StatusCode::FORBIDDEN,
            LoginError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            LoginError::UnexpectedError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error: &error })
    }
}

impl From<AuthError> for LoginError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials(_) => LoginError::AuthFailed(error.into()),
            AuthError::UnexpectedError(_) => LoginError::UnexpectedError(error.into()),
        }
    }
}

#[derive(serde::Deserialize)]
pub struct AdminLoginForm {
    email: Option<String>,
    password: Option<Secret<String>>,
}

#[derive(serde::Serialize)]
struct AdminIdentity<'a> {
    id: &'a serde_json::Value,
    role: &'a str,
}

/// Undecodable bodies are treated as internal faults, without echoing the parser error.
pub fn login_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|error, _req: &HttpRequest| {
            LoginError::UnexpectedError(anyhow::anyhow!("Malformed login body: {}", error)).into()
        })
}

#[tracing::instrument(
    name = "Admin login",
    skip(form, store),
    fields(
        email = tracing::field::Empty,
        admin_id = tracing::field::Empty
    )
)]
pub async fn login(
    web::Json(form): web::Json<AdminLoginForm>,
    store: web::Data<CredentialStore>,
) -> Result<HttpResponse, LoginError> {
    let credentials = match (form.email, form.password) {
        (Some(email), Some(password)) => Credentials { email, password },
        _ => {
            return Err(LoginError::AuthFailed(anyhow::anyhow!(
                "Email or password missing from the login body"
            )))
        }
    };
    tracing::Span::current().record("email", tracing::field::display(&credentials.email));
    tracing::info!("Login attempt");

    let admin = validate_credentials(&store, credentials).await?;

    let Some(role) = AdminRole::parse(&admin.role) else {
        tracing::warn!(role = %admin.role, "Rejected login for a role outside the admin allow-list");
        return Err(LoginError::NotAnAdmin);
    };
    tracing::Span::current().record("admin_id", tracing::field::display(&admin.id));

    Ok(HttpResponse::Ok().json(AdminIdentity {
        id: &admin.id,
        role: role.as_ref(),
    }))
}

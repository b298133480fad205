use crate::domain::UserType;
use crate::email_client::{EmailClient, SendEmailError};
use crate::routes::{ErrorBody, WelcomeEmail};
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum ReviewEmailError {
    #[error("Email and firstName are required")]
    MissingFields,
    #[error("Resend API key not configured")]
    ApiKeyNotConfigured,
    #[error("Failed to send email")]
    ProviderRejected(serde_json::Value),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ReviewEmailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ReviewEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReviewEmailError::MissingFields => StatusCode::BAD_REQUEST,
            ReviewEmailError::ApiKeyNotConfigured
            | ReviewEmailError::ProviderRejected(_)
            | ReviewEmailError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            ReviewEmailError::ProviderRejected(details) => response.json(serde_json::json!({
                "error": self.to_string(),
                "details": details,
            })),
            // Fault details stay in the logs
            ReviewEmailError::UnexpectedError(_) => response.json(ErrorBody {
                error: "Internal server error",
            }),
            _ => response.json(ErrorBody {
                error: &self.to_string(),
            }),
        }
    }
}

impl From<SendEmailError> for ReviewEmailError {
    fn from(error: SendEmailError) -> Self {
        match error {
            SendEmailError::MissingApiKey => ReviewEmailError::ApiKeyNotConfigured,
            SendEmailError::Rejected { details, .. } => ReviewEmailError::ProviderRejected(details),
            SendEmailError::Unexpected(e) => ReviewEmailError::UnexpectedError(e),
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEmailRequest {
    email: Option<String>,
    first_name: Option<String>,
    user_type: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ReviewEmailSent {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resend_id: Option<String>,
}

pub fn review_email_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|error, _req: &HttpRequest| {
            ReviewEmailError::UnexpectedError(anyhow::anyhow!(
                "Malformed review email body: {}",
                error
            ))
            .into()
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[tracing::instrument(
    name = "Send registration review email",
    skip(request, email_client),
    fields(
        recipient = tracing::field::Empty,
        user_type = tracing::field::Empty,
        resend_id = tracing::field::Empty
    )
)]
pub async fn send_review_email(
    web::Json(request): web::Json<ReviewEmailRequest>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ReviewEmailError> {
    let (Some(recipient), Some(first_name)) =
        (non_empty(request.email), non_empty(request.first_name))
    else {
        return Err(ReviewEmailError::MissingFields);
    };
    if !email_client.has_api_key() {
        return Err(ReviewEmailError::ApiKeyNotConfigured);
    }

    let user_type = UserType::parse(request.user_type.as_deref());
    let span = tracing::Span::current();
    span.record("recipient", tracing::field::display(&recipient));
    span.record("user_type", tracing::field::debug(&user_type));

    let email = WelcomeEmail::new(&first_name, user_type);
    let resend_id = email_client
        .send_email(&recipient, &email.subject, &email.html)
        .await?;
    if let Some(id) = &resend_id {
        span.record("resend_id", tracing::field::display(id));
    }

    Ok(HttpResponse::Ok().json(ReviewEmailSent {
        success: true,
        message: "Congratulation email sent successfully",
        resend_id,
    }))
}

use crate::credential_store::{CredentialStore, CredentialStoreError};
use crate::utils::{error_chain_fmt, spawn_blocking_task_with_tracing};
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use std::fmt::Debug;

#[derive(thiserror::Error)]
pub enum AuthError {
    #[error("Invalid Credentials")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
}

/// Work factor for newly provisioned admin passwords.
pub const PASSWORD_HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// An admin record whose password checked out. The role is not vetted yet.
/// The id is whatever key type the `admins` table uses, echoed unchanged.
#[derive(Debug)]
pub struct VerifiedAdmin {
    pub id: serde_json::Value,
    pub role: String,
}

#[tracing::instrument(name = "Validate credentials against the store", skip_all)]
pub async fn validate_credentials(
    store: &CredentialStore,
    credentials: Credentials,
) -> Result<VerifiedAdmin, AuthError> {
    let admin = match store.find_admin_by_email(&credentials.email).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            tracing::info!("No admin found for the supplied email");
            return Err(AuthError::InvalidCredentials(anyhow::anyhow!(
                "Unknown email"
            )));
        }
        Err(CredentialStoreError::NotConfigured) => {
            return Err(AuthError::UnexpectedError(anyhow::anyhow!(
                CredentialStoreError::NotConfigured
            )));
        }
        // Callers cannot tell a failed lookup from an unknown email
        Err(CredentialStoreError::Query(e)) => {
            tracing::warn!(error.cause_chain = ?e, "Admin lookup failed");
            return Err(AuthError::InvalidCredentials(e));
        }
    };

    let expected_password_hash = admin.password_hash;
    let outcome = spawn_blocking_task_with_tracing(move || {
        verify_password_hash(credentials.password, expected_password_hash)
    })
    .await
    .context("Failed to spawn blocking task")
    .map_err(AuthError::UnexpectedError)?;
    tracing::info!(verified = outcome.is_ok(), "Password verification result");
    outcome?;

    Ok(VerifiedAdmin {
        id: admin.id,
        role: admin.role,
    })
}

/// Runs the full bcrypt computation; the stored `$2a$`/`$2b$` string carries its own salt and cost.
#[tracing::instrument(name = "Verify password hash", skip_all)]
pub fn verify_password_hash(
    password: Secret<String>,
    expected_password_hash: Secret<String>,
) -> Result<(), AuthError> {
    // A malformed stored hash is a data problem, not a wrong password
    let matches = bcrypt::verify(
        password.expose_secret().as_bytes(),
        expected_password_hash.expose_secret(),
    )
    .context("Failed to parse stored password hash as bcrypt")
    .map_err(AuthError::UnexpectedError)?;

    if !matches {
        return Err(AuthError::InvalidCredentials(anyhow::anyhow!(
            "Invalid password"
        )));
    }
    Ok(())
}

/// Produces the bcrypt string stored in the `password_hash` column.
pub fn hash_password(password: Secret<String>, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password.expose_secret().as_bytes(), cost)
        .context("Failed to hash password")
        .map_err(AuthError::UnexpectedError)
}

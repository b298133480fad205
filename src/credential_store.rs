use crate::utils::error_chain_fmt;
use anyhow::Context;
use reqwest::Url;
use secrecy::{ExposeSecret, Secret};

#[derive(thiserror::Error)]
pub enum CredentialStoreError {
    #[error("Credential store service role key is not configured")]
    NotConfigured,
    #[error(transparent)]
    Query(#[from] anyhow::Error),
}

impl std::fmt::Debug for CredentialStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct AdminRecord {
    // uuid, bigint or text key depending on the table definition
    pub id: serde_json::Value,
    pub role: String,
    pub password_hash: Secret<String>,
}

/// Read-only client for the `admins` table, served over PostgREST.
pub struct CredentialStore {
    http_client: reqwest::Client,
    base_url: Url,
    service_role_key: Option<Secret<String>>,
}

impl CredentialStore {
    const ADMINS_ENDPOINT: &'static str = "rest/v1/admins";

    pub fn new(
        base_url: &str,
        service_role_key: Option<Secret<String>>,
    ) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid credential store base url: {}", base_url))?;
        let service_role_key =
            service_role_key.filter(|key| !key.expose_secret().trim().is_empty());

        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url,
            service_role_key,
        })
    }

    /// Returns the first admin row whose email matches exactly.
    /// The schema does not guarantee uniqueness, so `limit=1` picks one.
    #[tracing::instrument(name = "Fetch admin credentials from store", skip(self))]
    pub async fn find_admin_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminRecord>, CredentialStoreError> {
        let key = self
            .service_role_key
            .as_ref()
            .ok_or(CredentialStoreError::NotConfigured)?;

        let url = self
            .base_url
            .join(Self::ADMINS_ENDPOINT)
            .context("Invalid credential store endpoint")?;

        let email_filter = format!("eq.{}", email);
        let rows: Vec<AdminRecord> = self
            .http_client
            .get(url)
            .header("apikey", key.expose_secret().as_str())
            .bearer_auth(key.expose_secret())
            .query(&[
                ("select", "id,role,password_hash"),
                ("email", email_filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await
            .context("Failed to reach the credential store")?
            .error_for_status()
            .context("Credential store rejected the admin lookup")?
            .json()
            .await
            .context("Failed to decode admin rows")?;

        Ok(rows.into_iter().next())
    }
}

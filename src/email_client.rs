use crate::domain::SenderEmail;
use crate::utils::error_chain_fmt;
use anyhow::Context;
use reqwest::{StatusCode, Url};
use secrecy::{ExposeSecret, Secret};

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error("Email provider API key is not configured")]
    MissingApiKey,
    #[error("Email provider rejected the request with status {status}")]
    Rejected {
        status: StatusCode,
        details: serde_json::Value,
    },
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// HTTP client for the transactional email provider (Resend).
pub struct EmailClient {
    http_client: reqwest::Client,
    base_url: Url,
    sender: SenderEmail,
    api_key: Option<Secret<String>>,
}

impl EmailClient {
    pub fn new(
        base_url: &str,
        sender: SenderEmail,
        api_key: Option<Secret<String>>,
    ) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid email provider base url: {}", base_url))?;
        // An empty key is as good as no key
        let api_key = api_key.filter(|key| !key.expose_secret().trim().is_empty());

        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url,
            sender,
            api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one HTML email and returns the id the provider assigned to it.
    #[tracing::instrument(name = "Send email through provider", skip(self, html_body))]
    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<Option<String>, SendEmailError> {
        let api_key = self.api_key.as_ref().ok_or(SendEmailError::MissingApiKey)?;

        let url = self
            .base_url
            .join("emails")
            .context("Invalid email provider endpoint")?;

        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: [recipient],
            subject,
            html: html_body,
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .context("Failed to reach the email provider")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read the email provider response")?;
        // Keep the raw text when the provider does not answer with JSON
        let details = serde_json::from_str::<serde_json::Value>(&body)
            .unwrap_or(serde_json::Value::String(body));

        if !status.is_success() {
            tracing::error!(%status, provider.details = %details, "Email provider API error");
            return Err(SendEmailError::Rejected { status, details });
        }

        let sent: SendEmailResponse = serde_json::from_value(details)
            .context("Email provider returned an unexpected success body")?;
        Ok(sent.id)
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(serde::Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

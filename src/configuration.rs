use crate::credential_store::CredentialStore;
use crate::domain::SenderEmail;
use crate::email_client::EmailClient;
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub credential_store: CredentialStoreSettings,
    pub email_client: EmailClientSettings,
}

impl Settings {
    pub fn get_configuration() -> Result<Settings, config::ConfigError> {
        let base_path = std::env::current_dir().map_err(|e| {
            config::ConfigError::Message(format!(
                "Failed to determine the current directory: {e}"
            ))
        })?;
        let config_dir = base_path.join("configuration");

        let env: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| Environment::Local.as_str().into())
            .try_into()
            .map_err(config::ConfigError::Message)?;

        // Later sources override earlier ones when the builder merges them
        config::Config::builder()
            .add_source(config::File::from(config_dir.join("base.yaml")))
            .add_source(config::File::from(config_dir.join(format!("{}.yaml", env.as_str()))))
            // e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            // Names used by the hosted platform
            .set_override_option("credential_store.base_url", env_var("SUPABASE_URL"))?
            .set_override_option(
                "credential_store.service_role_key",
                env_var("SUPABASE_SERVICE_ROLE_KEY"),
            )?
            .set_override_option("email_client.api_key", env_var("RESEND_API_KEY"))?
            .build()?
            .try_deserialize()
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub name: String,
    pub default_log_level: String,
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn get_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct CredentialStoreSettings {
    pub base_url: String,
    pub service_role_key: Option<Secret<String>>,
}

impl CredentialStoreSettings {
    pub fn client(&self) -> Result<CredentialStore, anyhow::Error> {
        CredentialStore::new(&self.base_url, self.service_role_key.clone())
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub api_key: Option<Secret<String>>,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<SenderEmail, String> {
        SenderEmail::parse(self.sender_email.clone())
    }

    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        let sender = self.sender().map_err(anyhow::Error::msg)?;
        EmailClient::new(&self.base_url, sender, self.api_key.clone())
    }
}

#[derive(Debug)]
enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`",
                other
            )),
        }
    }
}

use anyhow::Context;
use artisanhub::configuration::Settings;
use artisanhub::startup::Application;
use artisanhub::telemetry::config_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::get_configuration().context("Failed to read configuration")?;

    config_tracing(&settings.application).context("Failed to install telemetry")?;

    let application = Application::build(settings)?;
    tracing::info!(port = application.port(), "Listening");
    application.run_until_terminated().await?;
    Ok(())
}

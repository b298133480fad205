use crate::configuration::ApplicationSettings;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Bunyan-formatted JSON subscriber. `RUST_LOG` wins over `default_log_level`.
pub fn get_tracing_subscriber<Sink>(
    name: &str,
    default_log_level: &str,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // Fall back to the configured level when RUST_LOG is unset or unparsable
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_level));
    let formatting_layer = BunyanFormattingLayer::new(name.into(), sink);

    // JsonStorageLayer keeps span fields around so the bunyan layer can print them on every event
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs the subscriber process-wide. Must be called at most once.
pub fn init_tracing_subscriber(
    subscriber: impl Subscriber + Send + Sync + 'static,
) -> Result<(), anyhow::Error> {
    // actix-web and reqwest still emit through the `log` facade
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}

/// Logs go to stdout, where the hosting platform collects them.
pub fn config_tracing(app_config: &ApplicationSettings) -> Result<(), anyhow::Error> {
    init_tracing_subscriber(get_tracing_subscriber(
        &app_config.name,
        &app_config.default_log_level,
        std::io::stdout,
    ))
}

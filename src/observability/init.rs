//! Tracing initialization and subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE: &str = "flexchill-otlp.json";

/// Installs the global subscriber: an `EnvFilter` at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer whose spans are appended
/// to `flexchill-otlp.json` in the plugin data directory.
///
/// Tracing is optional: if the data directory cannot be created nothing is
/// installed. Only the first call in a process takes effect.
///
/// # Example
///
/// ```rust,no_run
/// use flexchill::observability::init_tracing;
/// use flexchill::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SCOPE_NAME)]);
    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer(SCOPE_NAME);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}

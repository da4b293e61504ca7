use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "snipvault_server=info,snipvault=info";

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` when present, falling back to
/// [`DEFAULT_FILTER`]. Output goes to stderr via the fmt layer; there is no
/// exporter pipeline behind this service.
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, filtered by the configured level.
/// An unparsable level falls back to `info`.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

//! Tracing subscriber setup for operator visibility.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerSettings;

/// Installs the global subscriber. `RUST_LOG` overrides the configured
/// level; calling twice is a no-op so tests can initialize freely.
pub fn init(settings: &LoggerSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

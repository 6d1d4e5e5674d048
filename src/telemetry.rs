//! Structured logging for function binaries.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Build the log filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        // the platform log drain stamps ingestion time
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_falls_back_to_info_without_rust_log() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(env_filter().to_string(), DEFAULT_FILTER);
        assert_eq!(DEFAULT_FILTER, "info");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init();
        tracing::info!("telemetry initialized");
    }
}

//! Tracing setup for the helper binaries.
//!
//! Logs go to stderr so stdout stays reserved for JSON output.

use crate::config::LogSettings;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(settings: &LogSettings) {
    let filter = EnvFilter::try_new(&settings.filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    let result = if settings.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    // Already initialized (e.g. in tests); keep the existing subscriber.
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        let settings = LogSettings {
            filter: "not a [valid filter".to_string(),
            json: false,
        };
        init_logging(&settings);
        init_logging(&LogSettings {
            filter: "debug".to_string(),
            json: true,
        });
    }
}

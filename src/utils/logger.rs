use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber
///
/// The level is read from `LOGLEVEL` (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`),
/// defaulting to `INFO`. Safe to call more than once; only the first call
/// installs anything, and an already-installed subscriber is left in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = log_level_from_env();
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

/// Parses `LOGLEVEL`, falling back to `INFO` for missing or unknown values
#[must_use]
pub fn log_level_from_env() -> Level {
    parse_level(&std::env::var("LOGLEVEL").unwrap_or_default())
}

fn parse_level(raw: &str) -> Level {
    match raw.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

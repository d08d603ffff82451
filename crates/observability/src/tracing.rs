//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{self, DEFAULT_FILTER, LogFormat, ObservabilityConfig};

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &ObservabilityConfig) {
    let mut config = config.clone();
    let filter = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => filter,
        Err(e) => {
            // Hand-built configs skip the check in `from_vars`.
            config.filter_warning = Some(config::invalid_filter(&config.filter, &e));
            EnvFilter::new(DEFAULT_FILTER)
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    match config.format {
        LogFormat::Json => install(builder.json().finish(), &config),
        LogFormat::Pretty => install(builder.pretty().finish(), &config),
    };
}

/// Make `subscriber` the global default, then report the config's fallbacks
/// through it. Returns `false` (and logs nothing) if a subscriber was already set.
pub fn install<S>(subscriber: S, config: &ObservabilityConfig) -> bool
where
    S: SubscriberInitExt,
{
    if subscriber.try_init().is_err() {
        return false;
    }
    report_warnings(config);
    true
}

/// Log every fallback taken while reading `config` to the current subscriber.
pub fn report_warnings(config: &ObservabilityConfig) {
    for warning in config.warnings() {
        ::tracing::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_json;
    use ::tracing::Level;

    #[test]
    fn reports_filter_and_format_fallbacks() {
        let config = ObservabilityConfig::from_vars(
            Some("storage_events=loud".into()),
            Some("xml".into()),
        );

        let lines = capture_json(Level::INFO, || report_warnings(&config));

        let warnings: Vec<&str> = lines
            .iter()
            .filter(|l| l["level"] == "WARN")
            .filter_map(|l| l["fields"]["message"].as_str())
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("storage_events=loud"));
        assert!(warnings[0].contains("using `info`"));
        assert!(warnings[1].contains("xml"));
        assert!(warnings[1].contains("using json"));
    }

    #[test]
    fn clean_config_reports_nothing() {
        let config = ObservabilityConfig::from_vars(Some("debug".into()), Some("json".into()));
        let lines = capture_json(Level::TRACE, || report_warnings(&config));
        assert!(lines.is_empty());
    }
}

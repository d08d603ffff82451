use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Selects the log line format.
pub const LOG_FORMAT_ENV: &str = "STORAGE_EVENTS_LOG_FORMAT";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable multi-line output for local development.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("unknown log format `{other}` (expected `json` or `pretty`)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info,storage_events=trace`.
    pub filter: String,
    pub format: LogFormat,
    /// Set when the configured filter did not parse and `filter` fell back to
    /// [`DEFAULT_FILTER`]. Reported once the subscriber is up.
    pub filter_warning: Option<String>,
    /// Set when the configured format was not recognised and `format` fell back
    /// to the default. Reported once the subscriber is up.
    pub format_warning: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            filter_warning: None,
            format_warning: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `STORAGE_EVENTS_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let (filter, filter_warning) = match filter.filter(|f| !f.trim().is_empty()) {
            None => (DEFAULT_FILTER.to_string(), None),
            Some(f) => match EnvFilter::try_new(&f) {
                Ok(_) => (f, None),
                Err(e) => (DEFAULT_FILTER.to_string(), Some(invalid_filter(&f, &e))),
            },
        };

        let (format, format_warning) = match format.as_deref().map(LogFormat::from_str) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(msg)) => (LogFormat::default(), Some(format!("{msg}; using json"))),
        };

        Self {
            filter,
            format,
            filter_warning,
            format_warning,
        }
    }

    /// Fallbacks taken while reading the configuration, in field order.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.filter_warning
            .iter()
            .chain(self.format_warning.iter())
            .map(String::as_str)
    }
}

pub(crate) fn invalid_filter(filter: &str, err: &impl core::fmt::Display) -> String {
    format!("invalid log filter `{filter}`: {err}; using `{DEFAULT_FILTER}`")
}

//! Tracing setup and log-backed consumers for storage events.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&config::ObservabilityConfig::from_env());
}

/// Environment-driven settings.
pub mod config;

/// Subscriber installation (filters, output format).
pub mod tracing;

/// Sinks that write accumulated events to the log.
pub mod sink;

#[cfg(test)]
mod test_support;

pub use config::{LogFormat, ObservabilityConfig};
pub use sink::TracingSink;

//! Error model for the fallible edges of the event crates.
//!
//! Emitting and accumulating events never fails. Errors only arise where events
//! cross a boundary: encoding to / decoding from the wire format, and sharing a
//! manager between threads.

use thiserror::Error;

/// Result type used across the event crates.
pub type EventResult<T> = Result<T, EventError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Events could not be serialized.
    #[error("encode failed: {0}")]
    Encode(String),

    /// Input was not a valid event encoding.
    #[error("decode failed: {0}")]
    Decode(String),

    /// A shared manager's lock was poisoned by a panicking emitter.
    #[error("event manager lock poisoned")]
    Poisoned,
}

impl EventError {
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

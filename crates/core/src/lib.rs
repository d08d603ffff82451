//! `storage-events-core` — shared building blocks for the storage event crates.
//!
//! This crate holds the error model and the value marker trait; it carries no
//! event semantics of its own.

pub mod error;
pub mod value_object;

pub use error::{EventError, EventResult};
pub use value_object::ValueObject;

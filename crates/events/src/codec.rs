//! JSON wire encoding of storage events.
//!
//! Field names are part of the contract with downstream consumers:
//!
//! ```text
//! [{"type": "insert", "attributes": [{"key": "key", "value": "k1"}]}]
//! ```
//!
//! Decoding also accepts `"attributes": null` and a missing `attributes` field,
//! both read as "no attributes".

use serde_json::Value;

use storage_events_core::{EventError, EventResult};

use crate::collection::StorageEvents;
use crate::event::StorageEvent;

pub fn to_json(events: &StorageEvents) -> EventResult<String> {
    serde_json::to_string(events).map_err(|e| EventError::encode(e.to_string()))
}

pub fn to_json_pretty(events: &StorageEvents) -> EventResult<String> {
    serde_json::to_string_pretty(events).map_err(|e| EventError::encode(e.to_string()))
}

pub fn to_value(events: &StorageEvents) -> EventResult<Value> {
    serde_json::to_value(events).map_err(|e| EventError::encode(e.to_string()))
}

pub fn from_json(input: &str) -> EventResult<StorageEvents> {
    serde_json::from_str(input).map_err(|e| EventError::decode(e.to_string()))
}

pub fn event_from_json(input: &str) -> EventResult<StorageEvent> {
    serde_json::from_str(input).map_err(|e| EventError::decode(e.to_string()))
}

//! Storage events: typed, attributed records of state changes, accumulated in
//! emission order for a unit of work.
//!
//! - [`StorageEvent`] / [`Attribute`]: one occurrence and its key/value context
//! - [`StorageEvents`]: the ordered, append-only collection
//! - [`StorageEventManager`]: single-owner emission point
//! - [`SharedEventManager`]: the same, behind a lock, for several emitters
//! - [`EventSink`]: where accumulated events go once the work is done

pub mod attribute;
pub mod codec;
pub mod collection;
pub mod event;
pub mod manager;
pub mod shared;
pub mod sink;

pub use attribute::Attribute;
pub use collection::StorageEvents;
pub use event::StorageEvent;
pub use manager::StorageEventManager;
pub use shared::SharedEventManager;
pub use sink::EventSink;

pub use storage_events_core::{EventError, EventResult};

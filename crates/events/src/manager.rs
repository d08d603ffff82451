//! Single-owner event emission for one unit of work.

use crate::collection::StorageEvents;
use crate::event::StorageEvent;
use crate::sink::EventSink;

/// Accumulates the events emitted while processing a unit of work.
///
/// The manager is the only writer of its collection. Emitting takes `&mut self`,
/// so a view returned by [`events`](Self::events) cannot outlive the next emit;
/// callers that want to keep the collection around take a
/// [`snapshot`](Self::snapshot) or consume the manager with
/// [`into_events`](Self::into_events).
///
/// For several threads emitting into one unit of work, see
/// [`SharedEventManager`](crate::SharedEventManager).
#[derive(Debug, Clone, Default)]
pub struct StorageEventManager {
    events: StorageEvents,
}

impl StorageEventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted so far, in emission order.
    pub fn events(&self) -> &StorageEvents {
        &self.events
    }

    /// Owned copy of the events emitted so far.
    pub fn snapshot(&self) -> StorageEvents {
        self.events.clone()
    }

    pub fn into_events(self) -> StorageEvents {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append a single event.
    pub fn emit_event(&mut self, event: StorageEvent) {
        tracing::trace!(
            event_type = event.event_type(),
            attributes = event.attributes().len(),
            total = self.events.len() + 1,
            "storage event emitted"
        );
        self.events.push(event);
    }

    /// Append `events` in order. Same result as one [`emit_event`](Self::emit_event)
    /// per element.
    pub fn emit_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = StorageEvent>,
    {
        let before = self.events.len();
        self.events.extend(events);
        tracing::debug!(
            emitted = self.events.len() - before,
            total = self.events.len(),
            "storage events emitted"
        );
    }

    /// Hand the events emitted so far to `sink`. The manager keeps its events.
    pub fn flush_to<S>(&self, mut sink: S) -> Result<(), S::Error>
    where
        S: EventSink,
    {
        sink.consume(&self.events)
    }
}

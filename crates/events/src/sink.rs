//! Consumers of accumulated events.
//!
//! Emission never fails; handing events to something outside the process can.
//! A sink is that boundary: a log, a wire encoder, an audit trail. The event
//! crates make no assumption about what a sink does with the events or whether
//! it keeps them.

use core::convert::Infallible;

use crate::collection::StorageEvents;
use crate::event::StorageEvent;

/// Destination for a collection of storage events.
///
/// A sink receives the whole collection in emission order and must not assume it
/// sees each collection only once: a manager can be flushed repeatedly as it
/// grows.
pub trait EventSink {
    type Error: core::fmt::Debug;

    fn consume(&mut self, events: &StorageEvents) -> Result<(), Self::Error>;
}

impl<S> EventSink for &mut S
where
    S: EventSink + ?Sized,
{
    type Error = S::Error;

    fn consume(&mut self, events: &StorageEvents) -> Result<(), Self::Error> {
        (**self).consume(events)
    }
}

/// Collects clones of every consumed event.
impl EventSink for Vec<StorageEvent> {
    type Error = Infallible;

    fn consume(&mut self, events: &StorageEvents) -> Result<(), Self::Error> {
        self.extend(events.iter().cloned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CountingSink {
        batches: usize,
        events: usize,
    }

    impl EventSink for CountingSink {
        type Error = Infallible;

        fn consume(&mut self, events: &StorageEvents) -> Result<(), Self::Error> {
            self.batches += 1;
            self.events += events.len();
            Ok(())
        }
    }

    #[test]
    fn vec_sink_appends_in_order() {
        let events: StorageEvents = vec![StorageEvent::bare("a"), StorageEvent::bare("b")].into();

        let mut sink = vec![StorageEvent::bare("earlier")];
        sink.consume(&events).unwrap();

        let types: Vec<&str> = sink.iter().map(|e| e.event_type()).collect();
        assert_eq!(types, ["earlier", "a", "b"]);
    }

    fn hand_over<S: EventSink>(mut sink: S, events: &StorageEvents) {
        sink.consume(events).unwrap();
    }

    #[test]
    fn mutable_reference_forwards_to_sink() {
        let events: StorageEvents = vec![StorageEvent::bare("a")].into();
        let mut counter = CountingSink::default();

        hand_over(&mut counter, &events);
        hand_over(&mut counter, &StorageEvents::empty());

        assert_eq!(counter.batches, 2);
        assert_eq!(counter.events, 1);
    }
}

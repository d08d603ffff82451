use serde::{Deserialize, Serialize};

use storage_events_core::ValueObject;

use crate::event::StorageEvent;

/// Ordered, append-only sequence of [`StorageEvent`]s.
///
/// Insertion order is significant and preserved exactly. Structurally equal
/// events are kept side by side; nothing is deduplicated or filtered.
///
/// Serialized as a plain JSON array of events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageEvents(Vec<StorageEvent>);

impl StorageEvents {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Return this collection with `event` as its new last element.
    pub fn append_event(mut self, event: StorageEvent) -> Self {
        self.0.push(event);
        self
    }

    /// Return `self ++ events`, keeping the internal order of both.
    pub fn append_events(mut self, events: StorageEvents) -> Self {
        self.0.extend(events.0);
        self
    }

    pub fn push(&mut self, event: StorageEvent) {
        self.0.push(event);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&StorageEvent> {
        self.0.last()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, StorageEvent> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[StorageEvent] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<StorageEvent> {
        self.0
    }
}

impl ValueObject for StorageEvents {}

impl From<Vec<StorageEvent>> for StorageEvents {
    fn from(events: Vec<StorageEvent>) -> Self {
        Self(events)
    }
}

impl From<StorageEvents> for Vec<StorageEvent> {
    fn from(events: StorageEvents) -> Self {
        events.0
    }
}

impl FromIterator<StorageEvent> for StorageEvents {
    fn from_iter<I: IntoIterator<Item = StorageEvent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<StorageEvent> for StorageEvents {
    fn extend<I: IntoIterator<Item = StorageEvent>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for StorageEvents {
    type Item = StorageEvent;
    type IntoIter = std::vec::IntoIter<StorageEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StorageEvents {
    type Item = &'a StorageEvent;
    type IntoIter = core::slice::Iter<'a, StorageEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn event(ty: &str, n: usize) -> StorageEvent {
        StorageEvent::new(ty, [("n", n.to_string())])
    }

    #[test]
    fn empty_has_no_events() {
        let events = StorageEvents::empty();
        assert_eq!(events.len(), 0);
        assert!(events.is_empty());
        assert_eq!(events, StorageEvents::default());
    }

    #[test]
    fn append_event_puts_event_last() {
        let events = StorageEvents::empty()
            .append_event(event("insert", 0))
            .append_event(event("delete", 1));

        assert_eq!(events.len(), 2);
        assert_eq!(events.as_slice()[0], event("insert", 0));
        assert_eq!(events.last(), Some(&event("delete", 1)));
    }

    #[test]
    fn append_events_concatenates_in_order() {
        let head: StorageEvents = vec![event("a", 0), event("b", 1)].into();
        let tail: StorageEvents = vec![event("c", 2), event("d", 3)].into();

        let joined = head.append_events(tail);

        let types: Vec<&str> = joined.iter().map(|e| e.event_type()).collect();
        assert_eq!(types, ["a", "b", "c", "d"]);
    }

    #[test]
    fn appending_empty_collection_is_a_no_op() {
        let events: StorageEvents = vec![event("insert", 0)].into();
        let same = events.clone().append_events(StorageEvents::empty());
        assert_eq!(same, events);
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let e = event("insert", 7);
        let events = StorageEvents::empty().append_event(e.clone()).append_event(e.clone());
        assert_eq!(events.into_vec(), vec![e.clone(), e]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: bulk append equals `original ++ appended`.
        #[test]
        fn append_events_is_concatenation(
            left in prop::collection::vec("[a-z]{0,6}", 0..12),
            right in prop::collection::vec("[a-z]{0,6}", 0..12),
        ) {
            let to_events = |types: &[String]| -> StorageEvents {
                types.iter().enumerate().map(|(i, t)| event(t, i)).collect()
            };

            let joined = to_events(&left).append_events(to_events(&right));

            let mut expected = to_events(&left).into_vec();
            expected.extend(to_events(&right));
            prop_assert_eq!(joined.into_vec(), expected);
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};

use storage_events_core::ValueObject;

use crate::attribute::Attribute;

/// One storage occurrence: a type tag plus ordered key/value attributes.
///
/// Events are values:
/// - the **type** is fixed at construction (any string, including `""`)
/// - **attributes** only grow; existing entries are never removed or reordered
///
/// Encoded on the wire as `{"type": ..., "attributes": [{"key", "value"}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "type")]
    event_type: String,

    #[serde(default, deserialize_with = "nullable_attributes")]
    attributes: Vec<Attribute>,
}

impl StorageEvent {
    /// Create an event with `attrs` as its initial attributes, in the order given.
    pub fn new<I>(event_type: impl Into<String>, attrs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Attribute>,
    {
        Self {
            event_type: event_type.into(),
            attributes: attrs.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an event with no attributes.
    pub fn bare(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes: Vec::new(),
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// First value recorded under `key`, if any.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key() == key)
            .map(Attribute::value)
    }

    /// Return this event with `attrs` appended after the existing attributes.
    pub fn append_attributes<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Attribute>,
    {
        self.attributes.extend(attrs.into_iter().map(Into::into));
        self
    }

    /// Return this event with a single `key=value` attribute appended.
    pub fn add_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }
}

impl ValueObject for StorageEvent {}

// Older producers write `"attributes": null` for an event built without attributes.
fn nullable_attributes<'de, D>(deserializer: D) -> Result<Vec<Attribute>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Attribute>>::deserialize(deserializer)?.unwrap_or_default())
}

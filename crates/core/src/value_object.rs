//! Value object marker: equality by value, not identity.

/// Marker trait for event values.
///
/// Attributes, events and event collections carry no identity. Two events with
/// the same type and the same attributes in the same order are the same event,
/// and a collection may hold both without deduplication.
///
/// Implementors are cheap to clone relative to their size (no shared state) and
/// compare structurally.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Attribute {
///     key: String,
///     value: String,
/// }
///
/// impl ValueObject for Attribute {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

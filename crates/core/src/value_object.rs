//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are never mutated after construction;
/// two instances with the same attributes are interchangeable. Line items,
/// ticket types and computed purchase totals are all value objects.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two items with the
/// same name and price are the same item. To "change" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two with the same attribute values are
/// equal. Category labels and department names are value objects, equipment
/// and staff members are entities.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Department(String);
///
/// impl ValueObject for Department {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

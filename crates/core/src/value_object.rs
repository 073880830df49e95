//! Value object trait: equality by value, not identity.
//!
//! Snapshots handed out by the catalog are value objects: two snapshots taken
//! from the same item with no write in between compare equal, and changing a
//! snapshot never reaches back into the store.

/// Marker trait for value objects.
///
/// - **Clone**: read results are copied out of the store, never borrowed.
/// - **PartialEq**: compared by attribute values.
/// - **Debug**: shows up in logs and assertion failures.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Dimensions {
///     width_mm: u32,
///     height_mm: u32,
/// }
///
/// impl ValueObject for Dimensions {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

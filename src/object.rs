//! Pooled value types and the reset contract

/// Types the pool can hand back out after a reset.
///
/// The provided [`reset`](Reset::reset) overwrites the value with
/// `Self::default()`. Override it when clearing in place is cheaper, as the
/// `Vec` and `String` impls do to keep their allocation.
pub trait Reset: Default {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The object managed by the demonstration driver
///
/// # Examples
///
/// ```
/// use bounded_objectpool::{PooledObject, Reset};
///
/// let mut obj = PooledObject { value: 42 };
/// obj.reset();
/// assert_eq!(obj, PooledObject::default());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PooledObject {
    pub value: i64,
}

impl Reset for PooledObject {}

impl<T> Reset for Vec<T> {
    fn reset(&mut self) {
        self.clear();
    }
}

impl Reset for String {
    fn reset(&mut self) {
        self.clear();
    }
}

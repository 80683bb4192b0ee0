//! Bounded object pool

use crate::config::PoolConfiguration;
use crate::object::Reset;

use parking_lot::Mutex;

/// Thread-safe pool that retains at most `max_size` idle objects
///
/// [`acquire`](Self::acquire) hands out the most recently released object,
/// or builds a fresh `T::default()` when nothing is available. It never
/// blocks waiting for a return. [`release`](Self::release) resets the object
/// and keeps it, unless the pool already holds `max_size` objects, in which
/// case the object is dropped as-is.
///
/// The pool only knows what is available; it does not track borrowed
/// objects. Releasing a clone of an object that is still in use, or an
/// object that never came from this pool, is accepted without complaint.
/// Keeping one holder per object is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use bounded_objectpool::{BoundedPool, PooledObject};
///
/// let pool = BoundedPool::<PooledObject>::new(2);
///
/// let mut obj = pool.acquire();
/// obj.value = 42;
/// pool.release(obj);
///
/// assert_eq!(pool.available_count(), 1);
/// assert_eq!(pool.acquire().value, 0);
/// ```
pub struct BoundedPool<T> {
    available: Mutex<Vec<T>>,
    max_size: usize,
}

impl<T: Reset> BoundedPool<T> {
    /// Create an empty pool retaining at most `max_size` objects
    pub fn new(max_size: usize) -> Self {
        Self {
            available: Mutex::new(Vec::with_capacity(max_size)),
            max_size,
        }
    }

    /// Create an empty pool sized from a configuration
    pub fn with_config(config: &PoolConfiguration) -> Self {
        Self::new(config.max_pool_size)
    }

    /// Take an object out of the pool, or build a new one if it is empty
    pub fn acquire(&self) -> T {
        let reused = self.available.lock().pop();
        // Fresh objects are built after the lock is released.
        reused.unwrap_or_default()
    }

    /// Hand an object back to the pool
    ///
    /// The object is reset and kept if there is room, otherwise dropped.
    pub fn release(&self, mut obj: T) {
        let mut available = self.available.lock();
        if available.len() >= self.max_size {
            return;
        }

        obj.reset();
        available.push(obj);
    }

    /// Number of idle objects currently held
    pub fn available_count(&self) -> usize {
        self.available.lock().len()
    }

    /// Maximum number of idle objects the pool will hold
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn is_empty(&self) -> bool {
        self.available.lock().is_empty()
    }

    /// Whether the next release would be discarded
    pub fn is_full(&self) -> bool {
        self.available.lock().len() >= self.max_size
    }

    /// Drop every idle object. Borrowed objects are unaffected.
    pub fn clear(&self) {
        let drained = std::mem::take(&mut *self.available.lock());
        drop(drained);
    }
}

impl<T: Reset> Default for BoundedPool<T> {
    fn default() -> Self {
        Self::with_config(&PoolConfiguration::default())
    }
}

impl<T> std::fmt::Debug for BoundedPool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedPool")
            .field("available", &self.available.lock().len())
            .field("max_size", &self.max_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::PooledObject;

    #[test]
    fn test_acquire_from_empty_pool_is_default() {
        let pool = BoundedPool::<PooledObject>::new(4);
        assert_eq!(pool.acquire(), PooledObject::default());
        assert_eq!(pool.available_count(), 0);
    }

    #[test]
    fn test_release_resets_kept_object() {
        let pool = BoundedPool::<PooledObject>::new(1);
        pool.release(PooledObject { value: 9 });
        assert_eq!(pool.available_count(), 1);
        assert_eq!(pool.acquire().value, 0);
    }

    #[test]
    fn test_release_on_full_pool_discards() {
        let pool = BoundedPool::<PooledObject>::new(1);
        pool.release(PooledObject { value: 1 });
        assert!(pool.is_full());

        pool.release(PooledObject { value: 2 });
        assert_eq!(pool.available_count(), 1);
    }

    #[test]
    fn test_lifo_order() {
        let pool = BoundedPool::<Vec<u8>>::new(2);
        pool.release(Vec::with_capacity(8));
        pool.release(Vec::with_capacity(32));

        assert!(pool.acquire().capacity() >= 32);
        assert!(pool.acquire().capacity() >= 8);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_zero_capacity() {
        let pool = BoundedPool::<PooledObject>::new(0);
        assert!(pool.is_full());
        pool.release(pool.acquire());
        assert_eq!(pool.available_count(), 0);
    }

    #[test]
    fn test_clear() {
        let pool = BoundedPool::<String>::new(3);
        for _ in 0..3 {
            pool.release(String::from("x"));
        }
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.max_size(), 3);
    }

    #[test]
    fn test_with_config() {
        let config = PoolConfiguration::new().with_max_pool_size(5);
        let pool = BoundedPool::<PooledObject>::with_config(&config);
        assert_eq!(pool.max_size(), 5);
        assert_eq!(BoundedPool::<PooledObject>::default().max_size(), 100);
    }
}

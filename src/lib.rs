//! # Bounded Object Pool
//!
//! Thread-safe, capacity-bounded object pool. Callers borrow objects with
//! [`BoundedPool::acquire`] and hand them back with [`BoundedPool::release`].
//!
//! ## Features
//!
//! - LIFO reuse of the most recently returned object
//! - Lazy construction of fresh objects when the pool is empty
//! - Reset on return via the [`Reset`] trait
//! - Hard cap on retained objects; overflow is discarded
//! - TOML and environment driven configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use bounded_objectpool::{BoundedPool, PooledObject};
//!
//! let pool = BoundedPool::<PooledObject>::new(2);
//! let mut obj = pool.acquire();
//! obj.value = 42;
//! pool.release(obj);
//! assert_eq!(pool.acquire().value, 0);
//! ```

mod pool;
mod object;
mod config;
mod errors;

pub use pool::BoundedPool;
pub use object::{PooledObject, Reset};
pub use config::{PoolConfiguration, MAX_SIZE_ENV};
pub use errors::{PoolError, PoolResult};

// Demonstration driver for the bounded object pool.
// Capacity defaults to 2 and can be overridden with BOUNDED_POOL_MAX_SIZE.
// Set RUST_LOG=debug to see pool sizes around every call.

use bounded_objectpool::{BoundedPool, PoolConfiguration, PoolResult, PooledObject};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn acquire(pool: &BoundedPool<PooledObject>, label: &str) -> PooledObject {
    let before = pool.available_count();
    let obj = pool.acquire();
    if before == 0 {
        info!(object = label, pool_size = before, "Creating a new object");
    } else {
        info!(object = label, pool_size = before, "Reusing an object from the pool");
    }
    obj
}

fn release(pool: &BoundedPool<PooledObject>, label: &str, obj: PooledObject) {
    let before = pool.available_count();
    debug!(object = label, pool_size = before, "Release called");
    pool.release(obj);
    let after = pool.available_count();
    if after > before {
        info!(object = label, pool_size = after, "Object returned to the pool");
    } else {
        warn!(object = label, pool_size = after, "Pool is full, discarding the object");
    }
}

fn main() -> PoolResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PoolConfiguration::new().with_max_pool_size(2).with_env_overrides()?;
    let pool = BoundedPool::<PooledObject>::with_config(&config);
    info!(max_size = pool.max_size(), "Pool created");

    let mut obj1 = acquire(&pool, "obj1");
    obj1.value = 42;
    info!(value = obj1.value, "Object 1 value");

    let obj2 = acquire(&pool, "obj2");
    info!(value = obj2.value, "Object 2 value");

    let mut obj3 = acquire(&pool, "obj3");
    obj3.value = 100;
    info!(value = obj3.value, "Object 3 value");

    release(&pool, "obj1", obj1);
    release(&pool, "obj2", obj2);
    release(&pool, "obj3", obj3);

    let obj4 = acquire(&pool, "obj4");
    info!(value = obj4.value, "Object 4 value");
    release(&pool, "obj4", obj4);

    let obj5 = acquire(&pool, "obj5");
    release(&pool, "obj5", obj5);

    let obj6 = acquire(&pool, "obj6");
    release(&pool, "obj6", obj6);

    info!(pool = ?pool, "Done");
    Ok(())
}

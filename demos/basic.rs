//! Basic usage examples for BoundedPool

use bounded_objectpool::{BoundedPool, PoolConfiguration, PooledObject};

fn main() {
    println!("=== Bounded Object Pool - Basic Examples ===\n");

    // Example 1: Borrow and return
    simple_pool();

    // Example 2: Overflow is discarded
    overflow();

    // Example 3: Buffers keep their allocation
    buffers();

    // Example 4: Pool from TOML
    configured_pool();
}

fn simple_pool() {
    println!("1. Simple Pool:");
    let pool = BoundedPool::<PooledObject>::new(2);

    let mut obj = pool.acquire();
    obj.value = 42;
    println!("   Borrowed object, value set to {}", obj.value);
    pool.release(obj);

    println!("   Available after return: {}", pool.available_count());
    println!("   Value on reuse: {}\n", pool.acquire().value);
}

fn overflow() {
    println!("2. Overflow:");
    let pool = BoundedPool::<PooledObject>::new(2);

    let objects: Vec<_> = (0..3).map(|_| pool.acquire()).collect();
    for obj in objects {
        pool.release(obj);
        println!("   Released, available: {}", pool.available_count());
    }
    println!("   Full: {}\n", pool.is_full());
}

fn buffers() {
    println!("3. Buffers:");
    let pool = BoundedPool::<Vec<u8>>::new(4);

    let mut buf = pool.acquire();
    buf.extend_from_slice(&[0u8; 1024]);
    pool.release(buf);

    let buf = pool.acquire();
    println!("   len = {}, capacity = {}\n", buf.len(), buf.capacity());
}

fn configured_pool() {
    println!("4. Configured Pool:");
    match PoolConfiguration::from_toml_str("max_pool_size = 8") {
        Ok(config) => {
            let pool = BoundedPool::<String>::with_config(&config);
            println!("   {:?}", pool);
        }
        Err(err) => println!("   {}", err),
    }
}

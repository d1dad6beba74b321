//! Persistent key-value storage for the serialized cart.
//!
//! Backends:
//! - [`FileStore`]: one file per key under a directory
//! - [`MemoryStore`]: in-process map (tests and ephemeral carts)

mod error;
mod file;
mod memory;

pub use error::*;
pub use file::*;
pub use memory::*;

/// Durable string storage addressed by key.
///
/// Calls are synchronous; values are always written wholesale.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

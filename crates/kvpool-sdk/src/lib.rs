//! High-level entry point for kvpool.
//!
//! Binds one storage backend to ordered key/value transform chains and
//! hands out named-pool connections. This is the main entry point for
//! applications embedding kvpool.

pub mod connection;
pub mod error;
pub mod store;

pub use connection::Connection;
pub use error::{SdkError, SdkResult};
pub use store::KvPool;

// Re-export the lower layers for embedders.
pub use kvpool_store::{
    Backend, Filesystem, HashAlgorithm, HashedDirectory, HashedDirectoryConfig, Key,
    MemoryBackend, Pool, StdFilesystem, StoreError, Value,
};
pub use kvpool_transform::{HexArmor, Transform, TransformError, ZstdCompress};

//! Pluggable pool storage for kvpool.
//!
//! A uniform `get`/`create`/`delete`/`iter_keys`/`contains` contract
//! ([`Pool`]) implemented by interchangeable backends ([`Backend`]):
//!
//! - [`HashedDirectory`] -- the content-addressed filesystem backend. Keys
//!   are mapped onto a sharded directory tree through a cryptographic digest
//!   of the key, with the raw key bytes stored in a `.key` sidecar so that
//!   enumeration can recover them (the digest is one-way).
//! - [`MemoryBackend`] -- a map-backed reference implementation used to
//!   validate the pool contract without filesystem effects.
//!
//! Values are streamed through [`Value`] handles rather than returned as
//! buffers, so large entries never need to be resident in full.
//!
//! # Design Rules
//!
//! 1. Backends mediate no races beyond shard-directory creation; the last
//!    writer to close a handle wins.
//! 2. Key absence ([`StoreError::NotFound`]) is always distinguishable from
//!    medium failure ([`StoreError::Io`]).
//! 3. The filesystem is an injected capability ([`Filesystem`]), never an
//!    ambient global.
//! 4. No retry logic: every failure propagates to the caller unchanged in
//!    kind.

pub mod error;
pub mod fs;
pub mod hashed;
pub mod memory;
pub mod traits;
pub mod value;

#[cfg(test)]
pub(crate) mod contract;

pub use error::{StoreError, StoreResult};
pub use fs::{Filesystem, FsFile, OpenMode, StdFilesystem};
pub use hashed::{HashAlgorithm, HashedDirectory, HashedDirectoryConfig, HashedDirectoryPool};
pub use memory::{MemoryBackend, MemoryPool};
pub use traits::{Backend, Key, Pool};
pub use value::{FileValue, Value};

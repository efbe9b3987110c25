use crate::error::StoreResult;
use crate::value::Value;

/// Opaque caller-supplied lookup identity.
pub type Key = Vec<u8>;

/// A pluggable storage backend: a factory for named pools.
///
/// Connecting binds a pool name to the backend's configuration. It never
/// touches the underlying storage and cannot fail.
pub trait Backend: Send + Sync {
    /// Bind to the named pool.
    fn connect(&self, pool: &str) -> Box<dyn Pool>;
}

/// A named partition of a key/value store.
///
/// Distinct pools never collide: each pool's entries live in their own
/// namespace under the backend. Pools provide no locking or mutual
/// exclusion; concurrent writers to the same key race and the last one to
/// close its handle wins.
pub trait Pool: Send {
    /// Open the value stored at `key` for streaming access.
    ///
    /// The handle is opened read+write, so later seeks and writes on it are
    /// legal even though this is a read accessor; the handle type is the
    /// same generic one [`create`](Pool::create) returns.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) when
    /// no entry exists, and with [`StoreError::Io`](crate::StoreError::Io)
    /// for any other storage failure.
    fn get(&self, key: &[u8]) -> StoreResult<Box<dyn Value>>;

    /// Establish a fresh, empty value at `key`, replacing any prior entry,
    /// and return a write handle over it.
    fn create(&self, key: &[u8]) -> StoreResult<Box<dyn Value>>;

    /// Remove the entry at `key`.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) when
    /// no entry exists.
    fn delete(&self, key: &[u8]) -> StoreResult<()>;

    /// Whether an entry exists at `key`. Never fails; a missing key is
    /// simply `false`.
    fn contains(&self, key: &[u8]) -> bool;

    /// Lazily enumerate the original keys stored in this pool.
    ///
    /// Single-pass and non-restartable; order is unspecified. Iterating
    /// while the pool is concurrently mutated has undefined results.
    fn iter_keys(&self) -> Box<dyn Iterator<Item = StoreResult<Key>> + Send>;
}

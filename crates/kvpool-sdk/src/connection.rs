use std::io::{Read, Write};
use std::sync::Arc;

use kvpool_store::{Key, Pool, StoreError};
use kvpool_transform::Transform;

use crate::error::{SdkError, SdkResult};

/// A connection to one named pool, with the store's transform chains
/// applied around the raw backend.
///
/// The key pipeline is directional: reads run each key transform's `encode`
/// step over the caller's key, while writes run `decode`. Existing on-disk
/// layouts depend on this orientation, so both paths preserve it exactly;
/// a key transform must be written with that inversion in mind.
///
/// Value transforms run in configured order on both paths: `encode` on
/// write, `decode` on read. Deletion and containment checks pass the
/// caller's key through with no transform applied.
pub struct Connection {
    pool: Box<dyn Pool>,
    key_transforms: Vec<Arc<dyn Transform>>,
    value_transforms: Vec<Arc<dyn Transform>>,
}

impl Connection {
    pub(crate) fn new(
        pool: Box<dyn Pool>,
        key_transforms: Vec<Arc<dyn Transform>>,
        value_transforms: Vec<Arc<dyn Transform>>,
    ) -> Self {
        Self {
            pool,
            key_transforms,
            value_transforms,
        }
    }

    /// Fetch and decode the value stored at `key`.
    ///
    /// Fails with a wrapped [`StoreError::NotFound`] when the key has no
    /// entry.
    pub fn get(&self, key: &[u8]) -> SdkResult<Vec<u8>> {
        let mut backend_key = key.to_vec();
        for transform in &self.key_transforms {
            backend_key = transform.encode(&backend_key)?;
        }

        let mut handle = self.pool.get(&backend_key)?;
        let mut value = Vec::new();
        handle.read_to_end(&mut value).map_err(StoreError::from)?;
        handle.close()?;

        for transform in &self.value_transforms {
            value = transform.decode(&value)?;
        }
        Ok(value)
    }

    /// Like [`get`](Connection::get), but a missing key yields an owned
    /// copy of `default` instead of an error.
    pub fn get_or(&self, key: &[u8], default: &[u8]) -> SdkResult<Vec<u8>> {
        match self.get(key) {
            Ok(value) => Ok(value),
            Err(SdkError::Store(StoreError::NotFound(_))) => Ok(default.to_vec()),
            Err(err) => Err(err),
        }
    }

    /// Encode and store `value` at `key`, replacing any prior entry.
    pub fn set(&self, key: &[u8], value: &[u8]) -> SdkResult<()> {
        let mut backend_key = key.to_vec();
        for transform in &self.key_transforms {
            backend_key = transform.decode(&backend_key)?;
        }

        let mut handle = self.pool.create(&backend_key)?;
        let mut encoded = value.to_vec();
        for transform in &self.value_transforms {
            encoded = transform.encode(&encoded)?;
        }
        handle.write_all(&encoded).map_err(StoreError::from)?;
        handle.close()?;
        Ok(())
    }

    /// Remove the entry at `key`. The key is not transformed.
    pub fn delete(&self, key: &[u8]) -> SdkResult<()> {
        Ok(self.pool.delete(key)?)
    }

    /// Whether an entry exists at `key`. The key is not transformed.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.pool.contains(key)
    }

    /// Lazily enumerate the pool's stored keys, as the backend holds them
    /// (no transform is applied).
    pub fn iter_keys(&self) -> Box<dyn Iterator<Item = SdkResult<Key>> + Send> {
        Box::new(self.pool.iter_keys().map(|item| item.map_err(SdkError::from)))
    }
}

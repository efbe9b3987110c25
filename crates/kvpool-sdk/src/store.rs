use std::sync::Arc;

use kvpool_store::Backend;
use kvpool_transform::Transform;

use crate::connection::Connection;

/// A key/value store: one backend plus ordered key and value transform
/// chains applied above it.
///
/// Chain order is significant and preserved exactly on every path;
/// transforms are not commutative in general.
pub struct KvPool {
    backend: Arc<dyn Backend>,
    key_transforms: Vec<Arc<dyn Transform>>,
    value_transforms: Vec<Arc<dyn Transform>>,
}

impl KvPool {
    /// A store with no transforms configured.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::with_transforms(backend, Vec::new(), Vec::new())
    }

    /// A store threading keys and values through the given chains.
    pub fn with_transforms(
        backend: Arc<dyn Backend>,
        key_transforms: Vec<Arc<dyn Transform>>,
        value_transforms: Vec<Arc<dyn Transform>>,
    ) -> Self {
        Self {
            backend,
            key_transforms,
            value_transforms,
        }
    }

    /// Bind to the named pool. Does not touch the underlying storage.
    pub fn connect(&self, pool: &str) -> Connection {
        Connection::new(
            self.backend.connect(pool),
            self.key_transforms.clone(),
            self.value_transforms.clone(),
        )
    }
}

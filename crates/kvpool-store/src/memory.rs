//! In-memory reference backend.
//!
//! Backs each pool with a private in-process map. Useful for validating the
//! pool contract without filesystem effects and for embedding in tests.

use std::collections::HashMap;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::sync::{Arc, RwLock};

use crate::error::{StoreError, StoreResult};
use crate::traits::{Backend, Key, Pool};
use crate::value::Value;

type SharedMap = Arc<RwLock<HashMap<Key, Vec<u8>>>>;

/// Map-backed storage backend.
///
/// Each `connect` call yields a pool over its own fresh map: pools obtained
/// from separate connects do not share state, even under the same name.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryBackend;

impl MemoryBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for MemoryBackend {
    fn connect(&self, _pool: &str) -> Box<dyn Pool> {
        Box::new(MemoryPool {
            data: Arc::new(RwLock::new(HashMap::new())),
        })
    }
}

/// A pool bound to a [`MemoryBackend`].
pub struct MemoryPool {
    data: SharedMap,
}

impl Pool for MemoryPool {
    fn get(&self, key: &[u8]) -> StoreResult<Box<dyn Value>> {
        let map = self.data.read().expect("lock poisoned");
        let Some(stored) = map.get(key) else {
            return Err(StoreError::NotFound(key.to_vec()));
        };
        Ok(Box::new(MemoryValue::new(
            Arc::clone(&self.data),
            key.to_vec(),
            stored.clone(),
        )))
    }

    fn create(&self, key: &[u8]) -> StoreResult<Box<dyn Value>> {
        self.data
            .write()
            .expect("lock poisoned")
            .insert(key.to_vec(), Vec::new());
        Ok(Box::new(MemoryValue::new(
            Arc::clone(&self.data),
            key.to_vec(),
            Vec::new(),
        )))
    }

    fn delete(&self, key: &[u8]) -> StoreResult<()> {
        match self.data.write().expect("lock poisoned").remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(key.to_vec())),
        }
    }

    fn contains(&self, key: &[u8]) -> bool {
        self.data.read().expect("lock poisoned").contains_key(key)
    }

    fn iter_keys(&self) -> Box<dyn Iterator<Item = StoreResult<Key>> + Send> {
        // Snapshot at call time; later mutations are not reflected.
        let keys: Vec<Key> = self
            .data
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect();
        Box::new(keys.into_iter().map(Ok))
    }
}

/// Handle over a value in a [`MemoryPool`].
///
/// Writes land in a private buffer and are copied back into the pool's map
/// on flush or close, so they stay invisible to other handles until then.
/// The write-back is skipped when the key has been deleted in the meantime,
/// so a late close does not resurrect a deleted entry. Dropping an unclosed
/// handle performs the write-back once.
struct MemoryValue {
    data: SharedMap,
    key: Key,
    cursor: Cursor<Vec<u8>>,
    closed: bool,
}

impl MemoryValue {
    fn new(data: SharedMap, key: Key, contents: Vec<u8>) -> Self {
        Self {
            data,
            key,
            cursor: Cursor::new(contents),
            closed: false,
        }
    }

    fn write_back(&mut self) {
        let mut map = self.data.write().expect("lock poisoned");
        if let Some(stored) = map.get_mut(&self.key) {
            stored.clear();
            stored.extend_from_slice(self.cursor.get_ref());
        }
    }
}

impl Read for MemoryValue {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Write for MemoryValue {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.cursor.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_back();
        Ok(())
    }
}

impl Seek for MemoryValue {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl Value for MemoryValue {
    fn close(mut self: Box<Self>) -> StoreResult<()> {
        self.write_back();
        self.closed = true;
        Ok(())
    }
}

impl Drop for MemoryValue {
    fn drop(&mut self) {
        if !self.closed {
            self.write_back();
        }
    }
}

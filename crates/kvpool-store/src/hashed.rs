//! Content-addressed hashed-directory backend.
//!
//! Maps arbitrary binary keys onto a two-level sharded directory tree keyed
//! by a cryptographic digest of the key:
//!
//! ```text
//! {base_dir}/{pool}/{digest[..shard_len]}/{digest}        value bytes
//! {base_dir}/{pool}/{digest[..shard_len]}/{digest}.key    raw key bytes
//! ```
//!
//! The digest is one-way, so the raw key is written to a `.key` sidecar next
//! to the value; enumeration recovers original keys by scanning sidecars.
//! Sharding on a digest prefix bounds per-directory fan-out.
//!
//! Two distinct keys with identical digests silently overwrite one another's
//! entries; the backend performs no collision detection. This is a known
//! limitation of the layout, not something callers can opt out of.

use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha1::{Digest, Sha1};
use sha2::Sha256;
use tracing::{debug, trace};

use crate::error::{StoreError, StoreResult};
use crate::fs::{Filesystem, OpenMode, StdFilesystem};
use crate::traits::{Backend, Key, Pool};
use crate::value::{FileValue, Value};

/// Suffix distinguishing key sidecar files from value files.
const KEY_SUFFIX: &str = ".key";

/// Digest algorithm used for key-to-path derivation.
///
/// The digest is used purely to derive paths; the stored identity is the raw
/// key in the sidecar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// 160-bit SHA-1 (40 hex characters). The default on-disk layout.
    #[default]
    Sha1,
    /// 256-bit SHA-2 (64 hex characters).
    Sha256,
}

impl HashAlgorithm {
    /// Lowercase hex digest of `data`.
    pub fn hex_digest(&self, data: &[u8]) -> String {
        match self {
            Self::Sha1 => hex::encode(Sha1::digest(data)),
            Self::Sha256 => hex::encode(Sha256::digest(data)),
        }
    }
}

/// Constructor-time configuration for [`HashedDirectory`].
///
/// Immutable once the backend is built.
#[derive(Clone, Debug)]
pub struct HashedDirectoryConfig {
    /// Root directory holding one subdirectory per pool.
    pub base_dir: PathBuf,
    /// Unix mode bits for created value and key files.
    pub file_mode: u32,
    /// Unix mode bits for created shard directories.
    pub dir_mode: u32,
    /// Number of leading digest characters naming the shard directory,
    /// clamped to the digest length.
    pub shard_len: usize,
    /// Digest algorithm for key-to-path derivation.
    pub algorithm: HashAlgorithm,
}

impl HashedDirectoryConfig {
    /// Configuration with the standard defaults: `0o644` files, `0o755`
    /// directories, 2-character shards, SHA-1 digests.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_mode: 0o644,
            dir_mode: 0o755,
            shard_len: 2,
            algorithm: HashAlgorithm::default(),
        }
    }
}

/// Filesystem-backed storage backend with a hashed-directory layout.
pub struct HashedDirectory {
    config: HashedDirectoryConfig,
    fs: Arc<dyn Filesystem>,
}

impl HashedDirectory {
    /// Build a backend over an explicitly injected filesystem capability.
    pub fn new(config: HashedDirectoryConfig, fs: Arc<dyn Filesystem>) -> Self {
        Self { config, fs }
    }

    /// Build a backend over the real OS filesystem.
    pub fn with_std_fs(config: HashedDirectoryConfig) -> Self {
        Self::new(config, Arc::new(StdFilesystem::new()))
    }
}

impl Backend for HashedDirectory {
    fn connect(&self, pool: &str) -> Box<dyn Pool> {
        Box::new(HashedDirectoryPool {
            pool: pool.to_string(),
            config: self.config.clone(),
            fs: Arc::clone(&self.fs),
        })
    }
}

/// A pool bound to a [`HashedDirectory`] backend.
pub struct HashedDirectoryPool {
    pool: String,
    config: HashedDirectoryConfig,
    fs: Arc<dyn Filesystem>,
}

impl HashedDirectoryPool {
    fn digest(&self, key: &[u8]) -> String {
        self.config.algorithm.hex_digest(key)
    }

    fn pool_dir(&self) -> PathBuf {
        self.config.base_dir.join(&self.pool)
    }

    fn shard_dir(&self, digest: &str) -> PathBuf {
        let shard = &digest[..self.config.shard_len.min(digest.len())];
        self.pool_dir().join(shard)
    }

    fn value_path(&self, digest: &str) -> PathBuf {
        self.shard_dir(digest).join(digest)
    }

    fn key_path(&self, digest: &str) -> PathBuf {
        self.shard_dir(digest).join(format!("{digest}{KEY_SUFFIX}"))
    }

    /// Write the raw key bytes to the sidecar, replacing any prior one.
    fn write_key_sidecar(&self, digest: &str, key: &[u8]) -> StoreResult<()> {
        let mut file =
            self.fs
                .open(&self.key_path(digest), OpenMode::Truncate, self.config.file_mode)?;
        file.write_all(key)?;
        file.flush()?;
        Ok(())
    }
}

impl Pool for HashedDirectoryPool {
    fn get(&self, key: &[u8]) -> StoreResult<Box<dyn Value>> {
        let digest = self.digest(key);
        let path = self.value_path(&digest);
        trace!(pool = %self.pool, digest = %digest, "opening value");
        match self.fs.open(&path, OpenMode::ReadWrite, self.config.file_mode) {
            Ok(file) => Ok(Box::new(FileValue::new(file))),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_vec()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn create(&self, key: &[u8]) -> StoreResult<Box<dyn Value>> {
        let digest = self.digest(key);
        let shard = self.shard_dir(&digest);
        if !self.fs.is_dir(&shard) {
            match self.fs.make_dir(&shard, self.config.dir_mode) {
                Ok(()) => {}
                // Lost the creation race to another writer; the directory
                // exists either way.
                Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
                Err(err) => return Err(err.into()),
            }
        }

        let file =
            self.fs
                .open(&self.value_path(&digest), OpenMode::Truncate, self.config.file_mode)?;
        self.write_key_sidecar(&digest, key)?;
        debug!(pool = %self.pool, digest = %digest, "created value entry");
        Ok(Box::new(FileValue::new(file)))
    }

    fn delete(&self, key: &[u8]) -> StoreResult<()> {
        let digest = self.digest(key);
        match self.fs.remove_file(&self.value_path(&digest)) {
            Ok(()) => {
                debug!(pool = %self.pool, digest = %digest, "deleted value entry");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_vec()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn contains(&self, key: &[u8]) -> bool {
        let digest = self.digest(key);
        self.fs.is_file(&self.value_path(&digest))
    }

    fn iter_keys(&self) -> Box<dyn Iterator<Item = StoreResult<Key>> + Send> {
        let pool_dir = self.pool_dir();
        // A pool with no entries may not have a directory yet.
        if !self.fs.is_dir(&pool_dir) {
            return Box::new(std::iter::empty());
        }
        let walker = self.fs.walk(&pool_dir);
        let fs = Arc::clone(&self.fs);
        let file_mode = self.config.file_mode;
        Box::new(walker.filter_map(move |entry| match entry {
            Ok(path) => {
                let is_sidecar = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.ends_with(KEY_SUFFIX));
                if !is_sidecar {
                    return None;
                }
                Some(read_key_file(fs.as_ref(), &path, file_mode))
            }
            Err(err) => Some(Err(err.into())),
        }))
    }
}

/// Read the full contents of a key sidecar, recovering the original key.
fn read_key_file(fs: &dyn Filesystem, path: &Path, file_mode: u32) -> StoreResult<Key> {
    let mut file = fs.open(path, OpenMode::Read, file_mode)?;
    let mut key = Vec::new();
    file.read_to_end(&mut key)?;
    Ok(key)
}

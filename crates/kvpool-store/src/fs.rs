//! Injectable filesystem capability.
//!
//! A narrow interface over the directory/file primitives filesystem-backed
//! pools need, so the real OS filesystem can be swapped for a test double.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// How to open a value or key file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenMode {
    /// Open an existing file read-only; fails if absent.
    Read,
    /// Open an existing file for reading and writing; fails if absent.
    ReadWrite,
    /// Create or truncate a file, readable and writable.
    Truncate,
}

/// File handle contract returned by [`Filesystem::open`].
pub trait FsFile: Read + Write + Seek + Send {}

impl<T: Read + Write + Seek + Send> FsFile for T {}

/// Directory/file primitives consumed by filesystem-backed pools.
pub trait Filesystem: Send + Sync {
    /// Open the file at `path`. `permissions` are Unix mode bits applied to
    /// newly created files; they are ignored when the file already exists
    /// and on non-Unix targets.
    fn open(&self, path: &Path, mode: OpenMode, permissions: u32) -> io::Result<Box<dyn FsFile>>;

    /// Create the directory at `path` along with any missing parents,
    /// applying `permissions` (Unix mode bits) to each created directory.
    fn make_dir(&self, path: &Path, permissions: u32) -> io::Result<()>;

    /// Whether `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Remove the file at `path`.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Lazily enumerate every regular file under `path`, recursively.
    /// Traversal failures surface as `Err` items.
    fn walk(&self, path: &Path) -> Box<dyn Iterator<Item = io::Result<PathBuf>> + Send>;
}

/// The real OS filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFilesystem;

impl StdFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for StdFilesystem {
    fn open(&self, path: &Path, mode: OpenMode, permissions: u32) -> io::Result<Box<dyn FsFile>> {
        let mut options = OpenOptions::new();
        match mode {
            OpenMode::Read => {
                options.read(true);
            }
            OpenMode::ReadWrite => {
                options.read(true).write(true);
            }
            OpenMode::Truncate => {
                options.read(true).write(true).create(true).truncate(true);
            }
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(permissions);
        }
        #[cfg(not(unix))]
        let _ = permissions;
        Ok(Box::new(options.open(path)?))
    }

    fn make_dir(&self, path: &Path, permissions: u32) -> io::Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(permissions);
        }
        #[cfg(not(unix))]
        let _ = permissions;
        builder.create(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn walk(&self, path: &Path) -> Box<dyn Iterator<Item = io::Result<PathBuf>> + Send> {
        Box::new(WalkDir::new(path).into_iter().filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(err.into())),
        }))
    }
}

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::error::StoreResult;
use crate::fs::FsFile;

/// An open handle onto a stored value.
///
/// The handle owns its underlying resource exclusively for its lifetime.
/// Buffered writes are guaranteed visible to other readers after `flush`
/// (from [`Write`]) or [`close`](Value::close). Dropping a handle without
/// closing still releases the resource; backends with write-back-on-close
/// semantics perform the write-back exactly once either way.
///
/// Handles are not thread-safe and are not meant to be shared across
/// concurrent writers to the same key.
pub trait Value: Read + Write + Seek + Send {
    /// Flush outstanding writes and release the handle.
    fn close(self: Box<Self>) -> StoreResult<()>;
}

/// Pass-through proxy over an open file.
///
/// Gives filesystem-backed pools a uniform [`Value`] handle regardless of
/// the concrete [`FsFile`] behind it.
pub struct FileValue {
    file: Box<dyn FsFile>,
}

impl FileValue {
    pub fn new(file: Box<dyn FsFile>) -> Self {
        Self { file }
    }
}

impl Read for FileValue {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for FileValue {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for FileValue {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

impl Value for FileValue {
    fn close(mut self: Box<Self>) -> StoreResult<()> {
        self.file.flush()?;
        Ok(())
    }
}

//! Directory listing for the usage walker.

use std::io;
use std::path::Path;

use crate::DirEntry;

/// Directory listing.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` so
/// independent scans can share one filesystem handle.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsDir`.
pub trait FsDir: Send + Sync {
    /// List directory contents.
    ///
    /// The outer `Result` is "can I open this directory?"; each item's
    /// `Result` is "can I read the next entry?". Implementations may or may
    /// not yield `.` and `..`.
    ///
    /// # Errors
    ///
    /// - [`io::ErrorKind::NotFound`] if the directory does not exist
    /// - any other OS error when the directory cannot be opened
    fn read_dir(&self, path: &Path) -> io::Result<ReadDirIter>;
}

/// Iterator over directory entries.
///
/// Wraps a boxed iterator so native and in-memory listings share one type.
pub struct ReadDirIter(Box<dyn Iterator<Item = io::Result<DirEntry>> + Send + 'static>);

impl ReadDirIter {
    /// Create from any compatible iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = io::Result<DirEntry>> + Send + 'static,
    {
        Self(Box::new(iter))
    }

    /// Create from a pre-collected vector.
    pub fn from_vec(entries: Vec<io::Result<DirEntry>>) -> Self {
        Self(Box::new(entries.into_iter()))
    }
}

impl Iterator for ReadDirIter {
    type Item = io::Result<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

//! Non-following metadata lookup.

use std::io;
use std::path::Path;

use crate::Metadata;

/// `lstat`-style metadata.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsStat`.
pub trait FsStat: Send + Sync {
    /// Get metadata without following symlinks.
    ///
    /// If `path` is a symlink, returns the metadata of the link itself.
    ///
    /// # Errors
    ///
    /// - [`io::ErrorKind::NotFound`] if `path` does not exist
    fn symlink_metadata(&self, path: &Path) -> io::Result<Metadata>;
}

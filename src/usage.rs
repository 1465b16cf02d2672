//! Usage of a single counted root.

use tracing::trace;

use crate::error::is_vanished;
use crate::{CountedPath, DirectoryWalker, Fs, QuotaError};

/// Bytes used by one root.
///
/// A file root is measured with one `lstat`; a directory root is walked
/// with [`DirectoryWalker`]. A missing root of either kind counts as zero.
///
/// # Errors
///
/// [`QuotaError::Io`] for any failure other than not-found.
///
/// # Example
///
/// ```rust
/// use dirsize_quota::{path_usage, CountedPath, NativeFs};
///
/// let usage = path_usage(&NativeFs, &CountedPath::file("/nonexistent/mbox")).unwrap();
/// assert_eq!(usage, 0);
/// ```
pub fn path_usage<F: Fs + ?Sized>(fs: &F, root: &CountedPath) -> Result<u64, QuotaError> {
    if !root.is_file {
        return DirectoryWalker::new(fs).usage(&root.path);
    }
    match fs.symlink_metadata(&root.path) {
        Ok(meta) => Ok(meta.size),
        Err(e) if is_vanished(&e) => {
            trace!(path = %root.path.display(), "mailbox file vanished");
            Ok(0)
        }
        Err(e) => Err(QuotaError::io("lstat", &root.path, e)),
    }
}

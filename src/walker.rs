//! Directory-tree usage walker.
//!
//! Sums apparent sizes of everything under a directory without following
//! symlinks. Pending directories live on an explicit stack, so depth is
//! bounded by heap rather than by the thread's call stack.
//!
//! Absence is benign at every step: a root, subdirectory or entry that
//! disappears while the walk runs contributes zero. Any other failure ends
//! the walk and no partial total is returned.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::is_vanished;
use crate::{Fs, QuotaError};

/// Recursive usage of one directory tree.
///
/// Holds nothing but a filesystem reference; every [`usage`](Self::usage)
/// call owns its accumulator, so one walker may serve concurrent scans.
#[derive(Debug, Clone, Copy)]
pub struct DirectoryWalker<'a, F: ?Sized> {
    fs: &'a F,
}

impl<'a, F: Fs + ?Sized> DirectoryWalker<'a, F> {
    /// Walker over `fs`.
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Total bytes under `dir`.
    ///
    /// Returns `Ok(0)` if `dir` does not exist.
    ///
    /// # Errors
    ///
    /// [`QuotaError::Io`] with operation `opendir`, `readdir` or `lstat` for
    /// any failure other than not-found.
    pub fn usage(&self, dir: &Path) -> Result<u64, QuotaError> {
        let mut total = 0u64;
        let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            let entries = match self.fs.read_dir(&current) {
                Ok(entries) => entries,
                Err(e) if is_vanished(&e) => {
                    trace!(path = %current.display(), "directory vanished");
                    continue;
                }
                Err(e) => return Err(QuotaError::io("opendir", &current, e)),
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) if is_vanished(&e) => break,
                    Err(e) => return Err(QuotaError::io("readdir", &current, e)),
                };
                if entry.is_dot() {
                    continue;
                }

                let meta = match self.fs.symlink_metadata(&entry.path) {
                    Ok(meta) => meta,
                    Err(e) if is_vanished(&e) => {
                        trace!(path = %entry.path.display(), "entry vanished");
                        continue;
                    }
                    Err(e) => return Err(QuotaError::io("lstat", &entry.path, e)),
                };

                if meta.is_dir() {
                    pending.push(entry.path);
                } else {
                    total = total.saturating_add(meta.size);
                }
            }
        }

        debug!(path = %dir.display(), bytes = total, "directory usage");
        Ok(total)
    }
}

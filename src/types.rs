//! Core types for directory-size quota measurement.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::QuotaError;

/// Message reported alongside [`QuotaGetResult::UnknownResource`].
pub const UNKNOWN_RESOURCE_MESSAGE: &str = "Unknown quota resource";

/// Type of a filesystem entry, as seen without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
    /// Device, fifo, socket or anything else.
    Other,
}

/// The slice of `lstat` output the walker needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Type of the entry.
    pub file_type: FileType,
    /// Apparent size in bytes. For a symlink, the size of the link itself.
    pub size: u64,
}

impl Metadata {
    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// A directory entry returned from [`FsDir::read_dir`](crate::FsDir::read_dir).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Name of the entry (filename only).
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
}

impl DirEntry {
    /// `.` and `..` pseudo-entries.
    pub fn is_dot(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

/// One root contributing to the measured total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountedPath {
    /// Filesystem location.
    pub path: PathBuf,
    /// `true` to measure one file, `false` to walk a directory tree.
    pub is_file: bool,
}

impl CountedPath {
    /// A root measured by a single `lstat`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_file: true,
        }
    }

    /// A root measured by walking the tree beneath it.
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_file: false,
        }
    }
}

/// Which location of a mailbox list is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// The directory holding the mailbox hierarchy.
    Dir,
    /// The mailbox itself (a file for single-file formats).
    Mailbox,
}

/// Quota resources known to the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource {
    /// Storage measured in bytes.
    StorageBytes,
    /// Storage measured in kilobytes.
    StorageKilobytes,
    /// Number of messages.
    Messages,
}

impl Resource {
    /// The framework-visible resource name.
    pub const fn name(self) -> &'static str {
        match self {
            Resource::StorageBytes => "STORAGE_BYTES",
            Resource::StorageKilobytes => "STORAGE",
            Resource::Messages => "MESSAGE",
        }
    }

    /// Case-insensitive match against a requested name.
    pub fn matches(self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a resource query.
#[derive(Debug)]
pub enum QuotaGetResult {
    /// The measured value.
    Limited(u64),
    /// This backend does not provide the requested resource. Not an error;
    /// the caller may ask another backend.
    UnknownResource,
    /// Measurement failed. The caller must treat usage as indeterminate.
    InternalError(QuotaError),
}

impl QuotaGetResult {
    /// The measured value, if any.
    pub fn value(&self) -> Option<u64> {
        match self {
            QuotaGetResult::Limited(v) => Some(*v),
            _ => None,
        }
    }

    /// Human-readable message for non-value results.
    pub fn message(&self) -> Option<String> {
        match self {
            QuotaGetResult::Limited(_) => None,
            QuotaGetResult::UnknownResource => Some(UNKNOWN_RESOURCE_MESSAGE.to_string()),
            QuotaGetResult::InternalError(err) => Some(err.to_string()),
        }
    }

    /// Returns `true` for [`QuotaGetResult::UnknownResource`].
    pub fn is_unknown_resource(&self) -> bool {
        matches!(self, QuotaGetResult::UnknownResource)
    }
}

/// Changes made by a completed mail transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuotaTransaction {
    /// Net change in stored bytes.
    pub bytes_delta: i64,
    /// Net change in message count.
    pub count_delta: i64,
}

/// Per-root breakdown of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageReport {
    /// Sum over all roots.
    pub total: u64,
    /// Each deduplicated root with its own usage, in scan order.
    pub roots: Vec<RootUsage>,
}

/// Usage of one deduplicated root.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootUsage {
    /// The measured root.
    pub root: CountedPath,
    /// Bytes found under it.
    pub bytes: u64,
}

impl UsageReport {
    /// Usage recorded for `path`, if it was one of the scanned roots.
    pub fn bytes_for(&self, path: &Path) -> Option<u64> {
        self.roots
            .iter()
            .find(|r| r.root.path == path)
            .map(|r| r.bytes)
    }

    /// Serialize the report as JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

//! Error types for directory-size quota measurement.

use std::io;
use std::path::{Path, PathBuf};

/// Quota backend error type.
///
/// Filesystem failures keep the operation, the path and the OS error as
/// separate fields; they are only turned into text when a result leaves the
/// backend (see [`QuotaGetResult::message`](crate::QuotaGetResult::message)).
///
/// A missing file or directory is never reported through this type. The
/// walker treats it as zero usage.
///
/// # Examples
///
/// ```rust
/// use dirsize_quota::QuotaError;
/// use std::io;
/// use std::path::PathBuf;
///
/// let err = QuotaError::Io {
///     operation: "opendir",
///     path: PathBuf::from("/var/mail/alice"),
///     source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
/// };
/// assert_eq!(err.to_string(), "opendir(/var/mail/alice) failed: Permission denied");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum QuotaError {
    /// A filesystem call failed for a reason other than the path being absent.
    #[error("{operation}({}) failed: {source}", path.display())]
    Io {
        /// The failing call (`opendir`, `readdir`, `lstat`).
        operation: &'static str,
        /// The path involved in the call.
        path: PathBuf,
        /// The OS-reported failure.
        #[source]
        source: io::Error,
    },

    /// A backend argument could not be parsed.
    #[error("invalid quota argument {arg:?}: {reason}")]
    InvalidArgument {
        /// The offending argument token.
        arg: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// No backend is registered under the requested name.
    #[error("unknown quota backend: {name}")]
    UnknownBackend {
        /// The requested backend name.
        name: String,
    },

    /// The backend was queried before `init` or after `deinit`.
    #[error("quota backend not initialized")]
    NotInitialized,
}

impl QuotaError {
    pub(crate) fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        QuotaError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path involved, for filesystem errors.
    pub fn path(&self) -> Option<&Path> {
        match self {
            QuotaError::Io { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The raw OS error code, when the failure came from the OS.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            QuotaError::Io { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

/// Whether an I/O error only means "the path is gone".
///
/// Entries that vanish mid-scan are expected when mailboxes are deleted
/// concurrently.
pub(crate) fn is_vanished(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_embeds_operation_path_and_reason() {
        let err = QuotaError::io(
            "lstat",
            Path::new("/var/mail/bob/cur"),
            io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "lstat(/var/mail/bob/cur) failed: Permission denied"
        );
    }

    #[test]
    fn io_error_display_includes_os_text() {
        let err = QuotaError::io(
            "opendir",
            Path::new("/x"),
            io::Error::from_raw_os_error(2),
        );
        let text = err.to_string();
        assert!(text.starts_with("opendir(/x) failed: "));
        assert!(text.contains("os error 2"));
        assert_eq!(err.raw_os_error(), Some(2));
    }

    #[test]
    fn path_accessor() {
        let err = QuotaError::io("opendir", Path::new("/a"), io::Error::other("boom"));
        assert_eq!(err.path(), Some(Path::new("/a")));
        assert_eq!(QuotaError::NotInitialized.path(), None);
        assert_eq!(QuotaError::NotInitialized.raw_os_error(), None);
    }

    #[test]
    fn invalid_argument_display() {
        let err = QuotaError::InvalidArgument {
            arg: "bogus".into(),
            reason: "unknown parameter",
        };
        assert_eq!(
            err.to_string(),
            "invalid quota argument \"bogus\": unknown parameter"
        );
    }

    #[test]
    fn unknown_backend_display() {
        let err = QuotaError::UnknownBackend {
            name: "maildir".into(),
        };
        assert_eq!(err.to_string(), "unknown quota backend: maildir");
    }

    #[test]
    fn vanished_only_for_not_found() {
        assert!(is_vanished(&io::Error::from(io::ErrorKind::NotFound)));
        assert!(!is_vanished(&io::Error::from(
            io::ErrorKind::PermissionDenied
        )));
    }
}

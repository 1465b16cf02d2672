//! Usage of a whole quota root.
//!
//! Two phases per query:
//!
//! ```text
//! visible namespaces ──▶ root dir + INBOX ──▶ PathSet (dedup)
//!                                                │
//!                        total ◀── path_usage ◀──┘
//! ```
//!
//! INBOX is looked up separately because it often lives outside the
//! namespace root (an mbox spool file), and just as often inside it.

use tracing::debug;

use crate::{
    Fs, Namespace, PathSet, PathType, QuotaError, RootSettings, RootUsage, UsageReport,
    path_usage,
};

/// Measures every visible namespace of one quota root.
///
/// Borrows its inputs and keeps no state between calls.
///
/// # Example
///
/// ```rust
/// use dirsize_quota::{Namespace, NativeFs, QuotaRootScanner, RootSettings, StaticNamespace};
///
/// let settings = RootSettings::default();
/// let ns = StaticNamespace::new("/nonexistent/mail/alice");
/// let scanner = QuotaRootScanner::new(&NativeFs, &settings);
/// assert_eq!(scanner.total_usage(&[&ns as &dyn Namespace]).unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuotaRootScanner<'a, F: ?Sized> {
    fs: &'a F,
    settings: &'a RootSettings,
}

impl<'a, F: Fs + ?Sized> QuotaRootScanner<'a, F> {
    /// Scanner for the root described by `settings`.
    pub fn new(fs: &'a F, settings: &'a RootSettings) -> Self {
        Self { fs, settings }
    }

    /// Deduplicated roots contributed by the visible namespaces.
    pub fn collect_paths(&self, namespaces: &[&dyn Namespace]) -> PathSet {
        let mut paths = PathSet::new();
        for ns in namespaces {
            if !self.settings.is_namespace_visible(*ns) {
                continue;
            }
            let is_file = ns.is_file_based_storage();
            if let Some(root) = ns.root_path(PathType::Dir) {
                paths.add(root, false);
            }
            if let Some(inbox) = ns.mailbox_path("INBOX", PathType::Mailbox) {
                paths.add(inbox, is_file);
            }
        }
        paths
    }

    /// Total bytes used under the root.
    ///
    /// # Errors
    ///
    /// The first fatal [`QuotaError::Io`] met while measuring; no partial
    /// total is returned.
    pub fn total_usage(&self, namespaces: &[&dyn Namespace]) -> Result<u64, QuotaError> {
        let paths = self.collect_paths(namespaces);
        let mut total = 0u64;
        for root in &paths {
            total = total.saturating_add(path_usage(self.fs, root)?);
        }
        debug!(roots = paths.len(), bytes = total, "quota root usage");
        Ok(total)
    }

    /// Like [`total_usage`](Self::total_usage), with the usage of each root.
    ///
    /// # Errors
    ///
    /// Same as [`total_usage`](Self::total_usage).
    pub fn report(&self, namespaces: &[&dyn Namespace]) -> Result<UsageReport, QuotaError> {
        let mut report = UsageReport::default();
        for root in self.collect_paths(namespaces).into_vec() {
            let bytes = path_usage(self.fs, &root)?;
            report.total = report.total.saturating_add(bytes);
            report.roots.push(RootUsage { root, bytes });
        }
        debug!(roots = report.roots.len(), bytes = report.total, "quota root usage");
        Ok(report)
    }
}

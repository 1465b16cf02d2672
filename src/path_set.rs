//! Deduplicated set of roots to measure.

use std::path::{Path, PathBuf};

use crate::CountedPath;

/// Minimal set of roots, none nested inside another.
///
/// Built fresh for every scan. Overlap is decided on the raw path bytes:
///
/// - a candidate is dropped when an existing entry is a literal prefix of it;
/// - an existing entry is dropped when the candidate is a prefix of it
///   *followed by `/`*.
///
/// The first rule has no separator check, so `/mail` already in the set also
/// swallows a later `/mailarchive`, while inserting `/mailarchive` first and
/// `/mail` second keeps both. Real ancestor relations give the same set in
/// any insertion order.
///
/// # Example
///
/// ```rust
/// use dirsize_quota::PathSet;
///
/// let mut set = PathSet::new();
/// set.add("/var/mail/alice/INBOX", true);
/// set.add("/var/mail/alice", false);
/// set.add("/var/mail/alice", false);
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    entries: Vec<CountedPath>,
}

impl PathSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate root, keeping the no-overlap invariant.
    ///
    /// Returns `false` if an existing entry already covers `path`; the set
    /// is then left untouched.
    pub fn add(&mut self, path: impl Into<PathBuf>, is_file: bool) -> bool {
        let path = path.into();
        let candidate = path.as_os_str().as_encoded_bytes();

        let mut subsumed = Vec::new();
        for (i, existing) in self.entries.iter().enumerate() {
            let existing = existing.path.as_os_str().as_encoded_bytes();
            if candidate.starts_with(existing) {
                tracing::trace!(path = %path.display(), "already counted");
                return false;
            }
            if existing.starts_with(candidate) && existing.get(candidate.len()) == Some(&b'/') {
                subsumed.push(i);
            }
        }

        for i in subsumed.into_iter().rev() {
            let dropped = self.entries.remove(i);
            tracing::trace!(
                path = %dropped.path.display(),
                parent = %path.display(),
                "dropping nested root"
            );
        }
        self.entries.push(CountedPath { path, is_file });
        true
    }

    /// Number of roots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no roots were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Roots in their final order.
    pub fn iter(&self) -> std::slice::Iter<'_, CountedPath> {
        self.entries.iter()
    }

    /// Whether `path` is one of the roots (exact match).
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    /// Consume the set, returning its roots.
    pub fn into_vec(self) -> Vec<CountedPath> {
        self.entries
    }
}

impl Extend<CountedPath> for PathSet {
    fn extend<I: IntoIterator<Item = CountedPath>>(&mut self, iter: I) {
        for cp in iter {
            self.add(cp.path, cp.is_file);
        }
    }
}

impl FromIterator<CountedPath> for PathSet {
    fn from_iter<I: IntoIterator<Item = CountedPath>>(iter: I) -> Self {
        let mut set = PathSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a CountedPath;
    type IntoIter = std::slice::Iter<'a, CountedPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

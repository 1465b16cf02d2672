//! # Namespace Capabilities
//!
//! What the scanner needs to know about a mail namespace, expressed as
//! lookups. The mail storage subsystem implements [`Namespace`]; this crate
//! only consumes the answers.
//!
//! | Method | Answers |
//! |--------|---------|
//! | [`prefix`](Namespace::prefix) | namespace prefix, e.g. `""` or `"Shared/"` |
//! | [`has_owner`](Namespace::has_owner) | whether a user owns it |
//! | [`is_quota_exempt`](Namespace::is_quota_exempt) | storage never counted |
//! | [`is_file_based_storage`](Namespace::is_file_based_storage) | mailbox is one file (mbox) |
//! | [`root_path`](Namespace::root_path) | mailbox list root |
//! | [`mailbox_path`](Namespace::mailbox_path) | location of one mailbox |

use std::path::PathBuf;

use crate::PathType;

/// A mail namespace as seen by the quota scanner.
pub trait Namespace: Send + Sync {
    /// Namespace prefix.
    fn prefix(&self) -> &str;

    /// Whether the namespace belongs to a user. Public namespaces have none.
    fn has_owner(&self) -> bool;

    /// Whether the storage behind this namespace opts out of quota.
    fn is_quota_exempt(&self) -> bool {
        false
    }

    /// Whether mailboxes are stored as single files rather than directories.
    fn is_file_based_storage(&self) -> bool;

    /// Root path of the mailbox list, if it has one.
    fn root_path(&self, path_type: PathType) -> Option<PathBuf>;

    /// Path of the named mailbox, if it can be resolved.
    fn mailbox_path(&self, name: &str, path_type: PathType) -> Option<PathBuf>;
}

/// A namespace described by plain values.
///
/// Useful when the caller already knows its layout, and in tests.
///
/// ```rust
/// use dirsize_quota::{Namespace, PathType, StaticNamespace};
///
/// let ns = StaticNamespace::new("/var/mail/alice").with_inbox("/var/spool/mail/alice", true);
/// assert!(ns.is_file_based_storage());
/// assert_eq!(
///     ns.mailbox_path("INBOX", PathType::Mailbox).unwrap().to_str(),
///     Some("/var/spool/mail/alice")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticNamespace {
    /// Namespace prefix.
    pub prefix: String,
    /// Owned by a user.
    pub owned: bool,
    /// Storage opts out of quota.
    pub quota_exempt: bool,
    /// Single-file mailbox format.
    pub file_based: bool,
    /// Mailbox list root.
    pub root: Option<PathBuf>,
    /// INBOX location, when it lives outside `root`.
    pub inbox: Option<PathBuf>,
}

impl StaticNamespace {
    /// Owned, directory-based namespace rooted at `root`, INBOX at `root/INBOX`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            prefix: String::new(),
            owned: true,
            quota_exempt: false,
            file_based: false,
            inbox: Some(root.join("INBOX")),
            root: Some(root),
        }
    }

    /// Place INBOX elsewhere; `file_based` selects the single-file format.
    pub fn with_inbox(mut self, inbox: impl Into<PathBuf>, file_based: bool) -> Self {
        self.inbox = Some(inbox.into());
        self.file_based = file_based;
        self
    }

    /// Set the namespace prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Mark the namespace as having no owner (a public namespace).
    pub fn public(mut self) -> Self {
        self.owned = false;
        self
    }

    /// Mark the storage as exempt from quota.
    pub fn quota_exempt(mut self) -> Self {
        self.quota_exempt = true;
        self
    }
}

impl Namespace for StaticNamespace {
    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn has_owner(&self) -> bool {
        self.owned
    }

    fn is_quota_exempt(&self) -> bool {
        self.quota_exempt
    }

    fn is_file_based_storage(&self) -> bool {
        self.file_based
    }

    fn root_path(&self, path_type: PathType) -> Option<PathBuf> {
        match path_type {
            PathType::Dir => self.root.clone(),
            PathType::Mailbox => None,
        }
    }

    fn mailbox_path(&self, name: &str, _path_type: PathType) -> Option<PathBuf> {
        if name.eq_ignore_ascii_case("INBOX") {
            return self.inbox.clone();
        }
        self.root.as_deref().map(|root| root.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_put_inbox_under_root() {
        let ns = StaticNamespace::new("/m/alice");
        assert_eq!(ns.root_path(PathType::Dir), Some(PathBuf::from("/m/alice")));
        assert_eq!(
            ns.mailbox_path("INBOX", PathType::Mailbox),
            Some(PathBuf::from("/m/alice/INBOX"))
        );
        assert!(ns.has_owner());
        assert!(!ns.is_quota_exempt());
        assert!(!ns.is_file_based_storage());
    }

    #[test]
    fn inbox_name_is_case_insensitive() {
        let ns = StaticNamespace::new("/m").with_inbox("/spool/u", true);
        assert_eq!(
            ns.mailbox_path("inbox", PathType::Mailbox),
            Some(PathBuf::from("/spool/u"))
        );
    }

    #[test]
    fn other_mailboxes_resolve_under_root() {
        let ns = StaticNamespace::new("/m");
        assert_eq!(
            ns.mailbox_path("Sent", PathType::Mailbox),
            Some(PathBuf::from("/m/Sent"))
        );
    }

    #[test]
    fn rootless_namespace_resolves_nothing_but_inbox() {
        let ns = StaticNamespace {
            root: None,
            ..StaticNamespace::new("/m")
        };
        assert_eq!(ns.root_path(PathType::Dir), None);
        assert_eq!(ns.mailbox_path("Sent", PathType::Mailbox), None);
        assert!(ns.mailbox_path("INBOX", PathType::Mailbox).is_some());
    }

    #[test]
    fn builders() {
        let ns = StaticNamespace::new("/m")
            .with_prefix("Shared/")
            .public()
            .quota_exempt();
        assert_eq!(ns.prefix(), "Shared/");
        assert!(!ns.has_owner());
        assert!(ns.is_quota_exempt());
    }

    #[test]
    fn namespace_is_object_safe() {
        fn _check(_: &dyn Namespace) {}
    }
}

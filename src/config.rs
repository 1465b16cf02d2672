//! Quota root settings and the default backend argument parser.

use crate::{Namespace, QuotaError};

/// Settings shared by every quota backend, parsed from the backend's
/// argument string.
///
/// Arguments are colon-separated, as in `noenforcing:hidden`. Empty
/// segments and surrounding whitespace are ignored:
///
/// | Token | Effect |
/// |-------|--------|
/// | `ns=<prefix>` | only the namespace with this prefix is counted |
/// | `noenforcing` | usage is reported but limits are not enforced |
/// | `hidden` | root is hidden from quota-listing commands |
/// | `ignoreunlimited` | skip users whose limits are unlimited |
///
/// ```rust
/// use dirsize_quota::RootSettings;
///
/// let s = RootSettings::parse("ns=Shared/:noenforcing").unwrap();
/// assert_eq!(s.ns_prefix.as_deref(), Some("Shared/"));
/// assert!(s.no_enforcing);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootSettings {
    /// Restrict the root to one namespace prefix.
    pub ns_prefix: Option<String>,
    /// Measure without enforcing.
    pub no_enforcing: bool,
    /// Hide from listings.
    pub hidden: bool,
    /// Skip users with unlimited limits.
    pub ignore_unlimited: bool,
}

impl RootSettings {
    /// Parse a backend argument string.
    ///
    /// # Errors
    ///
    /// [`QuotaError::InvalidArgument`] for an unknown token or an empty
    /// `ns=` value.
    pub fn parse(args: &str) -> Result<Self, QuotaError> {
        let mut settings = RootSettings::default();
        for token in args.split(':').map(str::trim).filter(|t| !t.is_empty()) {
            if let Some(prefix) = token.strip_prefix("ns=") {
                if prefix.is_empty() {
                    return Err(QuotaError::InvalidArgument {
                        arg: token.to_string(),
                        reason: "namespace prefix missing",
                    });
                }
                settings.ns_prefix = Some(prefix.to_string());
                continue;
            }
            match token {
                "noenforcing" => settings.no_enforcing = true,
                "hidden" => settings.hidden = true,
                "ignoreunlimited" => settings.ignore_unlimited = true,
                _ => {
                    return Err(QuotaError::InvalidArgument {
                        arg: token.to_string(),
                        reason: "unknown parameter",
                    });
                }
            }
        }
        Ok(settings)
    }

    /// Whether usage under `ns` counts toward this root.
    ///
    /// Quota-exempt storage never counts. A root bound to a prefix sees only
    /// that namespace; an unbound root sees every namespace with an owner.
    pub fn is_namespace_visible(&self, ns: &dyn Namespace) -> bool {
        if ns.is_quota_exempt() {
            return false;
        }
        match &self.ns_prefix {
            Some(prefix) => ns.prefix() == prefix,
            None => ns.has_owner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticNamespace;

    #[test]
    fn empty_args_are_defaults() {
        assert_eq!(RootSettings::parse("").unwrap(), RootSettings::default());
        assert_eq!(RootSettings::parse("   ").unwrap(), RootSettings::default());
        assert_eq!(RootSettings::parse("::").unwrap(), RootSettings::default());
    }

    #[test]
    fn all_flags() {
        let s = RootSettings::parse("hidden:ignoreunlimited::noenforcing").unwrap();
        assert!(s.hidden);
        assert!(s.ignore_unlimited);
        assert!(s.no_enforcing);
        assert_eq!(s.ns_prefix, None);
    }

    #[test]
    fn tokens_split_on_colons_only() {
        let s = RootSettings::parse("noenforcing : hidden").unwrap();
        assert!(s.no_enforcing);
        assert!(s.hidden);

        let err = RootSettings::parse("noenforcing hidden").unwrap_err();
        assert!(
            matches!(err, QuotaError::InvalidArgument { ref arg, .. } if arg == "noenforcing hidden")
        );
    }

    #[test]
    fn namespace_prefix_with_flags() {
        let s = RootSettings::parse("ns=Shared/:ignoreunlimited").unwrap();
        assert_eq!(s.ns_prefix.as_deref(), Some("Shared/"));
        assert!(s.ignore_unlimited);
    }

    #[test]
    fn namespace_prefix() {
        let s = RootSettings::parse("ns=INBOX.").unwrap();
        assert_eq!(s.ns_prefix.as_deref(), Some("INBOX."));
    }

    #[test]
    fn empty_namespace_prefix_is_rejected() {
        let err = RootSettings::parse("ns=").unwrap_err();
        assert!(matches!(err, QuotaError::InvalidArgument { .. }));
    }

    #[test]
    fn unbound_root_sees_owned_namespaces() {
        let s = RootSettings::default();
        assert!(s.is_namespace_visible(&StaticNamespace::new("/m")));
        assert!(!s.is_namespace_visible(&StaticNamespace::new("/p").public()));
    }

    #[test]
    fn bound_root_sees_only_its_prefix() {
        let s = RootSettings::parse("ns=Shared/").unwrap();
        let shared = StaticNamespace::new("/s").with_prefix("Shared/").public();
        assert!(s.is_namespace_visible(&shared));
        assert!(!s.is_namespace_visible(&StaticNamespace::new("/m")));
    }

    #[test]
    fn exempt_storage_is_never_visible() {
        let s = RootSettings::default();
        assert!(!s.is_namespace_visible(&StaticNamespace::new("/m").quota_exempt()));
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = RootSettings::parse("hidden:frobnicate").unwrap_err();
        match err {
            QuotaError::InvalidArgument { arg, .. } => assert_eq!(arg, "frobnicate"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! # Quota Backends
//!
//! The surface a quota framework drives.
//!
//! ## Lifecycle
//!
//! ```text
//! alloc ──▶ Uninitialized ──init──▶ Ready ──get_resource──▶ (measuring) ──▶ Ready
//!                ▲                    │
//!                └──────deinit────────┘
//! ```
//!
//! ## Results
//!
//! [`QuotaBackend::get_resource`] never fails outright. A resource this
//! backend does not provide yields [`QuotaGetResult::UnknownResource`] so the
//! framework can ask another backend; a failed measurement yields
//! [`QuotaGetResult::InternalError`].

use tracing::{debug, warn};

use crate::{
    Fs, Namespace, NativeFs, QuotaError, QuotaGetResult, QuotaRootScanner, QuotaTransaction,
    Resource, RootSettings,
};

/// A quota backend instance, bound to one quota root.
///
/// # Object Safety
///
/// This trait is object-safe; the [`BackendRegistry`](crate::BackendRegistry)
/// hands out `Box<dyn QuotaBackend>`.
pub trait QuotaBackend: Send + Sync {
    /// Registered backend name.
    fn name(&self) -> &'static str;

    /// Parse `args` and make the backend ready for queries.
    ///
    /// # Errors
    ///
    /// [`QuotaError::InvalidArgument`] if `args` cannot be parsed.
    fn init(&mut self, args: &str) -> Result<(), QuotaError>;

    /// Release the root record. Always succeeds.
    fn deinit(&mut self);

    /// Resources this backend advertises.
    fn resources(&self) -> &'static [Resource];

    /// Current value of the resource `name` (case-insensitive).
    fn get_resource(&self, name: &str, namespaces: &[&dyn Namespace]) -> QuotaGetResult;

    /// Record a completed transaction.
    ///
    /// # Errors
    ///
    /// Backend-specific.
    fn update(&self, tx: &QuotaTransaction) -> Result<(), QuotaError>;

    /// Whether usage is recomputed on every query instead of tracked.
    fn is_auto_updating(&self) -> bool;
}

const DIRSIZE_RESOURCES: &[Resource] = &[Resource::StorageKilobytes];

/// Quota backend that sums the sizes of every file under the mail roots.
///
/// Nothing is tracked between queries; every [`get_resource`](QuotaBackend::get_resource)
/// walks the live filesystem.
///
/// # Example
///
/// ```rust
/// use dirsize_quota::{DirsizeBackend, QuotaBackend};
///
/// let mut backend = DirsizeBackend::new();
/// backend.init("").unwrap();
/// let result = backend.get_resource("STORAGE_BYTES", &[]);
/// assert_eq!(result.value(), Some(0));
/// assert!(backend.get_resource("MESSAGE", &[]).is_unknown_resource());
/// ```
#[derive(Debug, Default)]
pub struct DirsizeBackend<F = NativeFs> {
    fs: F,
    settings: Option<RootSettings>,
}

impl DirsizeBackend<NativeFs> {
    /// Name under which the backend is registered.
    pub const NAME: &'static str = "dirsize";

    /// Uninitialized backend over the host filesystem.
    pub fn new() -> Self {
        Self::with_fs(NativeFs)
    }
}

impl<F: Fs> DirsizeBackend<F> {
    /// Uninitialized backend over `fs`.
    pub fn with_fs(fs: F) -> Self {
        Self { fs, settings: None }
    }

    /// Settings parsed by [`init`](QuotaBackend::init), if initialized.
    pub fn settings(&self) -> Option<&RootSettings> {
        self.settings.as_ref()
    }
}

impl<F: Fs> QuotaBackend for DirsizeBackend<F> {
    fn name(&self) -> &'static str {
        DirsizeBackend::NAME
    }

    fn init(&mut self, args: &str) -> Result<(), QuotaError> {
        let settings = RootSettings::parse(args)?;
        debug!(?settings, "dirsize backend initialized");
        self.settings = Some(settings);
        Ok(())
    }

    fn deinit(&mut self) {
        self.settings = None;
    }

    fn resources(&self) -> &'static [Resource] {
        DIRSIZE_RESOURCES
    }

    fn get_resource(&self, name: &str, namespaces: &[&dyn Namespace]) -> QuotaGetResult {
        if !Resource::StorageBytes.matches(name) {
            return QuotaGetResult::UnknownResource;
        }
        let Some(settings) = &self.settings else {
            return QuotaGetResult::InternalError(QuotaError::NotInitialized);
        };

        match QuotaRootScanner::new(&self.fs, settings).total_usage(namespaces) {
            Ok(bytes) => QuotaGetResult::Limited(bytes),
            Err(err) => {
                warn!(error = %err, "dirsize quota measurement failed");
                QuotaGetResult::InternalError(err)
            }
        }
    }

    fn update(&self, _tx: &QuotaTransaction) -> Result<(), QuotaError> {
        Ok(())
    }

    fn is_auto_updating(&self) -> bool {
        self.settings.is_some()
    }
}

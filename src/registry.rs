//! Named backend factories.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::{DirsizeBackend, QuotaBackend, QuotaError};

/// Creates an uninitialized backend instance.
pub type BackendFactory = fn() -> Box<dyn QuotaBackend>;

/// Backend factories keyed by name.
///
/// Names are matched case-insensitively. Build one at startup, register
/// what the process supports, then only read from it.
///
/// ```rust
/// use dirsize_quota::BackendRegistry;
///
/// let registry = BackendRegistry::with_builtins();
/// let mut backend = registry.create("DirSize").unwrap();
/// backend.init("").unwrap();
/// assert!(backend.is_auto_updating());
/// ```
#[derive(Debug, Default, Clone)]
pub struct BackendRegistry {
    factories: BTreeMap<String, BackendFactory>,
}

impl BackendRegistry {
    /// A registry with no backends.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the backends shipped with this crate.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(DirsizeBackend::NAME, dirsize);
        registry
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, factory: BackendFactory) {
        self.factories.insert(name.to_ascii_lowercase(), factory);
    }

    /// Allocate a fresh backend.
    ///
    /// # Errors
    ///
    /// [`QuotaError::UnknownBackend`] if nothing is registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn QuotaBackend>, QuotaError> {
        self.factories
            .get(&name.to_ascii_lowercase())
            .map(|factory| factory())
            .ok_or_else(|| QuotaError::UnknownBackend {
                name: name.to_string(),
            })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

fn dirsize() -> Box<dyn QuotaBackend> {
    Box::new(DirsizeBackend::new())
}

/// Process-wide registry with the built-in backends.
///
/// Built on first use and never mutated afterwards.
pub fn registry() -> &'static BackendRegistry {
    static REGISTRY: OnceLock<BackendRegistry> = OnceLock::new();
    REGISTRY.get_or_init(BackendRegistry::with_builtins)
}

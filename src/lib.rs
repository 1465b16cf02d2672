//! # dirsize-quota
//!
//! A quota backend that measures mail storage by **summing the sizes of all
//! files** under a user's mail roots.
//!
//! Nothing is tracked between queries. Each query collects the roots of every
//! visible namespace, drops roots nested inside other roots, and walks what
//! is left. Files that disappear during the walk count as zero; any other
//! filesystem failure aborts the query.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use dirsize_quota::{registry, Namespace, StaticNamespace};
//!
//! let mut backend = registry().create("dirsize").unwrap();
//! backend.init("").unwrap();
//!
//! let home = StaticNamespace::new("/nonexistent/mail/alice")
//!     .with_inbox("/nonexistent/spool/alice", true);
//! let result = backend.get_resource("STORAGE_BYTES", &[&home as &dyn Namespace]);
//! assert_eq!(result.value(), Some(0));
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`PathSet`] | Roots to measure, none nested in another |
//! | [`DirectoryWalker`] | Sums sizes under one directory |
//! | [`path_usage`] | Usage of one [`CountedPath`] (file or tree) |
//! | [`QuotaRootScanner`] | Namespaces → roots → total |
//! | [`QuotaBackend`] / [`DirsizeBackend`] | Lifecycle and resource queries |
//! | [`BackendRegistry`] | Named backend factories |
//! | [`RootSettings`] | Parsed backend arguments |
//! | [`QuotaError`] | Structured error with operation and path |
//!
//! ---
//!
//! ## Accounting
//!
//! Only apparent sizes are summed (`st_size`, not allocated blocks).
//! Symlinks are never followed; a link counts as the size of the link
//! itself. Hard links are counted once per name.
//!
//! ---
//!
//! ## Thread Safety
//!
//! Every query owns its path set and accumulator. Backends, scanners and
//! filesystems take `&self` and are `Send + Sync`, so independent queries
//! may run concurrently. A query blocks its thread until the walk finishes.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialization for [`CountedPath`], [`RootSettings`], [`UsageReport`], etc. |

mod backend;
mod config;
mod error;
mod namespace;
mod native;
mod path_set;
mod registry;
mod scanner;
mod traits;
mod types;
mod usage;
mod walker;

pub use error::QuotaError;

pub use types::{
    CountedPath, DirEntry, FileType, Metadata, PathType, QuotaGetResult, QuotaTransaction,
    Resource, RootUsage, UNKNOWN_RESOURCE_MESSAGE, UsageReport,
};

pub use traits::{Fs, FsDir, FsStat, ReadDirIter};
pub use native::NativeFs;

pub use path_set::PathSet;
pub use usage::path_usage;
pub use walker::DirectoryWalker;
pub use scanner::QuotaRootScanner;

pub use config::RootSettings;
pub use namespace::{Namespace, StaticNamespace};

pub use backend::{DirsizeBackend, QuotaBackend};
pub use registry::{BackendFactory, BackendRegistry, registry};

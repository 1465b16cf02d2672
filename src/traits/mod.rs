//! # Filesystem Traits
//!
//! The two filesystem capabilities the usage walker needs.
//!
//! | Trait | Provides |
//! |-------|----------|
//! | [`FsDir`] | `read_dir` |
//! | [`FsStat`] | `symlink_metadata` |
//! | [`Fs`] | both, via blanket implementation |
//!
//! [`NativeFs`](crate::NativeFs) implements them over `std::fs`. Tests and
//! embedders can supply their own, e.g. to simulate entries vanishing
//! between listing and `lstat`.
//!
//! ```rust
//! use dirsize_quota::Fs;
//!
//! fn measure(fs: &dyn Fs) {
//!     let _ = fs.read_dir(std::path::Path::new("/var/mail"));
//! }
//! ```

mod fs_dir;
mod fs_stat;

pub use fs_dir::{FsDir, ReadDirIter};
pub use fs_stat::FsStat;

/// Filesystem usable by the walker.
///
/// Automatically implemented for any type implementing [`FsDir`] and [`FsStat`].
pub trait Fs: FsDir + FsStat {}

impl<T: FsDir + FsStat> Fs for T {}

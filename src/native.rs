//! [`Fs`](crate::Fs) over the host filesystem.

use std::fs;
use std::io;
use std::path::Path;

use crate::{DirEntry, FileType, FsDir, FsStat, Metadata, ReadDirIter};

/// The host filesystem, through `std::fs`.
///
/// `std::fs::read_dir` never yields `.` or `..`, and
/// `std::fs::symlink_metadata` is `lstat`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl FsDir for NativeFs {
    fn read_dir(&self, path: &Path) -> io::Result<ReadDirIter> {
        let iter = fs::read_dir(path)?.map(|entry| {
            entry.map(|e| DirEntry {
                name: e.file_name().to_string_lossy().into_owned(),
                path: e.path(),
            })
        });
        Ok(ReadDirIter::new(iter))
    }
}

impl FsStat for NativeFs {
    fn symlink_metadata(&self, path: &Path) -> io::Result<Metadata> {
        let meta = fs::symlink_metadata(path)?;
        let ft = meta.file_type();
        let file_type = if ft.is_dir() {
            FileType::Directory
        } else if ft.is_symlink() {
            FileType::Symlink
        } else if ft.is_file() {
            FileType::File
        } else {
            FileType::Other
        };
        Ok(Metadata {
            file_type,
            size: meta.len(),
        })
    }
}

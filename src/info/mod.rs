/*!
 * File Info Module
 * Constructs portable file info values and reads native attributes back
 */

mod attributes;
mod plain;
#[cfg(any(target_os = "linux", target_os = "macos"))]
mod stat;
mod traits;

pub use attributes::FileAttributes;
pub use plain::{PassThrough, PlainFileInfo};
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use stat::StatFileInfo;
pub use traits::{FileInfo, NativeAttributes};

use std::time::SystemTime;

use crate::mode::FileMode;
use crate::native::FileStat;

/// The file info record used on this platform
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub type FileInfoRecord = StatFileInfo;

/// The file info record used on this platform
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub type FileInfoRecord = PlainFileInfo;

/// Construct a file info for the current platform
///
/// `mode`, `mod_time` and `size` left as `None` are pulled from `native`
/// where the platform has a native stat layout.
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub fn new_file_info(
    name: impl Into<String>,
    mode: Option<FileMode>,
    mod_time: Option<SystemTime>,
    size: Option<u64>,
    native: Option<FileStat>,
) -> FileInfoRecord {
    StatFileInfo::new(name, mode, mod_time, size, native)
}

/// Construct a file info for the current platform
///
/// Without a native stat layout `native` is only carried through.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn new_file_info(
    name: impl Into<String>,
    mode: Option<FileMode>,
    mod_time: Option<SystemTime>,
    size: Option<u64>,
    native: Option<FileStat>,
) -> FileInfoRecord {
    let sys = native.map(|stat| std::sync::Arc::new(stat) as PassThrough);
    PlainFileInfo::new(name, mode, mod_time, size, sys)
}

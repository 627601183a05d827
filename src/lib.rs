/*!
 * fsinfo
 * Portable file info layered over native stat information
 *
 * Records are built from a name, a portable mode, a modification time, a size
 * and an optional native stat structure. OS-level attributes (owner, group,
 * inode, links, device, access and change times) are read back from the
 * embedded structure when there is one, and fall back to fixed defaults
 * otherwise.
 */

pub mod core;
pub mod info;
pub mod mode;
pub mod monitoring;
pub mod native;

// Re-exports
pub use crate::core::{ModeError, ModeResult};
pub use info::{
    new_file_info, FileAttributes, FileInfo, FileInfoRecord, NativeAttributes, PassThrough,
    PlainFileInfo,
};
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use info::StatFileInfo;
pub use mode::{file_mode, FileMode, FileType, Permissions};
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use mode::{decode, encode};
pub use monitoring::init_tracing;
pub use native::{FileStat, StatAccess};
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use native::empty_stat;

/*!
 * File Info Traits
 * Portable capability set and native attribute readers
 */

use std::fmt;
use std::time::SystemTime;

use super::attributes::FileAttributes;
use crate::core::timespec::{from_timespec, write_listing_time};
use crate::mode::{file_mode, FileMode};
use crate::native::{FileStat, StatAccess};

/// A named file with mode, size and modification time
///
/// Implemented by both the native-backed and the plain record; callers that
/// only need portable metadata should depend on this trait.
pub trait FileInfo: Send + Sync {
    /// Base name the record was constructed with
    fn name(&self) -> &str;

    /// Full portable mode, including type and special bits
    fn mode(&self) -> FileMode;

    fn mod_time(&self) -> SystemTime;

    /// Size in bytes
    fn size(&self) -> u64;

    /// Type tag is directory
    fn is_dir(&self) -> bool {
        self.mode().is_dir()
    }

    /// Native status supplied at construction, if any
    fn native_status(&self) -> Option<&FileStat>;
}

/// OS-level attributes of a file info, with documented defaults
///
/// Every reader checks [`FileInfo::native_status`] once. Without native
/// status: uid, gid, inode and device are 0, the link count is 1, access and
/// change times are unset, and the modification time is the portable one.
pub trait NativeAttributes: FileInfo {
    /// System dependent mode bits, or the encoding of [`FileInfo::mode`]
    fn native_mode(&self) -> u32 {
        match self.native_status() {
            Some(stat) => stat.mode(),
            None => file_mode(self.mode()),
        }
    }

    fn uid(&self) -> u32 {
        self.native_status().map_or(0, StatAccess::uid)
    }

    fn gid(&self) -> u32 {
        self.native_status().map_or(0, StatAccess::gid)
    }

    fn ino(&self) -> u64 {
        self.native_status().map_or(0, StatAccess::ino)
    }

    fn nlink(&self) -> u64 {
        self.native_status().map_or(1, StatAccess::nlink)
    }

    fn device(&self) -> u64 {
        self.native_status().map_or(0, StatAccess::dev)
    }

    fn modification_time(&self) -> SystemTime {
        match self.native_status() {
            Some(stat) => {
                let (sec, nsec) = stat.mtime();
                from_timespec(sec, nsec)
            }
            None => self.mod_time(),
        }
    }

    fn access_time(&self) -> Option<SystemTime> {
        self.native_status().map(|stat| {
            let (sec, nsec) = stat.atime();
            from_timespec(sec, nsec)
        })
    }

    fn change_time(&self) -> Option<SystemTime> {
        self.native_status().map(|stat| {
            let (sec, nsec) = stat.ctime();
            from_timespec(sec, nsec)
        })
    }

    /// Snapshot of every attribute
    fn attributes(&self) -> FileAttributes {
        let mode = self.mode();
        FileAttributes {
            name: self.name().to_string(),
            file_type: mode.file_type(),
            permissions: mode.permissions(),
            mode,
            native_mode: self.native_mode(),
            size: self.size(),
            uid: self.uid(),
            gid: self.gid(),
            ino: self.ino(),
            nlink: self.nlink(),
            device: self.device(),
            modified: self.modification_time(),
            accessed: self.access_time(),
            changed: self.change_time(),
        }
    }
}

impl<T: FileInfo + ?Sized> NativeAttributes for T {}

/// `<mode> <nlink> <size> <mtime> <name>`, as in a long directory listing
pub(crate) fn write_listing<T: FileInfo + ?Sized>(
    info: &T,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(f, "{} {} {} ", info.mode(), info.nlink(), info.size())?;
    write_listing_time(f, info.mod_time())?;
    write!(f, " {}", info.name())
}

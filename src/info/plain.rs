/*!
 * Plain File Info
 * Fallback record for platforms without a supported stat layout
 */

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::trace;

use super::traits::{write_listing, FileInfo};
use crate::mode::FileMode;
use crate::native::FileStat;

/// Caller-supplied value carried through a [`PlainFileInfo`] untouched
pub type PassThrough = Arc<dyn Any + Send + Sync>;

/// File info made of independent fields, with no native encoding
///
/// Never exposes native status, so every OS-only attribute reads as its
/// default: uid/gid/inode/device 0, one link, no access or change time.
#[derive(Clone)]
pub struct PlainFileInfo {
    name: String,
    mode: FileMode,
    mod_time: Option<SystemTime>,
    size: Option<u64>,
    sys: Option<PassThrough>,
}

impl PlainFileInfo {
    /// Store the fields as given
    ///
    /// A missing mode is empty (regular file, no permissions), a missing
    /// modification time reads as the epoch and a missing size as 0.
    pub fn new(
        name: impl Into<String>,
        mode: Option<FileMode>,
        mod_time: Option<SystemTime>,
        size: Option<u64>,
        sys: Option<PassThrough>,
    ) -> Self {
        let name = name.into();
        trace!(name = %name, "Constructed plain file info");
        Self {
            name,
            mode: mode.unwrap_or_default(),
            mod_time,
            size,
            sys,
        }
    }

    /// Opaque value passed through from construction
    ///
    /// Never interpreted; downcast it to recover the caller's type.
    #[inline]
    #[must_use]
    pub fn sys(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.sys.as_deref()
    }
}

impl FileInfo for PlainFileInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> FileMode {
        self.mode
    }

    fn mod_time(&self) -> SystemTime {
        self.mod_time.unwrap_or(UNIX_EPOCH)
    }

    fn size(&self) -> u64 {
        self.size.unwrap_or(0)
    }

    fn native_status(&self) -> Option<&FileStat> {
        None
    }
}

impl fmt::Display for PlainFileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_listing(self, f)
    }
}

impl fmt::Debug for PlainFileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainFileInfo")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("mod_time", &self.mod_time)
            .field("size", &self.size)
            .field("sys", &self.sys.is_some())
            .finish()
    }
}

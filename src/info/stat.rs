/*!
 * Native-backed File Info
 * Portable metadata stored inside a copy of the host stat structure
 */

use std::fmt;
use std::time::SystemTime;

use tracing::{debug, trace};

use super::traits::{write_listing, FileInfo};
use crate::core::timespec::{from_timespec, to_timespec};
use crate::mode::{decode, encode, FileMode};
use crate::native::{empty_stat, FileStat, StatAccess};

/// File info backed by a native stat structure
///
/// The structure is copied in at construction and owned by the record. Mode,
/// modification time and size are always read back from it; the OS-only
/// attributes are exposed only when the caller supplied a structure.
#[derive(Clone)]
pub struct StatFileInfo {
    name: String,
    stat: FileStat,
    supplied: bool,
}

impl StatFileInfo {
    /// Build a record, starting from `native` (or a zeroed structure)
    ///
    /// Each of `mode`, `mod_time` and `size` that is `Some` overwrites the
    /// matching native field; `None` keeps what `native` carries. All other
    /// fields are left exactly as copied.
    pub fn new(
        name: impl Into<String>,
        mode: Option<FileMode>,
        mod_time: Option<SystemTime>,
        size: Option<u64>,
        native: Option<FileStat>,
    ) -> Self {
        let name = name.into();
        let supplied = native.is_some();
        let mut stat = native.unwrap_or_else(empty_stat);

        if let Some(mode) = mode {
            stat.set_mode(encode(mode));
        }
        if let Some(time) = mod_time {
            let (sec, nsec) = to_timespec(time);
            stat.set_mtime(sec, nsec);
        }
        if let Some(size) = size {
            stat.set_size(i64::try_from(size).unwrap_or(i64::MAX));
        }

        if !supplied && (mode.is_none() || mod_time.is_none() || size.is_none()) {
            debug!(
                name = %name,
                derive_mode = mode.is_none(),
                derive_mtime = mod_time.is_none(),
                derive_size = size.is_none(),
                "No native status supplied, derived fields read as zero"
            );
        }
        trace!(name = %name, native = supplied, "Constructed native-backed file info");

        Self {
            name,
            stat,
            supplied,
        }
    }

    /// The embedded structure, whether or not it was supplied by the caller
    #[inline]
    #[must_use]
    pub fn stat(&self) -> &FileStat {
        &self.stat
    }
}

impl FileInfo for StatFileInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> FileMode {
        decode(self.stat.mode())
    }

    fn mod_time(&self) -> SystemTime {
        let (sec, nsec) = self.stat.mtime();
        from_timespec(sec, nsec)
    }

    fn size(&self) -> u64 {
        u64::try_from(self.stat.size()).unwrap_or(0)
    }

    fn native_status(&self) -> Option<&FileStat> {
        self.supplied.then_some(&self.stat)
    }
}

impl fmt::Display for StatFileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_listing(self, f)
    }
}

impl fmt::Debug for StatFileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatFileInfo")
            .field("name", &self.name)
            .field("mode", &format_args!("0o{:o}", self.stat.mode()))
            .field("size", &self.stat.size())
            .field("mtime", &self.stat.mtime())
            .field("supplied", &self.supplied)
            .finish()
    }
}

/*!
 * Native Status Module
 * Field-level access to the host's stat structure, one implementation per OS
 *
 * The structure itself comes from the platform's system-call layer; nothing
 * here issues a system call.
 */

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;

/// Native status structure of the host (`struct stat`)
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use nix::sys::stat::FileStat;

/// Native status structure placeholder on platforms without a supported layout
///
/// Uninhabited: an `Option<FileStat>` is always `None` here.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStat {}

/// Field accessors over a native status structure
///
/// Setters are used while constructing file info, getters while reading
/// attributes back. None of them validate; the structure is assumed to be
/// well formed.
pub trait StatAccess {
    /// Store a native mode word
    fn set_mode(&mut self, mode: u32);

    /// Store the modification time
    fn set_mtime(&mut self, sec: i64, nsec: i64);

    /// Store the size in bytes
    fn set_size(&mut self, size: i64);

    /// Native mode word (type, special and permission bits)
    fn mode(&self) -> u32;

    fn uid(&self) -> u32;

    fn gid(&self) -> u32;

    fn ino(&self) -> u64;

    /// Hard link count
    fn nlink(&self) -> u64;

    /// Device containing the file
    fn dev(&self) -> u64;

    fn size(&self) -> i64;

    /// Modification time as (seconds, nanoseconds)
    fn mtime(&self) -> (i64, i64);

    /// Access time as (seconds, nanoseconds)
    fn atime(&self) -> (i64, i64);

    /// Status change time as (seconds, nanoseconds)
    fn ctime(&self) -> (i64, i64);
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
impl StatAccess for FileStat {
    fn set_mode(&mut self, _mode: u32) {
        match *self {}
    }

    fn set_mtime(&mut self, _sec: i64, _nsec: i64) {
        match *self {}
    }

    fn set_size(&mut self, _size: i64) {
        match *self {}
    }

    fn mode(&self) -> u32 {
        match *self {}
    }

    fn uid(&self) -> u32 {
        match *self {}
    }

    fn gid(&self) -> u32 {
        match *self {}
    }

    fn ino(&self) -> u64 {
        match *self {}
    }

    fn nlink(&self) -> u64 {
        match *self {}
    }

    fn dev(&self) -> u64 {
        match *self {}
    }

    fn size(&self) -> i64 {
        match *self {}
    }

    fn mtime(&self) -> (i64, i64) {
        match *self {}
    }

    fn atime(&self) -> (i64, i64) {
        match *self {}
    }

    fn ctime(&self) -> (i64, i64) {
        match *self {}
    }
}

/// A zero-initialized native status structure
#[cfg(any(target_os = "linux", target_os = "macos"))]
#[must_use]
pub fn empty_stat() -> FileStat {
    // SAFETY: `struct stat` is plain old data made of integers (and private
    // padding on some targets); the all-zero bit pattern is a valid value.
    unsafe { std::mem::zeroed() }
}

/*!
 * macOS stat accessors
 * Timestamps come from the `st_*timespec` pairs, which libc flattens into
 * `st_*time` / `st_*time_nsec`. Mode and link count are 16 bits wide.
 */

use nix::libc;

use super::{FileStat, StatAccess};

impl StatAccess for FileStat {
    fn set_mode(&mut self, mode: u32) {
        // mode_t is u16; type and permission bits all fit below 1 << 16
        self.st_mode = mode as libc::mode_t;
    }

    fn set_mtime(&mut self, sec: i64, nsec: i64) {
        self.st_mtime = sec as libc::time_t;
        self.st_mtime_nsec = nsec as libc::c_long;
    }

    fn set_size(&mut self, size: i64) {
        self.st_size = size as libc::off_t;
    }

    fn mode(&self) -> u32 {
        u32::from(self.st_mode)
    }

    fn uid(&self) -> u32 {
        self.st_uid
    }

    fn gid(&self) -> u32 {
        self.st_gid
    }

    fn ino(&self) -> u64 {
        self.st_ino
    }

    fn nlink(&self) -> u64 {
        u64::from(self.st_nlink)
    }

    fn dev(&self) -> u64 {
        // dev_t is a signed 32-bit value
        self.st_dev as u64
    }

    fn size(&self) -> i64 {
        self.st_size
    }

    fn mtime(&self) -> (i64, i64) {
        (self.st_mtime, self.st_mtime_nsec)
    }

    fn atime(&self) -> (i64, i64) {
        (self.st_atime, self.st_atime_nsec)
    }

    fn ctime(&self) -> (i64, i64) {
        (self.st_ctime, self.st_ctime_nsec)
    }
}

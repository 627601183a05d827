/*!
 * Linux stat accessors
 * Field widths vary by architecture, so every read widens explicitly
 */

use nix::libc;

use super::{FileStat, StatAccess};

impl StatAccess for FileStat {
    fn set_mode(&mut self, mode: u32) {
        self.st_mode = mode as libc::mode_t;
    }

    fn set_mtime(&mut self, sec: i64, nsec: i64) {
        self.st_mtime = sec as libc::time_t;
        self.st_mtime_nsec = nsec as _;
    }

    fn set_size(&mut self, size: i64) {
        self.st_size = size as libc::off_t;
    }

    fn mode(&self) -> u32 {
        self.st_mode as u32
    }

    fn uid(&self) -> u32 {
        self.st_uid
    }

    fn gid(&self) -> u32 {
        self.st_gid
    }

    fn ino(&self) -> u64 {
        self.st_ino as u64
    }

    fn nlink(&self) -> u64 {
        // u32 on some 64-bit targets (aarch64, riscv64)
        self.st_nlink as u64
    }

    fn dev(&self) -> u64 {
        self.st_dev as u64
    }

    fn size(&self) -> i64 {
        self.st_size as i64
    }

    fn mtime(&self) -> (i64, i64) {
        (self.st_mtime as i64, self.st_mtime_nsec as i64)
    }

    fn atime(&self) -> (i64, i64) {
        (self.st_atime as i64, self.st_atime_nsec as i64)
    }

    fn ctime(&self) -> (i64, i64) {
        (self.st_ctime as i64, self.st_ctime_nsec as i64)
    }
}

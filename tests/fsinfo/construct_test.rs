/*!
 * Construction Tests
 * Native-backed records built with and without a native status
 */

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use fsinfo::core::from_timespec;
use fsinfo::{
    empty_stat, new_file_info, FileInfo, FileMode, FileStat, FileType, NativeAttributes,
    StatAccess, StatFileInfo,
};
use pretty_assertions::assert_eq;

fn at((sec, nsec): (i64, i64)) -> SystemTime {
    from_timespec(sec, nsec)
}

/// A status structure with every field the readers look at set to a distinct value
fn synthetic_stat() -> FileStat {
    let mut stat = empty_stat();
    stat.set_mode(0o100640);
    stat.set_mtime(1_700_000_000, 250);
    stat.set_size(1234);
    stat.st_uid = 1000;
    stat.st_gid = 100;
    stat.st_ino = 424_242;
    stat.st_nlink = 3;
    stat.st_dev = 2049;
    stat.st_atime = 1_700_000_100;
    stat.st_atime_nsec = 5;
    stat.st_ctime = 1_700_000_200;
    stat.st_ctime_nsec = 7;
    stat
}

#[test]
fn test_defaults_without_native_status() {
    let info = StatFileInfo::new(
        "file",
        Some(FileMode::from_bits_truncate(0o600)),
        Some(UNIX_EPOCH + Duration::from_secs(60)),
        Some(1),
        None,
    );

    assert!(info.native_status().is_none());
    assert_eq!(info.uid(), 0);
    assert_eq!(info.gid(), 0);
    assert_eq!(info.ino(), 0);
    assert_eq!(info.nlink(), 1);
    assert_eq!(info.device(), 0);
    assert_eq!(info.access_time(), None);
    assert_eq!(info.change_time(), None);
    assert_eq!(info.modification_time(), UNIX_EPOCH + Duration::from_secs(60));
}

#[test]
fn test_everything_derived_from_native_status() {
    let stat = synthetic_stat();
    let info = StatFileInfo::new("file", None, None, None, Some(stat));

    assert_eq!(info.native_mode(), stat.mode());
    assert_eq!(info.mode(), fsinfo::decode(stat.mode()));
    assert_eq!(info.size(), stat.size() as u64);
    assert_eq!(info.uid(), stat.uid());
    assert_eq!(info.gid(), stat.gid());
    assert_eq!(info.ino(), stat.ino());
    assert_eq!(info.nlink(), stat.nlink());
    assert_eq!(info.device(), stat.dev());
    assert_eq!(info.mod_time(), at(stat.mtime()));
    assert_eq!(info.modification_time(), at(stat.mtime()));
    assert_eq!(info.access_time(), Some(at(stat.atime())));
    assert_eq!(info.change_time(), Some(at(stat.ctime())));

    assert_eq!(info.uid(), 1000);
    assert_eq!(info.nlink(), 3);
    assert_eq!(info.mode().permissions().mode, 0o640);
}

#[test]
fn test_overrides_keep_os_attributes() {
    let stat = synthetic_stat();
    let time = UNIX_EPOCH + Duration::new(42, 9);
    let info = StatFileInfo::new(
        "renamed",
        Some(FileMode::SYMLINK.with_permissions(0o777)),
        Some(time),
        Some(7),
        Some(stat),
    );

    assert_eq!(info.mode().file_type(), FileType::Symlink);
    assert_eq!(info.mod_time(), time);
    assert_eq!(info.size(), 7);
    assert_eq!(info.uid(), 1000);
    assert_eq!(info.gid(), 100);
    assert_eq!(info.ino(), 424_242);
    assert_eq!(info.device(), 2049);
    assert_eq!(info.access_time(), Some(at(stat.atime())));
}

#[test]
fn test_directory_mode_without_native_status() {
    let info = new_file_info(
        "docs",
        Some(FileMode::DIR.with_permissions(0o755)),
        None,
        None,
        None,
    );

    assert!(info.is_dir());
    assert_eq!(info.mode().permissions().mode, 0o755);
}

#[test]
fn test_size_with_and_without_native_status() {
    let info = new_file_info("sized", None, None, Some(4096), None);
    assert_eq!(info.size(), 4096);

    let info = new_file_info("unsized", None, None, None, None);
    assert_eq!(info.size(), 0);
    assert_eq!(info.mod_time(), UNIX_EPOCH);
}

#[test]
fn test_setgid_regular_round_trip() {
    let mut stat = empty_stat();
    stat.set_mode(0o100000 | 0o2000 | 0o644);
    let info = new_file_info("shared", None, None, None, Some(stat));

    let mode = info.mode();
    assert_eq!(mode.file_type(), FileType::File);
    assert_eq!(mode.permissions().mode, 0o644);
    assert!(mode.contains(FileMode::SETGID));
    assert!(!mode.contains(FileMode::SETUID));
    assert!(!mode.contains(FileMode::STICKY));
}

#[test]
fn test_is_dir_uses_type_tag() {
    // Block devices share a bit with S_IFDIR; they are not directories
    let info = new_file_info("sda", Some(FileMode::DEVICE.with_permissions(0o660)), None, None, None);
    assert!(!info.is_dir());
    assert_eq!(info.mode().file_type(), FileType::BlockDevice);
}

#[test]
fn test_records_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StatFileInfo>();

    let info = std::sync::Arc::new(new_file_info("shared", None, None, Some(1), Some(synthetic_stat())));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let info = info.clone();
            std::thread::spawn(move || (info.uid(), info.nlink(), info.size()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), (1000, 3, 1));
    }
}

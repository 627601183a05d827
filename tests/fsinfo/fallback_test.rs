/*!
 * Fallback Tests
 * The plain record never reports OS-level attributes
 */

use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use fsinfo::{FileInfo, FileMode, NativeAttributes, PlainFileInfo};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn os_attributes_are_constant(
        bits in any::<u32>(),
        secs in 0u64..4_000_000_000,
        size in any::<u64>(),
        name in prop::sample::select(vec!["", "a", "notes.txt", "dir with spaces"]),
    ) {
        let mode = FileMode::from_bits_truncate(bits);
        let time = UNIX_EPOCH + Duration::from_secs(secs);
        let info = PlainFileInfo::new(name, Some(mode), Some(time), Some(size), None);

        prop_assert_eq!(info.uid(), 0);
        prop_assert_eq!(info.gid(), 0);
        prop_assert_eq!(info.ino(), 0);
        prop_assert_eq!(info.device(), 0);
        prop_assert_eq!(info.nlink(), 1);
        prop_assert_eq!(info.access_time(), None);
        prop_assert_eq!(info.change_time(), None);

        prop_assert_eq!(info.name(), name);
        prop_assert_eq!(info.mode(), mode);
        prop_assert_eq!(info.modification_time(), time);
        prop_assert_eq!(info.size(), size);
    }
}

#[test]
fn test_plain_listing() {
    // 1970-01-02 03:04:00 UTC
    let time = UNIX_EPOCH + Duration::from_secs(97_440);
    let mode = FileMode::from_bits_truncate(0o644);
    let info = PlainFileInfo::new("notes.txt", Some(mode), Some(time), Some(5), None);

    assert_eq!(info.to_string(), "-rw-r--r-- 1 5 Jan  2 03:04 notes.txt");
}

#[test]
fn test_plain_is_dir() {
    let info = PlainFileInfo::new(
        "dir",
        Some(FileMode::DIR.with_permissions(0o755)),
        None,
        None,
        None,
    );
    assert!(info.is_dir());
    assert_eq!(info.mode().permissions().mode, 0o755);
    assert_eq!(info.attributes().nlink, 1);
}

#[test]
fn test_plain_carries_caller_value() {
    #[derive(Debug, PartialEq)]
    struct Handle(u64);

    let info = PlainFileInfo::new("h", None, None, None, Some(Arc::new(Handle(7))));

    assert_eq!(
        info.sys().and_then(|sys| sys.downcast_ref::<Handle>()),
        Some(&Handle(7))
    );
    assert_eq!(info.uid(), 0);
    assert_eq!(info.nlink(), 1);
}

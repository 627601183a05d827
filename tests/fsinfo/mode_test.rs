/*!
 * Mode Tests
 * Portable mode properties and native translation round trips
 */

use fsinfo::{FileMode, FileType};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn file_types() -> impl Strategy<Value = FileType> {
    prop_oneof![
        Just(FileType::File),
        Just(FileType::Directory),
        Just(FileType::Symlink),
        Just(FileType::BlockDevice),
        Just(FileType::CharDevice),
        Just(FileType::Fifo),
        Just(FileType::Socket),
    ]
}

/// Every valid portable mode: one type, any permissions, any special bits
fn valid_modes() -> impl Strategy<Value = FileMode> {
    (
        file_types(),
        0u32..=0o777,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(file_type, perm, setuid, setgid, sticky)| {
            let mut mode = FileMode::from_type(file_type).with_permissions(perm);
            mode.set(FileMode::SETUID, setuid);
            mode.set(FileMode::SETGID, setgid);
            mode.set(FileMode::STICKY, sticky);
            mode
        })
}

proptest! {
    #[test]
    fn valid_modes_pass_validation(mode in valid_modes()) {
        prop_assert!(mode.is_valid());
        prop_assert_eq!(FileMode::try_from(mode.bits()), Ok(mode));
    }

    #[test]
    fn listing_string_round_trips(mode in valid_modes()) {
        let rendered = mode.to_string();
        prop_assert_eq!(rendered.len(), 10);
        prop_assert_eq!(rendered.parse::<FileMode>(), Ok(mode));
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
mod native {
    use super::{valid_modes, FileMode, FileType};
    use fsinfo::{decode, encode, file_mode};
    use pretty_assertions::assert_eq;
    use proptest::prelude::{prop, prop_assert_eq, proptest};

    const S_IFMT: u32 = 0o170000;

    proptest! {
        #[test]
        fn decode_inverts_encode(mode in valid_modes()) {
            prop_assert_eq!(decode(encode(mode)), mode);
        }

        #[test]
        fn encode_copies_permissions(mode in valid_modes()) {
            prop_assert_eq!(encode(mode) & 0o777, mode.permissions().mode);
            prop_assert_eq!(file_mode(mode), encode(mode));
        }

        #[test]
        fn encode_inverts_decode_for_known_types(
            type_bits in prop::sample::select(vec![
                0o010000u32, 0o020000, 0o040000, 0o060000, 0o100000, 0o120000, 0o140000,
            ]),
            low in 0u32..=0o7777,
        ) {
            let native = type_bits | low;
            prop_assert_eq!(encode(decode(native)), native);
        }
    }

    #[test]
    fn test_regular_setgid_word() {
        let mode = decode(0o100000 | 0o2000 | 0o644);
        assert_eq!(mode.file_type(), FileType::File);
        assert_eq!(mode.permissions().mode, 0o644);
        assert!(mode.contains(FileMode::SETGID));
        assert!(!mode.contains(FileMode::SETUID));
        assert!(!mode.contains(FileMode::STICKY));
    }

    #[test]
    fn test_unknown_native_type_decodes_untagged() {
        let mode = decode(S_IFMT | 0o640);
        assert_eq!(mode.file_type(), FileType::File);
        assert_eq!(encode(mode), 0o100640);
    }
}

/*!
 * Mode Translator
 * Portable FileMode <-> native stat mode word
 */

use nix::sys::stat::{Mode, SFlag};

use super::file_mode::FileMode;

const S_IFMT: u32 = SFlag::S_IFMT.bits() as u32;
const S_IFBLK: u32 = SFlag::S_IFBLK.bits() as u32;
const S_IFCHR: u32 = SFlag::S_IFCHR.bits() as u32;
const S_IFDIR: u32 = SFlag::S_IFDIR.bits() as u32;
const S_IFIFO: u32 = SFlag::S_IFIFO.bits() as u32;
const S_IFLNK: u32 = SFlag::S_IFLNK.bits() as u32;
const S_IFREG: u32 = SFlag::S_IFREG.bits() as u32;
const S_IFSOCK: u32 = SFlag::S_IFSOCK.bits() as u32;

const S_ISUID: u32 = Mode::S_ISUID.bits() as u32;
const S_ISGID: u32 = Mode::S_ISGID.bits() as u32;
const S_ISVTX: u32 = Mode::S_ISVTX.bits() as u32;

const SPECIAL_BITS: [(FileMode, u32); 3] = [
    (FileMode::SETUID, S_ISUID),
    (FileMode::SETGID, S_ISGID),
    (FileMode::STICKY, S_ISVTX),
];

/// Encode a portable mode as the host's native mode word
///
/// Anything that is not one of the known type tags encodes as a regular file.
#[must_use]
pub fn encode(mode: FileMode) -> u32 {
    let type_tag = mode.type_bits();
    let mut native = mode.permissions().mode;

    native |= if type_tag == FileMode::DEVICE {
        S_IFBLK
    } else if type_tag == FileMode::DEVICE | FileMode::CHAR_DEVICE {
        S_IFCHR
    } else if type_tag == FileMode::DIR {
        S_IFDIR
    } else if type_tag == FileMode::NAMED_PIPE {
        S_IFIFO
    } else if type_tag == FileMode::SYMLINK {
        S_IFLNK
    } else if type_tag == FileMode::SOCKET {
        S_IFSOCK
    } else {
        S_IFREG
    };

    for (portable, bit) in SPECIAL_BITS {
        if mode.contains(portable) {
            native |= bit;
        }
    }
    native
}

/// Decode a native mode word into a portable mode
///
/// Type values outside the known set (and `S_IFREG`) decode to no type tag.
#[must_use]
pub fn decode(native: u32) -> FileMode {
    let mut mode = FileMode::from_bits_truncate(native & FileMode::PERM.bits());

    mode |= match native & S_IFMT {
        S_IFBLK => FileMode::DEVICE,
        S_IFCHR => FileMode::DEVICE | FileMode::CHAR_DEVICE,
        S_IFDIR => FileMode::DIR,
        S_IFIFO => FileMode::NAMED_PIPE,
        S_IFLNK => FileMode::SYMLINK,
        S_IFSOCK => FileMode::SOCKET,
        _ => FileMode::empty(),
    };

    for (portable, bit) in SPECIAL_BITS {
        if native & bit != 0 {
            mode |= portable;
        }
    }
    mode
}

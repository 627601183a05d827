/*!
 * Portable File Mode
 * OS-independent encoding of file type, permission and special bits
 */

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::file_type::FileType;
use super::permissions::Permissions;
use crate::core::errors::{ModeError, ModeResult};

bitflags! {
    /// Portable file mode
    ///
    /// The low nine bits are Unix permission bits. File types and special bits
    /// occupy the high bits, so the value never collides with a native mode
    /// word. A regular file carries no type bit; a char device is
    /// `DEVICE | CHAR_DEVICE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FileMode: u32 {
        const DIR = 1 << 31;
        const SYMLINK = 1 << 27;
        const DEVICE = 1 << 26;
        const NAMED_PIPE = 1 << 25;
        const SOCKET = 1 << 24;
        const SETUID = 1 << 23;
        const SETGID = 1 << 22;
        const CHAR_DEVICE = 1 << 21;
        const STICKY = 1 << 20;

        const OWNER_READ = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXEC = 0o100;
        const GROUP_READ = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC = 0o010;
        const OTHER_READ = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC = 0o001;

        const PERM = 0o777;
        const TYPE = Self::DIR.bits()
            | Self::SYMLINK.bits()
            | Self::DEVICE.bits()
            | Self::NAMED_PIPE.bits()
            | Self::SOCKET.bits()
            | Self::CHAR_DEVICE.bits();
        const SPECIAL = Self::SETUID.bits() | Self::SETGID.bits() | Self::STICKY.bits();
    }
}

impl FileMode {
    /// Mode carrying only the type tag of `file_type`
    ///
    /// `FileType::File` and `FileType::Unknown` have no tag.
    #[must_use]
    pub const fn from_type(file_type: FileType) -> Self {
        match file_type {
            FileType::Directory => Self::DIR,
            FileType::Symlink => Self::SYMLINK,
            FileType::BlockDevice => Self::DEVICE,
            FileType::CharDevice => Self::DEVICE.union(Self::CHAR_DEVICE),
            FileType::Fifo => Self::NAMED_PIPE,
            FileType::Socket => Self::SOCKET,
            FileType::File | FileType::Unknown => Self::empty(),
        }
    }

    /// Replace the permission bits, keeping type and special bits
    #[must_use]
    pub const fn with_permissions(self, permissions: u32) -> Self {
        let perm = Self::from_bits_truncate(permissions & Self::PERM.bits());
        self.difference(Self::PERM).union(perm)
    }

    /// Only the type bits
    #[inline]
    #[must_use]
    pub const fn type_bits(self) -> Self {
        self.intersection(Self::TYPE)
    }

    /// File type described by the type bits
    ///
    /// Combinations outside the fixed enumeration report `FileType::Unknown`.
    #[must_use]
    pub fn file_type(self) -> FileType {
        let t = self.type_bits();
        if t.is_empty() {
            FileType::File
        } else if t == Self::DIR {
            FileType::Directory
        } else if t == Self::SYMLINK {
            FileType::Symlink
        } else if t == Self::DEVICE {
            FileType::BlockDevice
        } else if t == Self::DEVICE | Self::CHAR_DEVICE {
            FileType::CharDevice
        } else if t == Self::NAMED_PIPE {
            FileType::Fifo
        } else if t == Self::SOCKET {
            FileType::Socket
        } else {
            FileType::Unknown
        }
    }

    /// Permission bits (`0o777`)
    #[inline]
    #[must_use]
    pub const fn permissions(self) -> Permissions {
        Permissions::new(self.bits())
    }

    #[inline]
    #[must_use]
    pub const fn is_dir(self) -> bool {
        self.contains(Self::DIR)
    }

    #[inline]
    #[must_use]
    pub const fn is_symlink(self) -> bool {
        self.contains(Self::SYMLINK)
    }

    /// No type bit set
    #[inline]
    #[must_use]
    pub const fn is_regular(self) -> bool {
        self.type_bits().is_empty()
    }

    /// Defined bits only, with at most one file type
    #[must_use]
    pub fn is_valid(self) -> bool {
        Self::from_bits(self.bits()).is_some() && self.file_type() != FileType::Unknown
    }
}

impl From<FileType> for FileMode {
    fn from(file_type: FileType) -> Self {
        Self::from_type(file_type)
    }
}

impl From<FileMode> for u32 {
    fn from(mode: FileMode) -> Self {
        mode.bits()
    }
}

impl TryFrom<u32> for FileMode {
    type Error = ModeError;

    fn try_from(bits: u32) -> ModeResult<Self> {
        let unknown = bits & !Self::all().bits();
        let mode = Self::from_bits(bits).ok_or(ModeError::UnknownBits(unknown))?;
        if mode.file_type() == FileType::Unknown {
            return Err(ModeError::ConflictingTypes(mode.type_bits().bits()));
        }
        Ok(mode)
    }
}

/// Long listing form: one type character then three rwx triplets
///
/// Setuid/setgid show as `s`/`S` in the owner/group execute column and sticky
/// as `t`/`T` in the other execute column, uppercase when the execute bit is
/// clear.
impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 10];
        buf[0] = self.file_type().listing_char() as u8;

        let perms = self.permissions();
        let triplets = [
            (perms.user_permissions(), Self::SETUID, b's'),
            (perms.group_permissions(), Self::SETGID, b's'),
            (perms.other_permissions(), Self::STICKY, b't'),
        ];
        for (i, (bits, special, mark)) in triplets.into_iter().enumerate() {
            let at = 1 + i * 3;
            buf[at] = if bits & 0o4 != 0 { b'r' } else { b'-' };
            buf[at + 1] = if bits & 0o2 != 0 { b'w' } else { b'-' };
            let exec = bits & 0o1 != 0;
            buf[at + 2] = match (self.contains(special), exec) {
                (true, true) => mark,
                (true, false) => mark.to_ascii_uppercase(),
                (false, true) => b'x',
                (false, false) => b'-',
            };
        }

        // Every byte written above is ASCII
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for FileMode {
    type Err = ModeError;

    fn from_str(s: &str) -> ModeResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 10 {
            return Err(ModeError::InvalidLength(chars.len()));
        }

        let file_type =
            FileType::from_listing_char(chars[0]).ok_or(ModeError::InvalidTypeChar(chars[0]))?;
        let mut mode = Self::from_type(file_type);

        let triplets = [
            (6, Self::SETUID, 's'),
            (3, Self::SETGID, 's'),
            (0, Self::STICKY, 't'),
        ];
        for (i, (shift, special, mark)) in triplets.into_iter().enumerate() {
            let at = 1 + i * 3;
            let mut bits = 0u32;
            for (offset, (want, bit)) in [('r', 0o4), ('w', 0o2)].into_iter().enumerate() {
                match chars[at + offset] {
                    c if c == want => bits |= bit,
                    '-' => {}
                    found => {
                        return Err(ModeError::InvalidPermissionChar {
                            position: at + offset,
                            found,
                        })
                    }
                }
            }
            match chars[at + 2] {
                'x' => bits |= 0o1,
                '-' => {}
                c if c == mark => {
                    bits |= 0o1;
                    mode |= special;
                }
                c if c == mark.to_ascii_uppercase() => mode |= special,
                found => {
                    return Err(ModeError::InvalidPermissionChar {
                        position: at + 2,
                        found,
                    })
                }
            }
            mode |= Self::from_bits_truncate(bits << shift);
        }

        Ok(mode)
    }
}

impl Serialize for FileMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FileMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Self::try_from(bits).map_err(serde::de::Error::custom)
    }
}

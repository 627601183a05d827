/*!
 * File Type Enum
 * Defines the type of filesystem objects a mode can describe
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// File type enumeration with complete serde support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    File,
    Directory,
    Symlink,
    #[serde(rename = "block_device")]
    BlockDevice,
    #[serde(rename = "char_device")]
    CharDevice,
    Fifo,
    Socket,
    Unknown,
}

impl FileType {
    /// Character used in the first column of a long listing
    #[inline]
    #[must_use]
    pub const fn listing_char(self) -> char {
        match self {
            FileType::File => '-',
            FileType::Directory => 'd',
            FileType::Symlink => 'l',
            FileType::BlockDevice => 'b',
            FileType::CharDevice => 'c',
            FileType::Fifo => 'p',
            FileType::Socket => 's',
            FileType::Unknown => '?',
        }
    }

    /// Inverse of [`FileType::listing_char`]
    #[must_use]
    pub const fn from_listing_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(FileType::File),
            'd' => Some(FileType::Directory),
            'l' => Some(FileType::Symlink),
            'b' => Some(FileType::BlockDevice),
            'c' => Some(FileType::CharDevice),
            'p' => Some(FileType::Fifo),
            's' => Some(FileType::Socket),
            _ => None,
        }
    }
}

impl Default for FileType {
    fn default() -> Self {
        Self::File
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FileType::File => write!(f, "file"),
            FileType::Directory => write!(f, "directory"),
            FileType::Symlink => write!(f, "symlink"),
            FileType::BlockDevice => write!(f, "block device"),
            FileType::CharDevice => write!(f, "char device"),
            FileType::Fifo => write!(f, "fifo"),
            FileType::Socket => write!(f, "socket"),
            FileType::Unknown => write!(f, "unknown"),
        }
    }
}

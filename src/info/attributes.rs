/*!
 * File Attributes
 * Serializable snapshot of every attribute a file info exposes
 */

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::core::serde::{
    is_none, is_zero_u32, is_zero_u64, optional_system_time_micros, system_time_micros,
};
use crate::mode::{FileMode, FileType, Permissions};

/// Attribute snapshot with compact serialization
///
/// Timestamps are serialized as microseconds since the UNIX epoch. Zero
/// ids, sizes and unset times are skipped to keep listings small.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileAttributes {
    pub name: String,
    pub file_type: FileType,
    pub permissions: Permissions,
    pub mode: FileMode,
    pub native_mode: u32,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub size: u64,
    #[serde(skip_serializing_if = "is_zero_u32", default)]
    pub uid: u32,
    #[serde(skip_serializing_if = "is_zero_u32", default)]
    pub gid: u32,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub ino: u64,
    pub nlink: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub device: u64,
    #[serde(with = "system_time_micros")]
    pub modified: SystemTime,
    #[serde(
        with = "optional_system_time_micros",
        skip_serializing_if = "is_none",
        default
    )]
    pub accessed: Option<SystemTime>,
    #[serde(
        with = "optional_system_time_micros",
        skip_serializing_if = "is_none",
        default
    )]
    pub changed: Option<SystemTime>,
}

impl FileAttributes {
    /// Check if this is a special file (device, fifo, socket)
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self.file_type,
            FileType::BlockDevice | FileType::CharDevice | FileType::Fifo | FileType::Socket
        )
    }

    /// Whether OS-level information was available when the snapshot was taken
    #[inline]
    #[must_use]
    pub const fn has_native_times(&self) -> bool {
        self.accessed.is_some() || self.changed.is_some()
    }
}

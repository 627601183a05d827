/*!
 * Permissions
 * Unix-style owner/group/other read-write-execute bits
 */

use serde::{Deserialize, Deserializer, Serialize};

/// Permission bits of a file mode (`0o777` at most)
///
/// Setuid, setgid and sticky are not permission bits here; they live on
/// [`FileMode`](super::FileMode) as separate flags.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(deserialize_with = "deserialize_permission_mode")]
    pub mode: u32,
}

impl Permissions {
    /// Mask applied to every permission value
    pub const MASK: u32 = 0o777;

    /// Create permissions, masking to the valid bits
    #[inline]
    #[must_use]
    pub const fn new(mode: u32) -> Self {
        Self {
            mode: mode & Self::MASK,
        }
    }

    /// Read-only permissions (0o444)
    #[inline]
    #[must_use]
    pub const fn readonly() -> Self {
        Self { mode: 0o444 }
    }

    /// Read-write permissions (0o644)
    #[inline]
    #[must_use]
    pub const fn readwrite() -> Self {
        Self { mode: 0o644 }
    }

    /// Get user permissions (rwx)
    #[inline]
    #[must_use]
    pub const fn user_permissions(&self) -> u32 {
        (self.mode >> 6) & 0o7
    }

    /// Get group permissions (rwx)
    #[inline]
    #[must_use]
    pub const fn group_permissions(&self) -> u32 {
        (self.mode >> 3) & 0o7
    }

    /// Get other permissions (rwx)
    #[inline]
    #[must_use]
    pub const fn other_permissions(&self) -> u32 {
        self.mode & 0o7
    }
}

impl From<u32> for Permissions {
    fn from(mode: u32) -> Self {
        Self::new(mode)
    }
}

impl PartialEq<u32> for Permissions {
    fn eq(&self, other: &u32) -> bool {
        self.mode == *other
    }
}

/// Deserialize and validate permission mode (must be <= 0o777)
fn deserialize_permission_mode<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let mode = u32::deserialize(deserializer)?;
    if mode > Permissions::MASK {
        return Err(serde::de::Error::custom(format!(
            "invalid permission mode: 0o{:o} exceeds maximum 0o777",
            mode
        )));
    }
    Ok(mode)
}

/*!
 * Mode Module
 * Portable file mode and its translation to native stat mode words
 */

mod file_mode;
mod file_type;
mod permissions;

#[cfg(any(target_os = "linux", target_os = "macos"))]
pub mod translate;

pub use file_mode::FileMode;
pub use file_type::FileType;
pub use permissions::Permissions;

#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use translate::{decode, encode};

/// Convert a portable mode to the system representation
///
/// On platforms without a native stat layout only the permission bits are
/// meaningful, so nothing else is kept.
#[must_use]
pub fn file_mode(mode: FileMode) -> u32 {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        encode(mode)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        mode.permissions().mode
    }
}

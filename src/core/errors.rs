/*!
 * Error Types
 * Mode parsing and validation errors with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mode operation result
pub type ModeResult<T> = Result<T, ModeError>;

/// Errors raised while validating or parsing a portable file mode
///
/// Constructing and reading file info never fails; only the edges that accept
/// untrusted bits or strings do.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error", content = "details", rename_all = "snake_case")]
pub enum ModeError {
    #[error("Unknown mode bits: 0x{0:08x}")]
    #[diagnostic(
        code(mode::unknown_bits),
        help("Only permission, type, setuid, setgid and sticky bits are defined.")
    )]
    UnknownBits(u32),

    #[error("Conflicting file type bits: 0x{0:08x}")]
    #[diagnostic(
        code(mode::conflicting_types),
        help("At most one file type may be set; a char device is DEVICE | CHAR_DEVICE.")
    )]
    ConflictingTypes(u32),

    #[error("Mode string must be 10 characters, got {0}")]
    #[diagnostic(
        code(mode::invalid_length),
        help("Use the long listing form, e.g. \"drwxr-xr-x\".")
    )]
    InvalidLength(usize),

    #[error("Invalid file type character: {0:?}")]
    #[diagnostic(
        code(mode::invalid_type_char),
        help("Expected one of '-', 'd', 'l', 'b', 'c', 'p', 's'.")
    )]
    InvalidTypeChar(char),

    #[error("Invalid permission character {found:?} at position {position}")]
    #[diagnostic(
        code(mode::invalid_permission_char),
        help("Permission columns accept r, w, x, '-', and s/S/t/T in the execute columns.")
    )]
    InvalidPermissionChar { position: usize, found: char },
}

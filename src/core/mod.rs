/*!
 * Core Module
 * Error types, serde helpers and time conversions shared by the crate
 */

pub mod errors;
pub mod serde;
pub mod timespec;

// Re-export for convenience
pub use errors::*;
pub use timespec::{from_timespec, to_timespec};

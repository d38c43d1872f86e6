//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena construction or placement.
///
/// Running out of host memory is not represented here: provisioning
/// failure aborts through [`std::alloc::handle_alloc_error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena configuration was rejected at construction.
    InvalidConfig {
        /// Human-readable description of the violated constraint.
        reason: String,
    },
    /// An array request whose total byte size cannot be represented.
    LayoutOverflow {
        /// Size of one element in bytes.
        elem_size: usize,
        /// Number of elements requested.
        len: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
            Self::LayoutOverflow { elem_size, len } => {
                write!(
                    f,
                    "array layout overflow: {len} elements of {elem_size} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}

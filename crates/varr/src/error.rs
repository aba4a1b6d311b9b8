//! Container-specific error types.

use std::error::Error;
use std::fmt;

use varr_core::Revision;

/// Errors reported by the checked access tier of [`DynArray`].
///
/// [`DynArray`]: crate::DynArray
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A checked access at a position not less than the current length.
    OutOfRange {
        /// The requested position.
        pos: usize,
        /// The container's length at the time of the access.
        len: usize,
    },
    /// A cursor issued before the container's last structural mutation.
    StaleCursor {
        /// The revision stamped on the cursor.
        cursor: Revision,
        /// The container's current revision.
        live: Revision,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, len } => {
                write!(f, "position {pos} out of range: length is {len}")
            }
            Self::StaleCursor { cursor, live } => {
                write!(f, "stale cursor: issued at revision {cursor}, container is at {live}")
            }
        }
    }
}

impl Error for ArrayError {}

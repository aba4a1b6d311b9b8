//! The [`Revision`] counter type.

use std::fmt;

/// Monotonically increasing structural-mutation counter.
///
/// A container starts at `Revision(0)` and advances via [`Revision::next`]
/// each time it reallocates or shifts its backing store. Cursors carry the
/// revision they were issued at; a mismatch between a cursor's stamp and
/// the container's current revision means the cursor's slot index no longer
/// describes the buffer it was taken from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Revision(pub u64);

impl Revision {
    /// The successor revision.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Revision {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

//! Index-based traversal cursors.
//!
//! A [`Cursor`] encodes a position within a container's live range as a
//! slot index plus the [`Revision`] the container was at when the cursor
//! was issued. It is revision-scoped: the stamp allows O(1) staleness
//! checks at resolution time without the cursor holding any reference
//! into the backing store.

use std::fmt;
use std::ops::{Add, Sub};

use crate::rev::Revision;

/// Position handle into a container's backing store.
///
/// Cursors are plain `Copy` values: they own nothing, borrow nothing, and
/// stepping or offsetting one never touches the container. Dereference
/// lives on the container (`get` / `get_mut`), which is where the revision
/// stamp is checked.
///
/// Two cursors are equal iff they reference the same slot of the same
/// container revision. After a reallocation or shift the container is at a
/// new revision, so a pre-mutation cursor never compares equal to a fresh
/// one even at the same index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Slot index; `len` marks the one-past-last sentinel.
    pos: usize,
    /// Container revision at issue time.
    revision: Revision,
}

impl Cursor {
    /// Create a cursor at the given slot with the given revision stamp.
    ///
    /// Containers issue cursors through their own `begin`/`end`; direct
    /// construction exists for the container crate and for tests.
    pub fn new(pos: usize, revision: Revision) -> Self {
        Self { pos, revision }
    }

    /// The slot index this cursor references.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The revision stamp this cursor was issued at.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Step one slot forward, returning the updated cursor.
    ///
    /// `Cursor` is `Copy`, so the post-step convention is a caller-side
    /// copy taken before the call.
    pub fn advance(&mut self) -> Self {
        self.pos += 1;
        *self
    }

    /// Step one slot backward, returning the updated cursor.
    ///
    /// Retreating from slot zero is a contract violation; debug builds
    /// panic on the underflow.
    pub fn retreat(&mut self) -> Self {
        self.pos -= 1;
        *self
    }

    /// A cursor shifted `n` slots (negative `n` shifts backward).
    ///
    /// No bounds check is performed; the result is only meaningful while it
    /// stays within `[0, len]` of the issuing container.
    pub fn offset(self, n: isize) -> Self {
        Self {
            pos: self.pos.wrapping_add_signed(n),
            revision: self.revision,
        }
    }

    /// Signed distance from `other` to `self`, in slots.
    ///
    /// Both cursors must have been issued by the same container at the same
    /// revision for the distance to mean anything; that is a caller
    /// contract, not a checked condition.
    pub fn offset_from(self, other: Self) -> isize {
        self.pos as isize - other.pos as isize
    }
}

impl Add<isize> for Cursor {
    type Output = Cursor;

    fn add(self, n: isize) -> Cursor {
        self.offset(n)
    }
}

impl Add<Cursor> for isize {
    type Output = Cursor;

    fn add(self, c: Cursor) -> Cursor {
        c.offset(self)
    }
}

impl Sub<isize> for Cursor {
    type Output = Cursor;

    fn sub(self, n: isize) -> Cursor {
        self.offset(-n)
    }
}

impl Sub<Cursor> for isize {
    type Output = Cursor;

    fn sub(self, c: Cursor) -> Cursor {
        c.offset(-self)
    }
}

impl Sub<Cursor> for Cursor {
    type Output = isize;

    fn sub(self, other: Cursor) -> isize {
        self.offset_from(other)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor(pos={}, rev={})", self.pos, self.revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(pos: usize) -> Cursor {
        Cursor::new(pos, Revision(0))
    }

    #[test]
    fn advance_and_retreat_step_one_slot() {
        let mut c = at(3);
        assert_eq!(c.advance().position(), 4);
        assert_eq!(c.position(), 4);
        assert_eq!(c.retreat().position(), 3);
    }

    #[test]
    fn advance_returns_updated_cursor() {
        let mut c = at(0);
        let stepped = c.advance();
        assert_eq!(stepped, c);
        assert_eq!(stepped.position(), 1);
    }

    #[test]
    fn offset_is_symmetric() {
        let c = at(5);
        assert_eq!((c + 3).position(), 8);
        assert_eq!((3 + c).position(), 8);
        assert_eq!((c - 2).position(), 3);
        assert_eq!((2 - c).position(), 3);
    }

    #[test]
    fn offset_accepts_negative_shift() {
        let c = at(5);
        assert_eq!(c.offset(-5).position(), 0);
    }

    #[test]
    fn cursor_difference_is_signed_distance() {
        assert_eq!(at(7) - at(2), 5);
        assert_eq!(at(2) - at(7), -5);
    }

    #[test]
    fn equality_requires_matching_revision() {
        let a = Cursor::new(4, Revision(1));
        let b = Cursor::new(4, Revision(1));
        let stale = Cursor::new(4, Revision(0));
        assert_eq!(a, b);
        assert_ne!(a, stale);
    }

    #[test]
    fn offset_preserves_revision() {
        let c = Cursor::new(0, Revision(9));
        assert_eq!((c + 4).revision(), Revision(9));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn offset_then_inverse_is_identity(
                pos in 0usize..10_000,
                n in -1_000isize..1_000,
            ) {
                let c = at(pos);
                prop_assert_eq!((c + n) - n, c);
            }

            #[test]
            fn distance_matches_offset(
                pos in 0usize..10_000,
                n in 0isize..1_000,
            ) {
                let c = at(pos);
                prop_assert_eq!((c + n) - c, n);
            }

            #[test]
            fn advance_k_times_equals_offset_k(
                pos in 0usize..1_000,
                k in 0usize..64,
            ) {
                let mut walked = at(pos);
                for _ in 0..k {
                    walked.advance();
                }
                prop_assert_eq!(walked, at(pos).offset(k as isize));
            }
        }
    }
}

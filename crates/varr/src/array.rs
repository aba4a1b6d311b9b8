//! The [`DynArray`] container.
//!
//! `DynArray<T>` keeps `(len, capacity)` as its only state machine: the
//! live prefix `[0, len)` holds constructed elements, `[len, capacity)` is
//! unspecified, and capacity grows by unconditional doubling whenever an
//! insertion would overflow it. Structural mutations (anything that
//! reallocates or shifts the backing store) advance the container's
//! [`Revision`], which is how previously issued [`Cursor`]s become
//! detectably stale instead of silently aliasing moved memory.

use std::fmt;
use std::ops::{Index, IndexMut};

use varr_core::{Cursor, Revision};

use crate::error::ArrayError;
use crate::storage::Store;

/// A growable contiguous container with cursor-positioned editing.
///
/// Elements are kept in one exclusively owned buffer. Insertion and removal
/// away from the back shift the tail block; growth copies the live prefix
/// into a fresh doubled allocation. Both kinds of move bump the revision.
///
/// Element types are restricted to simple copy semantics: `T: Clone +
/// Default` for anything that constructs or grows (`Default` supplies the
/// filler for not-yet-live slots, the safe analogue of an uninitialised
/// buffer).
pub struct DynArray<T> {
    /// Number of live elements.
    len: usize,
    /// Backing buffer with recorded capacity.
    store: Store<T>,
    /// Advanced on every reallocation or shift; stamps issued cursors.
    revision: Revision,
}

impl<T: Clone + Default> DynArray<T> {
    /// Default recorded capacity of an empty container.
    const INITIAL_CAPACITY: usize = 1;

    /// Create an empty container with a small initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    /// Create a container with `cap` slots reserved but zero length.
    ///
    /// Capacity is reserved up front, yet the container reports
    /// `len() == 0` immediately after construction; the reserved slots
    /// become live only through subsequent pushes or inserts.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            len: 0,
            store: Store::with_capacity(cap),
            revision: Revision::default(),
        }
    }

    /// Create a container holding clones of `values`, capacity sized to
    /// exactly the source length.
    pub fn from_slice(values: &[T]) -> Self {
        let mut store = Store::with_capacity(values.len());
        store.slice_mut(values.len()).clone_from_slice(values);
        Self {
            len: values.len(),
            store,
            revision: Revision::default(),
        }
    }

    /// Append `value` at the back, growing (doubling) if full.
    ///
    /// Amortized O(1); O(n) on a growth step. Growth bumps the revision;
    /// a plain append does not.
    pub fn push_back(&mut self, value: T) {
        if self.ensure_room(self.len + 1) {
            self.bump();
        }
        *self.store.slot_mut(self.len) = value;
        self.len += 1;
    }

    /// Insert `value` at the front, shifting every live element one slot
    /// toward the back. Always O(n); always bumps the revision.
    pub fn push_front(&mut self, value: T) {
        self.ensure_room(self.len + 1);
        self.len += 1;
        self.store.slice_mut(self.len).rotate_right(1);
        *self.store.slot_mut(0) = value;
        self.bump();
    }

    /// Replace the contents with `count` clones of `value`.
    ///
    /// Capacity grows (doubling) if `count` exceeds it.
    pub fn assign(&mut self, count: usize, value: T) {
        self.clear();
        if self.ensure_room(count) {
            self.bump();
        }
        self.store.slice_mut(count).fill(value);
        self.len = count;
    }

    /// Replace the contents with clones of `values`.
    pub fn assign_from_slice(&mut self, values: &[T]) {
        self.clear();
        if self.ensure_room(values.len()) {
            self.bump();
        }
        self.store.slice_mut(values.len()).clone_from_slice(values);
        self.len = values.len();
    }

    /// Replace the contents with the elements yielded by `values`.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.clear();
        for v in values {
            self.push_back(v);
        }
    }

    /// Reallocate to exactly `new_cap` slots if that exceeds the current
    /// capacity; otherwise a no-op (and no revision bump).
    ///
    /// This is the one growth path that does not double.
    pub fn reserve(&mut self, new_cap: usize) {
        if self.store.grow_to(new_cap, self.len) {
            self.bump();
        }
    }

    /// Insert `value` immediately before the cursor `at`.
    ///
    /// Returns a fresh cursor to the inserted element. A cursor from an
    /// older revision yields [`ArrayError::StaleCursor`]. A position past
    /// the current length does *not* error: the container is left untouched
    /// and `Ok(begin())` is returned, so callers that need to detect that
    /// case must check the returned cursor. O(n).
    pub fn insert(&mut self, at: Cursor, value: T) -> Result<Cursor, ArrayError> {
        let pos = self.check(at)?;
        if pos > self.len {
            return Ok(self.begin());
        }
        self.ensure_room(self.len + 1);
        self.len += 1;
        self.store.slice_mut(self.len)[pos..].rotate_right(1);
        *self.store.slot_mut(pos) = value;
        self.bump();
        Ok(Cursor::new(pos, self.revision))
    }

    /// Insert clones of `values` immediately before the cursor `at`,
    /// preserving their order.
    ///
    /// Same stale and past-the-length rules as [`DynArray::insert`]. The
    /// tail block shifts right by `values.len()` in one move. O(n + k).
    pub fn insert_from_slice(&mut self, at: Cursor, values: &[T]) -> Result<Cursor, ArrayError> {
        let pos = self.check(at)?;
        if pos > self.len {
            return Ok(self.begin());
        }
        let k = values.len();
        if k == 0 {
            return Ok(Cursor::new(pos, self.revision));
        }
        self.ensure_room(self.len + k);
        self.len += k;
        let live = self.store.slice_mut(self.len);
        live[pos..].rotate_right(k);
        live[pos..pos + k].clone_from_slice(values);
        self.bump();
        Ok(Cursor::new(pos, self.revision))
    }

    /// Insert the elements yielded by `values` immediately before `at`.
    pub fn insert_iter<I>(&mut self, at: Cursor, values: I) -> Result<Cursor, ArrayError>
    where
        I: IntoIterator<Item = T>,
    {
        let buf: Vec<T> = values.into_iter().collect();
        self.insert_from_slice(at, &buf)
    }

    /// Raise recorded capacity to at least `needed` by doubling (from 1 if
    /// previously 0). Returns whether the capacity changed.
    fn ensure_room(&mut self, needed: usize) -> bool {
        let current = self.store.capacity();
        if needed <= current {
            return false;
        }
        let mut cap = current.max(1);
        while cap < needed {
            cap *= 2;
        }
        self.store.grow_to(cap, self.len)
    }
}

impl<T> DynArray<T> {
    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Recorded capacity of the backing store.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next insertion would trigger growth.
    pub fn is_full(&self) -> bool {
        self.len == self.store.capacity()
    }

    /// The revision cursors are currently stamped with.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Drop all elements logically; capacity and revision are retained.
    ///
    /// Nothing shifts or reallocates, so outstanding cursors stay fresh —
    /// ones past the new length simply resolve to `OutOfRange`.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Remove the last element. O(1), no revision bump.
    ///
    /// Calling this on an empty container is a contract violation; debug
    /// builds panic.
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back on empty container");
        self.len -= 1;
    }

    /// Remove the first element, shifting the rest one slot toward the
    /// front. O(n); bumps the revision.
    ///
    /// Calling this on an empty container is a contract violation; debug
    /// builds panic.
    pub fn pop_front(&mut self) {
        debug_assert!(!self.is_empty(), "pop_front on empty container");
        self.store.slice_mut(self.len).rotate_left(1);
        self.len -= 1;
        self.bump();
    }

    /// Remove the element at the cursor `at`, shifting the tail left.
    ///
    /// Returns a fresh cursor to the slot now holding what followed the
    /// erased element (equal to `end()` when the last element was erased).
    /// A stale cursor yields [`ArrayError::StaleCursor`]; a position at or
    /// past the length is a contract violation checked only in debug
    /// builds. O(n).
    pub fn erase(&mut self, at: Cursor) -> Result<Cursor, ArrayError> {
        let pos = self.check(at)?;
        debug_assert!(pos < self.len, "erase at {pos} past length {}", self.len);
        self.store.slice_mut(self.len)[pos..].rotate_left(1);
        self.len -= 1;
        self.bump();
        Ok(Cursor::new(pos, self.revision))
    }

    /// Remove the elements in `[first, last)`, shifting the tail into the
    /// gap.
    ///
    /// Returns a fresh cursor to the first element after the erased range.
    /// An empty range mutates nothing and keeps the revision.
    pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> Result<Cursor, ArrayError> {
        let first_pos = self.check(first)?;
        let last_pos = self.check(last)?;
        debug_assert!(
            first_pos <= last_pos && last_pos <= self.len,
            "erase_range [{first_pos}, {last_pos}) invalid for length {}",
            self.len
        );
        let k = last_pos - first_pos;
        if k == 0 {
            return Ok(Cursor::new(first_pos, self.revision));
        }
        self.store.slice_mut(self.len)[first_pos..].rotate_left(k);
        self.len -= k;
        self.bump();
        Ok(Cursor::new(first_pos, self.revision))
    }

    /// Lower the recorded capacity to exactly the current length.
    ///
    /// Purely logical: the physical buffer is not reallocated, and later
    /// growth reuses it when it still fits. No revision bump.
    pub fn shrink_to_fit(&mut self) {
        self.store.shrink_record(self.len);
    }

    /// Checked access: the element at `pos`, or
    /// [`ArrayError::OutOfRange`] when `pos >= len()`.
    pub fn at(&self, pos: usize) -> Result<&T, ArrayError> {
        if pos >= self.len {
            return Err(ArrayError::OutOfRange { pos, len: self.len });
        }
        Ok(self.store.slot(pos))
    }

    /// Checked mutable access counterpart of [`DynArray::at`].
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, ArrayError> {
        if pos >= self.len {
            return Err(ArrayError::OutOfRange { pos, len: self.len });
        }
        Ok(self.store.slot_mut(pos))
    }

    /// The first element. Unchecked tier: empty containers are a contract
    /// violation, asserted only in debug builds.
    pub fn front(&self) -> &T {
        debug_assert!(!self.is_empty(), "front on empty container");
        self.store.slot(0)
    }

    /// Mutable counterpart of [`DynArray::front`].
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "front on empty container");
        self.store.slot_mut(0)
    }

    /// The last element. Unchecked tier, as [`DynArray::front`].
    pub fn back(&self) -> &T {
        debug_assert!(!self.is_empty(), "back on empty container");
        self.store.slot(self.len.wrapping_sub(1))
    }

    /// Mutable counterpart of [`DynArray::back`].
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "back on empty container");
        self.store.slot_mut(self.len.wrapping_sub(1))
    }

    /// The live elements as one contiguous slice.
    pub fn as_slice(&self) -> &[T] {
        self.store.slice(self.len)
    }

    /// The live elements as one contiguous mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.store.slice_mut(self.len)
    }

    /// Cursor at slot 0, stamped with the current revision.
    pub fn begin(&self) -> Cursor {
        Cursor::new(0, self.revision)
    }

    /// Cursor at the one-past-last slot, stamped with the current revision.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.len, self.revision)
    }

    /// Resolve a cursor to a shared element reference.
    ///
    /// This is where cursor dereference lives: the revision stamp is
    /// compared first ([`ArrayError::StaleCursor`] on mismatch), then the
    /// position is bounds-checked against the live range
    /// ([`ArrayError::OutOfRange`] covers `end()` and anything beyond).
    pub fn get(&self, c: Cursor) -> Result<&T, ArrayError> {
        let pos = self.check(c)?;
        self.at(pos)
    }

    /// Resolve a cursor to a mutable element reference.
    pub fn get_mut(&mut self, c: Cursor) -> Result<&mut T, ArrayError> {
        let pos = self.check(c)?;
        self.at_mut(pos)
    }

    /// Iterator over shared references to the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterator over mutable references to the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Reject cursors from older revisions; pass the position through.
    fn check(&self, c: Cursor) -> Result<usize, ArrayError> {
        if c.revision() != self.revision {
            return Err(ArrayError::StaleCursor {
                cursor: c.revision(),
                live: self.revision,
            });
        }
        Ok(c.position())
    }

    /// Advance the revision, invalidating all outstanding cursors.
    fn bump(&mut self) {
        self.revision = self.revision.next();
    }
}

impl<T: Clone + Default> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynArray<T> {
    /// Duplicate the live elements into freshly allocated storage sized to
    /// the source's recorded capacity. The clone starts at revision 0.
    fn clone(&self) -> Self {
        let mut store = Store::with_capacity(self.capacity());
        store.slice_mut(self.len).clone_from_slice(self.as_slice());
        Self {
            len: self.len,
            store,
            revision: Revision::default(),
        }
    }
}

impl<T: Clone + Default> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut arr = Self::new();
        for v in values {
            arr.push_back(v);
        }
        arr
    }
}

impl<T: Clone + Default, const N: usize> From<[T; N]> for DynArray<T> {
    /// Array-literal construction, capacity sized to exactly `N`.
    fn from(values: [T; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    /// Equal lengths and pairwise-equal elements; capacity and revision do
    /// not participate.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// Unchecked tier: no length check beyond a debug assertion. Release
    /// builds may return an unspecified value from `[len, capacity)`;
    /// only indexing past the physical buffer panics.
    fn index(&self, pos: usize) -> &T {
        debug_assert!(pos < self.len, "index {pos} out of range (len {})", self.len);
        self.store.slot(pos)
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, pos: usize) -> &mut T {
        debug_assert!(pos < self.len, "index {pos} out of range (len {})", self.len);
        self.store.slot_mut(pos)
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Debug> fmt::Display for DynArray<T> {
    /// Human-readable dump of contents and capacity. Diagnostic only, not
    /// part of the functional contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DynArray(len={}, cap={}, rev={}, {:?})",
            self.len,
            self.capacity(),
            self.revision,
            self.as_slice()
        )
    }
}

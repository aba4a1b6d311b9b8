//! The owned growable backing buffer.
//!
//! A [`Store`] is a contiguous `Vec<T>` allocated to full capacity and
//! default-filled, paired with a *recorded* capacity. The two diverge in one
//! direction only: a logical shrink lowers the recorded capacity without
//! touching the buffer, so the physical allocation is always at least as
//! large as whatever capacity the container reports.

/// Contiguous element storage with a recorded capacity.
///
/// Slots are default-initialised at allocation, which is the safe stand-in
/// for an uninitialised buffer: the container treats everything past its
/// live prefix as unspecified and never reads it through the public API.
pub(crate) struct Store<T> {
    /// Backing buffer. Allocated to full length at creation or growth.
    slots: Vec<T>,
    /// Recorded capacity; `cap <= slots.len()` at all times.
    cap: usize,
}

impl<T> Store<T> {
    /// Recorded capacity in slots.
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Lower the recorded capacity to `len` without reallocating.
    pub(crate) fn shrink_record(&mut self, len: usize) {
        debug_assert!(len <= self.cap);
        self.cap = len;
    }

    /// Shared view of the first `len` slots.
    pub(crate) fn slice(&self, len: usize) -> &[T] {
        &self.slots[..len]
    }

    /// Mutable view of the first `len` slots.
    pub(crate) fn slice_mut(&mut self, len: usize) -> &mut [T] {
        &mut self.slots[..len]
    }

    /// Shared reference to a single slot.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the physical buffer.
    pub(crate) fn slot(&self, pos: usize) -> &T {
        &self.slots[pos]
    }

    /// Mutable reference to a single slot.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the physical buffer.
    pub(crate) fn slot_mut(&mut self, pos: usize) -> &mut T {
        &mut self.slots[pos]
    }
}

impl<T: Clone + Default> Store<T> {
    /// Allocate a store with the given recorded capacity, default-filled.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            slots: vec![T::default(); cap],
            cap,
        }
    }

    /// Raise the recorded capacity to `new_cap`, preserving the first
    /// `live` slots.
    ///
    /// Reallocates (fresh default-filled buffer, live prefix copied over,
    /// old buffer discarded) only when the physical buffer is too small;
    /// after a logical shrink the existing allocation may already cover the
    /// request. Returns whether the recorded capacity changed.
    pub(crate) fn grow_to(&mut self, new_cap: usize, live: usize) -> bool {
        if new_cap <= self.cap {
            return false;
        }
        if new_cap > self.slots.len() {
            let mut fresh = vec![T::default(); new_cap];
            fresh[..live].clone_from_slice(&self.slots[..live]);
            self.slots = fresh;
        }
        self.cap = new_cap;
        true
    }
}

//! A minimal dynamic array with doubling growth and revision-checked cursors.
//!
//! [`DynArray`] owns a contiguous, resizable backing store and supports
//! insertion and removal at the front, back, and any cursor position.
//! Capacity grows by unconditional doubling and shrinks only through an
//! explicit (and purely logical) [`DynArray::shrink_to_fit`].
//!
//! # Architecture
//!
//! ```text
//! DynArray<T>
//! ├── Store<T>     (owned backing buffer, recorded vs physical capacity)
//! ├── len          (live prefix length)
//! └── Revision     (bumped on every reallocation or element shift)
//!       └── Cursor (index + revision stamp, issued by begin()/end())
//! ```
//!
//! # Access tiers
//!
//! Element access comes in two deliberate tiers:
//!
//! - **Unchecked:** `array[i]`, [`DynArray::front`], [`DynArray::back`].
//!   Preconditions are the caller's problem; debug builds assert, release
//!   builds may hand back an unspecified in-capacity value.
//! - **Checked:** [`DynArray::at`] and cursor resolution via
//!   [`DynArray::get`] / [`DynArray::get_mut`], which report
//!   [`ArrayError::OutOfRange`] and [`ArrayError::StaleCursor`].
//!
//! # Cursor invalidation
//!
//! Any operation that reallocates or shifts the backing store (growth,
//! insert, erase, assign, push_front, pop_front) bumps the container's
//! revision. Cursors issued earlier resolve to `StaleCursor` afterwards
//! rather than aliasing a moved buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod error;
mod storage;

pub use array::DynArray;
pub use error::ArrayError;

// Re-export the handle types so callers need only one crate.
pub use varr_core::{Cursor, Revision};

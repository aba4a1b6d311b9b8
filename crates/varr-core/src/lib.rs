//! Revision stamps and index-based cursors for the varr container.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! two value types the container crate builds on: [`Revision`], a monotonic
//! counter the container bumps on every structural mutation, and [`Cursor`],
//! a traversal handle that pairs a slot index with the revision it was
//! issued at. The pairing is what makes cursor invalidation a checkable
//! condition instead of a dangling reference: the container compares stamps
//! at resolution time in O(1).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod rev;

pub use cursor::Cursor;
pub use rev::Revision;

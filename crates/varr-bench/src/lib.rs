//! Benchmark fixtures for the varr dynamic array.
//!
//! Provides deterministic container builders shared by the criterion
//! benches, so every bench measures the same shapes:
//!
//! - [`sequential_array`]: `n` elements pushed at the back
//! - [`prefilled_array`]: `n` elements with capacity reserved up front

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use varr::DynArray;

/// Build an array of `n` sequential values via repeated `push_back`,
/// exercising the doubling growth path.
pub fn sequential_array(n: usize) -> DynArray<u64> {
    let mut arr = DynArray::new();
    for i in 0..n {
        arr.push_back(i as u64);
    }
    arr
}

/// Build an array of `n` sequential values with capacity reserved up
/// front, so pushes never reallocate.
pub fn prefilled_array(n: usize) -> DynArray<u64> {
    let mut arr = DynArray::with_capacity(n);
    for i in 0..n {
        arr.push_back(i as u64);
    }
    arr
}

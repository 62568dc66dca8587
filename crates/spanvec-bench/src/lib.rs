//! Benchmark fixtures for the spanvec container.
//!
//! Provides deterministic vector builders so the criterion targets in
//! `benches/` measure container work rather than input generation.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spanvec::SpanVec;

/// Build a vector of `n` 4-byte elements with a scrambled but
/// deterministic value sequence (splitmix-style mixing of the index).
pub fn scrambled_u32s(n: usize, seed: u64) -> SpanVec {
    let mut vec = SpanVec::with_capacity_of::<u32>(n).expect("bench allocation");
    for i in 0..n {
        let mut x = seed
            .wrapping_add(i as u64)
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        x ^= x >> 31;
        vec.push_value(x as u32).expect("capacity pre-reserved");
    }
    vec
}

/// Build a vector of `n` ascending 4-byte elements.
pub fn ascending_u32s(n: usize) -> SpanVec {
    let mut vec = SpanVec::with_capacity_of::<u32>(n).expect("bench allocation");
    for i in 0..n {
        vec.push_value(i as u32).expect("capacity pre-reserved");
    }
    vec
}

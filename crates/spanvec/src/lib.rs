//! Type-erased growable vector parametrized by a runtime element size.
//!
//! [`SpanVec`] owns a single contiguous byte buffer and manipulates
//! elements as opaque, fixed-width byte spans — the element type is erased
//! to an `elem_size` chosen at construction. Operations that need meaning
//! (ordering, equality, textual form) take caller-supplied capabilities:
//!
//! - [`Comparator`] — a total order over two encoded elements;
//! - [`Printer`] — formats one encoded element to a textual stream.
//!
//! Both have blanket impls for the matching closures, plus zero-sized
//! adapters ([`ScalarOrd`], [`ScalarDisplay`]) over the fixed-width scalar
//! types via the [`Scalar`] trait. A typed convenience layer
//! (`SpanVec::of::<T>()`, `push_value`, `get_value`, …) infers the element
//! size from a `Scalar` type at the call site.
//!
//! # Ownership and failure
//!
//! The buffer is exclusively owned; [`SpanVec::from_buffer`] adopts a
//! caller's `Vec<u8>` without copying, and [`SpanVec::take`] /
//! [`SpanVec::move_assign`] transfer it on, leaving the donor empty and
//! reusable. Allocation goes through `Vec::try_reserve_exact`, so
//! out-of-memory surfaces as [`VecError::AllocationFailed`] with the
//! receiver unchanged — every fallible operation carries that strong
//! guarantee. Out-of-bounds indices and element-width mismatches panic.
//!
//! # Example
//!
//! ```
//! use spanvec::{ScalarDisplay, ScalarOrd, SpanVec};
//!
//! let mut vec = SpanVec::with_capacity_of::<i32>(0)?;
//! for v in [3, 1, 2] {
//!     vec.push_value::<i32>(v)?;
//! }
//! vec.sort_by(&ScalarOrd::<i32>::new());
//!
//! assert_eq!(vec.find_value(2i32), Some(1));
//! assert_eq!(vec.format_with(&ScalarDisplay::<i32>::new()).unwrap(), "[1, 2, 3]");
//! # Ok::<(), spanvec::VecError>(())
//! ```
//!
//! # Non-goals
//!
//! Single-owner, single-threaded use only: no internal locking, no
//! iterator/view types, no allocator injection. Comparator and printer
//! callbacks must not reenter the vector they are invoked on.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod algo;
pub mod cmp;
pub mod error;
pub mod print;
pub mod scalar;
mod typed;
pub mod vec;

pub use cmp::{Comparator, ScalarOrd};
pub use error::VecError;
pub use print::{Printer, ScalarDisplay};
pub use scalar::Scalar;
pub use vec::SpanVec;

//! Error types for container construction and allocation.

use std::error::Error;
use std::fmt;

/// Errors from fallible [`SpanVec`](crate::SpanVec) operations.
///
/// Covers construction argument validation and allocation failure. Every
/// fallible operation leaves the receiver unchanged when it returns one of
/// these — there is no partial-mutation state to recover from.
///
/// Precondition violations (out-of-bounds indices, element-width
/// mismatches) are programmer errors and panic instead; see the `# Panics`
/// sections on the individual operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecError {
    /// An element size of zero was passed to a constructor.
    ZeroElementSize,
    /// A caller-supplied buffer's byte length is not a whole number of
    /// elements.
    BufferSizeMismatch {
        /// Byte length of the supplied buffer.
        buffer_bytes: usize,
        /// The element size the buffer was measured against.
        elem_size: usize,
    },
    /// `elements * elem_size` overflows `usize` — the request can never
    /// be satisfied.
    CapacityOverflow {
        /// Requested element count.
        elements: usize,
        /// Element size in bytes.
        elem_size: usize,
    },
    /// The allocator could not provide the requested buffer.
    AllocationFailed {
        /// Total byte size of the failed request.
        requested_bytes: usize,
    },
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroElementSize => write!(f, "element size must be non-zero"),
            Self::BufferSizeMismatch {
                buffer_bytes,
                elem_size,
            } => {
                write!(
                    f,
                    "buffer of {buffer_bytes} bytes is not a whole number of {elem_size}-byte elements"
                )
            }
            Self::CapacityOverflow {
                elements,
                elem_size,
            } => {
                write!(
                    f,
                    "capacity overflow: {elements} elements of {elem_size} bytes exceeds usize"
                )
            }
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
        }
    }
}

impl Error for VecError {}

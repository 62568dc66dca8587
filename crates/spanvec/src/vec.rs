//! The type-erased vector: buffer ownership, growth, and mutation.
//!
//! [`SpanVec`] stores elements as opaque, fixed-width byte spans in a single
//! contiguous `Vec<u8>`. The backing vector's byte length is always exactly
//! `capacity * elem_size` — capacity is derived from it, never stored — and
//! every byte inside the allocated region is zeroed before it can become
//! part of a logical element. All allocation goes through
//! `Vec::try_reserve_exact`, so out-of-memory reports as
//! [`VecError::AllocationFailed`] and the receiver is left unchanged.

use crate::error::VecError;
use std::mem;

/// Total byte size of `elements` elements, or `CapacityOverflow`.
fn byte_len(elements: usize, elem_size: usize) -> Result<usize, VecError> {
    elements
        .checked_mul(elem_size)
        .ok_or(VecError::CapacityOverflow {
            elements,
            elem_size,
        })
}

/// Allocate a fresh zeroed buffer of exactly `bytes` bytes.
fn alloc_exact(bytes: usize) -> Result<Vec<u8>, VecError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| VecError::AllocationFailed {
            requested_bytes: bytes,
        })?;
    buf.resize(bytes, 0);
    Ok(buf)
}

/// A growable contiguous container whose element type is erased to a
/// runtime byte width.
///
/// Elements are handled purely as `elem_size`-wide byte spans, copied
/// verbatim and never interpreted. Algorithms that need meaning — ordering,
/// equality, textual form — take a [`Comparator`](crate::Comparator) or
/// [`Printer`](crate::Printer).
///
/// # Failure policy
///
/// Allocation failure and invalid construction arguments return
/// [`VecError`] with the receiver unchanged. Out-of-bounds indices and
/// element-width mismatches are programmer errors and panic.
///
/// # Growth policy
///
/// `push`/`insert` double the capacity when the buffer is full (zero grows
/// to one), amortizing appends to O(1). Callers needing tighter memory
/// behaviour use [`reserve`](Self::reserve) and
/// [`shrink_to_fit`](Self::shrink_to_fit), which are exact-fit.
#[derive(Debug)]
pub struct SpanVec {
    /// Byte width of one element. Fixed at construction, never zero.
    elem_size: usize,
    /// Number of logically present elements.
    len: usize,
    /// The allocated region. `buf.len() == capacity * elem_size` exactly.
    buf: Vec<u8>,
}

impl SpanVec {
    // ── Construction ────────────────────────────────────────────

    /// Create a vector of `len` zero-valued elements, capacity == `len`.
    pub fn new(len: usize, elem_size: usize) -> Result<Self, VecError> {
        if elem_size == 0 {
            return Err(VecError::ZeroElementSize);
        }
        let buf = alloc_exact(byte_len(len, elem_size)?)?;
        Ok(Self {
            elem_size,
            len,
            buf,
        })
    }

    /// Create an empty vector with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, elem_size: usize) -> Result<Self, VecError> {
        if elem_size == 0 {
            return Err(VecError::ZeroElementSize);
        }
        let buf = alloc_exact(byte_len(capacity, elem_size)?)?;
        Ok(Self {
            elem_size,
            len: 0,
            buf,
        })
    }

    /// Take ownership of `buffer` as the vector's storage, without copying.
    ///
    /// Every byte of `buffer` becomes a live element:
    /// `len == capacity == buffer.len() / elem_size`. Fails with
    /// [`VecError::BufferSizeMismatch`] when the byte length is not a whole
    /// number of elements.
    pub fn from_buffer(buffer: Vec<u8>, elem_size: usize) -> Result<Self, VecError> {
        if elem_size == 0 {
            return Err(VecError::ZeroElementSize);
        }
        if buffer.len() % elem_size != 0 {
            return Err(VecError::BufferSizeMismatch {
                buffer_bytes: buffer.len(),
                elem_size,
            });
        }
        let len = buffer.len() / elem_size;
        Ok(Self {
            elem_size,
            len,
            buf: buffer,
        })
    }

    // ── Introspection ───────────────────────────────────────────

    /// Number of logically present elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no elements are present.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the allocated region can hold.
    pub fn capacity(&self) -> usize {
        self.buf.len() / self.elem_size
    }

    /// Byte width of one element.
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    // ── Element access ──────────────────────────────────────────

    /// Byte span of element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> &[u8] {
        self.check_index(index);
        let start = index * self.elem_size;
        &self.buf[start..start + self.elem_size]
    }

    /// Mutable byte span of element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> &mut [u8] {
        self.check_index(index);
        let start = index * self.elem_size;
        &mut self.buf[start..start + self.elem_size]
    }

    /// Overwrite element `index` with a byte-for-byte copy of `elem`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len` or `elem.len() != elem_size`.
    pub fn set(&mut self, index: usize, elem: &[u8]) {
        self.check_width(elem.len());
        self.get_mut(index).copy_from_slice(elem);
    }

    /// The live region: the first `len * elem_size` bytes of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len * self.elem_size]
    }

    /// Mutable view of the live region.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let live = self.len * self.elem_size;
        &mut self.buf[..live]
    }

    // ── Capacity management ─────────────────────────────────────

    /// Grow the allocated region to exactly `new_capacity` elements.
    ///
    /// No-op when `new_capacity <= capacity`. Existing element bytes are
    /// preserved; the new tail is zeroed. On failure capacity is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), VecError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let new_bytes = byte_len(new_capacity, self.elem_size)?;
        let additional = new_bytes - self.buf.len();
        self.buf
            .try_reserve_exact(additional)
            .map_err(|_| VecError::AllocationFailed {
                requested_bytes: new_bytes,
            })?;
        self.buf.resize(new_bytes, 0);
        Ok(())
    }

    /// Set the logical length to `new_len`.
    ///
    /// Shrinking only lowers `len` — capacity is untouched and nothing is
    /// zeroed; the abandoned elements are forgotten, not erased. Growing
    /// reserves capacity if needed and zero-fills the newly exposed range
    /// before raising `len`.
    pub fn resize(&mut self, new_len: usize) -> Result<(), VecError> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        self.reserve(new_len)?;
        // The exposed range may hold stale bytes from popped or removed
        // elements; zero it before it becomes logical content.
        let start = self.len * self.elem_size;
        let end = new_len * self.elem_size;
        self.buf[start..end].fill(0);
        self.len = new_len;
        Ok(())
    }

    /// Reallocate down to exactly `len` elements of capacity.
    ///
    /// No-op when `capacity == len`. An empty vector releases its buffer
    /// entirely. On failure the vector is unchanged.
    pub fn shrink_to_fit(&mut self) -> Result<(), VecError> {
        if self.capacity() == self.len {
            return Ok(());
        }
        if self.len == 0 {
            self.buf = Vec::new();
            return Ok(());
        }
        let live = self.len * self.elem_size;
        let mut new_buf = alloc_exact(live)?;
        new_buf.copy_from_slice(&self.buf[..live]);
        self.buf = new_buf;
        Ok(())
    }

    // ── Bulk mutation ───────────────────────────────────────────

    /// Append a byte-for-byte copy of `elem`, growing if necessary.
    ///
    /// On failure the vector is unmodified.
    ///
    /// # Panics
    ///
    /// Panics if `elem.len() != elem_size`.
    pub fn push(&mut self, elem: &[u8]) -> Result<(), VecError> {
        self.check_width(elem.len());
        self.grow_if_needed()?;
        let start = self.len * self.elem_size;
        self.buf[start..start + self.elem_size].copy_from_slice(elem);
        self.len += 1;
        Ok(())
    }

    /// Remove the last element and return its bytes.
    ///
    /// Returns `None` when empty. The returned span stays valid until the
    /// next mutating call; capacity is never reduced by `pop`.
    pub fn pop(&mut self) -> Option<&[u8]> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let start = self.len * self.elem_size;
        Some(&self.buf[start..start + self.elem_size])
    }

    /// Forget all elements. Capacity and buffer contents are retained so
    /// the allocation can be reused.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Overwrite every live element with a copy of `elem`. No-op when
    /// empty.
    ///
    /// # Panics
    ///
    /// Panics if `elem.len() != elem_size`.
    pub fn fill(&mut self, elem: &[u8]) {
        self.check_width(elem.len());
        let live = self.len * self.elem_size;
        for chunk in self.buf[..live].chunks_exact_mut(self.elem_size) {
            chunk.copy_from_slice(elem);
        }
    }

    /// Insert a copy of `elem` at `index`, shifting `[index, len)` one slot
    /// right. Grows if necessary; on failure the vector is unmodified.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or `elem.len() != elem_size`.
    pub fn insert(&mut self, index: usize, elem: &[u8]) -> Result<(), VecError> {
        assert!(
            index <= self.len,
            "insert index {index} out of bounds (len {})",
            self.len
        );
        self.check_width(elem.len());
        self.grow_if_needed()?;
        let es = self.elem_size;
        let start = index * es;
        let live = self.len * es;
        self.buf.copy_within(start..live, start + es);
        self.buf[start..start + es].copy_from_slice(elem);
        self.len += 1;
        Ok(())
    }

    /// Remove element `index`, optionally copying it into `out` first, then
    /// shift `(index, len)` one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, or if `out` is given and
    /// `out.len() != elem_size`.
    pub fn remove(&mut self, index: usize, out: Option<&mut [u8]>) {
        self.check_index(index);
        let es = self.elem_size;
        let start = index * es;
        if let Some(out) = out {
            assert_eq!(
                out.len(),
                es,
                "output span is {} bytes, element size is {es}",
                out.len()
            );
            out.copy_from_slice(&self.buf[start..start + es]);
        }
        let live = self.len * es;
        self.buf.copy_within(start + es..live, start);
        self.len -= 1;
    }

    // ── Copy & move semantics ───────────────────────────────────

    /// Duplicate into a freshly allocated, independently owned buffer.
    ///
    /// The clone has the same `len`, `capacity` and `elem_size`, including
    /// reserved headroom. Fails only on allocation failure; `self` is
    /// unmodified either way.
    pub fn try_clone(&self) -> Result<Self, VecError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(self.buf.len())
            .map_err(|_| VecError::AllocationFailed {
                requested_bytes: self.buf.len(),
            })?;
        buf.extend_from_slice(&self.buf);
        Ok(Self {
            elem_size: self.elem_size,
            len: self.len,
            buf,
        })
    }

    /// Transfer ownership of the buffer into a new value.
    ///
    /// The returned vector holds this vector's exact buffer, `len` and
    /// capacity. Afterwards `self` is empty — `len == 0`, `capacity == 0`,
    /// no buffer — but keeps its `elem_size` and remains usable. No
    /// allocation occurs.
    pub fn take(&mut self) -> Self {
        let len = self.len;
        self.len = 0;
        Self {
            elem_size: self.elem_size,
            len,
            buf: mem::take(&mut self.buf),
        }
    }

    /// Replace this vector's contents with an independent duplicate of
    /// `source`, adopting its `elem_size`, `len` and capacity.
    ///
    /// The duplicate is allocated before the old buffer is released, so on
    /// failure `self` is wholly unchanged.
    pub fn copy_assign(&mut self, source: &SpanVec) -> Result<(), VecError> {
        let clone = source.try_clone()?;
        *self = clone;
        Ok(())
    }

    /// Release this vector's buffer and transplant `source`'s entire state,
    /// leaving `source` empty. Cannot fail.
    pub fn move_assign(&mut self, source: &mut SpanVec) {
        *self = source.take();
    }

    /// Exchange the entire state of two vectors in constant time.
    pub fn swap(&mut self, other: &mut SpanVec) {
        mem::swap(self, other);
    }

    // ── Internals ───────────────────────────────────────────────

    /// Double the capacity (zero grows to one) when the buffer is full.
    fn grow_if_needed(&mut self) -> Result<(), VecError> {
        let cap = self.capacity();
        if self.len < cap {
            return Ok(());
        }
        let new_cap = if cap == 0 {
            1
        } else {
            cap.checked_mul(2).ok_or(VecError::CapacityOverflow {
                elements: cap,
                elem_size: self.elem_size,
            })?
        };
        self.reserve(new_cap)
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.len,
            "index {index} out of bounds (len {})",
            self.len
        );
    }

    fn check_width(&self, width: usize) {
        assert_eq!(
            width, self.elem_size,
            "element span is {width} bytes, element size is {}",
            self.elem_size
        );
    }
}

//! Comparator- and printer-parametrized operations on [`SpanVec`].
//!
//! The container never interprets element bytes itself; everything here
//! routes meaning through a caller-supplied [`Comparator`] or [`Printer`].

use crate::cmp::Comparator;
use crate::print::Printer;
use crate::vec::SpanVec;
use std::cmp::Ordering;
use std::fmt;

impl SpanVec {
    /// True when both vectors have the same length and the comparator
    /// reports equal at every index, in order.
    pub fn eq_by<C: Comparator + ?Sized>(&self, other: &SpanVec, cmp: &C) -> bool {
        if self.len() != other.len() {
            return false;
        }
        (0..self.len()).all(|i| cmp.compare(self.get(i), other.get(i)) == Ordering::Equal)
    }

    /// Logical negation of [`eq_by`](Self::eq_by).
    pub fn ne_by<C: Comparator + ?Sized>(&self, other: &SpanVec, cmp: &C) -> bool {
        !self.eq_by(other, cmp)
    }

    /// Sort the elements in place under the comparator's total order.
    ///
    /// Unstable: equal elements may be reordered. Implemented as an index
    /// sort followed by one permutation pass through a scratch copy of the
    /// live region, so elements move exactly once regardless of width.
    pub fn sort_by<C: Comparator + ?Sized>(&mut self, cmp: &C) {
        if self.len() < 2 {
            return;
        }
        let es = self.elem_size();
        let scratch = self.as_bytes().to_vec();

        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_unstable_by(|&a, &b| {
            cmp.compare(&scratch[a * es..(a + 1) * es], &scratch[b * es..(b + 1) * es])
        });

        let live = self.as_bytes_mut();
        for (dst, &src) in order.iter().enumerate() {
            live[dst * es..(dst + 1) * es].copy_from_slice(&scratch[src * es..(src + 1) * es]);
        }
    }

    /// Index of the first element comparing equal to `key`, scanning
    /// linearly from the front. `None` when absent.
    pub fn find_by<C: Comparator + ?Sized>(&self, key: &[u8], cmp: &C) -> Option<usize> {
        (0..self.len()).find(|&i| cmp.compare(self.get(i), key) == Ordering::Equal)
    }

    /// True when some element compares equal to `key`.
    pub fn contains<C: Comparator + ?Sized>(&self, key: &[u8], cmp: &C) -> bool {
        self.find_by(key, cmp).is_some()
    }

    /// Render the elements as `[a, b, c]` — bracketed, `", "`-separated,
    /// one printer invocation per element, no trailing newline.
    ///
    /// A diagnostic facility, not a serialization format.
    pub fn write_formatted<P: Printer + ?Sized>(
        &self,
        out: &mut dyn fmt::Write,
        printer: &P,
    ) -> fmt::Result {
        out.write_char('[')?;
        for i in 0..self.len() {
            if i != 0 {
                out.write_str(", ")?;
            }
            printer.print(self.get(i), out)?;
        }
        out.write_char(']')
    }

    /// Buffering convenience over [`write_formatted`](Self::write_formatted).
    pub fn format_with<P: Printer + ?Sized>(&self, printer: &P) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_formatted(&mut out, printer)?;
        Ok(out)
    }
}

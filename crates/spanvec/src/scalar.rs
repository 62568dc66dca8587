//! Fixed-width scalar types viewed as opaque byte spans.
//!
//! [`Scalar`] is the bridge between the byte-level container API and the
//! native integer/float types: native-endian encode/decode, a total order,
//! and a textual form. The comparator and printer adapters in
//! [`cmp`](crate::cmp) and [`print`](crate::print) are built on it, as is
//! the typed convenience layer on [`SpanVec`](crate::SpanVec).

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// Inline byte storage wide enough for any implemented scalar (u128 = 16).
pub type ScalarBytes = SmallVec<[u8; 16]>;

/// A fixed-width value that can round-trip through a byte span.
///
/// The ordering contract is total: for floating-point types, NaN sorts
/// after every non-NaN value and NaN compares equal to NaN.
pub trait Scalar: Copy {
    /// Encoded byte width. Always `size_of::<Self>()`.
    const WIDTH: usize;

    /// Decode a value from its native-endian byte span.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != Self::WIDTH`.
    fn from_bytes(bytes: &[u8]) -> Self;

    /// Encode the value into `out` in native-endian order.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != Self::WIDTH`.
    fn write_bytes(&self, out: &mut [u8]);

    /// Total order over values of this type.
    fn order(&self, other: &Self) -> Ordering;

    /// Write the value's textual form, no separators or padding.
    fn fmt_value(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Encode the value into inline storage.
    fn to_bytes(&self) -> ScalarBytes {
        let mut raw = ScalarBytes::from_elem(0, Self::WIDTH);
        self.write_bytes(&mut raw);
        raw
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            fn from_bytes(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(bytes);
                <$t>::from_ne_bytes(raw)
            }

            fn write_bytes(&self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            fn order(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            fn fmt_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
                write!(out, "{self}")
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();

            fn from_bytes(bytes: &[u8]) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(bytes);
                <$t>::from_ne_bytes(raw)
            }

            fn write_bytes(&self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }

            fn order(&self, other: &Self) -> Ordering {
                match (self.is_nan(), other.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => {
                        if self < other {
                            Ordering::Less
                        } else if self > other {
                            Ordering::Greater
                        } else {
                            Ordering::Equal
                        }
                    }
                }
            }

            fn fmt_value(&self, out: &mut dyn fmt::Write) -> fmt::Result {
                write!(out, "{self}")
            }
        }
    )*};
}

impl_scalar_int!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128);
impl_scalar_float!(f32, f64);

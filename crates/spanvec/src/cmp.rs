//! The comparator capability and its scalar adapters.

use crate::scalar::Scalar;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// A total order over type-erased elements.
///
/// Consumed by [`SpanVec::sort_by`](crate::SpanVec::sort_by),
/// [`find_by`](crate::SpanVec::find_by) and
/// [`eq_by`](crate::SpanVec::eq_by). Both arguments are element-width byte
/// spans taken verbatim from a vector's buffer; the comparator decides what
/// they mean. Implementations must be stateless with respect to the vector
/// being operated on — no reentrancy into the same vector from inside
/// `compare`.
pub trait Comparator {
    /// Compare two encoded elements.
    fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering;
}

impl<F> Comparator for F
where
    F: Fn(&[u8], &[u8]) -> Ordering,
{
    fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
        self(lhs, rhs)
    }
}

/// Comparator over a fixed-width scalar type's total order.
///
/// Zero-sized; `ScalarOrd::<i32>::new()` orders 4-byte spans as native
/// `i32` values. For floats the order is the NaN-last total order from
/// [`Scalar::order`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarOrd<T: Scalar>(PhantomData<T>);

impl<T: Scalar> ScalarOrd<T> {
    /// Create the comparator.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Scalar> Comparator for ScalarOrd<T> {
    fn compare(&self, lhs: &[u8], rhs: &[u8]) -> Ordering {
        T::from_bytes(lhs).order(&T::from_bytes(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_ord_orders_decoded_values() {
        let cmp = ScalarOrd::<i32>::new();
        let a = (-5i32).to_ne_bytes();
        let b = 3i32.to_ne_bytes();
        assert_eq!(cmp.compare(&a, &b), Ordering::Less);
        assert_eq!(cmp.compare(&b, &a), Ordering::Greater);
        assert_eq!(cmp.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn scalar_ord_float_puts_nan_last() {
        let cmp = ScalarOrd::<f32>::new();
        let nan = f32::NAN.to_ne_bytes();
        let one = 1.0f32.to_ne_bytes();
        assert_eq!(cmp.compare(&nan, &one), Ordering::Greater);
        assert_eq!(cmp.compare(&nan, &nan), Ordering::Equal);
    }

    #[test]
    fn closures_are_comparators() {
        let cmp = |lhs: &[u8], rhs: &[u8]| lhs.cmp(rhs);
        assert_eq!(cmp.compare(&[1], &[2]), Ordering::Less);
    }
}

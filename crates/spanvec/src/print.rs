//! The printer capability and its scalar adapters.

use crate::scalar::Scalar;
use std::fmt;
use std::marker::PhantomData;

/// Formats one type-erased element to a textual stream.
///
/// Consumed by [`SpanVec::write_formatted`](crate::SpanVec::write_formatted).
/// A printer writes exactly one value's textual form and no separators;
/// bracketing and `", "` separation belong to the container.
pub trait Printer {
    /// Write the textual form of `elem` to `out`.
    fn print(&self, elem: &[u8], out: &mut dyn fmt::Write) -> fmt::Result;
}

impl<F> Printer for F
where
    F: Fn(&[u8], &mut dyn fmt::Write) -> fmt::Result,
{
    fn print(&self, elem: &[u8], out: &mut dyn fmt::Write) -> fmt::Result {
        self(elem, out)
    }
}

/// Printer that decodes a fixed-width scalar and writes its `Display` form.
///
/// Zero-sized; `ScalarDisplay::<u32>::new()` renders 4-byte spans as native
/// `u32` values.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarDisplay<T: Scalar>(PhantomData<T>);

impl<T: Scalar> ScalarDisplay<T> {
    /// Create the printer.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Scalar> Printer for ScalarDisplay<T> {
    fn print(&self, elem: &[u8], out: &mut dyn fmt::Write) -> fmt::Result {
        T::from_bytes(elem).fmt_value(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_display_writes_decoded_value() {
        let printer = ScalarDisplay::<i16>::new();
        let mut out = String::new();
        printer.print(&(-42i16).to_ne_bytes(), &mut out).unwrap();
        assert_eq!(out, "-42");
    }

    #[test]
    fn closures_are_printers() {
        let printer =
            |elem: &[u8], out: &mut dyn fmt::Write| write!(out, "{:02x}", elem[0]);
        let mut out = String::new();
        printer.print(&[0x0f], &mut out).unwrap();
        assert_eq!(out, "0f");
    }
}

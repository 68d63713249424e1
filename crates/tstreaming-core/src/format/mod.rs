//! Formatter strategies.
//!
//! A formatter is a zero-sized type configured through const generics that
//! knows how to print some value type. Wrap a value with [`fmt`] to get a
//! [`FormattedValue`], which is itself [`Printable`] and can therefore be
//! fed to another formatter:
//!
//! ```
//! use tstreaming_core::{fmt, Align, Hex, Print, Truncate};
//!
//! let mut out = Vec::new();
//! out.put(fmt::<Align<6, b'_'>, _>(fmt::<Hex, _>(0xABu8)));
//! out.put(fmt::<Truncate<4>, _>("Very long string"));
//! assert_eq!(out, b"AB____Very");
//! ```
//!
//! Several values travel together as a tuple and the formatter unpacks them,
//! e.g. an array formatter over `(slice, len)`.
//!
//! Every const-generic formatter is a thin shell over a plain function
//! (`print_hex_bits`, `print_number`, `print_fixed`, `print_aligned`,
//! `print_array`) that can also be called with runtime parameters.

use core::marker::PhantomData;

use crate::num::Integer;
use crate::print::{Print, Printable};

mod array;
mod field;
mod fixed;
mod hex;
mod number;
mod prefix;

pub use array::{Array, print_array};
pub use field::{Align, Skip, Truncate, Truncator, print_aligned};
pub use fixed::{Fixed, print_fixed};
pub use hex::{Hex, HexBits, print_hex_bits};
pub use number::{Dec, Number, print_number};
pub use prefix::Prefix;

/// Strategy that prints values of type `T`.
pub trait Formatter<T: ?Sized> {
    /// Print `value` to `p`, returning the number of bytes accepted.
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize;
}

/// A value (or tuple of values) bound to the formatter that prints it.
pub struct FormattedValue<F, T> {
    values: T,
    _formatter: PhantomData<fn() -> F>,
}

impl<F, T> FormattedValue<F, T> {
    /// Bind `values` to formatter `F`.
    #[inline]
    pub const fn new(values: T) -> Self {
        Self {
            values,
            _formatter: PhantomData,
        }
    }

    /// The wrapped value(s).
    #[inline]
    pub const fn values(&self) -> &T {
        &self.values
    }

    /// Unwrap the value(s).
    #[inline]
    pub fn into_values(self) -> T {
        self.values
    }
}

impl<F, T: Clone> Clone for FormattedValue<F, T> {
    fn clone(&self) -> Self {
        Self::new(self.values.clone())
    }
}

impl<F, T: Copy> Copy for FormattedValue<F, T> {}

impl<F, T: core::fmt::Debug> core::fmt::Debug for FormattedValue<F, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FormattedValue")
            .field("formatter", &core::any::type_name::<F>())
            .field("values", &self.values)
            .finish()
    }
}

impl<F: Formatter<T>, T> Printable for FormattedValue<F, T> {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        F::print_value(p, &self.values)
    }
}

/// Format `values` with `F`.
///
/// ```
/// use tstreaming_core::{fmt, Hex, Print};
///
/// let mut out = Vec::new();
/// out.put(fmt::<Hex, _>(10u8));
/// assert_eq!(out, b"0A");
/// ```
#[inline]
pub const fn fmt<F, T>(values: T) -> FormattedValue<F, T>
where
    F: Formatter<T>,
{
    FormattedValue::new(values)
}

/// Prints the value exactly as the sink's `print` would.
///
/// Mostly useful as the element formatter of [`Array`] or the inner
/// formatter of [`Prefix`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFormat;

impl<T: Printable + ?Sized> Formatter<T> for NoFormat {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        p.print(value)
    }
}

/// Prints an integer as the raw byte it encodes (`0x41` prints `A`).
/// Only the low 8 bits are used. `char` values are UTF-8 encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Char;

impl<T: Integer> Formatter<T> for Char {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        p.write(value.low_byte())
    }
}

impl Formatter<char> for Char {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &char) -> usize {
        p.print(value)
    }
}

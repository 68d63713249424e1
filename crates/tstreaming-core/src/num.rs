//! Integer abstraction and digit rendering.
//!
//! All numeric output funnels through [`render_digits`] on a `u64`, so each
//! integer width only contributes the small conversion shims of
//! [`Integer`].

use crate::print::Print;

/// Digit alphabet shared by every radix conversion (uppercase, as the host
/// sink prints `HEX`).
pub(crate) const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest magnitude `print_float` renders before printing `ovf`.
pub const FLOAT_OVERFLOW: f64 = 4_294_967_040.0;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integers up to 64 bits.
///
/// Sealed: the conversions below assume two's complement primitives.
pub trait Integer: Copy + sealed::Sealed {
    /// Width of the type in bits.
    const BITS: u32;
    /// Whether the type is signed.
    const SIGNED: bool;

    /// Two's complement bits, sign extended to 64 bits for signed types.
    fn to_bits(self) -> u64;
    /// True for negative values of signed types.
    fn is_negative(self) -> bool;
    /// Absolute value.
    fn magnitude(self) -> u64;
    /// Lowest 8 bits.
    fn low_byte(self) -> u8 {
        self.to_bits() as u8
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Integer for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = false;
            #[inline]
            fn to_bits(self) -> u64 {
                self as u64
            }
            #[inline]
            fn is_negative(self) -> bool {
                false
            }
            #[inline]
            fn magnitude(self) -> u64 {
                self as u64
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Integer for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = true;
            #[inline]
            fn to_bits(self) -> u64 {
                self as i64 as u64
            }
            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }
            #[inline]
            fn magnitude(self) -> u64 {
                self.unsigned_abs() as u64
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);

/// Mask selecting the low `bits` bits (`bits >= 64` selects everything).
#[inline]
#[must_use]
pub const fn low_mask(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Render `value` in `base` into the END of `buf`.
///
/// Returns the number of digits written; they occupy `buf[64 - n..]`.
/// `base` must be in `2..=36`.
pub fn render_digits(mut value: u64, base: u64, buf: &mut [u8; 64]) -> usize {
    if value == 0 {
        buf[63] = b'0';
        return 1;
    }
    let mut pos = 64;
    while value > 0 && pos > 0 {
        pos -= 1;
        buf[pos] = DIGITS[(value % base) as usize];
        value /= base;
    }
    64 - pos
}

/// Print an integer in `base` the way the host sink's `print(n, base)` does.
///
/// Bases outside `2..=36` fall back to 10. Only base 10 prints a sign; other
/// bases show the two's complement bits at the value's own width.
pub fn print_radix<P: Print, T: Integer>(p: &mut P, value: T, base: u32) -> usize {
    let base = if (2..=36).contains(&base) { base } else { 10 };
    let mut count = 0;
    let raw = if base == 10 {
        if value.is_negative() {
            count += p.write(b'-');
        }
        value.magnitude()
    } else {
        value.to_bits() & low_mask(T::BITS)
    };
    let mut digits = [0u8; 64];
    let n = render_digits(raw, u64::from(base), &mut digits);
    count + p.write_bytes(&digits[64 - n..])
}

/// Print a float with `digits` fraction digits.
///
/// Rounds half away from zero at the last printed digit. `nan`, `inf` and
/// `ovf` (magnitude above [`FLOAT_OVERFLOW`]) are printed verbatim; negative
/// infinity prints as `inf` too.
pub fn print_float<P: Print>(p: &mut P, value: f64, digits: u8) -> usize {
    if value.is_nan() {
        return p.write_bytes(b"nan");
    }
    if value.is_infinite() {
        return p.write_bytes(b"inf");
    }
    if value > FLOAT_OVERFLOW || value < -FLOAT_OVERFLOW {
        return p.write_bytes(b"ovf");
    }

    let mut count = 0;
    let mut number = value;
    if number < 0.0 {
        count += p.write(b'-');
        number = -number;
    }

    let mut rounding = 0.5;
    for _ in 0..digits {
        rounding /= 10.0;
    }
    number += rounding;

    let int_part = number as u32;
    let mut remainder = number - f64::from(int_part);
    count += print_radix(p, int_part, 10);

    if digits > 0 {
        count += p.write(b'.');
    }
    for _ in 0..digits {
        remainder *= 10.0;
        let digit = (remainder as u32).min(9);
        count += p.write(b'0' + digit as u8);
        remainder -= f64::from(digit);
    }
    count
}

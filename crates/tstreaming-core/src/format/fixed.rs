//! Fixed-point decimals.

use super::Formatter;
use crate::num::{Integer, print_radix};
use crate::print::Print;

/// Print `value / scale` as a decimal with `precision` fraction digits.
///
/// Fraction digits are produced by repeated multiply-by-ten and are
/// truncated, not rounded. The `.` is printed even when `precision` is 0.
/// Negative values print `-` followed by the magnitude. A `scale` of 0 is
/// treated as 1.
pub fn print_fixed<P: Print, T: Integer>(p: &mut P, value: T, scale: u64, precision: usize) -> usize {
    let scale = scale.max(1);
    let mut count = 0;
    if value.is_negative() {
        count += p.write(b'-');
    }
    let magnitude = value.magnitude();
    count += print_radix(p, magnitude / scale, 10);
    count += p.write(b'.');

    // Widened so that `rem * 10` cannot overflow for any 64-bit scale.
    let scale = u128::from(scale);
    let mut rem = u128::from(magnitude) % scale;
    for _ in 0..precision {
        rem *= 10;
        count += p.write(b'0' + (rem / scale) as u8);
        rem %= scale;
    }
    count
}

/// Fixed-point number: the stored integer represents `value / SCALE`, and
/// `PRECISION` fraction digits are printed.
///
/// ```
/// use tstreaming_core::{fmt, Fixed, Print};
///
/// // Temperature in 1/16 degree steps.
/// let mut out = Vec::new();
/// out.put(fmt::<Fixed<16, 3>, _>(403u16));
/// assert_eq!(out, b"25.187");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixed<const SCALE: u64, const PRECISION: usize>;

impl<const SCALE: u64, const PRECISION: usize, T: Integer> Formatter<T> for Fixed<SCALE, PRECISION> {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        const { assert!(SCALE > 0, "Fixed scale must be non-zero") };
        print_fixed(p, *value, SCALE, PRECISION)
    }
}

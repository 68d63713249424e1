//! Fixed-width numbers.

use super::Formatter;
use crate::num::{DIGITS as DIGIT_CHARS, Integer};
use crate::print::Print;

/// Print exactly `digits` digits of `value` in `base`, zero padded on the
/// left. Digits that do not fit are dropped from the high end. Negative
/// values print `-` followed by the digits of the magnitude.
///
/// `base` is clamped to `2..=16`.
pub fn print_number<P: Print, T: Integer>(p: &mut P, value: T, digits: u8, base: u32) -> usize {
    let base = u64::from(base.clamp(2, 16));
    let mut count = 0;
    if value.is_negative() {
        count += p.write(b'-');
    }
    let mut magnitude = value.magnitude();
    let mut buf = [0u8; u8::MAX as usize];
    let field = &mut buf[..usize::from(digits)];
    for slot in field.iter_mut().rev() {
        *slot = DIGIT_CHARS[(magnitude % base) as usize];
        magnitude /= base;
    }
    count + p.write_bytes(field)
}

/// Exactly `DIGITS` digits in `BASE` (2..=16, checked at compile time).
///
/// ```
/// use tstreaming_core::{fmt, Number, Print};
///
/// let mut out = Vec::new();
/// out.put(fmt::<Number<4>, _>(42u16)).put(' ').put(fmt::<Number<8, 2>, _>(5u8));
/// assert_eq!(out, b"0042 00000101");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Number<const DIGITS: u8, const BASE: u32 = 10>;

impl<const DIGITS: u8, const BASE: u32, T: Integer> Formatter<T> for Number<DIGITS, BASE> {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        const { assert!(BASE >= 2, "Base cannot be less than 2") };
        const { assert!(BASE <= 16, "Base cannot be more than 16") };
        print_number(p, *value, DIGITS, BASE)
    }
}

/// Ten zero-padded decimal digits.
pub type Dec = Number<10>;

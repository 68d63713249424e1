//! Hexadecimal formatters.

use super::Formatter;
use crate::num::{DIGITS, Integer, low_mask};
use crate::print::Print;

/// Print the low `bits` bits of `value` as uppercase hex, one digit per
/// nibble, most significant first, always `ceil(bits / 4)` digits.
///
/// Signed values are sign extended before masking, so negative values show
/// their two's complement representation. `bits` is clamped to `1..=64`.
pub fn print_hex_bits<P: Print, T: Integer>(p: &mut P, value: T, bits: u32) -> usize {
    let bits = bits.clamp(1, 64);
    let value = value.to_bits() & low_mask(bits);
    let mut count = 0;
    for nibble in (0..=(bits - 1) / 4).rev() {
        count += p.write(DIGITS[((value >> (nibble * 4)) & 0xf) as usize]);
    }
    count
}

/// Hexadecimal with an explicit bit width.
///
/// ```
/// use tstreaming_core::{fmt, HexBits, Print};
///
/// let mut out = Vec::new();
/// out.put(fmt::<HexBits<12>, _>(0xABCDu16));
/// assert_eq!(out, b"BCD");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HexBits<const BITS: u32>;

impl<const BITS: u32, T: Integer> Formatter<T> for HexBits<BITS> {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        const { assert!(BITS >= 1 && BITS <= 64, "HexBits width must be 1..=64") };
        print_hex_bits(p, *value, BITS)
    }
}

/// Hexadecimal using the full width of the value's type (`u8` prints two
/// digits, `u32` eight).
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

impl<T: Integer> Formatter<T> for Hex {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        print_hex_bits(p, *value, T::BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fmt;

    fn hex<F: Formatter<T>, T: Integer>(value: T) -> String {
        let mut out = Vec::new();
        let n = out.print(&fmt::<F, _>(value));
        assert_eq!(n, out.len());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn hex_uses_type_width() {
        assert_eq!(hex::<Hex, _>(0x0Au8), "0A");
        assert_eq!(hex::<Hex, _>(0xABCDu16), "ABCD");
        assert_eq!(hex::<Hex, _>(1u32), "00000001");
        assert_eq!(hex::<Hex, _>(u64::MAX), "FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn hex_negative_is_twos_complement() {
        assert_eq!(hex::<Hex, _>(-1i8), "FF");
        assert_eq!(hex::<Hex, _>(-2i16), "FFFE");
    }

    #[test]
    fn hex_bits_masks_high_bits() {
        assert_eq!(hex::<HexBits<4>, _>(0xFFu8), "F");
        assert_eq!(hex::<HexBits<8>, _>(0x1234u16), "34");
    }

    #[test]
    fn hex_bits_rounds_nibbles_up() {
        assert_eq!(hex::<HexBits<6>, _>(0xFFu8), "3F");
        assert_eq!(hex::<HexBits<1>, _>(3u8), "1");
        assert_eq!(hex::<HexBits<9>, _>(0x1FFu16), "1FF");
    }

    #[test]
    fn hex_bits_wider_than_type_sign_extends() {
        assert_eq!(hex::<HexBits<16>, _>(-1i8), "FFFF");
        assert_eq!(hex::<HexBits<16>, _>(0x80u8), "0080");
    }

    #[test]
    fn runtime_bits_are_clamped() {
        let mut out = Vec::new();
        print_hex_bits(&mut out, 0xFu8, 0);
        assert_eq!(out, b"1");
        out.clear();
        print_hex_bits(&mut out, 1u8, 200);
        assert_eq!(out.len(), 16);
    }
}

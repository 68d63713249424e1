//! Array formatting.

use super::{Formatter, NoFormat};
use crate::print::Print;

/// Print each item with `each`, separated by `sep1` then `sep2`. A zero
/// separator byte is omitted. Separator bytes count toward the total.
pub fn print_array<P, I, E>(p: &mut P, items: I, sep1: u8, sep2: u8, mut each: E) -> usize
where
    P: Print,
    I: IntoIterator,
    E: FnMut(&mut P, I::Item) -> usize,
{
    let mut count = 0;
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            if sep1 != 0 {
                count += p.write(sep1);
            }
            if sep2 != 0 {
                count += p.write(sep2);
            }
        }
        count += each(p, item);
    }
    count
}

/// Print a sequence, formatting each element with `F`.
///
/// Accepts slices, fixed-size arrays, `Vec`s and a packed `(slice, len)`
/// pair whose length is clamped to the slice.
///
/// ```
/// use tstreaming_core::{fmt, Array, Hex, Print};
///
/// let regs = [0x0Fu8, 0xA0, 0x7E, 0x00];
/// let mut out = Vec::new();
/// out.put(fmt::<Array<Hex>, _>(&regs[..]))
///     .put(' ')
///     .put(fmt::<Array<Hex, b':', 0>, _>((&regs[..], 2)));
/// assert_eq!(out, b"0F, A0, 7E, 00 0F:A0");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Array<F = NoFormat, const SEP1: u8 = b',', const SEP2: u8 = b' '>(
    core::marker::PhantomData<fn() -> F>,
);

impl<F, T, const SEP1: u8, const SEP2: u8> Formatter<[T]> for Array<F, SEP1, SEP2>
where
    F: Formatter<T>,
{
    fn print_value<P: Print>(p: &mut P, value: &[T]) -> usize {
        print_array(p, value, SEP1, SEP2, |p, item| F::print_value(p, item))
    }
}

impl<F, T, const SEP1: u8, const SEP2: u8> Formatter<&[T]> for Array<F, SEP1, SEP2>
where
    F: Formatter<T>,
{
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &&[T]) -> usize {
        <Self as Formatter<[T]>>::print_value(p, value)
    }
}

impl<F, T, const N: usize, const SEP1: u8, const SEP2: u8> Formatter<[T; N]>
    for Array<F, SEP1, SEP2>
where
    F: Formatter<T>,
{
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &[T; N]) -> usize {
        <Self as Formatter<[T]>>::print_value(p, value)
    }
}

impl<F, T, const SEP1: u8, const SEP2: u8> Formatter<(&[T], usize)> for Array<F, SEP1, SEP2>
where
    F: Formatter<T>,
{
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &(&[T], usize)) -> usize {
        let (items, len) = *value;
        <Self as Formatter<[T]>>::print_value(p, &items[..len.min(items.len())])
    }
}

#[cfg(feature = "alloc")]
impl<F, T, const SEP1: u8, const SEP2: u8> Formatter<alloc::vec::Vec<T>> for Array<F, SEP1, SEP2>
where
    F: Formatter<T>,
{
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &alloc::vec::Vec<T>) -> usize {
        <Self as Formatter<[T]>>::print_value(p, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Align, Fixed, fmt};
    use crate::print::Printable;

    fn render<T: Printable>(value: T) -> (usize, String) {
        let mut out = Vec::new();
        let n = out.print(&value);
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_separators() {
        let data = [1u8, 22, 3];
        assert_eq!(render(fmt::<Array, _>(data)), (8, "1, 22, 3".into()));
    }

    #[test]
    fn zero_separator_is_hidden() {
        let data = [1u8, 2, 3];
        assert_eq!(render(fmt::<Array<NoFormat, b';', 0>, _>(data)), (5, "1;2;3".into()));
        assert_eq!(render(fmt::<Array<NoFormat, 0, 0>, _>(data)), (3, "123".into()));
    }

    #[test]
    fn empty_and_single() {
        let empty: [u8; 0] = [];
        assert_eq!(render(fmt::<Array, _>(empty)), (0, String::new()));
        assert_eq!(render(fmt::<Array, _>([9u8])), (1, "9".into()));
    }

    #[test]
    fn element_formatter_applies() {
        let temps = vec![250i16, -75];
        let v = fmt::<Array<Fixed<10, 1>, b'|', 0>, _>(temps);
        assert_eq!(render(v), (9, "25.0|-7.5".into()));
    }

    #[test]
    fn packed_length_is_clamped() {
        let data = [1u8, 2, 3];
        assert_eq!(render(fmt::<Array, _>((&data[..], 2))), (4, "1, 2".into()));
        assert_eq!(render(fmt::<Array, _>((&data[..], 10))), (7, "1, 2, 3".into()));
        assert_eq!(render(fmt::<Array, _>((&data[..], 0))), (0, String::new()));
    }

    #[test]
    fn arrays_of_strings() {
        let words = ["ab", "c"];
        let v = fmt::<Array<Align<3, b'.'>>, _>(&words[..]);
        assert_eq!(render(v), (8, "ab., c..".into()));
    }
}

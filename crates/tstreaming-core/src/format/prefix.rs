use core::marker::PhantomData;

use super::{Formatter, NoFormat};
use crate::print::{Print, Printable};
use crate::tvalue::TValue;

/// Print the constant `V::VALUE`, then the value formatted with `F`.
///
/// ```
/// use tstreaming_core::{fmt, tstr, Hex, Prefix, Print, TChar};
///
/// tstr!(HexMark = "0x");
///
/// let mut out = Vec::new();
/// out.put(fmt::<Prefix<HexMark, Hex>, _>(0x2Au8))
///     .put(fmt::<Prefix<TChar<'#'>>, _>(7u8));
/// assert_eq!(out, b"0x2A#7");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefix<V, F = NoFormat>(PhantomData<fn() -> (V, F)>);

impl<V, F, T> Formatter<T> for Prefix<V, F>
where
    V: TValue,
    V::Type: Printable,
    F: Formatter<T>,
    T: ?Sized,
{
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        p.print(&V::VALUE) + F::print_value(p, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Align, Number, fmt};
    use crate::tstr;
    use crate::tvalue::{TInt, TNullStr};

    tstr!(Volts = "V=");

    fn render<T: Printable>(value: T) -> (usize, String) {
        let mut out = Vec::new();
        let n = out.print(&value);
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn string_prefix() {
        assert_eq!(render(fmt::<Prefix<Volts>, _>(12u8)), (4, "V=12".into()));
    }

    #[test]
    fn integer_prefix_with_inner_formatter() {
        let v = fmt::<Prefix<TInt<-1>, Number<3>>, _>(5u8);
        assert_eq!(render(v), (5, "-1005".into()));
    }

    #[test]
    fn null_prefix_prints_nothing() {
        assert_eq!(render(fmt::<Prefix<TNullStr>, _>("x")), (1, "x".into()));
    }

    #[test]
    fn prefix_is_inside_alignment() {
        let v = fmt::<Align<6, b'.'>, _>(fmt::<Prefix<Volts>, _>(3u8));
        assert_eq!(render(v), (6, "V=3...".into()));
    }
}

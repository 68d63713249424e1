//! Field shaping: padding, truncation and skipping.

use super::Formatter;
use crate::print::{Print, Printable};

/// Print `value`, then write `pad` until at least `width` bytes went out.
///
/// Padding stops early if the sink refuses a pad byte. Values already
/// wider than `width` are left untouched.
pub fn print_aligned<P: Print, T: Printable + ?Sized>(
    p: &mut P,
    value: &T,
    width: usize,
    pad: u8,
) -> usize {
    let mut len = p.print(value);
    while len < width {
        let n = p.write(pad);
        if n == 0 {
            break;
        }
        len += n;
    }
    len
}

/// Sink adapter that drops the first `skip` bytes and then forwards at
/// most `width` bytes (all of them when `width` is `None`).
///
/// Bytes the inner sink refuses are not counted as forwarded, so the field
/// stays aligned to what was actually written.
pub struct Truncator<'a, P> {
    inner: &'a mut P,
    skip: usize,
    width: Option<usize>,
    count: usize,
}

impl<'a, P: Print> Truncator<'a, P> {
    /// Wrap `inner`.
    pub fn new(inner: &'a mut P, skip: usize, width: Option<usize>) -> Self {
        Self {
            inner,
            skip,
            width,
            count: 0,
        }
    }

    /// Bytes seen so far, skipped ones included.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.count
    }

    fn forwards(&self) -> bool {
        self.count >= self.skip
            && self
                .width
                .is_none_or(|width| self.count < self.skip.saturating_add(width))
    }
}

impl<P: Print> Print for Truncator<'_, P> {
    fn write(&mut self, byte: u8) -> usize {
        if self.forwards() {
            let res = self.inner.write(byte);
            self.count += res;
            res
        } else {
            self.count += 1;
            0
        }
    }
}

/// Pad the printed value to `WIDTH` bytes with `PAD`.
///
/// ```
/// use tstreaming_core::{fmt, Align, Hex, Print};
///
/// let mut out = Vec::new();
/// out.put(fmt::<Align<8>, _>("Test:")).put(fmt::<Align<6, b'0'>, _>(fmt::<Hex, _>(0xABu8)));
/// assert_eq!(out, b"Test:   AB0000");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Align<const WIDTH: usize, const PAD: u8 = b' '>;

impl<const WIDTH: usize, const PAD: u8, T: Printable + ?Sized> Formatter<T> for Align<WIDTH, PAD> {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        print_aligned(p, value, WIDTH, PAD)
    }
}

/// Print only the first `WIDTH` bytes of the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Truncate<const WIDTH: usize>;

impl<const WIDTH: usize, T: Printable + ?Sized> Formatter<T> for Truncate<WIDTH> {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        Truncator::new(p, 0, Some(WIDTH)).print(value)
    }
}

/// Drop the first `SKIP` bytes of the value.
///
/// ```
/// use tstreaming_core::{fmt, Print, Skip, Truncate};
///
/// let mut out = Vec::new();
/// out.put(fmt::<Truncate<4>, _>(fmt::<Skip<2>, _>("__1234__")));
/// assert_eq!(out, b"1234");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Skip<const SKIP: usize>;

impl<const SKIP: usize, T: Printable + ?Sized> Formatter<T> for Skip<SKIP> {
    #[inline]
    fn print_value<P: Print>(p: &mut P, value: &T) -> usize {
        Truncator::new(p, SKIP, None).print(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Fixed, fmt};
    use crate::sink::ArrayBuf;

    fn render<T: Printable>(value: T) -> (usize, String) {
        let mut out = Vec::new();
        let n = out.print(&value);
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn align_pads_short_values() {
        assert_eq!(render(fmt::<Align<5>, _>("ab")), (5, "ab   ".into()));
        assert_eq!(render(fmt::<Align<5, b'*'>, _>(7u8)), (5, "7****".into()));
    }

    #[test]
    fn align_leaves_long_values() {
        assert_eq!(render(fmt::<Align<2>, _>("abcdef")), (6, "abcdef".into()));
        assert_eq!(render(fmt::<Align<0>, _>("")), (0, String::new()));
    }

    #[test]
    fn align_stops_when_sink_refuses() {
        let mut buf = ArrayBuf::<4>::new();
        let n = buf.print(&fmt::<Align<10>, _>("ab"));
        assert_eq!(n, 4);
        assert_eq!(buf.as_bytes(), b"ab  ");
    }

    #[test]
    fn truncate_limits_output() {
        assert_eq!(
            render(fmt::<Truncate<8>, _>("Very long string")),
            (8, "Very lon".into())
        );
        assert_eq!(render(fmt::<Truncate<8>, _>("short")), (5, "short".into()));
        assert_eq!(render(fmt::<Truncate<0>, _>("gone")), (0, String::new()));
    }

    #[test]
    fn skip_drops_prefix() {
        assert_eq!(render(fmt::<Skip<2>, _>("__1234")), (4, "1234".into()));
        assert_eq!(render(fmt::<Skip<10>, _>("short")), (0, String::new()));
    }

    #[test]
    fn truncate_then_align() {
        let v = fmt::<Align<10>, _>(fmt::<Truncate<8>, _>("Very long string"));
        assert_eq!(render(v), (10, "Very lon  ".into()));
    }

    #[test]
    fn truncate_composes_with_numbers() {
        let v = fmt::<Truncate<3>, _>(fmt::<Fixed<100, 2>, _>(31415u32));
        assert_eq!(render(v), (3, "314".into()));
    }

    #[test]
    fn truncator_counts_refused_bytes_as_unforwarded() {
        let mut buf = ArrayBuf::<2>::new();
        let mut t = Truncator::new(&mut buf, 1, Some(3));
        let n = t.print("abcdef");
        // 'a' skipped, 'b' and 'c' forwarded, the rest refused by the full
        // buffer without advancing the window.
        assert_eq!(n, 2);
        assert_eq!(t.seen(), 3);
        assert_eq!(buf.as_bytes(), b"bc");
    }
}

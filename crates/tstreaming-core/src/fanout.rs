//! Printing to two sinks at once.

use crate::print::{Print, Printable};

/// A sink that forwards everything to two other sinks.
///
/// Counts are the integer average of what the two sinks reported, byte by
/// byte, so a byte only one of them accepted counts as 0. Whole values
/// passed to [`Print::print`] are averaged once per value. Usually built with
/// [`Print::and`]; pairs nest, so `a.and(&mut b).and(&mut c)` reaches
/// three sinks.
///
/// ```
/// use tstreaming_core::{fmt, Hex, Print};
///
/// let (mut log, mut wire) = (Vec::new(), Vec::new());
/// log.and(&mut wire).put("id=").put(fmt::<Hex, _>(0x1Fu8));
/// assert_eq!(log, b"id=1F");
/// assert_eq!(wire, b"id=1F");
/// ```
#[derive(Debug)]
pub struct DoublePrint<'a, A, B> {
    a: &'a mut A,
    b: &'a mut B,
}

impl<'a, A: Print, B: Print> DoublePrint<'a, A, B> {
    /// Pair `a` and `b`.
    pub fn new(a: &'a mut A, b: &'a mut B) -> Self {
        Self { a, b }
    }
}

impl<A: Print, B: Print> Print for DoublePrint<'_, A, B> {
    #[inline]
    fn write(&mut self, byte: u8) -> usize {
        (self.a.write(byte) + self.b.write(byte)) / 2
    }

    /// Formats `value` separately for each sink, first `A` then `B`,
    /// instead of formatting once and duplicating bytes.
    #[inline]
    fn print<T: Printable + ?Sized>(&mut self, value: &T) -> usize {
        (self.a.print(value) + self.b.print(value)) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Align, Fixed, fmt};
    use crate::sink::{ArrayBuf, Null};

    #[test]
    fn both_sinks_receive_output() {
        let (mut a, mut b) = (Vec::new(), Vec::new());
        let n = a
            .and(&mut b)
            .print(&fmt::<Align<6>, _>(fmt::<Fixed<10, 1>, _>(-15i8)));
        assert_eq!(n, 6);
        assert_eq!(a, b"-1.5  ");
        assert_eq!(b, b"-1.5  ");
    }

    #[test]
    fn count_is_the_average() {
        let mut small = ArrayBuf::<2>::new();
        let mut null = Null;
        assert_eq!(small.and(&mut null).print("abcd"), 3);
        assert_eq!(small.as_bytes(), b"ab");
    }

    #[test]
    fn raw_bytes_average_per_byte() {
        let mut small = ArrayBuf::<2>::new();
        let mut null = Null;
        let mut both = small.and(&mut null);
        assert_eq!(both.write_bytes(b"abcd"), 2);
        assert_eq!(both.write_str("ef"), 0);
        assert_eq!(small.as_bytes(), b"ab");
    }

    #[test]
    fn single_byte_on_one_side_rounds_down() {
        let mut full = ArrayBuf::<0>::new();
        let mut null = Null;
        assert_eq!(full.and(&mut null).write(b'x'), 0);
    }

    #[test]
    fn nested_pairs_reach_every_sink() {
        let (mut a, mut b, mut c) = (Vec::new(), Vec::new(), Vec::new());
        a.and(&mut b).and(&mut c).put("x").put(1u8);
        assert_eq!(a, b"x1");
        assert_eq!(b, b"x1");
        assert_eq!(c, b"x1");
    }

    #[test]
    fn println_goes_to_both() {
        let (mut a, mut b) = (Vec::new(), Vec::new());
        let n = a.and(&mut b).println();
        assert_eq!(n, crate::config::line_ending().as_bytes().len());
        assert_eq!(a, b);
    }
}

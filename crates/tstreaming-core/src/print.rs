//! The byte sink and the values it knows how to print.

use crate::config;
use crate::fanout::DoublePrint;
use crate::num::{self, Integer};

/// A byte-output destination.
///
/// Only [`write`](Print::write) is required. Every return value is the
/// number of bytes the sink accepted; a sink that cannot take a byte
/// returns 0 for it and callers see a short count.
pub trait Print {
    /// Write a single byte. Returns 1 if accepted, 0 otherwise.
    fn write(&mut self, byte: u8) -> usize;

    /// Write a run of bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut count = 0;
        for &b in bytes {
            count += self.write(b);
        }
        count
    }

    /// Write the UTF-8 bytes of `s`.
    fn write_str(&mut self, s: &str) -> usize {
        self.write_bytes(s.as_bytes())
    }

    /// Print anything [`Printable`].
    ///
    /// Formatters print nested values through this method, so sinks that
    /// want to see whole values instead of bytes (see [`DoublePrint`])
    /// override it.
    fn print<T: Printable + ?Sized>(&mut self, value: &T) -> usize
    where
        Self: Sized,
    {
        value.print_to(self)
    }

    /// Print an integer in `base` (2..=36, anything else means 10).
    fn print_radix<T: Integer>(&mut self, value: T, base: u32) -> usize
    where
        Self: Sized,
    {
        num::print_radix(self, value, base)
    }

    /// Print a float with `digits` fraction digits.
    fn print_float(&mut self, value: f64, digits: u8) -> usize
    where
        Self: Sized,
    {
        num::print_float(self, value, digits)
    }

    /// Write the configured line ending.
    fn println(&mut self) -> usize {
        self.write_bytes(config::line_ending().as_bytes())
    }

    /// Print `value` and return the sink for further chained calls.
    fn put<T: Printable>(&mut self, value: T) -> &mut Self
    where
        Self: Sized,
    {
        self.print(&value);
        self
    }

    /// Combine this sink with `other`; everything printed to the result
    /// goes to both.
    fn and<'a, B: Print>(&'a mut self, other: &'a mut B) -> DoublePrint<'a, Self, B>
    where
        Self: Sized,
    {
        DoublePrint::new(self, other)
    }
}

impl<P: Print> Print for &mut P {
    #[inline]
    fn write(&mut self, byte: u8) -> usize {
        (**self).write(byte)
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        (**self).write_bytes(bytes)
    }

    #[inline]
    fn print<T: Printable + ?Sized>(&mut self, value: &T) -> usize {
        (**self).print(value)
    }

    #[inline]
    fn println(&mut self) -> usize {
        (**self).println()
    }
}

/// A value that knows how to print itself to any sink.
pub trait Printable {
    /// Print `self` to `p`, returning the number of bytes accepted.
    fn print_to<P: Print>(&self, p: &mut P) -> usize;
}

impl<T: Printable + ?Sized> Printable for &T {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        (**self).print_to(p)
    }
}

impl<T: Printable + ?Sized> Printable for &mut T {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        (**self).print_to(p)
    }
}

impl Printable for str {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        p.write_str(self)
    }
}

impl Printable for [u8] {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        p.write_bytes(self)
    }
}

#[cfg(feature = "alloc")]
impl Printable for alloc::string::String {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        p.write_str(self)
    }
}

impl Printable for char {
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        let mut buf = [0u8; 4];
        p.write_str(self.encode_utf8(&mut buf))
    }
}

impl Printable for bool {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        p.write(if *self { b'1' } else { b'0' })
    }
}

macro_rules! printable_integer {
    ($($t:ty),*) => {$(
        impl Printable for $t {
            #[inline]
            fn print_to<P: Print>(&self, p: &mut P) -> usize {
                num::print_radix(p, *self, 10)
            }
        }
    )*};
}

printable_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Printable for f32 {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        num::print_float(p, f64::from(*self), 2)
    }
}

impl Printable for f64 {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        num::print_float(p, *self, 2)
    }
}

impl<T: Printable> Printable for Option<T> {
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        match self {
            Some(v) => v.print_to(p),
            None => 0,
        }
    }
}

// Tuples print their members back to back, so a heterogeneous list can be
// handed around as one value and unpacked at print time.
macro_rules! printable_tuple {
    ($($name:ident),+) => {
        impl<$($name: Printable),+> Printable for ($($name,)+) {
            #[allow(non_snake_case)]
            fn print_to<P: Print>(&self, p: &mut P) -> usize {
                let ($($name,)+) = self;
                0 $(+ p.print($name))+
            }
        }
    };
}

printable_tuple!(A);
printable_tuple!(A, B);
printable_tuple!(A, B, C);
printable_tuple!(A, B, C, D);
printable_tuple!(A, B, C, D, E);
printable_tuple!(A, B, C, D, E, F);
printable_tuple!(A, B, C, D, E, F, G);
printable_tuple!(A, B, C, D, E, F, G, H);
printable_tuple!(A, B, C, D, E, F, G, H, I);
printable_tuple!(A, B, C, D, E, F, G, H, I, J);
printable_tuple!(A, B, C, D, E, F, G, H, I, J, K);
printable_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Prints a [`core::fmt::Display`] value through the sink.
#[derive(Debug, Clone, Copy)]
pub struct Displayed<T>(pub T);

struct FmtAdapter<'a, P> {
    sink: &'a mut P,
    count: usize,
}

impl<P: Print> core::fmt::Write for FmtAdapter<'_, P> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.count += self.sink.write_str(s);
        Ok(())
    }
}

impl<T: core::fmt::Display> Printable for Displayed<T> {
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        let mut adapter = FmtAdapter { sink: p, count: 0 };
        // Refused bytes already show up in the count.
        let _ = core::fmt::write(&mut adapter, format_args!("{}", self.0));
        adapter.count
    }
}

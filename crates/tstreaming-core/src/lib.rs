//! # tstreaming-core
//!
//! Formatting helpers layered over a single-byte output sink.
//!
//! The sink is the [`Print`] trait: implement `write(u8)` for a serial port,
//! socket or buffer and every helper in this crate becomes available on it.
//! Values are composed with chained calls:
//!
//! ```
//! use tstreaming_core::{fmt, Align, Endl, Fixed, Hex, Print};
//!
//! let mut out = Vec::new();
//! out.put("reg=")
//!     .put(fmt::<Hex, _>(0xBEEFu16))
//!     .put(" v=")
//!     .put(fmt::<Align<7, b'.'>, _>(fmt::<Fixed<100, 2>, _>(1234u32)))
//!     .put(Endl);
//! assert_eq!(out, b"reg=BEEF v=12.34..\r\n");
//! ```
//!
//! Formatters are zero-sized types configured through const generics; the
//! actual work happens in a small set of non-generic helpers so that
//! instantiating many formatter variants does not duplicate code.

// Unit tests always link std; the sinks they print into still need `alloc`.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod config;
pub mod fanout;
pub mod format;
pub mod num;
pub mod print;
pub mod sink;
pub mod stream;
pub mod tvalue;

pub use config::{LineEnding, line_ending, set_line_ending};
pub use fanout::DoublePrint;
pub use format::{
    Align, Array, Char, Dec, Fixed, FormattedValue, Formatter, Hex, HexBits, NoFormat, Number,
    Prefix, Skip, Truncate, Truncator, fmt,
};
pub use num::Integer;
pub use print::{Displayed, Print, Printable};
pub use sink::{ArrayBuf, Null};
#[cfg(feature = "std")]
pub use sink::IoPrint;
pub use stream::Endl;
pub use tvalue::{TChar, TInt, TInt8, TInt16, TNullStr, TUInt, TUInt8, TUInt16, TValue};

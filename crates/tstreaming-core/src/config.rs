//! Line ending configuration.
//!
//! [`Print::println`](crate::Print::println) and [`Endl`](crate::Endl)
//! emit the process-wide line ending:
//! - `crlf` (default): `\r\n`, what serial terminals expect.
//! - `lf`: `\n`.
//! - `cr`: `\r`.
//!
//! With the `std` feature the value is read once from the
//! `TSTREAMING_LINE_ENDING` environment variable. [`set_line_ending`]
//! overrides it at any time, and is the only source without `std`.

use core::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted on first use (`std` only).
pub const LINE_ENDING_ENV: &str = "TSTREAMING_LINE_ENDING";

/// Line terminator written by `println`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\r\n`.
    #[default]
    CrLf,
    /// `\n`.
    Lf,
    /// `\r`.
    Cr,
}

impl LineEnding {
    /// Parse from string (case-insensitive). Unknown values map to the default.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("lf") || s.eq_ignore_ascii_case("unix") {
            Self::Lf
        } else if s.eq_ignore_ascii_case("cr") || s.eq_ignore_ascii_case("mac") {
            Self::Cr
        } else {
            Self::CrLf
        }
    }

    /// The bytes of the terminator.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::CrLf => b"\r\n",
            Self::Lf => b"\n",
            Self::Cr => b"\r",
        }
    }
}

// Atomic cache: 0=unresolved, 1=CrLf, 2=Lf, 3=Cr, 255=resolving.
static CACHED_ENDING: AtomicU8 = AtomicU8::new(ENDING_UNRESOLVED);

const ENDING_UNRESOLVED: u8 = 0;
const ENDING_CRLF: u8 = 1;
const ENDING_LF: u8 = 2;
const ENDING_CR: u8 = 3;
#[cfg(feature = "std")]
const ENDING_RESOLVING: u8 = 255;

fn ending_to_u8(ending: LineEnding) -> u8 {
    match ending {
        LineEnding::CrLf => ENDING_CRLF,
        LineEnding::Lf => ENDING_LF,
        LineEnding::Cr => ENDING_CR,
    }
}

fn u8_to_ending(v: u8) -> LineEnding {
    match v {
        ENDING_LF => LineEnding::Lf,
        ENDING_CR => LineEnding::Cr,
        _ => LineEnding::CrLf,
    }
}

/// Override the line ending for the rest of the process.
pub fn set_line_ending(ending: LineEnding) {
    CACHED_ENDING.store(ending_to_u8(ending), Ordering::Release);
}

/// The configured line ending.
#[cfg(not(feature = "std"))]
#[must_use]
pub fn line_ending() -> LineEnding {
    u8_to_ending(CACHED_ENDING.load(Ordering::Acquire))
}

/// The configured line ending (reads the environment on first call, caches
/// thereafter).
///
/// A call that races with the first resolution gets the default instead of
/// waiting.
#[cfg(feature = "std")]
#[must_use]
pub fn line_ending() -> LineEnding {
    let cached = CACHED_ENDING.load(Ordering::Acquire);
    if cached == ENDING_RESOLVING {
        return LineEnding::CrLf;
    }
    if cached != ENDING_UNRESOLVED {
        return u8_to_ending(cached);
    }

    if CACHED_ENDING
        .compare_exchange(
            ENDING_UNRESOLVED,
            ENDING_RESOLVING,
            Ordering::SeqCst,
            Ordering::Relaxed,
        )
        .is_err()
    {
        let v = CACHED_ENDING.load(Ordering::Acquire);
        return if v != ENDING_UNRESOLVED && v != ENDING_RESOLVING {
            u8_to_ending(v)
        } else {
            LineEnding::CrLf
        };
    }

    let ending = std::env::var(LINE_ENDING_ENV)
        .map(|v| LineEnding::from_str_loose(&v))
        .unwrap_or_default();
    // A concurrent set_line_ending wins over the environment.
    let _ = CACHED_ENDING.compare_exchange(
        ENDING_RESOLVING,
        ending_to_u8(ending),
        Ordering::AcqRel,
        Ordering::Relaxed,
    );
    u8_to_ending(CACHED_ENDING.load(Ordering::Acquire))
}

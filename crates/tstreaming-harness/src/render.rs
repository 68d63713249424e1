//! Runtime formatter descriptions.
//!
//! Fixtures cannot name const-generic formatter types, so they describe the
//! formatter as data ([`FormatSpec`]). [`Rendered`] pairs a description with
//! a [`FixtureValue`] and prints it through the same helpers the
//! formatter types call, so a fixture exercises the real code paths.

use std::fmt;

use serde::{Deserialize, Serialize};
use tstreaming_core::format::{
    Truncator, print_aligned, print_array, print_fixed, print_hex_bits, print_number,
};
use tstreaming_core::num::{print_float, print_radix};
use tstreaming_core::{Integer, Print, Printable};

use crate::error::HarnessError;

/// A formatter, possibly wrapping other formatters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatSpec {
    #[default]
    Plain,
    Hex,
    HexBits {
        bits: u32,
    },
    Number {
        digits: u8,
        #[serde(default = "default_base")]
        base: u32,
    },
    Fixed {
        scale: u64,
        precision: usize,
    },
    Char,
    Radix {
        base: u32,
    },
    Float {
        digits: u8,
    },
    Align {
        width: usize,
        #[serde(default = "default_pad")]
        pad: char,
        #[serde(default)]
        inner: Box<FormatSpec>,
    },
    Truncate {
        width: usize,
        #[serde(default)]
        inner: Box<FormatSpec>,
    },
    Skip {
        count: usize,
        #[serde(default)]
        inner: Box<FormatSpec>,
    },
    Array {
        #[serde(default)]
        element: Box<FormatSpec>,
        #[serde(default = "default_sep1")]
        sep1: Option<char>,
        #[serde(default = "default_sep2")]
        sep2: Option<char>,
    },
    /// `prefix: null` is the absent string: nothing is printed.
    Prefix {
        #[serde(default)]
        prefix: Option<String>,
        #[serde(default)]
        inner: Box<FormatSpec>,
    },
}

fn default_base() -> u32 {
    10
}

fn default_pad() -> char {
    ' '
}

fn default_sep1() -> Option<char> {
    Some(',')
}

fn default_sep2() -> Option<char> {
    Some(' ')
}

impl FormatSpec {
    /// Short name of the outermost formatter.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Hex => "hex",
            Self::HexBits { .. } => "hex_bits",
            Self::Number { .. } => "number",
            Self::Fixed { .. } => "fixed",
            Self::Char => "char",
            Self::Radix { .. } => "radix",
            Self::Float { .. } => "float",
            Self::Align { .. } => "align",
            Self::Truncate { .. } => "truncate",
            Self::Skip { .. } => "skip",
            Self::Array { .. } => "array",
            Self::Prefix { .. } => "prefix",
        }
    }

    /// Check that `value` can be printed with this formatter and that every
    /// parameter is in the range the formatter types accept at compile time.
    pub fn check(&self, value: &FixtureValue) -> Result<(), HarnessError> {
        let name = self.kind();
        match self {
            Self::Plain => Ok(()),
            Self::Hex => require_integer(name, value),
            Self::HexBits { bits } => {
                if !(1..=64).contains(bits) {
                    return Err(HarnessError::invalid(name, format!("bits {bits} outside 1..=64")));
                }
                require_integer(name, value)
            }
            Self::Number { base, .. } => {
                if !(2..=16).contains(base) {
                    return Err(HarnessError::invalid(name, format!("base {base} outside 2..=16")));
                }
                require_integer(name, value)
            }
            Self::Fixed { scale, .. } => {
                if *scale == 0 {
                    return Err(HarnessError::invalid(name, "scale must be non-zero"));
                }
                require_integer(name, value)
            }
            Self::Char => match value {
                FixtureValue::Char(_) => Ok(()),
                other => require_integer(name, other),
            },
            Self::Radix { base } => {
                if !(2..=36).contains(base) {
                    return Err(HarnessError::invalid(name, format!("base {base} outside 2..=36")));
                }
                require_integer(name, value)
            }
            Self::Float { .. } => match value {
                FixtureValue::F64(_) => Ok(()),
                other => Err(HarnessError::InputMismatch {
                    formatter: name,
                    expected: "f64",
                    found: other.type_name(),
                }),
            },
            Self::Align { pad, inner, .. } => {
                if !pad.is_ascii() {
                    return Err(HarnessError::invalid(name, format!("pad {pad:?} is not ASCII")));
                }
                inner.check(value)
            }
            Self::Truncate { inner, .. } | Self::Skip { inner, .. } | Self::Prefix { inner, .. } => {
                inner.check(value)
            }
            Self::Array {
                element,
                sep1,
                sep2,
            } => {
                for sep in [sep1, sep2].into_iter().flatten() {
                    if !sep.is_ascii() {
                        return Err(HarnessError::invalid(
                            name,
                            format!("separator {sep:?} is not ASCII"),
                        ));
                    }
                }
                match value {
                    FixtureValue::Array(items) => items.iter().try_for_each(|item| element.check(item)),
                    other => Err(HarnessError::InputMismatch {
                        formatter: name,
                        expected: "array",
                        found: other.type_name(),
                    }),
                }
            }
        }
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain | Self::Hex | Self::Char => f.write_str(self.kind()),
            Self::HexBits { bits } => write!(f, "hex_bits<{bits}>"),
            Self::Number { digits, base } => write!(f, "number<{digits},{base}>"),
            Self::Fixed { scale, precision } => write!(f, "fixed<{scale},{precision}>"),
            Self::Radix { base } => write!(f, "radix<{base}>"),
            Self::Float { digits } => write!(f, "float<{digits}>"),
            Self::Align { width, pad, inner } => write!(f, "align<{width},{pad:?}>({inner})"),
            Self::Truncate { width, inner } => write!(f, "truncate<{width}>({inner})"),
            Self::Skip { count, inner } => write!(f, "skip<{count}>({inner})"),
            Self::Array {
                element,
                sep1,
                sep2,
            } => write!(f, "array<{sep1:?},{sep2:?}>({element})"),
            Self::Prefix { prefix, inner } => write!(f, "prefix<{prefix:?}>({inner})"),
        }
    }
}

/// A typed fixture input, e.g. `{"type":"u16","value":255}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FixtureValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F64(f64),
    Bool(bool),
    Char(char),
    Str(String),
    Array(Vec<FixtureValue>),
}

impl FixtureValue {
    /// The `type` tag of this value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Str(_) => "str",
            Self::Array(_) => "array",
        }
    }

    /// True for the integer variants.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::U8(_)
                | Self::U16(_)
                | Self::U32(_)
                | Self::U64(_)
                | Self::I8(_)
                | Self::I16(_)
                | Self::I32(_)
                | Self::I64(_)
        )
    }
}

fn require_integer(formatter: &'static str, value: &FixtureValue) -> Result<(), HarnessError> {
    if value.is_integer() {
        Ok(())
    } else {
        Err(HarnessError::InputMismatch {
            formatter,
            expected: "integer",
            found: value.type_name(),
        })
    }
}

// Binds the integer inside `$value` to `$v` at its own type, or evaluates
// `$otherwise` for non-integer values.
macro_rules! with_integer {
    ($value:expr, |$v:ident| $body:expr, $otherwise:expr) => {
        match $value {
            FixtureValue::U8(x) => {
                let $v = *x;
                $body
            }
            FixtureValue::U16(x) => {
                let $v = *x;
                $body
            }
            FixtureValue::U32(x) => {
                let $v = *x;
                $body
            }
            FixtureValue::U64(x) => {
                let $v = *x;
                $body
            }
            FixtureValue::I8(x) => {
                let $v = *x;
                $body
            }
            FixtureValue::I16(x) => {
                let $v = *x;
                $body
            }
            FixtureValue::I32(x) => {
                let $v = *x;
                $body
            }
            FixtureValue::I64(x) => {
                let $v = *x;
                $body
            }
            _ => $otherwise,
        }
    };
}

fn print_hex<P: Print, T: Integer>(p: &mut P, value: T) -> usize {
    print_hex_bits(p, value, T::BITS)
}

fn ascii_byte(c: Option<char>) -> u8 {
    c.and_then(|c| u8::try_from(c).ok()).unwrap_or(0)
}

fn print_plain<P: Print>(p: &mut P, value: &FixtureValue) -> usize {
    match value {
        FixtureValue::F64(v) => p.print(v),
        FixtureValue::Bool(v) => p.print(v),
        FixtureValue::Char(v) => p.print(v),
        FixtureValue::Str(v) => p.print(v.as_str()),
        FixtureValue::Array(items) => items.iter().map(|item| print_plain(p, item)).sum(),
        other => with_integer!(other, |v| p.print(&v), 0),
    }
}

// Nested truncators would otherwise instantiate `Truncator<Truncator<..>>`
// once per nesting level, and the nesting depth is only known at runtime.
// Every truncator in a rendered tree wraps this one type instead.
struct ErasedSink<'a>(&'a mut (dyn Print + 'a));

impl Print for ErasedSink<'_> {
    fn write(&mut self, byte: u8) -> usize {
        self.0.write(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.0.write_bytes(bytes)
    }

    fn println(&mut self) -> usize {
        self.0.println()
    }
}

/// A checked formatter/value pair, printable to any sink.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    spec: &'a FormatSpec,
    value: &'a FixtureValue,
}

impl<'a> Rendered<'a> {
    /// Pair `spec` with `value` after [`FormatSpec::check`]ing them.
    pub fn new(spec: &'a FormatSpec, value: &'a FixtureValue) -> Result<Self, HarnessError> {
        spec.check(value)?;
        Ok(Self { spec, value })
    }

    // Checking the outer spec checked every nested one.
    fn with_spec(&self, spec: &'a FormatSpec) -> Self {
        Self {
            spec,
            value: self.value,
        }
    }
}

impl Printable for Rendered<'_> {
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        match self.spec {
            FormatSpec::Plain => print_plain(p, self.value),
            FormatSpec::Hex => with_integer!(self.value, |v| print_hex(p, v), 0),
            FormatSpec::HexBits { bits } => {
                with_integer!(self.value, |v| print_hex_bits(p, v, *bits), 0)
            }
            FormatSpec::Number { digits, base } => {
                with_integer!(self.value, |v| print_number(p, v, *digits, *base), 0)
            }
            FormatSpec::Fixed { scale, precision } => {
                with_integer!(self.value, |v| print_fixed(p, v, *scale, *precision), 0)
            }
            FormatSpec::Char => match self.value {
                FixtureValue::Char(c) => p.print(c),
                other => with_integer!(other, |v| p.write(v.low_byte()), 0),
            },
            FormatSpec::Radix { base } => with_integer!(self.value, |v| print_radix(p, v, *base), 0),
            FormatSpec::Float { digits } => match self.value {
                FixtureValue::F64(v) => print_float(p, *v, *digits),
                _ => 0,
            },
            FormatSpec::Align { width, pad, inner } => {
                print_aligned(p, &self.with_spec(inner), *width, ascii_byte(Some(*pad)))
            }
            FormatSpec::Truncate { width, inner } => {
                let mut sink = ErasedSink(p);
                Truncator::new(&mut sink, 0, Some(*width)).print(&self.with_spec(inner))
            }
            FormatSpec::Skip { count, inner } => {
                let mut sink = ErasedSink(p);
                Truncator::new(&mut sink, *count, None).print(&self.with_spec(inner))
            }
            FormatSpec::Array {
                element,
                sep1,
                sep2,
            } => match self.value {
                FixtureValue::Array(items) => print_array(
                    p,
                    items,
                    ascii_byte(*sep1),
                    ascii_byte(*sep2),
                    |p, item| p.print(&Rendered { spec: element, value: item }),
                ),
                _ => 0,
            },
            FormatSpec::Prefix { prefix, inner } => {
                p.print(&prefix.as_deref()) + p.print(&self.with_spec(inner))
            }
        }
    }
}

/// Check and render `value` with `spec` into a fresh buffer.
pub fn render(spec: &FormatSpec, value: &FixtureValue) -> Result<Vec<u8>, HarnessError> {
    let rendered = Rendered::new(spec, value)?;
    let mut out = Vec::new();
    out.print(&rendered);
    Ok(out)
}

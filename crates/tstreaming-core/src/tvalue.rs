//! Constants carried in types.
//!
//! A [`TValue`] is a zero-sized type whose associated constant is the
//! value, so it can be handed to a formatter as a type parameter (see
//! [`Prefix`](crate::Prefix)). Integers and `char` use const generics;
//! strings need a named type, which [`tstr!`](crate::tstr) declares.

/// A value known at compile time, carried by a type.
pub trait TValue {
    /// Type of the carried value.
    type Type;
    /// The carried value.
    const VALUE: Self::Type;
}

macro_rules! const_value {
    ($($(#[$meta:meta])* $name:ident($t:ty);)*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name<const V: $t>;

        impl<const V: $t> TValue for $name<V> {
            type Type = $t;
            const VALUE: $t = V;
        }
    )*};
}

const_value! {
    /// An `i32` constant.
    TInt(i32);
    /// A `u32` constant.
    TUInt(u32);
    /// An `i8` constant.
    TInt8(i8);
    /// A `u8` constant.
    TUInt8(u8);
    /// An `i16` constant.
    TInt16(i16);
    /// A `u16` constant.
    TUInt16(u16);
    /// A `char` constant.
    TChar(char);
}

/// The absent string. Prints nothing, and unlike `""` compares unequal to
/// every string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TNullStr;

impl TValue for TNullStr {
    type Type = Option<&'static str>;
    const VALUE: Option<&'static str> = None;
}

/// Declare a unit type carrying a `&'static str`.
///
/// ```
/// use tstreaming_core::{tstr, TValue};
///
/// tstr!(pub Units = " mV");
/// assert_eq!(Units::VALUE, " mV");
/// ```
#[macro_export]
macro_rules! tstr {
    ($(#[$meta:meta])* $vis:vis $name:ident = $value:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl $crate::TValue for $name {
            type Type = &'static str;
            const VALUE: &'static str = $value;
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    tstr!(Greeting = "hi");
    tstr!(Empty = "");

    fn value_of<V: TValue>() -> V::Type {
        V::VALUE
    }

    #[test]
    fn integer_constants() {
        assert_eq!(value_of::<TInt<-40>>(), -40);
        assert_eq!(value_of::<TUInt<4_000_000_000>>(), 4_000_000_000);
        assert_eq!(value_of::<TInt8<-1>>(), -1i8);
        assert_eq!(value_of::<TUInt8<255>>(), 255u8);
        assert_eq!(value_of::<TInt16<-300>>(), -300i16);
        assert_eq!(value_of::<TUInt16<65535>>(), 65535u16);
    }

    #[test]
    fn char_constant() {
        assert_eq!(value_of::<TChar<'x'>>(), 'x');
    }

    #[test]
    fn strings_and_null() {
        assert_eq!(value_of::<Greeting>(), "hi");
        assert_eq!(value_of::<Empty>(), "");
        assert_eq!(value_of::<TNullStr>(), None);
        assert_ne!(value_of::<TNullStr>(), Some(value_of::<Empty>()));
    }
}

//! Integral constant wrappers.
//!
//! A constant wrapper is a zero-sized type carrying one compile-time value. It
//! exposes the value as an associated constant, the value's domain as
//! [`IntegralConstant::ValueType`] and itself as [`IntegralConstant::Type`],
//! converts implicitly into its value via `From`, and can be "called" to
//! produce the value.
//!
//! ```
//! use tola_traits::{IntegralConstant, I32Constant};
//!
//! type Answer = I32Constant<42>;
//! assert_eq!(Answer::VALUE, 42);
//! assert_eq!(i32::from(Answer::default()), 42);
//! assert_eq!(Answer::default().call(), 42);
//! ```

use core::fmt;

/// A zero-sized holder of one compile-time value.
pub trait IntegralConstant: Copy + Default + 'static {
    /// The domain of the carried value.
    type ValueType: Copy;
    /// The wrapper itself.
    type Type: IntegralConstant<ValueType = Self::ValueType>;
    /// The carried value.
    const VALUE: Self::ValueType;

    /// Produce the carried value.
    #[inline(always)]
    fn value(self) -> Self::ValueType {
        Self::VALUE
    }

    /// Invocation form, identical to [`value`](Self::value).
    #[inline(always)]
    fn call(self) -> Self::ValueType {
        Self::VALUE
    }
}

macro_rules! integral_constants {
    ($($(#[$doc:meta])* $name:ident($ty:ident)),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            pub struct $name<const V: $ty>;

            impl<const V: $ty> IntegralConstant for $name<V> {
                type ValueType = $ty;
                type Type = Self;
                const VALUE: $ty = V;
            }

            impl<const V: $ty> From<$name<V>> for $ty {
                #[inline(always)]
                fn from(_: $name<V>) -> $ty {
                    V
                }
            }

            impl<const V: $ty> fmt::Display for $name<V> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&V, f)
                }
            }
        )*
    };
}

integral_constants! {
    /// Boolean constant. [`True`](crate::True) and [`False`](crate::False) are its two instances.
    BoolConstant(bool),
    CharConstant(char),
    U8Constant(u8),
    U16Constant(u16),
    U32Constant(u32),
    U64Constant(u64),
    U128Constant(u128),
    UsizeConstant(usize),
    I8Constant(i8),
    I16Constant(i16),
    I32Constant(i32),
    I64Constant(i64),
    I128Constant(i128),
    IsizeConstant(isize),
}

//! # Layer 3: Gates and selectors
//!
//! [`EnableIf`] exposes its nested type only when its condition is
//! [`True`]; naming `EnableIfT<False, T>` is an error, which is how a
//! candidate is removed from consideration. [`Conditional`] always exposes
//! one of its two branches.
//!
//! ```
//! use tola_traits::*;
//!
//! fn halve<T>(v: T) -> EnableIfT<IsFloatingPoint<T>, T>
//! where
//!     T: Meta + core::ops::Div<Output = T> + From<u8>,
//!     EnableIf<IsFloatingPoint<T>, T>: Enabled<Type = T>,
//! {
//!     v / T::from(2)
//! }
//!
//! assert_eq!(halve(3.0f64), 1.5);
//! ```
//!
//! A closed gate has no nested type:
//!
//! ```compile_fail
//! use tola_traits::*;
//!
//! let x: EnableIfT<IsPointer<u8>, u8> = 0;
//! ```

use core::marker::PhantomData;

use crate::primitives::bool::{Bool, True};

/// Yields `T` (default `()`) through [`Enabled`] when `B` is [`True`].
pub struct EnableIf<B, T: ?Sized = ()>(PhantomData<B>, PhantomData<T>);

/// Nested result of an open gate.
pub trait Enabled {
    type Type: ?Sized;
}

impl<T: ?Sized> Enabled for EnableIf<True, T> {
    type Type = T;
}

/// Shorthand for `<EnableIf<B, T> as Enabled>::Type`.
pub type EnableIfT<B, T = ()> = <EnableIf<B, T> as Enabled>::Type;

/// Selects `T` when `B` is [`True`], `F` otherwise.
pub struct Conditional<B, T: ?Sized, F: ?Sized>(PhantomData<B>, PhantomData<T>, PhantomData<F>);

/// Nested result of a selector.
pub trait Selected {
    type Type: ?Sized;
}

impl<B: Bool, T: ?Sized, F: ?Sized> Selected for Conditional<B, T, F> {
    type Type = <B as Bool>::If<T, F>;
}

/// Shorthand for `<Conditional<B, T, F> as Selected>::Type`.
pub type ConditionalT<B, T, F> = <Conditional<B, T, F> as Selected>::Type;

//! Type-level boolean facts.
//!
//! Every predicate in the crate resolves to [`True`] or [`False`], the two
//! instances of [`BoolConstant`]. Combinators live on the [`Bool`] trait as
//! generic associated types so that facts compose without runtime code.

use super::constant::{BoolConstant, IntegralConstant};

/// Type-level `true`.
pub type True = BoolConstant<true>;

/// Type-level `false`.
pub type False = BoolConstant<false>;

/// Type-level boolean.
///
/// The runtime value is available through the supertrait as `B::VALUE`.
pub trait Bool: IntegralConstant<ValueType = bool> {
    /// Type-level conditional: If<Then, Else> (general type selector)
    type If<Then: ?Sized, Else: ?Sized>: ?Sized;

    /// Conditional whose branches are themselves facts.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;

    /// Fact equality (XNOR)
    type Eq<Other: Bool>: Bool;
}

impl Bool for True {
    type If<Then: ?Sized, Else: ?Sized> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;
    type And<Other: Bool> = Other;
    type Or<Other: Bool> = True;
    type Not = False;
    type Eq<Other: Bool> = Other;
}

impl Bool for False {
    type If<Then: ?Sized, Else: ?Sized> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;
    type And<Other: Bool> = False;
    type Or<Other: Bool> = Other;
    type Not = True;
    type Eq<Other: Bool> = <Other as Bool>::Not;
}

/// Read a fact in a `const` context.
#[inline(always)]
pub const fn value<B: Bool>() -> bool {
    B::VALUE
}

/// `A && B`
pub type And<A, B> = <A as Bool>::And<B>;

/// `A || B`
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `!A`
pub type Not<A> = <A as Bool>::Not;

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = True;
}

impl SelectBool<false> for () {
    type Out = False;
}

/// Conditional type alias driven by a literal `bool`.
pub type If<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::If<T, E>;

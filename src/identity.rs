//! Type identities and their equality.
//!
//! Every described type has an identity built from three pieces:
//!
//! ```text
//! Qual<IsConst, IsVolatile, Id<Tag, Arg<A0, Arg<A1, Nil>>>>
//!       |         |            |    |
//!       qualifiers (Bool)      |    argument identities (pointee, element, ...)
//!                              hash stream of the shape or name
//! ```
//!
//! [`IdEq`] compares identities lazily: qualifiers first, then the tag
//! stream, then each argument only while everything before it matched.

use core::marker::PhantomData;

use crate::primitives::bool::{Bool, False, True};
use crate::primitives::stream::{Tag, TagDepth, TagEq};

/// Unqualified identity: a tag plus argument identities.
pub struct Id<Tag, Args = Nil>(PhantomData<(Tag, Args)>);

/// Empty argument list.
pub struct Nil;

/// Argument list cell.
pub struct Arg<Head, Tail>(PhantomData<(Head, Tail)>);

/// Qualified identity: const/volatile facts plus the bare identity.
pub struct Qual<C, V, Bare>(PhantomData<(C, V, Bare)>);

/// Type-level identity equality.
pub trait IdEq<Other> {
    type Out: Bool;
}

/// Continue comparing the rest only while the part before matched.
pub trait GateRest<A, B> {
    type Out: Bool;
}

impl<A, B> GateRest<A, B> for False {
    type Out = False;
}

impl<A: IdEq<B>, B> GateRest<A, B> for True {
    type Out = <A as IdEq<B>>::Out;
}

impl<T1, A1, T2, A2> IdEq<Id<T2, A2>> for Id<T1, A1>
where
    T1: Tag + TagEq<T2, TagDepth>,
    T2: Tag,
    <T1 as TagEq<T2, TagDepth>>::Out: GateRest<A1, A2>,
{
    type Out = <<T1 as TagEq<T2, TagDepth>>::Out as GateRest<A1, A2>>::Out;
}

impl IdEq<Nil> for Nil {
    type Out = True;
}

impl<H, T> IdEq<Arg<H, T>> for Nil {
    type Out = False;
}

impl<H, T> IdEq<Nil> for Arg<H, T> {
    type Out = False;
}

impl<H1, T1, H2, T2> IdEq<Arg<H2, T2>> for Arg<H1, T1>
where
    H1: IdEq<H2>,
    <H1 as IdEq<H2>>::Out: GateRest<T1, T2>,
{
    type Out = <<H1 as IdEq<H2>>::Out as GateRest<T1, T2>>::Out;
}

impl<C1, V1, B1, C2, V2, B2> IdEq<Qual<C2, V2, B2>> for Qual<C1, V1, B1>
where
    C1: Bool,
    V1: Bool,
    C2: Bool,
    V2: Bool,
    <<C1 as Bool>::Eq<C2> as Bool>::And<<V1 as Bool>::Eq<V2>>: GateRest<B1, B2>,
{
    type Out = <<<C1 as Bool>::Eq<C2> as Bool>::And<<V1 as Bool>::Eq<V2>> as GateRest<B1, B2>>::Out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::bool::value;

    type I32 = Id<macros::tag_stream!("i32")>;
    type U32 = Id<macros::tag_stream!("u32")>;
    type Ptr<P> = Id<macros::tag_stream!("*"), Arg<P, Nil>>;

    #[test]
    fn test_tags_compare_by_stream() {
        assert!(value::<<I32 as IdEq<I32>>::Out>());
        assert!(!value::<<I32 as IdEq<U32>>::Out>());
    }

    #[test]
    fn test_arguments_compare_after_tag() {
        type P1 = Ptr<Qual<False, False, I32>>;
        type P2 = Ptr<Qual<True, False, I32>>;
        assert!(value::<<P1 as IdEq<P1>>::Out>());
        assert!(!value::<<P1 as IdEq<P2>>::Out>());
    }

    #[test]
    fn test_qualifiers_must_match() {
        assert!(!value::<<Qual<True, False, I32> as IdEq<Qual<False, False, I32>>>::Out>());
        assert!(value::<<Qual<True, True, I32> as IdEq<Qual<True, True, I32>>>::Out>());
    }

    #[test]
    fn test_argument_lists_of_different_length() {
        assert!(!value::<<Arg<I32, Nil> as IdEq<Nil>>::Out>());
        assert!(!value::<<Arg<I32, Nil> as IdEq<Arg<I32, Arg<U32, Nil>>>>::Out>());
    }
}

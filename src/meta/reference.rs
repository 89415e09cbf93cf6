//! Reference categories.
//!
//! `&T`, `&mut T` and [`LRef<T>`] are lvalue references; [`RRef<T>`] is an
//! rvalue reference. Adding a reference to a reference collapses: anything
//! involving an lvalue reference stays an lvalue reference. References carry
//! no qualifiers of their own and have no layout facts.

use core::marker::PhantomData;

use super::kind::{LvalueReferenceKind, RvalueReferenceKind};
use super::{FullId, Meta};
use crate::identity::{Arg, Id, Nil};
use crate::primitives::bool::False;

/// Lvalue reference to `T`; same identity as `&T`.
pub struct LRef<T: ?Sized>(PhantomData<T>);

/// Rvalue reference to `T`.
pub struct RRef<T: ?Sized>(PhantomData<T>);

type LRefTag = macros::tag_stream!("&");
type LRefMutTag = macros::tag_stream!("&mut");
type RRefTag = macros::tag_stream!("&&");

macro_rules! reference_rules {
    ($referent:ty) => {
        type IsConst = False;
        type IsVolatile = False;
        type TriviallyCopyable = False;
        type Trivial = False;
        type StandardLayout = False;
        type RemoveConst = Self;
        type RemoveVolatile = Self;
        type AddConst = Self;
        type AddVolatile = Self;
        type RemoveReference = $referent;
        type RemovePointer = Self;
        type AddPointer = *mut $referent;
        type RemoveExtent = Self;
    };
}

impl<'a, T: ?Sized + Meta> Meta for &'a T {
    type Kind = LvalueReferenceKind;
    type BareId = Id<LRefTag, Arg<FullId<T>, Nil>>;
    type AddLvalueReference = Self;
    type AddRvalueReference = Self;
    reference_rules!(T);
}

impl<'a, T: ?Sized + Meta> Meta for &'a mut T {
    type Kind = LvalueReferenceKind;
    type BareId = Id<LRefMutTag, Arg<FullId<T>, Nil>>;
    type AddLvalueReference = Self;
    type AddRvalueReference = Self;
    reference_rules!(T);
}

impl<T: ?Sized + Meta> Meta for LRef<T> {
    type Kind = LvalueReferenceKind;
    type BareId = Id<LRefTag, Arg<FullId<T>, Nil>>;
    type AddLvalueReference = Self;
    type AddRvalueReference = Self;
    reference_rules!(T);
}

impl<T: ?Sized + Meta> Meta for RRef<T> {
    type Kind = RvalueReferenceKind;
    type BareId = Id<RRefTag, Arg<FullId<T>, Nil>>;
    type AddLvalueReference = LRef<T>;
    type AddRvalueReference = Self;
    reference_rules!(T);
}

//! Pointers, member pointers and the null-pointer type.
//!
//! `*mut T` points to `T`; `*const T` points to `Const<T>`, so
//! `*const i32` and `*mut Const<i32>` are the same type to [`IsSame`](crate::IsSame).

use core::marker::PhantomData;

use super::kind::{Kind, MemberPointerKind, NullPointerKind, PointerKind};
use super::qualifier::Const;
use super::{FullId, Meta};
use crate::identity::{Arg, Id, Nil};
use crate::primitives::bool::True;

/// The type of the null-pointer literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullPtr;

/// Pointer to a member of `C` with type `T`; a member function pointer when
/// `T` is a function type.
pub struct MemberPtr<T: ?Sized, C: ?Sized>(PhantomData<T>, PhantomData<C>);

type PtrTag = macros::tag_stream!("*");
type MemberPtrTag = macros::tag_stream!("::*");

impl Meta for NullPtr {
    type Kind = NullPointerKind;
    type BareId = Id<macros::tag_stream!("nullptr_t")>;
    type TriviallyCopyable = True;
    type Trivial = True;
    type StandardLayout = True;
    crate::__meta_leaf_rules!();
}

impl<T: ?Sized + Meta> Meta for *mut T {
    type Kind = PointerKind;
    type BareId = Id<PtrTag, Arg<FullId<T>, Nil>>;
    type TriviallyCopyable = True;
    type Trivial = True;
    type StandardLayout = True;
    crate::__meta_unqualified!();
    type RemoveReference = Self;
    type AddLvalueReference = super::LRef<Self>;
    type AddRvalueReference = super::RRef<Self>;
    type RemovePointer = T;
    type AddPointer = *mut Self;
    type RemoveExtent = Self;
}

impl<T: ?Sized + Meta> Meta for *const T {
    type Kind = PointerKind;
    type BareId = Id<PtrTag, Arg<FullId<Const<T>>, Nil>>;
    type TriviallyCopyable = True;
    type Trivial = True;
    type StandardLayout = True;
    crate::__meta_unqualified!();
    type RemoveReference = Self;
    type AddLvalueReference = super::LRef<Self>;
    type AddRvalueReference = super::RRef<Self>;
    type RemovePointer = Const<T>;
    type AddPointer = *mut Self;
    type RemoveExtent = Self;
}

impl<T: ?Sized + Meta, C: ?Sized + Meta> Meta for MemberPtr<T, C> {
    type Kind = MemberPointerKind<<T::Kind as Kind>::Function>;
    type BareId = Id<MemberPtrTag, Arg<FullId<T>, Arg<FullId<C>, Nil>>>;
    type TriviallyCopyable = True;
    type Trivial = True;
    type StandardLayout = True;
    crate::__meta_leaf_rules!();
}

//! `const` and `volatile` qualifier markers.
//!
//! Qualifiers are canonical sets: `Const<Const<T>>` is the same type as
//! `Const<T>`, and `Const<Volatile<T>>` the same as `Volatile<Const<T>>`,
//! as far as every fact and transformation is concerned. Adding a qualifier
//! that is already present yields the type unchanged, and a qualifier on a
//! reference or function is dropped: `Const<&T>` is `&T`.

use core::marker::PhantomData;

use super::kind::Kind;
use super::reference::{LRef, RRef};
use super::Meta;
use crate::primitives::bool::{Bool, Or, True};

/// `const T`
pub struct Const<T: ?Sized>(PhantomData<T>);

/// `volatile T`
pub struct Volatile<T: ?Sized>(PhantomData<T>);

/// References and functions cannot be qualified: a qualifier on them is
/// dropped and the marker describes exactly `T`.
type Unqualifiable<T> = Or<<<T as Meta>::Kind as Kind>::Reference, <<T as Meta>::Kind as Kind>::Function>;

/// `Then` when `T` cannot be qualified, `Else` otherwise.
type Collapse<T, Then, Else> = <Unqualifiable<T> as Bool>::If<Then, Else>;

impl<T: ?Sized + Meta> Meta for Const<T> {
    type Kind = T::Kind;
    type BareId = T::BareId;
    type IsConst = <Unqualifiable<T> as Bool>::Elif<T::IsConst, True>;
    type IsVolatile = T::IsVolatile;
    type TriviallyCopyable = T::TriviallyCopyable;
    type Trivial = T::Trivial;
    type StandardLayout = T::StandardLayout;

    type RemoveConst = T::RemoveConst;
    type RemoveVolatile = Collapse<T, T::RemoveVolatile, Const<T::RemoveVolatile>>;
    type AddConst = Collapse<T, T, Self>;
    type AddVolatile = Collapse<T, T, <T::IsVolatile as Bool>::If<Self, Volatile<Self>>>;
    type RemoveReference = Collapse<T, T::RemoveReference, Self>;
    type AddLvalueReference = Collapse<T, T::AddLvalueReference, LRef<Self>>;
    type AddRvalueReference = Collapse<T, T::AddRvalueReference, RRef<Self>>;
    // `T* const` loses its top-level const together with the pointer.
    type RemovePointer = <Or<<T::Kind as Kind>::Pointer, Unqualifiable<T>> as Bool>::If<T::RemovePointer, Self>;
    type AddPointer = Collapse<T, T::AddPointer, *const T>;
    type RemoveExtent = <<T::Kind as Kind>::Array as Bool>::If<Const<T::RemoveExtent>, Collapse<T, T, Self>>;
}

impl<T: ?Sized + Meta> Meta for Volatile<T> {
    type Kind = T::Kind;
    type BareId = T::BareId;
    type IsConst = T::IsConst;
    type IsVolatile = <Unqualifiable<T> as Bool>::Elif<T::IsVolatile, True>;
    type TriviallyCopyable = T::TriviallyCopyable;
    type Trivial = T::Trivial;
    type StandardLayout = T::StandardLayout;

    type RemoveConst = Collapse<T, T::RemoveConst, Volatile<T::RemoveConst>>;
    type RemoveVolatile = T::RemoveVolatile;
    type AddConst = Collapse<T, T, <T::IsConst as Bool>::If<Self, Const<Self>>>;
    type AddVolatile = Collapse<T, T, Self>;
    type RemoveReference = Collapse<T, T::RemoveReference, Self>;
    type AddLvalueReference = Collapse<T, T::AddLvalueReference, LRef<Self>>;
    type AddRvalueReference = Collapse<T, T::AddRvalueReference, RRef<Self>>;
    type RemovePointer = <Or<<T::Kind as Kind>::Pointer, Unqualifiable<T>> as Bool>::If<T::RemovePointer, Self>;
    type AddPointer = Collapse<T, T::AddPointer, *mut Self>;
    type RemoveExtent = <<T::Kind as Kind>::Array as Bool>::If<Volatile<T::RemoveExtent>, Collapse<T, T, Self>>;
}

//! # Layer 1: Type Descriptions
//!
//! [`Meta`] is the one trait every inspectable type implements. It carries:
//!
//! - the primary category ([`Kind`]) of the cv-stripped type
//! - the bare identity used by [`IsSame`](crate::IsSame)
//! - const/volatile and layout facts
//! - the result of every transformation (remove/add const, reference, ...)
//!
//! Qualifiers and reference categories have no Rust spelling, so they are
//! modelled by marker types: [`Const<T>`], [`Volatile<T>`], [`LRef<T>`],
//! [`RRef<T>`], [`MemberPtr<T, C>`] and [`NullPtr`].
//!
//! ```text
//! i32              -> SignedIntegralKind, unqualified
//! Const<i32>       -> SignedIntegralKind, const
//! *const i32       -> PointerKind, pointee Const<i32>
//! &'a mut [u8; 4]  -> LvalueReferenceKind, referent [u8; 4]
//! ```

pub mod kind;

mod array;
mod function;
mod library;
mod pointer;
mod qualifier;
mod reference;
mod scalar;

pub use array::{ArrayLength, Len};
pub use kind::*;
pub use pointer::{MemberPtr, NullPtr};
pub use qualifier::{Const, Volatile};
pub use reference::{LRef, RRef};

use crate::identity::Qual;
use crate::primitives::bool::Bool;

/// Compile-time description of a type.
///
/// Implemented for primitives, `()`, pointers, references, arrays, slices,
/// function pointers, the qualifier markers and library containers; user
/// types get it from `#[derive(Meta)]`.
pub trait Meta {
    /// Primary category of the cv-stripped type.
    type Kind: Kind;
    /// Identity of the cv-stripped type.
    type BareId;
    type IsConst: Bool;
    type IsVolatile: Bool;
    /// `Copy` (copying is a bitwise copy).
    type TriviallyCopyable: Bool;
    /// Trivially copyable and trivially default-constructible.
    type Trivial: Bool;
    /// Declared, field-order layout throughout.
    type StandardLayout: Bool;

    type RemoveConst: ?Sized;
    type RemoveVolatile: ?Sized;
    type AddConst: ?Sized;
    type AddVolatile: ?Sized;
    type RemoveReference: ?Sized;
    type AddLvalueReference: ?Sized;
    type AddRvalueReference: ?Sized;
    type RemovePointer: ?Sized;
    type AddPointer: ?Sized;
    /// Element type for arrays, the type itself otherwise.
    type RemoveExtent: ?Sized;
}

/// Full identity: qualifiers plus bare identity.
pub type FullId<T> = Qual<<T as Meta>::IsConst, <T as Meta>::IsVolatile, <T as Meta>::BareId>;

/// Qualifier rules shared by every unqualified object type.
#[doc(hidden)]
#[macro_export]
macro_rules! __meta_unqualified {
    () => {
        type IsConst = $crate::False;
        type IsVolatile = $crate::False;
        type RemoveConst = Self;
        type RemoveVolatile = Self;
        type AddConst = $crate::Const<Self>;
        type AddVolatile = $crate::Volatile<Self>;
    };
}

/// Transformation rules for a plain (non-reference, non-pointer, non-array) type.
#[doc(hidden)]
#[macro_export]
macro_rules! __meta_leaf_rules {
    () => {
        $crate::__meta_unqualified!();
        type RemoveReference = Self;
        type AddLvalueReference = $crate::LRef<Self>;
        type AddRvalueReference = $crate::RRef<Self>;
        type RemovePointer = Self;
        type AddPointer = *mut Self;
        type RemoveExtent = Self;
    };
}

//! Primary categories.
//!
//! Each described type names exactly one kind tag; the category predicates
//! read the tag's facts. The table below is the whole classification.

use crate::primitives::bool::{Bool, False, True};

/// Facts attached to a primary category.
pub trait Kind: 'static {
    type Void: Bool;
    type NullPointer: Bool;
    type Integral: Bool;
    type FloatingPoint: Bool;
    /// Arithmetic and below zero is representable.
    type Signed: Bool;
    type Array: Bool;
    type BoundedArray: Bool;
    type UnboundedArray: Bool;
    type Enum: Bool;
    type Union: Bool;
    type Class: Bool;
    type Function: Bool;
    type Pointer: Bool;
    type LvalueReference: Bool;
    type RvalueReference: Bool;
    type Reference: Bool;
    type MemberPointer: Bool;
    type MemberFunctionPointer: Bool;
}

type Y = True;
type N = False;

/// Truth table for the kind tags.
/// Each row: `Tag => [Void, NullPointer, Integral, FloatingPoint, Signed, Array,
/// BoundedArray, UnboundedArray, Enum, Union, Class, Function, Pointer,
/// LvalueReference, RvalueReference, Reference]`
macro_rules! kind_table {
    ($($(#[$doc:meta])* $tag:ident => [$($fact:ident),* $(,)?]),* $(,)?) => {
        $(
            kind_table!(@impl $(#[$doc])* $tag, [$($fact),*]);
        )*
    };
    (@impl $(#[$doc:meta])* $tag:ident, [
        $void:ident, $null:ident, $int:ident, $float:ident, $signed:ident, $array:ident,
        $bounded:ident, $unbounded:ident, $enum_:ident, $union_:ident, $class:ident, $func:ident,
        $ptr:ident, $lref:ident, $rref:ident, $ref_:ident
    ]) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $tag;

        impl Kind for $tag {
            type Void = $void;
            type NullPointer = $null;
            type Integral = $int;
            type FloatingPoint = $float;
            type Signed = $signed;
            type Array = $array;
            type BoundedArray = $bounded;
            type UnboundedArray = $unbounded;
            type Enum = $enum_;
            type Union = $union_;
            type Class = $class;
            type Function = $func;
            type Pointer = $ptr;
            type LvalueReference = $lref;
            type RvalueReference = $rref;
            type Reference = $ref_;
            type MemberPointer = False;
            type MemberFunctionPointer = False;
        }
    };
}

kind_table! {
    //                          Vd Nl In Fp Sg Ar Ba Ua En Un Cl Fn Pt Lr Rr Rf
    /// `()`
    VoidKind                => [ Y, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N ],
    /// [`NullPtr`](crate::NullPtr)
    NullPointerKind         => [ N, Y, N, N, N, N, N, N, N, N, N, N, N, N, N, N ],
    /// `i8` .. `i128`, `isize`
    SignedIntegralKind      => [ N, N, Y, N, Y, N, N, N, N, N, N, N, N, N, N, N ],
    /// `u8` .. `u128`, `usize`, `bool`, `char`
    UnsignedIntegralKind    => [ N, N, Y, N, N, N, N, N, N, N, N, N, N, N, N, N ],
    /// `f32`, `f64`
    FloatingPointKind       => [ N, N, N, Y, Y, N, N, N, N, N, N, N, N, N, N, N ],
    /// `[T; N]`
    BoundedArrayKind        => [ N, N, N, N, N, Y, Y, N, N, N, N, N, N, N, N, N ],
    /// `[T]`
    UnboundedArrayKind      => [ N, N, N, N, N, Y, N, Y, N, N, N, N, N, N, N, N ],
    /// Fieldless enums
    EnumKind                => [ N, N, N, N, N, N, N, N, Y, N, N, N, N, N, N, N ],
    /// Unions
    UnionKind               => [ N, N, N, N, N, N, N, N, N, Y, N, N, N, N, N, N ],
    /// Structs and enums with payloads
    ClassKind               => [ N, N, N, N, N, N, N, N, N, N, Y, N, N, N, N, N ],
    /// `fn(..) -> R` in all its ABI/safety forms
    FunctionKind            => [ N, N, N, N, N, N, N, N, N, N, N, Y, N, N, N, N ],
    /// `*mut T`, `*const T`
    PointerKind             => [ N, N, N, N, N, N, N, N, N, N, N, N, Y, N, N, N ],
    /// `&T`, `&mut T`, [`LRef<T>`](crate::LRef)
    LvalueReferenceKind     => [ N, N, N, N, N, N, N, N, N, N, N, N, N, Y, N, Y ],
    /// [`RRef<T>`](crate::RRef)
    RvalueReferenceKind     => [ N, N, N, N, N, N, N, N, N, N, N, N, N, N, Y, Y ],
}

/// [`MemberPtr<T, C>`](crate::MemberPtr); `F` says whether `T` is a function.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberPointerKind<F>(core::marker::PhantomData<F>);

impl<F: Bool> Kind for MemberPointerKind<F> {
    type Void = False;
    type NullPointer = False;
    type Integral = False;
    type FloatingPoint = False;
    type Signed = False;
    type Array = False;
    type BoundedArray = False;
    type UnboundedArray = False;
    type Enum = False;
    type Union = False;
    type Class = False;
    type Function = False;
    type Pointer = False;
    type LvalueReference = False;
    type RvalueReference = False;
    type Reference = False;
    type MemberPointer = True;
    type MemberFunctionPointer = F;
}

//! # Layer 2: Predicates
//!
//! Every predicate has two spellings:
//!
//! - a type-level fact, `IsPointer<T>`, usable in bounds and in
//!   [`EnableIf`](crate::EnableIf) / [`Conditional`](crate::Conditional)
//! - a `const fn`, `is_pointer::<T>()`, usable anywhere a `bool` is
//!
//! Category predicates are total: every described type answers every
//! predicate, and for every unqualified type exactly one primary category
//! holds. Qualifiers are looked through, except by [`IsNullPointer`], which
//! matches the canonical type only.

use crate::identity::IdEq;
use crate::meta::kind::Kind;
use crate::meta::{FullId, Meta};
use crate::primitives::bool::{And, Not, Or, value};

macro_rules! predicate {
    ($($(#[$doc:meta])* $Name:ident<$T:ident> = $fact:ty;)*) => {
        $(
            paste::paste! {
                $(#[$doc])*
                pub type $Name<$T> = $fact;

                #[doc = concat!("`const` form of [`", stringify!($Name), "`].")]
                #[inline(always)]
                pub const fn [<$Name:snake>]<$T: ?Sized + Meta>() -> bool {
                    value::<$Name<$T>>()
                }
            }
        )*
    };
}

// =============================================================================
// Primary categories
// =============================================================================

predicate! {
    /// `()`
    IsVoid<T> = <<T as Meta>::Kind as Kind>::Void;
    /// [`NullPtr`](crate::NullPtr) itself; qualified forms do not match.
    IsNullPointer<T> = And<
        <<T as Meta>::Kind as Kind>::NullPointer,
        Not<Or<<T as Meta>::IsConst, <T as Meta>::IsVolatile>>,
    >;
    /// Integers, `bool` and `char`.
    IsIntegral<T> = <<T as Meta>::Kind as Kind>::Integral;
    IsFloatingPoint<T> = <<T as Meta>::Kind as Kind>::FloatingPoint;
    /// `[T; N]` or `[T]`
    IsArray<T> = <<T as Meta>::Kind as Kind>::Array;
    IsEnum<T> = <<T as Meta>::Kind as Kind>::Enum;
    IsUnion<T> = <<T as Meta>::Kind as Kind>::Union;
    /// Structs and enums with payloads.
    IsClass<T> = <<T as Meta>::Kind as Kind>::Class;
    IsFunction<T> = <<T as Meta>::Kind as Kind>::Function;
    /// Object pointers and function pointers; not member pointers.
    IsPointer<T> = <<T as Meta>::Kind as Kind>::Pointer;
    IsLvalueReference<T> = <<T as Meta>::Kind as Kind>::LvalueReference;
    IsRvalueReference<T> = <<T as Meta>::Kind as Kind>::RvalueReference;
    /// Member object and member function pointers.
    IsMemberPointer<T> = <<T as Meta>::Kind as Kind>::MemberPointer;
}

// =============================================================================
// Families and qualifiers
// =============================================================================

predicate! {
    IsReference<T> = <<T as Meta>::Kind as Kind>::Reference;
    IsBoundedArray<T> = <<T as Meta>::Kind as Kind>::BoundedArray;
    IsUnboundedArray<T> = <<T as Meta>::Kind as Kind>::UnboundedArray;
    IsConst<T> = <T as Meta>::IsConst;
    IsVolatile<T> = <T as Meta>::IsVolatile;
    /// Arithmetic with representable negatives: signed integers and floats.
    IsSigned<T> = <<T as Meta>::Kind as Kind>::Signed;
    /// Integral and not signed; includes `bool` and `char`.
    IsUnsigned<T> = And<IsIntegral<T>, Not<IsSigned<T>>>;
}

// =============================================================================
// Composite categories
// =============================================================================

predicate! {
    IsArithmetic<T> = Or<IsIntegral<T>, IsFloatingPoint<T>>;
    /// Arithmetic, void or the null-pointer type.
    IsFundamental<T> = Or<IsArithmetic<T>, Or<IsVoid<T>, IsNullPointer<T>>>;
    /// Member pointer whose pointee is a function (cv-qualification ignored).
    IsMemberFunctionPointer<T> = <<T as Meta>::Kind as Kind>::MemberFunctionPointer;
    /// Member pointer whose pointee is not a function.
    IsMemberObjectPointer<T> = And<IsMemberPointer<T>, Not<IsMemberFunctionPointer<T>>>;
    /// Arithmetic, enums, pointers, member pointers and the null-pointer type.
    IsScalar<T> = Or<
        Or<IsArithmetic<T>, IsEnum<T>>,
        Or<Or<IsPointer<T>, IsMemberPointer<T>>, IsNullPointer<T>>,
    >;
    IsCompound<T> = Not<IsFundamental<T>>;
    /// Scalars, arrays, unions and classes: anything but functions,
    /// references and void.
    IsObject<T> = Or<Or<IsScalar<T>, IsArray<T>>, Or<IsUnion<T>, IsClass<T>>>;
}

// =============================================================================
// Layout
// =============================================================================

predicate! {
    IsTriviallyCopyable<T> = <T as Meta>::TriviallyCopyable;
    IsTrivial<T> = <T as Meta>::Trivial;
    IsStandardLayout<T> = <T as Meta>::StandardLayout;
    /// Trivial and standard-layout.
    IsPod<T> = And<IsTrivial<T>, IsStandardLayout<T>>;
}

// =============================================================================
// Sameness
// =============================================================================

/// `T` and `U` are the same type, qualifiers included.
pub type IsSame<T, U> = <FullId<T> as IdEq<FullId<U>>>::Out;

/// `const` form of [`IsSame`].
#[inline(always)]
pub const fn is_same<T: ?Sized + Meta, U: ?Sized + Meta>() -> bool
where
    FullId<T>: IdEq<FullId<U>>,
{
    value::<IsSame<T, U>>()
}

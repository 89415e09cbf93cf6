#![cfg_attr(not(feature = "std"), no_std)]
#![recursion_limit = "256"]

// Feature flags handled:
// - std: default, enables std library (describes std collections)
// - alloc: enables alloc containers in no_std

//! # tola-traits
//!
//! **Compile-time type facts for Rust.**
//!
//! Ask the type checker questions about types (is this a pointer? is it
//! const? are these two the same?), transform types (strip a reference, add
//! a pointer), and use the answers to gate and choose between
//! implementations. Everything resolves during type checking; nothing runs.
//!
//! ## Architecture
//!
//! ### 1. Description
//! Every inspectable type implements [`Meta`]: a primary category
//! ([`Kind`]), qualifier and layout facts, an identity, and the result of
//! every transformation. Qualifiers and reference categories Rust cannot
//! spell are marker types: [`Const`], [`Volatile`], [`LRef`], [`RRef`],
//! [`MemberPtr`], [`NullPtr`].
//!
//! ### 2. Identity
//! Identities are **64-bit FNV-1a hash streams** of a name or shape, plus
//! argument identities:
//!
//! ```text
//! *const Volatile<i32>
//!   -> Qual<False, False, Id<H("*"), Arg<Qual<True, True, Id<H("i32")>>, Nil>>>
//! ```
//!
//! Comparison walks qualifiers, then the tag stream nibble by nibble, then
//! arguments, stopping at the first difference.
//!
//! ### 3. Layers
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - IntegralConstant, True/False, Nibble (X0-XF), Tag16            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Description                                             |
//! |  - Meta, Kind, identities, qualifier/reference markers            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Predicates and Transformations                          |
//! |  - IsPointer<T> / is_pointer::<T>(), RemoveCvRef<T>, AddPointer<T> |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Gates, Selectors, Overload Sets                         |
//! |  - EnableIf, Conditional, overloads![..] + dispatch               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_traits::*;
//!
//! #[derive(Meta, Clone, Copy, Default)]
//! #[repr(C)]
//! struct Point {
//!     x: f32,
//!     y: f32,
//! }
//!
//! const _: () = assert!(is_class::<Point>() && is_pod::<Point>());
//! const _: () = assert!(is_same::<RemoveCvRef<&'static Const<Point>>, Point>());
//! require!(u8: Integral & Unsigned, *const u8: Pointer & !Const);
//!
//! fn bits<T: Meta>(v: T) -> u32
//! where
//!     T: Into<u32>,
//!     EnableIf<fact!(T: Integral & Unsigned)>: Enabled,
//! {
//!     v.into().count_ones()
//! }
//!
//! assert_eq!(bits(0b1011u8), 3);
//! ```
//!
//! Deeply nested comparisons may need a larger `#![recursion_limit]` in the
//! calling crate.

// Allow `::tola_traits` to work inside the crate itself
extern crate self as tola_traits;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Description
// =============================================================================
pub mod identity;
pub mod meta;

#[doc(hidden)]
pub mod detect;

// =============================================================================
// Layer 2: Predicates and Transformations
// =============================================================================
pub mod facts;
pub mod transform;

// =============================================================================
// Layer 3: Gates, Selectors, Overload Sets
// =============================================================================
pub mod gate;
pub mod overload;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use facts::*;
pub use gate::{Conditional, ConditionalT, EnableIf, EnableIfT, Enabled, Selected};
pub use meta::kind::{
    BoundedArrayKind, ClassKind, EnumKind, FloatingPointKind, FunctionKind, Kind,
    LvalueReferenceKind, MemberPointerKind, NullPointerKind, PointerKind,
    RvalueReferenceKind, SignedIntegralKind, UnboundedArrayKind, UnionKind,
    UnsignedIntegralKind, VoidKind,
};
pub use meta::{Const, FullId, LRef, MemberPtr, Meta, NullPtr, RRef, Volatile};
pub use primitives::bool::{And, Bool, False, If, Not, Or, True, value};
pub use primitives::constant::*;
pub use transform::*;

// Re-export proc-macros
pub use macros::{Meta, fact, holds, require};

/// Common items for inspecting types.
pub mod prelude {
    pub use crate::facts::*;
    pub use crate::gate::{Conditional, ConditionalT, EnableIf, EnableIfT, Enabled, Selected};
    pub use crate::meta::{Const, LRef, MemberPtr, Meta, NullPtr, RRef, Volatile};
    pub use crate::overload::{Candidate, Invoke, dispatch};
    pub use crate::primitives::bool::{Bool, False, True, value};
    pub use crate::primitives::constant::{BoolConstant, IntegralConstant};
    pub use crate::transform::*;
    pub use macros::{Meta, fact, holds, require};
}

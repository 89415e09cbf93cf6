//! # Layer 2: Transformations
//!
//! Each transformation is an associated type of [`Meta`] (the primary form,
//! `<T as Meta>::RemoveConst`) with a shorthand alias of the same name
//! (`RemoveConst<T>`).
//!
//! ```
//! use tola_traits::*;
//!
//! assert!(is_same::<RemoveCvRef<&'static Const<Volatile<i32>>>, i32>());
//! assert!(is_same::<AddPointer<Const<u8>>, *const u8>());
//! assert!(is_same::<AddRvalueReference<&'static u8>, &'static u8>());
//! ```

use crate::meta::Meta;

/// Strip a top-level `const`.
pub type RemoveConst<T> = <T as Meta>::RemoveConst;

/// Strip a top-level `volatile`.
pub type RemoveVolatile<T> = <T as Meta>::RemoveVolatile;

/// Strip both top-level qualifiers.
pub type RemoveCv<T> = RemoveConst<RemoveVolatile<T>>;

/// Referent of a reference; other types unchanged.
pub type RemoveReference<T> = <T as Meta>::RemoveReference;

/// Strip a reference, then both qualifiers.
pub type RemoveCvRef<T> = RemoveCv<RemoveReference<T>>;

/// Pointee of a pointer (including a `const` pointer); other types unchanged.
pub type RemovePointer<T> = <T as Meta>::RemovePointer;

/// Element of an array; other types unchanged.
pub type RemoveExtent<T> = <T as Meta>::RemoveExtent;

/// Add `const` (no-op on references and functions).
pub type AddConst<T> = <T as Meta>::AddConst;

/// Add `volatile` (no-op on references and functions).
pub type AddVolatile<T> = <T as Meta>::AddVolatile;

/// Add both qualifiers.
pub type AddCv<T> = AddConst<AddVolatile<T>>;

/// Lvalue reference to `T`; collapses on references.
pub type AddLvalueReference<T> = <T as Meta>::AddLvalueReference;

/// Rvalue reference to `T`; an lvalue reference stays one.
pub type AddRvalueReference<T> = <T as Meta>::AddRvalueReference;

/// Pointer to `T`, or to the referent when `T` is a reference.
pub type AddPointer<T> = <T as Meta>::AddPointer;

//! Trait detection for concrete types.
//!
//! This module implements the "Inherent Const Fallback" pattern used by
//! `#[derive(Meta)]` to find out whether a type is `Copy` and `Default`.
//!
//! ## How it works
//!
//! For each trait we want to detect:
//! 1. Define a fallback trait with `const IS_T: bool = false`
//! 2. Implement fallback for `Detect<X>` for all X
//! 3. Implement an inherent const `IS_T = true` for `Detect<X>` where `X: T`
//!
//! When resolving `Detect::<Concrete>::IS_T`, the compiler:
//! - If `Concrete: T`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`.

use core::marker::PhantomData;

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for a trait.
macro_rules! impl_detect {
    ($($Trait:ident),*) => {
        $(
            paste::paste! {
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
                impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
                impl<T: $Trait> Detect<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
            }
        )*
    };
}

impl_detect!(Copy, Default);

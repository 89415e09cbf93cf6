//! # Layer 3: Overload resolution
//!
//! An overload set is an ordered chain of candidates. Each candidate states,
//! as a fact over the argument type, whether it is viable. Resolution walks
//! the chain and stops at the first viable candidate; later candidates are
//! never inspected. When no candidate is viable the chain runs into [`End`],
//! which has no resolution, and the call fails to compile.
//!
//! ## Example
//!
//! ```
//! use tola_traits::*;
//! use tola_traits::overload::{Candidate, Invoke, dispatch};
//!
//! struct Increment;
//! struct Double;
//!
//! impl<T: Meta> Candidate<T> for Increment { type When = IsIntegral<T>; }
//! impl<T: Meta> Candidate<T> for Double { type When = IsFloatingPoint<T>; }
//!
//! impl Invoke<i32> for Increment {
//!     type Output = i32;
//!     fn invoke(v: i32) -> i32 { v + 1 }
//! }
//! impl Invoke<f64> for Double {
//!     type Output = f64;
//!     fn invoke(v: f64) -> f64 { v * 2.0 }
//! }
//!
//! type Bump = overloads![Increment, Double];
//!
//! assert_eq!(dispatch::<Bump, _>(41i32), 42);
//! assert_eq!(dispatch::<Bump, _>(1.5f64), 3.0);
//! ```

use core::marker::PhantomData;

use crate::primitives::bool::{Bool, False, True};

/// Viability of a candidate for argument type `Args`.
pub trait Candidate<Args> {
    type When: Bool;
}

/// Body of a candidate.
pub trait Invoke<Args> {
    type Output;
    fn invoke(args: Args) -> Self::Output;
}

/// Candidate `Head`, then the rest of the set.
pub struct Chain<Head, Tail>(PhantomData<(Head, Tail)>);

/// End of an overload set. Reaching it means nothing was viable.
pub struct End;

/// Resolve a set to its first viable candidate.
pub trait Resolve<Args> {
    type Winner;
}

impl<H, Rest, A> Resolve<A> for Chain<H, Rest>
where
    H: Candidate<A>,
    <H as Candidate<A>>::When: Pick<H, Rest, A>,
{
    type Winner = <<H as Candidate<A>>::When as Pick<H, Rest, A>>::Winner;
}

/// Step of resolution, driven by the head candidate's viability.
pub trait Pick<Head, Rest, Args> {
    type Winner;
}

impl<H, Rest, A> Pick<H, Rest, A> for True {
    type Winner = H;
}

impl<H, Rest, A> Pick<H, Rest, A> for False
where
    Rest: Resolve<A>,
{
    type Winner = <Rest as Resolve<A>>::Winner;
}

/// Candidate chosen for `Args` from `Set`.
pub type Winner<Set, Args> = <Set as Resolve<Args>>::Winner;

/// Call the winning candidate of `Set` with `args`.
#[inline(always)]
pub fn dispatch<Set, Args>(args: Args) -> <Winner<Set, Args> as Invoke<Args>>::Output
where
    Set: Resolve<Args>,
    Winner<Set, Args>: Invoke<Args>,
{
    <Winner<Set, Args> as Invoke<Args>>::invoke(args)
}

/// Build an overload set type from candidates in priority order.
///
/// ```ignore
/// type Set = overloads![First, Second, Third];
/// ```
#[macro_export]
macro_rules! overloads {
    () => { $crate::overload::End };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::overload::Chain<$head, $crate::overloads![$($rest),*]>
    };
}

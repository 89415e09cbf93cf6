//! Tag streams: identity tags as type-level nibble sequences.
//!
//! A tag is a 64-bit FNV-1a hash laid out as sixteen const nibbles
//! ([`Tag16`]), low nibble first. Reading a tag yields its [`first`] nibble
//! and the [`rest`] of the stream; the rest of a [`Tag16`] is the same tag
//! rotated by one nibble, so a stream never ends and comparisons carry an
//! explicit [`Depth`] budget.
//!
//! ```text
//! Tag16<a, b, c, .., p>  --first-->  a
//!                        --rest--->  Tag16<b, c, .., p, a>
//! ```
//!
//! [`first`]: Tag::First
//! [`rest`]: Tag::Rest

use core::marker::PhantomData;

use super::bool::{Bool, False, True};
use super::nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};

/// Endless stream of nibbles.
pub trait Tag: 'static {
    type First: Nibble;
    type Rest: Tag;
}

/// Comparison budget, counted in nibbles.
pub trait Depth {}

pub struct Zero;

pub struct Succ<D>(PhantomData<D>);

impl Depth for Zero {}
impl<D: Depth> Depth for Succ<D> {}

macros::depth_aliases!(16);

/// Nibbles compared when two tags meet: one full rotation.
pub type TagDepth = D16;

/// `Self` and `Other` agree on their first `D` nibbles.
pub trait TagEq<Other: Tag, D> {
    type Out: Bool;
}

impl<A: Tag, B: Tag> TagEq<B, Zero> for A {
    type Out = True;
}

impl<A, B, D> TagEq<B, Succ<D>> for A
where
    A: Tag,
    B: Tag,
    A::First: NibbleEq<B::First>,
    <A::First as NibbleEq<B::First>>::Out: TagEqRest<A::Rest, B::Rest, D>,
{
    type Out = <<A::First as NibbleEq<B::First>>::Out as TagEqRest<A::Rest, B::Rest, D>>::Out;
}

/// Step past a matching nibble; a mismatch ends the comparison.
pub trait TagEqRest<A, B, D> {
    type Out: Bool;
}

impl<A, B, D> TagEqRest<A, B, D> for False {
    type Out = False;
}

impl<A, B, D> TagEqRest<A, B, D> for True
where
    A: Tag + TagEq<B, D>,
    B: Tag,
{
    type Out = <A as TagEq<B, D>>::Out;
}

/// Nibble type for the const value `N` (`0..=15`).
pub trait NibbleOf<const N: u8> {
    type Out: Nibble;
}

macro_rules! nibble_of {
    ($($nib:ident = $val:literal),* $(,)?) => {
        $(impl NibbleOf<$val> for () { type Out = $nib; })*
    };
}

nibble_of!(
    X0 = 0, X1 = 1, X2 = 2, X3 = 3, X4 = 4, X5 = 5, X6 = 6, X7 = 7,
    X8 = 8, X9 = 9, XA = 10, XB = 11, XC = 12, XD = 13, XE = 14, XF = 15,
);

/// A 64-bit tag as sixteen nibbles, `A` first.
pub struct Tag16<
    const A: u8, const B: u8, const C: u8, const D: u8,
    const E: u8, const F: u8, const G: u8, const H: u8,
    const I: u8, const J: u8, const K: u8, const L: u8,
    const M: u8, const N: u8, const O: u8, const P: u8,
>;

impl<
    const A: u8, const B: u8, const C: u8, const D: u8,
    const E: u8, const F: u8, const G: u8, const H: u8,
    const I: u8, const J: u8, const K: u8, const L: u8,
    const M: u8, const N: u8, const O: u8, const P: u8,
> Tag for Tag16<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P>
where
    (): NibbleOf<A> + NibbleOf<B> + NibbleOf<C> + NibbleOf<D>
      + NibbleOf<E> + NibbleOf<F> + NibbleOf<G> + NibbleOf<H>
      + NibbleOf<I> + NibbleOf<J> + NibbleOf<K> + NibbleOf<L>
      + NibbleOf<M> + NibbleOf<N> + NibbleOf<O> + NibbleOf<P>,
{
    type First = <() as NibbleOf<A>>::Out;
    type Rest = Tag16<B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, A>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::bool::value;

    type T1 = Tag16<1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0>;
    type T2 = Tag16<1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 9>;

    #[test]
    fn test_rest_rotates() {
        assert_eq!(<<T1 as Tag>::First as Nibble>::VALUE, 1);
        assert_eq!(<<<T1 as Tag>::Rest as Tag>::First as Nibble>::VALUE, 2);
    }

    #[test]
    fn test_depth_bounds_comparison() {
        assert!(value::<<T1 as TagEq<T1, TagDepth>>::Out>());
        // The streams differ only in the last nibble.
        assert!(!value::<<T1 as TagEq<T2, TagDepth>>::Out>());
        assert!(value::<<T1 as TagEq<T2, D15>>::Out>());
    }
}

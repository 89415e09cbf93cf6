//! Bounded arrays `[T; N]` and unbounded arrays `[T]`.
//!
//! Arrays of any length are described. Their identities carry the length as
//! [`Len<N>`]; comparing two lengths goes through [`ArrayLength`], implemented
//! for `0..=64` and the powers of two up to `4096`, so only `IsSame` between
//! arrays is limited to those lengths.

use super::kind::{BoundedArrayKind, UnboundedArrayKind};
use super::{FullId, Meta};
use core::marker::PhantomData;

use crate::identity::{Arg, Id, IdEq, Nil};
use crate::primitives::const_utils::word_nibble;
use crate::primitives::stream::Tag16;

/// Identity of an array length.
///
/// ```
/// #![recursion_limit = "256"]
/// use tola_traits::*;
///
/// assert!(is_same::<[u8; 64], [u8; 64]>());
/// assert!(!is_same::<[u8; 1024], [u8; 2048]>());
/// ```
///
/// Lengths outside the table cannot be compared:
///
/// ```compile_fail
/// #![recursion_limit = "256"]
/// use tola_traits::*;
///
/// let _ = is_same::<[u8; 100], [u8; 100]>();
/// ```
pub trait ArrayLength<const N: usize> {
    type Id;
}

/// Length `N` inside an array identity.
pub struct Len<const N: usize>(PhantomData<[(); N]>);

impl<const A: usize, const B: usize> IdEq<Len<B>> for Len<A>
where
    (): ArrayLength<A> + ArrayLength<B>,
    <() as ArrayLength<A>>::Id: IdEq<<() as ArrayLength<B>>::Id>,
{
    type Out = <<() as ArrayLength<A>>::Id as IdEq<<() as ArrayLength<B>>::Id>>::Out;
}

macro_rules! array_lengths {
    ($($n:literal)*) => {
        $(
            impl ArrayLength<$n> for () {
                type Id = Id<Tag16<
                    { word_nibble($n, 0) }, { word_nibble($n, 1) },
                    { word_nibble($n, 2) }, { word_nibble($n, 3) },
                    { word_nibble($n, 4) }, { word_nibble($n, 5) },
                    { word_nibble($n, 6) }, { word_nibble($n, 7) },
                    { word_nibble($n, 8) }, { word_nibble($n, 9) },
                    { word_nibble($n, 10) }, { word_nibble($n, 11) },
                    { word_nibble($n, 12) }, { word_nibble($n, 13) },
                    { word_nibble($n, 14) }, { word_nibble($n, 15) },
                >>;
            }
        )*
    };
}

array_lengths! {
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15
    16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
    32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
    48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
    64 128 256 512 1024 2048 4096
}

type ArrayTag = macros::tag_stream!("[T; N]");
type SliceTag = macros::tag_stream!("[T]");

impl<T: Meta, const N: usize> Meta for [T; N] {
    type Kind = BoundedArrayKind;
    type BareId = Id<ArrayTag, Arg<FullId<T>, Arg<Len<N>, Nil>>>;
    type TriviallyCopyable = T::TriviallyCopyable;
    type Trivial = T::Trivial;
    type StandardLayout = T::StandardLayout;
    crate::__meta_unqualified!();
    type RemoveReference = Self;
    type AddLvalueReference = super::LRef<Self>;
    type AddRvalueReference = super::RRef<Self>;
    type RemovePointer = Self;
    type AddPointer = *mut Self;
    type RemoveExtent = T;
}

// Incomplete: no layout facts.
impl<T: Meta> Meta for [T] {
    type Kind = UnboundedArrayKind;
    type BareId = Id<SliceTag, Arg<FullId<T>, Nil>>;
    type TriviallyCopyable = crate::False;
    type Trivial = crate::False;
    type StandardLayout = crate::False;
    crate::__meta_unqualified!();
    type RemoveReference = Self;
    type AddLvalueReference = super::LRef<Self>;
    type AddRvalueReference = super::RRef<Self>;
    type RemovePointer = Self;
    type AddPointer = *mut Self;
    type RemoveExtent = T;
}

// `str` is an unbounded array of UTF-8 bytes.
impl Meta for str {
    type Kind = UnboundedArrayKind;
    type BareId = Id<macros::tag_stream!("str")>;
    type TriviallyCopyable = crate::False;
    type Trivial = crate::False;
    type StandardLayout = crate::False;
    crate::__meta_unqualified!();
    type RemoveReference = Self;
    type AddLvalueReference = super::LRef<Self>;
    type AddRvalueReference = super::RRef<Self>;
    type RemovePointer = Self;
    type AddPointer = *mut Self;
    type RemoveExtent = u8;
}

//! Type-level nibbles (4-bit values X0-XF).
//!
//! Identity tags are streams of nibbles; comparing two tags walks the
//! streams pairwise through [`NibbleEq`].

use super::bool::{False, True};

macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0); $mac!(X1); $mac!(X2); $mac!(X3);
        $mac!(X4); $mac!(X5); $mac!(X6); $mac!(X7);
        $mac!(X8); $mac!(X9); $mac!(XA); $mac!(XB);
        $mac!(XC); $mac!(XD); $mac!(XE); $mac!(XF);
    };
}

/// Emit `$mac!(A, B)` and `$mac!(B, A)` for every pair of distinct nibbles.
macro_rules! for_distinct_pairs {
    ($mac:ident) => {
        for_distinct_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
            $mac!($tail, $head);
        )*
        for_distinct_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;
}

macro_rules! define_nibble {
    ($n:ident) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $n;
    };
}
for_each_nibble!(define_nibble);

macro_rules! nibble_values {
    ($($n:ident = $v:literal),*) => { $(impl Nibble for $n { const VALUE: u8 = $v; })* };
}
nibble_values!(
    X0 = 0, X1 = 1, X2 = 2, X3 = 3, X4 = 4, X5 = 5, X6 = 6, X7 = 7,
    X8 = 8, X9 = 9, XA = 10, XB = 11, XC = 12, XD = 13, XE = 14, XF = 15
);

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: super::bool::Bool;
}

macro_rules! impl_eq_self {
    ($n:ident) => { impl NibbleEq<$n> for $n { type Out = True; } };
}
for_each_nibble!(impl_eq_self);

macro_rules! impl_neq {
    ($a:ident, $b:ident) => { impl NibbleEq<$b> for $a { type Out = False; } };
}
for_distinct_pairs!(impl_neq);

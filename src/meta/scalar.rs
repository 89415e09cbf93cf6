//! Fundamental types: integers, `bool`, `char`, floats and `()`.

use super::kind::{FloatingPointKind, SignedIntegralKind, UnsignedIntegralKind, VoidKind};
use super::Meta;
use crate::identity::Id;
use crate::primitives::bool::{False, True};

macro_rules! describe_scalar {
    ($($ty:ty => $name:tt, $kind:ident;)*) => {
        $(
            impl Meta for $ty {
                type Kind = $kind;
                type BareId = Id<macros::tag_stream!($name)>;
                type TriviallyCopyable = True;
                type Trivial = True;
                type StandardLayout = True;
                crate::__meta_leaf_rules!();
            }
        )*
    };
}

describe_scalar! {
    i8 => "i8", SignedIntegralKind;
    i16 => "i16", SignedIntegralKind;
    i32 => "i32", SignedIntegralKind;
    i64 => "i64", SignedIntegralKind;
    i128 => "i128", SignedIntegralKind;
    isize => "isize", SignedIntegralKind;
    u8 => "u8", UnsignedIntegralKind;
    u16 => "u16", UnsignedIntegralKind;
    u32 => "u32", UnsignedIntegralKind;
    u64 => "u64", UnsignedIntegralKind;
    u128 => "u128", UnsignedIntegralKind;
    usize => "usize", UnsignedIntegralKind;
    bool => "bool", UnsignedIntegralKind;
    char => "char", UnsignedIntegralKind;
    f32 => "f32", FloatingPointKind;
    f64 => "f64", FloatingPointKind;
}

// Void is incomplete: no layout facts.
impl Meta for () {
    type Kind = VoidKind;
    type BareId = Id<macros::tag_stream!("()")>;
    type TriviallyCopyable = False;
    type Trivial = False;
    type StandardLayout = False;
    crate::__meta_leaf_rules!();
}

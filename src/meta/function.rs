//! Function types: `fn`, `unsafe fn`, `extern "C" fn` and
//! `unsafe extern "C" fn` with up to six parameters.
//!
//! Functions cannot be qualified; adding `const` or `volatile` leaves them
//! unchanged. Their identity lists the return type first, then each
//! parameter.

use super::kind::FunctionKind;
use super::reference::{LRef, RRef};
use super::{FullId, Meta};
use crate::identity::{Arg, Id, Nil};
use crate::primitives::bool::False;

macro_rules! id_list {
    () => { Nil };
    ($head:ident $($rest:ident)*) => { Arg<FullId<$head>, id_list!($($rest)*)> };
}

macro_rules! describe_fn {
    ($tag:tt [$($qual:tt)*] $($A:ident)*) => {
        impl<R: Meta, $($A: Meta),*> Meta for $($qual)* fn($($A),*) -> R {
            type Kind = FunctionKind;
            type BareId = Id<macros::tag_stream!($tag), Arg<FullId<R>, id_list!($($A)*)>>;
            type IsConst = False;
            type IsVolatile = False;
            type TriviallyCopyable = False;
            type Trivial = False;
            type StandardLayout = False;
            type RemoveConst = Self;
            type RemoveVolatile = Self;
            type AddConst = Self;
            type AddVolatile = Self;
            type RemoveReference = Self;
            type AddLvalueReference = LRef<Self>;
            type AddRvalueReference = RRef<Self>;
            type RemovePointer = Self;
            type AddPointer = *mut Self;
            type RemoveExtent = Self;
        }
    };
}

macro_rules! describe_fn_arities {
    ($tag:tt [$($qual:tt)*]) => {
        describe_fn!($tag [$($qual)*]);
        describe_fn!($tag [$($qual)*] A1);
        describe_fn!($tag [$($qual)*] A1 A2);
        describe_fn!($tag [$($qual)*] A1 A2 A3);
        describe_fn!($tag [$($qual)*] A1 A2 A3 A4);
        describe_fn!($tag [$($qual)*] A1 A2 A3 A4 A5);
        describe_fn!($tag [$($qual)*] A1 A2 A3 A4 A5 A6);
    };
}

describe_fn_arities!("fn" []);
describe_fn_arities!("unsafe fn" [unsafe]);
describe_fn_arities!("extern \"C\" fn" [extern "C"]);
describe_fn_arities!("unsafe extern \"C\" fn" [unsafe extern "C"]);

//! # Layer 0: Primitives
//!
//! Basic building blocks for type facts:
//! - `constant.rs`: Integral constant wrappers (`BoolConstant`, `I32Constant`, ...).
//! - `bool.rs`: Type-level boolean logic (True/False).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Tag streams and comparison depths.
//! - `const_utils.rs`: Const-fn hashing used to build tags.

pub mod bool;
pub mod const_utils;
pub mod constant;
pub mod nibble;
pub mod stream;

pub use bool::{And, Bool, False, If, Not, Or, SelectBool, True, value};
pub use constant::*;
pub use nibble::{Nibble, NibbleEq};
pub use stream::{Depth, Succ, Tag, Tag16, TagDepth, TagEq, Zero};

//! Macros used by the library itself.

pub mod library;
pub mod depth;
pub mod tag;

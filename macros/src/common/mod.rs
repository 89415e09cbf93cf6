// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - bool_expr: Boolean expressions over fact names
// - attrs: `#[repr]` and `#[meta]` parsing for the derive

mod attrs;
mod bool_expr;

pub use attrs::*;
pub use bool_expr::*;

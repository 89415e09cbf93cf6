//! Procedural macros for the tola-traits type-fact library
//!
//! ## Core Macros
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Meta)]` | struct/enum/union | Describe a user type |
//! | `fact!(T: Expr)` | type position | Combine facts into one fact |
//! | `holds!(T: Expr, ..)` | expression | Read combined facts as `bool` |
//! | `require!(T: Expr, ..)` | item | Compile-time assertion |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Meta)]
//! #[repr(C)]
//! struct Point { x: f32, y: f32 }
//!
//! require!(Point: Class & StandardLayout);
//!
//! fn widen<T: Meta>(v: T) -> T
//! where
//!     EnableIf<fact!(T: Integral | FloatingPoint)>: Enabled,
//! { v }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate comparison depth aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// depth_aliases!(16);  // D0 = Zero, D1 = Succ<D0>, ..., D16 = Succ<D15>
/// ```
#[proc_macro]
pub fn depth_aliases(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::depth::DepthInput);
    inner::depth::expand_depth_aliases(input).into()
}

/// Build the tag stream (`Tag16<..>`) for a name.
///
/// A string literal is hashed during expansion; any other expression is
/// hashed by const evaluation.
#[proc_macro]
pub fn tag_stream(input: TokenStream) -> TokenStream {
    inner::tag::expand_tag_stream(input.into()).into()
}

/// Describe the types of one library layer: `describe_library!(core)`,
/// `describe_library!(alloc)` or `describe_library!(std)`.
#[proc_macro]
pub fn describe_library(input: TokenStream) -> TokenStream {
    inner::library::expand_describe_library(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Describe a struct, enum or union.
///
/// - fieldless enums are enums, other enums and structs are classes
/// - `Copy`/`Default` are detected for concrete types; generic types opt in
///   with `#[meta(copy)]` / `#[meta(copy, default)]`
/// - standard layout requires `#[repr(C)]`, `#[repr(transparent)]` or an
///   integer repr on enums, and standard-layout fields
#[proc_macro_derive(Meta, attributes(meta))]
pub fn derive_meta(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_meta(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Combine fact names into one type-level fact.
///
/// ```ignore
/// type Numeric<T> = fact!(T: Integral | FloatingPoint);
/// type Plain<T> = fact!(T: !Const & !Volatile);
/// type Byte<T> = fact!(T: Same<u8>);
/// ```
#[proc_macro]
pub fn fact(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::FactInput);
    user::expand_fact(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Evaluate fact expressions to a `bool`, usable in `const` contexts.
///
/// ```ignore
/// const OK: bool = holds!(i32: Integral & Signed, f64: FloatingPoint);
/// ```
#[proc_macro]
pub fn holds(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::FactList);
    user::expand_holds(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Fail compilation unless every fact expression holds.
///
/// ```ignore
/// require!(u32: Unsigned, [u8; 4]: BoundedArray);
/// ```
#[proc_macro]
pub fn require(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::FactList);
    user::expand_require(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

//! Attribute parsing for `#[derive(Meta)]`.

use syn::{Attribute, Ident};

/// Layout-relevant parts of `#[repr(..)]`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repr {
    /// `C` or `transparent`
    pub declared: bool,
    /// `u8`, `i32`, ... (enums only)
    pub primitive: bool,
}

const PRIMITIVE_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

pub fn parse_repr(attrs: &[Attribute]) -> syn::Result<Repr> {
    let mut repr = Repr::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("C") || meta.path.is_ident("transparent") {
                repr.declared = true;
            } else if PRIMITIVE_REPRS.iter().any(|p| meta.path.is_ident(p)) {
                repr.primitive = true;
            } else if meta.input.peek(syn::token::Paren) {
                // align(N), packed(N)
                let content;
                syn::parenthesized!(content in meta.input);
                content.parse::<proc_macro2::TokenStream>()?;
            }
            Ok(())
        })?;
    }
    Ok(repr)
}

/// Options from `#[meta(copy, default)]`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaOptions {
    /// The type derives `Copy` (bounded on every type parameter).
    pub copy: bool,
    /// The type derives `Default` (bounded on every type parameter).
    pub default: bool,
}

pub fn parse_meta_options(attrs: &[Attribute]) -> syn::Result<MetaOptions> {
    let mut options = MetaOptions::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("meta")) {
        attr.parse_nested_meta(|meta| {
            let name: Option<&Ident> = meta.path.get_ident();
            match name.map(|i| i.to_string()).as_deref() {
                Some("copy") => options.copy = true,
                Some("default") => options.default = true,
                _ => return Err(meta.error("unsupported meta option; expected `copy` or `default`")),
            }
            Ok(())
        })?;
    }
    Ok(options)
}

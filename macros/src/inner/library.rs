//! Library type tables.
//!
//! Every entry becomes one `Meta` impl describing the type as a class. The
//! copy and default rules decide the layout facts: `Yes`/`No` are fixed,
//! `Params` holds exactly when it holds for every type parameter, mirroring
//! how `#[derive(Copy, Default)]` bounds each parameter.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::tag::literal_stream;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Yes,
    No,
    Params,
}

use Rule::*;

pub struct LibraryType {
    pub path: &'static str,
    /// `(name, ?Sized)`
    pub params: &'static [(&'static str, bool)],
    pub copy: Rule,
    pub default: Rule,
}

const fn ty(
    path: &'static str,
    params: &'static [(&'static str, bool)],
    copy: Rule,
    default: Rule,
) -> LibraryType {
    LibraryType { path, params, copy, default }
}

/// Core library types (always available).
pub const CORE_TYPES: &[LibraryType] = &[
    ty("core::option::Option", &[("T", false)], Params, Yes),
    ty("core::result::Result", &[("T", false), ("E", false)], Params, No),
    ty("core::marker::PhantomData", &[("T", true)], Yes, Yes),
    ty("core::mem::ManuallyDrop", &[("T", false)], Params, Params),
    ty("core::cell::Cell", &[("T", false)], No, Params),
    ty("core::cell::RefCell", &[("T", true)], No, No),
    ty("core::time::Duration", &[], Yes, Yes),
];

/// Alloc library types (requires "alloc" feature).
pub const ALLOC_TYPES: &[LibraryType] = &[
    ty("alloc::string::String", &[], No, No),
    ty("alloc::boxed::Box", &[("T", true)], No, No),
    ty("alloc::rc::Rc", &[("T", true)], No, No),
    ty("alloc::sync::Arc", &[("T", true)], No, No),
    ty("alloc::vec::Vec", &[("T", false)], No, No),
    ty("alloc::collections::VecDeque", &[("T", false)], No, No),
    ty("alloc::collections::LinkedList", &[("T", false)], No, No),
    ty("alloc::collections::BTreeMap", &[("K", false), ("V", false)], No, No),
    ty("alloc::collections::BTreeSet", &[("T", false)], No, No),
];

/// Standard library types (requires "std" feature).
pub const STD_TYPES: &[LibraryType] = &[
    ty("std::collections::HashMap", &[("K", false), ("V", false)], No, No),
    ty("std::collections::HashSet", &[("T", false)], No, No),
    ty("std::path::PathBuf", &[], No, No),
    ty("std::ffi::OsString", &[], No, No),
    ty("std::sync::Mutex", &[("T", true)], No, No),
];

fn fact_for(rule: Rule, params: &[syn::Ident], fact: &str) -> TokenStream {
    match rule {
        Yes => quote! { ::tola_traits::True },
        No => quote! { ::tola_traits::False },
        Params => {
            let fact = format_ident!("{}", fact);
            params.iter().rev().fold(quote! { ::tola_traits::True }, |acc, p| {
                quote! { ::tola_traits::And<<#p as ::tola_traits::Meta>::#fact, #acc> }
            })
        }
    }
}

fn describe(entry: &LibraryType) -> syn::Result<TokenStream> {
    let path: syn::Path = syn::parse_str(&format!("::{}", entry.path))?;
    let names: Vec<syn::Ident> = entry.params.iter().map(|(n, _)| format_ident!("{}", n)).collect();
    let bounds = entry.params.iter().zip(&names).map(|((_, unsized_), name)| {
        if *unsized_ {
            quote! { #name: ?Sized + ::tola_traits::Meta }
        } else {
            quote! { #name: ::tola_traits::Meta }
        }
    });
    let self_ty = if names.is_empty() {
        quote! { #path }
    } else {
        quote! { #path<#(#names),*> }
    };

    let tag = literal_stream(entry.path);
    let args = names.iter().rev().fold(quote! { ::tola_traits::identity::Nil }, |acc, p| {
        quote! { ::tola_traits::identity::Arg<::tola_traits::FullId<#p>, #acc> }
    });

    let copy = fact_for(entry.copy, &names, "TriviallyCopyable");
    let default = fact_for(entry.default, &names, "Trivial");

    Ok(quote! {
        impl<#(#bounds),*> ::tola_traits::Meta for #self_ty {
            type Kind = ::tola_traits::ClassKind;
            type BareId = ::tola_traits::identity::Id<#tag, #args>;
            type TriviallyCopyable = #copy;
            type Trivial = ::tola_traits::And<#copy, #default>;
            type StandardLayout = ::tola_traits::False;
            ::tola_traits::__meta_leaf_rules!();
        }
    })
}

/// `describe_library!(core | alloc | std)`
pub fn expand_describe_library(input: TokenStream) -> syn::Result<TokenStream> {
    let which: syn::Ident = syn::parse2(input)?;
    let table = match which.to_string().as_str() {
        "core" => CORE_TYPES,
        "alloc" => ALLOC_TYPES,
        "std" => STD_TYPES,
        _ => {
            return Err(syn::Error::new(which.span(), "expected `core`, `alloc` or `std`"));
        }
    };
    let impls = table.iter().map(describe).collect::<syn::Result<Vec<_>>>()?;
    Ok(quote! { #(#impls)* })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_expands() {
        for table in [CORE_TYPES, ALLOC_TYPES, STD_TYPES] {
            for entry in table {
                assert!(describe(entry).is_ok(), "{}", entry.path);
            }
        }
    }

    #[test]
    fn test_unknown_library_is_rejected() {
        assert!(expand_describe_library(quote! { nightly }).is_err());
    }
}

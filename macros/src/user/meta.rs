//! `#[derive(Meta)]`: describe a user type as an enum, union or class.
//!
//! The identity tag hashes the type's module path, name and source location,
//! so two types with the same name in different places stay distinct. Type
//! parameters join the identity as arguments and must themselves be `Meta`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, GenericParam, Lifetime, Type};

use crate::common::{parse_meta_options, parse_repr, MetaOptions, Repr};
use crate::inner::tag::const_stream;

fn and_all<'a>(types: impl DoubleEndedIterator<Item = &'a TokenStream2>, fact: TokenStream2) -> TokenStream2 {
    types.rev().fold(quote! { ::tola_traits::True }, |acc, ty| {
        quote! { ::tola_traits::And<<#ty as ::tola_traits::Meta>::#fact, #acc> }
    })
}

pub fn expand_derive_meta(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let repr: Repr = parse_repr(&input.attrs)?;
    let options: MetaOptions = parse_meta_options(&input.attrs)?;

    if let Some(param) = input.generics.const_params().next() {
        return Err(syn::Error::new_spanned(
            param,
            "#[derive(Meta)] does not support const generic parameters",
        ));
    }

    let ident = input.ident.clone();
    let name = ident.to_string();

    let (kind, fields, layout_declared): (TokenStream2, Vec<Type>, bool) = match &input.data {
        Data::Struct(data) => (
            quote! { ::tola_traits::ClassKind },
            data.fields.iter().map(|f| f.ty.clone()).collect(),
            repr.declared,
        ),
        Data::Union(data) => (
            quote! { ::tola_traits::UnionKind },
            data.fields.named.iter().map(|f| f.ty.clone()).collect(),
            repr.declared,
        ),
        Data::Enum(data) => {
            let fields: Vec<Type> = data
                .variants
                .iter()
                .flat_map(|v| v.fields.iter().map(|f| f.ty.clone()))
                .collect();
            let kind = if fields.is_empty() {
                quote! { ::tola_traits::EnumKind }
            } else {
                quote! { ::tola_traits::ClassKind }
            };
            (kind, fields, repr.declared || repr.primitive)
        }
    };

    let params: Vec<TokenStream2> = input
        .generics
        .type_params()
        .map(|p| {
            let ident = &p.ident;
            quote! { #ident }
        })
        .collect();
    let has_lifetimes = input.generics.lifetimes().next().is_some();

    // Field types only matter when the layout is declared. They are read
    // through projections, never bounded on the impl: a field may mention the
    // type itself (`*mut Self`), and a bound would make the impl depend on itself.
    let mut field_types: Vec<TokenStream2> = Vec::new();
    if layout_declared {
        for ty in &fields {
            let tokens = quote! { #ty };
            if !field_types.iter().any(|seen| seen.to_string() == tokens.to_string()) {
                field_types.push(tokens);
            }
        }
    }

    {
        let where_clause = input.generics.make_where_clause();
        for p in &params {
            where_clause.predicates.push(syn::parse_quote! { #p: ::tola_traits::Meta });
        }
    }

    let args = params.iter().rev().fold(quote! { ::tola_traits::identity::Nil }, |acc, p| {
        quote! { ::tola_traits::identity::Arg<::tola_traits::FullId<#p>, #acc> }
    });

    let (copy, trivial) = if params.is_empty() {
        // Concrete type: ask the compiler. Lifetimes do not affect Copy/Default.
        let probe_ty = if has_lifetimes {
            let lifetimes = input
                .generics
                .params
                .iter()
                .filter(|p| matches!(p, GenericParam::Lifetime(_)))
                .map(|_| Lifetime::new("'static", proc_macro2::Span::call_site()));
            quote! { #ident<#(#lifetimes),*> }
        } else {
            quote! { #ident }
        };
        (
            quote! {
                ::tola_traits::BoolConstant<{ ::tola_traits::detect::Detect::<#probe_ty>::IS_COPY }>
            },
            quote! {
                ::tola_traits::BoolConstant<{
                    ::tola_traits::detect::Detect::<#probe_ty>::IS_COPY
                        && ::tola_traits::detect::Detect::<#probe_ty>::IS_DEFAULT
                }>
            },
        )
    } else {
        let copy = if options.copy {
            and_all(params.iter(), quote! { TriviallyCopyable })
        } else {
            quote! { ::tola_traits::False }
        };
        let trivial = if options.copy && options.default {
            and_all(params.iter(), quote! { Trivial })
        } else {
            quote! { ::tola_traits::False }
        };
        (copy, trivial)
    };

    let layout = if layout_declared {
        and_all(field_types.iter(), quote! { StandardLayout })
    } else {
        quote! { ::tola_traits::False }
    };

    let tag = const_stream(&quote! {
        ::core::concat!(::core::module_path!(), "::", #name, "@", ::core::line!(), ":", ::core::column!())
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Declared facts on generic types are checked: with every parameter
    // `Copy` (and `Default`), the type itself must be.
    let checks = if params.is_empty() || !options.copy {
        quote! {}
    } else {
        let mut bounds = quote! { ::core::marker::Copy };
        let mut asserts = quote! { __assert_copy::<#ident #ty_generics>(); };
        if options.default {
            bounds = quote! { #bounds + ::core::default::Default };
            asserts = quote! { #asserts __assert_default::<#ident #ty_generics>(); };
        }
        let predicates: Vec<_> = where_clause.iter().flat_map(|w| w.predicates.iter()).collect();
        quote! {
            #[allow(dead_code)]
            fn __meta_declared_facts #impl_generics ()
            where
                #(#predicates,)*
                #(#params: #bounds,)*
            {
                fn __assert_copy<X: ::core::marker::Copy>() {}
                fn __assert_default<X: ::core::default::Default>() {}
                #asserts
            }
        }
    };

    Ok(quote! {
        const _: () = {
            #[allow(unused_imports)]
            use ::tola_traits::detect::{CopyFallback as _, DefaultFallback as _};

            type __MetaTag = #tag;

            #checks

            impl #impl_generics ::tola_traits::Meta for #ident #ty_generics #where_clause {
                type Kind = #kind;
                type BareId = ::tola_traits::identity::Id<__MetaTag, #args>;
                type TriviallyCopyable = #copy;
                type Trivial = #trivial;
                type StandardLayout = #layout;
                ::tola_traits::__meta_leaf_rules!();
            }
        };
    })
}

//! `fact!`, `holds!` and `require!`: boolean expressions over fact names.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

use crate::common::{bool_expr_to_fact, bool_expr_to_string, BoolExpr};

/// `Subject: Expr`
pub struct FactInput {
    pub subject: Type,
    pub expr: BoolExpr,
}

impl Parse for FactInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let subject: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(FactInput { subject, expr })
    }
}

/// `Subject: Expr, Subject: Expr, ...`
pub struct FactList {
    pub items: Punctuated<FactInput, Token![,]>,
}

impl Parse for FactList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(FactList { items: Punctuated::parse_terminated(input)? })
    }
}

pub fn expand_fact(input: FactInput) -> syn::Result<TokenStream2> {
    bool_expr_to_fact(&input.expr, &input.subject)
}

fn conjunction(list: &FactList) -> syn::Result<TokenStream2> {
    let facts = list
        .items
        .iter()
        .map(|item| bool_expr_to_fact(&item.expr, &item.subject))
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(quote! { (true #(&& ::tola_traits::value::<#facts>())*) })
}

pub fn expand_holds(list: FactList) -> syn::Result<TokenStream2> {
    conjunction(&list)
}

pub fn expand_require(list: FactList) -> syn::Result<TokenStream2> {
    let check = conjunction(&list)?;
    let described: Vec<String> = list
        .items
        .iter()
        .map(|item| {
            let subject = &item.subject;
            format!("{}: {}", quote!(#subject).to_string().replace(' ', ""), bool_expr_to_string(&item.expr))
        })
        .collect();
    let message = format!("required fact does not hold: {}", described.join(", "));
    Ok(quote! {
        const _: () = ::core::assert!(#check, #message);
    })
}

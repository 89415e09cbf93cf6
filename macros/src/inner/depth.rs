//! Comparison depth aliases.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    LitInt,
};

/// Largest depth to generate.
pub struct DepthInput {
    pub max: usize,
}

impl Parse for DepthInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        Ok(DepthInput { max: lit.base10_parse()? })
    }
}

/// `D0 = Zero`, `Dn = Succ<D(n-1)>`.
pub fn expand_depth_aliases(input: DepthInput) -> TokenStream {
    let aliases = (0..=input.max).map(|n| {
        let name = format_ident!("D{}", n);
        let doc = format!("Compare {n} nibbles.");
        if n == 0 {
            quote! {
                #[doc = #doc]
                pub type #name = Zero;
            }
        } else {
            let prev = format_ident!("D{}", n - 1);
            quote! {
                #[doc = #doc]
                pub type #name = Succ<#prev>;
            }
        }
    });
    quote! { #(#aliases)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_of_successors() {
        let out = expand_depth_aliases(DepthInput { max: 2 }).to_string().replace(' ', "");
        assert!(out.contains("pubtypeD0=Zero;"));
        assert!(out.contains("pubtypeD2=Succ<D1>;"));
    }
}

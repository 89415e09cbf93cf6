//! Tag streams.
//!
//! A tag is the FNV-1a 64-bit hash of a name spread over sixteen nibbles.
//! Literal names are hashed here; anything else (typically
//! `concat!(module_path!(), ...)`) is hashed by the const fn of the same
//! algorithm at the call site.

use proc_macro2::TokenStream;
use quote::quote;

pub fn fnv1a_64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// `Tag16<..>` for a literal name.
pub fn literal_stream(name: &str) -> TokenStream {
    let hash = fnv1a_64(name);
    let nibbles = (0..16).map(|i| ((hash >> (i * 4)) & 0xF) as u8);
    quote! {
        ::tola_traits::primitives::stream::Tag16<#(#nibbles),*>
    }
}

/// `Tag16<..>` whose nibbles are computed by const evaluation of `expr`.
pub fn const_stream(expr: &TokenStream) -> TokenStream {
    let nibbles = (0u8..16).map(|i| {
        quote! { { ::tola_traits::primitives::const_utils::hash_nibble(#expr, #i) } }
    });
    quote! {
        ::tola_traits::primitives::stream::Tag16<#(#nibbles),*>
    }
}

pub fn expand_tag_stream(input: TokenStream) -> TokenStream {
    match syn::parse2::<syn::LitStr>(input.clone()) {
        Ok(lit) => literal_stream(&lit.value()),
        Err(_) => const_stream(&input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_matches_reference() {
        assert_eq!(fnv1a_64(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a_64("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_literal_stream_has_sixteen_nibbles() {
        let tokens = literal_stream("i32").to_string();
        assert!(tokens.contains("Tag16"));
        assert_eq!(tokens.matches(',').count(), 15);
    }
}

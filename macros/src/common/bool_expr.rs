//! Boolean expressions over fact names: `Integral | FloatingPoint`, `Pointer & !Const`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    GenericArgument, PathArguments, Token, Type, TypePath,
};

/// Parsed fact expression.
#[derive(Clone, Debug)]
pub enum BoolExpr {
    /// `Integral`, `Same<u8>`
    Fact(TypePath),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    /// `|` binds loosest, then `&`, then prefix `!`.
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let first = parse_conjunction(input)?;
        let mut rest = Vec::new();
        while input.parse::<Option<Token![|]>>()?.is_some() {
            rest.push(parse_conjunction(input)?);
        }
        Ok(left_fold(first, rest, BoolExpr::Or))
    }
}

fn left_fold(
    first: BoolExpr,
    rest: Vec<BoolExpr>,
    op: fn(Box<BoolExpr>, Box<BoolExpr>) -> BoolExpr,
) -> BoolExpr {
    rest.into_iter().fold(first, |lhs, rhs| op(Box::new(lhs), Box::new(rhs)))
}

fn parse_conjunction(input: ParseStream) -> syn::Result<BoolExpr> {
    let first = parse_term(input)?;
    let mut rest = Vec::new();
    while input.parse::<Option<Token![&]>>()?.is_some() {
        rest.push(parse_term(input)?);
    }
    Ok(left_fold(first, rest, BoolExpr::And))
}

/// `!term`, `(expr)` or a fact name.
fn parse_term(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.parse::<Option<Token![!]>>()?.is_some() {
        return Ok(BoolExpr::Not(Box::new(parse_term(input)?)));
    }
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        return content.parse();
    }
    Ok(BoolExpr::Fact(input.parse()?))
}

/// Map one fact name onto its predicate alias.
///
/// `Integral` becomes `IsIntegral<Subject>`; extra generic arguments follow
/// the subject, so `Same<u8>` becomes `IsSame<Subject, u8>`.
fn fact_to_type(path: &TypePath, subject: &Type) -> syn::Result<TokenStream> {
    let Some(last) = path.path.segments.last() else {
        return Err(syn::Error::new_spanned(path, "expected a fact name"));
    };
    if path.qself.is_some() || path.path.segments.len() != 1 {
        return Err(syn::Error::new_spanned(path, "fact names are bare identifiers, e.g. `Integral`"));
    }
    let alias = format_ident!("Is{}", last.ident, span = last.ident.span());
    let extra: Punctuated<GenericArgument, Token![,]> = match &last.arguments {
        PathArguments::None => Punctuated::new(),
        PathArguments::AngleBracketed(args) => args.args.clone(),
        PathArguments::Parenthesized(args) => {
            return Err(syn::Error::new_spanned(args, "unexpected parenthesized arguments"));
        }
    };
    let extra = extra.iter();
    Ok(quote! { ::tola_traits::facts::#alias<#subject #(, #extra)*> })
}

/// The type-level fact `expr` denotes for `subject`.
pub fn bool_expr_to_fact(expr: &BoolExpr, subject: &Type) -> syn::Result<TokenStream> {
    let binary = |op: TokenStream, lhs: &BoolExpr, rhs: &BoolExpr| -> syn::Result<TokenStream> {
        let lhs = bool_expr_to_fact(lhs, subject)?;
        let rhs = bool_expr_to_fact(rhs, subject)?;
        Ok(quote! { ::tola_traits::#op<#lhs, #rhs> })
    };
    match expr {
        BoolExpr::Fact(path) => fact_to_type(path, subject),
        BoolExpr::And(lhs, rhs) => binary(quote!(And), lhs, rhs),
        BoolExpr::Or(lhs, rhs) => binary(quote!(Or), lhs, rhs),
        BoolExpr::Not(operand) => {
            let operand = bool_expr_to_fact(operand, subject)?;
            Ok(quote! { ::tola_traits::Not<#operand> })
        }
    }
}

/// Fully parenthesized rendering, used in `require!` messages.
pub fn bool_expr_to_string(expr: &BoolExpr) -> String {
    match expr {
        BoolExpr::Fact(path) => quote!(#path).to_string().replace(' ', ""),
        BoolExpr::And(lhs, rhs) => format!("({} & {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs)),
        BoolExpr::Or(lhs, rhs) => format!("({} | {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs)),
        BoolExpr::Not(operand) => format!("!{}", bool_expr_to_string(operand)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_and_binds_tighter() {
        let expr: BoolExpr = syn::parse_quote!(Void | Integral & !Const);
        assert_eq!(bool_expr_to_string(&expr), "(Void | (Integral & !Const))");
    }

    #[test]
    fn test_extra_arguments_follow_subject() {
        let expr: BoolExpr = syn::parse_quote!(Same<u8>);
        let subject: Type = syn::parse_quote!(T);
        let out = bool_expr_to_fact(&expr, &subject).map(|t| t.to_string().replace(' ', ""));
        assert_eq!(out.ok().as_deref(), Some("::tola_traits::facts::IsSame<T,u8>"));
    }

    #[test]
    fn test_qualified_fact_is_rejected() {
        let expr: BoolExpr = syn::parse_quote!(facts::Integral);
        let subject: Type = syn::parse_quote!(T);
        assert!(bool_expr_to_fact(&expr, &subject).is_err());
    }
}

//! Generates the predicate methods of `qstage::stage::Filtering` from the
//! operator enums: every unit variant becomes one method named after it in
//! snake case, `NotEqualTo` giving `not_equal_to`.

use darling::{FromDeriveInput, FromVariant, ast};
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

mod between;
mod binary;
mod exists;
mod r#in;
mod unary;

#[derive(Debug, FromDeriveInput)]
#[darling(supports(enum_unit))]
struct OperatorEnum {
    ident: syn::Ident,
    data: ast::Data<OperatorVariant, ()>,
}

#[derive(Debug, FromVariant)]
struct OperatorVariant {
    ident: syn::Ident,
}

/// What a derive needs to write the methods of one variant.
pub(crate) struct Variant<'a> {
    pub(crate) operator: &'a syn::Ident,
    pub(crate) ident: &'a syn::Ident,
    pub(crate) snake: String,
}

fn filtering_methods<F>(input: TokenStream, method: F) -> TokenStream
where
    F: Fn(&Variant<'_>) -> proc_macro2::TokenStream,
{
    let input = parse_macro_input!(input as DeriveInput);
    let operator = match OperatorEnum::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    let variants = operator.data.take_enum().unwrap_or_default();
    let methods = variants.iter().map(|v| {
        method(&Variant {
            operator: &operator.ident,
            ident: &v.ident,
            snake: v.ident.to_string().to_snake_case(),
        })
    });

    quote! {
        impl<'a> crate::stage::Filtering<'a> {
            #(#methods)*
        }
    }
    .into()
}

#[proc_macro_derive(BinaryOperator)]
pub fn binary_operator_methods(input: TokenStream) -> TokenStream {
    filtering_methods(input, binary::method)
}

#[proc_macro_derive(UnaryOperator)]
pub fn unary_operator_methods(input: TokenStream) -> TokenStream {
    filtering_methods(input, unary::method)
}

#[proc_macro_derive(BetweenOperator)]
pub fn between_operator_methods(input: TokenStream) -> TokenStream {
    filtering_methods(input, between::method)
}

#[proc_macro_derive(InOperator)]
pub fn in_operator_methods(input: TokenStream) -> TokenStream {
    filtering_methods(input, r#in::methods)
}

#[proc_macro_derive(ExistsOperator)]
pub fn exists_operator_methods(input: TokenStream) -> TokenStream {
    filtering_methods(input, exists::method)
}

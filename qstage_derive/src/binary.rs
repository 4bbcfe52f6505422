use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::Variant;

/// `EqualTo` becomes `equal_to(value)`.
pub(crate) fn method(variant: &Variant<'_>) -> TokenStream {
    let Variant { operator, ident, snake } = variant;
    let method = format_ident!("{}", snake);

    quote! {
        pub fn #method<V>(self, value: V) -> crate::stage::Merging<'a>
        where
            V: ::std::fmt::Display,
        {
            self.predicate(crate::expr::binary::BinaryPredicate::new(#operator::#ident, value))
        }
    }
}

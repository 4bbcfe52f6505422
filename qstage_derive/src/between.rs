use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::Variant;

/// Both bounds are rendered through `Display`, `BETWEEN low AND high`.
pub(crate) fn method(variant: &Variant<'_>) -> TokenStream {
    let Variant { operator, ident, snake } = variant;
    let method = format_ident!("{}", snake);

    quote! {
        pub fn #method<L, H>(self, low: L, high: H) -> crate::stage::Merging<'a>
        where
            L: ::std::fmt::Display,
            H: ::std::fmt::Display,
        {
            self.predicate(crate::expr::between::BetweenPredicate::new(
                #operator::#ident,
                low,
                high,
            ))
        }
    }
}

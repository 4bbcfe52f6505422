use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::Variant;

pub(crate) fn method(variant: &Variant<'_>) -> TokenStream {
    let Variant { operator, ident, snake } = variant;
    let method = format_ident!("{}", snake);

    quote! {
        pub fn #method(self) -> crate::stage::Merging<'a> {
            self.predicate(#operator::#ident)
        }
    }
}

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::Variant;

pub(crate) fn method(variant: &Variant<'_>) -> TokenStream {
    let Variant { operator, ident, snake } = variant;
    let method = format_ident!("{}", snake);

    quote! {
        pub fn #method<Q>(self, sub_query: Q) -> crate::Result<crate::stage::Merging<'a>>
        where
            Q: crate::IntoRaw,
        {
            let sub_query = crate::raw::SubQuery::parse(sub_query)?;
            Ok(self.predicate(crate::expr::exists::ExistsPredicate::new(
                #operator::#ident,
                sub_query,
            )))
        }
    }
}

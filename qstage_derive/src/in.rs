use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::Variant;

/// Two methods per variant: a value list form and a `_sub_query` form.
/// The value list must not be empty.
pub(crate) fn methods(variant: &Variant<'_>) -> TokenStream {
    let Variant { operator, ident, snake } = variant;
    let list_fn = format_ident!("{}", snake);
    let sub_fn = format_ident!("{}_sub_query", snake);

    quote! {
        pub fn #list_fn<I>(self, values: I) -> crate::Result<crate::stage::Merging<'a>>
        where
            I: crate::IntoValues,
        {
            let values = crate::list::non_empty(values.into_values(), "value list")?;
            Ok(self.predicate(crate::expr::r#in::InPredicate::new(
                #operator::#ident,
                crate::expr::r#in::InSet::Values(values),
            )))
        }

        pub fn #sub_fn<Q>(self, sub_query: Q) -> crate::Result<crate::stage::Merging<'a>>
        where
            Q: crate::IntoRaw,
        {
            let sub_query = crate::raw::SubQuery::parse(sub_query)?;
            Ok(self.predicate(crate::expr::r#in::InPredicate::new(
                #operator::#ident,
                crate::expr::r#in::InSet::SubQuery(sub_query),
            )))
        }
    }
}

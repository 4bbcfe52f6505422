use std::fmt::Write;

use qstage_derive::ExistsOperator;

use crate::{
    raw::SubQuery,
    syntax,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone)]
pub struct ExistsPredicate {
    pub(crate) operator: Existence,
    pub(crate) sub_query: SubQuery,
}

impl ExistsPredicate {
    pub fn new(operator: Existence, sub_query: SubQuery) -> Self {
        Self { operator, sub_query }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ExistsOperator)]
pub enum Existence {
    Exists,
    NotExists,
}

impl FormatWriter for Existence {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        match self {
            Existence::Exists => context.write_keyword(syntax::EXISTS),
            Existence::NotExists => context.write_pair(syntax::NOT, syntax::EXISTS),
        }
    }
}

impl FormatWriter for ExistsPredicate {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        context.write_pair(&self.operator, &self.sub_query)
    }
}

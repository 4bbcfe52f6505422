use qstage_derive::InOperator;

use crate::{
    raw::SubQuery,
    syntax,
    value::Values,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone)]
pub enum InSet {
    Values(Values),
    SubQuery(SubQuery),
}

impl FormatWriter for InSet {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            InSet::Values(values) => context.write_enclosed(values),
            InSet::SubQuery(sub_query) => sub_query.format_writer(context),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InPredicate {
    pub(crate) operator: Membership,
    pub(crate) set: InSet,
}

impl InPredicate {
    pub fn new(operator: Membership, set: InSet) -> Self {
        Self { operator, set }
    }
}

impl FormatWriter for InPredicate {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.write_pair(&self.operator, &self.set)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, InOperator)]
pub enum Membership {
    ContainedIn,
    NotContainedIn,
}

impl FormatWriter for Membership {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Membership::ContainedIn => context.write_keyword(syntax::IN),
            Membership::NotContainedIn => context.write_pair(syntax::NOT, syntax::IN),
        }
    }
}

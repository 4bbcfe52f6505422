use crate::{
    ident::Ident,
    raw::SubQuery,
    syntax,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone)]
pub(crate) enum FromClause {
    Table(Ident),
    SubQuery(SubQuery),
}

impl FormatWriter for FromClause {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            FromClause::Table(table) => context.write_pair(syntax::FROM, table),
            FromClause::SubQuery(sub_query) => context.write_pair(syntax::FROM, sub_query),
        }
    }
}

/// `INNER JOIN <table> ON`, the join condition follows as a predicate.
#[derive(Debug, Clone)]
pub(crate) struct JoinClause {
    table: Ident,
}

impl JoinClause {
    pub(crate) fn inner(table: Ident) -> Self {
        Self { table }
    }
}

impl FormatWriter for JoinClause {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.write_pair(syntax::INNER_JOIN, &self.table)?;
        context.writer.write_char(syntax::SEPARATOR)?;
        context.write_keyword(syntax::ON)
    }
}

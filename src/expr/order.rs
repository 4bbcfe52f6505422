use std::fmt;

use crate::{
    ident::Ident,
    syntax,
    writer::{self, FormatWriter},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FormatWriter for Direction {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Direction::Asc => context.write_keyword(syntax::ASC),
            Direction::Desc => context.write_keyword(syntax::DESC),
        }
    }
}

/// Where rows holding `NULL` in the sort column end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nulls {
    First,
    Last,
}

impl FormatWriter for Nulls {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Nulls::First => context.write_keyword(syntax::NULLS_FIRST),
            Nulls::Last => context.write_keyword(syntax::NULLS_LAST),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    Direction(Direction),
    Nulls(Nulls),
}

impl FormatWriter for Ordering {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Ordering::Direction(direction) => direction.format_writer(context),
            Ordering::Nulls(nulls) => nulls.format_writer(context),
        }
    }
}

/// One sort key. The first key of a clause opens it with `ORDER BY`, the
/// following ones are chained with a leading `,`.
#[derive(Debug, Clone)]
pub struct OrderExpr {
    first: bool,
    column: Ident,
    ordering: Ordering,
}

impl OrderExpr {
    pub fn first(column: Ident, ordering: Ordering) -> Self {
        Self {
            first: true,
            column,
            ordering,
        }
    }

    pub fn then(column: Ident, ordering: Ordering) -> Self {
        Self {
            first: false,
            column,
            ordering,
        }
    }
}

impl FormatWriter for OrderExpr {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        if self.first {
            context.write_keyword(syntax::ORDER_BY)?;
        } else {
            context.writer.write_char(syntax::ORDER_SEPARATOR)?;
        }
        context.writer.write_char(syntax::SEPARATOR)?;
        context.write_pair(&self.column, &self.ordering)
    }
}

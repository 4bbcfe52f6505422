use std::fmt;

use crate::{
    error::Result,
    ident::{Ident, IntoIdent},
    list::Array,
    syntax,
    writer::FormatWriter,
};

pub type Columns = Array<Ident>;

impl Columns {
    /// Converts `cols`, refusing any blank column name.
    pub(crate) fn parse<C: IntoColumns>(cols: C) -> Result<Self> {
        cols.into_columns()
            .iter()
            .map(|col| Ident::parse(col, "column"))
            .collect()
    }
}

pub trait IntoColumns {
    fn into_columns(self) -> Columns;
}

impl IntoColumns for &str {
    fn into_columns(self) -> Columns {
        Columns::One(self.into_ident())
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Columns {
        Columns::One(self.into_ident())
    }
}

impl IntoColumns for Ident {
    fn into_columns(self) -> Columns {
        Columns::One(self)
    }
}

impl IntoColumns for Columns {
    fn into_columns(self) -> Columns {
        self
    }
}

impl<T: IntoIdent, const N: usize> IntoColumns for [T; N] {
    fn into_columns(self) -> Columns {
        self.into_iter().map(IntoIdent::into_ident).collect()
    }
}

impl<T: IntoIdent> IntoColumns for Vec<T> {
    fn into_columns(self) -> Columns {
        self.into_iter().map(IntoIdent::into_ident).collect()
    }
}

impl<T: IntoIdent + Clone> IntoColumns for &[T] {
    fn into_columns(self) -> Columns {
        self.iter().cloned().map(IntoIdent::into_ident).collect()
    }
}

/// What follows `SELECT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Projection {
    All,
    Distinct(Columns),
    Columns(Columns),
}

impl FormatWriter for Projection {
    fn format_writer<W: fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> fmt::Result {
        match self {
            Projection::All => context.write_keyword(syntax::ALL),
            Projection::Distinct(Columns::None) => context.write_keyword(syntax::DISTINCT),
            Projection::Distinct(columns) => context.write_pair(syntax::DISTINCT, columns),
            Projection::Columns(columns) => columns.format_writer(context),
        }
    }
}

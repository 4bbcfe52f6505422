use std::fmt::Write;

use smol_str::SmolStr;

use crate::syntax;

pub(crate) trait FormatWriter {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result;
}

pub(crate) struct FormatContext<'a, W: Write> {
    pub(crate) writer: &'a mut W,
}

impl<'a, W: Write> FormatContext<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    pub(crate) fn write_keyword(&mut self, keyword: &str) -> std::fmt::Result {
        self.writer.write_str(keyword)
    }

    /// Writes `lhs rhs` with a single space between them.
    pub(crate) fn write_pair<L, R>(&mut self, lhs: &L, rhs: &R) -> std::fmt::Result
    where
        L: FormatWriter + ?Sized,
        R: FormatWriter + ?Sized,
    {
        lhs.format_writer(self)?;
        self.writer.write_char(syntax::SEPARATOR)?;
        rhs.format_writer(self)
    }

    /// Writes `( inner )`, the form used for every raw sub-query.
    pub(crate) fn write_wrapped<T>(&mut self, inner: &T) -> std::fmt::Result
    where
        T: FormatWriter + ?Sized,
    {
        self.writer.write_char(syntax::OPEN_PARENTHESES)?;
        self.writer.write_char(syntax::SEPARATOR)?;
        inner.format_writer(self)?;
        self.writer.write_char(syntax::SEPARATOR)?;
        self.writer.write_char(syntax::CLOSE_PARENTHESES)
    }

    /// Writes `(a, b, c)` with no padding inside the parentheses.
    pub(crate) fn write_enclosed<T>(&mut self, inner: &T) -> std::fmt::Result
    where
        T: FormatWriter + ?Sized,
    {
        self.writer.write_char(syntax::OPEN_PARENTHESES)?;
        inner.format_writer(self)?;
        self.writer.write_char(syntax::CLOSE_PARENTHESES)
    }
}

impl FormatWriter for str {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        context.writer.write_str(self)
    }
}

impl FormatWriter for SmolStr {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        context.writer.write_str(self.as_str())
    }
}

impl<T> FormatWriter for &T
where
    T: FormatWriter + ?Sized,
{
    fn format_writer<W: Write>(&self, ctx: &mut FormatContext<'_, W>) -> std::fmt::Result {
        (**self).format_writer(ctx)
    }
}

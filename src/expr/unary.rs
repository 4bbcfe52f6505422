use std::fmt::Write;

use qstage_derive::UnaryOperator;

use crate::{
    syntax,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, UnaryOperator)]
pub enum NullCheck {
    IsNull,
    IsNotNull,
}

impl FormatWriter for NullCheck {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        match self {
            NullCheck::IsNull => context.write_pair(syntax::IS, syntax::NULL),
            NullCheck::IsNotNull => {
                context.write_pair(syntax::IS, syntax::NOT)?;
                context.writer.write_char(syntax::SEPARATOR)?;
                context.write_keyword(syntax::NULL)
            }
        }
    }
}

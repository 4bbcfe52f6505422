use std::fmt::Display;

use qstage_derive::BinaryOperator;

use crate::{
    syntax,
    value::Value,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone)]
pub struct BinaryPredicate {
    pub(crate) operator: Operator,
    pub(crate) value: Value,
}

impl BinaryPredicate {
    pub fn new<V: Display>(operator: Operator, value: V) -> Self {
        Self {
            operator,
            value: Value::new(value),
        }
    }
}

impl FormatWriter for BinaryPredicate {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.write_pair(&self.operator, &self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, BinaryOperator)]
pub enum Operator {
    EqualTo,
    NotEqualTo,
    LessThan,
    GreaterThan,
    LessOrEqualTo,
    GreaterOrEqualTo,
    Like,
    NotLike,
}

impl FormatWriter for Operator {
    fn format_writer<W: std::fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        match self {
            Operator::EqualTo => context.write_keyword(syntax::EQUAL_TO),
            Operator::NotEqualTo => context.write_keyword(syntax::NOT_EQUAL_TO),
            Operator::LessThan => context.write_keyword(syntax::LESS_THAN),
            Operator::GreaterThan => context.write_keyword(syntax::GREATER_THAN),
            Operator::LessOrEqualTo => context.write_keyword(syntax::LESS_THAN_OR_EQUAL_TO),
            Operator::GreaterOrEqualTo => context.write_keyword(syntax::GREATER_THAN_OR_EQUAL_TO),
            Operator::Like => context.write_keyword(syntax::LIKE),
            Operator::NotLike => context.write_pair(syntax::NOT, syntax::LIKE),
        }
    }
}

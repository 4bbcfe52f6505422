use std::fmt::{Display, Write};

use qstage_derive::BetweenOperator;

use crate::{
    syntax,
    value::Value,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, BetweenOperator)]
pub enum RangeOperator {
    Between,
    NotBetween,
}

/// `BETWEEN low AND high`. The bounds are not checked against each other.
#[derive(Debug, Clone)]
pub struct BetweenPredicate {
    pub(crate) operator: RangeOperator,
    pub(crate) low: Value,
    pub(crate) high: Value,
}

impl BetweenPredicate {
    pub fn new<L: Display, H: Display>(operator: RangeOperator, low: L, high: H) -> Self {
        Self {
            operator,
            low: Value::new(low),
            high: Value::new(high),
        }
    }
}

impl FormatWriter for RangeOperator {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        match self {
            RangeOperator::Between => context.write_keyword(syntax::BETWEEN),
            RangeOperator::NotBetween => context.write_pair(syntax::NOT, syntax::BETWEEN),
        }
    }
}

impl FormatWriter for BetweenPredicate {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        context.write_pair(&self.operator, &self.low)?;
        context.writer.write_char(syntax::SEPARATOR)?;
        context.write_pair(syntax::AND, &self.high)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::format_writer;

    use super::*;

    #[test]
    fn test_between() {
        let predicate = BetweenPredicate::new(RangeOperator::Between, 12, 18);
        assert_eq!("BETWEEN 12 AND 18", format_writer(predicate));
        let predicate = BetweenPredicate::new(RangeOperator::NotBetween, 12, 18);
        assert_eq!("NOT BETWEEN 12 AND 18", format_writer(predicate));
    }

    #[test]
    fn test_between_reversed_bounds_pass_through() {
        let predicate = BetweenPredicate::new(RangeOperator::Between, "'z'", "'a'");
        assert_eq!("BETWEEN 'z' AND 'a'", format_writer(predicate));
    }
}

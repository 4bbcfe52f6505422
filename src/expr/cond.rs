use crate::{
    ident::Ident,
    syntax,
    writer::{FormatContext, FormatWriter},
};

/// The keyword that opens a predicate on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conjunction {
    Where,
    And,
    Or,
}

impl FormatWriter for Conjunction {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Conjunction::Where => context.write_keyword(syntax::WHERE),
            Conjunction::And => context.write_keyword(syntax::AND),
            Conjunction::Or => context.write_keyword(syntax::OR),
        }
    }
}

/// `WHERE age`, `AND status`, ... waiting for its predicate.
#[derive(Debug, Clone)]
pub struct Condition {
    conjunction: Conjunction,
    column: Ident,
}

impl Condition {
    pub fn new(conjunction: Conjunction, column: Ident) -> Self {
        Self { conjunction, column }
    }
}

impl FormatWriter for Condition {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.write_pair(&self.conjunction, &self.column)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::tests::format_writer;

    use super::*;

    #[rstest]
    #[case(Conjunction::Where, "WHERE age")]
    #[case(Conjunction::And, "AND age")]
    #[case(Conjunction::Or, "OR age")]
    fn test_condition(#[case] conjunction: Conjunction, #[case] expected: &str) {
        let condition = Condition::new(conjunction, Ident::new_static("age"));
        assert_eq!(expected, format_writer(condition));
    }
}

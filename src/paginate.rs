use std::fmt::Display;

use crate::{
    syntax,
    value::Value,
    writer::{FormatContext, FormatWriter},
};

/// Anything accepted by `LIMIT` and `OFFSET`.
///
/// Any primitive number. Values pass through unchanged, zero, negative and
/// fractional ones included.
pub trait Count: Display + Copy {}

macro_rules! count {
    ($($ty:ty),+ $(,)?) => {
        $(impl Count for $ty {})+
    };
}

count!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[derive(Debug, Clone)]
pub(crate) enum Paginate {
    Limit(Value),
    Offset(Value),
}

impl Paginate {
    pub(crate) fn limit<N: Count>(limit: N) -> Self {
        Self::Limit(Value::new(limit))
    }

    pub(crate) fn offset<N: Count>(offset: N) -> Self {
        Self::Offset(Value::new(offset))
    }
}

impl FormatWriter for Paginate {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        match self {
            Paginate::Limit(limit) => context.write_pair(syntax::LIMIT, limit),
            Paginate::Offset(offset) => context.write_pair(syntax::OFFSET, offset),
        }
    }
}

/// Zero based page window, turned into a `LIMIT`/`OFFSET` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: u64,
    per_page: u64,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current_page: 0,
            per_page: 15,
        }
    }
}

impl Paginator {
    pub fn new(current_page: u64, per_page: u64) -> Self {
        Self {
            current_page,
            per_page,
        }
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        self.current_page.saturating_mul(self.per_page)
    }
}

use std::fmt::Display;

use smol_str::{SmolStr, ToSmolStr};

use crate::{list::Array, writer::FormatWriter};

/// A literal rendered through its `Display` impl, unquoted.
///
/// Strings are not wrapped in quotes: pass `"'pupil'"` to get a SQL string
/// literal. Values are never escaped, so untrusted input must be sanitized
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value(SmolStr);

impl Value {
    pub fn new<V: Display>(value: V) -> Self {
        Self(value.to_smolstr())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FormatWriter for Value {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_str(self.0.as_str())
    }
}

pub type Values = Array<Value>;

pub trait IntoValues {
    fn into_values(self) -> Values;
}

impl IntoValues for Values {
    fn into_values(self) -> Values {
        self
    }
}

impl<V: Display, const N: usize> IntoValues for [V; N] {
    fn into_values(self) -> Values {
        self.iter().map(Value::new).collect()
    }
}

impl<V: Display, const N: usize> IntoValues for &[V; N] {
    fn into_values(self) -> Values {
        self.iter().map(Value::new).collect()
    }
}

impl<V: Display> IntoValues for &[V] {
    fn into_values(self) -> Values {
        self.iter().map(Value::new).collect()
    }
}

impl<V: Display> IntoValues for Vec<V> {
    fn into_values(self) -> Values {
        self.iter().map(Value::new).collect()
    }
}

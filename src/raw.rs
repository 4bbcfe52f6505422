use smol_str::SmolStr;

use crate::{
    error::{InvalidArgument, Result, invalid},
    writer::FormatWriter,
};

/// Raw SQL text, written to the query without any inspection.
///
/// The caller is responsible for the text being valid and safe; no quoting
/// or escaping takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(pub(crate) SmolStr);

impl Raw {
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub(crate) fn parse<T: IntoRaw>(value: T) -> Result<Self> {
        let raw = value.into_raw();
        if raw.is_blank() {
            return invalid(InvalidArgument::BlankSyntax);
        }
        Ok(raw)
    }
}

pub trait IntoRaw {
    fn into_raw(self) -> Raw;
}

impl IntoRaw for Raw {
    fn into_raw(self) -> Raw {
        self
    }
}

impl IntoRaw for &str {
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for &String {
    fn into_raw(self) -> Raw {
        Raw::new(self.as_str())
    }
}

impl IntoRaw for String {
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl IntoRaw for SmolStr {
    fn into_raw(self) -> Raw {
        Raw::new(self)
    }
}

impl FormatWriter for Raw {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_str(self.0.as_str())
    }
}

/// A non-blank raw statement used as a nested query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubQuery(Raw);

impl SubQuery {
    pub(crate) fn parse<T: IntoRaw>(value: T) -> Result<Self> {
        let raw = value.into_raw();
        if raw.is_blank() {
            return invalid(InvalidArgument::BlankSubQuery);
        }
        Ok(Self(raw))
    }
}

impl FormatWriter for SubQuery {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.write_wrapped(&self.0)
    }
}

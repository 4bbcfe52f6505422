use std::{borrow::Cow, sync::Arc};

use smol_str::SmolStr;

use crate::{
    error::{InvalidArgument, Result, invalid},
    writer::{self, FormatWriter},
};

/// A column or table name, emitted exactly as given.
///
/// Nothing is quoted or escaped: `users.id`, `count(*)` or `u.name AS n` are
/// all written through verbatim.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ident(SmolStr);

pub trait IntoIdent {
    fn into_ident(self) -> Ident;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> Ident {
        self
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> Ident {
        self.clone()
    }
}

impl IntoIdent for char {
    fn into_ident(self) -> Ident {
        Ident::new(smol_str::format_smolstr!("{}", self))
    }
}

impl IntoIdent for &str {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for &mut str {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(&*self)
    }
}

impl IntoIdent for &String {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self.as_str())
    }
}

impl IntoIdent for String {
    #[inline(always)]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Box<str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(&*self)
    }
}

impl IntoIdent for Arc<str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(&*self)
    }
}

impl<'a> IntoIdent for Cow<'a, str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(&*self)
    }
}

impl IntoIdent for SmolStr {
    #[inline(always)]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl Ident {
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    #[inline]
    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    /// Converts `value` and refuses blank names. `kind` ends up in the error.
    pub(crate) fn parse<T: IntoIdent>(value: T, kind: &'static str) -> Result<Self> {
        let ident = value.into_ident();
        if ident.is_blank() {
            return invalid(InvalidArgument::BlankIdent(kind));
        }
        Ok(ident)
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FormatWriter for Ident {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_str(self.0.as_str())
    }
}

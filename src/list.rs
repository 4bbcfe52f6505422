use crate::{
    error::{InvalidArgument, Result, invalid},
    syntax,
    writer::{FormatContext, FormatWriter},
};

/// An ordered element list rendered as `a, b, c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Array<T> {
    #[default]
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Array<T> {
    pub fn push(&mut self, value: T) {
        let combined = match std::mem::replace(self, Self::None) {
            Self::None => Self::One(value),
            Self::One(first) => Self::Many(vec![first, value]),
            Self::Many(mut many) => {
                many.push(value);
                Self::Many(many)
            }
        };
        *self = combined;
    }

    pub fn len(&self) -> usize {
        match self {
            Array::None => 0,
            Array::One(_) => 1,
            Array::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Array::None => &[],
            Array::One(one) => std::slice::from_ref(one),
            Array::Many(many) => many.as_slice(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut many: Vec<T> = iter.into_iter().collect();
        match many.len() {
            0 => Self::None,
            1 => many.pop().map_or(Self::None, Self::One),
            _ => Self::Many(many),
        }
    }
}

impl<T: FormatWriter> FormatWriter for Array<T> {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        for (index, elem) in self.iter().enumerate() {
            if index > 0 {
                context.writer.write_str(syntax::ELEMENT_SEPARATOR)?;
            }
            elem.format_writer(context)?;
        }
        Ok(())
    }
}

/// Refuses an empty list; `kind` ends up in the error.
pub(crate) fn non_empty<T>(list: Array<T>, kind: &'static str) -> Result<Array<T>> {
    if list.is_empty() {
        return invalid(InvalidArgument::EmptyList(kind));
    }
    Ok(list)
}

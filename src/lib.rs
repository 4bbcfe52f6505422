mod builder;
mod col;
mod error;
mod expr;
mod ident;
mod list;
mod paginate;
mod raw;
mod source;
mod value;
mod writer;

pub mod stage;
pub mod syntax;

pub use builder::QueryBuilder;

pub use col::Columns;
pub use col::IntoColumns;

pub use error::Error;
pub use error::InvalidArgument;
pub use error::Result;

pub use expr::Direction;
pub use expr::Nulls;

pub use ident::Ident;
pub use ident::IntoIdent;
pub use list::Array;
pub use paginate::Count;
pub use paginate::Paginator;
pub use raw::IntoRaw;
pub use raw::Raw;
pub use value::IntoValues;
pub use value::Value;
pub use value::Values;

pub use stage::{
    Build, Filtering, Merging, Modifying, Quantify, Quantifying, Selecting, Skip, Skipping, Sort,
    Sorting, Source, Stage, SubSorting, Terminal,
};

/// Everything needed to write a statement: the builder, the capability
/// traits and the sort options.
pub mod prelude {
    pub use crate::QueryBuilder;
    pub use crate::expr::{Direction, Nulls};
    pub use crate::stage::{Build, Quantify, Skip, Sort, Stage};
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::writer;

    pub(crate) fn format_writer<W: writer::FormatWriter>(writer: W) -> String {
        let mut str = String::new();
        let mut context = writer::FormatContext::new(&mut str);
        writer.format_writer(&mut context).unwrap();
        str
    }
}

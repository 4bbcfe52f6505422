use crate::{
    error::Result,
    raw::{IntoRaw, Raw},
    stage::{
        Filtering, Merging, Modifying, Quantifying, Selecting, Skipping, Sorting, Source,
        SubSorting, sealed::Handle,
    },
    syntax,
    writer::{FormatContext, FormatWriter},
};

const SIZE_HINT: usize = 64;

/// Owns the query text and starts every statement.
///
/// Tokens are only ever appended, each one followed by a single space,
/// until [`QueryBuilder::reset`] clears the buffer. One builder is meant for
/// one statement at a time; it can be reused after a reset.
///
/// ```
/// use qstage::prelude::*;
///
/// fn main() -> qstage::Result {
///     let mut builder = QueryBuilder::new();
///     let sql = builder
///         .select()
///         .columns(["id", "name"])?
///         .from_table("users")?
///         .where_clause("age")?
///         .greater_than(18)
///         .build(true);
///     assert_eq!("SELECT id, name FROM users WHERE age > 18 ;", sql);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    query: String,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::with_capacity(SIZE_HINT)
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            query: String::with_capacity(capacity),
        }
    }

    /// `SELECT`
    pub fn select(&mut self) -> Selecting<'_> {
        self.push(syntax::SELECT);
        Selecting::from_query(self)
    }

    /// Appends raw syntax for anything the stages do not cover.
    ///
    /// Only blank input is refused, the text itself is not checked.
    pub fn append<T: IntoRaw>(&mut self, syntax: T) -> Result<&mut Self> {
        let raw = Raw::parse(syntax)?;
        self.push(&raw);
        Ok(self)
    }

    /// Builds a statement on a fresh builder and appends its text as one
    /// token, see [`QueryBuilder::nest`].
    pub fn append_with<F>(&mut self, nested: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut QueryBuilder) -> Result<String>,
    {
        let raw = Self::nest(nested)?;
        self.push(&raw);
        Ok(self)
    }

    /// Runs `nested` on a fresh builder and returns the statement it built,
    /// without the trailing separator. A blank statement is refused.
    ///
    /// The result is raw syntax, so it can be passed to `from_sub_query`,
    /// `contained_in_sub_query` or `exists` as well as appended.
    ///
    /// ```
    /// use qstage::prelude::*;
    ///
    /// fn main() -> qstage::Result {
    ///     let admins = QueryBuilder::nest(|builder| {
    ///         Ok(builder.select().columns("user_id")?.from_table("admins")?.build(false))
    ///     })?;
    ///
    ///     let mut builder = QueryBuilder::new();
    ///     let sql = builder
    ///         .select()
    ///         .all()
    ///         .from_table("users")?
    ///         .where_clause("id")?
    ///         .contained_in_sub_query(admins)?
    ///         .build(true);
    ///     assert_eq!(
    ///         "SELECT * FROM users WHERE id IN ( SELECT user_id FROM admins ) ;",
    ///         sql
    ///     );
    ///     Ok(())
    /// }
    /// ```
    pub fn nest<F>(nested: F) -> Result<Raw>
    where
        F: FnOnce(&mut QueryBuilder) -> Result<String>,
    {
        let mut builder = QueryBuilder::new();
        let sql = nested(&mut builder)?;
        Raw::parse(sql.trim_end())
    }

    pub fn append_and_select_source<T: IntoRaw>(&mut self, syntax: T) -> Result<Source<'_>> {
        self.append_and(syntax)
    }

    pub fn append_and_modify<T: IntoRaw>(&mut self, syntax: T) -> Result<Modifying<'_>> {
        self.append_and(syntax)
    }

    pub fn append_and_filter<T: IntoRaw>(&mut self, syntax: T) -> Result<Filtering<'_>> {
        self.append_and(syntax)
    }

    pub fn append_and_merge<T: IntoRaw>(&mut self, syntax: T) -> Result<Merging<'_>> {
        self.append_and(syntax)
    }

    pub fn append_and_sort<T: IntoRaw>(&mut self, syntax: T) -> Result<Sorting<'_>> {
        self.append_and(syntax)
    }

    pub fn append_and_sub_sort<T: IntoRaw>(&mut self, syntax: T) -> Result<SubSorting<'_>> {
        self.append_and(syntax)
    }

    pub fn append_and_quantify<T: IntoRaw>(&mut self, syntax: T) -> Result<Quantifying<'_>> {
        self.append_and(syntax)
    }

    pub fn append_and_skip<T: IntoRaw>(&mut self, syntax: T) -> Result<Skipping<'_>> {
        self.append_and(syntax)
    }

    /// Clears everything emitted so far.
    pub fn reset(&mut self) -> &mut Self {
        tracing::debug!(len = self.query.len(), "reset query");
        self.query.clear();
        self
    }

    /// Returns the text emitted so far, plus `;` when `append_terminator`
    /// is set. The buffer itself never receives the terminator.
    pub fn build(&self, append_terminator: bool) -> String {
        let mut sql = String::with_capacity(self.query.len() + 1);
        sql.push_str(&self.query);
        if append_terminator {
            sql.push(syntax::TERMINATOR);
        }
        tracing::debug!(len = sql.len(), append_terminator, "built query");
        sql
    }

    fn append_and<'a, S: Handle<'a>, T: IntoRaw>(&'a mut self, syntax: T) -> Result<S> {
        let raw = Raw::parse(syntax)?;
        self.push(&raw);
        Ok(S::from_query(self))
    }

    /// Writes one token followed by the separator.
    pub(crate) fn push<T: FormatWriter + ?Sized>(&mut self, token: &T) {
        let start = self.query.len();
        let mut context = FormatContext::new(&mut self.query);
        token
            .format_writer(&mut context)
            .expect("should not fail on a string writer");
        tracing::trace!(token = &self.query[start..], "emit");
        self.query.push(syntax::SEPARATOR);
    }
}

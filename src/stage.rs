//! The stage graph.
//!
//! Every stage is a thin handle borrowing the [`QueryBuilder`] buffer. A
//! stage only exposes the calls that are grammatically legal at its point in
//! a `SELECT` statement, and each call consumes the handle and returns the
//! next one:
//!
//! ```text
//! QueryBuilder -select-> Selecting -all/distinct/columns-> Source
//! Source -from_table/from_sub_query-> Modifying
//! Modifying -where_clause/inner_join-> Filtering -predicate-> Merging
//! Merging -and/or-> Filtering
//! Modifying | Merging | Sorting -order_by-> SubSorting -and_order_by-> SubSorting
//! ... -limit-> Skipping -offset-> Terminal
//! ```
//!
//! Optional clauses are skipped through the capability traits: a stage that
//! implements [`Sort`] also implements [`Quantify`], [`Skip`] and [`Build`],
//! so `WHERE`, `ORDER BY`, `LIMIT` and `OFFSET` can each be left out.

use crate::{
    builder::QueryBuilder,
    col::{Columns, IntoColumns, Projection},
    error::Result,
    expr::{
        cond::{Condition, Conjunction},
        order::{Direction, Nulls, OrderExpr, Ordering},
    },
    ident::{Ident, IntoIdent},
    list::non_empty,
    paginate::{Count, Paginate, Paginator},
    raw::{IntoRaw, Raw, SubQuery},
    source::{FromClause, JoinClause},
    writer::FormatWriter,
};

pub(crate) mod sealed {
    use crate::builder::QueryBuilder;

    pub trait Handle<'a>: Sized {
        fn from_query(query: &'a mut QueryBuilder) -> Self;

        fn into_query(self) -> &'a mut QueryBuilder;

        fn query(&self) -> &QueryBuilder;
    }
}

use sealed::Handle;

/// Pushes `token` and hands the buffer over to the next stage.
fn advance<'a, N, T>(stage: impl Handle<'a>, token: &T) -> N
where
    N: Handle<'a>,
    T: FormatWriter + ?Sized,
{
    let query = stage.into_query();
    query.push(token);
    N::from_query(query)
}

/// Operations available from every stage.
pub trait Stage<'a>: Handle<'a> {
    /// Drops everything emitted so far and goes back to the root builder.
    fn reset(self) -> &'a mut QueryBuilder {
        self.into_query().reset()
    }

    /// Appends raw syntax and stays on the same stage.
    fn append<T: IntoRaw>(self, syntax: T) -> Result<Self> {
        let raw = Raw::parse(syntax)?;
        Ok(advance(self, &raw))
    }

    /// Appends a statement built on a fresh builder, see
    /// [`QueryBuilder::nest`].
    fn append_with<F>(self, nested: F) -> Result<Self>
    where
        F: FnOnce(&mut QueryBuilder) -> Result<String>,
    {
        let raw = QueryBuilder::nest(nested)?;
        Ok(advance(self, &raw))
    }
}

/// Stages from which the statement can be rendered.
pub trait Build<'a>: Stage<'a> {
    /// Returns the statement, followed by `;` when `append_terminator` is set.
    ///
    /// The buffer is left untouched so calling this twice returns the same
    /// text.
    fn build(&self, append_terminator: bool) -> String {
        self.query().build(append_terminator)
    }

    fn to_sql(&self) -> String {
        self.build(true)
    }
}

pub trait Skip<'a>: Build<'a> {
    fn offset<N: Count>(self, offset: N) -> Terminal<'a> {
        advance(self, &Paginate::offset(offset))
    }
}

pub trait Quantify<'a>: Skip<'a> {
    fn limit<N: Count>(self, limit: N) -> Skipping<'a> {
        advance(self, &Paginate::limit(limit))
    }

    /// `LIMIT per_page OFFSET page * per_page`, pages counted from zero.
    fn paginate(self, page: u64, per_page: u64) -> Terminal<'a> {
        let paginator = Paginator::new(page, per_page);
        self.limit(paginator.limit()).offset(paginator.offset())
    }
}

pub trait Sort<'a>: Quantify<'a> {
    fn order_by<C: IntoIdent>(self, column: C) -> Result<SubSorting<'a>> {
        self.order_by_with(column, Direction::Asc)
    }

    fn order_by_with<C: IntoIdent>(self, column: C, direction: Direction) -> Result<SubSorting<'a>> {
        let column = Ident::parse(column, "column")?;
        let expr = OrderExpr::first(column, Ordering::Direction(direction));
        Ok(advance(self, &expr))
    }

    fn order_nulls_first<C: IntoIdent>(self, column: C) -> Result<SubSorting<'a>> {
        let column = Ident::parse(column, "column")?;
        let expr = OrderExpr::first(column, Ordering::Nulls(Nulls::First));
        Ok(advance(self, &expr))
    }

    fn order_nulls_last<C: IntoIdent>(self, column: C) -> Result<SubSorting<'a>> {
        let column = Ident::parse(column, "column")?;
        let expr = OrderExpr::first(column, Ordering::Nulls(Nulls::Last));
        Ok(advance(self, &expr))
    }
}

macro_rules! stage {
    ($(#[$meta:meta])* $name:ident $(: $($cap:ident),+)?) => {
        $(#[$meta])*
        #[derive(Debug)]
        #[must_use]
        pub struct $name<'a> {
            query: &'a mut QueryBuilder,
        }

        impl<'a> Handle<'a> for $name<'a> {
            fn from_query(query: &'a mut QueryBuilder) -> Self {
                Self { query }
            }

            fn into_query(self) -> &'a mut QueryBuilder {
                self.query
            }

            fn query(&self) -> &QueryBuilder {
                self.query
            }
        }

        impl<'a> Stage<'a> for $name<'a> {}

        $($(impl<'a> $cap<'a> for $name<'a> {})+)?
    };
}

stage! {
    /// Right after `SELECT`: picks the result columns.
    Selecting
}

stage! {
    /// Picks the `FROM` source.
    Source
}

stage! {
    /// A complete statement that may still get a `WHERE` or a join.
    Modifying: Build, Skip, Quantify, Sort
}

stage! {
    /// Waiting for the predicate of the last named column.
    Filtering
}

stage! {
    /// A finished predicate, open to `AND`/`OR` chaining.
    Merging: Build, Skip, Quantify, Sort
}

stage! {
    Sorting: Build, Skip, Quantify, Sort
}

stage! {
    /// After the first sort key; more keys can be chained.
    SubSorting: Build, Skip, Quantify
}

stage! {
    Quantifying: Build, Skip, Quantify
}

stage! {
    /// After `LIMIT`.
    Skipping: Build, Skip
}

stage! {
    /// Nothing left to add.
    Terminal: Build
}

impl<'a> Selecting<'a> {
    /// `SELECT *`
    pub fn all(self) -> Source<'a> {
        advance(self, &Projection::All)
    }

    /// `SELECT DISTINCT`
    pub fn distinct(self) -> Source<'a> {
        advance(self, &Projection::Distinct(Columns::None))
    }

    /// `SELECT DISTINCT a, b`, or a bare `DISTINCT` when `columns` is empty.
    pub fn distinct_columns<C: IntoColumns>(self, columns: C) -> Result<Source<'a>> {
        let columns = Columns::parse(columns)?;
        Ok(advance(self, &Projection::Distinct(columns)))
    }

    /// `SELECT a, b`. At least one column is required.
    pub fn columns<C: IntoColumns>(self, columns: C) -> Result<Source<'a>> {
        let columns = non_empty(Columns::parse(columns)?, "column list")?;
        Ok(advance(self, &Projection::Columns(columns)))
    }
}

impl<'a> Source<'a> {
    pub fn from_table<T: IntoIdent>(self, table: T) -> Result<Modifying<'a>> {
        let table = Ident::parse(table, "table")?;
        Ok(advance(self, &FromClause::Table(table)))
    }

    /// `FROM ( sub_query )`
    pub fn from_sub_query<Q: IntoRaw>(self, sub_query: Q) -> Result<Modifying<'a>> {
        let sub_query = SubQuery::parse(sub_query)?;
        Ok(advance(self, &FromClause::SubQuery(sub_query)))
    }
}

impl<'a> Modifying<'a> {
    pub fn where_clause<C: IntoIdent>(self, column: C) -> Result<Filtering<'a>> {
        let column = Ident::parse(column, "column")?;
        Ok(advance(self, &Condition::new(Conjunction::Where, column)))
    }

    /// `INNER JOIN table ON`. The next predicate completes the join
    /// condition, use [`Stage::append`] to name its left hand column.
    pub fn inner_join<T: IntoIdent>(self, table: T) -> Result<Filtering<'a>> {
        let table = Ident::parse(table, "table")?;
        Ok(advance(self, &JoinClause::inner(table)))
    }
}

// the predicate methods are generated from the operator enums in `expr`
impl<'a> Filtering<'a> {
    pub(crate) fn predicate<T: FormatWriter>(self, token: T) -> Merging<'a> {
        advance(self, &token)
    }
}

impl<'a> Merging<'a> {
    pub fn and<C: IntoIdent>(self, column: C) -> Result<Filtering<'a>> {
        let column = Ident::parse(column, "column")?;
        Ok(advance(self, &Condition::new(Conjunction::And, column)))
    }

    pub fn or<C: IntoIdent>(self, column: C) -> Result<Filtering<'a>> {
        let column = Ident::parse(column, "column")?;
        Ok(advance(self, &Condition::new(Conjunction::Or, column)))
    }
}

impl<'a> SubSorting<'a> {
    pub fn and_order_by<C: IntoIdent>(self, column: C) -> Result<Self> {
        self.and_order_by_with(column, Direction::Asc)
    }

    pub fn and_order_by_with<C: IntoIdent>(self, column: C, direction: Direction) -> Result<Self> {
        self.then(column, Ordering::Direction(direction))
    }

    pub fn and_order_nulls_first<C: IntoIdent>(self, column: C) -> Result<Self> {
        self.then(column, Ordering::Nulls(Nulls::First))
    }

    pub fn and_order_nulls_last<C: IntoIdent>(self, column: C) -> Result<Self> {
        self.then(column, Ordering::Nulls(Nulls::Last))
    }

    fn then<C: IntoIdent>(self, column: C, ordering: Ordering) -> Result<Self> {
        let column = Ident::parse(column, "column")?;
        Ok(advance(self, &OrderExpr::then(column, ordering)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::InvalidArgument,
        prelude::*,
    };

    use super::*;

    #[test]
    fn test_full_chain() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .where_clause("age")?
            .between(12, 18)
            .and("status")?
            .equal_to("pupil")
            .order_by("age")?
            .limit(20)
            .offset(10)
            .build(true);
        assert_eq!(
            "SELECT * FROM users WHERE age BETWEEN 12 AND 18 AND status = pupil ORDER BY age ASC LIMIT 20 OFFSET 10 ;",
            sql
        );
        Ok(())
    }

    #[test]
    fn test_columns_without_terminator() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder.select().columns(["id", "name"])?.from_table("t")?.build(false);
        assert_eq!("SELECT id, name FROM t ", sql);
        Ok(())
    }

    #[test]
    fn test_distinct() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder.select().distinct().from_table("t")?.build(false);
        assert_eq!("SELECT DISTINCT FROM t ", sql);

        let sql = builder
            .reset()
            .select()
            .distinct_columns(["a", "b"])?
            .from_table("t")?
            .build(false);
        assert_eq!("SELECT DISTINCT a, b FROM t ", sql);

        let sql = builder
            .reset()
            .select()
            .distinct_columns(Vec::<&str>::new())?
            .from_table("t")?
            .build(false);
        assert_eq!("SELECT DISTINCT FROM t ", sql);
        Ok(())
    }

    #[test]
    fn test_empty_columns_rejected() {
        let mut builder = QueryBuilder::new();
        let err = builder.select().columns(Vec::<&str>::new()).unwrap_err();
        assert_eq!(InvalidArgument::EmptyList("column list"), err.reason());
        assert_eq!("SELECT ", builder.build(false));
    }

    #[test]
    fn test_blank_identifiers_rejected() {
        let mut builder = QueryBuilder::new();
        let err = builder.select().all().from_table("  ").unwrap_err();
        assert_eq!(InvalidArgument::BlankIdent("table"), err.reason());
        assert_eq!("SELECT * ", builder.build(false));

        let mut builder = QueryBuilder::new();
        let stage = builder.select().all().from_table("users").unwrap();
        let err = stage.where_clause("").unwrap_err();
        assert_eq!(InvalidArgument::BlankIdent("column"), err.reason());
        assert_eq!("SELECT * FROM users ", builder.build(false));
    }

    #[test]
    fn test_optional_clauses_fall_through() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder.select().all().from_table("users")?.build(true);
        assert_eq!("SELECT * FROM users ;", sql);

        let sql = builder
            .reset()
            .select()
            .all()
            .from_table("users")?
            .limit(5)
            .build(true);
        assert_eq!("SELECT * FROM users LIMIT 5 ;", sql);

        let sql = builder
            .reset()
            .select()
            .all()
            .from_table("users")?
            .where_clause("id")?
            .greater_than(3)
            .offset(2)
            .build(false);
        assert_eq!("SELECT * FROM users WHERE id > 3 OFFSET 2 ", sql);

        let sql = builder
            .reset()
            .select()
            .all()
            .from_table("users")?
            .order_by_with("name", Direction::Desc)?
            .build(false);
        assert_eq!("SELECT * FROM users ORDER BY name DESC ", sql);
        Ok(())
    }

    #[test]
    fn test_or_chain() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .where_clause("status")?
            .equal_to("'pupil'")
            .or("status")?
            .equal_to("'student'")
            .and("age")?
            .less_or_equal_to(30)
            .build(false);
        assert_eq!(
            "SELECT * FROM users WHERE status = 'pupil' OR status = 'student' AND age <= 30 ",
            sql
        );
        Ok(())
    }

    #[test]
    fn test_comparison_predicates() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("t")?
            .where_clause("a")?
            .not_equal_to(1)
            .and("b")?
            .less_than(2)
            .and("c")?
            .greater_or_equal_to(3)
            .and("d")?
            .like("'%x%'")
            .and("e")?
            .not_like("'y%'")
            .build(false);
        assert_eq!(
            "SELECT * FROM t WHERE a != 1 AND b < 2 AND c >= 3 AND d LIKE '%x%' AND e NOT LIKE 'y%' ",
            sql
        );
        Ok(())
    }

    #[test]
    fn test_containment() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("t")?
            .where_clause("name")?
            .contained_in(["A", "B"])?
            .and("id")?
            .not_contained_in(vec![1, 2, 3])?
            .build(false);
        assert_eq!("SELECT * FROM t WHERE name IN (A, B) AND id NOT IN (1, 2, 3) ", sql);
        Ok(())
    }

    #[test]
    fn test_empty_containment_rejected() -> Result {
        let mut builder = QueryBuilder::new();
        let filtering = builder.select().all().from_table("t")?.where_clause("id")?;
        let err = filtering.contained_in(Vec::<i32>::new()).unwrap_err();
        assert_eq!(InvalidArgument::EmptyList("value list"), err.reason());
        assert_eq!("SELECT * FROM t WHERE id ", builder.build(false));
        Ok(())
    }

    #[test]
    fn test_sub_query_predicates() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .where_clause("id")?
            .contained_in_sub_query("SELECT user_id FROM admins")?
            .and("id")?
            .not_contained_in_sub_query("SELECT user_id FROM banned")?
            .build(false);
        assert_eq!(
            "SELECT * FROM users WHERE id IN ( SELECT user_id FROM admins ) AND id NOT IN ( SELECT user_id FROM banned ) ",
            sql
        );

        let err = builder
            .reset()
            .select()
            .all()
            .from_table("users")?
            .where_clause("id")?
            .contained_in_sub_query(" ")
            .unwrap_err();
        assert_eq!(InvalidArgument::BlankSubQuery, err.reason());
        Ok(())
    }

    #[test]
    fn test_null_checks() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .where_clause("id")?
            .is_not_null()
            .and("deleted_at")?
            .is_null()
            .build(false);
        assert_eq!("SELECT * FROM users WHERE id IS NOT NULL AND deleted_at IS NULL ", sql);
        Ok(())
    }

    #[test]
    fn test_exists() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .append("SELECT * FROM users")?
            .append_and_filter("WHERE")?
            .exists("SELECT 1 FROM roles WHERE roles.user_id = users.id")?
            .and("active")?
            .equal_to(1)
            .build(false);
        assert_eq!(
            "SELECT * FROM users WHERE EXISTS ( SELECT 1 FROM roles WHERE roles.user_id = users.id ) AND active = 1 ",
            sql
        );

        let sql = builder
            .reset()
            .append("SELECT * FROM users")?
            .append_and_filter("WHERE")?
            .not_exists("SELECT 1 FROM bans WHERE bans.user_id = users.id")?
            .build(false);
        assert_eq!(
            "SELECT * FROM users WHERE NOT EXISTS ( SELECT 1 FROM bans WHERE bans.user_id = users.id ) ",
            sql
        );

        let err = builder.reset().append_and_filter("WHERE")?.exists("").unwrap_err();
        assert_eq!(InvalidArgument::BlankSubQuery, err.reason());
        assert_eq!("WHERE ", builder.build(false));
        Ok(())
    }

    #[test]
    fn test_between() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .where_clause("age")?
            .not_between(12, 18)
            .build(true);
        assert_eq!("SELECT * FROM users WHERE age NOT BETWEEN 12 AND 18 ;", sql);
        Ok(())
    }

    #[test]
    fn test_from_sub_query() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .columns("name")?
            .from_sub_query("SELECT * FROM users WHERE age > 18")?
            .build(true);
        assert_eq!("SELECT name FROM ( SELECT * FROM users WHERE age > 18 ) ;", sql);

        let err = builder.reset().select().all().from_sub_query("   ").unwrap_err();
        assert_eq!(InvalidArgument::BlankSubQuery, err.reason());
        Ok(())
    }

    #[test]
    fn test_inner_join() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .columns(["users.name", "roles.title"])?
            .from_table("users")?
            .inner_join("roles")?
            .append("roles.user_id")?
            .equal_to("users.id")
            .and("roles.active")?
            .equal_to(1)
            .build(false);
        assert_eq!(
            "SELECT users.name, roles.title FROM users INNER JOIN roles ON roles.user_id = users.id AND roles.active = 1 ",
            sql
        );
        Ok(())
    }

    #[test]
    fn test_sub_sorting() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .order_by("age")?
            .and_order_by_with("status", Direction::Desc)?
            .and_order_nulls_first("middle_name")?
            .and_order_nulls_last("father_name")?
            .and_order_by("id")?
            .build(false);
        assert_eq!(
            "SELECT * FROM users ORDER BY age ASC , status DESC , middle_name NULLS FIRST , father_name NULLS LAST , id ASC ",
            sql
        );

        let sql = builder
            .reset()
            .select()
            .all()
            .from_table("users")?
            .order_nulls_first("a")?
            .limit(1)
            .build(false);
        assert_eq!("SELECT * FROM users ORDER BY a NULLS FIRST LIMIT 1 ", sql);

        let sql = builder
            .reset()
            .select()
            .all()
            .from_table("users")?
            .where_clause("a")?
            .is_null()
            .order_nulls_last("b")?
            .build(false);
        assert_eq!("SELECT * FROM users WHERE a IS NULL ORDER BY b NULLS LAST ", sql);
        Ok(())
    }

    #[test]
    fn test_blank_sort_column_rejected() -> Result {
        let mut builder = QueryBuilder::new();
        let err = builder
            .select()
            .all()
            .from_table("users")?
            .order_by("age")?
            .and_order_by(" ")
            .unwrap_err();
        assert_eq!(InvalidArgument::BlankIdent("column"), err.reason());
        assert_eq!("SELECT * FROM users ORDER BY age ASC ", builder.build(false));
        Ok(())
    }

    #[test]
    fn test_pagination_pass_through() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .limit(-1)
            .offset(0)
            .build(false);
        assert_eq!("SELECT * FROM users LIMIT -1 OFFSET 0 ", sql);
        Ok(())
    }

    #[test]
    fn test_paginate() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .order_by("id")?
            .paginate(2, 25)
            .build(true);
        assert_eq!("SELECT * FROM users ORDER BY id ASC LIMIT 25 OFFSET 50 ;", sql);
        Ok(())
    }

    #[test]
    fn test_reset_from_any_stage() -> Result {
        let mut builder = QueryBuilder::new();
        let root = builder
            .select()
            .all()
            .from_table("users")?
            .where_clause("age")?
            .between(12, 18)
            .and("status")?
            .equal_to("pupil")
            .or("status")?
            .equal_to("student")
            .order_by("age")?
            .and_order_by("status")?
            .and_order_nulls_first("middleName")?
            .and_order_nulls_last("fatherName")?
            .limit(20)
            .offset(10)
            .reset();
        assert_eq!("", root.build(false));

        let sql = root
            .select()
            .all()
            .from_table("users")?
            .where_clause("age")?
            .between(12, 18)
            .build(true);
        assert_eq!("SELECT * FROM users WHERE age BETWEEN 12 AND 18 ;", sql);

        let root = builder.select().reset();
        assert_eq!("", root.build(false));
        let root = builder.select().all().from_table("t")?.where_clause("a")?.reset();
        assert_eq!(";", root.build(true));
        Ok(())
    }

    #[test]
    fn test_build_is_idempotent() -> Result {
        let mut builder = QueryBuilder::new();
        let terminal = builder.select().all().from_table("users")?.limit(1).offset(1);
        let first = terminal.build(true);
        let second = terminal.build(true);
        assert_eq!(first, second);
        assert_eq!("SELECT * FROM users LIMIT 1 OFFSET 1 ;", second);
        assert_eq!("SELECT * FROM users LIMIT 1 OFFSET 1 ", terminal.build(false));
        assert_eq!(terminal.to_sql(), terminal.build(true));
        Ok(())
    }

    #[test]
    fn test_stage_append() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .append("TOP 5")?
            .all()
            .from_table("users")?
            .build(false);
        assert_eq!("SELECT TOP 5 * FROM users ", sql);

        let err = builder.reset().select().append("  ").unwrap_err();
        assert_eq!(InvalidArgument::BlankSyntax, err.reason());
        assert_eq!("SELECT ", builder.build(false));
        Ok(())
    }

    #[test]
    fn test_stage_append_with() -> Result {
        let mut builder = QueryBuilder::new();
        let sql = builder
            .select()
            .all()
            .from_table("users")?
            .where_clause("age")?
            .greater_than(18)
            .append("AND id IN (")?
            .append_with(|nested| {
                Ok(nested.select().columns("user_id")?.from_table("admins")?.build(false))
            })?
            .append(")")?
            .order_by("id")?
            .build(true);
        assert_eq!(
            "SELECT * FROM users WHERE age > 18 AND id IN ( SELECT user_id FROM admins ) ORDER BY id ASC ;",
            sql
        );

        let err = builder
            .reset()
            .select()
            .append_with(|nested| Ok(nested.reset().build(false)))
            .unwrap_err();
        assert_eq!(InvalidArgument::BlankSyntax, err.reason());
        assert_eq!("SELECT ", builder.build(false));
        Ok(())
    }
}

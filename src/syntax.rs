//! Fixed SQL vocabulary. Keywords are always emitted upper case.

pub const SELECT: &str = "SELECT";
pub const ALL: &str = "*";
pub const DISTINCT: &str = "DISTINCT";
pub const FROM: &str = "FROM";
pub const WHERE: &str = "WHERE";
pub const AND: &str = "AND";
pub const OR: &str = "OR";
pub const NOT: &str = "NOT";
pub const INNER_JOIN: &str = "INNER JOIN";
pub const ON: &str = "ON";

pub const EQUAL_TO: &str = "=";
pub const NOT_EQUAL_TO: &str = "!=";
pub const LESS_THAN: &str = "<";
pub const GREATER_THAN: &str = ">";
pub const LESS_THAN_OR_EQUAL_TO: &str = "<=";
pub const GREATER_THAN_OR_EQUAL_TO: &str = ">=";
pub const LIKE: &str = "LIKE";
pub const IN: &str = "IN";
pub const EXISTS: &str = "EXISTS";
pub const BETWEEN: &str = "BETWEEN";
pub const IS: &str = "IS";
pub const NULL: &str = "NULL";

pub const ORDER_BY: &str = "ORDER BY";
pub const ASC: &str = "ASC";
pub const DESC: &str = "DESC";
pub const NULLS_FIRST: &str = "NULLS FIRST";
pub const NULLS_LAST: &str = "NULLS LAST";

pub const LIMIT: &str = "LIMIT";
pub const OFFSET: &str = "OFFSET";

/// Written after every token.
pub const SEPARATOR: char = ' ';
/// Joins the elements of a column or value list.
pub const ELEMENT_SEPARATOR: &str = ", ";
/// Leads every additional sort key.
pub const ORDER_SEPARATOR: char = ',';
pub const OPEN_PARENTHESES: char = '(';
pub const CLOSE_PARENTHESES: char = ')';
pub const TERMINATOR: char = ';';

//! Tokens emitted by the filtering and sorting stages.

pub mod between;
pub mod binary;
pub mod cond;
pub mod exists;
pub mod r#in;
pub mod order;
pub mod unary;

pub use order::{Direction, Nulls};

//! Structured statement builders.
//!
//! Clauses are collected by small accumulators and rendered by the four
//! statement builders:
//!
//! - [`PredicateBuilder`]: WHERE / ON conditions, ANDed in order.
//! - [`JoinAccumulator`]: joins keyed by target table, first one wins.
//! - [`OrderingAccumulator`]: ORDER BY keyed by column, first direction wins.
//! - [`AssignmentAccumulator`]: INSERT / UPDATE values, duplicates rejected.
//!
//! Every clause writes into one [`SqlWriter`](crate::writer::SqlWriter), so
//! the placeholders in the SQL text and the argument list always line up.

pub mod assign;
pub mod delete;
pub mod insert;
pub mod join;
pub mod order;
pub mod predicate;
pub mod select;
pub mod traits;
pub mod update;

pub use assign::AssignmentAccumulator;
pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use join::{JoinAccumulator, JoinKind, JoinSpec};
pub use order::OrderingAccumulator;
pub use predicate::{ClauseKind, PredicateBuilder};
pub use select::SelectBuilder;
pub use traits::{SqlBuilder, StatementKind};
pub use update::UpdateBuilder;

#[cfg(test)]
mod tests;

//! Table model: tables, columns, conditions and ordering entries.
//!
//! These are plain value objects. Tables are cheap handles; columns carry a
//! handle to their table so they can render `alias.FIELD` and compare by
//! table identity.

pub mod column;
pub mod condition;
pub mod order;
pub mod table;

pub use column::{Column, ColumnStyle};
pub use condition::{Condition, Operand, Operator};
pub use order::{Direction, OrderEntry};
pub use table::Table;

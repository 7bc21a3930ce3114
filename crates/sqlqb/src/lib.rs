//! # sqlqb
//!
//! Typed SQL statement construction over described tables and columns.
//!
//! ## Features
//!
//! - **Typed references**: a [`Table`] hands out [`Column`]s, columns build [`Condition`]s and [`OrderEntry`]s
//! - **SQL text + arguments**: every build returns a [`SqlQuery`] whose placeholders line up with its argument list
//! - **Placeholder styles**: `?` by default, or numbered `$1, $2, ...` via [`QbConfig`]
//! - **Postgres-ready arguments**: [`Value`] implements `tokio_postgres::types::ToSql`
//!
//! ## Example
//!
//! ```
//! use sqlqb::{SqlBuilder, Table, Value};
//!
//! let person = Table::new("PERSON");
//! let name = person.column("NAME");
//! let age = person.column("AGE");
//!
//! // SELECT
//! let mut select = person.select();
//! select.list([&name, &age]).and(age.gt(20)).order_by([name.asc()]);
//! let q = select.build()?;
//! assert_eq!(
//!     q.sql(),
//!     "SELECT person.NAME,person.AGE FROM PERSON person WHERE person.AGE > ? ORDER BY person.NAME ASC"
//! );
//! assert_eq!(q.args(), &[Value::from(20)]);
//!
//! // UPDATE
//! let mut update = person.update();
//! update.set(&name, "Dilip")?.and(age.lt(20));
//! assert_eq!(update.to_sql()?, "UPDATE PERSON SET NAME=? WHERE AGE < ?");
//! # Ok::<(), sqlqb::QbError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod value;
pub mod writer;

pub use builder::{
    AssignmentAccumulator, ClauseKind, DeleteBuilder, InsertBuilder, JoinAccumulator, JoinKind,
    JoinSpec, OrderingAccumulator, PredicateBuilder, SelectBuilder, SqlBuilder, StatementKind,
    UpdateBuilder,
};
pub use config::{PlaceholderStyle, QbConfig};
pub use error::{QbError, QbResult};
pub use model::{Column, ColumnStyle, Condition, Direction, Operand, Operator, OrderEntry, Table};
pub use query::SqlQuery;
pub use value::Value;
pub use writer::SqlWriter;

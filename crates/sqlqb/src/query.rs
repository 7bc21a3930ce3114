//! The built statement: SQL text plus ordered arguments.

use crate::value::Value;
use tokio_postgres::types::ToSql;

/// A built statement.
///
/// The `n`-th placeholder in [`sql`](Self::sql), read left to right, binds
/// the `n`-th entry of [`args`](Self::args).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlQuery {
    sql: String,
    args: Vec<Value>,
}

impl SqlQuery {
    pub(crate) fn new(sql: String, args: Vec<Value>) -> Self {
        Self { sql, args }
    }

    /// An empty fragment: no text, no arguments.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Check if the SQL text is empty.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Get arguments as references compatible with tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.args.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }
}

impl std::fmt::Display for SqlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql)
    }
}

use super::assign::AssignmentAccumulator;
use super::traits::{SqlBuilder, StatementKind};
use crate::config::{PlaceholderStyle, QbConfig};
use crate::error::{QbError, QbResult};
use crate::model::{Column, ColumnStyle, Table};
use crate::value::Value;
use crate::writer::SqlWriter;

/// INSERT builder.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    /// Target table
    table: Table,
    /// Placeholder style
    style: PlaceholderStyle,
    /// Column values, in insertion order
    assignments: AssignmentAccumulator,
}

impl InsertBuilder {
    pub fn new(table: Table) -> Self {
        Self::with_config(table, &QbConfig::default())
    }

    pub fn with_config(table: Table, config: &QbConfig) -> Self {
        Self {
            table,
            style: config.placeholder,
            assignments: AssignmentAccumulator::new(),
        }
    }

    /// Set a column value. Setting the same column twice is an error.
    pub fn set(&mut self, column: &Column, value: impl Into<Value>) -> QbResult<&mut Self> {
        self.assignments.set(column, value)?;
        Ok(self)
    }

    /// Set an optional column value (None => skip).
    pub fn set_opt<T>(&mut self, column: &Column, value: Option<T>) -> QbResult<&mut Self>
    where
        T: Into<Value>,
    {
        if let Some(v) = value {
            self.set(column, v)?;
        }
        Ok(self)
    }

    pub fn assignments(&self) -> &AssignmentAccumulator {
        &self.assignments
    }
}

impl SqlBuilder for InsertBuilder {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    fn validate(&self) -> QbResult<()> {
        if self.assignments.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(table = self.table.name(), "rejecting INSERT without columns");
            return Err(QbError::invalid_operation(format!(
                "InsertBuilder: no columns to insert into {}",
                self.table.name()
            )));
        }
        Ok(())
    }

    fn write_sql(&self, w: &mut SqlWriter) {
        w.push("INSERT INTO ");
        w.push(self.table.name());
        w.push(" (");
        w.push_separated(self.assignments.columns(), ",", |w, c| {
            w.push(&c.render(ColumnStyle::Bare));
        });
        w.push(") VALUES (");
        w.push_separated(self.assignments.values(), ",", |w, v| {
            w.push_bind(v.clone());
        });
        w.push(")");
    }
}

use super::predicate::PredicateBuilder;
use super::traits::{SqlBuilder, StatementKind};
use crate::config::{PlaceholderStyle, QbConfig};
use crate::model::{Column, ColumnStyle, Condition, Operand, Table};
use crate::writer::SqlWriter;

/// DELETE builder.
///
/// Without conditions this deletes every row of the table.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    /// Target table
    table: Table,
    /// Placeholder style
    style: PlaceholderStyle,
    /// WHERE conditions
    predicate: PredicateBuilder,
}

impl DeleteBuilder {
    pub fn new(table: Table) -> Self {
        Self::with_config(table, &QbConfig::default())
    }

    pub fn with_config(table: Table, config: &QbConfig) -> Self {
        Self {
            table,
            style: config.placeholder,
            predicate: PredicateBuilder::where_clause(ColumnStyle::Bare),
        }
    }

    // ==================== Conditions (delegated to PredicateBuilder) ====================

    /// Add WHERE: `column = value`.
    pub fn where_eq(&mut self, column: &Column, value: impl Into<Operand>) -> &mut Self {
        self.predicate.add(column, value);
        self
    }

    pub fn and(&mut self, condition: Condition) -> &mut Self {
        self.predicate.add_condition(condition);
        self
    }

    pub fn and_where<I>(&mut self, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.predicate.add_conditions(conditions);
        self
    }
}

impl SqlBuilder for DeleteBuilder {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    fn write_sql(&self, w: &mut SqlWriter) {
        w.push("DELETE FROM ");
        w.push(self.table.name());

        if !self.predicate.is_empty() {
            w.push(" ");
            self.predicate.write_to(w);
        }
    }
}

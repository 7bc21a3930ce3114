use super::condition::{Condition, Operand, Operator};
use super::order::{Direction, OrderEntry};
use super::table::Table;
use std::sync::Arc;

/// How a column reference is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStyle {
    /// `FIELD` (single unaliased table: UPDATE, DELETE, INSERT).
    Bare,
    /// `alias.FIELD` (SELECT and JOIN ... ON).
    Aliased,
}

/// A column of a [`Table`].
///
/// Equality is `(field, table)`, so `p.NAME` and `q.NAME` of a self-join are
/// different columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    field: Arc<str>,
    table: Table,
}

impl Column {
    pub fn new(field: &str, table: Table) -> Self {
        Self {
            field: Arc::from(field),
            table,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn alias(&self) -> &str {
        self.table.alias()
    }

    /// `alias.FIELD`
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.table.alias(), self.field)
    }

    pub fn render(&self, style: ColumnStyle) -> String {
        match style {
            ColumnStyle::Bare => self.field.to_string(),
            ColumnStyle::Aliased => self.qualified(),
        }
    }

    // ==================== Conditions ====================

    /// Build a condition with an arbitrary operator.
    pub fn custom(&self, op: Operator, operand: impl Into<Operand>) -> Condition {
        Condition::new(self.clone(), op, operand.into())
    }

    /// `col = operand`
    pub fn eq(&self, operand: impl Into<Operand>) -> Condition {
        self.custom(Operator::Eq, operand)
    }

    /// `col <> operand`
    pub fn ne(&self, operand: impl Into<Operand>) -> Condition {
        self.custom(Operator::Ne, operand)
    }

    /// `col < operand`
    pub fn lt(&self, operand: impl Into<Operand>) -> Condition {
        self.custom(Operator::Lt, operand)
    }

    /// `col <= operand`
    pub fn le(&self, operand: impl Into<Operand>) -> Condition {
        self.custom(Operator::Le, operand)
    }

    /// `col > operand`
    pub fn gt(&self, operand: impl Into<Operand>) -> Condition {
        self.custom(Operator::Gt, operand)
    }

    /// `col >= operand`
    pub fn ge(&self, operand: impl Into<Operand>) -> Condition {
        self.custom(Operator::Ge, operand)
    }

    /// `col LIKE operand`
    pub fn like(&self, operand: impl Into<Operand>) -> Condition {
        self.custom(Operator::Like, operand)
    }

    /// `col NOT LIKE operand`
    pub fn not_like(&self, operand: impl Into<Operand>) -> Condition {
        self.custom(Operator::NotLike, operand)
    }

    // ==================== Ordering ====================

    pub fn order(&self, direction: Direction) -> OrderEntry {
        OrderEntry::new(self.clone(), direction)
    }

    pub fn asc(&self) -> OrderEntry {
        self.order(Direction::Asc)
    }

    pub fn desc(&self) -> OrderEntry {
        self.order(Direction::Desc)
    }
}

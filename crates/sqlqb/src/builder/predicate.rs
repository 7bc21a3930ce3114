//! Shared predicate builder for WHERE and JOIN ... ON.

use crate::config::PlaceholderStyle;
use crate::model::{Column, ColumnStyle, Condition, Operand, Operator};
use crate::query::SqlQuery;
use crate::writer::SqlWriter;

/// Which clause a predicate renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// `WHERE a AND b`
    Where,
    /// `ON (a AND b)`
    On,
}

/// Reusable predicate builder.
///
/// Conditions are ANDed together in the order they were added. The column
/// style is fixed at construction: SELECT and JOIN use `alias.FIELD`,
/// UPDATE and DELETE use the bare `FIELD`.
#[derive(Debug, Clone)]
pub struct PredicateBuilder {
    kind: ClauseKind,
    style: ColumnStyle,
    conditions: Vec<Condition>,
}

impl PredicateBuilder {
    pub fn new(kind: ClauseKind, style: ColumnStyle) -> Self {
        Self {
            kind,
            style,
            conditions: Vec::new(),
        }
    }

    /// A `WHERE` predicate rendering columns with `style`.
    pub fn where_clause(style: ColumnStyle) -> Self {
        Self::new(ClauseKind::Where, style)
    }

    /// An `ON (...)` predicate; join conditions always use aliases.
    pub fn on_clause() -> Self {
        Self::new(ClauseKind::On, ColumnStyle::Aliased)
    }

    pub fn kind(&self) -> ClauseKind {
        self.kind
    }

    pub fn style(&self) -> ColumnStyle {
        self.style
    }

    /// Check if any conditions have been added.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Add an equality condition: `column = value`.
    pub fn add(&mut self, column: &Column, value: impl Into<Operand>) -> &mut Self {
        self.add_condition(Condition::new(column.clone(), Operator::Eq, value.into()))
    }

    pub fn add_condition(&mut self, condition: Condition) -> &mut Self {
        self.conditions.push(condition);
        self
    }

    /// Add conditions verbatim, keeping their order.
    pub fn add_conditions<I>(&mut self, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.conditions.extend(conditions);
        self
    }

    /// Render into a shared writer. Writes nothing when empty.
    pub fn write_to(&self, w: &mut SqlWriter) {
        if self.conditions.is_empty() {
            return;
        }

        let style = self.style;
        match self.kind {
            ClauseKind::Where => {
                w.push("WHERE ");
                w.push_separated(&self.conditions, " AND ", |w, c| c.write_to(w, style));
            }
            ClauseKind::On => {
                w.push("ON (");
                w.push_separated(&self.conditions, " AND ", |w, c| c.write_to(w, style));
                w.push(")");
            }
        }
    }

    /// Build the clause on its own with `?` placeholders.
    pub fn build(&self) -> SqlQuery {
        self.build_with(PlaceholderStyle::default())
    }

    pub fn build_with(&self, style: PlaceholderStyle) -> SqlQuery {
        let mut w = SqlWriter::new(style);
        self.write_to(&mut w);
        w.finish()
    }
}

use super::assign::AssignmentAccumulator;
use super::predicate::PredicateBuilder;
use super::traits::{SqlBuilder, StatementKind};
use crate::config::{PlaceholderStyle, QbConfig};
use crate::error::{QbError, QbResult};
use crate::model::{Column, ColumnStyle, Condition, Operand, Table};
use crate::value::Value;
use crate::writer::SqlWriter;

/// UPDATE builder.
///
/// An UPDATE targets one unaliased table, so WHERE columns render bare.
/// Arguments are the SET values followed by the WHERE values.
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: Table,
    style: PlaceholderStyle,
    assignments: AssignmentAccumulator,
    predicate: PredicateBuilder,
}

impl UpdateBuilder {
    pub fn new(table: Table) -> Self {
        Self::with_config(table, &QbConfig::default())
    }

    pub fn with_config(table: Table, config: &QbConfig) -> Self {
        Self {
            table,
            style: config.placeholder,
            assignments: AssignmentAccumulator::new(),
            predicate: PredicateBuilder::where_clause(ColumnStyle::Bare),
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

    // ==================== Conditions ====================

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

impl SqlBuilder for UpdateBuilder {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    fn validate(&self) -> QbResult<()> {
        if self.assignments.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(table = self.table.name(), "rejecting UPDATE without columns");
            return Err(QbError::invalid_operation(format!(
                "UpdateBuilder: no columns to update in {}",
                self.table.name()
            )));
        }
        Ok(())
    }

    fn write_sql(&self, w: &mut SqlWriter) {
        w.push("UPDATE ");
        w.push(self.table.name());
        w.push(" SET ");
        w.push_separated(self.assignments.entries(), ",", |w, (c, v)| {
            w.push(&c.render(ColumnStyle::Bare));
            w.push("=");
            w.push_bind(v.clone());
        });

        if !self.predicate.is_empty() {
            w.push(" ");
            self.predicate.write_to(w);
        }
    }
}

use super::join::{JoinAccumulator, JoinKind};
use super::order::OrderingAccumulator;
use super::predicate::PredicateBuilder;
use super::traits::{SqlBuilder, StatementKind};
use crate::config::{PlaceholderStyle, QbConfig};
use crate::model::{Column, ColumnStyle, Condition, OrderEntry, Operand, Table};
use crate::writer::SqlWriter;

/// SELECT statement builder.
///
/// Renders `SELECT[ DISTINCT] <cols> FROM <NAME alias>[ <joins>][ <where>][ <order by>]`.
/// Columns, WHERE and ON conditions are always alias-qualified.
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    /// Driving table
    table: Table,
    /// Placeholder style
    style: PlaceholderStyle,
    /// SELECT DISTINCT
    distinct: bool,
    /// Selected columns, in order, duplicates kept (empty => `*`)
    columns: Vec<Column>,
    /// JOIN clauses
    joins: JoinAccumulator,
    /// WHERE conditions
    predicate: PredicateBuilder,
    /// ORDER BY entries
    order: OrderingAccumulator,
}

impl SelectBuilder {
    pub fn new(table: Table) -> Self {
        Self::with_config(table, &QbConfig::default())
    }

    pub fn with_config(table: Table, config: &QbConfig) -> Self {
        Self {
            table,
            style: config.placeholder,
            distinct: false,
            columns: Vec::new(),
            joins: JoinAccumulator::new(),
            predicate: PredicateBuilder::where_clause(ColumnStyle::Aliased),
            order: OrderingAccumulator::new(),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// SELECT DISTINCT.
    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    // ==================== Columns ====================

    /// Append columns to the select list.
    pub fn list<'a, I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Column>,
    {
        self.columns.extend(columns.into_iter().cloned());
        self
    }

    /// Append one column to the select list.
    pub fn column(&mut self, column: &Column) -> &mut Self {
        self.columns.push(column.clone());
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    // ==================== Conditions ====================

    /// Add WHERE: `column = value`.
    pub fn where_eq(&mut self, column: &Column, value: impl Into<Operand>) -> &mut Self {
        self.predicate.add(column, value);
        self
    }

    /// Add one WHERE condition.
    pub fn and(&mut self, condition: Condition) -> &mut Self {
        self.predicate.add_condition(condition);
        self
    }

    /// Add several WHERE conditions, in order.
    pub fn and_where<I>(&mut self, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.predicate.add_conditions(conditions);
        self
    }

    // ==================== Joins ====================

    /// Join `table` on `conditions`. Ignored if `table` is already joined.
    pub fn join<I>(&mut self, table: &Table, kind: JoinKind, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.joins.add(table, kind, conditions);
        self
    }

    pub fn inner_join<I>(&mut self, table: &Table, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.join(table, JoinKind::Inner, conditions)
    }

    pub fn left_join<I>(&mut self, table: &Table, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.join(table, JoinKind::Left, conditions)
    }

    pub fn right_join<I>(&mut self, table: &Table, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.join(table, JoinKind::Right, conditions)
    }

    pub fn full_join<I>(&mut self, table: &Table, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.join(table, JoinKind::Full, conditions)
    }

    pub fn full_outer_join<I>(&mut self, table: &Table, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.join(table, JoinKind::FullOuter, conditions)
    }

    // ==================== Ordering ====================

    /// Add ORDER BY entries. A column keeps the first direction it was given.
    pub fn order_by<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = OrderEntry>,
    {
        self.order.add(entries);
        self
    }
}

impl SqlBuilder for SelectBuilder {
    fn statement_kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    fn write_sql(&self, w: &mut SqlWriter) {
        w.push(if self.distinct { "SELECT DISTINCT " } else { "SELECT " });

        if self.columns.is_empty() {
            w.push("*");
        } else {
            w.push_separated(&self.columns, ",", |w, c| {
                w.push(&c.render(ColumnStyle::Aliased));
            });
        }

        w.push(" FROM ");
        w.push(&self.table.name_with_alias());

        // Join arguments precede WHERE arguments.
        if !self.joins.is_empty() {
            w.push(" ");
            self.joins.write_to(w);
        }

        if !self.predicate.is_empty() {
            w.push(" ");
            self.predicate.write_to(w);
        }

        if !self.order.is_empty() {
            w.push(" ");
            self.order.write_to(w);
        }
    }
}

use super::predicate::PredicateBuilder;
use crate::config::PlaceholderStyle;
use crate::model::{Condition, Table};
use crate::query::SqlQuery;
use crate::writer::SqlWriter;

/// JOIN flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    FullOuter,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
            JoinKind::FullOuter => "FULL OUTER JOIN",
        }
    }
}

/// One joined table with its ON predicate. Identity is the table alone.
#[derive(Debug, Clone)]
pub struct JoinSpec {
    table: Table,
    kind: JoinKind,
    on: PredicateBuilder,
}

impl JoinSpec {
    pub fn new<I>(table: Table, kind: JoinKind, conditions: I) -> Self
    where
        I: IntoIterator<Item = Condition>,
    {
        let mut on = PredicateBuilder::on_clause();
        on.add_conditions(conditions);
        Self { table, kind, on }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    pub fn on(&self) -> &PredicateBuilder {
        &self.on
    }

    /// `<KIND> <NAME alias>[ ON (...)]`
    pub fn write_to(&self, w: &mut SqlWriter) {
        w.push(self.kind.as_str());
        w.push(" ");
        w.push(&self.table.name_with_alias());
        if !self.on.is_empty() {
            w.push(" ");
            self.on.write_to(w);
        }
    }
}

impl PartialEq for JoinSpec {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl Eq for JoinSpec {}

/// Ordered set of joins keyed by target table.
///
/// Joining a table that is already joined (same name and alias) is a no-op;
/// the first registration wins. Join the same table under another alias to
/// get a second join.
#[derive(Debug, Clone, Default)]
pub struct JoinAccumulator {
    joins: Vec<JoinSpec>,
}

impl JoinAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a join. Returns `false` if the table was already joined.
    pub fn add<I>(&mut self, table: &Table, kind: JoinKind, conditions: I) -> bool
    where
        I: IntoIterator<Item = Condition>,
    {
        if self.contains(table) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                table = %table.name_with_alias(),
                kind = kind.as_str(),
                "join target already registered, ignoring"
            );
            return false;
        }
        self.joins.push(JoinSpec::new(table.clone(), kind, conditions));
        true
    }

    pub fn contains(&self, table: &Table) -> bool {
        self.joins.iter().any(|j| &j.table == table)
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn joins(&self) -> &[JoinSpec] {
        &self.joins
    }

    /// Render all joins separated by single spaces.
    pub fn write_to(&self, w: &mut SqlWriter) {
        w.push_separated(&self.joins, " ", |w, j| j.write_to(w));
    }

    /// Build the join chain on its own with `?` placeholders.
    pub fn assemble(&self) -> SqlQuery {
        self.assemble_with(PlaceholderStyle::default())
    }

    pub fn assemble_with(&self, style: PlaceholderStyle) -> SqlQuery {
        let mut w = SqlWriter::new(style);
        self.write_to(&mut w);
        w.finish()
    }
}

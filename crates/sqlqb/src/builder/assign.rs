use crate::error::{QbError, QbResult};
use crate::model::Column;
use crate::value::Value;

/// Column assignments shared by INSERT and UPDATE.
///
/// Keeps insertion order (it is the order of both the column list and the
/// arguments). Assigning a column twice is rejected, unlike joins and
/// ordering which silently keep the first entry.
#[derive(Debug, Clone, Default)]
pub struct AssignmentAccumulator {
    entries: Vec<(Column, Value)>,
}

impl AssignmentAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `column`.
    ///
    /// Fails with [`QbError::DuplicateArgument`] if the column already has a
    /// value; the accumulator is left untouched in that case.
    pub fn set(&mut self, column: &Column, value: impl Into<Value>) -> QbResult<()> {
        if self.contains(column) {
            let name = format!("{} {}", column.table().name(), column.qualified());
            #[cfg(feature = "tracing")]
            tracing::debug!(column = %name, "rejecting duplicate assignment");
            return Err(QbError::duplicate_argument(name));
        }
        self.entries.push((column.clone(), value.into()));
        Ok(())
    }

    pub fn contains(&self, column: &Column) -> bool {
        self.entries.iter().any(|(c, _)| c == column)
    }

    pub fn get(&self, column: &Column) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn entries(&self) -> &[(Column, Value)] {
        &self.entries
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.entries.iter().map(|(c, _)| c)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

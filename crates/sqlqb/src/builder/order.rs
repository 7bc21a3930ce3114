use crate::model::{ColumnStyle, OrderEntry};
use crate::writer::SqlWriter;

/// Ordered set of `ORDER BY` entries keyed by column.
///
/// The first direction registered for a column wins; later entries for the
/// same column are dropped, whether they arrive in the same call or later.
#[derive(Debug, Clone, Default)]
pub struct OrderingAccumulator {
    entries: Vec<OrderEntry>,
}

impl OrderingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = OrderEntry>,
    {
        for entry in entries {
            if self.entries.contains(&entry) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    column = %entry.column().qualified(),
                    direction = entry.direction().as_str(),
                    "column already ordered, ignoring"
                );
                continue;
            }
            self.entries.push(entry);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    pub fn write_to(&self, w: &mut SqlWriter) {
        w.push(&self.build());
    }

    /// `ORDER BY a ASC,b DESC`, or `""` when empty. Never binds arguments.
    pub fn build(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let cols: Vec<String> = self
            .entries
            .iter()
            .map(|e| e.render(ColumnStyle::Aliased))
            .collect();
        format!("ORDER BY {}", cols.join(","))
    }
}

use crate::config::PlaceholderStyle;
use crate::error::QbResult;
use crate::query::SqlQuery;
use crate::writer::SqlWriter;

/// Statement kind, used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        })
    }
}

/// Base trait for statement builders.
pub trait SqlBuilder {
    fn statement_kind(&self) -> StatementKind;

    /// Placeholder style used by [`build`](Self::build).
    fn placeholder_style(&self) -> PlaceholderStyle;

    /// Render the statement into `w`. Called only after `validate` succeeds.
    fn write_sql(&self, w: &mut SqlWriter);

    /// Validate builder state.
    fn validate(&self) -> QbResult<()> {
        Ok(())
    }

    /// Validate and build the statement.
    ///
    /// Building does not consume or change the builder; calling it twice
    /// without mutation in between yields identical results.
    fn build(&self) -> QbResult<SqlQuery> {
        self.validate()?;
        let mut w = SqlWriter::new(self.placeholder_style());
        self.write_sql(&mut w);
        let query = w.finish();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            statement = %self.statement_kind(),
            sql = %query.sql(),
            args = query.args().len(),
            "built statement"
        );

        Ok(query)
    }

    /// Debug helper.
    fn to_sql(&self) -> QbResult<String> {
        Ok(self.build()?.into_parts().0)
    }
}

//! SQL text + argument buffer.
//!
//! Every clause renders into a [`SqlWriter`] instead of formatting its own
//! placeholders. The writer appends the placeholder and the argument in the
//! same call, so the placeholder order in the text always matches the order
//! of the argument list, and numbered placeholders keep counting across the
//! clauses of one statement.

use crate::config::PlaceholderStyle;
use crate::query::SqlQuery;
use crate::value::Value;

/// Accumulates SQL text and its bound arguments.
#[derive(Debug, Clone, Default)]
pub struct SqlWriter {
    sql: String,
    args: Vec<Value>,
    style: PlaceholderStyle,
}

impl SqlWriter {
    /// Create an empty writer with the given placeholder style.
    pub fn new(style: PlaceholderStyle) -> Self {
        Self {
            sql: String::new(),
            args: Vec::new(),
            style,
        }
    }

    /// Placeholder style in use.
    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Append raw SQL (no arguments).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Append a placeholder and bind its value.
    pub fn push_bind(&mut self, value: Value) -> &mut Self {
        self.args.push(value);
        let placeholder = self.style.placeholder(self.args.len());
        self.sql.push_str(&placeholder);
        self
    }

    /// Append `items` separated by `sep`, rendering each with `f`.
    pub fn push_separated<I, F>(&mut self, items: I, sep: &str, mut f: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item),
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.sql.push_str(sep);
            }
            f(self, item);
        }
        self
    }

    /// Current SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Number of arguments bound so far.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty() && self.args.is_empty()
    }

    /// Finish writing and produce the immutable query.
    pub fn finish(self) -> SqlQuery {
        SqlQuery::new(self.sql, self.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_placeholders_follow_bind_order() {
        let mut w = SqlWriter::new(PlaceholderStyle::Numbered);
        w.push("a = ").push_bind(Value::from(1));
        w.push(" AND b = ").push_bind(Value::from(2));
        let q = w.finish();
        assert_eq!(q.sql(), "a = $1 AND b = $2");
        assert_eq!(q.args(), &[Value::from(1), Value::from(2)]);
    }

    #[test]
    fn separated() {
        let mut w = SqlWriter::new(PlaceholderStyle::Question);
        w.push_separated(["x", "y", "z"], ",", |w, col| {
            w.push(col);
        });
        assert_eq!(w.sql(), "x,y,z");
        assert_eq!(w.arg_count(), 0);
    }
}

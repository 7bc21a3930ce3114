//! Comparison conditions used by WHERE and JOIN ... ON.

use super::column::{Column, ColumnStyle};
use crate::value::Value;
use crate::writer::SqlWriter;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Like,
    NotLike,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        }
    }
}

/// Right-hand side of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Bound literal, rendered as a placeholder.
    Value(Value),
    /// Another column, rendered inline with no argument.
    Column(Column),
}

impl From<Column> for Operand {
    fn from(c: Column) -> Self {
        Operand::Column(c)
    }
}

impl From<&Column> for Operand {
    fn from(c: &Column) -> Self {
        Operand::Column(c.clone())
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        Operand::Value(v.into())
    }
}

macro_rules! operand_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(v: $ty) -> Self {
                    Operand::Value(Value::from(v))
                }
            }
        )*
    };
}

operand_from_value!(
    bool,
    i16,
    i32,
    i64,
    f32,
    f64,
    String,
    &str,
    &String,
    Vec<u8>,
    &[u8],
    Uuid,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
    serde_json::Value,
);

/// `column OP operand`.
///
/// Rendering is pure: the bound value (if any) is written straight into the
/// writer, nothing is cached on the condition, so one condition can be
/// shared by any number of builders and builds.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    column: Column,
    op: Operator,
    operand: Operand,
}

impl Condition {
    pub fn new(column: Column, op: Operator, operand: Operand) -> Self {
        Self { column, op, operand }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn operator(&self) -> Operator {
        self.op
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Arguments this condition contributes when rendered (zero or one).
    pub fn values(&self) -> &[Value] {
        match &self.operand {
            Operand::Value(v) => std::slice::from_ref(v),
            Operand::Column(_) => &[],
        }
    }

    pub fn write_to(&self, w: &mut SqlWriter, style: ColumnStyle) {
        w.push(&self.column.render(style));
        w.push(" ");
        w.push(self.op.as_str());
        w.push(" ");
        match &self.operand {
            Operand::Value(v) => {
                w.push_bind(v.clone());
            }
            Operand::Column(c) => {
                w.push(&c.render(style));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaceholderStyle;
    use crate::model::Table;

    fn render(c: &Condition, style: ColumnStyle) -> (String, Vec<Value>) {
        let mut w = SqlWriter::new(PlaceholderStyle::Question);
        c.write_to(&mut w, style);
        w.finish().into_parts()
    }

    #[test]
    fn literal_operand_binds_one_value() {
        let age = Table::new("PERSON").column("AGE");
        let cond = age.lt(20);
        assert_eq!(cond.values(), &[Value::from(20)]);
        assert_eq!(
            render(&cond, ColumnStyle::Bare),
            ("AGE < ?".to_string(), vec![Value::from(20)])
        );
    }

    #[test]
    fn column_operand_binds_nothing() {
        let person = Table::new("PERSON");
        let p = person.aliased("p");
        let cond = person.column("NAME").eq(&p.column("NAME"));
        assert!(cond.values().is_empty());
        assert_eq!(
            render(&cond, ColumnStyle::Aliased),
            ("person.NAME = p.NAME".to_string(), vec![])
        );
    }

    #[test]
    fn rendering_twice_is_stable() {
        let cond = Table::new("PERSON").column("NAME").not_like("A%");
        let first = render(&cond, ColumnStyle::Aliased);
        let second = render(&cond, ColumnStyle::Aliased);
        assert_eq!(first, second);
        assert_eq!(first.0, "person.NAME NOT LIKE ?");
    }

    #[test]
    fn narrow_literals_keep_their_width() {
        let age = Table::new("PERSON").column("AGE");
        assert_eq!(age.eq(5i16).values(), &[Value::SmallInt(5)]);
        assert_eq!(age.lt(1.5f32).values(), &[Value::Real(1.5)]);
    }

    #[test]
    fn equality_by_value() {
        let name = Table::new("PERSON").column("NAME");
        assert_eq!(name.eq("A"), name.eq("A"));
        assert_ne!(name.eq("A"), name.ne("A"));
        assert_ne!(name.eq("A"), name.eq("B"));
    }
}

use super::*;
use crate::config::QbConfig;
use crate::error::QbError;
use crate::model::{Column, ColumnStyle, Table};
use crate::value::Value;

struct Person {
    table: Table,
    name: Column,
    last_name: Column,
    age: Column,
}

impl Person {
    fn new() -> Self {
        Self::aliased("person")
    }

    fn aliased(alias: &str) -> Self {
        let table = Table::with_alias("PERSON", alias);
        Self {
            name: table.column("NAME"),
            last_name: table.column("LAST_NAME"),
            age: table.column("AGE"),
            table,
        }
    }
}

fn text(s: &str) -> Value {
    Value::from(s)
}

// ==================== PredicateBuilder Tests ====================

#[test]
fn test_predicate_empty() {
    let pb = PredicateBuilder::where_clause(ColumnStyle::Aliased);
    let q = pb.build();
    assert_eq!(q.sql(), "");
    assert!(q.args().is_empty());
}

#[test]
fn test_predicate_where_aliased() {
    let p = Person::new();
    let mut pb = PredicateBuilder::where_clause(ColumnStyle::Aliased);
    pb.add(&p.name, "TEST").add_condition(p.age.gt(20));
    let q = pb.build();
    assert_eq!(q.sql(), "WHERE person.NAME = ? AND person.AGE > ?");
    assert_eq!(q.args(), &[text("TEST"), Value::from(20)]);
}

#[test]
fn test_predicate_where_bare() {
    let p = Person::new();
    let mut pb = PredicateBuilder::where_clause(ColumnStyle::Bare);
    pb.add_conditions([p.age.lt(20), p.last_name.eq("TEST")]);
    let q = pb.build();
    assert_eq!(q.sql(), "WHERE AGE < ? AND LAST_NAME = ?");
    assert_eq!(q.args(), &[Value::from(20), text("TEST")]);
}

#[test]
fn test_predicate_on_clause_column_comparison() {
    let p = Person::new();
    let q = Person::aliased("q");
    let mut pb = PredicateBuilder::on_clause();
    pb.add_condition(p.name.eq(&q.name)).add_condition(q.age.ge(18));
    let built = pb.build();
    assert_eq!(built.sql(), "ON (person.NAME = q.NAME AND q.AGE >= ?)");
    assert_eq!(built.args(), &[Value::from(18)]);
}

#[test]
fn test_predicate_build_is_idempotent() {
    let p = Person::new();
    let mut pb = PredicateBuilder::where_clause(ColumnStyle::Aliased);
    pb.add_conditions([p.name.like("A%"), p.age.ne(3)]);
    assert_eq!(pb.build(), pb.build());
}

#[test]
fn test_predicate_shared_condition() {
    let p = Person::new();
    let cond = p.age.lt(20);
    let mut a = PredicateBuilder::where_clause(ColumnStyle::Aliased);
    let mut b = PredicateBuilder::where_clause(ColumnStyle::Bare);
    a.add_condition(cond.clone());
    b.add_condition(cond);
    b.add(&p.name, "X");
    assert_eq!(a.build().args(), &[Value::from(20)]);
    assert_eq!(b.build().args(), &[Value::from(20), text("X")]);
}

// ==================== JoinAccumulator Tests ====================

#[test]
fn test_join_empty() {
    let joins = JoinAccumulator::new();
    let q = joins.assemble();
    assert_eq!(q.sql(), "");
    assert!(q.args().is_empty());
}

#[test]
fn test_join_dedup_same_alias() {
    let person = Person::new();
    let p = Person::aliased("p");
    let mut joins = JoinAccumulator::new();
    assert!(joins.add(&p.table, JoinKind::Inner, [person.name.eq(&p.name)]));
    assert!(!joins.add(&p.table, JoinKind::Left, [person.age.eq(&p.age)]));
    assert_eq!(joins.len(), 1);
    assert_eq!(
        joins.assemble().sql(),
        "INNER JOIN PERSON p ON (person.NAME = p.NAME)"
    );
}

#[test]
fn test_join_same_table_different_alias() {
    let person = Person::new();
    let p = Person::aliased("p");
    let q = Person::aliased("q");
    let mut joins = JoinAccumulator::new();
    joins.add(&p.table, JoinKind::Left, [person.name.eq(&p.name)]);
    joins.add(&q.table, JoinKind::FullOuter, [p.age.gt(30)]);
    let built = joins.assemble();
    assert_eq!(
        built.sql(),
        "LEFT JOIN PERSON p ON (person.NAME = p.NAME) FULL OUTER JOIN PERSON q ON (p.AGE > ?)"
    );
    assert_eq!(built.args(), &[Value::from(30)]);
}

#[test]
fn test_join_without_conditions() {
    let p = Person::aliased("p");
    let mut joins = JoinAccumulator::new();
    joins.add(&p.table, JoinKind::Full, Vec::new());
    assert_eq!(joins.assemble().sql(), "FULL JOIN PERSON p");
}

// ==================== OrderingAccumulator Tests ====================

#[test]
fn test_order_empty() {
    assert_eq!(OrderingAccumulator::new().build(), "");
}

#[test]
fn test_order_first_direction_wins_in_one_call() {
    let p = Person::new();
    let mut order = OrderingAccumulator::new();
    order.add([p.age.asc(), p.name.desc(), p.age.desc()]);
    assert_eq!(order.build(), "ORDER BY person.AGE ASC,person.NAME DESC");
}

#[test]
fn test_order_first_direction_wins_across_calls() {
    let p = Person::new();
    let mut order = OrderingAccumulator::new();
    order.add([p.age.desc()]).add([p.age.asc()]);
    assert_eq!(order.len(), 1);
    assert_eq!(order.build(), "ORDER BY person.AGE DESC");
}

// ==================== AssignmentAccumulator Tests ====================

#[test]
fn test_assign_keeps_order() {
    let p = Person::new();
    let mut a = AssignmentAccumulator::new();
    a.set(&p.age, 20).unwrap();
    a.set(&p.name, "Dilip").unwrap();
    let cols: Vec<&str> = a.columns().map(|c| c.field()).collect();
    assert_eq!(cols, vec!["AGE", "NAME"]);
    let vals: Vec<&Value> = a.values().collect();
    assert_eq!(vals, vec![&Value::from(20), &text("Dilip")]);
}

#[test]
fn test_assign_duplicate_rejected() {
    let p = Person::new();
    let mut a = AssignmentAccumulator::new();
    a.set(&p.name, "A").unwrap();
    let err = a.set(&p.name, "B").unwrap_err();
    assert_eq!(err, QbError::duplicate_argument("PERSON person.NAME"));
    assert_eq!(a.len(), 1);
    assert_eq!(a.get(&p.name), Some(&text("A")));
}

#[test]
fn test_assign_duplicate_names_alias() {
    let p = Person::aliased("p");
    let q = Person::aliased("q");
    let mut a = AssignmentAccumulator::new();
    a.set(&p.name, "A").unwrap();
    a.set(&q.name, "B").unwrap();
    assert_eq!(
        a.set(&p.name, "C").unwrap_err(),
        QbError::duplicate_argument("PERSON p.NAME")
    );
    assert_eq!(
        a.set(&q.name, "D").unwrap_err(),
        QbError::duplicate_argument("PERSON q.NAME")
    );
    assert_eq!(a.len(), 2);
}

// ==================== SelectBuilder Tests ====================

#[test]
fn test_select_basic() {
    let p = Person::new();
    let q = p.table.select().build().unwrap();
    assert_eq!(q.sql(), "SELECT * FROM PERSON person");
    assert!(q.args().is_empty());
}

#[test]
fn test_select_multiple_where() {
    let p = Person::new();
    let mut sb = p.table.select();
    sb.and_where([p.name.eq("TEST1"), p.last_name.like("TEST2")])
        .and(p.age.lt(20));
    let q = sb.build().unwrap();
    assert_eq!(
        q.sql(),
        "SELECT * FROM PERSON person WHERE person.NAME = ? AND person.LAST_NAME LIKE ? AND person.AGE < ?"
    );
    assert_eq!(q.args(), &[text("TEST1"), text("TEST2"), Value::from(20)]);
}

#[test]
fn test_select_list_keeps_duplicates() {
    let p = Person::new();
    let mut sb = p.table.select();
    sb.list([&p.name]).list([&p.age, &p.name]);
    assert_eq!(
        sb.to_sql().unwrap(),
        "SELECT person.NAME,person.AGE,person.NAME FROM PERSON person"
    );
}

#[test]
fn test_select_empty_list() {
    let p = Person::new();
    let mut sb = p.table.select();
    sb.list(std::iter::empty::<&Column>()).order_by(Vec::new());
    assert_eq!(sb.to_sql().unwrap(), "SELECT * FROM PERSON person");
}

#[test]
fn test_select_distinct_order() {
    let p = Person::new();
    let mut sb = p.table.select();
    sb.column(&p.name)
        .list([&p.age, &p.last_name])
        .where_eq(&p.name, "TEST")
        .order_by([p.name.desc()])
        .distinct();
    let q = sb.build().unwrap();
    assert_eq!(
        q.sql(),
        "SELECT DISTINCT person.NAME,person.AGE,person.LAST_NAME FROM PERSON person WHERE person.NAME = ? ORDER BY person.NAME DESC"
    );
    assert_eq!(q.args(), &[text("TEST")]);
}

#[test]
fn test_select_join_args_before_where_args() {
    let person = Person::new();
    let p = Person::aliased("p");
    let mut sb = person.table.select();
    sb.and(person.name.eq("W"))
        .inner_join(&p.table, [person.name.eq(&p.name), p.age.gt(18)]);
    let q = sb.build().unwrap();
    assert_eq!(
        q.sql(),
        "SELECT * FROM PERSON person INNER JOIN PERSON p ON (person.NAME = p.NAME AND p.AGE > ?) WHERE person.NAME = ?"
    );
    assert_eq!(q.args(), &[Value::from(18), text("W")]);
}

#[test]
fn test_select_numbered_placeholders() {
    let person = Person::new();
    let p = Person::aliased("p");
    let mut sb = person.table.select_with(&QbConfig::postgres());
    sb.left_join(&p.table, [p.age.gt(18)])
        .and_where([person.name.eq("A"), person.age.le(60)]);
    assert_eq!(
        sb.to_sql().unwrap(),
        "SELECT * FROM PERSON person LEFT JOIN PERSON p ON (p.AGE > $1) WHERE person.NAME = $2 AND person.AGE <= $3"
    );
}

#[test]
fn test_select_build_twice() {
    let person = Person::new();
    let p = Person::aliased("p");
    let mut sb = person.table.select();
    sb.right_join(&p.table, [p.name.eq("x")]).and(person.age.ge(1));
    assert_eq!(sb.build().unwrap(), sb.build().unwrap());
}

// ==================== InsertBuilder Tests ====================

#[test]
fn test_insert_basic() {
    let p = Person::new();
    let mut ib = p.table.insert();
    ib.set(&p.name, "Dilip").unwrap().set(&p.age, 20).unwrap();
    let q = ib.build().unwrap();
    assert_eq!(q.sql(), "INSERT INTO PERSON (NAME,AGE) VALUES (?,?)");
    assert_eq!(q.args(), &[text("Dilip"), Value::from(20)]);
}

#[test]
fn test_insert_set_opt_skips_none() {
    let p = Person::new();
    let mut ib = p.table.insert_with(&QbConfig::postgres());
    ib.set_opt(&p.name, Some("A"))
        .unwrap()
        .set_opt(&p.age, None::<i32>)
        .unwrap()
        .set(&p.last_name, "B")
        .unwrap();
    assert_eq!(
        ib.to_sql().unwrap(),
        "INSERT INTO PERSON (NAME,LAST_NAME) VALUES ($1,$2)"
    );
}

#[test]
fn test_insert_empty_rejected() {
    let p = Person::new();
    let err = p.table.insert().build().unwrap_err();
    assert!(err.is_invalid_operation());
}

#[test]
fn test_insert_duplicate_rejected() {
    let p = Person::new();
    let mut ib = p.table.insert();
    ib.set(&p.name, "TEST").unwrap();
    assert!(ib.set(&p.name, "TEST2").unwrap_err().is_duplicate_argument());
    assert_eq!(ib.build().unwrap().args(), &[text("TEST")]);
}

// ==================== UpdateBuilder Tests ====================

#[test]
fn test_update_without_where() {
    let p = Person::new();
    let mut ub = p.table.update();
    ub.set(&p.name, "Dilip").unwrap().set(&p.age, 23).unwrap();
    let q = ub.build().unwrap();
    assert_eq!(q.sql(), "UPDATE PERSON SET NAME=?,AGE=?");
    assert_eq!(q.args(), &[text("Dilip"), Value::from(23)]);
}

#[test]
fn test_update_multiple_where() {
    let p = Person::new();
    let mut ub = p.table.update();
    ub.set(&p.name, "Dilip").unwrap().set(&p.age, 23).unwrap();
    ub.and(p.age.lt(20)).where_eq(&p.last_name, "TEST");
    let q = ub.build().unwrap();
    assert_eq!(
        q.sql(),
        "UPDATE PERSON SET NAME=?,AGE=? WHERE AGE < ? AND LAST_NAME = ?"
    );
    assert_eq!(
        q.args(),
        &[text("Dilip"), Value::from(23), Value::from(20), text("TEST")]
    );
}

#[test]
fn test_update_numbered_continues_after_set() {
    let p = Person::new();
    let mut ub = p.table.update_with(&QbConfig::postgres());
    ub.set(&p.name, "A").unwrap();
    ub.and(p.age.lt(20));
    assert_eq!(ub.to_sql().unwrap(), "UPDATE PERSON SET NAME=$1 WHERE AGE < $2");
}

#[test]
fn test_update_empty_rejected() {
    let p = Person::new();
    let mut ub = p.table.update();
    ub.and(p.age.lt(20));
    assert!(ub.build().unwrap_err().is_invalid_operation());
}

// ==================== DeleteBuilder Tests ====================

#[test]
fn test_delete_all() {
    let p = Person::new();
    let q = p.table.delete().build().unwrap();
    assert_eq!(q.sql(), "DELETE FROM PERSON");
    assert!(q.args().is_empty());
}

#[test]
fn test_delete_with_where() {
    let p = Person::new();
    let mut db = p.table.delete();
    db.and(p.name.eq("TEST")).and(p.age.ge(&p.age));
    let q = db.build().unwrap();
    assert_eq!(q.sql(), "DELETE FROM PERSON WHERE NAME = ? AND AGE >= AGE");
    assert_eq!(q.args(), &[text("TEST")]);
}

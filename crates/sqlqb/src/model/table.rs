use super::column::Column;
use crate::builder::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};
use crate::config::QbConfig;
use std::sync::Arc;

/// Database table handle.
///
/// Identity is the `(name, alias)` pair: the same table name joined under two
/// aliases is two different tables as far as the builders are concerned.
/// Cloning is cheap and a table owns no builder state.
///
/// # Example
///
/// ```rust
/// use sqlqb::{SqlBuilder, Table};
///
/// let person = Table::new("PERSON");
/// let name = person.column("NAME");
///
/// let mut select = person.select();
/// select.and(name.eq("TEST"));
/// let query = select.build()?;
/// assert_eq!(query.sql(), "SELECT * FROM PERSON person WHERE person.NAME = ?");
/// # Ok::<(), sqlqb::QbError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: Arc<str>,
    alias: Arc<str>,
}

impl Table {
    /// Create a table whose alias is the lower-cased table name.
    pub fn new(name: &str) -> Self {
        Self::with_alias(name, &name.to_lowercase())
    }

    /// Create a table with an explicit alias.
    pub fn with_alias(name: &str, alias: &str) -> Self {
        Self {
            name: Arc::from(name),
            alias: Arc::from(alias),
        }
    }

    /// Same table, different alias (for self-joins).
    pub fn aliased(&self, alias: &str) -> Self {
        Self {
            name: Arc::clone(&self.name),
            alias: Arc::from(alias),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// `NAME alias`, as used in FROM and JOIN.
    pub fn name_with_alias(&self) -> String {
        format!("{} {}", self.name, self.alias)
    }

    pub fn render(&self, with_alias: bool) -> String {
        if with_alias {
            self.name_with_alias()
        } else {
            self.name.to_string()
        }
    }

    /// Declare a column of this table.
    pub fn column(&self, field: &str) -> Column {
        Column::new(field, self.clone())
    }

    pub fn select(&self) -> SelectBuilder {
        SelectBuilder::new(self.clone())
    }

    pub fn select_with(&self, config: &QbConfig) -> SelectBuilder {
        SelectBuilder::with_config(self.clone(), config)
    }

    pub fn insert(&self) -> InsertBuilder {
        InsertBuilder::new(self.clone())
    }

    pub fn insert_with(&self, config: &QbConfig) -> InsertBuilder {
        InsertBuilder::with_config(self.clone(), config)
    }

    pub fn update(&self) -> UpdateBuilder {
        UpdateBuilder::new(self.clone())
    }

    pub fn update_with(&self, config: &QbConfig) -> UpdateBuilder {
        UpdateBuilder::with_config(self.clone(), config)
    }

    pub fn delete(&self) -> DeleteBuilder {
        DeleteBuilder::new(self.clone())
    }

    pub fn delete_with(&self, config: &QbConfig) -> DeleteBuilder {
        DeleteBuilder::with_config(self.clone(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alias_is_lowercase_name() {
        let t = Table::new("PERSON");
        assert_eq!(t.alias(), "person");
        assert_eq!(t.name_with_alias(), "PERSON person");
        assert_eq!(t.render(false), "PERSON");
    }

    #[test]
    fn identity_is_name_and_alias() {
        let p = Table::with_alias("PERSON", "p");
        assert_eq!(p, Table::new("PERSON").aliased("p"));
        assert_ne!(p, Table::with_alias("PERSON", "q"));
        assert_ne!(p, Table::with_alias("ORDERS", "p"));
    }
}

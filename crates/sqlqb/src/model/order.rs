use super::column::{Column, ColumnStyle};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One `ORDER BY` entry. Identity is the column alone.
#[derive(Debug, Clone)]
pub struct OrderEntry {
    column: Column,
    direction: Direction,
}

impl OrderEntry {
    pub fn new(column: Column, direction: Direction) -> Self {
        Self { column, direction }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn render(&self, style: ColumnStyle) -> String {
        format!("{} {}", self.column.render(style), self.direction.as_str())
    }
}

// One column can only be ordered once.
impl PartialEq for OrderEntry {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column
    }
}

impl Eq for OrderEntry {}

impl std::hash::Hash for OrderEntry {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.column.hash(state);
    }
}

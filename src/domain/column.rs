use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a board column (e.g., `backlog`, `todo`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lane on the board. Columns are fixed for the lifetime of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Opaque style token handed through to the renderer
    #[serde(default)]
    pub accent: String,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
            accent: String::new(),
        }
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = accent.into();
        self
    }
}

/// The four lanes the board ships with, in display order
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("backlog", "Backlog").with_accent("yellow"),
        Column::new("todo", "TODO").with_accent("blue"),
        Column::new("doing", "In progress").with_accent("orange"),
        Column::new("done", "Complete").with_accent("red"),
    ]
}

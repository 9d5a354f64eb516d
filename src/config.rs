use crate::{
    dnd::DEFAULT_DROP_OFFSET,
    domain::{default_columns, default_seed, Card, CardId, Column, ColumnId},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

/// Board configuration: the fixed column set, resolver tuning and the
/// cards a fresh board starts with.
///
/// Fields missing from a JSON config take the built-in defaults, except
/// `seed`, which is empty unless given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_columns")]
    pub columns: Vec<Column>,
    #[serde(default = "default_drop_offset")]
    pub drop_offset: f32,
    #[serde(default)]
    pub seed: Vec<Card>,
}

fn default_name() -> String {
    "Kanban Board".to_string()
}

fn default_drop_offset() -> f32 {
    DEFAULT_DROP_OFFSET
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            columns: default_columns(),
            drop_offset: DEFAULT_DROP_OFFSET,
            seed: default_seed(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON config
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(BoardError::ConfigError(
                "board needs at least one column".to_string(),
            ));
        }

        let mut column_ids = HashSet::new();
        for column in &self.columns {
            if !column_ids.insert(&column.id) {
                return Err(BoardError::DuplicateColumn(column.id.to_string()));
            }
        }

        if !self.drop_offset.is_finite() || self.drop_offset < 0.0 {
            return Err(BoardError::ConfigError(format!(
                "drop_offset must be a non-negative number, got {}",
                self.drop_offset
            )));
        }

        let mut card_ids = HashSet::new();
        for card in &self.seed {
            if card.id.as_str().parse::<CardId>().is_err() {
                return Err(BoardError::InvalidCardId(card.id.to_string()));
            }
            if !card_ids.insert(&card.id) {
                return Err(BoardError::DuplicateCard(card.id.to_string()));
            }
            if card.title.trim().is_empty() {
                return Err(BoardError::EmptyTitle);
            }
            if !column_ids.contains(&card.column) {
                return Err(BoardError::UnknownColumn(card.column.to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns.len(), 4);
        assert_eq!(config.seed.len(), 10);
        assert_eq!(config.drop_offset, 50.0);
    }

    #[test]
    fn test_empty_json_uses_defaults_without_seed() {
        let config = BoardConfig::from_json_str("{}").unwrap();
        assert_eq!(config.columns, default_columns());
        assert_eq!(config.drop_offset, DEFAULT_DROP_OFFSET);
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_custom_columns_and_seed() {
        let json = r#"{
            "name": "Release",
            "columns": [
                {"id": "open", "title": "Open", "accent": "green"},
                {"id": "shipped", "title": "Shipped"}
            ],
            "drop_offset": 24,
            "seed": [
                {"id": "a", "title": "Tag release", "column": "open"}
            ]
        }"#;

        let config = BoardConfig::from_json_str(json).unwrap();
        assert_eq!(config.name, "Release");
        assert_eq!(config.drop_offset, 24.0);
        assert_eq!(config.column(&ColumnId::from("shipped")).unwrap().title, "Shipped");
        assert_eq!(config.seed[0].column.as_str(), "open");
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let json = r#"{"columns": [{"id": "a", "title": "A"}, {"id": "a", "title": "B"}]}"#;
        assert!(matches!(
            BoardConfig::from_json_str(json),
            Err(BoardError::DuplicateColumn(id)) if id == "a"
        ));
    }

    #[test]
    fn test_rejects_no_columns() {
        assert!(matches!(
            BoardConfig::from_json_str(r#"{"columns": []}"#),
            Err(BoardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rejects_negative_offset() {
        assert!(matches!(
            BoardConfig::from_json_str(r#"{"drop_offset": -1}"#),
            Err(BoardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_rejects_seed_in_unknown_column() {
        let json = r#"{"seed": [{"id": "1", "title": "Lost", "column": "nowhere"}]}"#;
        assert!(matches!(
            BoardConfig::from_json_str(json),
            Err(BoardError::UnknownColumn(col)) if col == "nowhere"
        ));
    }

    #[test]
    fn test_rejects_bad_seed_cards() {
        let dup = r#"{"seed": [
            {"id": "1", "title": "A", "column": "todo"},
            {"id": "1", "title": "B", "column": "todo"}
        ]}"#;
        assert!(matches!(
            BoardConfig::from_json_str(dup),
            Err(BoardError::DuplicateCard(_))
        ));

        let blank = r#"{"seed": [{"id": "1", "title": "  ", "column": "todo"}]}"#;
        assert!(matches!(
            BoardConfig::from_json_str(blank),
            Err(BoardError::EmptyTitle)
        ));

        let sentinel = r#"{"seed": [{"id": "-1", "title": "A", "column": "todo"}]}"#;
        assert!(matches!(
            BoardConfig::from_json_str(sentinel),
            Err(BoardError::InvalidCardId(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BoardConfig::from_json_str("{not json"),
            Err(BoardError::SerializationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "From disk", "drop_offset": 30}}"#).unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.name, "From disk");
        assert_eq!(config.drop_offset, 30.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = BoardConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(BoardError::IoError(_))));
    }
}

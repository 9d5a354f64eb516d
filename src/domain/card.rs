use crate::{
    domain::{column::ColumnId, store::CardStore},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a card
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wire form of the tail sentinel; never a valid card id
    pub const TAIL_SENTINEL: &'static str = "-1";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = BoardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() || s == Self::TAIL_SENTINEL {
            return Err(BoardError::InvalidCardId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single work item on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column: ColumnId,
}

impl Card {
    pub fn new(id: CardId, title: impl Into<String>, column: ColumnId) -> Self {
        Self {
            id,
            title: title.into(),
            column,
        }
    }

    /// Returns a copy of this card relabelled to `column`
    pub fn with_column(&self, column: ColumnId) -> Self {
        Self {
            column,
            ..self.clone()
        }
    }
}

/// Per-column "Add card" form.
///
/// Validation happens here, before the store is touched: the store
/// appends whatever it is given.
#[derive(Debug, Clone)]
pub struct NewCardForm {
    pub column: ColumnId,
    pub text: String,
    pub open: bool,
}

impl NewCardForm {
    pub fn new(column: ColumnId) -> Self {
        Self {
            column,
            text: String::new(),
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns the trimmed title, rejecting blank input
    pub fn validated_title(&self) -> Result<String> {
        let title = self.text.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        Ok(title.to_string())
    }

    /// Appends a new card to `store` and closes the form.
    ///
    /// On a blank title the form stays open and the store is not touched.
    pub fn submit(&mut self, store: &CardStore) -> Result<CardStore> {
        let title = self.validated_title()?;
        let updated = store.add_card(&self.column, title);
        self.text.clear();
        self.close();
        Ok(updated)
    }
}

use crate::{
    domain::{
        card::{Card, CardId},
        column::ColumnId,
    },
    error::BoardError,
};
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};
use tracing::debug;

/// Where a moved card lands: immediately before another card, or at
/// the end of the store.
///
/// Serializes as the card id, or `"-1"` for the tail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Placement {
    Before(CardId),
    Tail,
}

impl Placement {
    pub fn is_tail(&self) -> bool {
        matches!(self, Self::Tail)
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Before(id) => id.as_str().to_string(),
            Placement::Tail => CardId::TAIL_SENTINEL.to_string(),
        }
    }
}

impl TryFrom<String> for Placement {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == CardId::TAIL_SENTINEL {
            return Ok(Self::Tail);
        }
        value.parse().map(Self::Before)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before(id) => write!(f, "before {}", id),
            Self::Tail => write!(f, "tail"),
        }
    }
}

/// The single ordered list of every card on the board.
///
/// A column's display order is the store order filtered by column.
/// Every operation returns a new store and leaves `self` untouched, so
/// a renderer holding an older store never sees a half-applied change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: Arc<Vec<Card>>,
}

impl CardStore {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: Arc::new(cards),
        }
    }

    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of one column, in store order
    pub fn cards_in_column(&self, column: &ColumnId) -> Vec<&Card> {
        self.cards.iter().filter(|c| &c.column == column).collect()
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Relabels card `id` to `column` and splices it in at `placement`.
    ///
    /// Unknown ids, and a `Before` target that is no longer in the store
    /// once the card has been lifted out (including the card itself),
    /// leave the store unchanged.
    pub fn move_card(&self, id: &CardId, column: &ColumnId, placement: &Placement) -> CardStore {
        let Some(card) = self.get(id) else {
            debug!(card = %id, "move of unknown card ignored");
            return self.clone();
        };
        let moved = card.with_column(column.clone());

        let mut cards: Vec<Card> = self
            .cards
            .iter()
            .filter(|c| &c.id != id)
            .cloned()
            .collect();

        match placement {
            Placement::Tail => cards.push(moved),
            Placement::Before(before) => {
                let Some(index) = cards.iter().position(|c| &c.id == before) else {
                    debug!(card = %id, before = %before, "move target not found, ignored");
                    return self.clone();
                };
                cards.insert(index, moved);
            }
        }

        Self::new(cards)
    }

    /// Drops card `id`; unknown ids leave the store unchanged
    pub fn remove_card(&self, id: &CardId) -> CardStore {
        if !self.contains(id) {
            debug!(card = %id, "removal of unknown card ignored");
            return self.clone();
        }
        Self::new(self.cards.iter().filter(|c| &c.id != id).cloned().collect())
    }

    /// Appends a new card with a freshly generated id to the end of the store
    pub fn add_card(&self, column: &ColumnId, title: impl Into<String>) -> CardStore {
        self.append(Card::new(CardId::generate(), title, column.clone()))
    }

    /// Appends `card` to the end of the store; an id already present is ignored
    pub fn append(&self, card: Card) -> CardStore {
        if self.contains(&card.id) {
            debug!(card = %card.id, "append of duplicate card ignored");
            return self.clone();
        }
        let mut cards = self.cards.as_ref().clone();
        cards.push(card);
        Self::new(cards)
    }
}

impl FromIterator<Card> for CardStore {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

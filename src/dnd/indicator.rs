use crate::domain::{CardStore, ColumnId, Placement};
use serde::{Deserialize, Serialize};

/// Insertion-point marker rendered above each card and once at the
/// bottom of every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub column: ColumnId,
    #[serde(rename = "before")]
    pub placement: Placement,
    #[serde(default)]
    pub highlighted: bool,
}

impl Indicator {
    pub fn new(column: ColumnId, placement: Placement) -> Self {
        Self {
            column,
            placement,
            highlighted: false,
        }
    }

    pub fn is_tail(&self) -> bool {
        self.placement.is_tail()
    }
}

/// Indicators of `column` in display order: one before each card, then
/// the tail sentinel. The result is never empty.
pub fn indicators_for_column(store: &CardStore, column: &ColumnId) -> Vec<Indicator> {
    store
        .cards_in_column(column)
        .into_iter()
        .map(|card| Indicator::new(column.clone(), Placement::Before(card.id.clone())))
        .chain(std::iter::once(Indicator::new(column.clone(), Placement::Tail)))
        .collect()
}

/// Clears every highlight, then lights the indicator matching `placement`
pub fn apply_highlight(indicators: &mut [Indicator], placement: Option<&Placement>) {
    for indicator in indicators.iter_mut() {
        indicator.highlighted = Some(&indicator.placement) == placement;
    }
}

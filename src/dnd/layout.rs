use crate::{
    dnd::{
        indicator::{indicators_for_column, Indicator},
        resolver::IndicatorLayout,
    },
    domain::{CardStore, Column, ColumnId, Placement},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed geometry of a column stack: indicator, card, indicator, card, ..., tail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackMetrics {
    pub origin_y: f32,
    pub card_height: f32,
    pub indicator_height: f32,
}

impl Default for StackMetrics {
    fn default() -> Self {
        Self {
            origin_y: 0.0,
            card_height: 96.0,
            indicator_height: 4.0,
        }
    }
}

/// Indicator positions measured from a store snapshot.
///
/// Stands in for a real layout pass; re-measure after every store change.
#[derive(Debug, Clone, Default)]
pub struct StackedLayout {
    tops: HashMap<(ColumnId, Placement), f32>,
}

impl StackedLayout {
    pub fn measure(store: &CardStore, columns: &[Column], metrics: StackMetrics) -> Self {
        let stride = metrics.indicator_height + metrics.card_height;
        let mut tops = HashMap::new();

        for column in columns {
            for (slot, indicator) in indicators_for_column(store, &column.id)
                .into_iter()
                .enumerate()
            {
                let top = metrics.origin_y + slot as f32 * stride;
                tops.insert((indicator.column, indicator.placement), top);
            }
        }

        Self { tops }
    }
}

impl IndicatorLayout for StackedLayout {
    fn indicator_top(&self, indicator: &Indicator) -> Option<f32> {
        self.tops
            .get(&(indicator.column.clone(), indicator.placement.clone()))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_columns, default_seed, CardId};

    #[test]
    fn test_measure_stacks_indicators() {
        let store: CardStore = default_seed().into_iter().collect();
        let metrics = StackMetrics {
            origin_y: 10.0,
            card_height: 46.0,
            indicator_height: 4.0,
        };
        let layout = StackedLayout::measure(&store, &default_columns(), metrics);

        let todo = ColumnId::from("todo");
        let top = |placement: Placement| {
            layout.indicator_top(&Indicator::new(todo.clone(), placement))
        };
        assert_eq!(top(Placement::Before(CardId::new("5"))), Some(10.0));
        assert_eq!(top(Placement::Before(CardId::new("6"))), Some(60.0));
        assert_eq!(top(Placement::Before(CardId::new("7"))), Some(110.0));
        assert_eq!(top(Placement::Tail), Some(160.0));

        // card 1 lives in backlog, not todo
        assert_eq!(top(Placement::Before(CardId::new("1"))), None);
    }
}

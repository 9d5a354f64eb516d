use crate::dnd::indicator::Indicator;
use tracing::warn;

/// Distance below an indicator's top edge at which the insertion point
/// flips past it; roughly half a card.
pub const DEFAULT_DROP_OFFSET: f32 = 50.0;

/// Supplies the current on-screen top edge of an indicator.
///
/// Returning `None` means the indicator is not laid out right now; the
/// resolver skips it.
pub trait IndicatorLayout {
    fn indicator_top(&self, indicator: &Indicator) -> Option<f32>;
}

impl<F> IndicatorLayout for F
where
    F: Fn(&Indicator) -> Option<f32>,
{
    fn indicator_top(&self, indicator: &Indicator) -> Option<f32> {
        self(indicator)
    }
}

/// Index of the indicator nearest below the pointer.
///
/// An indicator counts as below while `pointer_y < top + offset`; among
/// those the one with the smallest gap wins, first found on ties.
pub fn closest_below<I>(pointer_y: f32, tops: I, offset: f32) -> Option<usize>
where
    I: IntoIterator<Item = (usize, f32)>,
{
    let mut best: Option<(usize, f32)> = None;
    for (index, top) in tops {
        let delta = pointer_y - (top + offset);
        if delta < 0.0 && best.map_or(true, |(_, closest)| delta > closest) {
            best = Some((index, delta));
        }
    }
    best.map(|(index, _)| index)
}

/// Picks the indicator a drop at `pointer_y` would land on.
///
/// Falls back to the column's last indicator (the tail sentinel) when
/// the pointer is below everything. Only an empty slice yields `None`.
pub fn nearest_indicator<'a, L>(
    pointer_y: f32,
    indicators: &'a [Indicator],
    layout: &L,
    offset: f32,
) -> Option<&'a Indicator>
where
    L: IndicatorLayout + ?Sized,
{
    if indicators.is_empty() {
        warn!("nearest_indicator called without indicators");
        return None;
    }

    let tops = indicators
        .iter()
        .enumerate()
        .filter_map(|(index, indicator)| layout.indicator_top(indicator).map(|top| (index, top)));

    closest_below(pointer_y, tops, offset)
        .and_then(|index| indicators.get(index))
        .or_else(|| indicators.last())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CardId, ColumnId, Placement};

    fn column(card_ids: &[&str]) -> Vec<Indicator> {
        let col = ColumnId::from("todo");
        card_ids
            .iter()
            .map(|id| Indicator::new(col.clone(), Placement::Before(CardId::new(*id))))
            .chain(std::iter::once(Indicator::new(col.clone(), Placement::Tail)))
            .collect()
    }

    fn tops(indicators: &[Indicator], tops: &[f32]) -> impl Fn(&Indicator) -> Option<f32> {
        let pairs: Vec<(Placement, f32)> = indicators
            .iter()
            .map(|i| i.placement.clone())
            .zip(tops.iter().copied())
            .collect();
        move |indicator: &Indicator| {
            pairs
                .iter()
                .find(|(placement, _)| placement == &indicator.placement)
                .map(|(_, top)| *top)
        }
    }

    #[test]
    fn test_pointer_below_everything_falls_back_to_tail() {
        let indicators = column(&["a", "b"]);
        let layout = tops(&indicators, &[10.0, 60.0, 110.0]);

        let resolved = nearest_indicator(500.0, &indicators, &layout, 50.0).unwrap();
        assert!(resolved.is_tail());
    }

    #[test]
    fn test_flip_at_adjusted_midpoint() {
        let indicators = column(&["a"]);
        let layout = tops(&indicators, &[100.0, 200.0]);

        let resolved = nearest_indicator(149.0, &indicators, &layout, 50.0).unwrap();
        assert_eq!(resolved.placement, Placement::Before(CardId::new("a")));

        let resolved = nearest_indicator(151.0, &indicators, &layout, 50.0).unwrap();
        assert!(resolved.is_tail());
    }

    #[test]
    fn test_flip_with_tail_only_positioned_for_card() {
        // tail without a known position still acts as the fallback
        let indicators = column(&["a"]);
        let layout = tops(&indicators, &[100.0]);

        let resolved = nearest_indicator(151.0, &indicators, &layout, 50.0).unwrap();
        assert!(resolved.is_tail());
    }

    #[test]
    fn test_picks_nearest_indicator_below_pointer() {
        let indicators = column(&["a", "b", "c"]);
        let layout = tops(&indicators, &[0.0, 100.0, 200.0, 300.0]);

        let resolved = nearest_indicator(120.0, &indicators, &layout, 50.0).unwrap();
        assert_eq!(resolved.placement, Placement::Before(CardId::new("b")));

        let resolved = nearest_indicator(160.0, &indicators, &layout, 50.0).unwrap();
        assert_eq!(resolved.placement, Placement::Before(CardId::new("c")));

        let resolved = nearest_indicator(-40.0, &indicators, &layout, 50.0).unwrap();
        assert_eq!(resolved.placement, Placement::Before(CardId::new("a")));
    }

    #[test]
    fn test_exact_adjusted_top_is_not_below() {
        assert_eq!(closest_below(150.0, [(0, 100.0)], 50.0), None);
        assert_eq!(closest_below(149.5, [(0, 100.0)], 50.0), Some(0));
    }

    #[test]
    fn test_ties_keep_first_found() {
        assert_eq!(
            closest_below(10.0, [(0, 40.0), (1, 40.0), (2, 80.0)], 0.0),
            Some(0)
        );
    }

    #[test]
    fn test_resolution_ignores_scan_order_of_positions() {
        // layout need not be monotonic; the closest one still wins
        assert_eq!(
            closest_below(100.0, [(0, 300.0), (1, 120.0), (2, 200.0)], 0.0),
            Some(1)
        );
    }

    #[test]
    fn test_empty_indicator_list() {
        let layout = |_: &Indicator| Some(0.0);
        assert!(nearest_indicator(0.0, &[], &layout, DEFAULT_DROP_OFFSET).is_none());
    }
}

use crate::{
    dnd::{
        discard::DiscardZone,
        indicator::indicators_for_column,
        resolver::{nearest_indicator, IndicatorLayout},
    },
    domain::{CardId, CardStore, ColumnId, Placement},
};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// The card currently being carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub card: CardId,
    pub origin_column: ColumnId,
    pub started_at: DateTime<Utc>,
}

impl DragSession {
    pub fn new(card: CardId, origin_column: ColumnId) -> Self {
        Self {
            card,
            origin_column,
            started_at: Utc::now(),
        }
    }

    fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }
}

/// Tracks the in-flight drag and the highlight state it drives.
///
/// At most one session exists. Every exit path (drop on a column, drop
/// on the discard zone, cancel) clears all column and indicator
/// highlights.
#[derive(Debug, Clone)]
pub struct DragController {
    session: Option<DragSession>,
    active_columns: HashSet<ColumnId>,
    highlighted: HashMap<ColumnId, Placement>,
    drop_offset: f32,
}

impl DragController {
    pub fn new(drop_offset: f32) -> Self {
        Self {
            session: None,
            active_columns: HashSet::new(),
            highlighted: HashMap::new(),
            drop_offset,
        }
    }

    /// The carried payload, readable by any drop target
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn drop_offset(&self) -> f32 {
        self.drop_offset
    }

    pub fn is_column_active(&self, column: &ColumnId) -> bool {
        self.active_columns.contains(column)
    }

    /// The indicator currently lit in `column`, if any
    pub fn highlighted_placement(&self, column: &ColumnId) -> Option<&Placement> {
        self.highlighted.get(column)
    }

    pub fn has_highlights(&self) -> bool {
        !self.active_columns.is_empty() || !self.highlighted.is_empty()
    }

    /// Begins carrying `card`. Ignored while another drag is active or
    /// when the card is not on the board.
    pub fn start_drag(&mut self, store: &CardStore, card: &CardId) -> bool {
        if let Some(active) = &self.session {
            debug!(card = %card, active = %active.card, "drag start ignored, drag already active");
            return false;
        }
        let Some(found) = store.get(card) else {
            debug!(card = %card, "drag start on unknown card ignored");
            return false;
        };

        debug!(card = %card, column = %found.column, "drag started");
        self.session = Some(DragSession::new(card.clone(), found.column.clone()));
        true
    }

    /// Re-resolves the insertion point of `column` for the pointer at
    /// `pointer_y` and lights it. Nothing is cached between ticks.
    pub fn drag_over<L>(
        &mut self,
        store: &CardStore,
        column: &ColumnId,
        pointer_y: f32,
        layout: &L,
    ) -> Option<&Placement>
    where
        L: IndicatorLayout + ?Sized,
    {
        if self.session.is_none() {
            trace!(column = %column, "drag over without a session ignored");
            return None;
        }

        self.active_columns.insert(column.clone());

        let indicators = indicators_for_column(store, column);
        let placement = nearest_indicator(pointer_y, &indicators, layout, self.drop_offset)
            .map(|indicator| indicator.placement.clone())
            .unwrap_or(Placement::Tail);

        trace!(column = %column, pointer_y, target = %placement, "drag over");
        self.highlighted.insert(column.clone(), placement);
        self.highlighted.get(column)
    }

    /// Pointer left `column`; the session stays alive
    pub fn drag_leave(&mut self, column: &ColumnId) {
        self.active_columns.remove(column);
        self.highlighted.remove(column);
    }

    /// Commits the carried card at the insertion point last resolved in
    /// `column` (the tail when none was resolved) and ends the session.
    pub fn drop_on_column(&mut self, store: &CardStore, column: &ColumnId) -> CardStore {
        let placement = self
            .highlighted
            .get(column)
            .cloned()
            .unwrap_or(Placement::Tail);
        self.clear_highlights();

        let Some(session) = self.session.take() else {
            debug!(column = %column, "drop without a session ignored");
            return store.clone();
        };

        debug!(
            card = %session.card,
            from = %session.origin_column,
            to = %column,
            target = %placement,
            elapsed_ms = session.elapsed_ms(),
            "card dropped"
        );
        store.move_card(&session.card, column, &placement)
    }

    /// Hands the carried card to the discard zone and ends the session
    pub fn drop_on_discard(&mut self, store: &CardStore, zone: &mut DiscardZone) -> CardStore {
        self.clear_highlights();

        let Some(session) = self.session.take() else {
            debug!("discard drop without a session ignored");
            zone.drag_leave();
            return store.clone();
        };

        zone.drop(store, &session)
    }

    /// Ends the session without touching the store
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(card = %session.card, elapsed_ms = session.elapsed_ms(), "drag cancelled");
        }
        self.clear_highlights();
    }

    fn clear_highlights(&mut self) {
        self.active_columns.clear();
        self.highlighted.clear();
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(crate::dnd::resolver::DEFAULT_DROP_OFFSET)
    }
}

use crate::{
    config::BoardConfig,
    dnd::{
        apply_highlight, indicators_for_column, DiscardZone, DragController, Indicator,
        IndicatorLayout,
    },
    domain::{Card, CardId, CardStore, Column, ColumnId, NewCardForm},
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gesture signals delivered by the host UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PointerEvent {
    DragStart { card: CardId },
    DragOver { column: ColumnId, y: f32 },
    DragLeave { column: ColumnId },
    Drop { column: ColumnId },
    DiscardOver,
    DiscardLeave,
    DropOnDiscard,
    /// Released outside every drop target, or the gesture was lost
    Cancel,
}

/// Everything the renderer needs to draw one column
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub cards: Vec<&'a Card>,
    pub indicators: Vec<Indicator>,
    pub highlighted: bool,
    pub card_count: usize,
}

/// A kanban board: fixed columns, the card store and the drag machinery
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    store: CardStore,
    drag: DragController,
    discard: DiscardZone,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let store = config.seed.iter().cloned().collect();
        let drag = DragController::new(config.drop_offset);
        Self {
            config,
            store,
            drag,
            discard: DiscardZone::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.config.columns
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.config.column(id)
    }

    /// Current store snapshot
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn discard_zone(&self) -> &DiscardZone {
        &self.discard
    }

    /// Routes one pointer event. Events naming an unknown column are
    /// ignored, except a drop, which then counts as a cancel.
    pub fn dispatch<L>(&mut self, event: PointerEvent, layout: &L)
    where
        L: IndicatorLayout + ?Sized,
    {
        match event {
            PointerEvent::DragStart { card } => {
                self.drag.start_drag(&self.store, &card);
            }
            PointerEvent::DragOver { column, y } => {
                if self.column(&column).is_none() {
                    debug!(column = %column, "drag over unknown column ignored");
                    return;
                }
                self.drag.drag_over(&self.store, &column, y, layout);
            }
            PointerEvent::DragLeave { column } => self.drag.drag_leave(&column),
            PointerEvent::Drop { column } => {
                if self.column(&column).is_none() {
                    debug!(column = %column, "drop on unknown column, cancelling");
                    self.cancel();
                    return;
                }
                self.store = self.drag.drop_on_column(&self.store, &column);
                self.discard.drag_leave();
            }
            PointerEvent::DiscardOver => {
                if self.drag.is_dragging() {
                    self.discard.drag_over();
                }
            }
            PointerEvent::DiscardLeave => self.discard.drag_leave(),
            PointerEvent::DropOnDiscard => {
                self.store = self.drag.drop_on_discard(&self.store, &mut self.discard);
            }
            PointerEvent::Cancel => self.cancel(),
        }
    }

    fn cancel(&mut self) {
        self.drag.cancel();
        self.discard.drag_leave();
    }

    /// Submits an add-card form targeting one of this board's columns
    pub fn add_card(&mut self, form: &mut NewCardForm) -> Result<()> {
        if self.column(&form.column).is_none() {
            return Err(BoardError::UnknownColumn(form.column.to_string()));
        }
        self.store = form.submit(&self.store)?;
        debug!(column = %form.column, cards = self.store.len(), "card added");
        Ok(())
    }

    pub fn column_view(&self, id: &ColumnId) -> Option<ColumnView<'_>> {
        let column = self.column(id)?;
        let cards = self.store.cards_in_column(id);
        let mut indicators = indicators_for_column(&self.store, id);
        apply_highlight(&mut indicators, self.drag.highlighted_placement(id));

        Some(ColumnView {
            column,
            card_count: cards.len(),
            cards,
            indicators,
            highlighted: self.drag.is_column_active(id),
        })
    }

    /// Views for every column, in configured order
    pub fn column_views(&self) -> Vec<ColumnView<'_>> {
        self.config
            .columns
            .iter()
            .filter_map(|col| self.column_view(&col.id))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

use crate::{
    dnd::session::DragSession,
    domain::CardStore,
};
use serde::Serialize;
use tracing::debug;

/// Drop target that deletes whatever card lands on it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscardZone {
    armed: bool,
}

impl DiscardZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a drag hovers the zone
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn drag_over(&mut self) {
        self.armed = true;
    }

    pub fn drag_leave(&mut self) {
        self.armed = false;
    }

    /// Removes the carried card and returns to idle
    pub fn drop(&mut self, store: &CardStore, session: &DragSession) -> CardStore {
        self.armed = false;
        debug!(card = %session.card, "card discarded");
        store.remove_card(&session.card)
    }
}

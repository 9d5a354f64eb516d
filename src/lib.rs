//! # Kanban DnD
//!
//! Drag-and-drop reordering engine for a single-page kanban board.
//!
//! The board is one flat, ordered [`CardStore`]; a column shows the
//! store's cards filtered by column, in store order. Pointer gestures
//! are fed to [`Board::dispatch`], which resolves the insertion point
//! nearest the pointer, keeps highlight state for the renderer and, on
//! release, commits a move or a discard as a new store snapshot.
//!
//! Nothing here draws or reads input devices: hosts supply pointer
//! events and an [`IndicatorLayout`] and render from [`ColumnView`]s.

pub mod board;
pub mod config;
pub mod dnd;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use board::{Board, ColumnView, PointerEvent};
pub use config::BoardConfig;
pub use dnd::{
    DiscardZone, DragController, DragSession, Indicator, IndicatorLayout, StackMetrics,
    StackedLayout, DEFAULT_DROP_OFFSET,
};
pub use domain::{Card, CardId, CardStore, Column, ColumnId, NewCardForm, Placement};
pub use error::{BoardError, Result};

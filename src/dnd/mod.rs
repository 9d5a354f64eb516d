//! Drag-and-drop reordering: insertion-point indicators, the nearest
//! indicator resolver, the drag session state machine and the discard
//! zone.

pub mod discard;
pub mod indicator;
pub mod layout;
pub mod resolver;
pub mod session;

pub use discard::DiscardZone;
pub use indicator::{apply_highlight, indicators_for_column, Indicator};
pub use layout::{StackMetrics, StackedLayout};
pub use resolver::{closest_below, nearest_indicator, IndicatorLayout, DEFAULT_DROP_OFFSET};
pub use session::{DragController, DragSession};

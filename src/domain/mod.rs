pub mod card;
pub mod column;
pub mod seed;
pub mod store;

pub use card::{Card, CardId, NewCardForm};
pub use column::{default_columns, Column, ColumnId};
pub use seed::default_seed;
pub use store::{CardStore, Placement};

use crate::domain::{
    card::{Card, CardId},
    column::ColumnId,
};

/// Cards a fresh board starts with, in store order
pub fn default_seed() -> Vec<Card> {
    [
        ("1", "Look into rendering concept", "backlog"),
        ("2", "Practice React Hooks", "backlog"),
        ("3", "Complete Tasks related hooks", "backlog"),
        ("4", "Practice Posters", "backlog"),
        ("5", "Research about Mongo DB", "todo"),
        ("6", "Create a 3D Landing Page", "todo"),
        ("7", "Linkedin Optimization", "todo"),
        ("8", "Framer Motions task-2", "doing"),
        ("9", "Practicing framermotion", "doing"),
        ("10", "React Hooks done.", "done"),
    ]
    .into_iter()
    .map(|(id, title, column)| Card::new(CardId::new(id), title, ColumnId::from(column)))
    .collect()
}

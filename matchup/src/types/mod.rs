//! Domain types: elemental types, the defensive table, and type combinations

mod combination;
mod element;
mod table;

pub use combination::TypeCombination;
pub use element::ElementType;
pub use table::{EffectivenessTable, TYPE_TABLE, TypeProfile};

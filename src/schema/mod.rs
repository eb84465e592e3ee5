pub mod category;
pub mod item;
pub mod spell;

//! Perilous Gen — random magic item and spell names from weighted dice tables.
//!
//! Flat text tables are parsed once into weighted tables (and cached as RON),
//! then name templates are filled slot by slot with weighted draws.

pub mod core;
pub mod generator;
pub mod schema;

pub use crate::core::config::GeneratorConfig;
pub use generator::{GeneratorError, MagicItemGenerator, SpellGenerator};

/// Per-domain name generators.
pub mod magic_item;
pub mod spell;

use thiserror::Error;

use crate::core::store::{StoreError, TableSet};
use crate::core::table::TableError;
use crate::core::template::TemplateError;
use crate::schema::category::TableCategory;
use crate::schema::item::GeneralItemType;

pub use magic_item::MagicItemGenerator;
pub use spell::SpellGenerator;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("table loading error: {0}")]
    Store(#[from] StoreError),
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("no {0} table to draw from")]
    MissingTable(&'static str),
    #[error("no specific item table for {0}")]
    MissingItemTable(GeneralItemType),
}

/// Refuse to construct a generator around a table set with a hole in it.
fn require_complete<C: TableCategory>(tables: &TableSet<C>) -> Result<(), GeneratorError> {
    match tables.first_missing() {
        Some(category) => Err(GeneratorError::MissingTable(category.label())),
        None => Ok(()),
    }
}

/// Spell name generation.
use rand::Rng;

use super::{require_complete, GeneratorError};
use crate::core::compose;
use crate::core::config::GeneratorConfig;
use crate::core::store::{TableSet, TableStore};
use crate::core::template::{self, TemplateCatalog};
use crate::schema::spell::{SpellCategory, SPELL_TEMPLATES};

/// Generates spell names such as "Fire Bolt" or "Aidan's Swift Bolt".
#[derive(Debug, Clone)]
pub struct SpellGenerator {
    tables: TableSet<SpellCategory>,
    templates: TemplateCatalog<SpellCategory>,
}

impl SpellGenerator {
    /// Wrap an already-loaded table set. Every spell category must have a
    /// non-empty table.
    pub fn new(tables: TableSet<SpellCategory>) -> Result<Self, GeneratorError> {
        require_complete(&tables)?;
        Ok(Self {
            tables,
            templates: template::catalog(SPELL_TEMPLATES)?,
        })
    }

    pub fn from_store(store: &TableStore, name: &str) -> Result<Self, GeneratorError> {
        Self::new(store.load(name)?)
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::from_store(&TableStore::from_config(config), &config.spell_tables)
    }

    pub fn tables(&self) -> &TableSet<SpellCategory> {
        &self.tables
    }

    /// Generate one spell name.
    pub fn generate_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        let template = self.templates.random(rng)?;
        let values = compose::resolve_slots(template, &self.tables, rng, |_, _| {
            None::<Result<String, GeneratorError>>
        })?;
        log::trace!("spell slots {:?} resolved to {:?}", template.slots, values);
        Ok(template.format.render(&values)?)
    }

    pub fn wizard_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        Ok(compose::wizard_name(&self.tables, rng)?)
    }
}

/// Magic item name generation.
use rand::Rng;

use super::{require_complete, GeneratorError, SpellGenerator};
use crate::core::compose;
use crate::core::config::GeneratorConfig;
use crate::core::store::{TableSet, TableStore};
use crate::core::table::WeightedTable;
use crate::core::template::{self, TemplateCatalog};
use crate::schema::item::{GeneralItemType, ItemCategory, ITEM_TEMPLATES};

/// Generates magic item names such as "Aidan's Smart Luggage".
///
/// The coarse item type is rolled first. Scrolls bypass the templates and
/// carry a spell name; every other type fills its `Item` slot from that
/// type's specific-item table.
#[derive(Debug, Clone)]
pub struct MagicItemGenerator {
    tables: TableSet<ItemCategory>,
    item_tables: TableSet<GeneralItemType>,
    item_types: WeightedTable<GeneralItemType>,
    templates: TemplateCatalog<ItemCategory>,
    spells: SpellGenerator,
}

impl MagicItemGenerator {
    pub fn new(
        tables: TableSet<ItemCategory>,
        item_tables: TableSet<GeneralItemType>,
        spells: SpellGenerator,
    ) -> Result<Self, GeneratorError> {
        require_complete(&tables)?;
        let item_types = WeightedTable::from_pairs(
            GeneralItemType::ALL.iter().map(|&t| (t, t.weight())),
        )?;

        Ok(Self {
            tables,
            item_tables,
            item_types,
            templates: template::catalog(ITEM_TEMPLATES)?,
            spells,
        })
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        let store = TableStore::from_config(config);
        let spells = SpellGenerator::from_store(&store, &config.spell_tables)?;
        Self::new(
            store.load(&config.item_tables)?,
            store.load(&config.item_type_tables)?,
            spells,
        )
    }

    pub fn tables(&self) -> &TableSet<ItemCategory> {
        &self.tables
    }

    pub fn item_tables(&self) -> &TableSet<GeneralItemType> {
        &self.item_tables
    }

    pub fn spells(&self) -> &SpellGenerator {
        &self.spells
    }

    /// Roll a coarse item type by its weight.
    pub fn random_item_type<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneralItemType, GeneratorError> {
        Ok(*self.item_types.random(rng)?)
    }

    /// Generate one magic item name of a randomly rolled type.
    pub fn generate_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        let item_type = self.random_item_type(rng)?;
        self.generate_name_of_type(item_type, rng)
    }

    /// Generate one magic item name of the given type.
    pub fn generate_name_of_type<R: Rng + ?Sized>(
        &self,
        item_type: GeneralItemType,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        if item_type == GeneralItemType::Scroll {
            return Ok(format!("Scroll of {}", self.spells.generate_name(rng)?));
        }

        let template = self.templates.random(rng)?;
        let values = compose::resolve_slots(template, &self.tables, rng, |slot, rng| {
            (slot == ItemCategory::Item).then(|| self.specific_item(item_type, rng))
        })?;
        log::trace!(
            "{} slots {:?} resolved to {:?}",
            item_type,
            template.slots,
            values
        );
        Ok(template.format.render(&values)?)
    }

    /// Draw a concrete item noun for the type, e.g. a weapon name for `Weapon`.
    pub fn specific_item<R: Rng + ?Sized>(
        &self,
        item_type: GeneralItemType,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        match self.item_tables.get(item_type) {
            Some(table) if !table.is_empty() => Ok(table.random(rng)?.clone()),
            _ => Err(GeneratorError::MissingItemTable(item_type)),
        }
    }

    pub fn scroll<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_name_of_type(GeneralItemType::Scroll, rng)
    }

    pub fn potion<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_name_of_type(GeneralItemType::Potion, rng)
    }

    pub fn garb<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_name_of_type(GeneralItemType::Garb, rng)
    }

    pub fn jewelry<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_name_of_type(GeneralItemType::Jewelry, rng)
    }

    pub fn wand<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_name_of_type(GeneralItemType::Wand, rng)
    }

    pub fn weapon<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_name_of_type(GeneralItemType::Weapon, rng)
    }

    pub fn armor<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_name_of_type(GeneralItemType::Armor, rng)
    }

    pub fn misc<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_name_of_type(GeneralItemType::Misc, rng)
    }
}

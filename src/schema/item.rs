use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::{NameCategory, TableCategory};

/// Columns of the magic item name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Item,
    Noun,
    Adjective,
    WizardNamePrefix,
    WizardNameSuffix,
}

impl TableCategory for ItemCategory {
    fn columns() -> &'static [Self] {
        &[
            Self::Item,
            Self::Noun,
            Self::Adjective,
            Self::WizardNamePrefix,
            Self::WizardNameSuffix,
        ]
    }

    fn id(self) -> u32 {
        match self {
            Self::Item => 1,
            Self::Noun => 2,
            Self::Adjective => 3,
            Self::WizardNamePrefix => 4,
            Self::WizardNameSuffix => 5,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::WizardNamePrefix => "wizard name prefix",
            Self::WizardNameSuffix => "wizard name suffix",
        }
    }
}

impl NameCategory for ItemCategory {
    const WIZARD_NAME_PREFIX: Self = Self::WizardNamePrefix;
    const WIZARD_NAME_SUFFIX: Self = Self::WizardNameSuffix;
}

/// Coarse magic item type, rolled before any name template.
///
/// Every type except `Scroll` doubles as a column of the specific-item
/// tables, which hold the concrete nouns for that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralItemType {
    Scroll,
    Potion,
    Garb,
    Jewelry,
    Wand,
    Weapon,
    Armor,
    Misc,
}

impl GeneralItemType {
    pub const ALL: [GeneralItemType; 8] = [
        Self::Scroll,
        Self::Potion,
        Self::Garb,
        Self::Jewelry,
        Self::Wand,
        Self::Weapon,
        Self::Armor,
        Self::Misc,
    ];

    /// Relative likelihood of rolling this type.
    pub fn weight(self) -> u32 {
        match self {
            Self::Scroll => 1,
            Self::Potion => 3,
            Self::Garb => 1,
            Self::Jewelry => 2,
            Self::Wand => 1,
            Self::Weapon => 1,
            Self::Armor => 1,
            Self::Misc => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Potion => "potion",
            Self::Garb => "garb",
            Self::Jewelry => "jewelry",
            Self::Wand => "wand",
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Misc => "misc",
        }
    }
}

impl TableCategory for GeneralItemType {
    fn columns() -> &'static [Self] {
        // Scrolls carry a spell instead of a specific item.
        &[
            Self::Potion,
            Self::Garb,
            Self::Jewelry,
            Self::Wand,
            Self::Weapon,
            Self::Armor,
            Self::Misc,
        ]
    }

    fn id(self) -> u32 {
        match self {
            Self::Scroll => 1,
            Self::Potion => 2,
            Self::Garb => 3,
            Self::Jewelry => 4,
            Self::Wand => 5,
            Self::Weapon => 6,
            Self::Armor => 7,
            Self::Misc => 8,
        }
    }

    fn label(self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for GeneralItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneralItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == lower)
            .ok_or_else(|| format!("unknown item type '{}'", s))
    }
}

use ItemCategory::*;

/// Magic item name shapes as `(slots, format, weight)`, e.g. "Rincewind's Smart Luggage".
pub const ITEM_TEMPLATES: &[(&[ItemCategory], &str, u32)] = &[
    (&[Noun, Item], "{} {}", 2),
    (&[Adjective, Item], "{} {}", 2),
    (&[Item, Noun], "{} of (the) {}", 2),
    (&[Adjective, Item, Noun], "{} {} of the {}", 2),
    (&[WizardNamePrefix, WizardNameSuffix, Item], "{}'s {}", 1),
    (&[WizardNamePrefix, WizardNameSuffix, Item, Noun], "{}'s {} of (the) {}", 1),
    (&[WizardNamePrefix, WizardNameSuffix, Adjective, Item], "{}'s {} {}", 1),
    (&[WizardNamePrefix, WizardNameSuffix, Noun, Item], "{}'s {} {}", 1),
];

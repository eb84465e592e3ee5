use serde::{Deserialize, Serialize};

use super::category::{NameCategory, TableCategory};

/// Columns of the spell name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellCategory {
    Form,
    Noun,
    Adjective,
    WizardNamePrefix,
    WizardNameSuffix,
}

impl TableCategory for SpellCategory {
    fn columns() -> &'static [Self] {
        &[
            Self::Form,
            Self::Noun,
            Self::Adjective,
            Self::WizardNamePrefix,
            Self::WizardNameSuffix,
        ]
    }

    fn id(self) -> u32 {
        match self {
            Self::Form => 1,
            Self::Noun => 2,
            Self::Adjective => 3,
            Self::WizardNamePrefix => 4,
            Self::WizardNameSuffix => 5,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::WizardNamePrefix => "wizard name prefix",
            Self::WizardNameSuffix => "wizard name suffix",
        }
    }
}

impl NameCategory for SpellCategory {
    const WIZARD_NAME_PREFIX: Self = Self::WizardNamePrefix;
    const WIZARD_NAME_SUFFIX: Self = Self::WizardNameSuffix;
}

use SpellCategory::*;

/// Spell name shapes as `(slots, format, weight)`, e.g. "Rincewind's Mighty Bolt".
pub const SPELL_TEMPLATES: &[(&[SpellCategory], &str, u32)] = &[
    (&[Noun, Form], "{} {}", 2),
    (&[Adjective, Form], "{} {}", 2),
    (&[Adjective, Noun], "{} {}", 2),
    (&[Form, Noun], "{} of {}", 1),
    (&[Form, Adjective, Noun], "{} of {} {}", 1),
    (&[WizardNamePrefix, WizardNameSuffix, Adjective, Form], "{}'s {} {}", 1),
    (&[WizardNamePrefix, WizardNameSuffix, Adjective, Noun], "{}'s {} {}", 1),
    (&[WizardNamePrefix, WizardNameSuffix, Form, Noun], "{}'s {} of {}", 1),
    (&[WizardNamePrefix, WizardNameSuffix, Noun, Form], "{}'s {} {}", 1),
];

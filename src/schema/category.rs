/// Category traits shared by every table domain.
use std::fmt::Debug;
use std::hash::Hash;

/// A closed set of table columns.
///
/// `columns()` is the declared order: raw source lines list one value per
/// column in exactly this order, and the derived cache keys tables by `id()`.
pub trait TableCategory: Copy + Eq + Hash + Debug + 'static {
    /// Every column, in raw source order.
    fn columns() -> &'static [Self];

    /// Stable numeric identifier used as the cache key.
    fn id(self) -> u32;

    fn from_id(id: u32) -> Option<Self> {
        Self::columns().iter().copied().find(|c| c.id() == id)
    }

    fn label(self) -> &'static str;
}

/// A category set that can fill name templates, including the wizard-name
/// affix pair that collapses into a single resolved value.
pub trait NameCategory: TableCategory {
    const WIZARD_NAME_PREFIX: Self;
    const WIZARD_NAME_SUFFIX: Self;

    fn is_wizard_name(self) -> bool {
        self == Self::WIZARD_NAME_PREFIX || self == Self::WIZARD_NAME_SUFFIX
    }
}

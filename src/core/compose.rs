/// Template filling — walks a template's slots and resolves each to a string.
use rand::Rng;

use crate::core::store::TableSet;
use crate::core::table::TableError;
use crate::core::template::NameTemplate;
use crate::schema::category::NameCategory;

/// Draw a prefix and a suffix and join them into one proper name.
///
/// Affix markers (`Ai-`, `-dan`) are stripped before joining.
pub fn wizard_name<C, R>(tables: &TableSet<C>, rng: &mut R) -> Result<String, TableError>
where
    C: NameCategory,
    R: Rng + ?Sized,
{
    let prefix = tables.draw(C::WIZARD_NAME_PREFIX, rng)?;
    let suffix = tables.draw(C::WIZARD_NAME_SUFFIX, rng)?;
    Ok(join_affixes(prefix, suffix))
}

pub fn join_affixes(prefix: &str, suffix: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + suffix.len());
    name.push_str(prefix.trim_matches('-'));
    name.push_str(suffix.trim_matches('-'));
    name
}

/// Resolve every slot of `template` in order.
///
/// `special` gets first refusal on each non-wizard slot; returning `None`
/// falls through to a plain draw from `tables`. The wizard-name pair emits
/// one joined value at whichever of its slots comes first.
pub fn resolve_slots<C, R, E, F>(
    template: &NameTemplate<C>,
    tables: &TableSet<C>,
    rng: &mut R,
    mut special: F,
) -> Result<Vec<String>, E>
where
    C: NameCategory,
    R: Rng + ?Sized,
    E: From<TableError>,
    F: FnMut(C, &mut R) -> Option<Result<String, E>>,
{
    let mut values = Vec::with_capacity(template.slots.len());
    let mut wizard_done = false;

    for &slot in &template.slots {
        if slot.is_wizard_name() {
            if !wizard_done {
                values.push(wizard_name(tables, rng)?);
                wizard_done = true;
            }
            continue;
        }

        match special(slot, rng) {
            Some(value) => values.push(value?),
            None => values.push(tables.draw(slot, rng)?.to_string()),
        }
    }

    Ok(values)
}

/// Name templates — slot sequences, format strings, and weighted catalogs.

use thiserror::Error;

use crate::core::table::{TableError, WeightedTable};
use crate::schema::category::NameCategory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("format string parse error: {0}")]
    Parse(String),
    #[error("template expects {expected} values, got {found}")]
    Arity { expected: usize, found: usize },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// A segment of a parsed format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// Positional placeholder: `{}`.
    Placeholder,
}

/// A parsed format string with positional `{}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatString {
    pub segments: Vec<FormatSegment>,
}

impl FormatString {
    /// Parse a format string.
    ///
    /// Syntax:
    /// - `{}` → `Placeholder`
    /// - `{{` / `}}` → literal brace
    /// - Everything else → `Literal`
    pub fn parse(input: &str) -> Result<FormatString, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal_buf.push('{');
                }
                '{' if chars.peek() == Some(&'}') => {
                    chars.next();
                    if !literal_buf.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut literal_buf)));
                    }
                    segments.push(FormatSegment::Placeholder);
                }
                '{' => {
                    return Err(TemplateError::Parse(
                        "only positional {} placeholders are allowed".to_string(),
                    ));
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal_buf.push('}');
                }
                '}' => {
                    return Err(TemplateError::Parse(
                        "unmatched closing brace".to_string(),
                    ));
                }
                _ => literal_buf.push(c),
            }
        }

        if !literal_buf.is_empty() {
            segments.push(FormatSegment::Literal(literal_buf));
        }

        Ok(FormatString { segments })
    }

    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, FormatSegment::Placeholder))
            .count()
    }

    /// Substitute `values` into the placeholders, in order.
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<String, TemplateError> {
        let expected = self.placeholder_count();
        if values.len() != expected {
            return Err(TemplateError::Arity {
                expected,
                found: values.len(),
            });
        }

        let mut out = String::new();
        let mut values = values.iter();
        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(text) => out.push_str(text),
                FormatSegment::Placeholder => {
                    if let Some(value) = values.next() {
                        out.push_str(value.as_ref());
                    }
                }
            }
        }
        Ok(out)
    }
}

/// The slots to fill, in order, plus the string they're formatted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate<C> {
    pub slots: Vec<C>,
    pub format: FormatString,
}

impl<C: NameCategory> NameTemplate<C> {
    pub fn new(slots: &[C], format: &str) -> Result<Self, TemplateError> {
        let template = Self {
            slots: slots.to_vec(),
            format: FormatString::parse(format)?,
        };

        let expected = template.resolved_len();
        let found = template.format.placeholder_count();
        if expected != found {
            return Err(TemplateError::Arity { expected, found });
        }
        Ok(template)
    }

    /// How many values resolving the slots produces: a wizard-name pair
    /// yields one value, not two.
    pub fn resolved_len(&self) -> usize {
        let wizard_slots = self.slots.iter().filter(|c| c.is_wizard_name()).count();
        self.slots.len() - wizard_slots + usize::from(wizard_slots > 0)
    }
}

/// A weighted collection of templates for one domain.
pub type TemplateCatalog<C> = WeightedTable<NameTemplate<C>>;

/// Build a catalog from static `(slots, format, weight)` triples.
pub fn catalog<C: NameCategory>(
    definitions: &[(&[C], &str, u32)],
) -> Result<TemplateCatalog<C>, TemplateError> {
    let mut catalog = TemplateCatalog::new();
    for &(slots, format, weight) in definitions {
        catalog.add(NameTemplate::new(slots, format)?, weight)?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::item::{ItemCategory, ITEM_TEMPLATES};
    use crate::schema::spell::{SpellCategory, SPELL_TEMPLATES};

    #[test]
    fn parse_placeholders_and_literals() {
        let f = FormatString::parse("{}'s {} of {}").unwrap();
        assert_eq!(
            f.segments,
            vec![
                FormatSegment::Placeholder,
                FormatSegment::Literal("'s ".to_string()),
                FormatSegment::Placeholder,
                FormatSegment::Literal(" of ".to_string()),
                FormatSegment::Placeholder,
            ]
        );
        assert_eq!(f.placeholder_count(), 3);
    }

    #[test]
    fn parse_escaped_braces() {
        let f = FormatString::parse("{{{}}}").unwrap();
        assert_eq!(f.render(&["x"]).unwrap(), "{x}");
    }

    #[test]
    fn parse_rejects_named_placeholder() {
        assert!(FormatString::parse("{noun} {}").is_err());
        assert!(FormatString::parse("{0}").is_err());
    }

    #[test]
    fn parse_rejects_unmatched_close() {
        assert!(FormatString::parse("Bad } here").is_err());
    }

    #[test]
    fn render_keeps_literal_parentheses() {
        let f = FormatString::parse("{} of (the) {}").unwrap();
        assert_eq!(f.render(&["Lantern", "Deep"]).unwrap(), "Lantern of (the) Deep");
    }

    #[test]
    fn render_arity_mismatch() {
        let f = FormatString::parse("{} {}").unwrap();
        assert_eq!(
            f.render(&["one"]),
            Err(TemplateError::Arity {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn wizard_pair_counts_once() {
        let t = NameTemplate::new(
            &[
                SpellCategory::WizardNamePrefix,
                SpellCategory::WizardNameSuffix,
                SpellCategory::Adjective,
                SpellCategory::Form,
            ],
            "{}'s {} {}",
        )
        .unwrap();
        assert_eq!(t.resolved_len(), 3);
    }

    #[test]
    fn template_arity_checked_on_construction() {
        let err = NameTemplate::new(&[SpellCategory::Noun, SpellCategory::Form], "{}").unwrap_err();
        assert_eq!(err, TemplateError::Arity { expected: 2, found: 1 });
    }

    #[test]
    fn shipped_catalogs_are_valid() {
        let spells = catalog(SPELL_TEMPLATES).unwrap();
        assert_eq!(spells.len(), 9);
        assert_eq!(spells.weights(), &[2, 2, 2, 1, 1, 1, 1, 1, 1]);

        let items = catalog(ITEM_TEMPLATES).unwrap();
        assert_eq!(items.len(), 8);
        assert_eq!(items.weights(), &[2, 2, 2, 2, 1, 1, 1, 1]);
        assert!(items
            .entries()
            .iter()
            .all(|t| t.slots.contains(&ItemCategory::Item)));
    }
}

/// Generator configuration — where tables live and whether to cache them.
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding the raw `.txt` tables and their `.ron` caches.
    pub tables_dir: PathBuf,
    pub spell_tables: String,
    pub item_tables: String,
    /// Specific-item nouns, one column per coarse item type.
    pub item_type_tables: String,
    /// When false, always build from source and never write a cache.
    pub use_cache: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tables_dir: PathBuf::from("tables"),
            spell_tables: "Spells".to_string(),
            item_tables: "MagicItems".to_string(),
            item_type_tables: "MagicItemTypes".to_string(),
            use_cache: true,
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_ron(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(input)?)
    }

    pub fn with_tables_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tables_dir = dir.into();
        self
    }

    pub fn with_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.tables_dir, PathBuf::from("tables"));
        assert_eq!(cfg.spell_tables, "Spells");
        assert!(cfg.use_cache);
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg = GeneratorConfig::parse_ron(r#"(tables_dir: "data", use_cache: false)"#).unwrap();
        assert_eq!(cfg.tables_dir, PathBuf::from("data"));
        assert!(!cfg.use_cache);
        assert_eq!(cfg.item_tables, "MagicItems");
    }

    #[test]
    fn builder_methods() {
        let cfg = GeneratorConfig::default()
            .with_tables_dir("elsewhere")
            .with_cache(false);
        assert_eq!(cfg.tables_dir, PathBuf::from("elsewhere"));
        assert!(!cfg.use_cache);
    }

    #[test]
    fn bad_ron_is_an_error() {
        assert!(GeneratorConfig::parse_ron("(tables_dir: 5)").is_err());
    }
}

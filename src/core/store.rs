/// Table storage — raw dice-table parsing, the derived RON cache, and loading.

use rand::Rng;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::config::GeneratorConfig;
use crate::core::table::{TableError, WeightedTable};
use crate::schema::category::TableCategory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("couldn't find a raw table source at {}", .path.display())]
    SourceNotFound { path: PathBuf },
    #[error("line {line}: {reason} in '{content}'")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
    #[error("line {line}: expected {expected} values, found {found}")]
    ColumnMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid table cache: {0}")]
    CacheFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One weighted table per category of a domain.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSet<C: TableCategory> {
    tables: FxHashMap<C, WeightedTable<String>>,
}

impl<C: TableCategory> Default for TableSet<C> {
    fn default() -> Self {
        Self {
            tables: FxHashMap::default(),
        }
    }
}

impl<C: TableCategory> TableSet<C> {
    /// An empty table for every declared column.
    pub fn with_columns() -> Self {
        let mut set = Self::default();
        for &category in C::columns() {
            set.tables.insert(category, WeightedTable::new());
        }
        set
    }

    pub fn insert(&mut self, category: C, table: WeightedTable<String>) {
        self.tables.insert(category, table);
    }

    pub fn get(&self, category: C) -> Option<&WeightedTable<String>> {
        self.tables.get(&category)
    }

    /// Draw one entry from the category's table.
    pub fn draw<R: Rng + ?Sized>(&self, category: C, rng: &mut R) -> Result<&str, TableError> {
        let table = self.tables.get(&category).ok_or(TableError::Empty)?;
        table.random(rng).map(String::as_str)
    }

    /// Tables in declared column order, skipping any that are absent.
    pub fn iter(&self) -> impl Iterator<Item = (C, &WeightedTable<String>)> {
        C::columns()
            .iter()
            .filter_map(move |&c| self.tables.get(&c).map(|t| (c, t)))
    }

    /// The first declared category with no table or an empty one.
    pub fn first_missing(&self) -> Option<C> {
        C::columns()
            .iter()
            .copied()
            .find(|c| self.tables.get(c).map_or(true, |t| t.is_empty()))
    }
}

/// Parse the die-roll token: `n` covers one face, `lo-hi` covers `hi - lo + 1`.
pub fn parse_weight(token: &str) -> Result<u32, String> {
    match token.split_once('-') {
        Some((lo, hi)) => {
            let lo: u32 = lo
                .parse()
                .map_err(|_| format!("invalid range start '{}'", lo))?;
            let hi: u32 = hi
                .parse()
                .map_err(|_| format!("invalid range end '{}'", hi))?;
            if lo > hi {
                return Err(format!("descending range '{}'", token));
            }
            (hi - lo)
                .checked_add(1)
                .ok_or_else(|| format!("range '{}' too wide", token))
        }
        None => token
            .parse::<u32>()
            .map(|_| 1)
            .map_err(|_| format!("expected a die roll or range, got '{}'", token)),
    }
}

/// Loads table sets from `<dir>/<name>.ron`, falling back to building them
/// from `<dir>/<name>.txt`.
#[derive(Debug, Clone)]
pub struct TableStore {
    dir: PathBuf,
    use_cache: bool,
}

impl TableStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            use_cache: true,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            dir: config.tables_dir.clone(),
            use_cache: config.use_cache,
        }
    }

    /// Skip reading and writing the derived cache entirely.
    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn source_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", name))
    }

    pub fn cache_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.ron", name))
    }

    /// Load the cached table set, building it from source if no cache exists.
    ///
    /// A cache that exists but can't be read back is an error, not a miss.
    pub fn load<C: TableCategory>(&self, name: &str) -> Result<TableSet<C>, StoreError> {
        if !self.use_cache {
            return self.parse_source_file(name);
        }

        let path = self.cache_path(name);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                log::debug!("loading '{}' from cache {}", name, path.display());
                Self::from_cache_str(&contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no cache for '{}', building from source", name);
                self.build(name)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Build from the raw source and persist the derived cache.
    pub fn build<C: TableCategory>(&self, name: &str) -> Result<TableSet<C>, StoreError> {
        let tables = self.parse_source_file(name)?;
        if self.use_cache {
            self.save(name, &tables)?;
        }
        Ok(tables)
    }

    /// Rebuild from source regardless of any existing cache, overwriting it.
    pub fn rebuild<C: TableCategory>(&self, name: &str) -> Result<TableSet<C>, StoreError> {
        let tables = self.parse_source_file(name)?;
        self.save(name, &tables)?;
        Ok(tables)
    }

    pub fn save<C: TableCategory>(&self, name: &str, tables: &TableSet<C>) -> Result<(), StoreError> {
        let path = self.cache_path(name);
        std::fs::write(&path, Self::to_cache_string(tables)?)?;
        log::info!("wrote table cache {}", path.display());
        Ok(())
    }

    fn parse_source_file<C: TableCategory>(&self, name: &str) -> Result<TableSet<C>, StoreError> {
        let path = self.source_path(name);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::SourceNotFound { path });
            }
            Err(e) => return Err(e.into()),
        };
        log::debug!("building '{}' from {}", name, path.display());
        Self::parse(&text)
    }

    /// Parse raw table text: each line is a die roll or range followed by one
    /// value per declared column.
    pub fn parse<C: TableCategory>(text: &str) -> Result<TableSet<C>, StoreError> {
        let columns = C::columns();
        let mut set = TableSet::with_columns();

        for (index, raw_line) in text.lines().enumerate() {
            let line = index + 1;
            let mut tokens = raw_line.split_whitespace();
            let Some(roll) = tokens.next() else {
                continue;
            };

            let weight = parse_weight(roll).map_err(|reason| StoreError::Parse {
                line,
                content: raw_line.trim().to_string(),
                reason,
            })?;

            let values: Vec<&str> = tokens.collect();
            if values.len() != columns.len() {
                return Err(StoreError::ColumnMismatch {
                    line,
                    expected: columns.len(),
                    found: values.len(),
                });
            }

            for (&category, value) in columns.iter().zip(values) {
                if let Some(table) = set.tables.get_mut(&category) {
                    // a zero weight can't get past parse_weight; overflow can
                    table
                        .add(value.to_string(), weight)
                        .map_err(|e| StoreError::Parse {
                            line,
                            content: raw_line.trim().to_string(),
                            reason: e.to_string(),
                        })?;
                }
            }
        }

        Ok(set)
    }

    /// Serialize to the cache document, keyed by category id in ascending order.
    pub fn to_cache_string<C: TableCategory>(tables: &TableSet<C>) -> Result<String, StoreError> {
        let by_id: BTreeMap<u32, &WeightedTable<String>> =
            tables.iter().map(|(c, t)| (c.id(), t)).collect();
        ron::ser::to_string_pretty(&by_id, ron::ser::PrettyConfig::default())
            .map_err(|e| StoreError::CacheFormat(e.to_string()))
    }

    pub fn from_cache_str<C: TableCategory>(contents: &str) -> Result<TableSet<C>, StoreError> {
        let by_id: BTreeMap<u32, WeightedTable<String>> =
            ron::from_str(contents).map_err(|e| StoreError::CacheFormat(e.to_string()))?;

        let mut set = TableSet::default();
        for (id, table) in by_id {
            let category = C::from_id(id)
                .ok_or_else(|| StoreError::CacheFormat(format!("unknown category id {}", id)))?;
            table
                .validate()
                .map_err(|e| StoreError::CacheFormat(format!("{} table: {}", category.label(), e)))?;
            set.insert(category, table);
        }

        if let Some(missing) = C::columns().iter().find(|c| set.get(**c).is_none()) {
            return Err(StoreError::CacheFormat(format!(
                "missing {} table",
                missing.label()
            )));
        }

        Ok(set)
    }
}

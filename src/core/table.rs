/// Weighted random tables — the container every draw goes through.

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("cannot draw from an empty table")]
    Empty,
    #[error("table weights must be positive")]
    ZeroWeight,
    #[error("total table weight exceeds {}", u32::MAX)]
    WeightOverflow,
    #[error("table has {entries} entries but {weights} weights")]
    Misaligned { entries: usize, weights: usize },
}

/// Entries paired index-for-index with positive integer weights.
///
/// Entry `i` is drawn with probability `weights[i] / sum(weights)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTable<T> {
    entries: Vec<T>,
    weights: Vec<u32>,
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            weights: Vec::new(),
        }
    }
}

impl<T> WeightedTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(entry, weight)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (T, u32)>,
    {
        let mut table = Self::new();
        for (entry, weight) in pairs {
            table.add(entry, weight)?;
        }
        Ok(table)
    }

    /// Append an entry with its weight. The weights must sum to at most
    /// `u32::MAX` so draws never overflow.
    pub fn add(&mut self, entry: T, weight: u32) -> Result<(), TableError> {
        if weight == 0 {
            return Err(TableError::ZeroWeight);
        }
        self.weights
            .iter()
            .try_fold(weight, |total, &w| total.checked_add(w))
            .ok_or(TableError::WeightOverflow)?;
        self.entries.push(entry);
        self.weights.push(weight);
        Ok(())
    }

    /// Draw one entry with probability proportional to its weight.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, TableError> {
        match self.entries.len() {
            0 => Err(TableError::Empty),
            1 => Ok(&self.entries[0]),
            _ => {
                let dist = WeightedIndex::new(&self.weights).map_err(|_| TableError::ZeroWeight)?;
                Ok(&self.entries[dist.sample(rng)])
            }
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|&w| u64::from(w)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, u32)> {
        self.entries.iter().zip(self.weights.iter().copied())
    }

    /// Check the invariants `add` enforces. Deserialized tables bypass `add`,
    /// so they have to be checked after the fact.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.entries.len() != self.weights.len() {
            return Err(TableError::Misaligned {
                entries: self.entries.len(),
                weights: self.weights.len(),
            });
        }
        if self.weights.contains(&0) {
            return Err(TableError::ZeroWeight);
        }
        if self.total_weight() > u64::from(u32::MAX) {
            return Err(TableError::WeightOverflow);
        }
        Ok(())
    }
}

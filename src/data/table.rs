//! The read-only observation table.
//!
//! A [`Table`] is built once at startup and shared behind an `Arc` by every
//! component that reads it. All queries are projections; nothing mutates the
//! rows after construction.

use crate::data::error::DataResult;
use crate::data::loader::load_observations;
use crate::types::{Field, FieldValue, Observation, Year};
use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable in-memory dataset
#[derive(Clone, Debug, Default)]
pub struct Table {
    rows: Arc<[Observation]>,
    source: Option<PathBuf>,
}

impl Table {
    /// Load the dataset from disk. Call once at process start.
    pub fn load(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let rows = load_observations(path)?;
        tracing::info!(rows = rows.len(), path = %path.display(), "Dataset loaded");
        Ok(Self {
            rows: rows.into(),
            source: Some(path.to_path_buf()),
        })
    }

    /// Build a table from rows already in memory
    pub fn from_observations(rows: Vec<Observation>) -> Self {
        Self {
            rows: rows.into(),
            source: None,
        }
    }

    /// File the table was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct values of `field` in first-occurrence order.
    ///
    /// The result is not sorted; callers that need a stable presentation
    /// order sort it themselves.
    pub fn distinct_values(&self, field: Field) -> Vec<FieldValue> {
        let set: IndexSet<FieldValue> = self.rows.iter().map(|row| row.value(field)).collect();
        set.into_iter().collect()
    }

    /// Distinct regions in first-occurrence order
    pub fn distinct_regions(&self) -> Vec<String> {
        let set: IndexSet<&str> = self.rows.iter().map(|row| row.region.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct years in first-occurrence order
    pub fn distinct_years(&self) -> Vec<Year> {
        let set: IndexSet<Year> = self.rows.iter().map(|row| row.year).collect();
        set.into_iter().collect()
    }

    /// Rows matching every predicate set on `filter`
    pub fn filter<'a>(&'a self, filter: &'a RowFilter) -> impl Iterator<Item = &'a Observation> + 'a {
        self.rows.iter().filter(move |row| filter.matches(row))
    }
}

/// Column equality predicates; unset fields match everything
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowFilter {
    pub year: Option<Year>,
    pub region: Option<String>,
}

impl RowFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn matches(&self, row: &Observation) -> bool {
        self.year.is_none_or(|year| row.year == year)
            && self.region.as_deref().is_none_or(|region| row.region == region)
    }
}

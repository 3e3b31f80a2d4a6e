//! Core types for the avocado dashboard.
//!
//! This module defines the row model loaded from the dataset, the values
//! exposed by column queries, and the small enums that configure how charts
//! and control domains are derived.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::ALL_REGIONS;

/// Calendar year as stored in the dataset's `year` column.
pub type Year = i64;

// ============================================================================
// Data Types
// ============================================================================

/// One observation (row) of the dataset.
///
/// Only the columns the dashboard reads are kept; everything else in the
/// source file is dropped at load time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub region: String,
    pub year: Year,
    #[serde(rename = "AveragePrice")]
    pub average_price: f64,
}

impl Observation {
    pub fn new(region: impl Into<String>, year: Year, average_price: f64) -> Self {
        Self {
            region: region.into(),
            year,
            average_price,
        }
    }

    /// Read a categorical field of this row
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Region => FieldValue::Text(self.region.clone()),
            Field::Year => FieldValue::Integer(self.year),
        }
    }
}

/// Columns that can be enumerated for distinct values.
///
/// `AveragePrice` is continuous and has no domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Region,
    Year,
}

/// A single categorical cell value
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

// ============================================================================
// Region Selection
// ============================================================================

/// The value held by the region dropdown.
///
/// `All` is the synthetic "All Regions" entry: it never appears in the data
/// and means "do not filter by region".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegionChoice {
    All,
    Region(String),
}

impl RegionChoice {
    /// Interpret a raw dropdown value, mapping the sentinel label to `All`
    pub fn parse(value: &str) -> Self {
        if value == ALL_REGIONS {
            RegionChoice::All
        } else {
            RegionChoice::Region(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, RegionChoice::All)
    }

    /// The label shown in the dropdown (also the wire value)
    pub fn label(&self) -> &str {
        match self {
            RegionChoice::All => ALL_REGIONS,
            RegionChoice::Region(name) => name,
        }
    }
}

impl fmt::Display for RegionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RegionChoice {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RegionChoice {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RegionChoice::parse(&raw))
    }
}

// ============================================================================
// Chart & Domain Options
// ============================================================================

/// How bar values are combined when several rows share a region
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aggregation {
    /// No aggregation - every row stays a stacked segment
    #[default]
    None,
    Sum,
    Average,
    Min,
    Max,
}

impl Aggregation {
    /// Combine a group of values into a single bar height.
    ///
    /// `None` stacks the segments, so the visible height is their total.
    pub fn apply(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        match self {
            Aggregation::None | Aggregation::Sum => values.iter().sum(),
            Aggregation::Average => values.iter().sum::<f64>() / values.len() as f64,
            Aggregation::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Aggregation::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Ordering applied to control domains at startup
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainOrder {
    /// Keep the order in which values first appear in the file
    #[default]
    FirstOccurrence,
    /// Regions alphabetically, years ascending
    Sorted,
}

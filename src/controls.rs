//! Control domains and control state.
//!
//! Domains are derived once from the table at startup and never change. The
//! control state of a session is two independent values, each normally a
//! member of its domain.

use crate::data::Table;
use crate::types::{DomainOrder, RegionChoice, Year};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which dropdown a value belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    Region,
    Year,
}

impl ControlId {
    pub fn all() -> &'static [ControlId] {
        &[ControlId::Region, ControlId::Year]
    }

    /// Path segment used by the HTTP API
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlId::Region => "region",
            ControlId::Year => "year",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "region" => Some(ControlId::Region),
            "year" => Some(ControlId::Year),
            _ => None,
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal values of both dropdowns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domains {
    regions: Vec<RegionChoice>,
    years: Vec<Year>,
}

impl Domains {
    /// Derive both domains from the table.
    ///
    /// Regions come first in the chosen order, with "All Regions" appended
    /// last. Deterministic for a given table and order.
    pub fn derive(table: &Table, order: DomainOrder) -> Self {
        let mut regions = table.distinct_regions();
        let mut years = table.distinct_years();
        if order == DomainOrder::Sorted {
            regions.sort();
            years.sort_unstable();
        }

        let mut regions: Vec<RegionChoice> = regions.into_iter().map(RegionChoice::Region).collect();
        regions.push(RegionChoice::All);

        tracing::debug!(
            regions = regions.len(),
            years = years.len(),
            ?order,
            "Derived control domains"
        );

        Self { regions, years }
    }

    pub fn regions(&self) -> &[RegionChoice] {
        &self.regions
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn contains_region(&self, region: &RegionChoice) -> bool {
        self.regions.contains(region)
    }

    pub fn contains_year(&self, year: Year) -> bool {
        self.years.contains(&year)
    }

    /// Initial state: the first entry of each domain
    pub fn initial_state(&self) -> ControlState {
        ControlState {
            region: self.regions.first().cloned(),
            year: self.years.first().copied(),
        }
    }
}

/// Current value of each control in one session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub region: Option<RegionChoice>,
    pub year: Option<Year>,
}

impl ControlState {
    pub fn new(region: RegionChoice, year: Year) -> Self {
        Self {
            region: Some(region),
            year: Some(year),
        }
    }

    /// Whether the named control currently has a value
    pub fn is_set(&self, control: ControlId) -> bool {
        match control {
            ControlId::Region => self.region.is_some(),
            ControlId::Year => self.year.is_some(),
        }
    }
}

//! Chart builders
//!
//! Pure functions from (table, control values) to a chart specification.
//! Grouping and aggregation happen here rather than in the renderer. Nothing
//! is memoized: every call filters the table again.

use crate::chart::color::ValueRange;
use crate::chart::figure::{Bar, BarChart, ChoroplethMap, ShadedArea};
use crate::data::{RowFilter, Table};
use crate::types::{Aggregation, Observation, RegionChoice, Year};
use indexmap::IndexMap;
use std::fmt::Display;

/// Options that shape the built charts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChartOptions {
    /// How bar values are combined when several rows share a region
    pub bar_aggregation: Aggregation,
}

impl ChartOptions {
    pub fn with_bar_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.bar_aggregation = aggregation;
        self
    }
}

/// Title of the bar chart for the given selection
pub fn bar_chart_title(region: &RegionChoice, year: impl Display) -> String {
    match region {
        RegionChoice::All => format!("Average Price for All Regions in {year}"),
        RegionChoice::Region(name) => format!("Average Price in {name} for {year}"),
    }
}

/// Title of the choropleth map for the given year
pub fn choropleth_title(year: impl Display) -> String {
    format!("Average Price per Region in {year}")
}

/// Bar chart of average price by region for `year`, using default options
pub fn build_bar_chart(table: &Table, region: &RegionChoice, year: Year) -> BarChart {
    build_bar_chart_with(table, region, year, &ChartOptions::default())
}

/// Bar chart of average price by region for `year`.
///
/// Rows are filtered on `year`, and on `region` unless the "All Regions"
/// sentinel is selected. Bars follow the order in which regions first appear.
/// A selection with no matching rows yields a chart with zero bars.
pub fn build_bar_chart_with(
    table: &Table,
    region: &RegionChoice,
    year: Year,
    options: &ChartOptions,
) -> BarChart {
    let filter = match region {
        RegionChoice::All => RowFilter::new().with_year(year),
        RegionChoice::Region(name) => RowFilter::new().with_year(year).with_region(name.as_str()),
    };

    let mut chart = BarChart::empty(bar_chart_title(region, year), options.bar_aggregation);
    chart.bars = group_by_region(table.filter(&filter))
        .into_iter()
        .map(|(label, segments)| Bar {
            label: label.to_string(),
            value: options.bar_aggregation.apply(&segments),
            segments,
        })
        .collect();
    chart
}

/// Choropleth of average price per region for `year`.
///
/// Regions are never filtered here. Each region is shaded by the mean of its
/// rows for the year, placed on the Viridis scale between the lowest and
/// highest shaded value.
pub fn build_choropleth_map(table: &Table, year: Year) -> ChoroplethMap {
    let filter = RowFilter::new().with_year(year);

    let means: Vec<(String, f64)> = group_by_region(table.filter(&filter))
        .into_iter()
        .map(|(location, values)| (location.to_string(), Aggregation::Average.apply(&values)))
        .collect();

    let mut map = ChoroplethMap::empty(choropleth_title(year));
    let Some(range) = ValueRange::from_values(means.iter().map(|(_, v)| *v)) else {
        return map;
    };

    let scale = map.color_scale;
    map.areas = means
        .into_iter()
        .map(|(location, value)| ShadedArea {
            color: scale.sample(range.normalize(value)).to_hex(),
            location,
            value,
        })
        .collect();
    map.range = Some(range);
    map
}

/// Group prices by region, preserving first-occurrence order
fn group_by_region<'a>(
    rows: impl Iterator<Item = &'a Observation>,
) -> IndexMap<&'a str, Vec<f64>> {
    let mut groups: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for row in rows {
        groups
            .entry(row.region.as_str())
            .or_default()
            .push(row.average_price);
    }
    groups
}

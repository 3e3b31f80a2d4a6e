//! Declarative chart specifications.
//!
//! A [`Figure`] describes what to draw (mark type, field-to-channel mapping,
//! color scale, geographic scope) and carries the already filtered data. It
//! says nothing about pixels: the rendering surface turns it into a drawable
//! plot. Figures are never edited in place; a recompute produces a new one.

use crate::chart::color::{ColorScale, ValueRange};
use crate::constants::{COL_AVERAGE_PRICE, COL_REGION, GEO_SCOPE, LOCATION_MODE};
use crate::types::Aggregation;
use serde::Serialize;

/// A complete chart specification ready for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Figure {
    Bar(BarChart),
    Choropleth(ChoroplethMap),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Bar(chart) => &chart.title,
            Figure::Choropleth(map) => &map.title,
        }
    }

    /// True when the filter behind this figure matched no rows
    pub fn is_empty(&self) -> bool {
        match self {
            Figure::Bar(chart) => chart.bars.is_empty(),
            Figure::Choropleth(map) => map.areas.is_empty(),
        }
    }
}

impl From<BarChart> for Figure {
    fn from(chart: BarChart) -> Self {
        Figure::Bar(chart)
    }
}

impl From<ChoroplethMap> for Figure {
    fn from(map: ChoroplethMap) -> Self {
        Figure::Choropleth(map)
    }
}

/// Bar chart: one bar per region
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    /// Field on the category axis
    pub x: String,
    /// Field on the value axis
    pub y: String,
    pub aggregation: Aggregation,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// A chart with axes set up but no bars
    pub fn empty(title: impl Into<String>, aggregation: Aggregation) -> Self {
        Self {
            title: title.into(),
            x: COL_REGION.to_string(),
            y: COL_AVERAGE_PRICE.to_string(),
            aggregation,
            bars: Vec::new(),
        }
    }

    pub fn bar(&self, label: &str) -> Option<&Bar> {
        self.bars.iter().find(|bar| bar.label == label)
    }
}

/// A single bar
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    /// Category label (region)
    pub label: String,
    /// Bar height after aggregation
    pub value: f64,
    /// Raw row values in file order; stacked when aggregation is `None`
    pub segments: Vec<f64>,
}

/// Choropleth map: one shaded area per region
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChoroplethMap {
    pub title: String,
    /// Field holding location codes
    pub locations: String,
    /// Field mapped onto the color scale
    pub color: String,
    pub location_mode: String,
    pub scope: String,
    pub color_scale: ColorScale,
    /// Span of the color scale; absent when nothing is shaded
    pub range: Option<ValueRange>,
    pub areas: Vec<ShadedArea>,
}

impl ChoroplethMap {
    /// A map with scope and scale set up but nothing shaded
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            locations: COL_REGION.to_string(),
            color: COL_AVERAGE_PRICE.to_string(),
            location_mode: LOCATION_MODE.to_string(),
            scope: GEO_SCOPE.to_string(),
            color_scale: ColorScale::default(),
            range: None,
            areas: Vec::new(),
        }
    }

    pub fn area(&self, location: &str) -> Option<&ShadedArea> {
        self.areas.iter().find(|area| area.location == location)
    }
}

/// One shaded location on the map
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadedArea {
    pub location: String,
    pub value: f64,
    /// `#rrggbb` sampled from the map's color scale
    pub color: String,
}

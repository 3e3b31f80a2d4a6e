//! Snapshot tests for the serialized figures and layout sent to the page.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::TestTableBuilder;
use avocado_board::chart::{Figure, build_bar_chart, build_choropleth_map};
use avocado_board::types::RegionChoice;

// ============================================================================
// Bar chart
// ============================================================================

#[test]
fn snapshot_bar_chart_all_regions() {
    let table = TestTableBuilder::new()
        .row("Albany", 2015, 1.2)
        .row("Chicago", 2015, 1.5)
        .row("Albany", 2016, 1.3)
        .build();

    let figure = Figure::from(build_bar_chart(&table, &RegionChoice::All, 2015));
    insta::assert_json_snapshot!(figure, @r###"
    {
      "type": "bar",
      "title": "Average Price for All Regions in 2015",
      "x": "region",
      "y": "AveragePrice",
      "aggregation": "none",
      "bars": [
        {
          "label": "Albany",
          "value": 1.2,
          "segments": [
            1.2
          ]
        },
        {
          "label": "Chicago",
          "value": 1.5,
          "segments": [
            1.5
          ]
        }
      ]
    }
    "###);
}

#[test]
fn snapshot_bar_chart_no_rows() {
    let table = TestTableBuilder::new().row("Albany", 2015, 1.2).build();

    let figure = Figure::from(build_bar_chart(
        &table,
        &RegionChoice::Region("Albany".into()),
        2016,
    ));
    insta::assert_json_snapshot!(figure, @r###"
    {
      "type": "bar",
      "title": "Average Price in Albany for 2016",
      "x": "region",
      "y": "AveragePrice",
      "aggregation": "none",
      "bars": []
    }
    "###);
}

// ============================================================================
// Choropleth map
// ============================================================================

#[test]
fn snapshot_choropleth_two_regions() {
    let table = TestTableBuilder::new()
        .row("Albany", 2015, 1.2)
        .row("Chicago", 2015, 1.5)
        .row("Boise", 2016, 1.1)
        .build();

    let figure = Figure::from(build_choropleth_map(&table, 2015));
    insta::assert_json_snapshot!(figure, @r###"
    {
      "type": "choropleth",
      "title": "Average Price per Region in 2015",
      "locations": "region",
      "color": "AveragePrice",
      "location_mode": "USA-states",
      "scope": "usa",
      "color_scale": "Viridis",
      "range": {
        "min": 1.2,
        "max": 1.5
      },
      "areas": [
        {
          "location": "Albany",
          "value": 1.2,
          "color": "#440154"
        },
        {
          "location": "Chicago",
          "value": 1.5,
          "color": "#fde725"
        }
      ]
    }
    "###);
}

#[test]
fn snapshot_choropleth_no_rows() {
    let table = TestTableBuilder::new().row("Albany", 2015, 1.2).build();

    let figure = Figure::from(build_choropleth_map(&table, 1999));
    insta::assert_json_snapshot!(figure, @r###"
    {
      "type": "choropleth",
      "title": "Average Price per Region in 1999",
      "locations": "region",
      "color": "AveragePrice",
      "location_mode": "USA-states",
      "scope": "usa",
      "color_scale": "Viridis",
      "range": null,
      "areas": []
    }
    "###);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn snapshot_layout() {
    let dashboard = TestTableBuilder::new().row("Albany", 2015, 1.2).dashboard();

    insta::assert_json_snapshot!(dashboard.layout(), @r###"
    {
      "heading": "Avocado Prices",
      "children": [
        {
          "component": "dropdown",
          "id": "region-dropdown",
          "control": "region",
          "options": [
            {
              "label": "Albany",
              "value": "Albany"
            },
            {
              "label": "All Regions",
              "value": "All Regions"
            }
          ],
          "value": "Albany",
          "multi": false,
          "width": "50%"
        },
        {
          "component": "dropdown",
          "id": "year-dropdown",
          "control": "year",
          "options": [
            {
              "label": "2015",
              "value": "2015"
            }
          ],
          "value": "2015",
          "multi": false,
          "width": "50%"
        },
        {
          "component": "graph",
          "id": "bar-chart"
        },
        {
          "component": "graph",
          "id": "choropleth-map"
        }
      ]
    }
    "###);
}

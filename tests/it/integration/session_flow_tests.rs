//! End-to-end control flows through a dashboard session.

use crate::helpers::{TestTableBuilder, sample_dashboard};
use avocado_board::chart::Figure;
use avocado_board::reactive::{ControlChange, OutputId};
use avocado_board::types::RegionChoice;

fn bar_title(session: &avocado_board::reactive::Session) -> String {
    session.output(OutputId::BarChart).unwrap().title().to_string()
}

#[test]
fn test_initial_render_uses_first_domain_values() {
    let dashboard = sample_dashboard();
    let session = dashboard.new_session();

    assert_eq!(bar_title(&session), "Average Price in Albany for 2015");
    let map = session.output(OutputId::ChoroplethMap).unwrap();
    assert_eq!(map.title(), "Average Price per Region in 2015");
    assert!(!map.is_empty());
}

#[test]
fn test_year_change_updates_both_outputs() {
    let dashboard = sample_dashboard();
    let mut session = dashboard.new_session();

    let update = session.publish(ControlChange::Year(2016));

    assert_eq!(update.updated, vec![OutputId::BarChart, OutputId::ChoroplethMap]);
    assert!(!update.out_of_domain);
    assert_eq!(bar_title(&session), "Average Price in Albany for 2016");

    let Some(Figure::Choropleth(map)) = session.output(OutputId::ChoroplethMap) else {
        panic!("expected a choropleth");
    };
    let shaded: Vec<_> = map.areas.iter().map(|a| a.location.as_str()).collect();
    assert_eq!(shaded, vec!["Boise", "Albany", "Chicago"]);
}

#[test]
fn test_region_change_leaves_map_untouched() {
    let dashboard = sample_dashboard();
    let mut session = dashboard.new_session();
    let map_before = session.output(OutputId::ChoroplethMap).cloned();

    let update = session.publish(ControlChange::Region(RegionChoice::All));

    assert_eq!(update.updated, vec![OutputId::BarChart]);
    assert_eq!(bar_title(&session), "Average Price for All Regions in 2015");
    assert_eq!(session.output(OutputId::ChoroplethMap).cloned(), map_before);

    let Some(Figure::Bar(chart)) = session.output(OutputId::BarChart) else {
        panic!("expected a bar chart");
    };
    let labels: Vec<_> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Albany", "Chicago"]);
}

#[test]
fn test_republishing_same_value_is_a_noop() {
    let dashboard = sample_dashboard();
    let mut session = dashboard.new_session();

    let update = session.publish(ControlChange::Year(2015));
    assert!(update.is_noop());

    let update = session.publish(ControlChange::Region(RegionChoice::Region("Albany".into())));
    assert!(update.is_noop());
}

#[test]
fn test_out_of_domain_values_give_empty_figures() {
    let dashboard = sample_dashboard();
    let mut session = dashboard.new_session();

    let update = session.publish(ControlChange::Year(1999));
    assert!(update.out_of_domain);
    assert_eq!(session.controls().year, Some(1999));
    assert!(session.output(OutputId::BarChart).unwrap().is_empty());
    assert!(session.output(OutputId::ChoroplethMap).unwrap().is_empty());

    let update = session.publish(ControlChange::Region(RegionChoice::Region("Atlantis".into())));
    assert!(update.out_of_domain);
    assert_eq!(update.updated, vec![OutputId::BarChart]);
}

#[test]
fn test_sessions_do_not_share_controls() {
    let dashboard = sample_dashboard();
    let mut first = dashboard.new_session();
    let second = dashboard.new_session();

    first.publish(ControlChange::Year(2016));

    assert_eq!(first.controls().year, Some(2016));
    assert_eq!(second.controls().year, Some(2015));
    assert_eq!(bar_title(&second), "Average Price in Albany for 2015");
}

#[test]
fn test_empty_dataset_has_no_figures() {
    let dashboard = TestTableBuilder::new().dashboard();
    let session = dashboard.new_session();

    assert!(session.output(OutputId::BarChart).is_none());
    assert!(session.output(OutputId::ChoroplethMap).is_none());
}

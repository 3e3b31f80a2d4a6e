//! Control domain derivation.

use crate::helpers::{TestTableBuilder, sample_table};
use avocado_board::controls::{ControlState, Domains};
use avocado_board::types::{DomainOrder, RegionChoice};

fn labels(domains: &Domains) -> Vec<String> {
    domains.regions().iter().map(|r| r.to_string()).collect()
}

#[test]
fn test_first_occurrence_order() {
    let domains = Domains::derive(&sample_table(), DomainOrder::FirstOccurrence);

    assert_eq!(labels(&domains), vec!["Albany", "Chicago", "Boise", "All Regions"]);
    assert_eq!(domains.years(), &[2015, 2016]);
}

#[test]
fn test_sorted_order() {
    let table = TestTableBuilder::new()
        .row("Chicago", 2017, 1.0)
        .row("Albany", 2015, 1.1)
        .row("Boise", 2016, 1.2)
        .build();
    let domains = Domains::derive(&table, DomainOrder::Sorted);

    assert_eq!(labels(&domains), vec!["Albany", "Boise", "Chicago", "All Regions"]);
    assert_eq!(domains.years(), &[2015, 2016, 2017]);
}

#[test]
fn test_sentinel_appears_exactly_once_and_last() {
    let domains = Domains::derive(&sample_table(), DomainOrder::FirstOccurrence);
    let sentinels = domains.regions().iter().filter(|r| r.is_all()).count();

    assert_eq!(sentinels, 1);
    assert_eq!(domains.regions().last(), Some(&RegionChoice::All));
}

#[test]
fn test_derivation_is_deterministic() {
    let table = sample_table();
    for order in [DomainOrder::FirstOccurrence, DomainOrder::Sorted] {
        assert_eq!(Domains::derive(&table, order), Domains::derive(&table, order));
    }
}

#[test]
fn test_initial_state_is_first_of_each_domain() {
    let domains = Domains::derive(&sample_table(), DomainOrder::FirstOccurrence);
    assert_eq!(
        domains.initial_state(),
        ControlState::new(RegionChoice::Region("Albany".into()), 2015)
    );
}

#[test]
fn test_empty_table_has_only_the_sentinel() {
    let domains = Domains::derive(&TestTableBuilder::new().build(), DomainOrder::default());

    assert_eq!(domains.regions(), &[RegionChoice::All]);
    assert!(domains.years().is_empty());

    let state = domains.initial_state();
    assert_eq!(state.region, Some(RegionChoice::All));
    assert_eq!(state.year, None);
}

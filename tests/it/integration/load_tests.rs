//! Loading a dataset file into a dashboard.

use crate::helpers::write_csv;
use avocado_board::dashboard::Dashboard;
use avocado_board::data::DataLoadError;
use avocado_board::settings::Settings;
use avocado_board::types::{DomainOrder, RegionChoice};

#[test]
fn test_dashboard_loads_csv_with_extra_columns() {
    let (_dir, path) = write_csv(&[
        ("Chicago", 2016, 1.5),
        ("Albany", 2015, 1.25),
        ("Albany", 2016, 1.75),
    ]);
    let settings = Settings {
        data_path: path,
        ..Settings::default()
    };

    let dashboard = Dashboard::load(&settings).unwrap();

    assert_eq!(dashboard.table().row_count(), 3);
    let regions: Vec<_> = dashboard.domains().regions().iter().map(|r| r.to_string()).collect();
    assert_eq!(regions, vec!["Chicago", "Albany", "All Regions"]);
    assert_eq!(dashboard.domains().years(), &[2016, 2015]);
}

#[test]
fn test_sorted_domains_from_settings() {
    let (_dir, path) = write_csv(&[("Chicago", 2016, 1.5), ("Albany", 2015, 1.25)]);
    let settings = Settings {
        data_path: path,
        domain_order: DomainOrder::Sorted,
        ..Settings::default()
    };

    let dashboard = Dashboard::load(&settings).unwrap();

    assert_eq!(
        dashboard.domains().regions().first(),
        Some(&RegionChoice::Region("Albany".into()))
    );
    assert_eq!(dashboard.domains().years(), &[2015, 2016]);
}

#[test]
fn test_missing_dataset_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        data_path: dir.path().join("absent.csv"),
        ..Settings::default()
    };

    assert!(matches!(
        Dashboard::load(&settings),
        Err(DataLoadError::NotFound { .. })
    ));
}

//! The dashboard served over a real socket.

use crate::helpers::sample_dashboard;
use avocado_board::server::{AppState, DashboardServer};
use serde_json::Value;
use std::sync::Arc;

#[test]
fn test_serves_page_and_session_updates() {
    let state = Arc::new(AppState::new(sample_dashboard(), 4));
    let server = DashboardServer::start(state, "127.0.0.1:0").unwrap();
    assert_ne!(server.addr().port(), 0);

    let client = reqwest::blocking::Client::new();
    let base = server.url();

    let page = client.get(&base).send().unwrap();
    assert_eq!(page.status().as_u16(), 200);
    assert!(page.text().unwrap().contains("Avocado Prices"));

    let created = client.post(format!("{base}api/sessions")).send().unwrap();
    assert_eq!(created.status().as_u16(), 201);
    let created: Value = serde_json::from_str(&created.text().unwrap()).unwrap();
    let id = created["session"].as_str().unwrap();

    let updated = client
        .post(format!("{base}api/sessions/{id}/controls/year?value=2016"))
        .send()
        .unwrap();
    assert_eq!(updated.status().as_u16(), 200);
    let updated: Value = serde_json::from_str(&updated.text().unwrap()).unwrap();
    assert_eq!(
        updated["outputs"]["choropleth-map"]["title"],
        "Average Price per Region in 2016"
    );

    server.shutdown();
}

#[test]
fn test_bind_failure_is_reported() {
    let state = Arc::new(AppState::new(sample_dashboard(), 4));
    let first = DashboardServer::start(Arc::clone(&state), "127.0.0.1:0").unwrap();

    let taken = first.addr().to_string();
    assert!(DashboardServer::start(state, &taken).is_err());
}

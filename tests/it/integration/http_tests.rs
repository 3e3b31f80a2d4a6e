//! Request handling without a socket.

use crate::helpers::sample_dashboard;
use avocado_board::server::{AppState, handle};
use serde_json::Value;
use tiny_http::Method;

fn state() -> AppState {
    AppState::new(sample_dashboard(), 8)
}

fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

fn create_session(state: &AppState) -> String {
    let resp = handle(state, &Method::Post, "/api/sessions");
    assert_eq!(resp.status, 201);
    json(&resp.body)["session"].as_str().unwrap().to_string()
}

#[test]
fn test_page_and_layout() {
    let state = state();

    let page = handle(&state, &Method::Get, "/");
    assert_eq!(page.status, 200);
    assert!(page.content_type.starts_with("text/html"));

    let layout = handle(&state, &Method::Get, "/api/layout");
    assert_eq!(layout.status, 200);
    let layout = json(&layout.body);
    assert_eq!(layout["heading"], "Avocado Prices");
    assert_eq!(layout["children"][0]["id"], "region-dropdown");
    assert_eq!(layout["children"][1]["value"], "2015");
    assert_eq!(layout["children"][2]["component"], "graph");
}

#[test]
fn test_session_lifecycle() {
    let state = state();
    let id = create_session(&state);

    let resp = handle(&state, &Method::Get, &format!("/api/sessions/{id}"));
    assert_eq!(resp.status, 200);
    let body = json(&resp.body);
    assert_eq!(body["controls"]["region"], "Albany");
    assert_eq!(body["controls"]["year"], 2015);
    assert_eq!(body["outputs"]["bar-chart"]["type"], "bar");
    assert_eq!(body["outputs"]["choropleth-map"]["type"], "choropleth");

    let resp = handle(&state, &Method::Delete, &format!("/api/sessions/{id}"));
    assert_eq!(resp.status, 204);
    let resp = handle(&state, &Method::Get, &format!("/api/sessions/{id}"));
    assert_eq!(resp.status, 404);
}

#[test]
fn test_region_change_returns_only_bar_chart() {
    let state = state();
    let id = create_session(&state);

    let resp = handle(
        &state,
        &Method::Post,
        &format!("/api/sessions/{id}/controls/region?value=All+Regions"),
    );
    assert_eq!(resp.status, 200);
    let body = json(&resp.body);
    assert_eq!(body["updated"], serde_json::json!(["bar-chart"]));
    assert_eq!(
        body["outputs"]["bar-chart"]["title"],
        "Average Price for All Regions in 2015"
    );
    assert!(body["outputs"].get("choropleth-map").is_none());
    assert!(body.get("out_of_domain").is_none());
}

#[test]
fn test_unparsable_year_is_rejected() {
    let state = state();
    let id = create_session(&state);

    let resp = handle(
        &state,
        &Method::Post,
        &format!("/api/sessions/{id}/controls/year?value=abc"),
    );
    assert_eq!(resp.status, 400);
    assert!(json(&resp.body)["error"].as_str().unwrap().contains("abc"));

    let resp = handle(&state, &Method::Get, &format!("/api/sessions/{id}"));
    assert_eq!(json(&resp.body)["controls"]["year"], 2015);
}

#[test]
fn test_out_of_domain_year_is_flagged() {
    let state = state();
    let id = create_session(&state);

    let resp = handle(
        &state,
        &Method::Post,
        &format!("/api/sessions/{id}/controls/year?value=1999"),
    );
    assert_eq!(resp.status, 200);
    let body = json(&resp.body);
    assert_eq!(body["out_of_domain"], true);
    assert_eq!(body["outputs"]["bar-chart"]["bars"], serde_json::json!([]));
    assert_eq!(body["outputs"]["choropleth-map"]["areas"], serde_json::json!([]));
}

#[test]
fn test_missing_value_and_unknown_routes() {
    let state = state();
    let id = create_session(&state);

    let resp = handle(&state, &Method::Post, &format!("/api/sessions/{id}/controls/year"));
    assert_eq!(resp.status, 400);

    let resp = handle(&state, &Method::Get, "/api/nothing");
    assert_eq!(resp.status, 404);

    let resp = handle(
        &state,
        &Method::Post,
        "/api/sessions/00000000-0000-0000-0000-000000000000/controls/year?value=2016",
    );
    assert_eq!(resp.status, 404);
}

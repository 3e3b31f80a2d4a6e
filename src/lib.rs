//! Avocado price dashboard.
//!
//! Loads a table of regional average prices once, then serves a page with a
//! region dropdown, a year dropdown, a bar chart and a US choropleth map.
//! Control changes flow through a small reactive layer that recomputes only
//! the figures reading the changed control.

pub mod chart;
pub mod cli;
pub mod constants;
pub mod controls;
pub mod dashboard;
pub mod data;
pub mod layout;
pub mod perf;
pub mod reactive;
pub mod server;
pub mod settings;
pub mod telemetry;
pub mod types;

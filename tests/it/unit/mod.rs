//! Unit tests for single components.

mod domain_tests;
mod figure_snapshot_tests;

//! Single test binary entry point.
//!
//! Structure:
//! - helpers: table and dashboard builders shared by all tests
//! - integration: sessions, HTTP routing and the running server
//! - unit: figures, domains and builder properties

mod unit;

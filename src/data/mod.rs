//! Data loading and the in-memory table
//!
//! The dataset is read once at startup into a [`Table`], which is then
//! shared read-only with the chart builders and every dashboard session.
//!
//! ## Error Handling
//!
//! Loading returns `DataResult<T>` which uses the `DataLoadError` type.
//! Any load error is fatal for the dashboard: there is no placeholder data.

mod error;
mod loader;
mod table;

pub use error::*;
pub use loader::*;
pub use table::*;

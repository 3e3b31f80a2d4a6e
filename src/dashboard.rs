//! Dashboard assembly.
//!
//! Owns everything derived once at startup: the table, the control domains
//! and the rule graph. Sessions are cut from it on demand and share those
//! parts through `Arc`.

use crate::chart::ChartOptions;
use crate::controls::Domains;
use crate::data::{DataResult, Table};
use crate::layout::Layout;
use crate::perf::measure;
use crate::reactive::{BindingGraph, Session};
use crate::settings::Settings;
use crate::types::{Aggregation, DomainOrder};
use std::sync::Arc;

/// Startup options that shape domains and figures
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardOptions {
    pub domain_order: DomainOrder,
    pub bar_aggregation: Aggregation,
    pub slow_recompute_ms: f64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DashboardOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            domain_order: settings.domain_order,
            bar_aggregation: settings.bar_aggregation,
            slow_recompute_ms: settings.slow_recompute_ms,
        }
    }
}

/// The read-only core shared by every session
pub struct Dashboard {
    table: Arc<Table>,
    domains: Arc<Domains>,
    graph: Arc<BindingGraph>,
}

impl Dashboard {
    /// Load the dataset named in `settings` and derive everything from it
    pub fn load(settings: &Settings) -> DataResult<Self> {
        let (table, elapsed_ms) = measure(|| Table::load(&settings.data_path));
        let table = table?;
        tracing::debug!(elapsed_ms, "Table ready");
        Ok(Self::new(table, DashboardOptions::from(settings)))
    }

    pub fn new(table: Table, options: DashboardOptions) -> Self {
        let domains = Domains::derive(&table, options.domain_order);
        let chart_options = ChartOptions::default().with_bar_aggregation(options.bar_aggregation);
        let graph = BindingGraph::dashboard(chart_options)
            .with_slow_recompute_ms(options.slow_recompute_ms);

        Self {
            table: Arc::new(table),
            domains: Arc::new(domains),
            graph: Arc::new(graph),
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn graph(&self) -> &BindingGraph {
        &self.graph
    }

    /// Layout with dropdowns at their default selection
    pub fn layout(&self) -> Layout {
        Layout::for_dashboard(&self.domains, &self.domains.initial_state())
    }

    /// A fresh session at the default selection
    pub fn new_session(&self) -> Session {
        Session::new(
            Arc::clone(&self.table),
            Arc::clone(&self.domains),
            Arc::clone(&self.graph),
        )
    }
}

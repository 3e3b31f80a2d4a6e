//! Reactive rules: which outputs depend on which controls.

use crate::chart::{ChartOptions, Figure, build_bar_chart_with, build_choropleth_map};
use crate::constants::{BAR_CHART_ID, CHOROPLETH_MAP_ID, DEFAULT_SLOW_RECOMPUTE_MS};
use crate::controls::{ControlId, ControlState};
use crate::data::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A display area fed by one rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "bar-chart")]
    BarChart,
    #[serde(rename = "choropleth-map")]
    ChoroplethMap,
}

impl OutputId {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputId::BarChart => BAR_CHART_ID,
            OutputId::ChoroplethMap => CHOROPLETH_MAP_ID,
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recompute function of a rule.
///
/// Receives the current value of every control, not just the one that
/// changed. Returns `None` when a required input has no value.
pub type RecomputeFn = dyn Fn(&Table, &ControlState) -> Option<Figure> + Send + Sync;

/// One rule: an output, the controls it reads, and how to rebuild it
pub struct Binding {
    output: OutputId,
    inputs: Vec<ControlId>,
    recompute: Box<RecomputeFn>,
}

impl Binding {
    pub fn output(&self) -> OutputId {
        self.output
    }

    pub fn inputs(&self) -> &[ControlId] {
        &self.inputs
    }

    pub fn depends_on(&self, control: ControlId) -> bool {
        self.inputs.contains(&control)
    }

    /// Run the recompute function against the current control values
    pub fn evaluate(&self, table: &Table, controls: &ControlState) -> Option<Figure> {
        (self.recompute)(table, controls)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

/// The rule table shared by every session.
///
/// Sessions subscribe through it: when a control publishes a new value,
/// every rule listing that control is re-run, in registration order.
#[derive(Debug)]
pub struct BindingGraph {
    bindings: Vec<Binding>,
    slow_recompute_ms: f64,
}

impl Default for BindingGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingGraph {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            slow_recompute_ms: DEFAULT_SLOW_RECOMPUTE_MS,
        }
    }

    /// The two dashboard rules.
    ///
    /// - bar chart ← {region, year}
    /// - choropleth map ← {year}
    pub fn dashboard(options: ChartOptions) -> Self {
        Self::new()
            .bind(
                OutputId::BarChart,
                &[ControlId::Region, ControlId::Year],
                move |table, controls| {
                    let region = controls.region.as_ref()?;
                    let year = controls.year?;
                    Some(build_bar_chart_with(table, region, year, &options).into())
                },
            )
            .bind(
                OutputId::ChoroplethMap,
                &[ControlId::Year],
                |table, controls| Some(build_choropleth_map(table, controls.year?).into()),
            )
    }

    /// Register a rule. Registering the same output twice replaces the rule.
    pub fn bind<F>(mut self, output: OutputId, inputs: &[ControlId], recompute: F) -> Self
    where
        F: Fn(&Table, &ControlState) -> Option<Figure> + Send + Sync + 'static,
    {
        self.bindings.retain(|b| b.output != output);
        self.bindings.push(Binding {
            output,
            inputs: inputs.to_vec(),
            recompute: Box::new(recompute),
        });
        self
    }

    pub fn with_slow_recompute_ms(mut self, threshold_ms: f64) -> Self {
        self.slow_recompute_ms = threshold_ms;
        self
    }

    pub fn slow_recompute_ms(&self) -> f64 {
        self.slow_recompute_ms
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Rules that must re-run when `control` changes
    pub fn dependents(&self, control: ControlId) -> impl Iterator<Item = &Binding> + '_ {
        self.bindings.iter().filter(move |b| b.depends_on(control))
    }

    pub fn outputs(&self) -> impl Iterator<Item = OutputId> + '_ {
        self.bindings.iter().map(|b| b.output)
    }
}

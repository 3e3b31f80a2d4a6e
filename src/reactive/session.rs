//! Per-session control state and same-thread dispatch.

use crate::chart::Figure;
use crate::controls::{ControlId, ControlState, Domains};
use crate::data::Table;
use crate::perf::ScopedTimer;
use crate::reactive::binding::{BindingGraph, OutputId};
use crate::types::{RegionChoice, Year};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// A new value published by one control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlChange {
    Region(RegionChoice),
    Year(Year),
}

impl ControlChange {
    pub fn control(&self) -> ControlId {
        match self {
            ControlChange::Region(_) => ControlId::Region,
            ControlChange::Year(_) => ControlId::Year,
        }
    }

    /// Interpret a raw wire value for `control`
    pub fn parse(control: ControlId, raw: &str) -> Result<Self, InvalidControlValue> {
        match control {
            ControlId::Region => Ok(ControlChange::Region(RegionChoice::parse(raw))),
            ControlId::Year => raw
                .trim()
                .parse::<Year>()
                .map(ControlChange::Year)
                .map_err(|_| InvalidControlValue {
                    control,
                    value: raw.to_string(),
                }),
        }
    }
}

/// A raw value that cannot be a value of its control at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value '{value}' for the {control} control")]
pub struct InvalidControlValue {
    pub control: ControlId,
    pub value: String,
}

/// What a publish did
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Update {
    /// Outputs that were recomputed, in rule order
    pub updated: Vec<OutputId>,
    /// The published value was not in the control's domain
    pub out_of_domain: bool,
}

impl Update {
    pub fn is_noop(&self) -> bool {
        self.updated.is_empty()
    }
}

/// One dashboard page: its own control values and the outputs derived
/// from them.
///
/// The table, domains and rule graph are shared; the control state is not.
pub struct Session {
    table: Arc<Table>,
    domains: Arc<Domains>,
    graph: Arc<BindingGraph>,
    controls: ControlState,
    outputs: IndexMap<OutputId, Option<Figure>>,
}

impl Session {
    /// Start a session at the domains' initial state
    pub fn new(table: Arc<Table>, domains: Arc<Domains>, graph: Arc<BindingGraph>) -> Self {
        let controls = domains.initial_state();
        Self::with_controls(table, domains, graph, controls)
    }

    /// Start a session at an explicit state; every output is computed once
    pub fn with_controls(
        table: Arc<Table>,
        domains: Arc<Domains>,
        graph: Arc<BindingGraph>,
        controls: ControlState,
    ) -> Self {
        let mut session = Self {
            table,
            domains,
            graph,
            controls,
            outputs: IndexMap::new(),
        };
        let graph = Arc::clone(&session.graph);
        for binding in graph.bindings() {
            session.recompute(binding.output());
        }
        session
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Current figure of `output`, if its inputs are all set
    pub fn output(&self, output: OutputId) -> Option<&Figure> {
        self.outputs.get(&output).and_then(Option::as_ref)
    }

    /// Apply a control change and synchronously recompute its dependents.
    ///
    /// Publishing the value a control already holds does nothing. Values
    /// outside the domain are applied anyway; since they match no rows the
    /// dependent figures come back empty.
    pub fn publish(&mut self, change: ControlChange) -> Update {
        let control = change.control();
        let out_of_domain = match &change {
            ControlChange::Region(region) => !self.domains.contains_region(region),
            ControlChange::Year(year) => !self.domains.contains_year(*year),
        };

        let changed = match change {
            ControlChange::Region(region) => {
                let changed = self.controls.region.as_ref() != Some(&region);
                self.controls.region = Some(region);
                changed
            }
            ControlChange::Year(year) => {
                let changed = self.controls.year != Some(year);
                self.controls.year = Some(year);
                changed
            }
        };

        if !changed {
            tracing::trace!(%control, "Control value unchanged");
            return Update::default();
        }
        if out_of_domain {
            tracing::warn!(%control, "Control value outside its domain, charts will be empty");
        }

        let graph = Arc::clone(&self.graph);
        let updated: Vec<OutputId> = graph
            .dependents(control)
            .map(|binding| {
                self.recompute(binding.output());
                binding.output()
            })
            .collect();

        tracing::debug!(%control, recomputed = updated.len(), "Control changed");

        Update {
            updated,
            out_of_domain,
        }
    }

    /// Snapshot of the controls and every output
    pub fn view(&self) -> SessionView {
        SessionView {
            controls: self.controls.clone(),
            outputs: self.outputs.clone(),
        }
    }

    /// Snapshot of the controls and only the listed outputs
    pub fn view_of(&self, outputs: &[OutputId]) -> SessionView {
        SessionView {
            controls: self.controls.clone(),
            outputs: outputs
                .iter()
                .map(|id| (*id, self.outputs.get(id).cloned().flatten()))
                .collect(),
        }
    }

    fn recompute(&mut self, output: OutputId) {
        let Some(binding) = self.graph.bindings().iter().find(|b| b.output() == output) else {
            return;
        };
        let figure = {
            let _timer = ScopedTimer::new(output.as_str(), self.graph.slow_recompute_ms());
            binding.evaluate(&self.table, &self.controls)
        };
        self.outputs.insert(output, figure);
    }
}

/// Serializable state of a session
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionView {
    pub controls: ControlState,
    pub outputs: IndexMap<OutputId, Option<Figure>>,
}

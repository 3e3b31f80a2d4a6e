//! Declarative page layout.
//!
//! Describes the dashboard page as data: a heading, the two dropdowns with
//! their options and current values, and the two graph areas. The page
//! script builds its DOM from this description.

use crate::constants::{
    DASHBOARD_HEADING, DROPDOWN_WIDTH, REGION_DROPDOWN_ID, YEAR_DROPDOWN_ID,
};
use crate::controls::{ControlId, ControlState, Domains};
use crate::reactive::OutputId;
use serde::Serialize;

/// The whole page
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub heading: String,
    pub children: Vec<Component>,
}

/// A page element
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Dropdown(Dropdown),
    Graph(GraphArea),
}

/// Single-select dropdown bound to a control
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub control: ControlId,
    pub options: Vec<DropdownOption>,
    pub value: Option<String>,
    pub multi: bool,
    pub width: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    fn new(value: impl ToString) -> Self {
        let value = value.to_string();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Area where one output's figure is drawn
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphArea {
    pub id: OutputId,
}

impl Layout {
    /// Layout for the dashboard, with dropdowns preset to `controls`
    pub fn for_dashboard(domains: &Domains, controls: &ControlState) -> Self {
        let region = Dropdown {
            id: REGION_DROPDOWN_ID.to_string(),
            control: ControlId::Region,
            options: domains.regions().iter().map(DropdownOption::new).collect(),
            value: controls.region.as_ref().map(ToString::to_string),
            multi: false,
            width: DROPDOWN_WIDTH.to_string(),
        };
        let year = Dropdown {
            id: YEAR_DROPDOWN_ID.to_string(),
            control: ControlId::Year,
            options: domains.years().iter().map(DropdownOption::new).collect(),
            value: controls.year.map(|y| y.to_string()),
            multi: false,
            width: DROPDOWN_WIDTH.to_string(),
        };

        Self {
            heading: DASHBOARD_HEADING.to_string(),
            children: vec![
                Component::Dropdown(region),
                Component::Dropdown(year),
                Component::Graph(GraphArea {
                    id: OutputId::BarChart,
                }),
                Component::Graph(GraphArea {
                    id: OutputId::ChoroplethMap,
                }),
            ],
        }
    }

    pub fn dropdown(&self, control: ControlId) -> Option<&Dropdown> {
        self.children.iter().find_map(|child| match child {
            Component::Dropdown(d) if d.control == control => Some(d),
            _ => None,
        })
    }

    pub fn graphs(&self) -> impl Iterator<Item = OutputId> + '_ {
        self.children.iter().filter_map(|child| match child {
            Component::Graph(g) => Some(g.id),
            Component::Dropdown(_) => None,
        })
    }
}

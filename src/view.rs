use serde::{Deserialize, Serialize};
use std::fmt;

/// The screen the surrounding application is showing. Derived outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    WorkflowList,
    FlowBuilder,
    ContactCenters,
}

impl View {
    pub fn token(&self) -> &'static str {
        match self {
            View::WorkflowList => "workflow-list",
            View::FlowBuilder => "flow-builder",
            View::ContactCenters => "contact-centers",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Navigation requests issued back to the host application.
pub trait Navigator {
    fn navigate_to(&mut self, view: View);
    fn set_drawer_open(&mut self, open: bool);
}

//! The workflow list screen: canned workflows, skill filtering and skill badges.

use crate::render::{SkillBadge, list_badges};
use serde::{Deserialize, Serialize};
use tracing::debug;

mod data;

pub use data::canned_workflows;

/// Agent skills the demo contact center has on staff.
pub const AVAILABLE_AGENT_SKILLS: [&str; 1] = ["Sales"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub entry_points: u32,
    pub skills: Vec<String>,
    pub user: String,
    pub user_initials: String,
    pub date: String,
}

/// Filter applied to the workflow table. An unset skill shows every workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowFilter {
    pub skill: Option<String>,
}

impl WorkflowFilter {
    pub fn by_skill(skill: impl Into<String>) -> Self {
        Self {
            skill: Some(skill.into()),
        }
    }

    pub fn matches(&self, workflow: &Workflow) -> bool {
        match self.skill.as_deref() {
            None | Some("") => true,
            Some(skill) => workflow.skills.iter().any(|s| s == skill),
        }
    }

    pub fn apply<'a>(&self, workflows: &'a [Workflow]) -> Vec<&'a Workflow> {
        let shown: Vec<_> = workflows.iter().filter(|w| self.matches(w)).collect();
        debug!(filter = ?self.skill, shown = shown.len(), "workflow list filtered");
        shown
    }
}

/// Skill badges of one workflow row.
///
/// With multi-skill display off only the first skill is shown.
pub fn workflow_badges(workflow: &Workflow, multiple_skills: bool) -> Vec<SkillBadge> {
    if multiple_skills {
        list_badges(&workflow.skills)
    } else {
        list_badges(&workflow.skills[..workflow.skills.len().min(1)])
    }
}

/// Skills a routing workflow requires that none of `available` covers.
///
/// Workflows without a requirement entry never miss anything.
pub fn missing_skills(workflow_name: &str, available: &[&str]) -> Vec<&'static str> {
    data::required_skills(workflow_name)
        .iter()
        .copied()
        .filter(|skill| !available.contains(skill))
        .collect()
}

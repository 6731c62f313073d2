use serde::{Deserialize, Serialize};
use std::fmt;

/// The three named groups of assignable values, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillGroup {
    Skills,
    Variables,
    SystemVariables,
}

impl SkillGroup {
    /// Groups are always rendered in this order.
    pub const ALL: [SkillGroup; 3] = [
        SkillGroup::Skills,
        SkillGroup::Variables,
        SkillGroup::SystemVariables,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            SkillGroup::Skills => "SKILLS",
            SkillGroup::Variables => "VARIABLES",
            SkillGroup::SystemVariables => "SYSTEM VARIABLES",
        }
    }
}

impl fmt::Display for SkillGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// A catalog group after search filtering. Only groups with at least one entry are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredGroup<'a> {
    pub group: SkillGroup,
    pub entries: Vec<&'a str>,
}

/// Static, categorized list of values a node can be assigned.
///
/// The catalog is read-only during a session. Custom values typed by the user
/// are never inserted here; they only live in the node's skill assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<String>,
    pub variables: Vec<String>,
    pub system_variables: Vec<String>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            skills: owned(&[
                "Billing Support",
                "Customer Service",
                "Enterprise Customers",
                "Payment Issues",
                "Product XYZ Sales",
                "Sales Support",
                "Spanish",
                "Subscription Management",
                "Technical Support",
            ]),
            variables: owned(&["skill_route", "company_name", "customer_type"]),
            system_variables: owned(&["call.UUID", "caller.number", "called.number"]),
        }
    }
}

impl SkillCatalog {
    pub fn group(&self, group: SkillGroup) -> &[String] {
        match group {
            SkillGroup::Skills => &self.skills,
            SkillGroup::Variables => &self.variables,
            SkillGroup::SystemVariables => &self.system_variables,
        }
    }

    /// Returns every group with its entries matching `term`, in fixed group order.
    ///
    /// Matching is a case-insensitive substring test. An empty term matches
    /// everything. Groups left without matches are omitted.
    pub fn filter(&self, term: &str) -> Vec<FilteredGroup<'_>> {
        let needle = term.to_lowercase();
        SkillGroup::ALL
            .iter()
            .filter_map(|&group| {
                let entries: Vec<&str> = self
                    .group(group)
                    .iter()
                    .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
                    .map(String::as_str)
                    .collect();
                (!entries.is_empty()).then_some(FilteredGroup { group, entries })
            })
            .collect()
    }

    pub fn contains(&self, value: &str) -> bool {
        SkillGroup::ALL
            .iter()
            .any(|&group| self.group(group).iter().any(|item| item == value))
    }

    pub fn len(&self) -> usize {
        self.skills.len() + self.variables.len() + self.system_variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

use super::form::EditForm;
use crate::node::{Destination, LabelPair, NodeStore, StepType, resolve_destination_label};
use crate::skill::SkillSet;
use tracing::{debug, info, warn};

/// What a commit did to each attribute of the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<T> {
    Set(T),
    Cleared,
    Unchanged,
}

impl<T> Change<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Change::Set(_))
    }
}

/// Summary of one Update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub destination: Change<String>,
    pub label_pair: Change<LabelPair>,
    pub skill: Change<String>,
    pub display_name: Change<String>,
}

impl CommitReport {
    fn untouched() -> Self {
        Self {
            destination: Change::Unchanged,
            label_pair: Change::Unchanged,
            skill: Change::Unchanged,
            display_name: Change::Unchanged,
        }
    }
}

/// Writes `form` into `store` according to the node's step type.
pub(crate) fn commit(store: &mut NodeStore, form: &EditForm) -> CommitReport {
    let report = match form.step_type {
        StepType::Transfer => commit_transfer(store, form),
        StepType::Skills => commit_skills_node(store, form),
        other => {
            debug!(node = %form.node_id, step = %other, "step type has no editable configuration");
            CommitReport::untouched()
        }
    };
    info!(node = %form.node_id, ?report, "node configuration committed");
    report
}

fn commit_transfer(store: &mut NodeStore, form: &EditForm) -> CommitReport {
    let id = &form.node_id;
    let mut report = CommitReport::untouched();

    // An unresolvable label never clears what is already stored.
    match resolve_destination_label(form.destination, form.contact_center) {
        Some(label) => {
            store.set_destination(id, label);
            report.destination = Change::Set(label.to_string());
        }
        None => warn!(
            node = %id,
            destination = %form.destination,
            "destination label unresolved, keeping stored destination"
        ),
    }

    let pair_allowed =
        form.destination == Destination::ContactCenter && form.toggles.contact_center_skill;
    if pair_allowed && !form.label_name.is_empty() && !form.label_value.is_empty() {
        let pair = LabelPair::new(form.label_name.clone(), form.label_value.clone());
        store.set_label_pair(id, pair.clone());
        report.label_pair = Change::Set(pair);
    } else {
        store.remove_label_pair(id);
        report.label_pair = Change::Cleared;
    }

    report.skill = if form.skill_toggle_active() {
        write_skills(store, form, form.selector.selection())
    } else {
        store.remove_skill(id);
        Change::Cleared
    };
    report
}

fn commit_skills_node(store: &mut NodeStore, form: &EditForm) -> CommitReport {
    let mut report = CommitReport::untouched();
    let name = form.display_name.trim();
    if !name.is_empty() {
        store.set_display_name(&form.node_id, name);
        report.display_name = Change::Set(name.to_string());
    }
    report.skill = write_skills(store, form, form.selector.selection());
    report
}

fn write_skills(store: &mut NodeStore, form: &EditForm, selection: &SkillSet) -> Change<String> {
    match selection.join() {
        Some(stored) => {
            store.set_skill(&form.node_id, stored.clone());
            Change::Set(stored)
        }
        None => {
            store.remove_skill(&form.node_id);
            Change::Cleared
        }
    }
}

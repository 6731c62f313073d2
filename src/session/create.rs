use crate::node::{FlowNode, NodeId, NodeStore, SKILL_NODE_ID, StepType};
use crate::skill::{SelectionMode, SkillSelector};
use tracing::{debug, info};

/// In-progress values of the add-step panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStepForm {
    pub step_type: Option<StepType>,
    pub display_name: String,
    pub selector: SkillSelector,
}

impl AddStepForm {
    pub(crate) fn new(mode: SelectionMode) -> Self {
        Self {
            step_type: None,
            display_name: String::new(),
            selector: SkillSelector::new(mode),
        }
    }

    /// Only a Skills step with a non-blank name can be added.
    pub fn is_valid(&self) -> bool {
        self.step_type == Some(StepType::Skills) && !self.display_name.trim().is_empty()
    }
}

/// Creates the skills node described by `form`, or returns `None` when the form is invalid.
pub(crate) fn confirm(store: &mut NodeStore, form: &AddStepForm) -> Option<FlowNode> {
    if !form.is_valid() {
        debug!(step = ?form.step_type, "add-step ignored, form incomplete");
        return None;
    }
    let id = NodeId::from(SKILL_NODE_ID);
    let name = form.display_name.trim();
    store.set_display_name(&id, name);
    // A fresh node has no stored skill to clear.
    if let Some(stored) = form.selector.selection().join() {
        store.set_skill(&id, stored);
    }
    info!(node = %id, name, skills = ?form.selector.selection(), "skills step added");
    Some(FlowNode::new(id, StepType::Skills, name))
}

use super::visibility::{Field, FieldState, Toggles, is_required, visible_fields};
use crate::node::{
    ContactCenter, Destination, FlowNode, NodeId, NodeStore, StepType, destination_from_label,
};
use crate::skill::{SelectionMode, SkillSelector, SkillSet};

/// Uncommitted field values of the node being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub node_id: NodeId,
    pub step_type: StepType,
    pub destination: Destination,
    pub contact_center: Option<ContactCenter>,
    pub toggles: Toggles,
    pub selector: SkillSelector,
    pub label_name: String,
    pub label_value: String,
    pub display_name: String,
}

impl EditForm {
    /// Pre-populates a form from whatever the store holds for `node`.
    pub(crate) fn load(node: &FlowNode, store: &NodeStore, mode: SelectionMode) -> Self {
        let id = node.id.as_str();
        let (destination, contact_center) = destination_from_label(store.destination(id));

        let stored_skill = store.skill(id);
        let selection = stored_skill.map(SkillSet::split).unwrap_or_default();

        let (label_name, label_value) = store
            .label_pair(id)
            .map(|pair| (pair.name.clone(), pair.value.clone()))
            .unwrap_or_default();

        Self {
            node_id: node.id.clone(),
            step_type: node.step_type,
            destination,
            contact_center,
            toggles: Toggles {
                operators_skill: stored_skill.is_some(),
                contact_center_skill: store.label_pair(id).is_some(),
            },
            selector: SkillSelector::with_selection(mode, selection),
            label_name,
            label_value,
            display_name: store
                .display_name(id)
                .unwrap_or(node.label.as_str())
                .to_string(),
        }
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        visible_fields(self.step_type, self.destination, self.toggles)
    }

    pub fn is_visible(&self, field: Field) -> bool {
        self.visible_fields().contains(&field)
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        let visible = self.is_visible(field);
        let confirmed = match field {
            Field::LabelName => !self.label_name.is_empty(),
            Field::LabelValue => !self.label_value.is_empty(),
            Field::DisplayName => !self.display_name.trim().is_empty(),
            _ => false,
        };
        FieldState {
            visible,
            required: visible && is_required(self.step_type, field),
            confirmed: visible && confirmed,
        }
    }

    /// Whether the skill assignment of this form will be written on commit.
    pub fn skill_toggle_active(&self) -> bool {
        match self.step_type {
            StepType::Skills => true,
            StepType::Transfer => match self.destination {
                Destination::Operators => self.toggles.operators_skill,
                Destination::ContactCenter => self.toggles.contact_center_skill,
                _ => false,
            },
            _ => false,
        }
    }

    pub(crate) fn clear_skill_inputs(&mut self) {
        self.selector.reset();
    }

    pub(crate) fn clear_label_inputs(&mut self) {
        self.label_name.clear();
        self.label_value.clear();
    }
}

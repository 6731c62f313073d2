use crate::node::{Destination, StepType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An input of the node edit panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    DisplayName,
    Destination,
    ContactCenterPicker,
    OperatorsSkillToggle,
    ContactCenterSkillToggle,
    SkillAssignment,
    LabelName,
    LabelValue,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::DisplayName => "display name",
            Field::Destination => "destination",
            Field::ContactCenterPicker => "contact center",
            Field::OperatorsSkillToggle => "operators skill toggle",
            Field::ContactCenterSkillToggle => "contact center skill toggle",
            Field::SkillAssignment => "skill assignment",
            Field::LabelName => "label name",
            Field::LabelValue => "label value",
        };
        f.write_str(name)
    }
}

/// The two independent "Assign skill" checkboxes of a Transfer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Toggles {
    pub operators_skill: bool,
    pub contact_center_skill: bool,
}

/// Computes which fields are shown, in panel order.
///
/// Skills nodes only ever show their name and skill assignment. Transfer nodes
/// show destination-dependent controls. Other step types expose nothing here.
pub fn visible_fields(step: StepType, destination: Destination, toggles: Toggles) -> Vec<Field> {
    match step {
        StepType::Skills => vec![Field::DisplayName, Field::SkillAssignment],
        StepType::Transfer => {
            let mut fields = vec![Field::Destination];
            match destination {
                Destination::Operators => {
                    fields.push(Field::OperatorsSkillToggle);
                    if toggles.operators_skill {
                        fields.push(Field::SkillAssignment);
                    }
                }
                Destination::ContactCenter => {
                    fields.push(Field::ContactCenterPicker);
                    fields.push(Field::ContactCenterSkillToggle);
                    if toggles.contact_center_skill {
                        fields.extend([Field::SkillAssignment, Field::LabelName, Field::LabelValue]);
                    }
                }
                Destination::Voicemail | Destination::TeamMember | Destination::RoomPhone => {}
            }
            fields
        }
        _ => Vec::new(),
    }
}

/// Whether a visible field must be filled before the node is meaningful.
pub fn is_required(step: StepType, field: Field) -> bool {
    match field {
        Field::DisplayName | Field::Destination => true,
        Field::ContactCenterPicker | Field::LabelName | Field::LabelValue => {
            step == StepType::Transfer
        }
        Field::OperatorsSkillToggle | Field::ContactCenterSkillToggle | Field::SkillAssignment => {
            false
        }
    }
}

/// Presentation state of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
    /// Checkmark shown next to a required text field once it is non-empty.
    pub confirmed: bool,
}

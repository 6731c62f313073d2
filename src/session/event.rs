use super::{EditorSession, PointerTarget, SelectorScope};
use crate::error::{ScriptError, SessionError};
use crate::node::{ContactCenter, Destination, StepType};
use crate::view::View;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One user interaction, in the serialized form used by scripted sessions.
///
/// ```json
/// [
///   { "action": "open_menu", "node": "transfer-sales" },
///   { "action": "choose_edit" },
///   { "action": "select_destination", "destination": "contact-center" },
///   { "action": "update" }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorEvent {
    OpenMenu { node: String },
    ToggleMenu { node: String },
    CloseMenu,
    ChooseEdit,
    Cancel,
    Update,
    SelectDestination { destination: Destination },
    SelectContactCenter {
        #[serde(default)]
        center: Option<ContactCenter>,
    },
    SetOperatorsSkill { enabled: bool },
    SetContactCenterSkill { enabled: bool },
    SetLabelName { text: String },
    SetLabelValue { text: String },
    OpenLabelValuePicker,
    ChooseLabelValue { value: String },
    SetDisplayName { text: String },
    OpenSelector {
        #[serde(default = "default_scope")]
        scope: SelectorScope,
    },
    CloseSelector,
    Search { term: String },
    Choose { value: String },
    OpenCustomInput,
    SetCustomInput { text: String },
    SubmitCustom,
    AddCustom { text: String },
    CancelCustomInput,
    PointerDown { target: PointerTarget },
    OpenAddStep,
    SelectStepType { step_type: StepType },
    SetNewNodeName { text: String },
    ConfirmAddStep,
    CancelAddStep,
    SetMultiSkill { enabled: bool },
    SetSkillBadgeTooltip { enabled: bool },
    ViewChanged {
        view: View,
        #[serde(default)]
        drawer_open: bool,
    },
}

fn default_scope() -> SelectorScope {
    SelectorScope::Edit
}

impl EditorEvent {
    /// Parses a JSON array of events.
    pub fn parse_script(json: &str) -> Result<Vec<EditorEvent>, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::Parse(e.to_string()))
    }
}

impl EditorSession {
    /// Dispatches one event to the matching operation.
    pub fn apply(&mut self, event: EditorEvent) -> Result<(), SessionError> {
        debug!(?event, "applying event");
        match event {
            EditorEvent::OpenMenu { node } => self.open_menu(&node),
            EditorEvent::ToggleMenu { node } => self.toggle_menu(&node),
            EditorEvent::CloseMenu => {
                self.close_menu();
                Ok(())
            }
            EditorEvent::ChooseEdit => self.choose_edit(),
            EditorEvent::Cancel => self.cancel_edit(),
            EditorEvent::Update => self.update().map(|_| ()),
            EditorEvent::SelectDestination { destination } => self.select_destination(destination),
            EditorEvent::SelectContactCenter { center } => self.select_contact_center(center),
            EditorEvent::SetOperatorsSkill { enabled } => self.set_operators_skill_enabled(enabled),
            EditorEvent::SetContactCenterSkill { enabled } => {
                self.set_contact_center_skill_enabled(enabled)
            }
            EditorEvent::SetLabelName { text } => self.set_label_name(&text),
            EditorEvent::SetLabelValue { text } => self.set_label_value(&text),
            EditorEvent::OpenLabelValuePicker => self.open_label_value_picker(),
            EditorEvent::ChooseLabelValue { value } => self.choose_label_value(&value),
            EditorEvent::SetDisplayName { text } => self.set_display_name(&text),
            EditorEvent::OpenSelector { scope } => self.open_selector(scope),
            EditorEvent::CloseSelector => self.close_selector(),
            EditorEvent::Search { term } => self.set_search_term(&term),
            EditorEvent::Choose { value } => self.choose_skill(&value),
            EditorEvent::OpenCustomInput => self.open_custom_input(),
            EditorEvent::SetCustomInput { text } => self.set_custom_input(&text),
            EditorEvent::SubmitCustom => self.submit_custom_skill().map(|_| ()),
            EditorEvent::AddCustom { text } => self.add_custom_skill(&text).map(|_| ()),
            EditorEvent::CancelCustomInput => self.cancel_custom_input(),
            EditorEvent::PointerDown { target } => {
                self.pointer_down(target);
                Ok(())
            }
            EditorEvent::OpenAddStep => self.open_add_step(),
            EditorEvent::SelectStepType { step_type } => self.select_step_type(step_type),
            EditorEvent::SetNewNodeName { text } => self.set_new_node_name(&text),
            EditorEvent::ConfirmAddStep => self.confirm_add_step().map(|_| ()),
            EditorEvent::CancelAddStep => self.cancel_add_step(),
            EditorEvent::SetMultiSkill { enabled } => {
                self.set_multi_skill(enabled);
                Ok(())
            }
            EditorEvent::SetSkillBadgeTooltip { enabled } => {
                self.set_skill_badge_tooltip(enabled);
                Ok(())
            }
            EditorEvent::ViewChanged { view, drawer_open } => {
                self.sync_view(view, drawer_open);
                Ok(())
            }
        }
    }

    /// Applies `events` in order, stopping at the first rejected one.
    pub fn replay(&mut self, events: impl IntoIterator<Item = EditorEvent>) -> Result<usize, ScriptError> {
        let mut applied = 0;
        for (step, event) in events.into_iter().enumerate() {
            if let Err(source) = self.apply(event) {
                warn!(step, error = %source, "event rejected, replay stopped");
                return Err(ScriptError::Session { step, source });
            }
            applied += 1;
        }
        Ok(applied)
    }
}

//! The node editing state machine.
//!
//! `EditorSession` is the only writer of the [`NodeStore`]. It tracks which
//! node menu is open, which node is being edited (with its uncommitted values),
//! the optional add-step panel, and which dropdown currently owns the pointer.

use crate::config::EditorConfig;
use crate::error::SessionError;
use crate::node::{ContactCenter, Destination, FlowNode, NodeId, NodeStore, StepType, standard_menu_flow};
use crate::render::{CanvasSlot, DisplayPreferences, FlowNodeRenderer};
use crate::skill::{SelectionMode, SkillCatalog, SkillSelector};
use crate::view::{Navigator, View};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

mod commit;
mod create;
mod event;
mod form;
mod owner;
mod visibility;

pub use commit::{Change, CommitReport};
pub use create::AddStepForm;
pub use event::EditorEvent;
pub use form::EditForm;
pub use owner::ExclusiveOwner;
pub use visibility::{Field, FieldState, Toggles, is_required, visible_fields};

/// Where the editor is in the open-menu / edit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    MenuOpen(NodeId),
    Editing(NodeId),
}

/// Which skill selector an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorScope {
    /// The selector inside the node edit panel.
    Edit,
    /// The selector inside the add-step panel.
    AddStep,
}

/// A dropdown that can hold the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dropdown {
    Skills(SelectorScope),
    LabelValue,
}

/// Where a pointer-down landed, relative to the open dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    SearchInput,
    CustomInput,
    DropdownItem,
    LabelValueInput,
    Outside,
}

/// Builder for `EditorSession`, seeded with the default catalog, preferences and the standard menu flow.
pub struct EditorSessionBuilder {
    catalog: SkillCatalog,
    preferences: DisplayPreferences,
    canvas: Vec<FlowNode>,
}

impl EditorSessionBuilder {
    fn new() -> Self {
        Self {
            catalog: SkillCatalog::default(),
            preferences: DisplayPreferences::default(),
            canvas: standard_menu_flow(),
        }
    }

    pub fn with_config(mut self, config: &EditorConfig) -> Self {
        self.catalog = config.catalog();
        self.preferences = config.preferences;
        self
    }

    pub fn with_catalog(mut self, catalog: SkillCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_preferences(mut self, preferences: DisplayPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_canvas(mut self, canvas: Vec<FlowNode>) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn build(self) -> EditorSession {
        EditorSession {
            catalog: self.catalog,
            preferences: self.preferences,
            canvas: self.canvas,
            store: NodeStore::new(),
            menu: ExclusiveOwner::new("node menu"),
            dropdown: ExclusiveOwner::new("dropdown"),
            editing: None,
            creating: None,
            skill_node_added: false,
            view: View::FlowBuilder,
            drawer_open: false,
        }
    }
}

/// The editing session over one flow canvas and the sole writer of its `NodeStore`.
pub struct EditorSession {
    catalog: SkillCatalog,
    preferences: DisplayPreferences,
    canvas: Vec<FlowNode>,
    store: NodeStore,
    menu: ExclusiveOwner<NodeId>,
    dropdown: ExclusiveOwner<Dropdown>,
    editing: Option<EditForm>,
    creating: Option<AddStepForm>,
    skill_node_added: bool,
    view: View,
    drawer_open: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EditorSession {
    pub fn builder() -> EditorSessionBuilder {
        EditorSessionBuilder::new()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self::builder().with_config(config).build()
    }

    // --- Read access ---

    pub fn state(&self) -> SessionState {
        if let Some(form) = &self.editing {
            SessionState::Editing(form.node_id.clone())
        } else if let Some(id) = self.menu.current() {
            SessionState::MenuOpen(id.clone())
        } else {
            SessionState::Closed
        }
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    pub fn preferences(&self) -> &DisplayPreferences {
        &self.preferences
    }

    pub fn canvas(&self) -> &[FlowNode] {
        &self.canvas
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.canvas.iter().find(|n| n.id.as_str() == id)
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.editing.as_ref()
    }

    pub fn add_step_form(&self) -> Option<&AddStepForm> {
        self.creating.as_ref()
    }

    pub fn open_menu_id(&self) -> Option<&NodeId> {
        self.menu.current()
    }

    pub fn open_dropdown(&self) -> Option<Dropdown> {
        self.dropdown.current().copied()
    }

    /// Whether the outside-click listener is registered. True exactly while a dropdown is open.
    pub fn listener_active(&self) -> bool {
        !self.dropdown.is_free()
    }

    pub fn skill_node_added(&self) -> bool {
        self.skill_node_added
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn selector(&self, scope: SelectorScope) -> Option<&SkillSelector> {
        match scope {
            SelectorScope::Edit => self.editing.as_ref().map(|f| &f.selector),
            SelectorScope::AddStep => self.creating.as_ref().map(|f| &f.selector),
        }
    }

    pub fn render_canvas(&self) -> Vec<CanvasSlot> {
        FlowNodeRenderer::new(&self.store, &self.preferences)
            .render_canvas(&self.canvas, self.menu.current())
    }

    // --- Preferences ---

    pub fn set_preferences(&mut self, preferences: DisplayPreferences) {
        let multi_changed = preferences.multiple_skills != self.preferences.multiple_skills;
        self.preferences = preferences;
        if multi_changed {
            self.apply_selection_mode();
        }
    }

    pub fn set_multi_skill(&mut self, multi: bool) {
        self.set_preferences(DisplayPreferences {
            multiple_skills: multi,
            ..self.preferences
        });
    }

    pub fn set_skill_badge_tooltip(&mut self, enabled: bool) {
        self.preferences.skill_badge_tooltip = enabled;
    }

    fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_multi(self.preferences.multiple_skills)
    }

    fn apply_selection_mode(&mut self) {
        let mode = self.selection_mode();
        if let Some(form) = self.editing.as_mut() {
            form.selector.set_mode(mode);
        }
        if let Some(form) = self.creating.as_mut() {
            form.selector.set_mode(mode);
        }
        debug!(?mode, "selection mode changed");
    }

    // --- Node menu and edit lifecycle ---

    /// Opens the context menu of `id`, closing any other open menu.
    ///
    /// Rejected while a node is being edited; the edit must be updated or cancelled first.
    pub fn open_menu(&mut self, id: &str) -> Result<(), SessionError> {
        if let Some(form) = &self.editing {
            return Err(SessionError::EditInProgress(form.node_id.clone()));
        }
        let node = self
            .node(id)
            .ok_or_else(|| SessionError::NodeNotFound(NodeId::from(id)))?;
        let node_id = node.id.clone();
        self.menu.acquire(node_id);
        Ok(())
    }

    /// Clicking the menu button of the node whose menu is open closes it.
    pub fn toggle_menu(&mut self, id: &str) -> Result<(), SessionError> {
        if self.menu.current().is_some_and(|open| open.as_str() == id) {
            self.menu.release();
            Ok(())
        } else {
            self.open_menu(id)
        }
    }

    pub fn close_menu(&mut self) {
        self.menu.release();
    }

    /// Promotes the open menu to an edit session, pre-populated from the store.
    pub fn choose_edit(&mut self) -> Result<(), SessionError> {
        let id = self.menu.release().ok_or(SessionError::NoMenuOpen)?;
        let node = self
            .node(id.as_str())
            .ok_or_else(|| SessionError::NodeNotFound(id.clone()))?;
        let form = EditForm::load(node, &self.store, self.selection_mode());

        self.release_edit_dropdowns();
        self.editing = Some(form);
        debug!(node = %id, "editing node");
        Ok(())
    }

    /// Discards every in-progress value. The store is not touched.
    pub fn cancel_edit(&mut self) -> Result<(), SessionError> {
        let form = self.editing.take().ok_or(SessionError::NotEditing)?;
        self.release_edit_dropdowns();
        self.menu.release();
        debug!(node = %form.node_id, "edit cancelled");
        Ok(())
    }

    /// Commits the edit form into the store and closes the session.
    pub fn update(&mut self) -> Result<CommitReport, SessionError> {
        let form = self.editing.take().ok_or(SessionError::NotEditing)?;
        self.release_edit_dropdowns();
        self.menu.release();
        Ok(commit::commit(&mut self.store, &form))
    }

    // --- Edit form fields ---

    pub fn select_destination(&mut self, destination: Destination) -> Result<(), SessionError> {
        let form = self.visible_form_mut(Field::Destination)?;
        form.destination = destination;
        debug!(node = %form.node_id, %destination, "destination selected");
        self.enforce_visibility();
        Ok(())
    }

    pub fn select_contact_center(
        &mut self,
        center: Option<ContactCenter>,
    ) -> Result<(), SessionError> {
        self.visible_form_mut(Field::ContactCenterPicker)?.contact_center = center;
        Ok(())
    }

    /// Turning the toggle off discards the in-progress skill selection.
    pub fn set_operators_skill_enabled(&mut self, enabled: bool) -> Result<(), SessionError> {
        let form = self.visible_form_mut(Field::OperatorsSkillToggle)?;
        form.toggles.operators_skill = enabled;
        if !enabled {
            form.clear_skill_inputs();
        }
        self.enforce_visibility();
        Ok(())
    }

    /// Turning the toggle off discards the skill selection and the label pair inputs.
    pub fn set_contact_center_skill_enabled(&mut self, enabled: bool) -> Result<(), SessionError> {
        let form = self.visible_form_mut(Field::ContactCenterSkillToggle)?;
        form.toggles.contact_center_skill = enabled;
        if !enabled {
            form.clear_skill_inputs();
            form.clear_label_inputs();
        }
        self.enforce_visibility();
        Ok(())
    }

    pub fn set_label_name(&mut self, text: &str) -> Result<(), SessionError> {
        self.visible_form_mut(Field::LabelName)?.label_name = text.to_string();
        Ok(())
    }

    pub fn set_label_value(&mut self, text: &str) -> Result<(), SessionError> {
        self.visible_form_mut(Field::LabelValue)?.label_value = text.to_string();
        Ok(())
    }

    /// Opens the catalog picker attached to the label value input.
    pub fn open_label_value_picker(&mut self) -> Result<(), SessionError> {
        self.visible_form_mut(Field::LabelValue)?;
        self.close_skill_dropdowns();
        self.dropdown.acquire(Dropdown::LabelValue);
        Ok(())
    }

    pub fn choose_label_value(&mut self, value: &str) -> Result<(), SessionError> {
        if !self.dropdown.is_held_by(&Dropdown::LabelValue) {
            return Err(SessionError::SelectorClosed);
        }
        self.visible_form_mut(Field::LabelValue)?.label_value = value.to_string();
        self.dropdown.release();
        Ok(())
    }

    pub fn set_display_name(&mut self, text: &str) -> Result<(), SessionError> {
        self.visible_form_mut(Field::DisplayName)?.display_name = text.to_string();
        Ok(())
    }

    // --- Skill selector ---

    /// Opens the selector of `scope`, closing whichever dropdown was open.
    pub fn open_selector(&mut self, scope: SelectorScope) -> Result<(), SessionError> {
        self.ensure_selector_visible(scope)?;
        let multi = self.preferences.multiple_skills;
        self.close_skill_dropdowns();
        self.dropdown.release_if(&Dropdown::LabelValue);
        self.selector_mut(scope)?.open(multi);
        self.dropdown.acquire(Dropdown::Skills(scope));
        Ok(())
    }

    pub fn close_selector(&mut self) -> Result<(), SessionError> {
        self.with_active_selector(SkillSelector::close)
    }

    pub fn set_search_term(&mut self, text: &str) -> Result<(), SessionError> {
        self.with_active_selector(|s| s.set_search_term(text))
    }

    pub fn choose_skill(&mut self, value: &str) -> Result<(), SessionError> {
        self.with_active_selector(|s| s.choose(value))
    }

    pub fn open_custom_input(&mut self) -> Result<(), SessionError> {
        self.with_active_selector(SkillSelector::open_custom_form)
    }

    pub fn set_custom_input(&mut self, text: &str) -> Result<(), SessionError> {
        self.with_active_selector(|s| s.set_custom_input(text))
    }

    pub fn cancel_custom_input(&mut self) -> Result<(), SessionError> {
        self.with_active_selector(SkillSelector::cancel_custom_form)
    }

    /// Adds `text` as a custom value. Blank text is a no-op returning `false`.
    pub fn add_custom_skill(&mut self, text: &str) -> Result<bool, SessionError> {
        self.with_active_selector(|s| s.add_custom(text))
    }

    /// Adds the custom-input buffer. A blank buffer is a no-op returning `false`.
    pub fn submit_custom_skill(&mut self) -> Result<bool, SessionError> {
        self.with_active_selector(SkillSelector::submit_custom)
    }

    /// Dismisses the open dropdown when the pointer lands outside it.
    pub fn pointer_down(&mut self, target: PointerTarget) {
        match self.dropdown.current().copied() {
            Some(Dropdown::Skills(scope)) if target == PointerTarget::Outside => {
                if let Ok(selector) = self.selector_mut(scope) {
                    selector.close();
                }
                self.dropdown.release();
            }
            Some(Dropdown::LabelValue)
                if !matches!(
                    target,
                    PointerTarget::LabelValueInput | PointerTarget::DropdownItem
                ) =>
            {
                self.dropdown.release();
            }
            _ => {}
        }
    }

    // --- Add-step flow ---

    pub fn open_add_step(&mut self) -> Result<(), SessionError> {
        if self.skill_node_added {
            return Err(SessionError::CreationLimitReached);
        }
        if self.creating.is_none() {
            self.creating = Some(AddStepForm::new(self.selection_mode()));
            debug!("add-step panel opened");
        }
        Ok(())
    }

    pub fn select_step_type(&mut self, step_type: StepType) -> Result<(), SessionError> {
        let form = self.creating.as_mut().ok_or(SessionError::NotCreating)?;
        form.step_type = Some(step_type);
        if step_type != StepType::Skills {
            form.selector.close();
            self.dropdown
                .release_if(&Dropdown::Skills(SelectorScope::AddStep));
        }
        Ok(())
    }

    pub fn set_new_node_name(&mut self, text: &str) -> Result<(), SessionError> {
        let form = self.creating.as_mut().ok_or(SessionError::NotCreating)?;
        form.display_name = text.to_string();
        Ok(())
    }

    /// Creates the skills step. Returns `false`, changing nothing, when the form is incomplete.
    pub fn confirm_add_step(&mut self) -> Result<bool, SessionError> {
        let form = self.creating.as_ref().ok_or(SessionError::NotCreating)?;
        if self.skill_node_added {
            return Err(SessionError::CreationLimitReached);
        }
        let Some(node) = create::confirm(&mut self.store, form) else {
            return Ok(false);
        };
        self.creating = None;
        self.dropdown
            .release_if(&Dropdown::Skills(SelectorScope::AddStep));
        self.skill_node_added = true;
        if self.node(node.id.as_str()).is_none() {
            self.canvas.push(node);
        }
        Ok(true)
    }

    pub fn cancel_add_step(&mut self) -> Result<(), SessionError> {
        self.creating.take().ok_or(SessionError::NotCreating)?;
        self.dropdown
            .release_if(&Dropdown::Skills(SelectorScope::AddStep));
        debug!("add-step panel cancelled");
        Ok(())
    }

    // --- View boundary ---

    /// Reacts to the host switching screens. Leaving the flow builder drops
    /// every open menu, dropdown and uncommitted form.
    pub fn sync_view(&mut self, view: View, drawer_open: bool) {
        if view != View::FlowBuilder && self.view == View::FlowBuilder {
            self.editing = None;
            self.creating = None;
            self.menu.release();
            self.dropdown.release();
            info!(%view, "left flow builder, in-progress edits discarded");
        }
        self.view = view;
        self.drawer_open = drawer_open;
    }

    /// Asks the host to show `view`.
    pub fn navigate(&mut self, view: View, navigator: &mut dyn Navigator) {
        navigator.navigate_to(view);
        self.sync_view(view, self.drawer_open);
    }

    pub fn set_drawer_open(&mut self, open: bool, navigator: &mut dyn Navigator) {
        navigator.set_drawer_open(open);
        self.drawer_open = open;
    }

    // --- Helpers ---

    fn visible_form_mut(&mut self, field: Field) -> Result<&mut EditForm, SessionError> {
        let form = self.editing.as_mut().ok_or(SessionError::NotEditing)?;
        if form.is_visible(field) {
            Ok(form)
        } else {
            Err(SessionError::FieldHidden {
                node_id: form.node_id.clone(),
                field: field.to_string(),
            })
        }
    }

    fn ensure_selector_visible(&mut self, scope: SelectorScope) -> Result<(), SessionError> {
        match scope {
            SelectorScope::Edit => self.visible_form_mut(Field::SkillAssignment).map(|_| ()),
            SelectorScope::AddStep => {
                let form = self.creating.as_ref().ok_or(SessionError::NotCreating)?;
                if form.step_type == Some(StepType::Skills) {
                    Ok(())
                } else {
                    Err(SessionError::FieldHidden {
                        node_id: NodeId::from(crate::node::SKILL_NODE_ID),
                        field: Field::SkillAssignment.to_string(),
                    })
                }
            }
        }
    }

    fn selector_mut(&mut self, scope: SelectorScope) -> Result<&mut SkillSelector, SessionError> {
        match scope {
            SelectorScope::Edit => self
                .editing
                .as_mut()
                .map(|f| &mut f.selector)
                .ok_or(SessionError::NotEditing),
            SelectorScope::AddStep => self
                .creating
                .as_mut()
                .map(|f| &mut f.selector)
                .ok_or(SessionError::NotCreating),
        }
    }

    /// Runs `op` on the selector that owns the dropdown, then releases the
    /// dropdown if the operation closed it.
    fn with_active_selector<T>(
        &mut self,
        op: impl FnOnce(&mut SkillSelector) -> T,
    ) -> Result<T, SessionError> {
        let Some(Dropdown::Skills(scope)) = self.dropdown.current().copied() else {
            return Err(SessionError::SelectorClosed);
        };
        let selector = self.selector_mut(scope)?;
        let result = op(selector);
        if !selector.is_open() {
            self.dropdown.release();
        }
        Ok(result)
    }

    fn close_skill_dropdowns(&mut self) {
        if let Some(Dropdown::Skills(scope)) = self.dropdown.current().copied() {
            if let Ok(selector) = self.selector_mut(scope) {
                selector.close();
            }
            self.dropdown.release();
        }
    }

    fn release_edit_dropdowns(&mut self) {
        self.dropdown.release_if(&Dropdown::Skills(SelectorScope::Edit));
        self.dropdown.release_if(&Dropdown::LabelValue);
    }

    /// Closes dropdowns whose controls a field change just hid.
    fn enforce_visibility(&mut self) {
        let Some(form) = self.editing.as_mut() else {
            return;
        };
        if !form.is_visible(Field::SkillAssignment) {
            form.selector.close();
            self.dropdown.release_if(&Dropdown::Skills(SelectorScope::Edit));
        }
        if !form.is_visible(Field::LabelValue) {
            self.dropdown.release_if(&Dropdown::LabelValue);
        }
    }
}

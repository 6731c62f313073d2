use super::catalog::{FilteredGroup, SkillCatalog};
use super::set::SkillSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Whether the selector picks exactly one value or toggles many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    Single,
    Multi,
}

impl SelectionMode {
    pub fn from_multi(multi: bool) -> Self {
        if multi {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }
}

/// What an open selector currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView<'a> {
    pub mode: SelectionMode,
    pub search_term: &'a str,
    pub groups: Vec<FilteredGroup<'a>>,
    pub custom_form_open: bool,
    /// The "add custom skill or variable" entry. Shown even when no catalog entry matches.
    pub show_add_custom: bool,
}

/// Search/select component over a `SkillCatalog`.
///
/// The selection survives closing the dropdown; only the search term and the
/// custom-input sub-form are discarded on close.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSelector {
    mode: SelectionMode,
    open: bool,
    search_term: String,
    custom_form_open: bool,
    custom_input: String,
    selection: SkillSet,
}

impl SkillSelector {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Starts from an existing selection, kept whole in either mode until the user picks a value.
    pub fn with_selection(mode: SelectionMode, selection: SkillSet) -> Self {
        Self {
            mode,
            selection,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The selection is left untouched; single mode only collapses it on the next pick.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_custom_form_open(&self) -> bool {
        self.custom_form_open
    }

    pub fn custom_input(&self) -> &str {
        &self.custom_input
    }

    pub fn selection(&self) -> &SkillSet {
        &self.selection
    }

    /// Begins a selection session in single or multi mode.
    pub fn open(&mut self, multi: bool) {
        self.set_mode(SelectionMode::from_multi(multi));
        self.open = true;
        self.search_term.clear();
        debug!(mode = ?self.mode, "skill selector opened");
    }

    /// Closes the dropdown. The current selection is kept.
    pub fn close(&mut self) {
        self.open = false;
        self.search_term.clear();
        self.custom_form_open = false;
        self.custom_input.clear();
    }

    /// Discards the selection and every in-progress buffer.
    pub fn reset(&mut self) {
        self.close();
        self.selection.clear();
    }

    pub fn set_search_term(&mut self, text: &str) {
        self.search_term = text.to_string();
    }

    /// Single mode: selects `value` and closes. Multi mode: toggles `value` and stays open.
    pub fn choose(&mut self, value: &str) {
        match self.mode {
            SelectionMode::Single => {
                self.selection.replace(value);
                self.close();
            }
            SelectionMode::Multi => {
                let selected = self.selection.toggle(value);
                debug!(value, selected, "skill toggled");
            }
        }
    }

    pub fn open_custom_form(&mut self) {
        self.custom_form_open = true;
    }

    pub fn set_custom_input(&mut self, text: &str) {
        self.custom_input = text.to_string();
    }

    pub fn cancel_custom_form(&mut self) {
        self.custom_form_open = false;
        self.custom_input.clear();
    }

    /// Adds a value that is not (necessarily) in the catalog.
    ///
    /// Blank input is ignored and `false` is returned. Single mode replaces the
    /// selection and closes; multi mode appends and closes only the custom sub-form.
    pub fn add_custom(&mut self, text: &str) -> bool {
        let value = text.trim();
        if value.is_empty() {
            return false;
        }
        match self.mode {
            SelectionMode::Single => {
                self.selection.replace(value);
                self.close();
            }
            SelectionMode::Multi => {
                self.selection.push(value);
                self.cancel_custom_form();
            }
        }
        debug!(value, mode = ?self.mode, "custom skill added");
        true
    }

    /// Submits the custom-input buffer.
    pub fn submit_custom(&mut self) -> bool {
        let text = self.custom_input.clone();
        self.add_custom(&text)
    }

    /// Text for the button that opens the dropdown.
    pub fn caption(&self) -> String {
        match self.mode {
            SelectionMode::Single => self
                .selection
                .join()
                .unwrap_or_else(|| "Assign skill".to_string()),
            SelectionMode::Multi if self.selection.is_empty() => "Assign skills".to_string(),
            SelectionMode::Multi => format!("{} skills selected", self.selection.len()),
        }
    }

    /// The dropdown content, or `None` while closed.
    pub fn view<'a>(&'a self, catalog: &'a SkillCatalog) -> Option<SelectorView<'a>> {
        self.open.then(|| SelectorView {
            mode: self.mode,
            search_term: &self.search_term,
            groups: catalog.filter(&self.search_term),
            custom_form_open: self.custom_form_open,
            show_add_custom: true,
        })
    }
}

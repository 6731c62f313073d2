//! Tests for the editor session state machine and the commit algorithm.
mod common;
use common::*;
use ivr_flow::prelude::*;
use ivr_flow::session::{Change, Field};

#[test]
fn test_menu_is_exclusive() {
    let mut session = single_session();
    assert_eq!(session.state(), SessionState::Closed);

    session.open_menu("transfer-sales").unwrap();
    session.open_menu("transfer-support").unwrap();
    assert_eq!(session.state(), SessionState::MenuOpen(NodeId::from("transfer-support")));

    let open: Vec<_> = session
        .render_canvas()
        .into_iter()
        .filter_map(|slot| match slot {
            CanvasSlot::Node(node) if node.menu_open => Some(node.id),
            _ => None,
        })
        .collect();
    assert_eq!(open, vec![NodeId::from("transfer-support")]);

    session.toggle_menu("transfer-support").unwrap();
    assert_eq!(session.state(), SessionState::Closed);
}

#[test]
fn test_contract_misuse_is_reported() {
    let mut session = single_session();
    assert_eq!(
        session.open_menu("nowhere"),
        Err(SessionError::NodeNotFound(NodeId::from("nowhere")))
    );
    assert_eq!(session.choose_edit(), Err(SessionError::NoMenuOpen));
    assert_eq!(session.update(), Err(SessionError::NotEditing));
    assert_eq!(session.cancel_edit(), Err(SessionError::NotEditing));
    assert_eq!(session.choose_skill("Spanish"), Err(SessionError::SelectorClosed));
    assert_eq!(session.confirm_add_step(), Err(SessionError::NotCreating));
}

#[test]
fn test_fresh_edit_defaults_to_operators_with_toggle_off() {
    let mut session = single_session();
    edit(&mut session, "transfer-sales");

    let form = session.edit_form().unwrap();
    assert_eq!(form.destination, Destination::Operators);
    assert!(!form.toggles.operators_skill);
    assert!(form.selector.selection().is_empty());
    assert_eq!(form.display_name, "Transfer – Sales");
    assert_eq!(
        form.visible_fields(),
        vec![Field::Destination, Field::OperatorsSkillToggle]
    );
}

#[test]
fn test_hidden_fields_reject_input() {
    let mut session = single_session();
    edit(&mut session, "transfer-sales");

    assert!(matches!(
        session.set_label_name("tier"),
        Err(SessionError::FieldHidden { .. })
    ));
    assert!(matches!(
        session.open_selector(SelectorScope::Edit),
        Err(SessionError::FieldHidden { .. })
    ));
}

#[test]
fn test_skill_entry_exists_iff_toggle_on_and_value_selected() {
    let mut session = single_session();

    // toggle on, nothing selected
    edit(&mut session, "transfer-sales");
    session.set_operators_skill_enabled(true).unwrap();
    let report = session.update().unwrap();
    assert_eq!(report.skill, Change::Cleared);
    assert_eq!(session.store().skill("transfer-sales"), None);

    // toggle on, one value
    assign_operator_skills(&mut session, "transfer-sales", &["Spanish"]);
    assert_eq!(session.store().skill("transfer-sales"), Some("Spanish"));

    // toggle off removes the stored value
    edit(&mut session, "transfer-sales");
    assert!(session.edit_form().unwrap().toggles.operators_skill);
    session.set_operators_skill_enabled(false).unwrap();
    session.update().unwrap();
    assert_eq!(session.store().skill("transfer-sales"), None);
    assert_eq!(session.store().destination("transfer-sales"), Some("Operators"));
}

#[test]
fn test_disabling_toggle_discards_in_progress_selection() {
    let mut session = multi_session();
    edit(&mut session, "transfer-sales");
    session.set_operators_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    session.set_search_term("sup").unwrap();
    session.choose_skill("Sales Support").unwrap();
    assert!(session.listener_active());

    session.set_operators_skill_enabled(false).unwrap();
    let selector = session.selector(SelectorScope::Edit).unwrap();
    assert!(selector.selection().is_empty());
    assert!(!selector.is_open());
    assert_eq!(selector.search_term(), "");
    assert!(!session.listener_active());

    session.set_operators_skill_enabled(true).unwrap();
    assert!(session.selector(SelectorScope::Edit).unwrap().selection().is_empty());
}

#[test]
fn test_multi_search_selection_order_is_preserved() {
    let mut session = multi_session();
    edit(&mut session, "transfer-support");
    session.set_operators_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    session.set_search_term("sup").unwrap();

    let view = session
        .selector(SelectorScope::Edit)
        .unwrap()
        .view(session.catalog())
        .unwrap();
    assert_eq!(view.groups.len(), 1);
    assert!(view.groups[0].entries.iter().all(|e| e.to_lowercase().contains("sup")));

    session.choose_skill("Technical Support").unwrap();
    session.choose_skill("Sales Support").unwrap();
    session.update().unwrap();

    assert_eq!(
        session.store().skill("transfer-support"),
        Some("Technical Support, Sales Support")
    );
}

#[test]
fn test_contact_center_label_pair_requires_both_fields() {
    let mut session = single_session();
    edit(&mut session, "transfer-sales");
    session.select_destination(Destination::ContactCenter).unwrap();
    session.select_contact_center(Some(ContactCenter::Support)).unwrap();
    session.set_contact_center_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    session.choose_skill("Technical Support").unwrap();
    session.set_label_value("company_name").unwrap();

    let state = session.edit_form().unwrap().field_state(Field::LabelName);
    assert!(state.visible && state.required && !state.confirmed);

    session.update().unwrap();
    assert_eq!(session.store().label_pair("transfer-sales"), None);
    assert_eq!(session.store().skill("transfer-sales"), Some("Technical Support"));
    assert_eq!(session.store().destination("transfer-sales"), Some("Support Center"));
}

#[test]
fn test_contact_center_round_trip_is_idempotent() {
    let mut session = single_session();
    assign_contact_center(
        &mut session,
        "transfer-support",
        ContactCenter::Technical,
        "Technical Support",
        ("tier", "customer_type"),
    );
    let before = session.store().clone();
    assert_eq!(
        session.store().label_pair("transfer-support"),
        Some(&LabelPair::new("tier", "customer_type"))
    );

    edit(&mut session, "transfer-support");
    let form = session.edit_form().unwrap();
    assert_eq!(form.destination, Destination::ContactCenter);
    assert_eq!(form.contact_center, Some(ContactCenter::Technical));
    assert!(form.toggles.contact_center_skill);
    assert_eq!(form.label_name, "tier");
    session.update().unwrap();

    assert_eq!(session.store(), &before);
}

#[test]
fn test_contact_center_without_center_keeps_destination() {
    let mut session = single_session();
    edit(&mut session, "transfer-sales");
    session.select_destination(Destination::Voicemail).unwrap();
    session.update().unwrap();

    edit(&mut session, "transfer-sales");
    session.select_destination(Destination::ContactCenter).unwrap();
    let report = session.update().unwrap();
    assert_eq!(report.destination, Change::Unchanged);
    assert_eq!(session.store().destination("transfer-sales"), Some("Voicemail"));
}

#[test]
fn test_switching_destination_clears_skill_and_pair() {
    let mut session = single_session();
    assign_contact_center(
        &mut session,
        "transfer-sales",
        ContactCenter::Sales,
        "Sales Support",
        ("tier", "gold"),
    );

    edit(&mut session, "transfer-sales");
    session.select_destination(Destination::Voicemail).unwrap();
    session.update().unwrap();

    assert_eq!(session.store().label_pair("transfer-sales"), None);
    assert_eq!(session.store().skill("transfer-sales"), None);
    assert_eq!(session.store().destination("transfer-sales"), Some("Voicemail"));
}

#[test]
fn test_cancel_never_mutates_store() {
    let mut session = multi_session();
    assign_operator_skills(&mut session, "transfer-sales", &["Spanish", "Payment Issues"]);
    let snapshot = session.store().clone();

    edit(&mut session, "transfer-sales");
    session.select_destination(Destination::ContactCenter).unwrap();
    session.select_contact_center(Some(ContactCenter::Billing)).unwrap();
    session.set_contact_center_skill_enabled(true).unwrap();
    session.set_label_name("half").unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    session.choose_skill("Billing Support").unwrap();
    session.cancel_edit().unwrap();

    assert_eq!(session.store(), &snapshot);
    assert_eq!(session.state(), SessionState::Closed);
    assert!(!session.listener_active());
}

#[test]
fn test_outside_click_closes_dropdown_but_keeps_selection() {
    let mut session = multi_session();
    edit(&mut session, "transfer-sales");
    session.set_operators_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    session.choose_skill("Spanish").unwrap();

    session.pointer_down(PointerTarget::SearchInput);
    assert!(session.listener_active());

    session.pointer_down(PointerTarget::Outside);
    assert!(!session.listener_active());
    assert_eq!(session.open_dropdown(), None);
    let selector = session.selector(SelectorScope::Edit).unwrap();
    assert!(!selector.is_open());
    assert_eq!(selector.selection(), &SkillSet::single("Spanish"));
    assert_eq!(session.choose_skill("Sales Support"), Err(SessionError::SelectorClosed));
}

#[test]
fn test_single_choice_releases_dropdown() {
    let mut session = single_session();
    edit(&mut session, "transfer-sales");
    session.set_operators_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    assert_eq!(session.open_dropdown(), Some(Dropdown::Skills(SelectorScope::Edit)));
    session.choose_skill("Spanish").unwrap();
    assert!(!session.listener_active());
}

#[test]
fn test_label_value_picker_shares_dropdown_owner() {
    let mut session = single_session();
    edit(&mut session, "transfer-sales");
    session.select_destination(Destination::ContactCenter).unwrap();
    session.set_contact_center_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();

    session.open_label_value_picker().unwrap();
    assert_eq!(session.open_dropdown(), Some(Dropdown::LabelValue));
    assert!(!session.selector(SelectorScope::Edit).unwrap().is_open());

    session.choose_label_value("caller.number").unwrap();
    assert_eq!(session.edit_form().unwrap().label_value, "caller.number");
    assert!(!session.listener_active());
}

#[test]
fn test_custom_skill_on_transfer() {
    let mut session = multi_session();
    edit(&mut session, "transfer-sales");
    session.set_operators_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    session.open_custom_input().unwrap();
    session.set_custom_input("   ").unwrap();
    assert!(!session.submit_custom_skill().unwrap());
    assert!(session.add_custom_skill("VIP Routing").unwrap());
    assert!(session.listener_active());
    session.update().unwrap();

    assert_eq!(session.store().skill("transfer-sales"), Some("VIP Routing"));
    assert!(!session.catalog().contains("VIP Routing"));
}

#[test]
fn test_multi_mode_flag_survives_cancel() {
    let mut session = single_session();
    session.set_multi_skill(true);
    edit(&mut session, "transfer-sales");
    assert_eq!(
        session.selector(SelectorScope::Edit).unwrap().mode(),
        SelectionMode::Multi
    );
    session.cancel_edit().unwrap();
    assert!(session.preferences().multiple_skills);
}

#[test]
fn test_single_mode_unchanged_update_keeps_every_stored_skill() {
    let mut session = multi_session();
    assign_operator_skills(&mut session, "transfer-sales", &["Spanish", "Payment Issues"]);
    let before = session.store().clone();

    session.set_multi_skill(false);
    edit(&mut session, "transfer-sales");
    let selector = session.selector(SelectorScope::Edit).unwrap();
    assert_eq!(
        selector.selection(),
        &SkillSet::from_values(["Spanish", "Payment Issues"])
    );
    session.update().unwrap();
    assert_eq!(session.store(), &before);
    assert_eq!(
        session.store().skill("transfer-sales"),
        Some("Spanish, Payment Issues")
    );
}

#[test]
fn test_mode_switch_during_edit_keeps_stored_skills() {
    let mut session = multi_session();
    assign_operator_skills(&mut session, "transfer-sales", &["Spanish", "Payment Issues"]);

    edit(&mut session, "transfer-sales");
    session.set_multi_skill(false);
    session.update().unwrap();
    assert_eq!(
        session.store().skill("transfer-sales"),
        Some("Spanish, Payment Issues")
    );

    // a single-mode pick replaces the whole selection
    edit(&mut session, "transfer-sales");
    session.open_selector(SelectorScope::Edit).unwrap();
    session.choose_skill("Billing Support").unwrap();
    session.update().unwrap();
    assert_eq!(session.store().skill("transfer-sales"), Some("Billing Support"));
}

#[test]
fn test_open_menu_rejected_while_editing() {
    let mut session = single_session();
    edit(&mut session, "transfer-sales");
    session.set_operators_skill_enabled(true).unwrap();

    assert_eq!(
        session.open_menu("transfer-support"),
        Err(SessionError::EditInProgress(NodeId::from("transfer-sales")))
    );
    assert_eq!(
        session.toggle_menu("transfer-support"),
        Err(SessionError::EditInProgress(NodeId::from("transfer-sales")))
    );
    assert_eq!(session.state(), SessionState::Editing(NodeId::from("transfer-sales")));
    assert!(session.edit_form().unwrap().toggles.operators_skill);

    session.cancel_edit().unwrap();
    session.open_menu("transfer-support").unwrap();
    assert_eq!(session.state(), SessionState::MenuOpen(NodeId::from("transfer-support")));
}

#[test]
fn test_non_transfer_edit_commits_nothing() {
    let mut session = single_session();
    edit(&mut session, "play-sales");
    assert!(session.edit_form().unwrap().visible_fields().is_empty());
    session.update().unwrap();
    assert!(session.store().is_empty());
}

#[test]
fn test_add_step_flow() {
    let mut session = skills_node_session(true);
    assert!(
        session
            .render_canvas()
            .iter()
            .any(|slot| matches!(slot, CanvasSlot::AddStep))
    );

    session.open_add_step().unwrap();
    session.select_step_type(StepType::Skills).unwrap();
    session.open_selector(SelectorScope::AddStep).unwrap();
    session.choose_skill("Spanish").unwrap();
    session.choose_skill("Customer Service").unwrap();

    // blank name is a no-op
    session.set_new_node_name("   ").unwrap();
    assert!(!session.confirm_add_step().unwrap());
    assert!(session.add_step_form().is_some());
    assert!(session.store().is_empty());

    session.set_new_node_name("  Route by language ").unwrap();
    assert!(session.confirm_add_step().unwrap());
    assert!(session.skill_node_added());
    assert!(session.add_step_form().is_none());
    assert!(!session.listener_active());
    assert_eq!(session.store().display_name("skill-node"), Some("Route by language"));
    assert_eq!(session.store().skill("skill-node"), Some("Spanish, Customer Service"));

    assert_eq!(session.open_add_step(), Err(SessionError::CreationLimitReached));
}

#[test]
fn test_add_step_requires_skills_type() {
    let mut session = skills_node_session(false);
    session.open_add_step().unwrap();
    session.select_step_type(StepType::Play).unwrap();
    session.set_new_node_name("Greeting").unwrap();
    assert!(!session.confirm_add_step().unwrap());
    assert!(matches!(
        session.open_selector(SelectorScope::AddStep),
        Err(SessionError::FieldHidden { .. })
    ));

    session.cancel_add_step().unwrap();
    assert!(session.add_step_form().is_none());
    assert!(!session.skill_node_added());
    assert!(session.store().is_empty());
}

#[test]
fn test_edit_skills_node() {
    let mut session = skills_node_session(false);
    session.open_add_step().unwrap();
    session.select_step_type(StepType::Skills).unwrap();
    session.set_new_node_name("Skills").unwrap();
    session.confirm_add_step().unwrap();

    edit(&mut session, "skill-node");
    let form = session.edit_form().unwrap();
    assert!(form.skill_toggle_active());
    assert_eq!(
        form.visible_fields(),
        vec![Field::DisplayName, Field::SkillAssignment]
    );

    session.set_display_name("  Billing skills ").unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    session.choose_skill("Billing Support").unwrap();
    session.update().unwrap();

    assert_eq!(session.store().display_name("skill-node"), Some("Billing skills"));
    assert_eq!(session.store().skill("skill-node"), Some("Billing Support"));
    assert_eq!(session.store().destination("skill-node"), None);
}

struct RecordingNavigator {
    views: Vec<View>,
    drawer: Option<bool>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&mut self, view: View) {
        self.views.push(view);
    }

    fn set_drawer_open(&mut self, open: bool) {
        self.drawer = Some(open);
    }
}

#[test]
fn test_leaving_flow_builder_drops_edit_state() {
    let mut session = single_session();
    edit(&mut session, "transfer-sales");
    session.set_operators_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();

    let mut navigator = RecordingNavigator {
        views: Vec::new(),
        drawer: None,
    };
    session.navigate(View::WorkflowList, &mut navigator);
    session.set_drawer_open(true, &mut navigator);

    assert_eq!(navigator.views, vec![View::WorkflowList]);
    assert_eq!(navigator.drawer, Some(true));
    assert_eq!(session.state(), SessionState::Closed);
    assert!(!session.listener_active());
    assert!(session.store().is_empty());
    assert!(session.drawer_open());
}

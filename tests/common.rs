//! Common test utilities for building editor sessions.
use ivr_flow::prelude::*;

/// A session over the standard menu flow with default preferences (single-skill mode).
#[allow(dead_code)]
pub fn single_session() -> EditorSession {
    EditorSession::new()
}

/// A session with multi-skill selection enabled.
#[allow(dead_code)]
pub fn multi_session() -> EditorSession {
    EditorSession::builder()
        .with_preferences(DisplayPreferences {
            multiple_skills: true,
            ..DisplayPreferences::default()
        })
        .build()
}

/// A session laid out with a dedicated skills step.
#[allow(dead_code)]
pub fn skills_node_session(multi: bool) -> EditorSession {
    EditorSession::builder()
        .with_preferences(DisplayPreferences {
            multiple_skills: multi,
            skills_approach: SkillsApproach::NewSkillsNode,
            ..DisplayPreferences::default()
        })
        .build()
}

/// Opens the menu of `id` and promotes it to an edit session.
#[allow(dead_code)]
pub fn edit(session: &mut EditorSession, id: &str) {
    session.open_menu(id).unwrap();
    session.choose_edit().unwrap();
}

/// Commits `skills` on an Operators transfer with the skill toggle on.
#[allow(dead_code)]
pub fn assign_operator_skills(session: &mut EditorSession, id: &str, skills: &[&str]) {
    edit(session, id);
    session.select_destination(Destination::Operators).unwrap();
    session.set_operators_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    for skill in skills {
        session.choose_skill(skill).unwrap();
    }
    session.update().unwrap();
}

/// Commits a ContactCenter destination with skills and a label pair.
#[allow(dead_code)]
pub fn assign_contact_center(
    session: &mut EditorSession,
    id: &str,
    center: ContactCenter,
    skill: &str,
    label: (&str, &str),
) {
    edit(session, id);
    session.select_destination(Destination::ContactCenter).unwrap();
    session.select_contact_center(Some(center)).unwrap();
    session.set_contact_center_skill_enabled(true).unwrap();
    session.open_selector(SelectorScope::Edit).unwrap();
    session.choose_skill(skill).unwrap();
    session.set_label_name(label.0).unwrap();
    session.set_label_value(label.1).unwrap();
    session.update().unwrap();
}

/// Finds the rendered card of `id` on the canvas.
#[allow(dead_code)]
pub fn rendered(session: &EditorSession, id: &str) -> RenderedNode {
    session
        .render_canvas()
        .into_iter()
        .find_map(|slot| match slot {
            CanvasSlot::Node(node) if node.id.as_str() == id => Some(node),
            _ => None,
        })
        .unwrap_or_else(|| panic!("node '{id}' is not on the canvas"))
}

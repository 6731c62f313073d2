//! Tests for node cards, skill badges and canvas layout.
mod common;
use common::*;
use ivr_flow::prelude::*;
use ivr_flow::render::{BadgeKind, list_badges, node_skill_badges};

fn stored(size: usize) -> String {
    (1..=size).map(|i| format!("S{i}")).collect::<Vec<_>>().join(", ")
}

#[test]
fn test_truncation_rule_badge_counts() {
    assert_eq!(node_skill_badges(&stored(1), false).len(), 1);
    assert_eq!(node_skill_badges(&stored(2), false).len(), 2);

    let three = node_skill_badges(&stored(3), false);
    assert_eq!(three.len(), 2);
    assert_eq!(three[0].text, "S1");
    assert_eq!(three[1].kind, BadgeKind::More);
    assert_eq!(three[1].text, "+2");

    let five = node_skill_badges(&stored(5), false);
    assert_eq!(five.len(), 2);
    assert_eq!(five[1].text, "+4");
    assert_eq!(five[1].tooltip.as_deref(), Some("S2\nS3\nS4\nS5"));
}

#[test]
fn test_skill_prefix_applies_only_to_single_badge() {
    let single = node_skill_badges("Spanish", false);
    assert_eq!(single[0].text, "Skill: Spanish");
    assert_eq!(single[0].tooltip, None);

    let bare = node_skill_badges("Spanish", true);
    assert_eq!(bare[0].text, "Spanish");
    assert_eq!(bare[0].tooltip.as_deref(), Some("Skill"));

    // Two values never carry the prefix, whatever the preference.
    for tooltip in [false, true] {
        let two = node_skill_badges("Spanish, Sales Support", tooltip);
        assert_eq!(two[0].text, "Spanish");
        assert_eq!(two[1].text, "Sales Support");
        assert_eq!(two[0].kind, BadgeKind::Skill);
    }
}

#[test]
fn test_more_badge_always_lists_remaining() {
    let badges = node_skill_badges("A, B, C", true);
    assert_eq!(badges[0].tooltip.as_deref(), Some("Skill"));
    assert_eq!(badges[1].tooltip.as_deref(), Some("B\nC"));
}

#[test]
fn test_list_badges_have_no_prefix() {
    let values = vec!["Spanish".to_string()];
    let badges = list_badges(&values);
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].text, "Spanish");
    assert!(list_badges(&[]).is_empty());
}

#[test]
fn test_transfer_card_defaults() {
    let session = single_session();
    let card = rendered(&session, "transfer-sales");
    assert_eq!(card.header, "TRANSFER");
    assert_eq!(card.label, "Transfer – Sales");
    assert_eq!(card.destination.as_deref(), Some("Operators"));
    assert!(card.skill_badges.is_empty());
    assert_eq!(card.label_badge, None);

    let play = rendered(&session, "play-sales");
    assert_eq!(play.destination, None);
    assert_eq!(rendered(&session, "incoming").header, "INCOMING CALL");
}

#[test]
fn test_transfer_card_after_commit() {
    let mut session = single_session();
    assign_contact_center(
        &mut session,
        "transfer-support",
        ContactCenter::Support,
        "Technical Support",
        ("tier", "gold"),
    );
    let card = rendered(&session, "transfer-support");
    assert_eq!(card.destination.as_deref(), Some("Support Center"));
    assert_eq!(card.skill_badges.len(), 1);
    assert_eq!(card.skill_badges[0].text, "Skill: Technical Support");
    assert_eq!(card.label_badge.as_deref(), Some("gold"));
}

#[test]
fn test_badges_follow_tooltip_preference() {
    let mut session = single_session();
    assign_operator_skills(&mut session, "transfer-sales", &["Spanish"]);
    session.set_skill_badge_tooltip(true);
    let card = rendered(&session, "transfer-sales");
    assert_eq!(card.skill_badges[0].text, "Spanish");
}

#[test]
fn test_transfer_layout_hides_billing_play_and_skill_slot() {
    let session = single_session();
    let slots = session.render_canvas();
    assert_eq!(slots.len(), 10);
    assert!(!slots.iter().any(|s| matches!(s, CanvasSlot::AddStep)));
    assert!(!slots.iter().any(
        |s| matches!(s, CanvasSlot::Node(n) if n.id.as_str() == "play-billings")
    ));
}

#[test]
fn test_skills_layout_places_skill_slot_before_voicemail() {
    let mut session = skills_node_session(false);
    let position = |slots: &[CanvasSlot], id: &str| {
        slots
            .iter()
            .position(|s| matches!(s, CanvasSlot::Node(n) if n.id.as_str() == id))
    };

    let slots = session.render_canvas();
    assert_eq!(slots.len(), 12);
    let voicemail = position(&slots, "transfer-voicemail").unwrap();
    assert!(matches!(slots[voicemail - 1], CanvasSlot::AddStep));

    session.open_add_step().unwrap();
    session.select_step_type(StepType::Skills).unwrap();
    session.set_new_node_name("Route").unwrap();
    session.confirm_add_step().unwrap();

    let slots = session.render_canvas();
    assert_eq!(slots.len(), 12);
    assert_eq!(
        position(&slots, "skill-node").unwrap() + 1,
        position(&slots, "transfer-voicemail").unwrap()
    );
    let card = rendered(&session, "skill-node");
    assert_eq!(card.header, "SKILLS");
    assert_eq!(card.label, "Route");
    assert_eq!(card.destination, None);
}

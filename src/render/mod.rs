use crate::node::{FlowNode, NodeId, NodeStore, SKILL_NODE_ID};
use serde::{Deserialize, Serialize};

mod badges;

pub use badges::*;

/// Where skills are shown on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillsApproach {
    /// Skills are configured inside Transfer nodes.
    #[default]
    TransferNode,
    /// A dedicated Skills step sits in the flow.
    NewSkillsNode,
}

/// Global display-preference flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    /// Render single skill badges bare and attach the "Skill" tooltip.
    pub skill_badge_tooltip: bool,
    /// Skill selectors toggle many values instead of picking one.
    pub multiple_skills: bool,
    pub skills_approach: SkillsApproach,
    /// Workflow list shows truncated multi-skill badges instead of the first skill only.
    pub workflow_multiple_skills: bool,
}

/// Everything needed to draw one node card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNode {
    pub id: NodeId,
    pub header: &'static str,
    pub label: String,
    pub destination: Option<String>,
    pub skill_badges: Vec<SkillBadge>,
    pub label_badge: Option<String>,
    pub menu_open: bool,
}

/// One position in the rendered flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "slot", rename_all = "snake_case")]
pub enum CanvasSlot {
    Node(RenderedNode),
    /// The "+" placeholder that opens the add-step panel.
    AddStep,
}

/// Pure view over committed node configuration.
pub struct FlowNodeRenderer<'a> {
    store: &'a NodeStore,
    preferences: &'a DisplayPreferences,
}

impl<'a> FlowNodeRenderer<'a> {
    pub fn new(store: &'a NodeStore, preferences: &'a DisplayPreferences) -> Self {
        Self { store, preferences }
    }

    pub fn render(&self, node: &FlowNode, menu_open: bool) -> RenderedNode {
        let id = node.id.as_str();
        let carries_skills = node.step_type.carries_skills();

        let destination = node.step_type.is_transfer().then(|| {
            self.store
                .destination(id)
                .unwrap_or("Operators")
                .to_string()
        });

        let skill_badges = match self.store.skill(id) {
            Some(stored) if carries_skills => {
                node_skill_badges(stored, self.preferences.skill_badge_tooltip)
            }
            _ => Vec::new(),
        };

        let label_badge = self
            .store
            .label_pair(id)
            .filter(|_| carries_skills)
            .map(|pair| pair.value.clone());

        RenderedNode {
            id: node.id.clone(),
            header: node.step_type.header(),
            label: self
                .store
                .display_name(id)
                .unwrap_or(node.label.as_str())
                .to_string(),
            destination,
            skill_badges,
            label_badge,
            menu_open,
        }
    }

    /// Renders the canvas for the current skills approach.
    ///
    /// The transfer-node layout hides the billing play step and the skills slot.
    /// The skills-node layout places the skills step (or the add-step placeholder
    /// until one exists) right before the voicemail transfer.
    pub fn render_canvas(&self, canvas: &[FlowNode], open_menu: Option<&NodeId>) -> Vec<CanvasSlot> {
        let skills_layout = self.preferences.skills_approach == SkillsApproach::NewSkillsNode;
        let mut slots = Vec::with_capacity(canvas.len() + 1);

        for node in canvas {
            let id = node.id.as_str();
            if id == SKILL_NODE_ID || (!skills_layout && id == "play-billings") {
                continue;
            }
            if skills_layout && id == "transfer-voicemail" {
                slots.push(self.skill_slot(canvas, open_menu));
            }
            slots.push(CanvasSlot::Node(self.render(node, open_menu == Some(&node.id))));
        }
        slots
    }

    fn skill_slot(&self, canvas: &[FlowNode], open_menu: Option<&NodeId>) -> CanvasSlot {
        match canvas.iter().find(|n| n.id.as_str() == SKILL_NODE_ID) {
            Some(node) => CanvasSlot::Node(self.render(node, open_menu == Some(&node.id))),
            None => CanvasSlot::AddStep,
        }
    }
}

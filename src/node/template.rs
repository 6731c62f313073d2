use super::{FlowNode, StepType};

/// Id given to the skills step created from the add-step panel.
pub const SKILL_NODE_ID: &str = "skill-node";

/// The "standard menu with context" flow the editor starts from.
pub fn standard_menu_flow() -> Vec<FlowNode> {
    vec![
        FlowNode::new("incoming", StepType::IncomingCall, "Incoming Call"),
        FlowNode::new("menu", StepType::Menu, "Menu"),
        FlowNode::new("play-sales", StepType::Play, "Play – Sales"),
        FlowNode::new("play-support", StepType::Play, "Play – Support"),
        FlowNode::new("play-billings", StepType::Play, "Play – Billings"),
        FlowNode::new("play-default", StepType::Play, "Play – Default"),
        FlowNode::new("customer-sales", StepType::CustomerData, "Customer Data – Sales"),
        FlowNode::new(
            "customer-support",
            StepType::CustomerData,
            "Customer Data – Support",
        ),
        FlowNode::new("transfer-voicemail", StepType::Transfer, "Transfer – Voicemail"),
        FlowNode::new("transfer-sales", StepType::Transfer, "Transfer – Sales"),
        FlowNode::new("transfer-support", StepType::Transfer, "Transfer – Support"),
    ]
}

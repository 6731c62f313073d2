use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

pub mod destination;
pub mod store;
pub mod template;

pub use destination::*;
pub use store::*;
pub use template::*;

/// Opaque, stable identifier of a step on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The kind of step a node represents. Fixed once the node exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    IncomingCall,
    Menu,
    Collect,
    Play,
    Expert,
    Branch,
    GoTo,
    Assign,
    CustomerData,
    Transfer,
    Hangup,
    Skills,
}

impl StepType {
    /// Step types offered by the add-step panel, in panel order.
    pub const ADDABLE: [StepType; 11] = [
        StepType::Menu,
        StepType::Collect,
        StepType::Play,
        StepType::Expert,
        StepType::Branch,
        StepType::GoTo,
        StepType::Assign,
        StepType::CustomerData,
        StepType::Transfer,
        StepType::Hangup,
        StepType::Skills,
    ];

    /// Header shown above the node label on the canvas.
    pub fn header(&self) -> &'static str {
        match self {
            StepType::IncomingCall => "INCOMING CALL",
            StepType::Menu => "MENU",
            StepType::Collect => "COLLECT",
            StepType::Play => "PLAY",
            StepType::Expert => "EXPERT",
            StepType::Branch => "BRANCH",
            StepType::GoTo => "GO-TO",
            StepType::Assign => "ASSIGN",
            StepType::CustomerData => "CUSTOMER DATA",
            StepType::Transfer => "TRANSFER",
            StepType::Hangup => "HANGUP",
            StepType::Skills => "SKILLS",
        }
    }

    /// Whether the node carries a destination and the transfer edit panel.
    pub fn is_transfer(&self) -> bool {
        matches!(self, StepType::Transfer)
    }

    /// Whether skill badges may be rendered for this node.
    pub fn carries_skills(&self) -> bool {
        matches!(self, StepType::Transfer | StepType::Skills)
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// A step placed on the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: NodeId,
    pub step_type: StepType,
    /// Label used when no display name has been committed.
    pub label: String,
}

impl FlowNode {
    pub fn new(id: impl Into<NodeId>, step_type: StepType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            step_type,
            label: label.into(),
        }
    }
}

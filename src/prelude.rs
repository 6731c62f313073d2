//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to drive an editing session.
//!
//! # Example
//!
//! ```rust,no_run
//! use ivr_flow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = EditorConfig::from_file("path/to/editor.json")?;
//! let mut session = EditorSession::with_config(&config);
//! let events = EditorEvent::parse_script(&std::fs::read_to_string("path/to/script.json")?)?;
//! session.replay(events)?;
//! println!("{:?}", session.render_canvas());
//! # Ok(())
//! # }
//! ```

// Session and configuration
pub use crate::config::EditorConfig;
pub use crate::session::{
    CommitReport, Dropdown, EditorEvent, EditorSession, Field, PointerTarget, SelectorScope,
    SessionState,
};

// Node model
pub use crate::node::{ContactCenter, Destination, FlowNode, LabelPair, NodeId, NodeStore, StepType};

// Skills
pub use crate::skill::{SelectionMode, SkillCatalog, SkillSelector, SkillSet};

// Rendering
pub use crate::render::{CanvasSlot, DisplayPreferences, RenderedNode, SkillBadge, SkillsApproach};
pub use crate::view::{Navigator, View};

// Error types
pub use crate::error::{ConfigError, ScriptError, SessionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

//! # ivr-flow - IVR Flow Node Configuration Engine
//!
//! **ivr-flow** models the node configuration side of an IVR flow editor: the
//! per-node edit panel of Transfer and Skills steps, the searchable skill
//! selector, the committed per-node configuration store, and the pure rendering
//! of node cards and skill badges.
//!
//! ## Core Workflow
//!
//! 1.  **Configure**: Load an `EditorConfig` (display preferences and an optional skill catalog) or use the defaults.
//! 2.  **Build a session**: `EditorSession::builder` seeds the standard IVR menu flow.
//! 3.  **Drive it**: Call the session operations directly, or replay serialized `EditorEvent`s.
//! 4.  **Render**: `EditorSession::render_canvas` turns committed configuration into node cards.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ivr_flow::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = EditorConfig::from_json(r#"{ "preferences": { "multiple_skills": true } }"#)?;
//!     let mut session = EditorSession::builder().with_config(&config).build();
//!
//!     session.open_menu("transfer-sales")?;
//!     session.choose_edit()?;
//!     session.set_operators_skill_enabled(true)?;
//!     session.open_selector(SelectorScope::Edit)?;
//!     session.choose_skill("Sales Support")?;
//!     session.choose_skill("Spanish")?;
//!     session.update()?;
//!
//!     assert_eq!(session.store().skill("transfer-sales"), Some("Sales Support, Spanish"));
//!
//!     for slot in session.render_canvas() {
//!         if let CanvasSlot::Node(node) = slot {
//!             println!("{} {}", node.header, node.label);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod prelude;
pub mod render;
pub mod session;
pub mod skill;
pub mod view;
pub mod workflow;

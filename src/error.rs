use crate::node::NodeId;
use thiserror::Error;

/// Errors raised when an editor operation is invoked outside the state that accepts it.
///
/// Validation gates (blank custom skills, blank node names, unresolvable
/// destinations) are not errors; those operations simply leave the state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Node '{0}' does not exist on the canvas")]
    NodeNotFound(NodeId),

    #[error("No node menu is open, so there is nothing to edit")]
    NoMenuOpen,

    #[error("Node '{0}' is being edited; update or cancel it first")]
    EditInProgress(NodeId),

    #[error("No node is currently being edited")]
    NotEditing,

    #[error("No step is currently being added")]
    NotCreating,

    #[error("A skills step has already been added to this flow")]
    CreationLimitReached,

    #[error("The skill selector is not open")]
    SelectorClosed,

    #[error("Field '{field}' is not visible for node '{node_id}' in its current configuration")]
    FieldHidden { node_id: NodeId, field: String },
}

/// Errors that can occur while loading an `EditorConfig`.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),
}

/// Errors that can occur while replaying a scripted editing session.
#[derive(Error, Debug, Clone)]
pub enum ScriptError {
    #[error("Failed to parse event script: {0}")]
    Parse(String),

    #[error("Event #{step} was rejected: {source}")]
    Session {
        step: usize,
        #[source]
        source: SessionError,
    },
}

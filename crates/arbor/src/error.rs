//! Error types for the tree view.
//!
//! Configuration and usage errors are raised at construction time. Interaction
//! edge cases (ArrowDown on the last node, a click on a disabled node) are not
//! errors; the corresponding handlers simply report that nothing happened.

use std::path::PathBuf;

use arbor_core::CoreError;

/// Result type alias for tree view operations.
pub type Result<T> = std::result::Result<T, TreeViewError>;

/// Errors that can occur while building or driving a tree view.
#[derive(Debug, thiserror::Error)]
pub enum TreeViewError {
    /// An item was declared without a value.
    #[error("TreeView.Item requires a unique, non-empty `value` (declared under {parent})")]
    MissingValue { parent: String },

    /// Two items were declared with the same value.
    #[error("TreeView.Item value '{0}' is declared more than once; values must be unique")]
    DuplicateValue(String),

    /// A virtualized tree declared an item without an explicit index.
    #[error("TreeView.Item '{0}' needs an explicit `index` because the tree is virtualized")]
    MissingIndex(String),

    /// A part was requested for a value that is not an item of this tree.
    #[error(
        "{part} must be placed within a TreeView.Item, but no item with value '{value}' exists in this tree"
    )]
    ItemNotFound { part: &'static str, value: String },

    /// A reparent operation was rejected by the model.
    #[error("Cannot move '{source_value}' into '{target}': {reason}")]
    InvalidMove {
        source_value: String,
        target: String,
        reason: &'static str,
    },

    /// A host pushed a value into state it does not control.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// JSON definition could not be parsed.
    #[error("Invalid JSON tree definition: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML definition could not be parsed.
    #[error("Invalid TOML tree definition: {0}")]
    Toml(#[from] toml::de::Error),

    /// A definition file could not be read.
    #[error("Failed to read tree definition '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeViewError {
    /// Create a missing-value error for an item declared under `parent`.
    pub fn missing_value(parent: Option<&str>) -> Self {
        Self::MissingValue {
            parent: parent.map_or_else(|| "the tree root".to_string(), |p| format!("'{p}'")),
        }
    }

    /// Create a usage error for `part` referring to an unknown `value`.
    pub fn item_not_found(part: &'static str, value: impl Into<String>) -> Self {
        Self::ItemNotFound {
            part,
            value: value.into(),
        }
    }

    /// Create a rejected-move error.
    pub fn invalid_move(
        source_value: impl Into<String>,
        target: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidMove {
            source_value: source_value.into(),
            target: target.into(),
            reason,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error reports a malformed tree declaration.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingValue { .. }
                | Self::DuplicateValue(_)
                | Self::MissingIndex(_)
                | Self::Json(_)
                | Self::Toml(_)
        )
    }

    /// Whether this error reports a part used outside its item.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. } | Self::Core(_))
    }
}

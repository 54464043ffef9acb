//! Prelude module for Arbor.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use arbor::prelude::*;
//! ```

// ============================================================================
// Core Primitives
// ============================================================================

pub use arbor_core::{
    ChangeEventDetails, ConnectionId, HighlightEventDetails, InteractionReason, Signal,
    TreeFormatOptions, TreeStyle,
};

// ============================================================================
// Errors
// ============================================================================

pub use crate::error::TreeViewError;

// ============================================================================
// Data Model
// ============================================================================

pub use crate::model::{
    FlatTreeItem, GroupDefinition, ItemDefinition, SelectedValue, SelectionMode, TreeDefinition,
};

// ============================================================================
// Tree View
// ============================================================================

pub use crate::widget::tree_view::{
    CheckedState, TextDirection, TreeViewConfig, TreeViewItem, TreeViewRoot,
};

// ============================================================================
// Events and Attributes
// ============================================================================

pub use crate::widget::{AttributeMap, ClickEvent, Key, KeyPressEvent};

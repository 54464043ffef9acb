//! Tree data model for Arbor.
//!
//! - [`TreeDefinition`] - the declared hierarchy (code, JSON or TOML)
//! - [`TreeModel`] - arena storage with parent/children links and a value index
//! - [`FlatTreeItem`] - one row of the visible, linearized traversal list
//! - [`SelectionMode`] / [`SelectedValue`] - selection policy and state, plus
//!   the pure selection-set algebra used by the root

pub mod definition;
pub mod flat;
pub mod selection;
pub mod tree_model;

pub use definition::{GroupDefinition, ItemDefinition, TreeDefinition};
pub use flat::{FlatTreeItem, flatten_visible, position_of};
pub use selection::{SelectedValue, SelectionMode};
pub use tree_model::{GroupOptions, NodeKey, TreeModel, TreeNode};

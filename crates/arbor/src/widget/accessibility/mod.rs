//! Accessibility support for tree views.
//!
//! [`AccessibleRole`] names the WAI-ARIA role of every part and is always
//! available. With the `accessibility` feature the module also exposes the
//! tree to platform accessibility APIs through
//! [AccessKit](https://accesskit.dev/):
//!
//! - [`Accessible`] trait: implemented by the root, items and checkboxes
//! - [`TreeViewRoot::accessibility_tree`](crate::widget::tree_view::TreeViewRoot::accessibility_tree):
//!   a full `TreeUpdate` built from the visible rows
//! - [`TreeViewRoot::handle_accessibility_action`](crate::widget::tree_view::TreeViewRoot::handle_accessibility_action):
//!   routes assistive technology actions into the state handlers
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "accessibility")]
//! # {
//! use arbor::model::{ItemDefinition, TreeDefinition};
//! use arbor::widget::tree_view::TreeViewRoot;
//!
//! let tree = TreeViewRoot::builder(
//!     TreeDefinition::new().with_item(ItemDefinition::new("src").with_child(ItemDefinition::new("lib.rs"))),
//! )
//! .aria_label("Project")
//! .build()
//! .unwrap();
//!
//! let update = tree.accessibility_tree();
//! assert_eq!(update.nodes.len(), 2);
//! # }
//! ```

#[cfg(feature = "accessibility")]
mod node;
mod role;
#[cfg(feature = "accessibility")]
mod tree_update;

#[cfg(feature = "accessibility")]
pub use node::Accessible;
pub use role::AccessibleRole;
#[cfg(feature = "accessibility")]
pub use tree_update::{ROOT_NODE_ID, node_id, node_key};

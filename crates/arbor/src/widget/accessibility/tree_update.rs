//! AccessKit tree updates and action routing for a tree view.

use std::collections::HashMap;

use accesskit::{Action, ActionRequest, NodeId, Tree, TreeUpdate};
use slotmap::{Key as _, KeyData};

use arbor_core::InteractionReason;
use arbor_core::logging::targets;

use super::node::Accessible;
use crate::model::NodeKey;
use crate::widget::tree_view::TreeViewRoot;

/// Node id of the tree container.
pub const ROOT_NODE_ID: NodeId = NodeId(0);

/// Convert a node key to an AccessKit NodeId.
///
/// Slot map keys always carry a non-zero version, so no item collides with
/// [`ROOT_NODE_ID`].
pub fn node_id(key: NodeKey) -> NodeId {
    NodeId(key.data().as_ffi())
}

/// Convert an AccessKit NodeId back to a node key.
///
/// Returns None for the root id.
pub fn node_key(id: NodeId) -> Option<NodeKey> {
    (id != ROOT_NODE_ID).then(|| NodeKey::from(KeyData::from_ffi(id.0)))
}

impl TreeViewRoot {
    /// Build a full accessibility tree from the visible rows.
    ///
    /// Each visible node becomes a tree item nested under its parent's item.
    /// Focus lands on the active node when it is visible, on the tree
    /// container otherwise.
    pub fn accessibility_tree(&self) -> TreeUpdate {
        let rows = self.flat_items();
        let items: Vec<_> = rows
            .iter()
            .filter_map(|row| self.item(&row.value).ok())
            .collect();

        let mut children: HashMap<Option<&str>, Vec<NodeId>> = HashMap::new();
        for (row, item) in rows.iter().zip(&items) {
            children
                .entry(row.parent_value.as_deref())
                .or_default()
                .push(node_id(item.key()));
        }

        let mut nodes = Vec::with_capacity(items.len() + 1);
        let top_level = children.get(&None).map(Vec::as_slice).unwrap_or_default();
        nodes.push((ROOT_NODE_ID, self.build_accessible_node(top_level)));
        for item in &items {
            let own = children
                .get(&Some(item.value()))
                .map(Vec::as_slice)
                .unwrap_or_default();
            nodes.push((node_id(item.key()), item.build_accessible_node(own)));
        }

        TreeUpdate {
            nodes,
            tree: Some(Tree::new(ROOT_NODE_ID)),
            focus: self.accessibility_focus(),
        }
    }

    /// Build an update that only changes focus.
    pub fn accessibility_focus_update(&self) -> TreeUpdate {
        TreeUpdate {
            nodes: Vec::new(),
            tree: None,
            focus: self.accessibility_focus(),
        }
    }

    fn accessibility_focus(&self) -> NodeId {
        self.active_value()
            .filter(|value| self.flat_position(value).is_some())
            .and_then(|value| self.with_model(|model| model.key_of(&value)))
            .map_or(ROOT_NODE_ID, node_id)
    }

    /// Route an action requested by assistive technology.
    ///
    /// Focus moves the active node, Expand and Collapse go through the
    /// expansion handler, Click toggles selection. Returns `true` if the
    /// action changed state.
    pub fn handle_accessibility_action(&self, request: &ActionRequest) -> bool {
        let Some(key) = node_key(request.target) else {
            return false;
        };
        let Some(value) = self.with_model(|model| model.node(key).map(|n| n.value().to_string())) else {
            return false;
        };
        let Ok(item) = self.item(&value) else {
            return false;
        };
        if item.is_disabled() {
            return false;
        }

        tracing::debug!(target: targets::TREE_VIEW, %value, action = ?request.action, "accessibility action");
        match request.action {
            Action::Focus => self.set_active_value(Some(&value), InteractionReason::Keyboard),
            Action::Expand if item.has_children() => {
                self.handle_expanded_change(&value, true, InteractionReason::None)
            }
            Action::Collapse if item.has_children() => {
                self.handle_expanded_change(&value, false, InteractionReason::None)
            }
            Action::Click if self.selection_mode().allows_selection() => {
                self.handle_selection(&value, InteractionReason::None)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDefinition, SelectionMode, TreeDefinition};

    fn tree() -> TreeViewRoot {
        let definition = TreeDefinition::new()
            .with_item(
                ItemDefinition::new("src")
                    .with_child(ItemDefinition::new("main.rs"))
                    .with_child(ItemDefinition::new("lib.rs")),
            )
            .with_item(ItemDefinition::new("Cargo.toml"));
        TreeViewRoot::builder(definition)
            .selection_mode(SelectionMode::Single)
            .build()
            .unwrap()
    }

    fn request(root: &TreeViewRoot, value: &str, action: Action) -> ActionRequest {
        let key = root.item(value).unwrap().key();
        ActionRequest {
            action,
            target: node_id(key),
            data: None,
        }
    }

    #[test]
    fn test_node_id_round_trip() {
        let root = tree();
        let key = root.item("lib.rs").unwrap().key();
        assert_ne!(node_id(key), ROOT_NODE_ID);
        assert_eq!(node_key(node_id(key)), Some(key));
        assert_eq!(node_key(ROOT_NODE_ID), None);
    }

    #[test]
    fn test_tree_contains_visible_rows_only() {
        let root = tree();
        let update = root.accessibility_tree();
        assert_eq!(update.nodes.len(), 3);
        assert_eq!(update.focus, ROOT_NODE_ID);
        assert_eq!(update.nodes[0].1.children().len(), 2);

        root.toggle_expansion("src", true);
        let update = root.accessibility_tree();
        assert_eq!(update.nodes.len(), 5);
        assert_eq!(update.nodes[0].1.children().len(), 2);
        assert_eq!(update.nodes[1].1.children().len(), 2);
        assert_eq!(update.nodes[1].1.is_expanded(), Some(true));
    }

    #[test]
    fn test_focus_follows_active_value() {
        let root = tree();
        root.set_active_value(Some("Cargo.toml"), InteractionReason::Pointer);
        let key = root.item("Cargo.toml").unwrap().key();
        assert_eq!(root.accessibility_focus_update().focus, node_id(key));

        // A hidden active node falls back to the container.
        root.set_active_value(Some("main.rs"), InteractionReason::Pointer);
        assert_eq!(root.accessibility_tree().focus, ROOT_NODE_ID);
    }

    #[test]
    fn test_actions_route_through_handlers() {
        let root = tree();
        assert!(root.handle_accessibility_action(&request(&root, "src", Action::Expand)));
        assert!(root.is_expanded("src"));
        assert!(!root.handle_accessibility_action(&request(&root, "main.rs", Action::Expand)));

        assert!(root.handle_accessibility_action(&request(&root, "main.rs", Action::Click)));
        assert!(root.is_selected("main.rs"));

        assert!(root.handle_accessibility_action(&request(&root, "lib.rs", Action::Focus)));
        assert_eq!(root.active_value().as_deref(), Some("lib.rs"));

        assert!(root.handle_accessibility_action(&request(&root, "src", Action::Collapse)));
        assert!(!root.is_expanded("src"));

        let stray = ActionRequest {
            action: Action::Focus,
            target: ROOT_NODE_ID,
            data: None,
        };
        assert!(!root.handle_accessibility_action(&stray));
    }
}

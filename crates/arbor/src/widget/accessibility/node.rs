//! The Accessible trait for tree view parts.

use accesskit::{Action, Node, NodeId, Toggled};

use super::role::AccessibleRole;
use crate::widget::tree_view::{CheckedState, TreeViewItem, TreeViewItemCheckbox, TreeViewRoot};

/// Trait for parts that provide accessibility information.
///
/// Most methods have defaults:
/// - `accessible_role()` returns `AccessibleRole::Unknown`
/// - `accessible_name()` returns `None`
/// - state methods (`is_accessible_checked()`, etc.) return `None`
///
/// Parts override the methods relevant to their semantics.
pub trait Accessible {
    /// Get the accessibility role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Unknown
    }

    /// Get the accessible name announced by screen readers.
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// Check if the part is checked. `None` if it is not checkable.
    fn is_accessible_checked(&self) -> Option<bool> {
        None
    }

    /// Check if a checkable part is in the mixed state.
    fn is_accessible_mixed(&self) -> bool {
        false
    }

    /// Check if the part is expanded. `None` if it cannot expand.
    fn is_accessible_expanded(&self) -> Option<bool> {
        None
    }

    /// Check if the part is selected. `None` if it is not selectable.
    fn is_accessible_selected(&self) -> Option<bool> {
        None
    }

    /// Check if the part ignores interaction.
    fn is_accessible_disabled(&self) -> bool {
        false
    }

    /// Check if more than one descendant can be selected.
    fn is_accessible_multiselectable(&self) -> bool {
        false
    }

    /// Get the actions supported by this part.
    fn accessible_actions(&self) -> Vec<Action> {
        Vec::new()
    }

    /// Get the level for hierarchical items (1-indexed).
    fn accessible_level(&self) -> Option<usize> {
        None
    }

    /// Get the position among siblings (1-indexed).
    fn accessible_position_in_set(&self) -> Option<usize> {
        None
    }

    /// Get the number of siblings, the part included.
    fn accessible_set_size(&self) -> Option<usize> {
        None
    }

    /// Build an AccessKit Node from this part's accessibility info.
    fn build_accessible_node(&self, children: &[NodeId]) -> Node {
        let mut node = Node::new(self.accessible_role().to_accesskit_role());

        if let Some(name) = self.accessible_name() {
            node.set_label(name);
        }

        if let Some(checked) = self.is_accessible_checked() {
            if self.is_accessible_mixed() {
                node.set_toggled(Toggled::Mixed);
            } else if checked {
                node.set_toggled(Toggled::True);
            } else {
                node.set_toggled(Toggled::False);
            }
        }

        if let Some(expanded) = self.is_accessible_expanded() {
            node.set_expanded(expanded);
        }
        if let Some(selected) = self.is_accessible_selected() {
            node.set_selected(selected);
        }
        if self.is_accessible_disabled() {
            node.set_disabled();
        }
        if self.is_accessible_multiselectable() {
            node.set_multiselectable();
        }

        for action in self.accessible_actions() {
            node.add_action(action);
        }

        if let Some(pos) = self.accessible_position_in_set() {
            node.set_position_in_set(pos);
        }
        if let Some(size) = self.accessible_set_size() {
            node.set_size_of_set(size);
        }
        if let Some(level) = self.accessible_level() {
            node.set_level(level);
        }

        if !children.is_empty() {
            node.set_children(children.to_vec());
        }

        node
    }
}

impl Accessible for TreeViewRoot {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Tree
    }

    fn accessible_name(&self) -> Option<String> {
        self.config().aria_label.clone()
    }

    fn is_accessible_disabled(&self) -> bool {
        self.is_disabled()
    }

    fn is_accessible_multiselectable(&self) -> bool {
        self.selection_mode() == crate::model::SelectionMode::Multiple
    }
}

impl Accessible for TreeViewItem<'_> {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TreeItem
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.label_text())
    }

    fn is_accessible_expanded(&self) -> Option<bool> {
        self.has_children().then(|| self.is_expanded())
    }

    fn is_accessible_selected(&self) -> Option<bool> {
        self.root()
            .selection_mode()
            .allows_selection()
            .then(|| self.is_selected())
    }

    fn is_accessible_disabled(&self) -> bool {
        self.is_disabled()
    }

    fn accessible_actions(&self) -> Vec<Action> {
        if self.is_disabled() {
            return Vec::new();
        }
        let mut actions = vec![Action::Focus];
        if self.has_children() {
            actions.push(if self.is_expanded() {
                Action::Collapse
            } else {
                Action::Expand
            });
        }
        if self.root().selection_mode().allows_selection() {
            actions.push(Action::Click);
        }
        actions
    }

    fn accessible_level(&self) -> Option<usize> {
        Some(self.level())
    }

    fn accessible_position_in_set(&self) -> Option<usize> {
        self.sibling_position().map(|(pos, _)| pos + 1)
    }

    fn accessible_set_size(&self) -> Option<usize> {
        self.sibling_position().map(|(_, size)| size)
    }
}

impl TreeViewItem<'_> {
    /// Zero-based position among siblings and the sibling count.
    fn sibling_position(&self) -> Option<(usize, usize)> {
        let key = self.key();
        self.root().with_model(|model| {
            let siblings = match model.node(key)?.parent() {
                Some(parent) => model.node(parent)?.children(),
                None => model.root_keys(),
            };
            let pos = siblings.iter().position(|k| *k == key)?;
            Some((pos, siblings.len()))
        })
    }
}

impl Accessible for TreeViewItemCheckbox<'_> {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::CheckBox
    }

    fn accessible_name(&self) -> Option<String> {
        Some(self.item().label_text())
    }

    fn is_accessible_checked(&self) -> Option<bool> {
        Some(self.checked_state() == CheckedState::Checked)
    }

    fn is_accessible_mixed(&self) -> bool {
        self.checked_state() == CheckedState::Mixed
    }

    fn is_accessible_disabled(&self) -> bool {
        self.item().is_disabled()
    }

    fn accessible_actions(&self) -> Vec<Action> {
        let root = self.item().root();
        if self.item().is_disabled() || !root.selection_mode().allows_selection() {
            return Vec::new();
        }
        vec![Action::Click]
    }
}

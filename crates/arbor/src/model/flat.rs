//! The flat traversal list.
//!
//! Keyboard navigation walks a linearized, visibility-filtered view of the
//! tree: every top-level node, plus the children of every node whose
//! ancestors are all expanded, in declared order.

use arbor_core::logging::targets;

use super::tree_model::{NodeKey, TreeModel};

/// One visible row of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTreeItem {
    /// The node's value.
    pub value: String,
    /// 1-based depth.
    pub level: usize,
    /// Whether the node declares a child group.
    pub has_children: bool,
    /// Whether the node is in the expanded set.
    pub is_expanded: bool,
    /// Value of the parent node, `None` at the top level.
    pub parent_value: Option<String>,
    /// Own disabled flag or the tree-wide flag.
    pub disabled: bool,
}

/// Build the flat list of visible nodes.
///
/// `is_expanded` decides membership in the expanded set; `tree_disabled` is
/// the tree-wide disabled flag folded into each row.
pub fn flatten_visible<F>(model: &TreeModel, is_expanded: F, tree_disabled: bool) -> Vec<FlatTreeItem>
where
    F: Fn(&str) -> bool,
{
    let mut rows = Vec::new();
    flatten_into(model, model.root_keys(), None, 1, &is_expanded, tree_disabled, &mut rows);
    tracing::trace!(target: targets::MODEL, rows = rows.len(), "flat traversal list rebuilt");
    rows
}

fn flatten_into<F>(
    model: &TreeModel,
    keys: &[NodeKey],
    parent_value: Option<&str>,
    level: usize,
    is_expanded: &F,
    tree_disabled: bool,
    rows: &mut Vec<FlatTreeItem>,
) where
    F: Fn(&str) -> bool,
{
    for &key in keys {
        let Some(node) = model.node(key) else {
            continue;
        };
        let expanded = is_expanded(node.value());

        rows.push(FlatTreeItem {
            value: node.value().to_string(),
            level,
            has_children: node.has_children(),
            is_expanded: expanded,
            parent_value: parent_value.map(str::to_string),
            disabled: node.is_disabled() || tree_disabled,
        });

        if node.has_children() && expanded {
            flatten_into(
                model,
                node.children(),
                Some(node.value()),
                level + 1,
                is_expanded,
                tree_disabled,
                rows,
            );
        }
    }
}

/// Position of `value` in `rows`.
pub fn position_of(rows: &[FlatTreeItem], value: &str) -> Option<usize> {
    rows.iter().position(|row| row.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDefinition, TreeDefinition};

    fn model() -> TreeModel {
        let definition = TreeDefinition::new()
            .with_item(
                ItemDefinition::new("a")
                    .with_child(ItemDefinition::new("a1").with_child(ItemDefinition::new("a1x")))
                    .with_child(ItemDefinition::new("a2").disabled(true)),
            )
            .with_item(ItemDefinition::new("b"));
        TreeModel::from_definition(&definition).unwrap()
    }

    fn values(rows: &[FlatTreeItem]) -> Vec<&str> {
        rows.iter().map(|r| r.value.as_str()).collect()
    }

    #[test]
    fn test_collapsed_children_are_skipped() {
        let rows = flatten_visible(&model(), |_| false, false);
        assert_eq!(values(&rows), vec!["a", "b"]);
        assert!(rows[0].has_children);
        assert!(!rows[0].is_expanded);
    }

    #[test]
    fn test_expanded_chain_is_visited() {
        let rows = flatten_visible(&model(), |v| v == "a" || v == "a1", false);
        assert_eq!(values(&rows), vec!["a", "a1", "a1x", "a2", "b"]);
        assert_eq!(rows[2].level, 3);
        assert_eq!(rows[2].parent_value.as_deref(), Some("a1"));
        assert!(rows[3].disabled);
        assert!(!rows[1].disabled);
    }

    #[test]
    fn test_expanded_node_under_collapsed_ancestor_is_hidden() {
        let rows = flatten_visible(&model(), |v| v == "a1", false);
        assert_eq!(values(&rows), vec!["a", "b"]);
    }

    #[test]
    fn test_tree_disabled_marks_every_row() {
        let rows = flatten_visible(&model(), |_| true, true);
        assert!(rows.iter().all(|r| r.disabled));
        assert_eq!(position_of(&rows, "b"), Some(4));
        assert_eq!(position_of(&rows, "zzz"), None);
    }
}

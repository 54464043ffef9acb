//! Arena-backed tree model.
//!
//! `TreeModel` stores the declared hierarchy in a [`SlotMap`] with explicit
//! parent/children links and a value index. Collapsing a node never removes
//! anything from the model; visibility is derived by the flat traversal list.

use std::collections::{HashMap, HashSet};

use slotmap::{SlotMap, new_key_type};

use arbor_core::logging::targets;

use super::definition::{GroupDefinition, ItemDefinition, TreeDefinition};
use crate::error::{Result, TreeViewError};

new_key_type! {
    /// Stable arena key of a tree node.
    pub struct NodeKey;
}

/// Presence policy of a node's child group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupOptions {
    /// Keep children present (but hidden) while collapsed.
    pub keep_mounted: bool,
    /// Keep children present and discoverable by find-in-page while collapsed.
    pub hidden_until_found: bool,
}

impl GroupOptions {
    /// Whether children stay present while the group is collapsed.
    pub fn keeps_children_present(&self) -> bool {
        self.keep_mounted || self.hidden_until_found
    }
}

impl From<&GroupDefinition> for GroupOptions {
    fn from(group: &GroupDefinition) -> Self {
        Self {
            keep_mounted: group.keep_mounted,
            hidden_until_found: group.hidden_until_found,
        }
    }
}

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode {
    value: String,
    label: Option<String>,
    disabled: bool,
    index: Option<usize>,
    parent: Option<NodeKey>,
    group: Option<GroupOptions>,
    children: Vec<NodeKey>,
}

impl TreeNode {
    /// The node's unique value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The accessible label, falling back to the value.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }

    /// The node's own disabled flag (not including the tree-wide flag).
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The explicit index, if one was declared.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Arena key of the parent node.
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// The child group's presence policy, if the node declares a group.
    pub fn group(&self) -> Option<GroupOptions> {
        self.group
    }

    /// Child keys in declared order.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Whether the node declares a child group.
    ///
    /// A declared but empty group still counts.
    pub fn has_children(&self) -> bool {
        self.group.is_some()
    }
}

/// The declared tree structure.
///
/// # Example
///
/// ```
/// use arbor::model::{ItemDefinition, TreeDefinition, TreeModel};
///
/// let definition = TreeDefinition::new().with_item(
///     ItemDefinition::new("src").with_child(ItemDefinition::new("main.rs")),
/// );
/// let model = TreeModel::from_definition(&definition).unwrap();
///
/// assert_eq!(model.level_of("main.rs"), Some(2));
/// assert_eq!(model.parent_of("main.rs"), Some("src"));
/// assert_eq!(model.descendants("src"), vec!["main.rs".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeModel {
    nodes: SlotMap<NodeKey, TreeNode>,
    by_value: HashMap<String, NodeKey>,
    roots: Vec<NodeKey>,
}

impl TreeModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from a declaration.
    ///
    /// Fails on the first item without a value, or on a duplicated value.
    pub fn from_definition(definition: &TreeDefinition) -> Result<Self> {
        let mut model = Self::new();
        for item in &definition.items {
            model.insert(None, item)?;
        }
        tracing::debug!(target: targets::MODEL, nodes = model.len(), "tree model built");
        Ok(model)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert a declared item (and its subtree) under `parent`, or at the top level.
    ///
    /// The whole subtree is validated before anything is inserted.
    pub fn insert(&mut self, parent: Option<&str>, item: &ItemDefinition) -> Result<NodeKey> {
        let parent_key = match parent {
            Some(value) => Some(
                self.key_of(value)
                    .ok_or_else(|| TreeViewError::item_not_found("TreeView.ItemGroup", value))?,
            ),
            None => None,
        };

        let mut seen = HashSet::new();
        self.validate(parent, item, &mut seen)?;
        Ok(self.insert_unchecked(parent_key, item))
    }

    /// Append a top-level item.
    pub fn add_root(&mut self, item: &ItemDefinition) -> Result<NodeKey> {
        self.insert(None, item)
    }

    /// Append `item` as the last child of `parent`.
    pub fn add_child(&mut self, parent: &str, item: &ItemDefinition) -> Result<NodeKey> {
        self.insert(Some(parent), item)
    }

    fn validate<'a>(
        &self,
        parent: Option<&str>,
        item: &'a ItemDefinition,
        seen: &mut HashSet<&'a str>,
    ) -> Result<()> {
        let value = match item.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => return Err(TreeViewError::missing_value(parent)),
        };
        if self.by_value.contains_key(value) || !seen.insert(value) {
            return Err(TreeViewError::DuplicateValue(value.to_string()));
        }
        if let Some(group) = &item.group {
            for child in &group.items {
                self.validate(Some(value), child, seen)?;
            }
        }
        Ok(())
    }

    fn insert_unchecked(&mut self, parent: Option<NodeKey>, item: &ItemDefinition) -> NodeKey {
        let value = item.value.clone().unwrap_or_default();
        let key = self.nodes.insert(TreeNode {
            value: value.clone(),
            label: item.label.clone(),
            disabled: item.disabled,
            index: item.index,
            parent,
            group: item.group.as_ref().map(GroupOptions::from),
            children: Vec::new(),
        });
        self.by_value.insert(value, key);
        self.attach(parent, key);

        if let Some(group) = &item.group {
            for child in &group.items {
                self.insert_unchecked(Some(key), child);
            }
        }
        key
    }

    fn attach(&mut self, parent: Option<NodeKey>, key: NodeKey) {
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => {
                parent_node.group.get_or_insert_with(GroupOptions::default);
                parent_node.children.push(key);
            }
            None => self.roots.push(key),
        }
    }

    fn detach(&mut self, key: NodeKey) {
        let parent = self.nodes.get(key).and_then(|n| n.parent);
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(parent_node) => parent_node.children.retain(|&child| child != key),
            None => self.roots.retain(|&root| root != key),
        }
    }

    /// Remove a node and its whole subtree.
    ///
    /// Returns the removed values in pre-order, or `None` if the value is unknown.
    pub fn remove(&mut self, value: &str) -> Option<Vec<String>> {
        let key = self.key_of(value)?;
        self.detach(key);

        let mut removed = Vec::new();
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children.iter().rev().copied());
                self.by_value.remove(&node.value);
                removed.push(node.value);
            }
        }
        tracing::debug!(target: targets::MODEL, value, removed = removed.len(), "subtree removed");
        Some(removed)
    }

    /// Reparent `source` as the last child of `target`.
    ///
    /// Creates a default group on `target` if it has none.
    pub fn move_node(&mut self, source: &str, target: &str) -> Result<()> {
        let source_key = self
            .key_of(source)
            .ok_or_else(|| TreeViewError::invalid_move(source, target, "the dragged item does not exist"))?;
        let target_key = self
            .key_of(target)
            .ok_or_else(|| TreeViewError::invalid_move(source, target, "the drop target does not exist"))?;
        if source_key == target_key {
            return Err(TreeViewError::invalid_move(source, target, "an item cannot contain itself"));
        }
        if self.is_descendant_of(target, source) {
            return Err(TreeViewError::invalid_move(
                source,
                target,
                "an item cannot move into its own subtree",
            ));
        }

        self.detach(source_key);
        if let Some(node) = self.nodes.get_mut(source_key) {
            node.parent = Some(target_key);
        }
        self.attach(Some(target_key), source_key);
        tracing::debug!(target: targets::MODEL, source, destination = target, "item reparented");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the model has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with `value` exists.
    pub fn contains(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    /// Arena key of the node with `value`.
    pub fn key_of(&self, value: &str) -> Option<NodeKey> {
        self.by_value.get(value).copied()
    }

    /// Node by key.
    pub fn node(&self, key: NodeKey) -> Option<&TreeNode> {
        self.nodes.get(key)
    }

    /// Node by value.
    pub fn get(&self, value: &str) -> Option<&TreeNode> {
        self.key_of(value).and_then(|key| self.nodes.get(key))
    }

    /// Top-level node keys in declared order.
    pub fn root_keys(&self) -> &[NodeKey] {
        &self.roots
    }

    /// Top-level values in declared order.
    pub fn root_values(&self) -> Vec<&str> {
        self.values_of(&self.roots)
    }

    /// Child values of `value`, in declared order.
    pub fn children_of(&self, value: &str) -> Vec<&str> {
        self.get(value)
            .map(|node| self.values_of(&node.children))
            .unwrap_or_default()
    }

    fn values_of(&self, keys: &[NodeKey]) -> Vec<&str> {
        keys.iter()
            .filter_map(|&key| self.nodes.get(key))
            .map(TreeNode::value)
            .collect()
    }

    /// Parent value of `value`, or `None` for top-level or unknown nodes.
    pub fn parent_of(&self, value: &str) -> Option<&str> {
        let parent = self.get(value)?.parent?;
        self.nodes.get(parent).map(TreeNode::value)
    }

    /// 1-based depth of `value`.
    pub fn level_of(&self, value: &str) -> Option<usize> {
        let key = self.key_of(value)?;
        Some(self.level_of_key(key))
    }

    pub(crate) fn level_of_key(&self, key: NodeKey) -> usize {
        let mut level = 1;
        let mut current = self.nodes.get(key).and_then(|n| n.parent);
        while let Some(parent) = current {
            level += 1;
            current = self.nodes.get(parent).and_then(|n| n.parent);
        }
        level
    }

    /// Whether `value` declares a child group. False for unknown values.
    pub fn has_children(&self, value: &str) -> bool {
        self.get(value).is_some_and(TreeNode::has_children)
    }

    /// All descendant values of `value` in pre-order.
    ///
    /// Empty when the value is unknown or the node has no children.
    pub fn descendants(&self, value: &str) -> Vec<String> {
        let Some(node) = self.get(value) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut stack: Vec<NodeKey> = node.children.iter().rev().copied().collect();
        while let Some(key) = stack.pop() {
            if let Some(child) = self.nodes.get(key) {
                result.push(child.value.clone());
                stack.extend(child.children.iter().rev().copied());
            }
        }
        result
    }

    /// Ancestor values of `value`, nearest first.
    pub fn ancestors(&self, value: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut current = self.get(value).and_then(|n| n.parent);
        while let Some(key) = current {
            let Some(node) = self.nodes.get(key) else {
                break;
            };
            result.push(node.value.clone());
            current = node.parent;
        }
        result
    }

    /// Whether `value` lies strictly inside the subtree of `ancestor`.
    pub fn is_descendant_of(&self, value: &str, ancestor: &str) -> bool {
        self.ancestors(value).iter().any(|a| a == ancestor)
    }

    /// The first value in pre-order that has no explicit index.
    pub fn first_without_index(&self) -> Option<&str> {
        self.pre_order()
            .into_iter()
            .filter_map(|key| self.nodes.get(key))
            .find(|node| node.index.is_none())
            .map(TreeNode::value)
    }

    /// Every node key in pre-order (declared order, ignoring expansion).
    pub fn pre_order(&self) -> Vec<NodeKey> {
        let mut result = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeKey> = self.roots.iter().rev().copied().collect();
        while let Some(key) = stack.pop() {
            if let Some(node) = self.nodes.get(key) {
                result.push(key);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeModel {
        let definition = TreeDefinition::new()
            .with_item(
                ItemDefinition::new("a")
                    .with_child(ItemDefinition::new("a1").with_child(ItemDefinition::new("a1x")))
                    .with_child(ItemDefinition::new("a2")),
            )
            .with_item(ItemDefinition::new("b"));
        TreeModel::from_definition(&definition).unwrap()
    }

    #[test]
    fn test_structure_queries() {
        let model = sample();
        assert_eq!(model.len(), 5);
        assert_eq!(model.root_values(), vec!["a", "b"]);
        assert_eq!(model.children_of("a"), vec!["a1", "a2"]);
        assert_eq!(model.parent_of("a1x"), Some("a1"));
        assert_eq!(model.parent_of("a"), None);
        assert_eq!(model.level_of("a1x"), Some(3));
        assert_eq!(model.level_of("missing"), None);
    }

    #[test]
    fn test_descendants_pre_order() {
        let model = sample();
        assert_eq!(model.descendants("a"), vec!["a1", "a1x", "a2"]);
        assert!(model.descendants("b").is_empty());
        assert!(model.descendants("missing").is_empty());
    }

    #[test]
    fn test_has_children_follows_declared_group() {
        let definition = TreeDefinition::new()
            .with_item(ItemDefinition::new("empty").with_group(GroupDefinition::new()))
            .with_item(ItemDefinition::new("leaf"));
        let model = TreeModel::from_definition(&definition).unwrap();

        assert!(model.has_children("empty"));
        assert!(model.descendants("empty").is_empty());
        assert!(!model.has_children("leaf"));
        assert!(!model.has_children("missing"));
    }

    #[test]
    fn test_missing_value_rejected() {
        let definition = TreeDefinition::new().with_item(
            ItemDefinition::new("a").with_child(ItemDefinition {
                value: Some(String::new()),
                ..Default::default()
            }),
        );
        let err = TreeModel::from_definition(&definition).unwrap_err();
        assert!(matches!(err, TreeViewError::MissingValue { .. }));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let definition = TreeDefinition::new()
            .with_item(ItemDefinition::new("a").with_child(ItemDefinition::new("x")))
            .with_item(ItemDefinition::new("x"));
        let err = TreeModel::from_definition(&definition).unwrap_err();
        assert!(matches!(err, TreeViewError::DuplicateValue(ref v) if v == "x"));
    }

    #[test]
    fn test_insert_validates_before_mutating() {
        let mut model = sample();
        let bad = ItemDefinition::new("c").with_child(ItemDefinition::new("a2"));
        assert!(model.insert(Some("b"), &bad).is_err());
        assert!(!model.contains("c"));
        assert!(!model.has_children("b"));
    }

    #[test]
    fn test_insert_under_leaf_creates_group() {
        let mut model = sample();
        model.insert(Some("b"), &ItemDefinition::new("b1")).unwrap();
        assert!(model.has_children("b"));
        assert_eq!(model.level_of("b1"), Some(2));
    }

    #[test]
    fn test_remove_subtree() {
        let mut model = sample();
        let removed = model.remove("a1").unwrap();
        assert_eq!(removed, vec!["a1", "a1x"]);
        assert!(!model.contains("a1x"));
        assert_eq!(model.children_of("a"), vec!["a2"]);
        assert!(model.remove("a1").is_none());
    }

    #[test]
    fn test_move_node_appends_as_last_child() {
        let mut model = sample();
        model.move_node("b", "a1").unwrap();
        assert_eq!(model.children_of("a1"), vec!["a1x", "b"]);
        assert_eq!(model.root_values(), vec!["a"]);
        assert_eq!(model.level_of("b"), Some(3));
    }

    #[test]
    fn test_move_node_rejects_cycles() {
        let mut model = sample();
        assert!(matches!(
            model.move_node("a", "a"),
            Err(TreeViewError::InvalidMove { .. })
        ));
        assert!(matches!(
            model.move_node("a", "a1x"),
            Err(TreeViewError::InvalidMove { .. })
        ));
        assert_eq!(model.children_of("a"), vec!["a1", "a2"]);
    }

    #[test]
    fn test_first_without_index() {
        let definition = TreeDefinition::new()
            .with_item(ItemDefinition::new("a").with_index(0))
            .with_item(ItemDefinition::new("b"));
        let model = TreeModel::from_definition(&definition).unwrap();
        assert_eq!(model.first_without_index(), Some("b"));
    }
}

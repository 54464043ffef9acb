//! Per-node handle and derived state.

use crate::error::{Result, TreeViewError};
use crate::model::{GroupOptions, NodeKey};
use crate::widget::accessibility::AccessibleRole;
use crate::widget::attributes::{AttributeMap, names};

use super::item_checkbox::TreeViewItemCheckbox;
use super::item_content::TreeViewItemContent;
use super::item_group::TreeViewItemGroup;
use super::item_indicator::TreeViewItemIndicator;
use super::item_label::TreeViewItemLabel;
use super::root::TreeViewRoot;

/// State derived for one node from the root's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemState {
    /// The node's value.
    pub value: String,
    /// 1-based depth.
    pub level: usize,
    /// Member of the expanded set.
    pub expanded: bool,
    /// Selected under the current selection mode.
    pub selected: bool,
    /// Some descendants selected, but not the whole subtree.
    pub indeterminate: bool,
    /// Own flag or tree-wide flag.
    pub disabled: bool,
    /// Declares a child group.
    pub has_children: bool,
    /// Explicit index, if declared.
    pub index: Option<usize>,
}

impl ItemState {
    /// The item data attributes shared by the item and its sub-parts.
    pub fn data_attributes(&self) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.set(names::DATA_LEVEL, self.level.to_string());
        attrs.set_flag(names::DATA_EXPANDED, self.expanded);
        attrs.set_flag(names::DATA_SELECTED, self.selected);
        attrs.set_flag(names::DATA_INDETERMINATE, self.indeterminate);
        attrs.set_flag(names::DATA_DISABLED, self.disabled);
        attrs.set_flag(names::DATA_HAS_CHILDREN, self.has_children);
        attrs
    }
}

/// A handle to one node of a [`TreeViewRoot`].
///
/// The handle carries the node's identity and an explicit reference to its
/// owning root; every state query reads the root's current state, so a
/// handle never goes stale after expansion or selection changes.
///
/// # Example
///
/// ```
/// use arbor::model::{ItemDefinition, TreeDefinition};
/// use arbor::widget::tree_view::TreeViewRoot;
///
/// let tree = TreeViewRoot::builder(
///     TreeDefinition::new().with_item(ItemDefinition::new("src").with_child(ItemDefinition::new("lib.rs"))),
/// )
/// .build()
/// .unwrap();
///
/// let src = tree.item("src").unwrap();
/// assert!(src.has_children());
/// src.expand();
/// assert!(src.is_expanded());
/// assert_eq!(tree.item("lib.rs").unwrap().level(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TreeViewItem<'a> {
    root: &'a TreeViewRoot,
    key: NodeKey,
    value: String,
}

impl<'a> TreeViewItem<'a> {
    /// Resolve `value` within `root`.
    ///
    /// An empty value is a configuration error; a value that is not a node of
    /// this tree is a usage error.
    pub fn new(root: &'a TreeViewRoot, value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(TreeViewError::missing_value(None));
        }
        let key = root
            .with_model(|model| model.key_of(value))
            .ok_or_else(|| TreeViewError::item_not_found("TreeView.Item", value))?;
        Ok(Self {
            root,
            key,
            value: value.to_string(),
        })
    }

    /// The owning root.
    pub fn root(&self) -> &'a TreeViewRoot {
        self.root
    }

    /// Arena key of the node.
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// The node's value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The accessible label, falling back to the value.
    pub fn label_text(&self) -> String {
        self.root
            .with_model(|model| model.node(self.key).map(|n| n.label().to_string()))
            .unwrap_or_else(|| self.value.clone())
    }

    /// 1-based depth.
    pub fn level(&self) -> usize {
        self.root.level_of_key(self.key)
    }

    /// Whether the node is expanded.
    pub fn is_expanded(&self) -> bool {
        self.root.is_expanded(&self.value)
    }

    /// Whether the node is selected.
    pub fn is_selected(&self) -> bool {
        self.root.is_selected(&self.value)
    }

    /// Whether the node shows the mixed state.
    pub fn is_indeterminate(&self) -> bool {
        self.root.is_indeterminate(&self.value)
    }

    /// Whether the node ignores interaction.
    pub fn is_disabled(&self) -> bool {
        self.root.is_disabled()
            || self
                .root
                .with_model(|model| model.node(self.key).is_some_and(|n| n.is_disabled()))
    }

    /// Whether the node declares a child group.
    pub fn has_children(&self) -> bool {
        self.root
            .with_model(|model| model.node(self.key).is_some_and(|n| n.has_children()))
    }

    /// The child group's presence policy.
    pub fn group_options(&self) -> Option<GroupOptions> {
        self.root.with_model(|model| model.node(self.key).and_then(|n| n.group()))
    }

    /// A snapshot of the derived state.
    pub fn state(&self) -> ItemState {
        let (has_children, own_disabled, index) = self.root.with_model(|model| {
            model
                .node(self.key)
                .map(|n| (n.has_children(), n.is_disabled(), n.index()))
                .unwrap_or_default()
        });
        ItemState {
            value: self.value.clone(),
            level: self.level(),
            expanded: self.is_expanded(),
            selected: self.is_selected(),
            indeterminate: has_children && self.is_indeterminate(),
            disabled: own_disabled || self.root.is_disabled(),
            has_children,
            index,
        }
    }

    /// Expand the node.
    pub fn expand(&self) -> bool {
        self.root.toggle_expansion(&self.value, true)
    }

    /// Collapse the node.
    pub fn collapse(&self) -> bool {
        self.root.toggle_expansion(&self.value, false)
    }

    /// Toggle the node's selection.
    pub fn toggle_selection(&self) -> bool {
        self.root.toggle_selection(&self.value)
    }

    /// The focusable content region.
    pub fn content(&self) -> TreeViewItemContent<'a> {
        TreeViewItemContent::new(self.clone())
    }

    /// The selection-trigger label.
    pub fn label(&self) -> TreeViewItemLabel<'a> {
        TreeViewItemLabel::new(self.clone())
    }

    /// The checkbox selection trigger.
    pub fn checkbox(&self) -> TreeViewItemCheckbox<'a> {
        TreeViewItemCheckbox::new(self.clone())
    }

    /// The expand/collapse indicator.
    pub fn indicator(&self) -> TreeViewItemIndicator<'a> {
        TreeViewItemIndicator::new(self.clone())
    }

    /// The child group, if the node declares one.
    pub fn group(&self) -> Option<TreeViewItemGroup<'a>> {
        let options = self.group_options()?;
        Some(TreeViewItemGroup::new(self.clone(), options))
    }

    /// Attributes of the item element.
    pub fn attributes(&self) -> AttributeMap {
        let state = self.state();
        let mut attrs = state.data_attributes();
        attrs.set_role(AccessibleRole::TreeItem);
        attrs.set(names::ARIA_LEVEL, state.level.to_string());
        if state.has_children {
            attrs.set_bool(names::ARIA_EXPANDED, state.expanded);
        }
        if self.root.selection_mode().allows_selection() {
            attrs.set_bool(names::ARIA_SELECTED, state.selected);
        }
        if state.disabled {
            attrs.set(names::ARIA_DISABLED, "true");
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupDefinition, ItemDefinition, SelectionMode, TreeDefinition};

    fn tree(mode: SelectionMode) -> TreeViewRoot {
        let definition = TreeDefinition::new()
            .with_item(
                ItemDefinition::new("parent")
                    .with_child(ItemDefinition::new("child"))
                    .with_child(ItemDefinition::new("locked").disabled(true)),
            )
            .with_item(ItemDefinition::new("empty").with_group(GroupDefinition::new()));
        TreeViewRoot::builder(definition).selection_mode(mode).build().unwrap()
    }

    #[test]
    fn test_unknown_value_is_usage_error() {
        let root = tree(SelectionMode::None);
        let err = root.item("nope").unwrap_err();
        assert!(err.is_usage_error());
        assert!(err.to_string().contains("TreeView.Item"));
        assert!(root.item("").unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_item_attributes_none_mode() {
        let root = tree(SelectionMode::None);
        let parent = root.item("parent").unwrap().attributes();
        assert_eq!(parent.get(names::ROLE), Some("treeitem"));
        assert_eq!(parent.get(names::ARIA_LEVEL), Some("1"));
        assert_eq!(parent.get(names::ARIA_EXPANDED), Some("false"));
        assert!(!parent.has(names::ARIA_SELECTED));
        assert!(parent.has(names::DATA_HAS_CHILDREN));

        let child = root.item("child").unwrap().attributes();
        assert!(!child.has(names::ARIA_EXPANDED));
        assert!(!child.has(names::ARIA_DISABLED));
        assert_eq!(child.get(names::DATA_LEVEL), Some("2"));

        let locked = root.item("locked").unwrap().attributes();
        assert_eq!(locked.get(names::ARIA_DISABLED), Some("true"));
        assert!(locked.has(names::DATA_DISABLED));
    }

    #[test]
    fn test_item_attributes_track_state() {
        let root = tree(SelectionMode::Multiple);
        let parent = root.item("parent").unwrap();
        assert_eq!(parent.attributes().get(names::ARIA_SELECTED), Some("false"));

        parent.expand();
        root.toggle_selection("child");
        let attrs = parent.attributes();
        assert_eq!(attrs.get(names::ARIA_EXPANDED), Some("true"));
        assert!(attrs.has(names::DATA_EXPANDED));
        assert!(attrs.has(names::DATA_INDETERMINATE));
        assert!(!attrs.has(names::DATA_SELECTED));
    }

    #[test]
    fn test_empty_group_reports_children() {
        let root = tree(SelectionMode::Multiple);
        let empty = root.item("empty").unwrap();
        let state = empty.state();
        assert!(state.has_children);
        assert!(!state.indeterminate);
        assert_eq!(empty.attributes().get(names::ARIA_EXPANDED), Some("false"));
    }

    #[test]
    fn test_tree_disabled_propagates() {
        let definition = TreeDefinition::new().with_item(ItemDefinition::new("a"));
        let root = TreeViewRoot::builder(definition).disabled(true).build().unwrap();
        assert!(root.item("a").unwrap().is_disabled());
        assert!(root.flat_items()[0].disabled);
    }

    #[test]
    fn test_expand_collapse_hooks() {
        let root = tree(SelectionMode::None);
        let parent = root.item("parent").unwrap();
        assert!(parent.expand());
        assert!(!parent.expand());
        assert!(parent.collapse());
        assert!(!parent.is_expanded());
    }
}

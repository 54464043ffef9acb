//! The children container of a node.

use crate::model::GroupOptions;
use crate::widget::animation::{Presence, TransitionStatus};
use crate::widget::accessibility::AccessibleRole;
use crate::widget::attributes::{AttributeMap, names};

use super::item::TreeViewItem;

/// The child group of a [`TreeViewItem`].
///
/// Collapsing never removes children from the model. Whether a collapsed
/// group is still rendered is a presentation decision read from
/// [`is_present`](Self::is_present): a default group leaves once its exit
/// transition ends, a `keep_mounted` group stays with `hidden`, and a
/// `hidden_until_found` group stays with `hidden="until-found"`.
#[derive(Debug, Clone)]
pub struct TreeViewItemGroup<'a> {
    item: TreeViewItem<'a>,
    options: GroupOptions,
}

impl<'a> TreeViewItemGroup<'a> {
    pub(crate) fn new(item: TreeViewItem<'a>, options: GroupOptions) -> Self {
        Self { item, options }
    }

    /// The owning item.
    pub fn item(&self) -> &TreeViewItem<'a> {
        &self.item
    }

    /// Presence policy.
    pub fn options(&self) -> GroupOptions {
        self.options
    }

    /// Level of the group's children.
    pub fn level(&self) -> usize {
        self.item.level() + 1
    }

    /// Whether the owning item is expanded.
    pub fn is_expanded(&self) -> bool {
        self.item.is_expanded()
    }

    /// The group's presence lifecycle.
    pub fn presence(&self) -> Presence {
        self.item
            .root()
            .group_presence(self.item.value())
            .unwrap_or_else(|| {
                Presence::new(
                    self.is_expanded(),
                    self.options.keeps_children_present(),
                    self.item.root().exit_transition(),
                )
            })
    }

    /// Whether the group should be rendered at all.
    pub fn is_present(&self) -> bool {
        self.presence().is_present()
    }

    /// Transition phase for styling hooks.
    pub fn transition_status(&self) -> TransitionStatus {
        self.presence().transition_status()
    }

    /// Child item handles in declared order, regardless of expansion.
    pub fn children(&self) -> Vec<TreeViewItem<'a>> {
        let root = self.item.root();
        let values: Vec<String> = root.with_model(|model| {
            model
                .children_of(self.item.value())
                .into_iter()
                .map(str::to_string)
                .collect()
        });
        values
            .iter()
            .filter_map(|value| TreeViewItem::new(root, value).ok())
            .collect()
    }

    /// Attributes of the group element.
    pub fn attributes(&self) -> AttributeMap {
        let expanded = self.is_expanded();
        let mut attrs = AttributeMap::new();
        attrs.set_role(AccessibleRole::Group);
        attrs.set(names::DATA_LEVEL, self.level().to_string());
        attrs.set_flag(names::DATA_EXPANDED, expanded);

        if !expanded && self.options.keeps_children_present() {
            if self.options.hidden_until_found {
                attrs.set(names::HIDDEN, "until-found");
            } else {
                attrs.set_flag(names::HIDDEN, true);
            }
        }

        match self.transition_status() {
            TransitionStatus::Starting => {
                attrs.set_flag(names::DATA_STARTING_STYLE, true);
            }
            TransitionStatus::Ending => {
                attrs.set_flag(names::DATA_ENDING_STYLE, true);
            }
            TransitionStatus::Idle => {}
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::model::{GroupDefinition, ItemDefinition, TreeDefinition};
    use crate::widget::tree_view::TreeViewRoot;

    fn tree(group: GroupDefinition) -> TreeViewRoot {
        let definition = TreeDefinition::new().with_item(ItemDefinition::new("parent").with_group(group));
        TreeViewRoot::builder(definition)
            .exit_transition(Duration::from_millis(50))
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_group_unmounts_when_collapsed() {
        let root = tree(GroupDefinition::new().with_item(ItemDefinition::new("child")));
        let group = root.item("parent").unwrap().group().unwrap();
        assert!(!group.is_present());
        assert!(!group.attributes().has(names::HIDDEN));
        assert_eq!(group.attributes().get(names::DATA_LEVEL), Some("2"));
        assert_eq!(group.children().len(), 1);
    }

    #[test]
    fn test_keep_mounted_group_is_hidden() {
        let root = tree(GroupDefinition::new().keep_mounted(true).with_item(ItemDefinition::new("child")));
        let group = root.item("parent").unwrap().group().unwrap();
        assert!(group.is_present());
        assert_eq!(group.attributes().get(names::HIDDEN), Some(""));

        root.toggle_expansion("parent", true);
        let attrs = group.attributes();
        assert!(!attrs.has(names::HIDDEN));
        assert!(attrs.has(names::DATA_EXPANDED));
        assert!(attrs.has(names::DATA_STARTING_STYLE));

        root.advance_transitions(Instant::now());
        assert!(!group.attributes().has(names::DATA_STARTING_STYLE));
    }

    #[test]
    fn test_hidden_until_found_group() {
        let root = tree(
            GroupDefinition::new()
                .hidden_until_found(true)
                .with_item(ItemDefinition::new("child")),
        );
        let group = root.item("parent").unwrap().group().unwrap();
        assert!(group.is_present());
        assert_eq!(group.attributes().get(names::HIDDEN), Some("until-found"));

        assert!(root.expand_to("child"));
        assert!(!group.attributes().has(names::HIDDEN));
    }

    #[test]
    fn test_collapse_runs_exit_transition() {
        let root = tree(GroupDefinition::new().with_item(ItemDefinition::new("child")));
        root.toggle_expansion("parent", true);
        root.advance_transitions(Instant::now());

        root.toggle_expansion("parent", false);
        let group = root.item("parent").unwrap().group().unwrap();
        assert!(group.is_present());
        assert!(group.attributes().has(names::DATA_ENDING_STYLE));

        root.advance_transitions(Instant::now() + Duration::from_millis(100));
        assert!(!group.is_present());
    }

    #[test]
    fn test_leaf_has_no_group() {
        let definition = TreeDefinition::new().with_item(ItemDefinition::new("leaf"));
        let root = TreeViewRoot::builder(definition).build().unwrap();
        assert!(root.item("leaf").unwrap().group().is_none());
    }
}

//! The checkbox selection trigger of a node.

use crate::widget::accessibility::AccessibleRole;
use crate::widget::attributes::{AttributeMap, names};
use crate::widget::events::ClickEvent;

use super::item::TreeViewItem;

/// Tri-state value of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckedState {
    /// Not selected, no selected descendants.
    Unchecked,
    /// Selected.
    Checked,
    /// Some descendants selected, the subtree is not.
    Mixed,
}

impl CheckedState {
    /// The `aria-checked` value.
    pub fn as_aria(self) -> &'static str {
        match self {
            Self::Unchecked => "false",
            Self::Checked => "true",
            Self::Mixed => "mixed",
        }
    }
}

/// A checkbox that toggles selection, with `role="checkbox"` semantics.
#[derive(Debug, Clone)]
pub struct TreeViewItemCheckbox<'a> {
    item: TreeViewItem<'a>,
}

impl<'a> TreeViewItemCheckbox<'a> {
    pub(crate) fn new(item: TreeViewItem<'a>) -> Self {
        Self { item }
    }

    /// The owning item.
    pub fn item(&self) -> &TreeViewItem<'a> {
        &self.item
    }

    /// The checkbox state. Mixed wins over checked.
    pub fn checked_state(&self) -> CheckedState {
        let state = self.item.state();
        if state.indeterminate {
            CheckedState::Mixed
        } else if state.selected {
            CheckedState::Checked
        } else {
            CheckedState::Unchecked
        }
    }

    /// Handle a click. Returns `true` if a selection change was committed.
    pub fn handle_click(&self, event: &mut ClickEvent) -> bool {
        let root = self.item.root();
        if self.item.is_disabled() || !root.selection_mode().allows_selection() {
            return false;
        }
        root.handle_selection(self.item.value(), event.reason)
    }

    /// Attributes of the checkbox element.
    ///
    /// `data-checked`/`data-unchecked` mirror `selected` only; the mixed
    /// state is reported through `aria-checked` and `data-indeterminate`.
    pub fn attributes(&self) -> AttributeMap {
        let state = self.item.state();
        let mut attrs = AttributeMap::new();
        attrs.set_role(AccessibleRole::CheckBox);
        attrs.set(names::ARIA_CHECKED, self.checked_state().as_aria());
        if state.disabled {
            attrs.set(names::ARIA_DISABLED, "true");
        }
        attrs.set(names::DATA_LEVEL, state.level.to_string());
        attrs.set_flag(names::DATA_CHECKED, state.selected);
        attrs.set_flag(names::DATA_UNCHECKED, !state.selected);
        attrs.set_flag(names::DATA_INDETERMINATE, state.indeterminate);
        attrs.set_flag(names::DATA_DISABLED, state.disabled);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDefinition, SelectionMode, TreeDefinition};
    use crate::widget::tree_view::TreeViewRoot;

    fn tree() -> TreeViewRoot {
        let definition = TreeDefinition::new().with_item(
            ItemDefinition::new("parent")
                .with_child(ItemDefinition::new("c1"))
                .with_child(ItemDefinition::new("c2")),
        );
        TreeViewRoot::builder(definition)
            .selection_mode(SelectionMode::Multiple)
            .build()
            .unwrap()
    }

    #[test]
    fn test_checkbox_tri_state() {
        let root = tree();
        let parent = root.item("parent").unwrap().checkbox();
        assert_eq!(parent.checked_state(), CheckedState::Unchecked);
        assert!(parent.attributes().has(names::DATA_UNCHECKED));

        root.item("c1").unwrap().checkbox().handle_click(&mut ClickEvent::pointer());
        let attrs = parent.attributes();
        assert_eq!(attrs.get(names::ARIA_CHECKED), Some("mixed"));
        assert!(attrs.has(names::DATA_UNCHECKED));
        assert!(attrs.has(names::DATA_INDETERMINATE));

        parent.handle_click(&mut ClickEvent::pointer());
        let attrs = parent.attributes();
        assert_eq!(attrs.get(names::ARIA_CHECKED), Some("true"));
        assert!(attrs.has(names::DATA_CHECKED));
        assert!(!attrs.has(names::DATA_INDETERMINATE));
    }

    #[test]
    fn test_disabled_checkbox_ignores_clicks() {
        let definition = TreeDefinition::new().with_item(ItemDefinition::new("a"));
        let root = TreeViewRoot::builder(definition)
            .selection_mode(SelectionMode::Single)
            .disabled(true)
            .build()
            .unwrap();
        let checkbox = root.item("a").unwrap().checkbox();
        assert!(!checkbox.handle_click(&mut ClickEvent::pointer()));
        assert_eq!(checkbox.attributes().get(names::ARIA_DISABLED), Some("true"));
        assert_eq!(checkbox.checked_state(), CheckedState::Unchecked);
    }
}

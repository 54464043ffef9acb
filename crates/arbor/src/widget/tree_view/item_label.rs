//! The selection-trigger label of a node.

use crate::widget::attributes::AttributeMap;
use crate::widget::events::ClickEvent;

use super::item::TreeViewItem;

/// Clicking the label toggles selection. It never changes expansion.
#[derive(Debug, Clone)]
pub struct TreeViewItemLabel<'a> {
    item: TreeViewItem<'a>,
}

impl<'a> TreeViewItemLabel<'a> {
    pub(crate) fn new(item: TreeViewItem<'a>) -> Self {
        Self { item }
    }

    /// The owning item.
    pub fn item(&self) -> &TreeViewItem<'a> {
        &self.item
    }

    /// The label text.
    pub fn text(&self) -> String {
        self.item.label_text()
    }

    /// Handle a click. Returns `true` if a selection change was committed.
    pub fn handle_click(&self, event: &mut ClickEvent) -> bool {
        let root = self.item.root();
        if self.item.is_disabled() || !root.selection_mode().allows_selection() {
            return false;
        }
        root.handle_selection(self.item.value(), event.reason)
    }

    /// Attributes of the label element.
    pub fn attributes(&self) -> AttributeMap {
        self.item.state().data_attributes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDefinition, SelectedValue, SelectionMode, TreeDefinition};
    use crate::widget::tree_view::TreeViewRoot;

    #[test]
    fn test_label_click_selects_and_uses_label_text() {
        let definition = TreeDefinition::new()
            .with_item(ItemDefinition::new("readme").with_label("README.md"))
            .with_item(ItemDefinition::new("locked").disabled(true));
        let root = TreeViewRoot::builder(definition)
            .selection_mode(SelectionMode::Multiple)
            .build()
            .unwrap();

        let label = root.item("readme").unwrap().label();
        assert_eq!(label.text(), "README.md");
        assert!(label.handle_click(&mut ClickEvent::pointer()));
        assert_eq!(root.selected(), SelectedValue::multiple(["readme"]));
        assert!(label.attributes().has("data-selected"));

        assert!(!root.item("locked").unwrap().label().handle_click(&mut ClickEvent::pointer()));
        assert_eq!(root.selected(), SelectedValue::multiple(["readme"]));
    }

    #[test]
    fn test_label_click_in_none_mode() {
        let definition = TreeDefinition::new().with_item(ItemDefinition::new("a"));
        let root = TreeViewRoot::builder(definition).build().unwrap();
        assert!(!root.item("a").unwrap().label().handle_click(&mut ClickEvent::pointer()));
    }
}

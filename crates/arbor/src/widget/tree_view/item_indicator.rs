//! The expand/collapse indicator of a node.

use crate::widget::attributes::{AttributeMap, names};
use crate::widget::events::ClickEvent;

use super::item::TreeViewItem;

/// Clicking the indicator toggles expansion. It never changes selection.
///
/// The indicator is decorative for assistive technology (`aria-hidden`);
/// the item itself carries `aria-expanded`.
#[derive(Debug, Clone)]
pub struct TreeViewItemIndicator<'a> {
    item: TreeViewItem<'a>,
    keep_mounted: bool,
}

impl<'a> TreeViewItemIndicator<'a> {
    pub(crate) fn new(item: TreeViewItem<'a>) -> Self {
        Self {
            item,
            keep_mounted: false,
        }
    }

    /// Keep the indicator rendered for nodes without children.
    pub fn keep_mounted(mut self, keep_mounted: bool) -> Self {
        self.keep_mounted = keep_mounted;
        self
    }

    /// The owning item.
    pub fn item(&self) -> &TreeViewItem<'a> {
        &self.item
    }

    /// Whether the indicator should be rendered.
    pub fn is_rendered(&self) -> bool {
        self.keep_mounted || self.item.has_children()
    }

    /// Handle a click. Returns `true` if an expansion change was committed.
    pub fn handle_click(&self, event: &mut ClickEvent) -> bool {
        if self.item.is_disabled() || !self.item.has_children() {
            return false;
        }
        let next = !self.item.is_expanded();
        self.item
            .root()
            .handle_expanded_change(self.item.value(), next, event.reason)
    }

    /// Attributes of the indicator element.
    pub fn attributes(&self) -> AttributeMap {
        let mut attrs = self.item.state().data_attributes();
        attrs.set(names::ARIA_HIDDEN, "true");
        attrs
    }
}

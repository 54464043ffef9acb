//! The focusable content region of a node, host of the keyboard protocol.

use arbor_core::InteractionReason;
use arbor_core::logging::targets;

use crate::model::FlatTreeItem;
use crate::widget::attributes::{AttributeMap, names};
use crate::widget::events::{ClickEvent, Key, KeyPressEvent};

use super::item::TreeViewItem;

/// The single focusable element of a node.
///
/// Disabled nodes keep `tabindex="-1"` so screen readers can still reach
/// them, but their content ignores key presses.
#[derive(Debug, Clone)]
pub struct TreeViewItemContent<'a> {
    item: TreeViewItem<'a>,
}

impl<'a> TreeViewItemContent<'a> {
    pub(crate) fn new(item: TreeViewItem<'a>) -> Self {
        Self { item }
    }

    /// The owning item.
    pub fn item(&self) -> &TreeViewItem<'a> {
        &self.item
    }

    /// Handle a key press while this content has focus.
    ///
    /// Handled keys are accepted on the event (default prevented and
    /// propagation stopped) and the method returns `true`.
    pub fn handle_key_press(&self, event: &mut KeyPressEvent) -> bool {
        if self.item.is_disabled() {
            return false;
        }

        let root = self.item.root();
        let value = self.item.value();
        let rows = root.flat_items();
        let position = rows.iter().position(|row| row.value == value);
        let loop_focus = root.config().loop_focus;

        let handled = if event.is_asterisk() {
            root.expand_siblings(value, InteractionReason::Keyboard);
            true
        } else {
            match event.key {
                Key::ArrowDown => {
                    let target = match position {
                        Some(i) if i + 1 < rows.len() => Some(i + 1),
                        Some(_) if loop_focus => Some(0),
                        _ => None,
                    };
                    self.focus_row(&rows, target);
                    true
                }
                Key::ArrowUp => {
                    let target = match position {
                        Some(0) if loop_focus => rows.len().checked_sub(1),
                        Some(i) if i > 0 => Some(i - 1),
                        _ => None,
                    };
                    self.focus_row(&rows, target);
                    true
                }
                Key::Home => {
                    self.focus_row(&rows, (!rows.is_empty()).then_some(0));
                    true
                }
                Key::End => {
                    self.focus_row(&rows, rows.len().checked_sub(1));
                    true
                }
                Key::ArrowRight => self.handle_arrow_right(&rows, position),
                Key::ArrowLeft => self.handle_arrow_left(&rows, position),
                Key::Enter | Key::Space => {
                    if root.selection_mode().allows_selection() {
                        root.handle_selection(value, InteractionReason::Keyboard);
                    }
                    true
                }
                _ => false,
            }
        };

        if handled {
            event.base.accept();
            tracing::trace!(target: targets::KEYBOARD, value, key = ?event.key, "key handled");
        }
        handled
    }

    fn handle_arrow_right(&self, rows: &[FlatTreeItem], position: Option<usize>) -> bool {
        if !self.item.has_children() {
            return false;
        }
        let root = self.item.root();
        let value = self.item.value();
        if !self.item.is_expanded() {
            root.handle_expanded_change(value, true, InteractionReason::Keyboard);
            return true;
        }

        let first_child = position
            .and_then(|i| rows.get(i + 1))
            .filter(|next| next.parent_value.as_deref() == Some(value));
        match first_child {
            Some(child) => {
                root.set_active_value(Some(&child.value), InteractionReason::Keyboard);
                true
            }
            None => false,
        }
    }

    fn handle_arrow_left(&self, rows: &[FlatTreeItem], position: Option<usize>) -> bool {
        let root = self.item.root();
        let value = self.item.value();
        if self.item.has_children() && self.item.is_expanded() {
            root.handle_expanded_change(value, false, InteractionReason::Keyboard);
            return true;
        }

        let parent = position
            .and_then(|i| rows.get(i))
            .and_then(|row| row.parent_value.clone())
            .or_else(|| root.with_model(|model| model.parent_of(value).map(str::to_string)));
        match parent {
            Some(parent) => {
                root.set_active_value(Some(&parent), InteractionReason::Keyboard);
                true
            }
            None => false,
        }
    }

    fn focus_row(&self, rows: &[FlatTreeItem], target: Option<usize>) {
        if let Some(row) = target.and_then(|i| rows.get(i)) {
            self.item
                .root()
                .set_active_value(Some(&row.value), InteractionReason::Keyboard);
        }
    }

    /// Handle a click on the content: highlight the node.
    pub fn handle_click(&self, event: &mut ClickEvent) {
        self.item
            .root()
            .set_active_value(Some(self.item.value()), event.reason);
    }

    /// The element id.
    pub fn id(&self) -> String {
        self.item
            .root()
            .content_id(self.item.value())
            .unwrap_or_default()
    }

    /// Tab index: `0` when enabled, `-1` when disabled.
    pub fn tab_index(&self) -> i32 {
        if self.item.is_disabled() { -1 } else { 0 }
    }

    /// Attributes of the content element.
    pub fn attributes(&self) -> AttributeMap {
        let state = self.item.state();
        let mut attrs = state.data_attributes();
        attrs.set(names::ID, self.id());
        attrs.set(names::TAB_INDEX, self.tab_index().to_string());
        attrs.set(names::DATA_VALUE, state.value.as_str());
        if self.item.root().is_virtualized()
            && let Some(index) = state.index
        {
            attrs.set(names::DATA_INDEX, index.to_string());
        }
        attrs
    }
}

//! Virtualization adapter.
//!
//! A virtualized tree renders only the rows inside the viewport. The
//! windowing itself belongs to a [`Virtualizer`]; the tree only has to keep
//! the virtualizer's row count equal to the flat list and scroll the
//! keyboard-highlighted row into view.

use std::ops::Range;
use std::sync::Arc;

use parking_lot::Mutex;

use arbor_core::logging::targets;
use arbor_core::{ConnectionId, InteractionReason};

use super::root::TreeViewRoot;

/// Default estimated row height.
pub const DEFAULT_ESTIMATE_SIZE: f32 = 36.0;
/// Default number of extra rows rendered on each side of the viewport.
pub const DEFAULT_OVERSCAN: usize = 10;

/// Where a scrolled-to row lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Scroll the minimum distance that makes the row fully visible.
    #[default]
    Auto,
    /// Row at the top edge.
    Start,
    /// Row centered.
    Center,
    /// Row at the bottom edge.
    End,
}

/// A windowing engine driven by row positions in the flat list.
pub trait Virtualizer: Send {
    /// Set the number of rows.
    fn set_count(&mut self, count: usize);

    /// Scroll so that row `index` is visible.
    fn scroll_to_index(&mut self, index: usize);

    /// Rows that should be rendered, overscan included.
    fn visible_range(&self) -> Range<usize>;
}

/// A virtualizer where every row has the same estimated height.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSizeVirtualizer {
    count: usize,
    estimate_size: f32,
    overscan: usize,
    viewport: f32,
    scroll_offset: f32,
}

impl FixedSizeVirtualizer {
    /// Create a virtualizer for `count` rows in a viewport of the given height.
    pub fn new(count: usize, viewport: f32) -> Self {
        Self {
            count,
            estimate_size: DEFAULT_ESTIMATE_SIZE,
            overscan: DEFAULT_OVERSCAN,
            viewport: viewport.max(0.0),
            scroll_offset: 0.0,
        }
    }

    /// Set the estimated row height.
    pub fn with_estimate_size(mut self, size: f32) -> Self {
        self.estimate_size = size.max(1.0);
        self
    }

    /// Set the overscan.
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Estimated row height.
    pub fn estimate_size(&self) -> f32 {
        self.estimate_size
    }

    /// Overscan row count.
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Viewport height.
    pub fn viewport(&self) -> f32 {
        self.viewport
    }

    /// Resize the viewport.
    pub fn set_viewport(&mut self, viewport: f32) {
        self.viewport = viewport.max(0.0);
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll to an absolute offset.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll());
    }

    /// Height of all rows.
    pub fn total_size(&self) -> f32 {
        self.count as f32 * self.estimate_size
    }

    /// Top offset of row `index`.
    pub fn offset_of(&self, index: usize) -> f32 {
        index as f32 * self.estimate_size
    }

    fn max_scroll(&self) -> f32 {
        (self.total_size() - self.viewport).max(0.0)
    }

    /// Scroll row `index` into view with the given alignment.
    pub fn scroll_to_index_aligned(&mut self, index: usize, align: ScrollAlign) {
        if self.count == 0 {
            return;
        }
        let index = index.min(self.count - 1);
        let top = self.offset_of(index);
        let bottom = top + self.estimate_size;

        let target = match align {
            ScrollAlign::Start => top,
            ScrollAlign::End => bottom - self.viewport,
            ScrollAlign::Center => top - (self.viewport - self.estimate_size) / 2.0,
            ScrollAlign::Auto => {
                if top < self.scroll_offset {
                    top
                } else if bottom > self.scroll_offset + self.viewport {
                    bottom - self.viewport
                } else {
                    self.scroll_offset
                }
            }
        };
        self.scroll_offset = target.clamp(0.0, self.max_scroll());
    }
}

impl Virtualizer for FixedSizeVirtualizer {
    fn set_count(&mut self, count: usize) {
        self.count = count;
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    fn scroll_to_index(&mut self, index: usize) {
        self.scroll_to_index_aligned(index, ScrollAlign::Auto);
    }

    fn visible_range(&self) -> Range<usize> {
        if self.count == 0 {
            return 0..0;
        }
        let first = (self.scroll_offset / self.estimate_size).floor() as usize;
        let last = ((self.scroll_offset + self.viewport) / self.estimate_size).ceil() as usize;
        let start = first.saturating_sub(self.overscan).min(self.count);
        let end = last.saturating_add(self.overscan).min(self.count);
        start..end
    }
}

/// Connections made by [`bind_virtualizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualizerBinding {
    highlight: ConnectionId,
    count: ConnectionId,
}

impl VirtualizerBinding {
    /// Disconnect the virtualizer from `root`.
    pub fn unbind(self, root: &TreeViewRoot) {
        root.item_highlighted.disconnect(self.highlight);
        root.flat_items_changed.disconnect(self.count);
    }
}

/// Drive `virtualizer` from `root`.
///
/// The row count follows every flat-list rebuild, and keyboard highlights
/// scroll the highlighted row into view. Pointer highlights do not scroll:
/// the row is already under the pointer.
pub fn bind_virtualizer<V>(root: &TreeViewRoot, virtualizer: Arc<Mutex<V>>) -> VirtualizerBinding
where
    V: Virtualizer + 'static,
{
    let rows = root.with_flat_items(<[_]>::len);
    virtualizer.lock().set_count(rows);

    let scroller = virtualizer.clone();
    let highlight = root.item_highlighted.connect(move |(value, details)| {
        if details.reason != InteractionReason::Keyboard {
            return;
        }
        if let Some(index) = details.index {
            tracing::trace!(target: targets::VIRTUALIZATION, ?value, index, "scroll to index");
            scroller.lock().scroll_to_index(index);
        }
    });

    let count = root.flat_items_changed.connect(move |rows| {
        virtualizer.lock().set_count(*rows);
    });

    VirtualizerBinding { highlight, count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDefinition, TreeDefinition};
    use crate::widget::events::{Key, KeyPressEvent};

    #[test]
    fn test_visible_range_with_overscan() {
        let mut v = FixedSizeVirtualizer::new(100, 360.0).with_overscan(2);
        assert_eq!(v.visible_range(), 0..12);

        v.set_scroll_offset(360.0);
        assert_eq!(v.visible_range(), 8..22);

        v.set_count(0);
        assert_eq!(v.visible_range(), 0..0);
    }

    #[test]
    fn test_scroll_to_index_auto() {
        let mut v = FixedSizeVirtualizer::new(100, 360.0);
        v.scroll_to_index(5);
        assert_eq!(v.scroll_offset(), 0.0);

        v.scroll_to_index(20);
        assert_eq!(v.scroll_offset(), 21.0 * 36.0 - 360.0);

        v.scroll_to_index(2);
        assert_eq!(v.scroll_offset(), 72.0);

        v.scroll_to_index(1000);
        assert_eq!(v.scroll_offset(), v.total_size() - 360.0);
    }

    #[test]
    fn test_scroll_alignments() {
        let mut v = FixedSizeVirtualizer::new(100, 360.0);
        v.scroll_to_index_aligned(50, ScrollAlign::Start);
        assert_eq!(v.scroll_offset(), 1800.0);
        v.scroll_to_index_aligned(50, ScrollAlign::Center);
        assert_eq!(v.scroll_offset(), 1800.0 - 162.0);
        v.scroll_to_index_aligned(0, ScrollAlign::End);
        assert_eq!(v.scroll_offset(), 0.0);
    }

    #[test]
    fn test_binding_tracks_count_and_keyboard_highlight() {
        let items: Vec<ItemDefinition> = (0..50)
            .map(|i| ItemDefinition::new(format!("row-{i}")).with_index(i))
            .collect();
        let mut group_owner = ItemDefinition::new("folder").with_index(50);
        for i in 0..10 {
            group_owner = group_owner.with_child(ItemDefinition::new(format!("child-{i}")).with_index(51 + i));
        }
        let definition = TreeDefinition::new().with_items(items).with_item(group_owner);
        let root = TreeViewRoot::builder(definition).virtualized(true).build().unwrap();

        let virtualizer = Arc::new(Mutex::new(FixedSizeVirtualizer::new(0, 360.0)));
        let binding = bind_virtualizer(&root, virtualizer.clone());
        assert_eq!(virtualizer.lock().count(), 51);

        root.toggle_expansion("folder", true);
        assert_eq!(virtualizer.lock().count(), 61);

        let mut event = KeyPressEvent::key(Key::End);
        root.item("row-0").unwrap().content().handle_key_press(&mut event);
        assert_eq!(root.active_value().as_deref(), Some("child-9"));
        assert_eq!(virtualizer.lock().scroll_offset(), 61.0 * 36.0 - 360.0);

        // Pointer highlights leave the scroll position alone.
        root.set_active_value(Some("row-0"), InteractionReason::Pointer);
        assert_eq!(virtualizer.lock().scroll_offset(), 61.0 * 36.0 - 360.0);

        binding.unbind(&root);
        root.toggle_expansion("folder", false);
        assert_eq!(virtualizer.lock().count(), 61);
    }
}

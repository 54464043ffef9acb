//! The tree view component family.
//!
//! A tree view is a [`TreeViewRoot`] that owns all state, plus per-node parts
//! borrowed from it:
//!
//! - [`TreeViewItem`]: a node handle with derived state
//! - [`TreeViewItemContent`]: the focusable row; keyboard navigation
//! - [`TreeViewItemLabel`] / [`TreeViewItemCheckbox`]: selection triggers
//! - [`TreeViewItemIndicator`]: the expand/collapse affordance
//! - [`TreeViewItemGroup`]: the container of a node's children
//!
//! Optional adapters sit on top of the root: [`TreeDragDrop`] reparents
//! nodes, [`bind_virtualizer`] drives a [`Virtualizer`] from the flat list.
//!
//! # Example
//!
//! ```
//! use arbor::model::{ItemDefinition, TreeDefinition};
//! use arbor::widget::events::{Key, KeyPressEvent};
//! use arbor::widget::tree_view::{TreeViewConfig, TreeViewRoot};
//!
//! let definition = TreeDefinition::new()
//!     .with_item(ItemDefinition::new("docs").with_child(ItemDefinition::new("intro.md")))
//!     .with_item(ItemDefinition::new("README.md"));
//! let tree = TreeViewRoot::new(&definition, TreeViewConfig::new()).unwrap();
//!
//! let docs = tree.item("docs").unwrap();
//! let mut right = KeyPressEvent::key(Key::ArrowRight);
//! assert!(docs.content().handle_key_press(&mut right));
//! assert!(docs.is_expanded());
//!
//! let mut down = KeyPressEvent::key(Key::ArrowDown);
//! docs.content().handle_key_press(&mut down);
//! assert_eq!(tree.active_value().as_deref(), Some("intro.md"));
//! ```

mod config;
mod drag_drop;
mod item;
mod item_checkbox;
mod item_content;
mod item_group;
mod item_indicator;
mod item_label;
mod root;
mod virtualization;

pub use config::{TextDirection, TreeViewConfig};
pub use drag_drop::{DragPayload, DropRejection, TreeDragDrop};
pub use item::{ItemState, TreeViewItem};
pub use item_checkbox::{CheckedState, TreeViewItemCheckbox};
pub use item_content::TreeViewItemContent;
pub use item_group::TreeViewItemGroup;
pub use item_indicator::TreeViewItemIndicator;
pub use item_label::TreeViewItemLabel;
pub use root::{TreeViewBuilder, TreeViewRoot};
pub use virtualization::{
    DEFAULT_ESTIMATE_SIZE, DEFAULT_OVERSCAN, FixedSizeVirtualizer, ScrollAlign, Virtualizer,
    VirtualizerBinding, bind_virtualizer,
};

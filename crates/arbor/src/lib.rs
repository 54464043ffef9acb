//! Arbor - a headless, accessible tree view.
//!
//! Arbor renders nothing. It owns the state of a hierarchical list
//! (expansion, selection, focus), answers keyboard and pointer input, and
//! reports the WAI-ARIA attributes a host renderer applies.
//!
//! # Example
//!
//! ```
//! use arbor::prelude::*;
//!
//! let definition = TreeDefinition::new().with_item(
//!     ItemDefinition::new("animals")
//!         .with_child(ItemDefinition::new("cat"))
//!         .with_child(ItemDefinition::new("dog")),
//! );
//! let tree = TreeViewRoot::builder(definition)
//!     .selection_mode(SelectionMode::Multiple)
//!     .build()
//!     .unwrap();
//!
//! tree.toggle_selection("cat");
//! assert!(tree.is_indeterminate("animals"));
//! assert_eq!(
//!     tree.item("animals").unwrap().checkbox().attributes().get("aria-checked"),
//!     Some("mixed")
//! );
//! ```

pub use arbor_core;

pub mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use error::{Result, TreeViewError};

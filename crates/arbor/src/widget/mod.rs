//! Headless widget parts for Arbor.
//!
//! Nothing here draws. Each part exposes its state, handles the input events
//! a host forwards to it, and reports the attributes a renderer should put
//! on its element:
//!
//! - [`tree_view`]: the tree view root, items and their parts
//! - [`events`]: key press and click events routed to the parts
//! - [`attributes`]: rendered `role`, `aria-*` and `data-*` attributes
//! - [`animation`]: group presence during expand/collapse transitions
//! - [`accessibility`]: ARIA roles and AccessKit integration

pub mod accessibility;
pub mod animation;
pub mod attributes;
pub mod events;
pub mod tree_view;

pub use accessibility::AccessibleRole;
pub use animation::{Presence, PresenceState, TransitionStatus};
pub use attributes::AttributeMap;
pub use events::{ClickEvent, Key, KeyPressEvent, KeyboardModifiers};

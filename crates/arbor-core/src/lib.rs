//! Core primitives for Arbor.
//!
//! This crate provides the framework-neutral building blocks used by the
//! `arbor` tree view:
//!
//! - [`Signal`] - type-safe change callbacks with connect/disconnect
//! - [`Property`] and [`Controllable`] - reactive values, optionally owned by the host
//! - [`ChangeEventDetails`] - cancelable details passed to change callbacks
//! - [`logging`] - tracing targets and tree-debug formatting options
//!
//! # Example
//!
//! ```
//! use arbor_core::{ChangeEventDetails, InteractionReason, Signal};
//!
//! let changed = Signal::<(Vec<String>, ChangeEventDetails)>::new();
//! changed.connect(|(values, details)| {
//!     if values.is_empty() {
//!         details.cancel();
//!     }
//! });
//!
//! let details = ChangeEventDetails::new(InteractionReason::None);
//! changed.emit((Vec::new(), details.clone()));
//! assert!(details.is_canceled());
//! ```

pub mod error;
pub mod event_details;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{CoreError, CoreResult};
pub use event_details::{ChangeEventDetails, HighlightEventDetails, InteractionReason};
pub use logging::{TreeFormatOptions, TreeStyle};
pub use property::{Controllable, Property};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

//! Presence transitions for collapsible content.
//!
//! Item groups do not vanish the instant their node collapses: an exit
//! transition keeps them present until a closing animation can finish.
//! [`Presence`] tracks that lifecycle. It is advisory only; tree logic
//! (traversal, selection) never waits on it.

mod transition;

pub use transition::{Presence, PresenceState, TransitionStatus};

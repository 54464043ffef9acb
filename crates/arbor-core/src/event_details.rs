//! Details objects passed to change callbacks.
//!
//! Every state change the tree view offers to its host carries a details
//! object. [`ChangeEventDetails`] can be canceled by any connected slot;
//! the emitter checks [`ChangeEventDetails::is_canceled`] after emission and
//! discards the change when it is set.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// What kind of interaction caused a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionReason {
    /// Triggered from the keyboard.
    Keyboard,
    /// Triggered by a pointer (mouse, pen, touch).
    Pointer,
    /// Programmatic change with no user interaction.
    #[default]
    None,
}

impl InteractionReason {
    /// The lowercase name used in attribute values and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyboard => "keyboard",
            Self::Pointer => "pointer",
            Self::None => "none",
        }
    }
}

impl fmt::Display for InteractionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cancelable details for a pending state change.
///
/// Clones share the cancel flag, so a slot that receives a clone can veto
/// the change seen by the emitter.
#[derive(Clone)]
pub struct ChangeEventDetails {
    reason: InteractionReason,
    canceled: Arc<AtomicBool>,
}

impl ChangeEventDetails {
    /// Create details for a change caused by `reason`.
    pub fn new(reason: InteractionReason) -> Self {
        Self {
            reason,
            canceled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The interaction that caused the change.
    pub fn reason(&self) -> InteractionReason {
        self.reason
    }

    /// Veto the change. The emitter will not commit it.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    /// Whether any receiver canceled the change.
    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for ChangeEventDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEventDetails")
            .field("reason", &self.reason)
            .field("canceled", &self.is_canceled())
            .finish()
    }
}

/// Details for a highlight (focus movement) notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightEventDetails {
    /// The interaction that moved the highlight.
    pub reason: InteractionReason,
    /// Position of the highlighted node in the flat traversal list, if visible.
    pub index: Option<usize>,
}

impl HighlightEventDetails {
    /// Create highlight details.
    pub fn new(reason: InteractionReason, index: Option<usize>) -> Self {
        Self { reason, index }
    }
}

static_assertions::assert_impl_all!(ChangeEventDetails: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let details = ChangeEventDetails::new(InteractionReason::Pointer);
        let handed_out = details.clone();

        assert!(!details.is_canceled());
        handed_out.cancel();
        assert!(details.is_canceled());
        assert_eq!(details.reason(), InteractionReason::Pointer);
    }

    #[test]
    fn test_reason_names() {
        assert_eq!(InteractionReason::Keyboard.to_string(), "keyboard");
        assert_eq!(InteractionReason::Pointer.as_str(), "pointer");
        assert_eq!(InteractionReason::default(), InteractionReason::None);
    }
}

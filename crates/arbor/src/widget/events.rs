//! Input events delivered to tree view parts.
//!
//! Hosts translate their native input into these types and hand them to the
//! part that owns the element. Handlers mark handled events through
//! [`EventBase`] so the host can suppress default behavior and stop
//! propagation to enclosing composite widgets.

use arbor_core::InteractionReason;

/// State shared by all events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventBase {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the host's default behavior (scrolling, form submission, ...).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Keep the event from reaching ancestor handlers.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Mark the event handled: prevent default and stop propagation.
    pub fn accept(&mut self) {
        self.prevent_default();
        self.stop_propagation();
    }

    /// Whether default behavior was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether propagation was stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Whether a handler consumed the event.
    pub fn is_accepted(&self) -> bool {
        self.default_prevented && self.propagation_stopped
    }
}

/// Keyboard key codes relevant to tree navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Navigation
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,

    // Activation
    Enter,
    Space,

    // `*` lives on Shift+8 or the numpad
    Digit8,
    NumpadMultiply,

    /// Unmapped key, carrying the code point of a single-character key
    /// value and `0` for named keys.
    Unknown(u32),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a key code.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "8" | "*" => Key::Digit8,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Unknown(u32::from(c)),
                    _ => Key::Unknown(0),
                }
            }
        }
    }
}

/// Keyboard modifiers held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held.
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };
}

/// Key press event, sent to the focused item content.
#[derive(Debug, Clone)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text this key press would type, if any.
    pub text: String,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, text: impl Into<String>) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            text: text.into(),
        }
    }

    /// Create an event for a key without modifiers or text.
    pub fn key(key: Key) -> Self {
        let text = match key {
            Key::Space => " ",
            Key::NumpadMultiply => "*",
            _ => "",
        };
        Self::new(key, KeyboardModifiers::NONE, text)
    }

    /// Create an event from a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        let code = Key::from_dom_key(key);
        let modifiers = if key == "*" {
            KeyboardModifiers::SHIFT
        } else {
            KeyboardModifiers::NONE
        };
        let text = if key.chars().count() == 1 { key } else { "" };
        Self::new(code, modifiers, text)
    }

    /// Whether the key produces `*`.
    pub fn is_asterisk(&self) -> bool {
        self.key == Key::NumpadMultiply || self.text == "*"
    }
}

/// Click (activation) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// What produced the activation: a pointer, or Enter/Space on a button.
    pub reason: InteractionReason,
}

impl ClickEvent {
    /// A pointer click.
    pub fn pointer() -> Self {
        Self {
            base: EventBase::new(),
            reason: InteractionReason::Pointer,
        }
    }

    /// A click synthesized from keyboard activation.
    pub fn keyboard() -> Self {
        Self {
            base: EventBase::new(),
            reason: InteractionReason::Keyboard,
        }
    }
}

impl Default for ClickEvent {
    fn default() -> Self {
        Self::pointer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_sets_both_flags() {
        let mut base = EventBase::new();
        assert!(!base.is_accepted());
        base.prevent_default();
        assert!(!base.is_accepted());
        base.accept();
        assert!(base.is_default_prevented());
        assert!(base.is_propagation_stopped());
        assert!(base.is_accepted());
    }

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom_key(" "), Key::Space);
        assert_eq!(Key::from_dom_key("q"), Key::Unknown('q' as u32));
        assert_eq!(Key::from_dom_key("Tab"), Key::Unknown(0));
        assert_ne!(Key::from_dom_key("\u{1F600}"), Key::from_dom_key("\u{F600}"));
        assert_eq!(Key::from_dom_key("\u{1F600}"), Key::Unknown(0x1F600));
    }

    #[test]
    fn test_asterisk_detection() {
        assert!(KeyPressEvent::from_dom_key("*").is_asterisk());
        assert!(KeyPressEvent::key(Key::NumpadMultiply).is_asterisk());
        assert!(!KeyPressEvent::from_dom_key("8").is_asterisk());
        assert_eq!(KeyPressEvent::key(Key::Space).text, " ");
    }
}

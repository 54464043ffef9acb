//! Property system for Arbor.
//!
//! - **Property<T>**: a value with change detection
//! - **Controllable<T>**: a property that is either owned internally
//!   (uncontrolled) or mirrored from the host (controlled)
//!
//! # Example
//!
//! ```
//! use arbor_core::Controllable;
//!
//! // Uncontrolled: internal commits are stored.
//! let expanded = Controllable::uncontrolled("expanded", vec!["src".to_string()]);
//! assert!(expanded.commit(Vec::new()));
//! assert!(expanded.get().is_empty());
//!
//! // Controlled: commits are ignored until the host pushes a value.
//! let selected = Controllable::controlled("selected", None::<String>);
//! assert!(!selected.commit(Some("a".to_string())));
//! assert!(selected.sync(Some("a".to_string())).unwrap());
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::logging::targets;

/// A reactive property that tracks changes.
///
/// `set()` compares the new value with the current one and returns whether
/// the value actually changed, so callers know when to notify.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property").field("value", &self.get()).finish()
    }
}

/// A property whose value is owned either internally or by the host.
///
/// An uncontrolled value starts from a default and accepts internal commits.
/// A controlled value mirrors whatever the host last pushed through
/// [`sync`](Self::sync); internal commits are ignored so the host stays the
/// single source of truth.
pub struct Controllable<T> {
    name: &'static str,
    value: Property<T>,
    controlled: bool,
}

impl<T: Clone + PartialEq> Controllable<T> {
    /// A value owned by the host.
    pub fn controlled(name: &'static str, value: T) -> Self {
        Self {
            name,
            value: Property::new(value),
            controlled: true,
        }
    }

    /// A value owned internally, starting at `default`.
    pub fn uncontrolled(name: &'static str, default: T) -> Self {
        Self {
            name,
            value: Property::new(default),
            controlled: false,
        }
    }

    /// The state slot's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the host owns the value.
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Access the current value without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.value.with(f)
    }

    /// Store an internally computed value.
    ///
    /// Returns `true` if the stored value changed. Always `false` when
    /// controlled.
    pub fn commit(&self, value: T) -> bool {
        if self.controlled {
            tracing::trace!(
                target: targets::PROPERTY,
                name = self.name,
                "controlled value, commit deferred to host"
            );
            return false;
        }
        self.value.set(value)
    }

    /// Push a host-owned value.
    ///
    /// Returns `Ok(true)` if the stored value changed.
    pub fn sync(&self, value: T) -> CoreResult<bool> {
        if !self.controlled {
            tracing::warn!(
                target: targets::PROPERTY,
                name = self.name,
                "ignoring host value for uncontrolled state"
            );
            return Err(CoreError::NotControlled { name: self.name });
        }
        Ok(self.value.set(value))
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Controllable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controllable")
            .field("name", &self.name)
            .field("controlled", &self.controlled)
            .field("value", &self.value.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(Property<Vec<String>>: Send, Sync);
static_assertions::assert_impl_all!(Controllable<Option<String>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_reports_change() {
        let prop = Property::new(42);
        assert!(!prop.set(42));
        assert!(prop.set(100));
        assert_eq!(prop.get(), 100);
    }

    #[test]
    fn test_property_with_and_silent() {
        let prop = Property::new(vec![1, 2, 3]);
        assert_eq!(prop.with(|v| v.len()), 3);
        prop.set_silent(Vec::new());
        assert!(prop.with(|v| v.is_empty()));
    }

    #[test]
    fn test_uncontrolled_commit() {
        let state = Controllable::uncontrolled("expanded", vec!["a".to_string()]);
        assert!(!state.is_controlled());
        assert!(!state.commit(vec!["a".to_string()]));
        assert!(state.commit(Vec::new()));
        assert!(state.get().is_empty());
    }

    #[test]
    fn test_uncontrolled_rejects_sync() {
        let state = Controllable::uncontrolled("expanded", 0u8);
        assert_eq!(
            state.sync(1),
            Err(CoreError::NotControlled { name: "expanded" })
        );
        assert_eq!(state.get(), 0);
    }

    #[test]
    fn test_controlled_ignores_commit() {
        let state = Controllable::controlled("selected", Some("a".to_string()));
        assert!(state.is_controlled());
        assert!(!state.commit(None));
        assert_eq!(state.get(), Some("a".to_string()));

        assert_eq!(state.sync(None), Ok(true));
        assert_eq!(state.get(), None);
        assert_eq!(state.name(), "selected");
    }
}

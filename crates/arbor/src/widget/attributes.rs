//! Rendered attribute maps.
//!
//! Every part exposes the attributes a host renderer should put on its
//! element: role, `aria-*`, `data-*` styling hooks, `tabindex`, `hidden`.
//! Boolean `data-*` hooks are presence-based and carry an empty value.

use std::collections::BTreeMap;
use std::fmt;

use super::accessibility::AccessibleRole;

/// Attribute names used by the tree view parts.
pub mod names {
    pub const ROLE: &str = "role";
    pub const ID: &str = "id";
    pub const TAB_INDEX: &str = "tabindex";
    pub const HIDDEN: &str = "hidden";
    pub const DIR: &str = "dir";

    pub const ARIA_LABEL: &str = "aria-label";
    pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
    pub const ARIA_MULTISELECTABLE: &str = "aria-multiselectable";
    pub const ARIA_LEVEL: &str = "aria-level";
    pub const ARIA_EXPANDED: &str = "aria-expanded";
    pub const ARIA_SELECTED: &str = "aria-selected";
    pub const ARIA_DISABLED: &str = "aria-disabled";
    pub const ARIA_CHECKED: &str = "aria-checked";
    pub const ARIA_HIDDEN: &str = "aria-hidden";

    pub const DATA_EXPANDED: &str = "data-expanded";
    pub const DATA_SELECTED: &str = "data-selected";
    pub const DATA_INDETERMINATE: &str = "data-indeterminate";
    pub const DATA_DISABLED: &str = "data-disabled";
    pub const DATA_HAS_CHILDREN: &str = "data-has-children";
    pub const DATA_CHECKED: &str = "data-checked";
    pub const DATA_UNCHECKED: &str = "data-unchecked";
    pub const DATA_LEVEL: &str = "data-level";
    pub const DATA_VALUE: &str = "data-value";
    pub const DATA_INDEX: &str = "data-index";
    pub const DATA_MULTIPLE: &str = "data-multiple";
    pub const DATA_STARTING_STYLE: &str = "data-starting-style";
    pub const DATA_ENDING_STYLE: &str = "data-ending-style";
}

/// An ordered set of rendered attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: BTreeMap<&'static str, String>,
}

impl AttributeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.entries.insert(name, value.into());
        self
    }

    /// Set a presence-based flag: present with an empty value when `on`, absent otherwise.
    pub fn set_flag(&mut self, name: &'static str, on: bool) -> &mut Self {
        if on {
            self.entries.insert(name, String::new());
        } else {
            self.entries.remove(name);
        }
        self
    }

    /// Set an ARIA boolean (`"true"` / `"false"`).
    pub fn set_bool(&mut self, name: &'static str, value: bool) -> &mut Self {
        self.set(name, if value { "true" } else { "false" })
    }

    /// Set the `role` attribute. [`AccessibleRole::Unknown`] removes it.
    pub fn set_role(&mut self, role: AccessibleRole) -> &mut Self {
        match role.as_aria_role() {
            Some(name) => self.set(names::ROLE, name),
            None => {
                self.entries.remove(names::ROLE);
                self
            }
        }
    }

    /// Remove an attribute.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether an attribute is present.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Copy every attribute of `other` into this map, overwriting duplicates.
    pub fn extend(&mut self, other: &AttributeMap) -> &mut Self {
        for (name, value) in other.iter() {
            self.entries.insert(name, value.to_string());
        }
        self
    }
}

impl fmt::Display for AttributeMap {
    /// HTML-like rendering: `role="tree" data-expanded`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if value.is_empty() {
                f.write_str(name)?;
            } else {
                write!(f, "{name}=\"{value}\"")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::names::*;
    use super::*;

    #[test]
    fn test_flags_are_presence_based() {
        let mut attrs = AttributeMap::new();
        attrs.set_flag(DATA_EXPANDED, true).set_flag(DATA_SELECTED, false);
        assert_eq!(attrs.get(DATA_EXPANDED), Some(""));
        assert!(!attrs.has(DATA_SELECTED));

        attrs.set_flag(DATA_EXPANDED, false);
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_display_renders_html_like() {
        let mut attrs = AttributeMap::new();
        attrs
            .set(ROLE, "treeitem")
            .set_bool(ARIA_EXPANDED, false)
            .set_flag(DATA_HAS_CHILDREN, true);
        assert_eq!(
            attrs.to_string(),
            "aria-expanded=\"false\" data-has-children role=\"treeitem\""
        );
    }

    #[test]
    fn test_extend_overwrites() {
        let mut base = AttributeMap::new();
        base.set(DATA_LEVEL, "1");
        let mut other = AttributeMap::new();
        other.set(DATA_LEVEL, "2").set(ROLE, "group");
        base.extend(&other);
        assert_eq!(base.get(DATA_LEVEL), Some("2"));
        assert_eq!(base.len(), 2);
    }
}

//! Declarative tree definitions.
//!
//! A [`TreeDefinition`] is the node hierarchy a host declares, the same
//! information nested `Item`/`ItemGroup` markup would carry. It can be built
//! in code or loaded from JSON or TOML.
//!
//! # Building in code
//!
//! ```
//! use arbor::model::{ItemDefinition, TreeDefinition};
//!
//! let tree = TreeDefinition::new()
//!     .with_item(
//!         ItemDefinition::new("src")
//!             .with_child(ItemDefinition::new("main.rs"))
//!             .with_child(ItemDefinition::new("lib.rs")),
//!     )
//!     .with_item(ItemDefinition::new("Cargo.toml"));
//!
//! assert_eq!(tree.items.len(), 2);
//! ```
//!
//! # Loading from TOML
//!
//! ```
//! use arbor::model::TreeDefinition;
//!
//! let tree = TreeDefinition::from_toml(r#"
//! [[items]]
//! value = "docs"
//!
//! [items.group]
//! keep_mounted = true
//!
//! [[items.group.items]]
//! value = "guide.md"
//! disabled = true
//! "#).unwrap();
//!
//! let docs = &tree.items[0];
//! assert!(docs.group.as_ref().unwrap().keep_mounted);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeViewError};

/// The full declared hierarchy of a tree view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeDefinition {
    /// Top-level items in declared order.
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

/// One declared node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDefinition {
    /// Unique identity. Missing or empty values are rejected when the tree is built.
    #[serde(default)]
    pub value: Option<String>,
    /// Human-readable name, used as the accessible label.
    #[serde(default)]
    pub label: Option<String>,
    /// Whether the node ignores interaction.
    #[serde(default)]
    pub disabled: bool,
    /// Explicit position, required for virtualized trees.
    #[serde(default)]
    pub index: Option<usize>,
    /// The node's child group, if it declares one.
    #[serde(default)]
    pub group: Option<GroupDefinition>,
}

/// A declared child group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDefinition {
    /// Keep children present (but hidden) while collapsed.
    #[serde(default)]
    pub keep_mounted: bool,
    /// Keep children present and discoverable by find-in-page while collapsed.
    #[serde(default)]
    pub hidden_until_found: bool,
    /// Children in declared order.
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

impl TreeDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level item.
    pub fn with_item(mut self, item: ItemDefinition) -> Self {
        self.items.push(item);
        self
    }

    /// Append several top-level items.
    pub fn with_items(mut self, items: impl IntoIterator<Item = ItemDefinition>) -> Self {
        self.items.extend(items);
        self
    }

    /// Parse a definition from JSON.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a definition from TOML.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read a definition from a file, choosing the format by extension.
    ///
    /// `.json` files are parsed as JSON; everything else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| TreeViewError::io(path, e))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&source),
            _ => Self::from_toml(&source),
        }
    }

    /// Serialize the definition to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ItemDefinition {
    /// Declare an item with the given value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Set the accessible label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the item disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the explicit index used by virtualized trees.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Declare an (initially empty) child group.
    pub fn with_group(mut self, group: GroupDefinition) -> Self {
        self.group = Some(group);
        self
    }

    /// Append a child, creating a default group if needed.
    pub fn with_child(mut self, child: ItemDefinition) -> Self {
        self.group.get_or_insert_with(GroupDefinition::default).items.push(child);
        self
    }

    /// Append several children, creating a default group if needed.
    pub fn with_children(mut self, children: impl IntoIterator<Item = ItemDefinition>) -> Self {
        self.group
            .get_or_insert_with(GroupDefinition::default)
            .items
            .extend(children);
        self
    }
}

impl GroupDefinition {
    /// Create an empty group that unmounts its children when collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep children present while collapsed.
    pub fn keep_mounted(mut self, keep_mounted: bool) -> Self {
        self.keep_mounted = keep_mounted;
        self
    }

    /// Keep children discoverable by find-in-page while collapsed.
    pub fn hidden_until_found(mut self, hidden_until_found: bool) -> Self {
        self.hidden_until_found = hidden_until_found;
        self
    }

    /// Append a child.
    pub fn with_item(mut self, item: ItemDefinition) -> Self {
        self.items.push(item);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_child_creates_group() {
        let item = ItemDefinition::new("a").with_child(ItemDefinition::new("b"));
        let group = item.group.as_ref().unwrap();
        assert_eq!(group.items.len(), 1);
        assert!(!group.keep_mounted);
    }

    #[test]
    fn test_json_missing_value_is_deferred_to_build() {
        let tree = TreeDefinition::from_json(r#"{ "items": [ { "label": "nameless" } ] }"#).unwrap();
        assert_eq!(tree.items[0].value, None);
        assert_eq!(tree.items[0].label.as_deref(), Some("nameless"));
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let err = TreeDefinition::from_json(r#"{ "items": [ { "value": "a", "colour": "red" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, TreeViewError::Json(_)));
    }

    #[test]
    fn test_toml_nested_groups() {
        let tree = TreeDefinition::from_toml(
            r#"
            [[items]]
            value = "a"

            [items.group]
            hidden_until_found = true

            [[items.group.items]]
            value = "a1"
            index = 1
            "#,
        )
        .unwrap();

        let group = tree.items[0].group.as_ref().unwrap();
        assert!(group.hidden_until_found);
        assert_eq!(group.items[0].index, Some(1));
    }

    #[test]
    fn test_json_roundtrip_keeps_structure() {
        let tree = TreeDefinition::new()
            .with_item(ItemDefinition::new("a").with_children([ItemDefinition::new("b")]));
        let parsed = TreeDefinition::from_json(&tree.to_json().unwrap()).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_from_path_reports_io_error() {
        let err = TreeDefinition::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, TreeViewError::Io { .. }));
    }
}

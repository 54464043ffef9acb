//! Construction parameters for a tree view.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{SelectedValue, SelectionMode};

/// Text direction of the tree container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl TextDirection {
    /// The `dir` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Uncontrolled construction parameters of a tree view.
///
/// Controlled expanded/selected values are not part of the file format;
/// pass them through [`TreeViewBuilder`](super::TreeViewBuilder).
///
/// # Example
///
/// ```
/// use arbor::widget::tree_view::TreeViewConfig;
/// use arbor::model::SelectionMode;
///
/// let config = TreeViewConfig::from_toml(r#"
/// selection_mode = "multiple"
/// default_expanded = ["src"]
/// aria_label = "Project files"
/// "#).unwrap();
///
/// assert_eq!(config.selection_mode, SelectionMode::Multiple);
/// assert!(!config.loop_focus);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeViewConfig {
    /// How many nodes may be selected.
    pub selection_mode: SelectionMode,
    /// Disable every node.
    pub disabled: bool,
    /// Wrap ArrowUp/ArrowDown focus movement at the ends of the list.
    pub loop_focus: bool,
    /// Rows are rendered by an external virtualizer; every node needs an index.
    pub virtualized: bool,
    /// Accessible label of the tree.
    pub aria_label: Option<String>,
    /// Id of the element labelling the tree.
    pub aria_labelledby: Option<String>,
    /// Text direction.
    pub direction: TextDirection,
    /// Initially expanded values.
    pub default_expanded: Vec<String>,
    /// Initial selection. Defaults to the empty selection for the mode.
    pub default_selected: Option<SelectedValue>,
    /// Exit transition delay for collapsing groups, in milliseconds.
    pub exit_transition_ms: u64,
}

impl Default for TreeViewConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::None,
            disabled: false,
            loop_focus: false,
            virtualized: false,
            aria_label: None,
            aria_labelledby: None,
            direction: TextDirection::Ltr,
            default_expanded: Vec::new(),
            default_selected: None,
            exit_transition_ms: 0,
        }
    }
}

impl TreeViewConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a configuration from JSON.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Disable every node.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Wrap focus at the ends of the list.
    pub fn with_loop_focus(mut self, loop_focus: bool) -> Self {
        self.loop_focus = loop_focus;
        self
    }

    /// Mark the tree virtualized.
    pub fn with_virtualized(mut self, virtualized: bool) -> Self {
        self.virtualized = virtualized;
        self
    }

    /// Set the accessible label.
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Set the id of the labelling element.
    pub fn with_aria_labelledby(mut self, id: impl Into<String>) -> Self {
        self.aria_labelledby = Some(id.into());
        self
    }

    /// Set the text direction.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the initially expanded values.
    pub fn with_default_expanded<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_expanded = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial selection.
    pub fn with_default_selected(mut self, selected: SelectedValue) -> Self {
        self.default_selected = Some(selected);
        self
    }

    /// Set the exit transition delay.
    pub fn with_exit_transition(mut self, delay: Duration) -> Self {
        self.exit_transition_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The exit transition delay.
    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms)
    }

    /// The initial selection, falling back to the empty selection for the mode.
    pub fn initial_selected(&self) -> SelectedValue {
        self.default_selected
            .clone()
            .unwrap_or_else(|| SelectedValue::empty_for(self.selection_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TreeViewConfig::default();
        assert_eq!(config.selection_mode, SelectionMode::None);
        assert!(!config.disabled);
        assert!(!config.virtualized);
        assert_eq!(config.initial_selected(), SelectedValue::Single(None));
        assert_eq!(config.exit_transition(), Duration::ZERO);
    }

    #[test]
    fn test_multiple_mode_defaults_to_empty_list() {
        let config = TreeViewConfig::new().with_selection_mode(SelectionMode::Multiple);
        assert_eq!(config.initial_selected(), SelectedValue::Multiple(Vec::new()));
    }

    #[test]
    fn test_json_selected_shapes() {
        let config = TreeViewConfig::from_json(
            r#"{ "selection_mode": "single", "default_selected": "a", "direction": "rtl" }"#,
        )
        .unwrap();
        assert_eq!(config.initial_selected(), SelectedValue::single("a"));
        assert_eq!(config.direction.as_str(), "rtl");

        let config = TreeViewConfig::from_json(r#"{ "default_selected": ["a", "b"] }"#).unwrap();
        assert_eq!(config.initial_selected(), SelectedValue::multiple(["a", "b"]));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(TreeViewConfig::from_toml("selection = \"single\"").is_err());
    }

    #[test]
    fn test_exit_transition_builder() {
        let config = TreeViewConfig::new().with_exit_transition(Duration::from_millis(250));
        assert_eq!(config.exit_transition_ms, 250);
    }
}

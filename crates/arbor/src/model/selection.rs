//! Selection modes and selection-set algebra.
//!
//! The functions here are pure: they take the current selection and return
//! the next one. The root decides whether to commit the result.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How many nodes may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Selection is disabled.
    #[default]
    None,
    /// At most one node is selected.
    Single,
    /// Any number of nodes, with hierarchical parent/descendant selection.
    Multiple,
}

impl SelectionMode {
    /// Whether nodes can be selected at all.
    pub fn allows_selection(self) -> bool {
        self != Self::None
    }
}

/// The selected value(s) of a tree.
///
/// The shape follows the selection mode: `Single` for none/single mode and
/// `Multiple` for multiple mode. Lookups tolerate a mismatched shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedValue {
    /// One value, or nothing.
    Single(Option<String>),
    /// A set of values; order is insertion order, membership is what matters.
    Multiple(Vec<String>),
}

impl Default for SelectedValue {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl SelectedValue {
    /// The empty selection for `mode`.
    pub fn empty_for(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Multiple => Self::Multiple(Vec::new()),
            SelectionMode::None | SelectionMode::Single => Self::Single(None),
        }
    }

    /// A single selected value.
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(Some(value.into()))
    }

    /// A set of selected values.
    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// The selected values as a list, whatever the shape.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => value.as_deref().into_iter().collect(),
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_none(),
            Self::Multiple(values) => values.is_empty(),
        }
    }

    /// Whether `value` is selected under `mode`.
    ///
    /// Always false in `None` mode.
    pub fn is_selected(&self, mode: SelectionMode, value: &str) -> bool {
        match mode {
            SelectionMode::None => false,
            SelectionMode::Single | SelectionMode::Multiple => self.values().contains(&value),
        }
    }
}

impl fmt::Display for SelectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(None) => f.write_str("null"),
            Self::Single(Some(value)) => write!(f, "{value:?}"),
            Self::Multiple(values) => write!(f, "{values:?}"),
        }
    }
}

/// Next single-mode selection: re-selecting the current value clears it.
pub fn toggle_single(current: Option<&str>, value: &str) -> Option<String> {
    if current == Some(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Next multiple-mode selection when toggling a node without descendants.
pub fn toggle_leaf(current: &[String], value: &str) -> Vec<String> {
    if current.iter().any(|v| v == value) {
        current.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Whether `value` and all of `descendants` are selected.
pub fn is_fully_selected(current: &[String], value: &str, descendants: &[String]) -> bool {
    let selected: HashSet<&str> = current.iter().map(String::as_str).collect();
    selected.contains(value) && descendants.iter().all(|d| selected.contains(d.as_str()))
}

/// Next multiple-mode selection when toggling a node with descendants.
///
/// All-or-nothing: if the node and every descendant are selected, all of them
/// are deselected; otherwise all of them are selected. Existing values keep
/// their order and new values are appended.
pub fn toggle_hierarchical(current: &[String], value: &str, descendants: &[String]) -> Vec<String> {
    if is_fully_selected(current, value, descendants) {
        let removed: HashSet<&str> = std::iter::once(value)
            .chain(descendants.iter().map(String::as_str))
            .collect();
        return current
            .iter()
            .filter(|v| !removed.contains(v.as_str()))
            .cloned()
            .collect();
    }

    let mut next = current.to_vec();
    let mut present: HashSet<String> = current.iter().cloned().collect();
    for item in std::iter::once(value).chain(descendants.iter().map(String::as_str)) {
        if present.insert(item.to_string()) {
            next.push(item.to_string());
        }
    }
    next
}

/// Whether a node shows the mixed (indeterminate) state.
///
/// True iff some descendants are selected and the node is not fully selected
/// (itself plus every descendant). Nodes without descendants are never
/// indeterminate.
pub fn is_indeterminate(current: &[String], value: &str, descendants: &[String]) -> bool {
    if descendants.is_empty() {
        return false;
    }
    let selected: HashSet<&str> = current.iter().map(String::as_str).collect();
    let any_descendant = descendants.iter().any(|d| selected.contains(d.as_str()));
    any_descendant && !is_fully_selected(current, value, descendants)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_single_toggle_to_null() {
        assert_eq!(toggle_single(None, "a"), Some("a".to_string()));
        assert_eq!(toggle_single(Some("a"), "b"), Some("b".to_string()));
        assert_eq!(toggle_single(Some("a"), "a"), None);
    }

    #[test]
    fn test_leaf_toggle_round_trip() {
        let start = strings(&["x"]);
        let selected = toggle_leaf(&start, "a");
        assert_eq!(selected, strings(&["x", "a"]));
        assert_eq!(toggle_leaf(&selected, "a"), start);
    }

    #[test]
    fn test_hierarchical_select_all_then_none() {
        let descendants = strings(&["c1", "c2"]);
        let selected = toggle_hierarchical(&[], "p", &descendants);
        assert_eq!(selected, strings(&["p", "c1", "c2"]));

        let cleared = toggle_hierarchical(&selected, "p", &descendants);
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_hierarchical_partial_selection_selects_all() {
        let descendants = strings(&["c1", "c2"]);
        let selected = toggle_hierarchical(&strings(&["other", "c2"]), "p", &descendants);
        assert_eq!(selected, strings(&["other", "c2", "p", "c1"]));
    }

    #[test]
    fn test_hierarchical_deselect_keeps_unrelated() {
        let descendants = strings(&["c1"]);
        let selected = toggle_hierarchical(&strings(&["c1", "z", "p"]), "p", &descendants);
        assert_eq!(selected, strings(&["z"]));
    }

    #[test]
    fn test_indeterminate_predicate() {
        let descendants = strings(&["c1", "c2"]);
        assert!(!is_indeterminate(&[], "p", &descendants));
        assert!(is_indeterminate(&strings(&["c1"]), "p", &descendants));
        // All descendants but not the node itself: still mixed.
        assert!(is_indeterminate(&strings(&["c1", "c2"]), "p", &descendants));
        assert!(!is_indeterminate(&strings(&["p", "c1", "c2"]), "p", &descendants));
        // Node alone selected: no descendant selected.
        assert!(!is_indeterminate(&strings(&["p"]), "p", &descendants));
        assert!(!is_indeterminate(&strings(&["p"]), "p", &[]));
    }

    #[test]
    fn test_indeterminate_agrees_with_toggle_direction() {
        let descendants = strings(&["c1", "c2"]);
        for current in [strings(&["c1"]), strings(&["c1", "c2"]), strings(&["p", "c2"])] {
            assert!(is_indeterminate(&current, "p", &descendants));
            let next = toggle_hierarchical(&current, "p", &descendants);
            assert!(is_fully_selected(&next, "p", &descendants));
        }
    }

    #[test]
    fn test_selected_value_shapes() {
        assert_eq!(SelectedValue::empty_for(SelectionMode::Multiple), SelectedValue::Multiple(vec![]));
        assert_eq!(SelectedValue::empty_for(SelectionMode::Single), SelectedValue::Single(None));

        let multi = SelectedValue::multiple(["a", "b"]);
        assert!(multi.is_selected(SelectionMode::Multiple, "b"));
        assert!(!multi.is_selected(SelectionMode::None, "b"));
        // A single value read in multiple mode still counts.
        assert!(SelectedValue::single("a").is_selected(SelectionMode::Multiple, "a"));
        assert_eq!(SelectedValue::Single(None).to_string(), "null");
    }

    #[test]
    fn test_selection_mode_serde_names() {
        let mode: SelectionMode = serde_json::from_str("\"multiple\"").unwrap();
        assert_eq!(mode, SelectionMode::Multiple);
        assert!(!SelectionMode::None.allows_selection());
    }
}

//! Logging and debugging facilities for Arbor.
//!
//! Arbor uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; applications opt in:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("arbor::tree_view=debug,arbor::keyboard=trace")
//!     .init();
//! ```
//!
//! [`TreeFormatOptions`] controls the text rendering produced by the tree
//! view's debug formatter.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "arbor_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "arbor_core::property";
    /// Tree view state changes (expansion, selection, highlight).
    pub const TREE_VIEW: &str = "arbor::tree_view";
    /// Arena model mutations and flat list rebuilds.
    pub const MODEL: &str = "arbor::model";
    /// Keyboard protocol handling.
    pub const KEYBOARD: &str = "arbor::keyboard";
    /// Drag-and-drop adapter.
    pub const DRAG_DROP: &str = "arbor::drag_drop";
    /// Virtualization adapter.
    pub const VIRTUALIZATION: &str = "arbor::virtualization";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed representation.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to annotate nodes with their state (expanded, selected, ...).
    pub show_state: bool,
    /// Whether to print nodes inside collapsed groups.
    pub show_collapsed: bool,
    /// Maximum depth to traverse (None for unlimited). Top-level nodes are depth 0.
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_state: true,
            show_collapsed: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options that print only what is currently visible.
    pub fn visible_only() -> Self {
        Self {
            show_collapsed: false,
            ..Default::default()
        }
    }

    /// Options for bare output: values only.
    pub fn minimal() -> Self {
        Self {
            show_state: false,
            ..Default::default()
        }
    }

    /// Build the line prefix for a node at `depth`.
    ///
    /// `ancestors_last[i]` tells whether the ancestor at depth `i + 1` was the
    /// last child of its parent, which decides whether its branch line
    /// continues.
    pub fn prefix(&self, ancestors_last: &[bool], is_last: bool) -> String {
        let depth = ancestors_last.len();
        if depth == 0 && self.style != TreeStyle::Compact {
            return String::new();
        }

        let (branch, tee, corner) = match self.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        if self.style == TreeStyle::Compact {
            for _ in 0..depth * self.indent_size {
                prefix.push(' ');
            }
            prefix.push_str(tee);
            prefix.push(' ');
            return prefix;
        }

        for &last in ancestors_last.iter().skip(1) {
            prefix.push_str(if last { " " } else { branch });
            for _ in 0..self.indent_size {
                prefix.push(' ');
            }
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_top_level_is_empty() {
        let options = TreeFormatOptions::default();
        assert_eq!(options.prefix(&[], false), "");
    }

    #[test]
    fn test_prefix_ascii_nesting() {
        let options = TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..Default::default()
        };
        assert_eq!(options.prefix(&[false], false), "+-- ");
        assert_eq!(options.prefix(&[false], true), "`-- ");
        assert_eq!(options.prefix(&[false, false], true), "|  `-- ");
        assert_eq!(options.prefix(&[false, true], false), "   +-- ");
    }

    #[test]
    fn test_prefix_compact() {
        let options = TreeFormatOptions {
            style: TreeStyle::Compact,
            ..Default::default()
        };
        assert_eq!(options.prefix(&[], true), "- ");
        assert_eq!(options.prefix(&[true], true), "  - ");
    }

    #[test]
    fn test_minimal_options() {
        let options = TreeFormatOptions::minimal();
        assert!(!options.show_state);
        assert!(options.show_collapsed);
        assert!(!TreeFormatOptions::visible_only().show_collapsed);
    }
}

//! Drag-and-drop adapter: reparent nodes by dragging them onto containers.
//!
//! The adapter does not track pointers. A host drag library reports the
//! drag start, the hovered target and the drop; the adapter carries the
//! node identity as payload, validates targets and moves the node in the
//! root's model.

use std::fmt;

use arbor_core::logging::targets;

use crate::error::{Result, TreeViewError};

use super::item::TreeViewItem;
use super::root::TreeViewRoot;

/// What a drag carries: the identity of the dragged node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DragPayload {
    /// Value of the dragged node.
    pub value: String,
}

/// Why a drop target refuses a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRejection {
    /// The dragged node or the target is not part of the tree.
    UnknownItem,
    /// A node cannot be dropped onto itself.
    SameItem,
    /// A node cannot move into its own subtree.
    IntoDescendant,
    /// The target is disabled.
    DisabledTarget,
    /// The target declares no child group.
    NotAContainer,
}

impl DropRejection {
    /// Human-readable reason.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownItem => "the item does not exist",
            Self::SameItem => "an item cannot contain itself",
            Self::IntoDescendant => "an item cannot move into its own subtree",
            Self::DisabledTarget => "the drop target is disabled",
            Self::NotAContainer => "the drop target has no children group",
        }
    }
}

impl fmt::Display for DropRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drag-and-drop state for one tree.
///
/// # Example
///
/// ```
/// use arbor::model::{ItemDefinition, TreeDefinition};
/// use arbor::widget::tree_view::{TreeDragDrop, TreeViewRoot};
///
/// let tree = TreeViewRoot::builder(
///     TreeDefinition::new()
///         .with_item(ItemDefinition::new("src").with_child(ItemDefinition::new("main.rs")))
///         .with_item(ItemDefinition::new("lib.rs")),
/// )
/// .build()
/// .unwrap();
///
/// let mut dnd = TreeDragDrop::new(&tree);
/// let payload = dnd.start_drag(&tree.item("lib.rs").unwrap()).unwrap();
/// assert!(dnd.can_drop(&payload, "src"));
/// dnd.drop(&payload, "src").unwrap();
/// assert_eq!(tree.with_model(|m| m.parent_of("lib.rs").map(str::to_string)), Some("src".into()));
/// ```
#[derive(Debug)]
pub struct TreeDragDrop<'a> {
    root: &'a TreeViewRoot,
    dragging: Option<DragPayload>,
    over: Option<String>,
}

impl<'a> TreeDragDrop<'a> {
    /// Create an adapter for `root`.
    pub fn new(root: &'a TreeViewRoot) -> Self {
        Self {
            root,
            dragging: None,
            over: None,
        }
    }

    /// Begin dragging `item`. Disabled items cannot be dragged.
    pub fn start_drag(&mut self, item: &TreeViewItem<'_>) -> Option<DragPayload> {
        if item.is_disabled() {
            return None;
        }
        let payload = DragPayload {
            value: item.value().to_string(),
        };
        tracing::debug!(target: targets::DRAG_DROP, value = item.value(), "drag started");
        self.dragging = Some(payload.clone());
        Some(payload)
    }

    /// The payload of the drag in progress.
    pub fn payload(&self) -> Option<&DragPayload> {
        self.dragging.as_ref()
    }

    /// Whether `value` is being dragged.
    pub fn is_dragging(&self, value: &str) -> bool {
        self.dragging.as_ref().is_some_and(|p| p.value == value)
    }

    /// The target currently hovered by a valid drag.
    pub fn drop_target(&self) -> Option<&str> {
        self.over.as_deref()
    }

    /// Check whether `payload` may be dropped onto `target`.
    pub fn check_drop(&self, payload: &DragPayload, target: &str) -> std::result::Result<(), DropRejection> {
        self.root.with_model(|model| {
            let Some(target_node) = model.get(target) else {
                return Err(DropRejection::UnknownItem);
            };
            if !model.contains(&payload.value) {
                return Err(DropRejection::UnknownItem);
            }
            if payload.value == target {
                return Err(DropRejection::SameItem);
            }
            if model.is_descendant_of(target, &payload.value) {
                return Err(DropRejection::IntoDescendant);
            }
            if target_node.is_disabled() || self.root.is_disabled() {
                return Err(DropRejection::DisabledTarget);
            }
            if !target_node.has_children() {
                return Err(DropRejection::NotAContainer);
            }
            Ok(())
        })
    }

    /// Whether `payload` may be dropped onto `target`.
    pub fn can_drop(&self, payload: &DragPayload, target: &str) -> bool {
        self.check_drop(payload, target).is_ok()
    }

    /// The drag entered `target`. Returns whether the target accepts it.
    pub fn drag_enter(&mut self, target: &str) -> bool {
        let accepted = self
            .dragging
            .as_ref()
            .is_some_and(|payload| self.can_drop(payload, target));
        self.over = accepted.then(|| target.to_string());
        accepted
    }

    /// The drag left the hovered target.
    pub fn drag_leave(&mut self) {
        self.over = None;
    }

    /// Drop `payload` onto `target`, reparenting it as the target's last child.
    pub fn drop(&mut self, payload: &DragPayload, target: &str) -> Result<()> {
        self.over = None;
        self.dragging = None;

        if let Err(rejection) = self.check_drop(payload, target) {
            tracing::warn!(
                target: targets::DRAG_DROP,
                source = %payload.value,
                destination = target,
                %rejection,
                "drop rejected"
            );
            return Err(TreeViewError::invalid_move(&payload.value, target, rejection.as_str()));
        }

        self.root.move_item(&payload.value, target)?;
        tracing::debug!(target: targets::DRAG_DROP, source = %payload.value, destination = target, "item dropped");
        Ok(())
    }

    /// Abort the drag in progress.
    pub fn cancel(&mut self) {
        self.dragging = None;
        self.over = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDefinition, TreeDefinition};

    fn tree() -> TreeViewRoot {
        let definition = TreeDefinition::new().with_item(
            ItemDefinition::new("project")
                .with_child(
                    ItemDefinition::new("src")
                        .with_child(ItemDefinition::new("index.ts"))
                        .with_child(ItemDefinition::new("App.tsx")),
                )
                .with_child(ItemDefinition::new("docs").with_child(ItemDefinition::new("README.md")))
                .with_child(ItemDefinition::new("archive").disabled(true).with_child(ItemDefinition::new("old"))),
        );
        TreeViewRoot::builder(definition)
            .expanded(["project", "src", "docs"])
            .build()
            .unwrap()
    }

    fn payload(value: &str) -> DragPayload {
        DragPayload { value: value.to_string() }
    }

    #[test]
    fn test_drop_rules() {
        let root = tree();
        let dnd = TreeDragDrop::new(&root);
        assert_eq!(dnd.check_drop(&payload("src"), "src"), Err(DropRejection::SameItem));
        assert_eq!(dnd.check_drop(&payload("project"), "src"), Err(DropRejection::IntoDescendant));
        assert_eq!(dnd.check_drop(&payload("index.ts"), "archive"), Err(DropRejection::DisabledTarget));
        assert_eq!(dnd.check_drop(&payload("index.ts"), "App.tsx"), Err(DropRejection::NotAContainer));
        assert_eq!(dnd.check_drop(&payload("ghost"), "docs"), Err(DropRejection::UnknownItem));
        assert!(dnd.can_drop(&payload("index.ts"), "docs"));
    }

    #[test]
    fn test_drop_reparents_and_refreshes() {
        let root = tree();
        let mut dnd = TreeDragDrop::new(&root);
        let dragged = dnd.start_drag(&root.item("index.ts").unwrap()).unwrap();
        assert!(dnd.is_dragging("index.ts"));
        assert!(dnd.drag_enter("docs"));
        assert_eq!(dnd.drop_target(), Some("docs"));

        dnd.drop(&dragged, "docs").unwrap();
        assert!(dnd.payload().is_none());
        assert_eq!(root.with_model(|m| m.children_of("docs").len()), 2);

        let rows: Vec<String> = root.flat_items().into_iter().map(|r| r.value).collect();
        assert_eq!(
            rows,
            vec!["project", "src", "App.tsx", "docs", "README.md", "index.ts", "archive"]
        );
    }

    #[test]
    fn test_invalid_drop_is_an_error() {
        let root = tree();
        let mut dnd = TreeDragDrop::new(&root);
        let err = dnd.drop(&payload("project"), "docs").unwrap_err();
        assert!(matches!(err, TreeViewError::InvalidMove { .. }));
        assert!(!dnd.drag_enter("docs"));
    }

    #[test]
    fn test_disabled_items_cannot_be_dragged() {
        let root = tree();
        let mut dnd = TreeDragDrop::new(&root);
        assert!(dnd.start_drag(&root.item("archive").unwrap()).is_none());
        dnd.start_drag(&root.item("src").unwrap());
        dnd.cancel();
        assert!(dnd.payload().is_none());
    }
}

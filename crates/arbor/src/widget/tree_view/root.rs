//! The tree view root: the single owner of expansion and selection state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use slotmap::Key as _;

use arbor_core::logging::targets;
use arbor_core::{
    ChangeEventDetails, Controllable, HighlightEventDetails, InteractionReason, Property, Signal,
    TreeFormatOptions,
};

use super::config::TreeViewConfig;
use super::item::TreeViewItem;
use crate::error::{Result, TreeViewError};
use crate::model::selection::{self, SelectedValue, SelectionMode};
use crate::model::{
    FlatTreeItem, ItemDefinition, NodeKey, TreeDefinition, TreeModel, flatten_visible, position_of,
};
use crate::widget::animation::Presence;
use crate::widget::accessibility::AccessibleRole;
use crate::widget::attributes::{AttributeMap, names};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// The state owner of a tree view.
///
/// `TreeViewRoot` holds the node model, the expanded set and the selected
/// value(s). Both pieces of state change only through
/// [`handle_expanded_change`](Self::handle_expanded_change) and
/// [`handle_selection`](Self::handle_selection) (or their `toggle_*`
/// shorthands), which offer the change to the matching signal first.
/// A connected slot may call [`ChangeEventDetails::cancel`] to veto it.
/// Slots may also call back into the root; a nested change they commit is
/// kept and the outer change is applied on top of it.
///
/// The flat traversal list is rebuilt synchronously on every committed
/// change, so a key press handled right after an expand already sees the
/// new rows.
///
/// # Example
///
/// ```
/// use arbor::model::{ItemDefinition, SelectionMode, TreeDefinition, SelectedValue};
/// use arbor::widget::tree_view::TreeViewRoot;
///
/// let definition = TreeDefinition::new()
///     .with_item(ItemDefinition::new("src").with_child(ItemDefinition::new("main.rs")))
///     .with_item(ItemDefinition::new("README.md"));
///
/// let tree = TreeViewRoot::builder(definition)
///     .selection_mode(SelectionMode::Single)
///     .build()
///     .unwrap();
///
/// assert_eq!(tree.flat_items().len(), 2);
/// tree.toggle_expansion("src", true);
/// assert_eq!(tree.flat_items().len(), 3);
///
/// tree.toggle_selection("main.rs");
/// assert_eq!(tree.selected(), SelectedValue::single("main.rs"));
/// ```
pub struct TreeViewRoot {
    id: u64,
    config: TreeViewConfig,
    model: RwLock<TreeModel>,
    expanded: Controllable<Vec<String>>,
    selected: Controllable<SelectedValue>,
    flat_items: RwLock<Vec<FlatTreeItem>>,
    active_value: Property<Option<String>>,
    presence: Mutex<HashMap<NodeKey, Presence>>,

    /// Offered the next expanded set before it is committed.
    pub expanded_changed: Signal<(Vec<String>, ChangeEventDetails)>,
    /// Offered the next selection before it is committed.
    pub selected_changed: Signal<(SelectedValue, ChangeEventDetails)>,
    /// Emitted when focus moves to a node (or away from all nodes).
    pub item_highlighted: Signal<(Option<String>, HighlightEventDetails)>,
    /// Emitted with the new row count after the flat list is rebuilt.
    pub flat_items_changed: Signal<usize>,
}

impl TreeViewRoot {
    /// Start building a root for `definition`.
    pub fn builder(definition: TreeDefinition) -> TreeViewBuilder {
        TreeViewBuilder::new(definition)
    }

    /// Build an uncontrolled root from a definition and a configuration.
    pub fn new(definition: &TreeDefinition, config: TreeViewConfig) -> Result<Self> {
        let expanded = Controllable::uncontrolled("expanded", config.default_expanded.clone());
        let selected = Controllable::uncontrolled("selected", config.initial_selected());
        Self::from_parts(definition, config, expanded, selected)
    }

    fn from_parts(
        definition: &TreeDefinition,
        config: TreeViewConfig,
        expanded: Controllable<Vec<String>>,
        selected: Controllable<SelectedValue>,
    ) -> Result<Self> {
        let model = TreeModel::from_definition(definition)?;
        if config.virtualized
            && let Some(value) = model.first_without_index()
        {
            return Err(TreeViewError::MissingIndex(value.to_string()));
        }

        let root = Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            config,
            model: RwLock::new(model),
            expanded,
            selected,
            flat_items: RwLock::new(Vec::new()),
            active_value: Property::new(None),
            presence: Mutex::new(HashMap::new()),
            expanded_changed: Signal::new(),
            selected_changed: Signal::new(),
            item_highlighted: Signal::new(),
            flat_items_changed: Signal::new(),
        };
        root.refresh(Instant::now());

        tracing::debug!(
            target: targets::TREE_VIEW,
            tree = root.id,
            nodes = root.model.read().len(),
            mode = ?root.config.selection_mode,
            controlled_expanded = root.expanded.is_controlled(),
            controlled_selected = root.selected.is_controlled(),
            "tree view created"
        );
        Ok(root)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The construction parameters.
    pub fn config(&self) -> &TreeViewConfig {
        &self.config
    }

    /// The selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.config.selection_mode
    }

    /// Whether the whole tree is disabled.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Whether the rows are rendered by an external virtualizer.
    pub fn is_virtualized(&self) -> bool {
        self.config.virtualized
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// The current expanded set.
    pub fn expanded(&self) -> Vec<String> {
        self.expanded.get()
    }

    /// Whether `value` is in the expanded set.
    pub fn is_expanded(&self, value: &str) -> bool {
        self.expanded.with(|expanded| expanded.iter().any(|v| v == value))
    }

    /// Whether the host owns the expanded set.
    pub fn is_expanded_controlled(&self) -> bool {
        self.expanded.is_controlled()
    }

    /// Request that `value` becomes expanded (`next == true`) or collapsed.
    ///
    /// Returns `false` when the value is unknown, nothing would change, or a
    /// slot canceled the change.
    pub fn handle_expanded_change(&self, value: &str, next: bool, reason: InteractionReason) -> bool {
        if !self.model.read().contains(value) {
            return false;
        }
        let current = self.expanded.get();
        let is_member = current.iter().any(|v| v == value);
        if is_member == next {
            return false;
        }

        let change = if next {
            ExpansionChange::Add(vec![value.to_string()])
        } else {
            ExpansionChange::Remove(value.to_string())
        };
        self.request_expanded(current, change, reason)
    }

    /// Programmatic [`handle_expanded_change`](Self::handle_expanded_change).
    pub fn toggle_expansion(&self, value: &str, next: bool) -> bool {
        self.handle_expanded_change(value, next, InteractionReason::None)
    }

    /// Expand every ancestor of `value` in a single change.
    ///
    /// Used to reveal a node, e.g. when find-in-page matches text inside a
    /// `hidden_until_found` group.
    pub fn expand_to(&self, value: &str) -> bool {
        let ancestors = self.model.read().ancestors(value);
        self.expand_all_of(ancestors.into_iter().rev(), InteractionReason::None)
    }

    /// Expand every collapsed sibling of `value` that has children.
    ///
    /// Siblings share the parent and the level. Returns `false` when there
    /// is nothing to expand.
    pub fn expand_siblings(&self, value: &str, reason: InteractionReason) -> bool {
        let siblings: Vec<String> = {
            let rows = self.flat_items.read();
            let Some(current) = rows.iter().find(|row| row.value == value) else {
                return false;
            };
            rows.iter()
                .filter(|row| {
                    row.parent_value == current.parent_value
                        && row.level == current.level
                        && row.has_children
                        && !row.is_expanded
                })
                .map(|row| row.value.clone())
                .collect()
        };
        self.expand_all_of(siblings.into_iter(), reason)
    }

    fn expand_all_of(&self, values: impl Iterator<Item = String>, reason: InteractionReason) -> bool {
        let current = self.expanded.get();
        let mut added: Vec<String> = Vec::new();
        for value in values {
            if !current.contains(&value) && !added.contains(&value) {
                added.push(value);
            }
        }
        if added.is_empty() {
            return false;
        }
        self.request_expanded(current, ExpansionChange::Add(added), reason)
    }

    /// Push a host-owned expanded set.
    ///
    /// Fails with [`CoreError::NotControlled`](arbor_core::CoreError) when
    /// the expanded set was not configured as controlled.
    pub fn set_expanded<I, S>(&self, values: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let changed = self.expanded.sync(values)?;
        if changed {
            self.refresh(Instant::now());
        }
        Ok(changed)
    }

    fn request_expanded(&self, current: Vec<String>, change: ExpansionChange, reason: InteractionReason) -> bool {
        let next = change.apply(&current);
        let details = ChangeEventDetails::new(reason);
        self.expanded_changed.emit((next.clone(), details.clone()));
        if details.is_canceled() {
            tracing::debug!(target: targets::TREE_VIEW, tree = self.id, %reason, "expansion change canceled");
            return false;
        }

        // A slot may have committed a nested change while the signal ran.
        let next = self
            .expanded
            .with(|live| if *live == current { next } else { change.apply(live) });
        if self.expanded.commit(next) {
            self.refresh(Instant::now());
            tracing::debug!(
                target: targets::TREE_VIEW,
                tree = self.id,
                %reason,
                expanded = self.expanded.with(Vec::len),
                "expanded set committed"
            );
        }
        true
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The current selection.
    pub fn selected(&self) -> SelectedValue {
        self.selected.get()
    }

    /// Whether `value` is selected. Always false in `None` mode.
    pub fn is_selected(&self, value: &str) -> bool {
        let mode = self.config.selection_mode;
        self.selected.with(|selected| selected.is_selected(mode, value))
    }

    /// Whether the host owns the selection.
    pub fn is_selected_controlled(&self) -> bool {
        self.selected.is_controlled()
    }

    /// Whether `value` shows the mixed state.
    ///
    /// Only nodes with children in multiple mode can be indeterminate.
    pub fn is_indeterminate(&self, value: &str) -> bool {
        if self.config.selection_mode != SelectionMode::Multiple {
            return false;
        }
        self.indeterminate_in(&self.model.read(), value)
    }

    fn indeterminate_in(&self, model: &TreeModel, value: &str) -> bool {
        if self.config.selection_mode != SelectionMode::Multiple || !model.has_children(value) {
            return false;
        }
        let descendants = model.descendants(value);
        let current: Vec<String> = self.selected.with(|s| s.values().into_iter().map(str::to_string).collect());
        selection::is_indeterminate(&current, value, &descendants)
    }

    /// Toggle the selection of `value` according to the selection mode.
    ///
    /// Single mode replaces the selection, or clears it when `value` is
    /// already selected. Multiple mode toggles a leaf's membership and
    /// selects or deselects a node together with all of its descendants.
    ///
    /// Returns `false` in `None` mode, for unknown values, or when a slot
    /// canceled the change.
    pub fn handle_selection(&self, value: &str, reason: InteractionReason) -> bool {
        let mode = self.config.selection_mode;
        if mode == SelectionMode::None {
            return false;
        }
        let descendants = {
            let model = self.model.read();
            if !model.contains(value) {
                return false;
            }
            match mode {
                SelectionMode::Multiple => model.descendants(value),
                _ => Vec::new(),
            }
        };

        let current = self.selected.get();
        let next = next_selection(mode, &current, value, &descendants);
        let details = ChangeEventDetails::new(reason);
        self.selected_changed.emit((next.clone(), details.clone()));
        if details.is_canceled() {
            tracing::debug!(target: targets::TREE_VIEW, tree = self.id, value, %reason, "selection change canceled");
            return false;
        }

        // Re-run the toggle against a selection a slot committed meanwhile.
        let next = self.selected.with(|live| {
            if *live == current {
                next
            } else {
                next_selection(mode, live, value, &descendants)
            }
        });
        if self.selected.commit(next) {
            tracing::debug!(
                target: targets::TREE_VIEW,
                tree = self.id,
                value,
                %reason,
                selected = %self.selected.get(),
                "selection committed"
            );
        }
        true
    }

    /// Programmatic [`handle_selection`](Self::handle_selection).
    pub fn toggle_selection(&self, value: &str) -> bool {
        self.handle_selection(value, InteractionReason::None)
    }

    /// Push a host-owned selection.
    pub fn set_selected(&self, selected: SelectedValue) -> Result<bool> {
        Ok(self.selected.sync(selected)?)
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// The node whose content currently holds focus.
    pub fn active_value(&self) -> Option<String> {
        self.active_value.get()
    }

    /// Move focus to `value`'s content, or clear it with `None`.
    ///
    /// Emits [`item_highlighted`](Self::item_highlighted) with the node's
    /// position in the flat list. Unknown values are ignored.
    pub fn set_active_value(&self, value: Option<&str>, reason: InteractionReason) -> bool {
        let index = match value {
            Some(v) => {
                if !self.model.read().contains(v) {
                    return false;
                }
                self.flat_position(v)
            }
            None => None,
        };

        self.active_value.set(value.map(str::to_string));
        tracing::debug!(target: targets::TREE_VIEW, tree = self.id, value, index, %reason, "item highlighted");
        self.item_highlighted.emit((
            value.map(str::to_string),
            HighlightEventDetails::new(reason, index),
        ));
        true
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// A snapshot of the flat traversal list.
    pub fn flat_items(&self) -> Vec<FlatTreeItem> {
        self.flat_items.read().clone()
    }

    /// Read the flat traversal list without cloning.
    ///
    /// The list stays read-locked while `f` runs, so `f` must not call
    /// back into the root. Use [`flat_items`](Self::flat_items) for a
    /// snapshot that may be held across state changes.
    pub fn with_flat_items<R>(&self, f: impl FnOnce(&[FlatTreeItem]) -> R) -> R {
        f(&self.flat_items.read())
    }

    /// Position of `value` in the flat traversal list.
    pub fn flat_position(&self, value: &str) -> Option<usize> {
        position_of(&self.flat_items.read(), value)
    }

    /// Read the node model.
    ///
    /// The model stays read-locked while `f` runs. Calling back into the
    /// root from `f` (toggling expansion, adding or moving items) deadlocks.
    pub fn with_model<R>(&self, f: impl FnOnce(&TreeModel) -> R) -> R {
        f(&self.model.read())
    }

    /// All descendants of `value` in pre-order, regardless of expansion.
    pub fn descendants(&self, value: &str) -> Vec<String> {
        self.model.read().descendants(value)
    }

    /// Whether `value` is a node of this tree.
    pub fn contains(&self, value: &str) -> bool {
        self.model.read().contains(value)
    }

    /// The item handle for `value`.
    pub fn item(&self, value: &str) -> Result<TreeViewItem<'_>> {
        TreeViewItem::new(self, value)
    }

    /// Item handles for every node in declared order.
    pub fn items(&self) -> Vec<TreeViewItem<'_>> {
        let values: Vec<String> = {
            let model = self.model.read();
            model
                .pre_order()
                .into_iter()
                .filter_map(|key| model.node(key).map(|n| n.value().to_string()))
                .collect()
        };
        values
            .iter()
            .filter_map(|value| TreeViewItem::new(self, value).ok())
            .collect()
    }

    /// Id of `value`'s content element, unique across trees.
    pub fn content_id(&self, value: &str) -> Option<String> {
        let key = self.model.read().key_of(value)?;
        Some(format!("arbor-{}-item-{}", self.id, key.data().as_ffi()))
    }

    /// Insert a node (and its declared subtree) under `parent`, or at the top level.
    pub fn add_item(&self, parent: Option<&str>, item: &ItemDefinition) -> Result<()> {
        if self.config.virtualized {
            check_indices(item, parent)?;
        }
        self.model.write().insert(parent, item)?;
        self.refresh(Instant::now());
        Ok(())
    }

    /// Remove a node and its subtree. Returns the removed values.
    pub fn remove_item(&self, value: &str) -> Option<Vec<String>> {
        let removed = self.model.write().remove(value)?;
        let active_removed = self
            .active_value
            .with(|active| active.as_ref().is_some_and(|a| removed.contains(a)));
        if active_removed {
            self.active_value.set(None);
        }
        self.refresh(Instant::now());
        Some(removed)
    }

    /// Reparent `source` as the last child of `target`.
    pub fn move_item(&self, source: &str, target: &str) -> Result<()> {
        self.model.write().move_node(source, target)?;
        self.refresh(Instant::now());
        Ok(())
    }

    // =========================================================================
    // Group presence
    // =========================================================================

    /// Presence of `value`'s child group, if it declares one.
    pub fn group_presence(&self, value: &str) -> Option<Presence> {
        let key = self.model.read().key_of(value)?;
        self.presence.lock().get(&key).cloned()
    }

    /// Progress group exit transitions up to `now`.
    ///
    /// Returns the number of groups whose presence changed.
    pub fn advance_transitions(&self, now: Instant) -> usize {
        self.presence
            .lock()
            .values_mut()
            .map(|presence| presence.advance(now))
            .filter(|changed| *changed)
            .count()
    }

    /// Exit transition delay of collapsing groups.
    pub fn exit_transition(&self) -> Duration {
        self.config.exit_transition()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Attributes of the tree container.
    pub fn attributes(&self) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.set_role(AccessibleRole::Tree);
        attrs.set(names::DIR, self.config.direction.as_str());
        if let Some(label) = &self.config.aria_label {
            attrs.set(names::ARIA_LABEL, label.as_str());
        }
        if let Some(labelledby) = &self.config.aria_labelledby {
            attrs.set(names::ARIA_LABELLEDBY, labelledby.as_str());
        }
        if self.config.selection_mode == SelectionMode::Multiple {
            attrs.set(names::ARIA_MULTISELECTABLE, "true");
        }
        attrs.set_flag(names::DATA_DISABLED, self.config.disabled);
        attrs.set_flag(names::DATA_MULTIPLE, self.config.selection_mode == SelectionMode::Multiple);
        attrs
    }

    /// Render the tree as text for debugging.
    pub fn format_tree(&self, options: &TreeFormatOptions) -> String {
        let model = self.model.read();
        let mut output = String::new();
        let roots = model.root_keys();
        if roots.is_empty() {
            output.push_str("(empty)\n");
        }
        for (i, &key) in roots.iter().enumerate() {
            self.format_node(&model, key, &[], i + 1 == roots.len(), options, &mut output);
        }
        output
    }

    fn format_node(
        &self,
        model: &TreeModel,
        key: NodeKey,
        ancestors_last: &[bool],
        is_last: bool,
        options: &TreeFormatOptions,
        output: &mut String,
    ) {
        let depth = ancestors_last.len();
        if options.max_depth.is_some_and(|max| depth > max) {
            return;
        }
        let Some(node) = model.node(key) else {
            return;
        };
        let value = node.value();
        let expanded = self.is_expanded(value);

        output.push_str(&options.prefix(ancestors_last, is_last));
        output.push_str(value);
        if options.show_state {
            let mut state = Vec::new();
            if node.has_children() {
                state.push(if expanded { "expanded" } else { "collapsed" });
            }
            if self.is_selected(value) {
                state.push("selected");
            } else if self.indeterminate_in(model, value) {
                state.push("indeterminate");
            }
            if node.is_disabled() || self.config.disabled {
                state.push("disabled");
            }
            if !state.is_empty() {
                output.push_str(&format!(" [{}]", state.join(", ")));
            }
        }
        output.push('\n');

        if !expanded && !options.show_collapsed {
            return;
        }
        let mut path = ancestors_last.to_vec();
        path.push(is_last);
        let children = node.children();
        for (i, &child) in children.iter().enumerate() {
            self.format_node(model, child, &path, i + 1 == children.len(), options, output);
        }
    }

    pub(crate) fn level_of_key(&self, key: NodeKey) -> usize {
        self.model.read().level_of_key(key)
    }

    fn refresh(&self, now: Instant) {
        let count = self.rebuild(now);
        self.flat_items_changed.emit(count);
    }

    fn rebuild(&self, now: Instant) -> usize {
        let model = self.model.read();
        let rows = self
            .expanded
            .with(|expanded| flatten_visible(&model, |v| expanded.iter().any(|e| e == v), self.config.disabled));
        let count = rows.len();
        *self.flat_items.write() = rows;

        let exit = self.config.exit_transition();
        let mut presence = self.presence.lock();
        presence.retain(|key, _| model.node(*key).is_some_and(|n| n.has_children()));
        for key in model.pre_order() {
            let Some(node) = model.node(key) else {
                continue;
            };
            let Some(group) = node.group() else {
                continue;
            };
            let open = self.is_expanded(node.value());
            presence
                .entry(key)
                .and_modify(|p| {
                    p.set_open(open, now);
                })
                .or_insert_with(|| Presence::new(open, group.keeps_children_present(), exit));
        }
        count
    }
}

/// An edit to the expanded set, replayable on top of a newer set.
enum ExpansionChange {
    Add(Vec<String>),
    Remove(String),
}

impl ExpansionChange {
    fn apply(&self, current: &[String]) -> Vec<String> {
        match self {
            Self::Add(values) => {
                let mut next = current.to_vec();
                for value in values {
                    if !next.contains(value) {
                        next.push(value.clone());
                    }
                }
                next
            }
            Self::Remove(value) => current.iter().filter(|v| *v != value).cloned().collect(),
        }
    }
}

fn next_selection(mode: SelectionMode, current: &SelectedValue, value: &str, descendants: &[String]) -> SelectedValue {
    match mode {
        SelectionMode::None => current.clone(),
        SelectionMode::Single => {
            let selected = current.values().first().map(|v| v.to_string());
            SelectedValue::Single(selection::toggle_single(selected.as_deref(), value))
        }
        SelectionMode::Multiple => {
            let current: Vec<String> = current.values().into_iter().map(str::to_string).collect();
            let next = if descendants.is_empty() {
                selection::toggle_leaf(&current, value)
            } else {
                selection::toggle_hierarchical(&current, value, descendants)
            };
            SelectedValue::Multiple(next)
        }
    }
}

fn check_indices(item: &ItemDefinition, parent: Option<&str>) -> Result<()> {
    let value = match item.value.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => return Err(TreeViewError::missing_value(parent)),
    };
    if item.index.is_none() {
        return Err(TreeViewError::MissingIndex(value.to_string()));
    }
    if let Some(group) = &item.group {
        for child in &group.items {
            check_indices(child, Some(value))?;
        }
    }
    Ok(())
}

impl std::fmt::Debug for TreeViewRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeViewRoot")
            .field("id", &self.id)
            .field("mode", &self.config.selection_mode)
            .field("nodes", &self.model.read().len())
            .field("expanded", &self.expanded.get())
            .field("selected", &self.selected.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(TreeViewRoot: Send, Sync);

/// Builder for [`TreeViewRoot`].
///
/// Values passed to [`expanded`](Self::expanded) and
/// [`selected`](Self::selected) make that state controlled: the root then
/// only reports requested changes and the host pushes the new value back
/// with `set_expanded` / `set_selected`.
#[derive(Debug, Clone)]
pub struct TreeViewBuilder {
    definition: TreeDefinition,
    config: TreeViewConfig,
    expanded: Option<Vec<String>>,
    selected: Option<SelectedValue>,
}

impl TreeViewBuilder {
    /// Create a builder with the default configuration.
    pub fn new(definition: TreeDefinition) -> Self {
        Self {
            definition,
            config: TreeViewConfig::default(),
            expanded: None,
            selected: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: TreeViewConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the selection mode.
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.config.selection_mode = mode;
        self
    }

    /// Disable the whole tree.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Wrap ArrowUp/ArrowDown at the ends of the list.
    pub fn loop_focus(mut self, loop_focus: bool) -> Self {
        self.config.loop_focus = loop_focus;
        self
    }

    /// Mark the tree virtualized.
    pub fn virtualized(mut self, virtualized: bool) -> Self {
        self.config.virtualized = virtualized;
        self
    }

    /// Set the accessible label.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.config.aria_label = Some(label.into());
        self
    }

    /// Set the id of the labelling element.
    pub fn aria_labelledby(mut self, id: impl Into<String>) -> Self {
        self.config.aria_labelledby = Some(id.into());
        self
    }

    /// Initially expanded values (uncontrolled).
    pub fn default_expanded<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.default_expanded = values.into_iter().map(Into::into).collect();
        self
    }

    /// Initial selection (uncontrolled).
    pub fn default_selected(mut self, selected: SelectedValue) -> Self {
        self.config.default_selected = Some(selected);
        self
    }

    /// Controlled expanded set.
    pub fn expanded<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Controlled selection.
    pub fn selected(mut self, selected: SelectedValue) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Exit transition delay for collapsing groups.
    pub fn exit_transition(mut self, delay: Duration) -> Self {
        self.config = self.config.with_exit_transition(delay);
        self
    }

    /// Validate the definition and build the root.
    pub fn build(self) -> Result<TreeViewRoot> {
        let expanded = match self.expanded {
            Some(values) => Controllable::controlled("expanded", values),
            None => Controllable::uncontrolled("expanded", self.config.default_expanded.clone()),
        };
        let selected = match self.selected {
            Some(value) => Controllable::controlled("selected", value),
            None => Controllable::uncontrolled("selected", self.config.initial_selected()),
        };
        TreeViewRoot::from_parts(&self.definition, self.config, expanded, selected)
    }
}

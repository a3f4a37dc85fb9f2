use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::{
    animation::action::ActionSequence,
    widget::tree::{Widget, WidgetId, WidgetTree},
};

/// Widgets by name. Names may repeat; each bucket keeps document order and its first entry is
/// the canonical match.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    buckets: IndexMap<String, Vec<WidgetId>>,
}

impl NameIndex {
    pub(crate) fn insert(&mut self, name: String, id: WidgetId) {
        self.buckets.entry(name).or_default().push(id);
    }

    /// First widget registered under `name`.
    pub fn first(&self, name: &str) -> Option<WidgetId> {
        self.all(name).first().copied()
    }

    /// Every widget registered under `name`, in document order.
    pub fn all(&self, name: &str) -> &[WidgetId] {
        self.buckets.get(name).map_or(&[][..], Vec::as_slice)
    }

    /// Distinct names, in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no widget was registered.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Result of a build: the widget tree, its name index, and the compiled actions.
#[derive(Clone, Debug)]
pub struct UiScene {
    pub(crate) tree: WidgetTree,
    pub(crate) root: Option<WidgetId>,
    pub(crate) names: NameIndex,
    pub(crate) action_widgets: BTreeMap<i32, WidgetId>,
    pub(crate) actions: BTreeMap<i32, ActionSequence>,
}

impl UiScene {
    /// Root widget id; `None` when the root node's kind could not be built.
    pub fn root_id(&self) -> Option<WidgetId> {
        self.root
    }

    /// Root widget.
    pub fn root(&self) -> Option<&Widget> {
        self.root.and_then(|id| self.tree.get(id))
    }

    /// All built widgets.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Widget by id.
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.tree.get(id)
    }

    /// First widget named `name`.
    pub fn find_widget(&self, name: &str) -> Option<&Widget> {
        self.names.first(name).and_then(|id| self.tree.get(id))
    }

    /// Every widget named `name`, in document order.
    pub fn find_widgets(&self, name: &str) -> Vec<&Widget> {
        self.names
            .all(name)
            .iter()
            .filter_map(|&id| self.tree.get(id))
            .collect()
    }

    /// Compiled move sequence for an action tag.
    pub fn find_action(&self, action_tag: i32) -> Option<&ActionSequence> {
        self.actions.get(&action_tag)
    }

    /// Name index.
    pub fn name_index(&self) -> &NameIndex {
        &self.names
    }

    /// Every compiled sequence by action tag.
    pub fn actions(&self) -> &BTreeMap<i32, ActionSequence> {
        &self.actions
    }

    /// Widget registered under an action tag (the last one built wins).
    pub fn action_widget(&self, action_tag: i32) -> Option<WidgetId> {
        self.action_widgets.get(&action_tag).copied()
    }

    /// Sequences paired with the widget they animate; tags without a widget are skipped.
    pub fn bound_actions(&self) -> impl Iterator<Item = (WidgetId, &ActionSequence)> {
        self.actions
            .iter()
            .filter_map(|(tag, seq)| self.action_widget(*tag).map(|id| (id, seq)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/build/scene.rs"]
mod tests;

use super::{LabelPair, NodeId};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Committed configuration of one node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub destination: Option<String>,
    /// Skill assignment in stored form (values joined with `SKILL_SEPARATOR`).
    pub skill: Option<String>,
    pub label_pair: Option<LabelPair>,
    pub display_name: Option<String>,
}

impl NodeEntry {
    fn is_empty(&self) -> bool {
        self.destination.is_none()
            && self.skill.is_none()
            && self.label_pair.is_none()
            && self.display_name.is_none()
    }
}

/// Authoritative mapping from node id to committed configuration.
///
/// Only the editor session writes here. Entries appear on the first commit
/// that stores something and disappear once every attribute has been cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStore {
    entries: AHashMap<NodeId, NodeEntry>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, id: &str) -> Option<&NodeEntry> {
        self.entries.get(id)
    }

    pub fn destination(&self, id: &str) -> Option<&str> {
        self.entry(id).and_then(|e| e.destination.as_deref())
    }

    pub fn skill(&self, id: &str) -> Option<&str> {
        self.entry(id).and_then(|e| e.skill.as_deref())
    }

    pub fn label_pair(&self, id: &str) -> Option<&LabelPair> {
        self.entry(id).and_then(|e| e.label_pair.as_ref())
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.entry(id).and_then(|e| e.display_name.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids with a committed entry, sorted for stable output.
    pub fn node_ids(&self) -> Vec<&NodeId> {
        let mut ids: Vec<_> = self.entries.keys().collect();
        ids.sort();
        ids
    }

    pub(crate) fn set_destination(&mut self, id: &NodeId, label: &str) {
        self.entries.entry(id.clone()).or_default().destination = Some(label.to_string());
    }

    pub(crate) fn set_skill(&mut self, id: &NodeId, stored: String) {
        self.entries.entry(id.clone()).or_default().skill = Some(stored);
    }

    pub(crate) fn set_label_pair(&mut self, id: &NodeId, pair: LabelPair) {
        self.entries.entry(id.clone()).or_default().label_pair = Some(pair);
    }

    pub(crate) fn set_display_name(&mut self, id: &NodeId, name: &str) {
        self.entries.entry(id.clone()).or_default().display_name = Some(name.to_string());
    }

    pub(crate) fn remove_skill(&mut self, id: &NodeId) -> Option<String> {
        self.update_existing(id, |e| e.skill.take())
    }

    pub(crate) fn remove_label_pair(&mut self, id: &NodeId) -> Option<LabelPair> {
        self.update_existing(id, |e| e.label_pair.take())
    }

    fn update_existing<T>(
        &mut self,
        id: &NodeId,
        f: impl FnOnce(&mut NodeEntry) -> Option<T>,
    ) -> Option<T> {
        let entry = self.entries.get_mut(id)?;
        let removed = f(entry);
        if entry.is_empty() {
            self.entries.remove(id);
        }
        removed
    }
}

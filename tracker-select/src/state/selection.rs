use std::collections::BTreeSet;
use tracker_api::endpoints::TransactionId;

/// Ids of the transaction rows currently marked for a bulk action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<TransactionId>,
}

/// What a single mutation did to the selection.
///
/// Persisting replays the delta on top of the stored snapshot instead of
/// overwriting it with the in-memory set, so ids stored by another writer
/// survive unless this mutation cleared or removed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    pub cleared: bool,
    pub added: BTreeSet<TransactionId>,
    pub removed: BTreeSet<TransactionId>,
}

impl SelectionDelta {
    pub fn is_empty(&self) -> bool {
        !self.cleared && self.added.is_empty() && self.removed.is_empty()
    }
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = TransactionId> + '_ {
        self.ids.iter().copied()
    }

    /// Snapshot of the selected ids in ascending order
    pub fn ids(&self) -> Vec<TransactionId> {
        self.iter().collect()
    }

    pub fn toggle(&mut self, id: TransactionId, selected: bool) -> SelectionDelta {
        if selected {
            self.select_all([id])
        } else {
            self.remove_all([id])
        }
    }

    pub fn select_all(&mut self, ids: impl IntoIterator<Item = TransactionId>) -> SelectionDelta {
        let delta = SelectionDelta {
            added: ids.into_iter().collect(),
            ..Default::default()
        };
        self.apply(&delta);
        delta
    }

    pub fn remove_all(&mut self, ids: impl IntoIterator<Item = TransactionId>) -> SelectionDelta {
        let delta = SelectionDelta {
            removed: ids.into_iter().collect(),
            ..Default::default()
        };
        self.apply(&delta);
        delta
    }

    pub fn clear(&mut self) -> SelectionDelta {
        let delta = SelectionDelta {
            cleared: true,
            ..Default::default()
        };
        self.apply(&delta);
        delta
    }

    pub fn apply(&mut self, delta: &SelectionDelta) {
        if delta.cleared {
            self.ids.clear();
        }
        self.ids.extend(delta.added.iter().copied());
        for id in &delta.removed {
            self.ids.remove(id);
        }
    }

    pub fn summary_text(&self) -> String {
        summary_text(self.len())
    }
}

impl FromIterator<TransactionId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = TransactionId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

pub fn summary_text(count: usize) -> String {
    match count {
        0 => "No transactions selected".to_string(),
        1 => "1 transaction selected".to_string(),
        n => format!("{} transactions selected", n),
    }
}

//! Undo/redo as a linear stack of full scene snapshots.
//!
//! The stack always holds at least one snapshot (the empty scene at start).
//! Committing after an undo discards the snapshots past the current index.

use crate::scene::Scene;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Scene>,
    index: usize,
    limit: Option<usize>,
}

impl History {
    /// Creates a history holding one empty snapshot.
    ///
    /// `limit` caps the number of snapshots kept; `None` keeps everything.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            snapshots: vec![Scene::new()],
            index: 0,
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// Appends `scene` after the current index, discarding any redo branch.
    pub fn commit(&mut self, scene: Scene) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(scene);
        if let Some(limit) = self.limit {
            let excess = self.snapshots.len().saturating_sub(limit);
            if excess > 0 {
                self.snapshots.drain(..excess);
                tracing::trace!("History limit {} reached, dropped {} snapshot(s)", limit, excess);
            }
        }
        self.index = self.snapshots.len() - 1;
    }

    /// Steps back one snapshot. `None` at the oldest snapshot.
    pub fn undo(&mut self) -> Option<&Scene> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.snapshots.get(self.index)
    }

    /// Steps forward one snapshot. `None` at the newest snapshot.
    pub fn redo(&mut self) -> Option<&Scene> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        self.snapshots.get(self.index)
    }

    pub fn current(&self) -> &Scene {
        &self.snapshots[self.index]
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn undo_depth(&self) -> usize {
        self.index
    }

    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - 1 - self.index
    }

    /// Drops every snapshot and starts again from `base`.
    pub fn clear(&mut self, base: Scene) {
        self.snapshots.clear();
        self.snapshots.push(base);
        self.index = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(None)
    }
}

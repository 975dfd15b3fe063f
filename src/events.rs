use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Raised after a cell is written or explicitly re-triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellChanged {
    pub x: i32,
    pub y: i32,
}

/// Handle returned by [`Grid::subscribe`], used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// Change callback. Gets the grid read-only and the changed coordinate.
pub type Listener<T> = Box<dyn FnMut(&Grid<T>, CellChanged)>;

/// Listeners for one grid, invoked in registration order.
pub struct ChangeListeners<T> {
    next_id: u64,
    entries: Vec<(SubscriberId, Listener<T>)>,
}

impl<T> ChangeListeners<T> {
    pub fn new() -> Self {
        ChangeListeners {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Listener<T>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns false if `id` was never registered or is already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn notify(&mut self, grid: &Grid<T>, event: CellChanged) {
        for (_, listener) in self.entries.iter_mut() {
            listener(grid, event);
        }
    }
}

impl<T> Default for ChangeListeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeListeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("next_id", &self.next_id)
            .field("listeners", &self.entries.len())
            .finish()
    }
}

use super::History;
use crate::{Entry, Originator, Slot};
use heapless::Vec;

#[derive(Debug)]
enum CheckpointEntry<T, const N: usize> {
    Save { redo_tail: Vec<Entry<T>, N> },
    Undo,
    Redo,
}

/// Wraps a [`History`] and gives it checkpoint functionality.
///
/// Every `save`, `undo` and `redo` made through the checkpoint is
/// recorded. [`commit`](Checkpoint::commit) keeps them,
/// [`cancel`](Checkpoint::cancel) rolls them back in reverse order,
/// leaving the history and the originator where they were when the
/// checkpoint was created.
///
/// Only operations made through the checkpoint are tracked: mutating the
/// originator directly while a checkpoint is open can not be rolled back.
#[derive(Debug)]
pub struct Checkpoint<'a, T, const N: usize, const M: usize, S> {
    history: &'a mut History<T, N, S>,
    entries: Vec<CheckpointEntry<T, N>, M>,
}

impl<T, const N: usize, const M: usize, S> Checkpoint<'_, T, N, M, S> {
    /// Commits the changes and consumes the checkpoint.
    pub fn commit(self) {}
}

impl<T: Clone, const N: usize, const M: usize, S: Slot> Checkpoint<'_, T, N, M, S> {
    /// Calls the [`History::save`] method.
    pub fn save<O: Originator<Memento = T>>(&mut self, originator: &O) {
        let redo_tail = self.history.redo.clone();
        self.history.save(originator);
        if self
            .entries
            .push(CheckpointEntry::Save { redo_tail })
            .is_err()
        {
            panic!("Entry limit exceeded!!")
        }
    }

    /// Calls the [`History::undo`] method.
    pub fn undo<O: Originator<Memento = T>>(&mut self, originator: &mut O) -> bool {
        if !self.history.undo(originator) {
            return false;
        }
        if self.entries.push(CheckpointEntry::Undo).is_err() {
            panic!("Entry limit exceeded!!")
        }
        true
    }

    /// Calls the [`History::redo`] method.
    pub fn redo<O: Originator<Memento = T>>(&mut self, originator: &mut O) -> bool {
        if !self.history.redo(originator) {
            return false;
        }
        if self.entries.push(CheckpointEntry::Redo).is_err() {
            panic!("Entry limit exceeded!!")
        }
        true
    }

    /// Cancels the changes and consumes the checkpoint.
    pub fn cancel<O: Originator<Memento = T>>(self, originator: &mut O) {
        let Checkpoint {
            history,
            mut entries,
        } = self;
        entries.as_mut_slice().reverse();
        for entry in entries {
            match entry {
                CheckpointEntry::Save { redo_tail } => {
                    // Undoing a save removes the pushed entry and brings
                    // back the redo lineage the save invalidated.
                    let _ = history.undo.pop_back();
                    history.redo = redo_tail;
                }
                CheckpointEntry::Undo => {
                    history.redo(originator);
                }
                CheckpointEntry::Redo => {
                    history.undo(originator);
                }
            }
        }
    }
}

impl<'a, T, const N: usize, const M: usize, S> From<&'a mut History<T, N, S>>
    for Checkpoint<'a, T, N, M, S>
{
    fn from(history: &'a mut History<T, N, S>) -> Self {
        Checkpoint {
            history,
            entries: Vec::new(),
        }
    }
}

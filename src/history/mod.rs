//! A caretaker for captured mementos.

mod builder;
mod checkpoint;
mod display;

pub use builder::Builder;
pub use checkpoint::Checkpoint;
pub use display::Display;

use crate::socket::{Signal, Socket};
use crate::{Entry, Nop, Originator, Slot};
use core::num::NonZeroUsize;
use heapless::{Deque, Vec};

/// The caretaker of captured mementos.
///
/// A `History` keeps an undo stack and a redo stack of [`Entry`]s holding
/// mementos of type `T`, with the most recent entry on top of each. It
/// drives [`save`](History::save), [`undo`](History::undo) and
/// [`redo`](History::redo) against an [`Originator`] passed into each
/// call; it never owns one.
///
/// Both stacks are bounded by the const capacity `N`. The runtime
/// [`limit`](Builder::limit) can bound the history further, in which case
/// a save at the limit evicts the oldest undo entry first.
///
/// # Examples
/// ```
/// use memento::{Editor, History};
///
/// let mut editor = Editor::<256>::new();
/// let mut history = History::<_, 32>::new();
///
/// editor.type_words("Hello World");
/// history.save(&editor);
/// editor.type_words("Hii Bro");
///
/// history.undo(&mut editor);
/// assert_eq!(editor.content(), "Hello World");
/// history.redo(&mut editor);
/// assert_eq!(editor.content(), "Hello WorldHii Bro");
/// ```
#[derive(Debug)]
pub struct History<T, const N: usize, S = Nop> {
    pub(crate) limit: NonZeroUsize,
    pub(crate) socket: Socket<S>,
    pub(crate) undo: Deque<Entry<T>, N>,
    pub(crate) redo: Vec<Entry<T>, N>,
}

impl<T, const N: usize> History<T, N> {
    /// Returns a new history.
    pub fn new() -> History<T, N> {
        History::builder().build()
    }
}

impl<T, const N: usize, S> History<T, N, S> {
    /// Returns a builder for a history.
    pub fn builder() -> Builder<T, N, S> {
        Builder::default()
    }

    /// Returns `true` if the history can undo.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if the history can redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the number of entries on the undo stack.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// Returns the number of entries on the redo stack.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Returns `true` if both stacks are empty.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }

    /// Returns the limit of the history.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Returns an iterator over the entries on the undo stack, oldest
    /// first.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<T>> {
        self.undo.iter()
    }

    /// Returns an iterator over the entries on the redo stack, in the
    /// order they were pushed.
    pub fn redo_entries(&self) -> impl Iterator<Item = &Entry<T>> {
        self.redo.iter()
    }

    /// Connects the slot, returning the old one.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(slot)
    }

    /// Disconnects and returns the slot.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns a configurable display of the history.
    pub fn display<const SIZE: usize>(&self) -> Display<'_, T, N, SIZE, S> {
        Display::from(self)
    }
}

impl<T, const N: usize, S: Slot> History<T, N, S> {
    /// Captures the originator's current state onto the undo stack.
    ///
    /// A new save invalidates the redo lineage, so the redo stack is
    /// cleared. If the history is at its limit, the oldest undo entry is
    /// evicted first. Always succeeds.
    pub fn save<O: Originator<Memento = T>>(&mut self, originator: &O) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        while self.undo.is_full() || self.undo.len() >= self.limit.get() {
            if self.undo.pop_front().is_none() {
                break;
            }
        }
        let _ = self.undo.push_back(Entry::new(originator.save()));
        self.redo.clear();
        self.socket.emit_if(!could_undo, Signal::Undo(true));
        self.socket.emit_if(could_redo, Signal::Redo(false));
    }

    /// Moves the originator one step back in history.
    ///
    /// The originator's current state is pushed onto the redo stack
    /// before the popped memento is restored, which makes `undo` and
    /// [`redo`](History::redo) exact inverses. Returns `false` without
    /// touching the originator when the undo stack is empty.
    pub fn undo<O: Originator<Memento = T>>(&mut self, originator: &mut O) -> bool {
        let Some(entry) = self.undo.pop_back() else {
            return false;
        };
        let could_redo = self.can_redo();
        let _ = self.redo.push(Entry::new(originator.save()));
        originator.restore(entry.memento);
        self.socket.emit_if(!self.can_undo(), Signal::Undo(false));
        self.socket.emit_if(!could_redo, Signal::Redo(true));
        true
    }

    /// Moves the originator one step forward in history.
    ///
    /// Mirror image of [`undo`](History::undo): the current state is
    /// pushed onto the undo stack before the popped memento is restored.
    /// Returns `false` without touching the originator when the redo
    /// stack is empty.
    pub fn redo<O: Originator<Memento = T>>(&mut self, originator: &mut O) -> bool {
        let Some(entry) = self.redo.pop() else {
            return false;
        };
        let could_undo = self.can_undo();
        let _ = self.undo.push_back(Entry::new(originator.save()));
        originator.restore(entry.memento);
        self.socket.emit_if(!could_undo, Signal::Undo(true));
        self.socket.emit_if(!self.can_redo(), Signal::Redo(false));
        true
    }

    /// Repeatedly undoes or redoes until the undo stack holds `index`
    /// entries.
    ///
    /// Returns `false` and leaves everything unchanged when `index` is
    /// out of range.
    pub fn go_to<O: Originator<Memento = T>>(&mut self, originator: &mut O, index: usize) -> bool {
        if index > self.len() + self.redo_len() {
            return false;
        }
        while self.len() > index {
            self.undo(originator);
        }
        while self.len() < index {
            self.redo(originator);
        }
        true
    }

    /// Removes all entries from both stacks.
    ///
    /// The originator is left untouched.
    pub fn clear(&mut self) {
        let could_undo = self.can_undo();
        let could_redo = self.can_redo();
        while self.undo.pop_back().is_some() {}
        self.redo.clear();
        self.socket.emit_if(could_undo, Signal::Undo(false));
        self.socket.emit_if(could_redo, Signal::Redo(false));
    }
}

impl<T: Clone, const N: usize, S: Slot> History<T, N, S> {
    /// Returns a checkpoint that can roll the history back to this point.
    pub fn checkpoint<const M: usize>(&mut self) -> Checkpoint<'_, T, N, M, S> {
        Checkpoint::from(self)
    }
}

impl<T, const N: usize> Default for History<T, N> {
    fn default() -> History<T, N> {
        History::new()
    }
}

//! **A snapshot-based undo/redo library.**
//!
//! An implementation of the memento pattern: an [`Originator`] captures its
//! state as an opaque memento, and the [`History`] caretaker stores those
//! mementos on an undo stack and a redo stack. [`History::undo`] and
//! [`History::redo`] hand stored mementos back to the originator, moving it
//! one step backward or forward in time. The caretaker never looks inside
//! a memento.
//!
//! Both stacks live in fixed-capacity [`heapless`] containers parameterized
//! by a const capacity `N`. A runtime [`limit`](history::Builder::limit)
//! below the capacity makes the history bounded, evicting the oldest entry
//! when a new state is saved.
//!
//! A plain text [`Editor`] and its [`Snapshot`] memento are provided as the
//! canonical originator.
//!
//! # Examples
//! ```
//! use memento::{Editor, History};
//!
//! let mut editor = Editor::<256>::new();
//! let mut history = History::<_, 32>::new();
//!
//! editor.type_words("Java ");
//! history.save(&editor);
//! editor.type_words("Design ");
//! history.save(&editor);
//! editor.type_words("Patterns");
//! assert_eq!(editor.content(), "Java Design Patterns");
//!
//! assert!(history.undo(&mut editor));
//! assert_eq!(editor.content(), "Java Design ");
//! assert!(history.undo(&mut editor));
//! assert_eq!(editor.content(), "Java ");
//! assert!(history.redo(&mut editor));
//! assert_eq!(editor.content(), "Java Design ");
//! ```

#![warn(missing_docs, unsafe_code)]

mod editor;
mod entry;
pub mod history;
mod socket;

pub use crate::editor::{Editor, Snapshot};
pub use crate::entry::Entry;
pub use crate::history::History;
pub use crate::socket::{Nop, Signal, Slot};

/// Base functionality for all originators.
///
/// An originator owns some state, captures it as an immutable memento, and
/// can later restore itself from a previously captured memento.
///
/// The [`History`] only ever moves mementos between the originator and its
/// stacks, so the memento type stays opaque to everything but the
/// originator itself.
pub trait Originator {
    /// The memento type captured by this originator.
    type Memento;

    /// Captures the current state as a memento.
    fn save(&self) -> Self::Memento;

    /// Restores a previously captured state.
    ///
    /// After the call the originator's state is exactly the state the
    /// memento was captured from.
    fn restore(&mut self, memento: Self::Memento);
}

use crate::Originator;
use core::fmt::{self, Display, Formatter};
use heapless::String;

/// An immutable capture of an [`Editor`]'s content.
///
/// Snapshots have no identity beyond their value: two snapshots of the
/// same content compare equal. Once constructed a snapshot can not be
/// mutated, so it is safe to hand out by reference.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Snapshot<const SIZE: usize> {
    content: String<SIZE>,
}

impl<const SIZE: usize> Snapshot<SIZE> {
    /// Returns a snapshot of the provided content.
    pub fn new(content: String<SIZE>) -> Snapshot<SIZE> {
        Snapshot { content }
    }

    /// Returns the captured content, unchanged.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<const SIZE: usize> Display for Snapshot<SIZE> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.content)
    }
}

/// A plain text editor, the canonical originator.
///
/// The editor holds a single string of content, starting out empty.
/// Typing appends to the content, and [`Originator::save`] captures it as
/// a [`Snapshot`] that [`Originator::restore`] applies back verbatim.
///
/// # Examples
/// ```
/// use memento::{Editor, Originator};
///
/// let mut editor = Editor::<256>::new();
/// editor.type_words("Hello World");
/// let snapshot = editor.save();
/// editor.type_words("Hii Bro");
/// editor.restore(snapshot);
/// assert_eq!(editor.content(), "Hello World");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Editor<const SIZE: usize> {
    content: String<SIZE>,
}

impl<const SIZE: usize> Editor<SIZE> {
    /// Returns an editor with empty content.
    pub fn new() -> Editor<SIZE> {
        Editor {
            content: String::new(),
        }
    }

    /// Appends `words` to the content.
    ///
    /// Typing an empty string is legal and leaves the content untouched.
    /// Input past the remaining capacity is dropped.
    pub fn type_words(&mut self, words: &str) {
        for c in words.chars() {
            if self.content.push(c).is_err() {
                break;
            }
        }
    }

    /// Returns the current content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<const SIZE: usize> Originator for Editor<SIZE> {
    type Memento = Snapshot<SIZE>;

    fn save(&self) -> Snapshot<SIZE> {
        Snapshot {
            content: self.content.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot<SIZE>) {
        self.content = snapshot.content;
    }
}

use core::fmt::{self, Display, Formatter};
use core::ops::Deref;
use std::time::SystemTime;

/// Wrapper around a memento that records when it was captured.
#[derive(Clone, Debug)]
pub struct Entry<T> {
    pub(crate) memento: T,
    pub(crate) st: SystemTime,
}

impl<T> Entry<T> {
    pub(crate) fn new(memento: T) -> Entry<T> {
        Entry {
            memento,
            st: SystemTime::now(),
        }
    }

    /// Returns the time the memento was captured.
    pub fn st(&self) -> SystemTime {
        self.st
    }
}

impl<T> From<T> for Entry<T> {
    fn from(memento: T) -> Entry<T> {
        Entry::new(memento)
    }
}

impl<T> AsRef<T> for Entry<T> {
    fn as_ref(&self) -> &T {
        &self.memento
    }
}

impl<T> Deref for Entry<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.memento
    }
}

impl<T: Display> Display for Entry<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.memento.fmt(f)
    }
}

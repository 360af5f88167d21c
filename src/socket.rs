use core::fmt::{self, Debug, Formatter};

/// Notification about changes to the capabilities of a
/// [`History`](crate::History).
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Signal {
    /// Whether the history can undo anything.
    Undo(bool),
    /// Whether the history can redo anything.
    Redo(bool),
}

/// Handle for receiving [`Signal`]s from a [`History`](crate::History).
pub trait Slot {
    /// Receives a signal that has been emitted.
    fn on_emit(&mut self, signal: Signal);
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

/// Default slot that does nothing.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Nop;

impl Slot for Nop {
    fn on_emit(&mut self, _: Signal) {}
}

/// Holds the slot of the history and emits signals through it.
#[derive(Clone)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.0.replace(slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal);
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: Signal) {
        if cond {
            self.emit(signal);
        }
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Socket<S> {
        Socket(None)
    }
}

impl<S> Debug for Socket<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Socket")
            .field(&self.0.is_some())
            .finish()
    }
}

use super::History;
use crate::socket::Socket;
use crate::Nop;
use core::marker::PhantomData;
use core::num::NonZeroUsize;
use heapless::{Deque, Vec};

/// Builder for a [`History`].
///
/// # Examples
/// ```
/// # use memento::{Editor, History, Signal, Snapshot};
/// # let editor = Editor::<256>::new();
/// let mut history = History::<Snapshot<256>, 32, _>::builder()
///     .limit(10)
///     .connect(|signal: Signal| { dbg!(signal); })
///     .build();
/// # history.save(&editor);
/// ```
#[derive(Debug)]
pub struct Builder<T, const N: usize, S = Nop> {
    limit: NonZeroUsize,
    socket: Socket<S>,
    pd: PhantomData<T>,
}

impl<T, const N: usize, S> Builder<T, N, S> {
    /// Sets the `limit` of the history.
    ///
    /// Limits above the capacity `N` are clamped to it.
    ///
    /// # Panics
    /// Panics if `limit` is `0`.
    pub fn limit(mut self, limit: usize) -> Builder<T, N, S> {
        self.limit = NonZeroUsize::new(limit).expect("limit can not be `0`");
        self
    }

    /// Connects the slot.
    pub fn connect(mut self, slot: S) -> Builder<T, N, S> {
        self.socket = Socket::new(slot);
        self
    }

    /// Builds the history.
    pub fn build(self) -> History<T, N, S> {
        History {
            limit: self.limit,
            socket: self.socket,
            undo: Deque::new(),
            redo: Vec::new(),
        }
    }
}

impl<T, const N: usize, S> Default for Builder<T, N, S> {
    fn default() -> Builder<T, N, S> {
        Builder {
            limit: NonZeroUsize::new(usize::MAX).unwrap(),
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}

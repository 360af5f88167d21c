use super::History;
use crate::Entry;
use core::fmt::{self, Formatter, Write};
use heapless::String;
use std::time::SystemTime;

#[cfg(feature = "colored")]
use colored::Colorize;

/// Configurable display formatting for a [`History`].
///
/// Lists the entries of both stacks newest first, with a `*` marking the
/// current position and the capture time of each entry at the end of the
/// line.
///
/// # Examples
/// ```
/// # use memento::{Editor, History};
/// # let mut editor = Editor::<256>::new();
/// # let mut history = History::<_, 32>::new();
/// # history.save(&editor);
/// println!("{}", history.display::<64>());
/// ```
pub struct Display<'a, T, const N: usize, const SIZE: usize, S> {
    history: &'a History<T, N, S>,
    st_fmt: Option<&'a dyn Fn(SystemTime, SystemTime) -> String<SIZE>>,
}

impl<'a, T, const N: usize, const SIZE: usize, S> Display<'a, T, N, SIZE, S> {
    /// Sets the formatting used for the capture time of entries.
    ///
    /// The formatter receives the current time and the capture time.
    pub fn set_st_fmt(
        mut self,
        st_fmt: &'a dyn Fn(SystemTime, SystemTime) -> String<SIZE>,
    ) -> Self {
        self.st_fmt = Some(st_fmt);
        self
    }

    #[cfg(feature = "colored")]
    fn fmt_position(&self, f: &mut Formatter, at: usize, current: usize) -> fmt::Result {
        let position = at.to_string().yellow();
        if at == current {
            write!(f, "{} {position}", "*".red())
        } else {
            write!(f, "  {position}")
        }
    }

    #[cfg(not(feature = "colored"))]
    fn fmt_position(&self, f: &mut Formatter, at: usize, current: usize) -> fmt::Result {
        if at == current {
            write!(f, "* {at}")
        } else {
            write!(f, "  {at}")
        }
    }

    fn fmt_st(&self, f: &mut Formatter, now: SystemTime, at: SystemTime) -> fmt::Result {
        let text = match self.st_fmt {
            Some(st_fmt) => st_fmt(now, at),
            None => default_st_fmt(now, at),
        };
        write!(f, " {text}")
    }
}

impl<T: fmt::Display, const N: usize, const SIZE: usize, S> Display<'_, T, N, SIZE, S> {
    fn fmt_entry(
        &self,
        f: &mut Formatter,
        at: usize,
        current: usize,
        entry: Option<&Entry<T>>,
        now: SystemTime,
    ) -> fmt::Result {
        self.fmt_position(f, at, current)?;
        if let Some(entry) = entry {
            write!(f, " {entry}")?;
            self.fmt_st(f, now, entry.st())?;
        }
        writeln!(f)
    }
}

impl<'a, T, const N: usize, const SIZE: usize, S> From<&'a History<T, N, S>>
    for Display<'a, T, N, SIZE, S>
{
    fn from(history: &'a History<T, N, S>) -> Self {
        Display {
            history,
            st_fmt: None,
        }
    }
}

impl<T: fmt::Display, const N: usize, const SIZE: usize, S> fmt::Display
    for Display<'_, T, N, SIZE, S>
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let now = SystemTime::now();
        let current = self.history.len();
        let mut at = current + self.history.redo_len();
        // The bottom of the redo stack is the farthest future state.
        for entry in self.history.redo_entries() {
            self.fmt_entry(f, at, current, Some(entry), now)?;
            at -= 1;
        }
        let (front, back) = self.history.undo.as_slices();
        for entry in back.iter().rev().chain(front.iter().rev()) {
            self.fmt_entry(f, at, current, Some(entry), now)?;
            at -= 1;
        }
        self.fmt_entry(f, 0, current, None, now)
    }
}

fn default_st_fmt<const SIZE: usize>(now: SystemTime, at: SystemTime) -> String<SIZE> {
    let mut out = String::new();
    let elapsed = now.duration_since(at).unwrap_or_default();
    let _ = write!(out, "{}s ago", elapsed.as_secs());
    out
}

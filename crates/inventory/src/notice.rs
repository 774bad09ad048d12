//! Operator-facing notices.
//!
//! Warehouse operations that handle their own failures report through a
//! [`Notify`] sink instead of returning the error. [`CompletionNotice`] emits
//! the closing line of an operation when it goes out of scope, whichever
//! path the operation took.

use std::cell::RefCell;

/// Sink for lines addressed to the warehouse operator.
pub trait Notify {
    fn notify(&self, line: &str);
}

impl<N: Notify + ?Sized> Notify for &N {
    fn notify(&self, line: &str) {
        (**self).notify(line)
    }
}

/// Prints every notice on its own stdout line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&self, line: &str) {
        println!("{line}");
    }
}

/// Keeps notices in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    lines: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns and forgets everything recorded so far.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.borrow().iter().any(|l| l == line)
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Scoped guard that emits `line` when dropped.
#[must_use = "the notice is emitted when the guard is dropped"]
pub struct CompletionNotice<'a, N: Notify + ?Sized> {
    notifier: &'a N,
    line: String,
}

impl<'a, N: Notify + ?Sized> CompletionNotice<'a, N> {
    pub fn new(notifier: &'a N, line: impl Into<String>) -> Self {
        Self {
            notifier,
            line: line.into(),
        }
    }
}

impl<N: Notify + ?Sized> Drop for CompletionNotice<'_, N> {
    fn drop(&mut self) {
        tracing::debug!(notice = %self.line, "operation finished");
        self.notifier.notify(&self.line);
    }
}

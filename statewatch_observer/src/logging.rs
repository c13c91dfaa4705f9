use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

/// The sink a reactor emits its reaction lines into.
///
/// Swapping the sink (console, in-memory buffer, ...) changes where reactions
/// end up without changing any notification semantics.
pub trait ReactionLog {
    /// Print a string into the log, followed by a new line.
    fn log_println<D: Display>(&self, content: D);
}

/// A `ReactionLog` that buffers lines in memory.
///
/// Clones share the same underlying buffer, so a test can hand one clone to a
/// reactor and keep another for inspecting what was logged.
#[derive(Clone, Default)]
pub struct MemoryLog {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryLog {
    /// Creates a new, empty, `MemoryLog`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all lines logged so far, in logging order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns `true` if nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl ReactionLog for MemoryLog {
    fn log_println<D: Display>(&self, content: D) {
        self.lines.borrow_mut().push(content.to_string());
    }
}

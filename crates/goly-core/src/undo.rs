//! Undo/redo history.
//!
//! [`UndoManager`] keeps two stacks of [`Command`]s. Consecutive, contiguous
//! [`EditKind::TypingStep`] commands form a *typing burst* that one `undo`/`redo` call unwinds
//! or replays as a single unit.
//!
//! # Example
//!
//! ```rust
//! use goly_core::{Command, UndoManager};
//!
//! let original = "func main() {}";
//! let mut history = UndoManager::new();
//!
//! // The user types "go" after "func ".
//! history.push(Command::typing('g', 6).unwrap());
//! history.push(Command::typing('o', 7).unwrap());
//!
//! let undone = history.undo("func gomain() {}", 7).unwrap();
//! assert_eq!(undone.text, original);
//! assert_eq!(undone.cursor, 5);
//! assert_eq!(undone.steps, 2);
//! ```

use crate::command::{Command, CommandError, EditKind};
use ropey::Rope;
use std::collections::VecDeque;

/// Default number of commands kept on the undo stack.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Result of an undo or redo request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Buffer text after the operation.
    pub text: String,
    /// Cursor position implied by the operation (char offset).
    pub cursor: usize,
    /// Number of commands moved between the stacks (`0` for a no-op).
    pub steps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Undo,
    Redo,
}

/// Two-stack command history with typing-burst coalescing.
#[derive(Debug, Clone)]
pub struct UndoManager {
    undo_stack: VecDeque<Command>,
    redo_stack: VecDeque<Command>,
    max_depth: usize,
}

impl UndoManager {
    /// Create an empty history holding up to [`DEFAULT_MAX_DEPTH`] commands.
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create an empty history holding up to `max_depth` commands (at least one).
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record a new edit. Any redo history is discarded.
    pub fn push(&mut self, command: Command) {
        if !self.redo_stack.is_empty() {
            tracing::trace!(dropped = self.redo_stack.len(), "clearing redo history");
            self.redo_stack.clear();
        }

        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(command);
    }

    /// Unwind the most recent edit (or typing burst) on `buffer`.
    ///
    /// Returns the new text and the pre-edit cursor. With nothing to undo, `buffer` and `cursor`
    /// come back unchanged. On error neither stack is modified.
    pub fn undo(&mut self, buffer: &str, cursor: usize) -> Result<EditOutcome, CommandError> {
        self.replay(Direction::Undo, buffer, cursor)
    }

    /// Replay the most recently undone edit (or typing burst) on `buffer`.
    ///
    /// Returns the new text and the post-edit cursor. With nothing to redo, `buffer` and `cursor`
    /// come back unchanged. On error neither stack is modified.
    pub fn redo(&mut self, buffer: &str, cursor: usize) -> Result<EditOutcome, CommandError> {
        self.replay(Direction::Redo, buffer, cursor)
    }

    /// Can undo
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Can redo
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Undo stack depth, counted in commands (a burst may pop several at once).
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Redo stack depth, counted in commands.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn replay(
        &mut self,
        direction: Direction,
        buffer: &str,
        cursor: usize,
    ) -> Result<EditOutcome, CommandError> {
        let source = match direction {
            Direction::Undo => &self.undo_stack,
            Direction::Redo => &self.redo_stack,
        };

        let mut rope = Rope::from_str(buffer);
        let mut cursor = cursor;
        let mut steps = 0;
        let mut last: Option<&Command> = None;

        // Work on a scratch rope first; the stacks only move once the whole run applied.
        for command in source.iter().rev() {
            if let Some(done) = last
                && !continues_burst(direction, done, command)
            {
                break;
            }

            let result = match direction {
                Direction::Undo => command.invert_to(&mut rope),
                Direction::Redo => command.apply_to(&mut rope),
            };
            if let Err(err) = result {
                tracing::warn!(?direction, %err, "rejecting history replay");
                return Err(err);
            }

            cursor = match direction {
                Direction::Undo => command.anchor(),
                Direction::Redo => command.position(),
            };
            steps += 1;
            last = Some(command);
        }

        if steps == 0 {
            return Ok(EditOutcome {
                text: buffer.to_string(),
                cursor,
                steps,
            });
        }

        let (from, to) = match direction {
            Direction::Undo => (&mut self.undo_stack, &mut self.redo_stack),
            Direction::Redo => (&mut self.redo_stack, &mut self.undo_stack),
        };
        // Popped newest-first so the destination's top is the next command to reverse.
        for _ in 0..steps {
            if let Some(command) = from.pop_back() {
                to.push_back(command);
            }
        }

        tracing::debug!(?direction, steps, cursor, "history replayed");
        Ok(EditOutcome {
            text: rope.to_string(),
            cursor,
            steps,
        })
    }
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `next` belongs to the same typing burst as the command just replayed.
///
/// Both must be typing steps, and they must touch: while undoing, `next` ends where `done`
/// started; while redoing, `next` starts where `done` ended.
fn continues_burst(direction: Direction, done: &Command, next: &Command) -> bool {
    if done.kind() != EditKind::TypingStep || next.kind() != EditKind::TypingStep {
        return false;
    }

    let contiguous = match direction {
        Direction::Undo => next.position() == done.anchor(),
        Direction::Redo => next.anchor() == done.position(),
    };
    if !contiguous {
        tracing::trace!(?direction, "typing burst broken by cursor jump");
    }
    contiguous
}

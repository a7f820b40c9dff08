//! Edit commands.
//!
//! A [`Command`] is an immutable record of one atomic edit against a text buffer, expressed in
//! **character offsets** (Unicode scalar values). It can be replayed forward with
//! [`Command::apply`] or unwound with [`Command::invert`].
//!
//! Offsets follow the editor cursor:
//! - `position` is the cursor position **after** the edit.
//! - `delta` is the signed change in buffer length (`> 0` insertion, `< 0` deletion).
//! - the anchor `position - delta` is the cursor position **before** the edit. It is always
//!   derived from `position` and `delta`, never stored.
//!
//! # Example
//!
//! ```rust
//! use goly_core::Command;
//!
//! let text = "func main() { go initChange() }";
//! let cmd = Command::insert("hello ", 11).unwrap();
//! assert_eq!(cmd.anchor(), 5);
//!
//! let edited = cmd.apply(text).unwrap();
//! assert_eq!(edited, "func hello main() { go initChange() }");
//! assert_eq!(cmd.invert(&edited).unwrap(), text);
//! ```

use ropey::Rope;
use thiserror::Error;

/// Edit-kind tag used for undo grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditKind {
    /// Any edit that undoes on its own (paste, deletion, replace, ...).
    #[default]
    Generic,
    /// A single typed character. Adjacent typing steps undo/redo as one unit.
    TypingStep,
}

/// Errors raised when a command is malformed or does not fit the buffer it is replayed on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The command does not change the buffer length.
    #[error("command delta must not be zero")]
    ZeroDelta,

    /// `content` does not carry exactly `|delta|` characters.
    #[error("command content has {content_len} chars but delta is {delta}")]
    LengthMismatch {
        /// Signed length change.
        delta: isize,
        /// Character count of `content`.
        content_len: usize,
    },

    /// A typing step must insert exactly one character.
    #[error("typing step must insert one char, got delta {delta}")]
    InvalidTypingStep {
        /// Signed length change.
        delta: isize,
    },

    /// `position - delta` would be negative.
    #[error("edit anchor {position} - ({delta}) is negative")]
    NegativeAnchor {
        /// Post-edit position.
        position: usize,
        /// Signed length change.
        delta: isize,
    },

    /// `position - delta` is past the end of the buffer.
    #[error("edit anchor {anchor} is outside the buffer (len {len})")]
    AnchorOutOfBounds {
        /// Pre-edit anchor.
        anchor: usize,
        /// Buffer length in chars.
        len: usize,
    },

    /// The range touched by the edit is not inside the buffer.
    #[error("edit range {start}..{end} is outside the buffer (len {len})")]
    RangeOutOfBounds {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
        /// Buffer length in chars.
        len: usize,
    },

    /// The text at the range to remove is not the text the command recorded.
    #[error("buffer text at {start}..{end} does not match the recorded edit")]
    ContentMismatch {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },
}

/// One atomic edit: an insertion or a deletion, never both.
///
/// For a deletion `content` holds the removed text so the edit can be inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    content: String,
    position: usize,
    delta: isize,
    kind: EditKind,
}

impl Command {
    /// Build a command from raw fields, validating them.
    ///
    /// Requirements:
    /// - `delta != 0`
    /// - `content` has exactly `|delta|` chars
    /// - [`EditKind::TypingStep`] commands insert exactly one char
    /// - `position - delta >= 0` (checked without overflow)
    pub fn new(
        content: impl Into<String>,
        position: usize,
        delta: isize,
        kind: EditKind,
    ) -> Result<Self, CommandError> {
        let content = content.into();
        if delta == 0 {
            return Err(CommandError::ZeroDelta);
        }

        let content_len = content.chars().count();
        if content_len != delta.unsigned_abs() {
            return Err(CommandError::LengthMismatch { delta, content_len });
        }

        if kind == EditKind::TypingStep && delta != 1 {
            return Err(CommandError::InvalidTypingStep { delta });
        }

        if checked_anchor(position, delta).is_none() {
            return Err(CommandError::NegativeAnchor { position, delta });
        }

        Ok(Self {
            content,
            position,
            delta,
            kind,
        })
    }

    /// An insertion of `text` that leaves the cursor at `position` (right after the text).
    pub fn insert(text: impl Into<String>, position: usize) -> Result<Self, CommandError> {
        let text = text.into();
        let delta = text.chars().count() as isize;
        Self::new(text, position, delta, EditKind::Generic)
    }

    /// A single typed character; `position` is the cursor after the keystroke.
    pub fn typing(ch: char, position: usize) -> Result<Self, CommandError> {
        Self::new(ch.to_string(), position, 1, EditKind::TypingStep)
    }

    /// A deletion of `removed`, which started at char offset `position` in the pre-edit buffer.
    ///
    /// `position` is also where the cursor sits after the deletion.
    pub fn delete(removed: impl Into<String>, position: usize) -> Result<Self, CommandError> {
        let removed = removed.into();
        let delta = -(removed.chars().count() as isize);
        Self::new(removed, position, delta, EditKind::Generic)
    }

    /// Inserted text, or the removed text for deletions.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position after the edit.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Signed length change.
    pub fn delta(&self) -> isize {
        self.delta
    }

    /// Edit-kind tag.
    pub fn kind(&self) -> EditKind {
        self.kind
    }

    /// Cursor position before the edit (`position - delta`).
    pub fn anchor(&self) -> usize {
        let magnitude = self.delta.unsigned_abs();
        if self.delta > 0 {
            self.position - magnitude
        } else {
            self.position + magnitude
        }
    }

    /// Returns `true` if the command inserts text.
    pub fn is_insertion(&self) -> bool {
        self.delta > 0
    }

    /// Returns `true` if the command removes text.
    pub fn is_deletion(&self) -> bool {
        self.delta < 0
    }

    /// Replay the edit forward on `buffer`.
    pub fn apply(&self, buffer: &str) -> Result<String, CommandError> {
        let mut rope = Rope::from_str(buffer);
        self.apply_to(&mut rope)?;
        Ok(rope.to_string())
    }

    /// Unwind the edit on `buffer`, which must be the post-edit text.
    pub fn invert(&self, buffer: &str) -> Result<String, CommandError> {
        let mut rope = Rope::from_str(buffer);
        self.invert_to(&mut rope)?;
        Ok(rope.to_string())
    }

    /// Forward edit on a rope. The rope is left untouched on error.
    pub(crate) fn apply_to(&self, rope: &mut Rope) -> Result<(), CommandError> {
        let len = rope.len_chars();
        if self.is_insertion() {
            let anchor = self.anchor();
            if anchor > len {
                return Err(CommandError::AnchorOutOfBounds { anchor, len });
            }
            rope.insert(anchor, &self.content);
        } else {
            let (start, end) = (self.position, self.anchor());
            self.check_removal(rope, start, end)?;
            rope.remove(start..end);
        }
        Ok(())
    }

    /// Inverse edit on a rope. The rope is left untouched on error.
    pub(crate) fn invert_to(&self, rope: &mut Rope) -> Result<(), CommandError> {
        let len = rope.len_chars();
        if self.is_insertion() {
            let (start, end) = (self.anchor(), self.position);
            self.check_removal(rope, start, end)?;
            rope.remove(start..end);
        } else {
            if self.position > len {
                return Err(CommandError::AnchorOutOfBounds {
                    anchor: self.position,
                    len,
                });
            }
            rope.insert(self.position, &self.content);
        }
        Ok(())
    }

    /// `start..end` must be in bounds and hold exactly `content`.
    fn check_removal(&self, rope: &Rope, start: usize, end: usize) -> Result<(), CommandError> {
        let len = rope.len_chars();
        if end > len {
            return Err(CommandError::RangeOutOfBounds { start, end, len });
        }
        if rope.slice(start..end) != self.content.as_str() {
            return Err(CommandError::ContentMismatch { start, end });
        }
        Ok(())
    }
}

fn checked_anchor(position: usize, delta: isize) -> Option<usize> {
    let magnitude = delta.unsigned_abs();
    if delta > 0 {
        position.checked_sub(magnitude)
    } else {
        position.checked_add(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "func main() { go initChange() }";

    #[test]
    fn test_insert_apply_and_invert() {
        let cmd = Command::new("hello", 10, 5, EditKind::Generic).unwrap();
        assert_eq!(cmd.anchor(), 5);

        let edited = cmd.apply(SOURCE).unwrap();
        assert_eq!(edited, "func hellomain() { go initChange() }");
        assert_eq!(cmd.invert(&edited).unwrap(), SOURCE);
    }

    #[test]
    fn test_delete_apply_and_invert() {
        // Backspace over "main" with the cursor after it.
        let cmd = Command::delete("main", 5).unwrap();
        assert_eq!(cmd.delta(), -4);
        assert_eq!(cmd.anchor(), 9);

        let edited = cmd.apply(SOURCE).unwrap();
        assert_eq!(edited, "func () { go initChange() }");
        assert_eq!(cmd.invert(&edited).unwrap(), SOURCE);
    }

    #[test]
    fn test_round_trip_laws() {
        let commands = [
            Command::insert("x", 1).unwrap(),
            Command::insert("multi\nline", 31 + 10).unwrap(),
            Command::delete("func", 0).unwrap(),
            Command::delete(" }", 29).unwrap(),
            Command::typing('g', 14).unwrap(),
        ];

        for cmd in &commands {
            let applied = cmd.apply(SOURCE).unwrap();
            let restored = cmd.invert(&applied).unwrap();
            assert_eq!(restored, SOURCE, "{cmd:?}");
            assert_eq!(cmd.apply(&restored).unwrap(), applied, "{cmd:?}");
        }
    }

    #[test]
    fn test_offsets_are_chars_not_bytes() {
        let text = "héllo wörld";
        let cmd = Command::insert("ß", 7).unwrap();
        let edited = cmd.apply(text).unwrap();
        assert_eq!(edited, "héllo ßwörld");
        assert_eq!(cmd.invert(&edited).unwrap(), text);

        let del = Command::delete("ö", 7).unwrap();
        assert_eq!(del.apply(text).unwrap(), "héllo wrld");
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Command::new("", 3, 0, EditKind::Generic),
            Err(CommandError::ZeroDelta)
        );
        assert_eq!(
            Command::new("abc", 3, 2, EditKind::Generic),
            Err(CommandError::LengthMismatch {
                delta: 2,
                content_len: 3
            })
        );
        assert_eq!(
            Command::new("ab", 3, 2, EditKind::TypingStep),
            Err(CommandError::InvalidTypingStep { delta: 2 })
        );
        assert_eq!(
            Command::new("abcd", 2, 4, EditKind::Generic),
            Err(CommandError::NegativeAnchor {
                position: 2,
                delta: 4
            })
        );
    }

    #[test]
    fn test_removal_must_match_recorded_text() {
        let delete = Command::delete("main", 5).unwrap();
        assert_eq!(
            delete.apply("func xxxx() {}"),
            Err(CommandError::ContentMismatch { start: 5, end: 9 })
        );

        let insert = Command::insert("hello", 10).unwrap();
        assert_eq!(
            insert.invert("func WORLDmain()"),
            Err(CommandError::ContentMismatch { start: 5, end: 10 })
        );
        assert_eq!(insert.invert("func hellomain()").unwrap(), "func main()");
    }

    #[test]
    fn test_out_of_range_edits_are_rejected() {
        let insert = Command::insert("zz", 12).unwrap();
        assert_eq!(
            insert.apply("short"),
            Err(CommandError::AnchorOutOfBounds { anchor: 10, len: 5 })
        );
        assert_eq!(
            insert.invert("short"),
            Err(CommandError::RangeOutOfBounds {
                start: 10,
                end: 12,
                len: 5
            })
        );

        let delete = Command::delete("xyz", 4).unwrap();
        assert_eq!(
            delete.apply("short"),
            Err(CommandError::RangeOutOfBounds {
                start: 4,
                end: 7,
                len: 5
            })
        );
        assert!(delete.invert("abc").is_err());
    }
}

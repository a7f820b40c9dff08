#![warn(missing_docs)]
//! goly Core - undo/redo engine for the goly code editor
//!
//! # Overview
//!
//! `goly-core` records edits made by the editor UI as [`Command`]s and replays them through an
//! [`UndoManager`]. The core never owns the document: every call receives the current buffer
//! text and returns the new text plus the cursor position to restore.
//!
//! - **Commands**: immutable insert/delete records in char offsets, with `apply`/`invert`
//! - **Typing bursts**: contiguous single-char insertions undo and redo as one step
//! - **All-or-nothing**: a failed replay leaves both stacks untouched
//!
//! # Quick Start
//!
//! ```rust
//! use goly_core::{Command, UndoManager};
//!
//! let original = "func main() { go initChange() }";
//! let edited = "func hello main() { go initChange() }";
//!
//! let mut history = UndoManager::new();
//! history.push(Command::insert("hello ", 11).unwrap());
//!
//! let undone = history.undo(edited, 11).unwrap();
//! assert_eq!(undone.text, original);
//!
//! let redone = history.redo(&undone.text, undone.cursor).unwrap();
//! assert_eq!(redone.text, edited);
//! assert_eq!(redone.cursor, 11);
//! ```
//!
//! # Module Description
//!
//! - [`command`] - edit records and their forward/inverse application
//! - [`undo`] - the two-stack history with typing-burst coalescing

pub mod command;
pub mod undo;

pub use command::{Command, CommandError, EditKind};
pub use undo::{DEFAULT_MAX_DEPTH, EditOutcome, UndoManager};

#![warn(missing_docs)]
//! `goly-highlight` - Go syntax highlighting into rich-text markup.
//!
//! The pipeline is a single pass over the whole buffer:
//!
//! ```text
//! buffer ──► Scanner (token boundaries) ──► Classify (category) ──► MarkupRenderer ──► markup
//!                                                                      ▲
//!                                                                 ColorTheme
//! ```
//!
//! # Example
//!
//! ```rust
//! use goly_highlight::render;
//!
//! let markup = render("x := 1").unwrap();
//! assert_eq!(
//!     markup,
//!     "<font color=\"#eee8d5\">x</font> \
//!      <font color=\"#6c71c4\">:=</font> \
//!      <font color=\"#b58900\">1</font>"
//! );
//! ```

pub mod classify;
mod error;
pub mod markup;
pub mod scanner;
pub mod theme;
pub mod token;

pub use classify::{Category, Classify, GoClassifier};
pub use error::{ClassifierError, ThemeError};
pub use markup::{MarkupRenderer, escape_whitespace, render, trim_chunk};
pub use scanner::{Boundary, Scanner, tokens};
pub use theme::ColorTheme;
pub use token::Token;

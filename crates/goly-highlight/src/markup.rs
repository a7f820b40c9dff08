//! Color markup rendering.
//!
//! The renderer re-serializes a whole buffer into rich-text markup: every token is wrapped in a
//! `<font color="...">` tag and the whitespace between tokens is re-encoded so a rich-text view
//! shows it as typed:
//!
//! - newline (and U+2028 LINE SEPARATOR) → `<br>`
//! - tab → four `&nbsp;`
//! - a space right after another space → `&nbsp;` (a lone space stays literal)

use crate::classify::{Classify, GoClassifier};
use crate::error::ClassifierError;
use crate::scanner::tokens;
use crate::theme::ColorTheme;
use crate::token::Token;
use std::borrow::Cow;

const LINE_SEPARATOR: char = '\u{2028}';
const LINE_BREAK: &str = "<br>";
const NBSP: &str = "&nbsp;";

/// Renders buffers into color-tagged markup.
#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer<C = GoClassifier> {
    theme: ColorTheme,
    classifier: C,
}

impl MarkupRenderer<GoClassifier> {
    /// A renderer for Go sources using `theme`.
    pub fn new(theme: ColorTheme) -> Self {
        Self::with_classifier(theme, GoClassifier)
    }
}

impl<C: Classify> MarkupRenderer<C> {
    /// A renderer using a custom classifier.
    pub fn with_classifier(theme: ColorTheme, classifier: C) -> Self {
        Self { theme, classifier }
    }

    /// The active theme.
    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }

    /// Swap the active theme.
    pub fn set_theme(&mut self, theme: ColorTheme) {
        self.theme = theme;
    }

    /// Render the whole buffer.
    ///
    /// The output depends only on `buffer` (and the renderer's theme/classifier). Any
    /// classification failure aborts the render.
    pub fn render(&self, buffer: &str) -> Result<String, ClassifierError> {
        let src = normalize_line_separators(buffer);
        let mut out = String::with_capacity(src.len() * 4);

        let mut boundaries = tokens(&src);
        let Some(mut prev) = boundaries.next() else {
            return Ok(out);
        };
        push_escaped_whitespace(&mut out, &src[..prev.byte_offset]);

        for cur in boundaries {
            let (leading, code, trailing) = trim_chunk(&src[prev.byte_offset..cur.byte_offset]);
            let category = self.classifier.classify(prev.token)?;

            push_escaped_whitespace(&mut out, leading);
            push_tag(&mut out, self.theme.color(category), code);
            push_escaped_whitespace(&mut out, trailing);

            if cur.token == Token::Eof {
                break;
            }
            prev = cur;
        }

        tracing::debug!(
            input_bytes = src.len(),
            output_bytes = out.len(),
            "rendered markup"
        );
        Ok(out)
    }
}

/// Render `buffer` with the default theme and classifier.
pub fn render(buffer: &str) -> Result<String, ClassifierError> {
    MarkupRenderer::new(ColorTheme::default()).render(buffer)
}

/// Split a chunk into leading whitespace, code, trailing whitespace.
///
/// An all-whitespace chunk comes back as `("", "", chunk)`.
pub fn trim_chunk(chunk: &str) -> (&str, &str, &str) {
    let code = chunk.trim_start();
    let start = chunk.len() - code.len();
    let code = code.trim_end();
    let end = start + code.len();
    if code.is_empty() {
        return ("", "", chunk);
    }
    (&chunk[..start], code, &chunk[end..])
}

/// Re-encode a whitespace run for display.
pub fn escape_whitespace(run: &str) -> String {
    let mut out = String::with_capacity(run.len());
    push_escaped_whitespace(&mut out, run);
    out
}

fn push_escaped_whitespace(out: &mut String, run: &str) {
    let mut prev = None;
    for ch in run.chars() {
        match ch {
            '\n' | LINE_SEPARATOR => out.push_str(LINE_BREAK),
            '\t' => {
                for _ in 0..4 {
                    out.push_str(NBSP);
                }
            }
            ' ' if prev == Some(' ') => out.push_str(NBSP),
            _ => out.push(ch),
        }
        prev = Some(ch);
    }
}

fn push_tag(out: &mut String, color: &str, code: &str) {
    out.push_str("<font color=\"");
    out.push_str(color);
    out.push_str("\">");
    for ch in code.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out.push_str("</font>");
}

fn normalize_line_separators(buffer: &str) -> Cow<'_, str> {
    if buffer.contains(LINE_SEPARATOR) {
        Cow::Owned(buffer.replace(LINE_SEPARATOR, "\n"))
    } else {
        Cow::Borrowed(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_chunk() {
        assert_eq!(trim_chunk("func "), ("", "func", " "));
        assert_eq!(trim_chunk("\n\t x \n"), ("\n\t ", "x", " \n"));
        assert_eq!(trim_chunk("a b"), ("", "a b", ""));
        assert_eq!(trim_chunk("  "), ("", "", "  "));
        assert_eq!(trim_chunk(""), ("", "", ""));
        assert_eq!(trim_chunk("x\u{2028}"), ("", "x", "\u{2028}"));
    }

    #[test]
    fn test_escape_whitespace() {
        assert_eq!(escape_whitespace("   "), " &nbsp;&nbsp;");
        assert_eq!(escape_whitespace("\t"), "&nbsp;&nbsp;&nbsp;&nbsp;");
        assert_eq!(escape_whitespace("\n"), "<br>");
        assert_eq!(escape_whitespace("\u{2028}"), "<br>");
        assert_eq!(escape_whitespace(" \n "), " <br> ");
        assert_eq!(escape_whitespace("\t "), "&nbsp;&nbsp;&nbsp;&nbsp; ");
        assert_eq!(escape_whitespace("\r\n"), "\r<br>");
    }

    #[test]
    fn test_code_fragments_are_entity_escaped() {
        let mut out = String::new();
        push_tag(&mut out, "#fff", "a<b&&c>d");
        assert_eq!(out, "<font color=\"#fff\">a&lt;b&amp;&amp;c&gt;d</font>");
    }

    #[test]
    fn test_line_separator_normalization() {
        assert!(matches!(
            normalize_line_separators("a\nb"),
            Cow::Borrowed("a\nb")
        ));
        assert_eq!(normalize_line_separators("a\u{2028}b"), "a\nb");
    }
}

//! Color themes.
//!
//! A [`ColorTheme`] binds every [`Category`] to a color string that is written verbatim into
//! the `color` attribute of the markup. Themes are plain values injected into the
//! [`MarkupRenderer`](crate::MarkupRenderer); the default is a Solarized palette.
//!
//! Themes can be loaded from YAML. Keys are category names, missing keys keep the default:
//!
//! ```yaml
//! keyword: "#cb4b16"
//! comment: "#586e75"
//! ```

use crate::classify::Category;
use crate::error::ThemeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})|[A-Za-z]+)$")
        .expect("valid color regex")
});

/// Category → color mapping used by the markup renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorTheme {
    /// Plain identifiers.
    pub identifier: String,
    /// Reserved words.
    pub keyword: String,
    /// Literals.
    pub literal: String,
    /// Operators and punctuation.
    pub operator: String,
    /// Comments.
    pub comment: String,
    /// Unrecognized input.
    pub illegal: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            identifier: "#eee8d5".to_string(),
            keyword: "#268bd2".to_string(),
            literal: "#b58900".to_string(),
            operator: "#6c71c4".to_string(),
            comment: "#859900".to_string(),
            illegal: "#dc322f".to_string(),
        }
    }
}

impl ColorTheme {
    /// Parse and validate a YAML theme.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_yaml::from_str(yaml)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Read, parse and validate a YAML theme file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let theme = Self::from_yaml_str(&yaml)?;
        tracing::debug!(path = %path.display(), "loaded color theme");
        Ok(theme)
    }

    /// Color assigned to `category`.
    pub fn color(&self, category: Category) -> &str {
        match category {
            Category::Identifier => &self.identifier,
            Category::Keyword => &self.keyword,
            Category::Literal => &self.literal,
            Category::Operator => &self.operator,
            Category::Comment => &self.comment,
            Category::Illegal => &self.illegal,
        }
    }

    /// Replace the color of one category.
    pub fn with_color(
        mut self,
        category: Category,
        color: impl Into<String>,
    ) -> Result<Self, ThemeError> {
        let color = color.into();
        check_color(category, &color)?;
        let slot = match category {
            Category::Identifier => &mut self.identifier,
            Category::Keyword => &mut self.keyword,
            Category::Literal => &mut self.literal,
            Category::Operator => &mut self.operator,
            Category::Comment => &mut self.comment,
            Category::Illegal => &mut self.illegal,
        };
        *slot = color;
        Ok(self)
    }

    /// Check that every color is safe to place in a markup attribute.
    pub fn validate(&self) -> Result<(), ThemeError> {
        Category::ALL
            .into_iter()
            .try_for_each(|category| check_color(category, self.color(category)))
    }
}

fn check_color(category: Category, value: &str) -> Result<(), ThemeError> {
    if COLOR_PATTERN.is_match(value) {
        Ok(())
    } else {
        tracing::warn!(%category, value, "rejecting theme color");
        Err(ThemeError::InvalidColor {
            category,
            value: value.to_string(),
        })
    }
}

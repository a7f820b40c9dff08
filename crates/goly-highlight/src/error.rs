use crate::classify::Category;
use crate::token::Token;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Raised when a token cannot be mapped to a color category.
///
/// This means the grammar and the classifier have drifted apart; rendering aborts instead of
/// emitting unstyled output.
pub enum ClassifierError {
    #[error("unknown token type: {0}")]
    /// The token belongs to no known category.
    Unclassified(Token),
}

#[derive(Debug, Error)]
/// Errors produced while loading or building a [`ColorTheme`](crate::ColorTheme).
pub enum ThemeError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("invalid color '{value}' for {category}")]
    /// A color value is not a `#rgb`/`#rrggbb`/`#aarrggbb` hex code or a plain color name.
    InvalidColor {
        /// Category the color was assigned to.
        category: Category,
        /// The rejected value.
        value: String,
    },
}

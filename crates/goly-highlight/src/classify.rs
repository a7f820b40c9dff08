//! Token classification into display color categories.

use crate::error::ClassifierError;
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color bucket of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Plain identifiers.
    Identifier,
    /// Reserved words.
    Keyword,
    /// Number, rune and string literals.
    Literal,
    /// Operators and punctuation.
    Operator,
    /// Comments.
    Comment,
    /// Unrecognized input (and end of input, which is never rendered).
    Illegal,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Identifier,
        Category::Keyword,
        Category::Literal,
        Category::Operator,
        Category::Comment,
        Category::Illegal,
    ];

    /// Lower-case name, as used in theme files.
    pub fn name(self) -> &'static str {
        match self {
            Category::Identifier => "identifier",
            Category::Keyword => "keyword",
            Category::Literal => "literal",
            Category::Operator => "operator",
            Category::Comment => "comment",
            Category::Illegal => "illegal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps token kinds to color categories.
///
/// The renderer is generic over this trait so hosts can recolor tokens without touching the
/// tokenizer.
pub trait Classify {
    /// Classify one token kind.
    fn classify(&self, token: Token) -> Result<Category, ClassifierError>;
}

/// The default classifier for Go tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoClassifier;

impl Classify for GoClassifier {
    fn classify(&self, token: Token) -> Result<Category, ClassifierError> {
        if token.is_keyword() {
            Ok(Category::Keyword)
        } else if token.is_literal() {
            if token == Token::Ident {
                Ok(Category::Identifier)
            } else {
                Ok(Category::Literal)
            }
        } else if token.is_operator() {
            Ok(Category::Operator)
        } else if token == Token::Comment {
            Ok(Category::Comment)
        } else if matches!(token, Token::Illegal | Token::Eof) {
            Ok(Category::Illegal)
        } else {
            Err(ClassifierError::Unclassified(token))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_classifier() {
        let c = GoClassifier;
        assert_eq!(c.classify(Token::Func), Ok(Category::Keyword));
        assert_eq!(c.classify(Token::Ident), Ok(Category::Identifier));
        assert_eq!(c.classify(Token::Int), Ok(Category::Literal));
        assert_eq!(c.classify(Token::String), Ok(Category::Literal));
        assert_eq!(c.classify(Token::Char), Ok(Category::Literal));
        assert_eq!(c.classify(Token::Define), Ok(Category::Operator));
        assert_eq!(c.classify(Token::RBrace), Ok(Category::Operator));
        assert_eq!(c.classify(Token::Comment), Ok(Category::Comment));
        assert_eq!(c.classify(Token::Illegal), Ok(Category::Illegal));
        assert_eq!(c.classify(Token::Eof), Ok(Category::Illegal));
    }

    #[test]
    fn test_category_names() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["identifier", "keyword", "literal", "operator", "comment", "illegal"]
        );
        assert_eq!(Category::Keyword.to_string(), "keyword");
    }
}

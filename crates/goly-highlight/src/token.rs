//! Lexical token kinds of the Go language.

use std::fmt;

/// A Go lexical token kind.
///
/// Variants are grouped the way the grammar groups them: special tokens, literals, operators
/// and delimiters, keywords. [`Token::is_literal`], [`Token::is_operator`] and
/// [`Token::is_keyword`] answer group membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Unrecognized input.
    Illegal,
    /// End of input.
    Eof,
    /// `// ...` or `/* ... */`
    Comment,

    /// `main`
    Ident,
    /// `12345`
    Int,
    /// `123.45`
    Float,
    /// `123.45i`
    Imag,
    /// `'a'`
    Char,
    /// `"abc"` or a raw string
    String,

    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&^`
    AndNot,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    QuoAssign,
    /// `%=`
    RemAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `&^=`
    AndNotAssign,
    /// `&&`
    LAnd,
    /// `||`
    LOr,
    /// `<-`
    Arrow,
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// `==`
    Eql,
    /// `<`
    Lss,
    /// `>`
    Gtr,
    /// `=`
    Assign,
    /// `!`
    Not,
    /// `!=`
    Neq,
    /// `<=`
    Leq,
    /// `>=`
    Geq,
    /// `:=`
    Define,
    /// `...`
    Ellipsis,
    /// `(`
    LParen,
    /// `[`
    LBrack,
    /// `{`
    LBrace,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `)`
    RParen,
    /// `]`
    RBrack,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `~`
    Tilde,

    /// `break`
    Break,
    /// `case`
    Case,
    /// `chan`
    Chan,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `default`
    Default,
    /// `defer`
    Defer,
    /// `else`
    Else,
    /// `fallthrough`
    Fallthrough,
    /// `for`
    For,
    /// `func`
    Func,
    /// `go`
    Go,
    /// `goto`
    Goto,
    /// `if`
    If,
    /// `import`
    Import,
    /// `interface`
    Interface,
    /// `map`
    Map,
    /// `package`
    Package,
    /// `range`
    Range,
    /// `return`
    Return,
    /// `select`
    Select,
    /// `struct`
    Struct,
    /// `switch`
    Switch,
    /// `type`
    Type,
    /// `var`
    Var,
}

impl Token {
    /// Map an identifier to its keyword token, or [`Token::Ident`].
    pub fn lookup(ident: &str) -> Self {
        match ident {
            "break" => Self::Break,
            "case" => Self::Case,
            "chan" => Self::Chan,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "default" => Self::Default,
            "defer" => Self::Defer,
            "else" => Self::Else,
            "fallthrough" => Self::Fallthrough,
            "for" => Self::For,
            "func" => Self::Func,
            "go" => Self::Go,
            "goto" => Self::Goto,
            "if" => Self::If,
            "import" => Self::Import,
            "interface" => Self::Interface,
            "map" => Self::Map,
            "package" => Self::Package,
            "range" => Self::Range,
            "return" => Self::Return,
            "select" => Self::Select,
            "struct" => Self::Struct,
            "switch" => Self::Switch,
            "type" => Self::Type,
            "var" => Self::Var,
            _ => Self::Ident,
        }
    }

    /// Identifiers and basic literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Ident | Self::Int | Self::Float | Self::Imag | Self::Char | Self::String
        )
    }

    /// Operators and delimiters.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Sub
                | Self::Mul
                | Self::Quo
                | Self::Rem
                | Self::And
                | Self::Or
                | Self::Xor
                | Self::Shl
                | Self::Shr
                | Self::AndNot
                | Self::AddAssign
                | Self::SubAssign
                | Self::MulAssign
                | Self::QuoAssign
                | Self::RemAssign
                | Self::AndAssign
                | Self::OrAssign
                | Self::XorAssign
                | Self::ShlAssign
                | Self::ShrAssign
                | Self::AndNotAssign
                | Self::LAnd
                | Self::LOr
                | Self::Arrow
                | Self::Inc
                | Self::Dec
                | Self::Eql
                | Self::Lss
                | Self::Gtr
                | Self::Assign
                | Self::Not
                | Self::Neq
                | Self::Leq
                | Self::Geq
                | Self::Define
                | Self::Ellipsis
                | Self::LParen
                | Self::LBrack
                | Self::LBrace
                | Self::Comma
                | Self::Period
                | Self::RParen
                | Self::RBrack
                | Self::RBrace
                | Self::Semicolon
                | Self::Colon
                | Self::Tilde
        )
    }

    /// Reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Break
                | Self::Case
                | Self::Chan
                | Self::Const
                | Self::Continue
                | Self::Default
                | Self::Defer
                | Self::Else
                | Self::Fallthrough
                | Self::For
                | Self::Func
                | Self::Go
                | Self::Goto
                | Self::If
                | Self::Import
                | Self::Interface
                | Self::Map
                | Self::Package
                | Self::Range
                | Self::Return
                | Self::Select
                | Self::Struct
                | Self::Switch
                | Self::Type
                | Self::Var
        )
    }

    /// Source spelling for operators and keywords, an upper-case name otherwise.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Comment => "COMMENT",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Imag => "IMAG",
            Self::Char => "CHAR",
            Self::String => "STRING",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::Rem => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AndNot => "&^",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::QuoAssign => "/=",
            Self::RemAssign => "%=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::AndNotAssign => "&^=",
            Self::LAnd => "&&",
            Self::LOr => "||",
            Self::Arrow => "<-",
            Self::Inc => "++",
            Self::Dec => "--",
            Self::Eql => "==",
            Self::Lss => "<",
            Self::Gtr => ">",
            Self::Assign => "=",
            Self::Not => "!",
            Self::Neq => "!=",
            Self::Leq => "<=",
            Self::Geq => ">=",
            Self::Define => ":=",
            Self::Ellipsis => "...",
            Self::LParen => "(",
            Self::LBrack => "[",
            Self::LBrace => "{",
            Self::Comma => ",",
            Self::Period => ".",
            Self::RParen => ")",
            Self::RBrack => "]",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Tilde => "~",
            Self::Break => "break",
            Self::Case => "case",
            Self::Chan => "chan",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Defer => "defer",
            Self::Else => "else",
            Self::Fallthrough => "fallthrough",
            Self::For => "for",
            Self::Func => "func",
            Self::Go => "go",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Import => "import",
            Self::Interface => "interface",
            Self::Map => "map",
            Self::Package => "package",
            Self::Range => "range",
            Self::Return => "return",
            Self::Select => "select",
            Self::Struct => "struct",
            Self::Switch => "switch",
            Self::Type => "type",
            Self::Var => "var",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Token::lookup("func"), Token::Func);
        assert_eq!(Token::lookup("fallthrough"), Token::Fallthrough);
        assert_eq!(Token::lookup("Func"), Token::Ident);
        assert_eq!(Token::lookup("initChange"), Token::Ident);
    }

    #[test]
    fn test_groups_are_disjoint() {
        for token in [Token::Ident, Token::String, Token::Define, Token::Var, Token::Comment] {
            let groups = [token.is_literal(), token.is_operator(), token.is_keyword()];
            assert!(groups.iter().filter(|g| **g).count() <= 1, "{token}");
        }
        assert!(!Token::Eof.is_literal() && !Token::Eof.is_operator());
        assert!(!Token::Illegal.is_keyword());
    }

    #[test]
    fn test_display_uses_source_spelling() {
        assert_eq!(Token::AndNotAssign.to_string(), "&^=");
        assert_eq!(Token::Return.to_string(), "return");
        assert_eq!(Token::Eof.to_string(), "EOF");
    }
}

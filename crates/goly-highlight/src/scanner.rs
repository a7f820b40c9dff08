//! Go source tokenizer.
//!
//! [`Scanner`] walks a buffer once and yields one [`Boundary`] per token, followed by a single
//! [`Token::Eof`] boundary. It never fails: malformed input degrades to [`Token::Illegal`] (or to
//! an unterminated literal/comment token) and scanning continues.
//!
//! Only source tokens are reported; Go's automatic semicolons are not synthesized.

use crate::token::Token;
use regex::Regex;
use std::iter::FusedIterator;
use std::sync::LazyLock;

static UNICODE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}$").expect("valid letter regex"));
static UNICODE_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}$").expect("valid digit regex"));

/// The start of a token in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Offset in chars (Unicode scalar values) from the start of the source.
    pub offset: usize,
    /// Offset in UTF-8 bytes, for slicing the source.
    pub byte_offset: usize,
    /// Kind of the token starting here.
    pub token: Token,
}

/// Scan `src` into token boundaries.
pub fn tokens(src: &str) -> Scanner<'_> {
    Scanner::new(src)
}

/// A lazy, non-restartable token boundary iterator.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    char_pos: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            char_pos: 0,
            finished: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.char_pos += 1;
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r'));
    }

    fn scan_token(&mut self, ch: char) -> Token {
        let start = self.pos - ch.len_utf8();
        match ch {
            c if is_letter(c) => {
                self.eat_while(|c| is_letter(c) || is_digit(c));
                Token::lookup(&self.src[start..self.pos])
            }
            '0'..='9' => self.scan_number(ch),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(ch),
            '.' => {
                if self.peek() == Some('.') && self.peek_second() == Some('.') {
                    self.bump();
                    self.bump();
                    Token::Ellipsis
                } else {
                    Token::Period
                }
            }
            '"' => {
                self.scan_quoted('"');
                Token::String
            }
            '\'' => {
                self.scan_quoted('\'');
                Token::Char
            }
            '`' => {
                self.eat_while(|c| c != '`');
                self.bump();
                Token::String
            }
            '/' => {
                if self.eat('/') {
                    self.eat_while(|c| c != '\n');
                    Token::Comment
                } else if self.eat('*') {
                    self.scan_block_comment();
                    Token::Comment
                } else {
                    self.switch2(Token::Quo, Token::QuoAssign)
                }
            }
            ':' => self.switch2(Token::Colon, Token::Define),
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBrack,
            ']' => Token::RBrack,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '~' => Token::Tilde,
            '+' => self.switch3(Token::Add, Token::AddAssign, '+', Token::Inc),
            '-' => self.switch3(Token::Sub, Token::SubAssign, '-', Token::Dec),
            '*' => self.switch2(Token::Mul, Token::MulAssign),
            '%' => self.switch2(Token::Rem, Token::RemAssign),
            '^' => self.switch2(Token::Xor, Token::XorAssign),
            '<' => {
                if self.eat('-') {
                    Token::Arrow
                } else {
                    self.switch4(Token::Lss, Token::Leq, '<', Token::Shl, Token::ShlAssign)
                }
            }
            '>' => self.switch4(Token::Gtr, Token::Geq, '>', Token::Shr, Token::ShrAssign),
            '=' => self.switch2(Token::Assign, Token::Eql),
            '!' => self.switch2(Token::Not, Token::Neq),
            '&' => {
                if self.eat('^') {
                    self.switch2(Token::AndNot, Token::AndNotAssign)
                } else {
                    self.switch3(Token::And, Token::AndAssign, '&', Token::LAnd)
                }
            }
            '|' => self.switch3(Token::Or, Token::OrAssign, '|', Token::LOr),
            _ => Token::Illegal,
        }
    }

    /// `x` or `x=`
    fn switch2(&mut self, plain: Token, assign: Token) -> Token {
        if self.eat('=') { assign } else { plain }
    }

    /// `x`, `x=` or `xx`
    fn switch3(&mut self, plain: Token, assign: Token, second: char, doubled: Token) -> Token {
        if self.eat('=') {
            assign
        } else if self.eat(second) {
            doubled
        } else {
            plain
        }
    }

    /// `x`, `x=`, `xx` or `xx=`
    fn switch4(
        &mut self,
        plain: Token,
        assign: Token,
        second: char,
        doubled: Token,
        doubled_assign: Token,
    ) -> Token {
        if self.eat('=') {
            assign
        } else if self.eat(second) {
            self.switch2(doubled, doubled_assign)
        } else {
            plain
        }
    }

    fn scan_number(&mut self, first: char) -> Token {
        let mut token = Token::Int;
        let mut radix = 10;

        if first == '.' {
            token = Token::Float;
            self.eat_digits(radix);
        } else {
            if first == '0' {
                match self.peek().map(|c| c.to_ascii_lowercase()) {
                    Some('x') => radix = 16,
                    Some('b') => radix = 2,
                    Some('o') => radix = 8,
                    _ => {}
                }
                if radix != 10 {
                    self.bump();
                }
            }
            self.eat_digits(radix);

            if (radix == 10 || radix == 16) && self.eat('.') {
                token = Token::Float;
                self.eat_digits(radix);
            }
        }

        let exponent = match self.peek().map(|c| c.to_ascii_lowercase()) {
            Some('e') => radix == 10,
            Some('p') => radix == 16,
            _ => false,
        };
        if exponent {
            self.bump();
            token = Token::Float;
            if !self.eat('+') {
                self.eat('-');
            }
            self.eat_digits(10);
        }

        if self.eat('i') {
            token = Token::Imag;
        }
        token
    }

    /// Digits are consumed loosely: `0b102` is one token.
    fn eat_digits(&mut self, radix: u32) {
        if radix == 16 {
            self.eat_while(|c| c == '_' || c.is_ascii_hexdigit());
        } else {
            self.eat_while(|c| c == '_' || c.is_ascii_digit());
        }
    }

    /// Interpreted string or rune literal; unterminated literals stop before the newline.
    fn scan_quoted(&mut self, quote: char) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.bump();
            if ch == quote {
                break;
            }
            if ch == '\\' && self.peek().is_some_and(|c| c != '\n') {
                self.bump();
            }
        }
    }

    fn scan_block_comment(&mut self) {
        while let Some(ch) = self.bump() {
            if ch == '*' && self.eat('/') {
                break;
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Boundary;

    fn next(&mut self) -> Option<Boundary> {
        if self.finished {
            return None;
        }

        self.skip_whitespace();
        let (offset, byte_offset) = (self.char_pos, self.pos);
        let token = match self.bump() {
            Some(ch) => self.scan_token(ch),
            None => {
                self.finished = true;
                Token::Eof
            }
        };

        Some(Boundary {
            offset,
            byte_offset,
            token,
        })
    }
}

impl FusedIterator for Scanner<'_> {}

/// `_` or a Unicode letter (category `L`).
fn is_letter(ch: char) -> bool {
    ch == '_'
        || ch.is_ascii_alphabetic()
        || (!ch.is_ascii() && matches_char(&UNICODE_LETTER, ch))
}

/// A Unicode decimal digit (category `Nd`); `½` or `²` are not digits.
fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit() || (!ch.is_ascii() && matches_char(&UNICODE_DIGIT, ch))
}

fn matches_char(class: &Regex, ch: char) -> bool {
    let mut buf = [0u8; 4];
    class.is_match(ch.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        tokens(src).map(|b| b.token).collect()
    }

    fn offsets(src: &str) -> Vec<usize> {
        tokens(src).map(|b| b.offset).collect()
    }

    #[test]
    fn test_scan_function_header() {
        let src = "func main() { go initChange() }";
        assert_eq!(
            kinds(src),
            vec![
                Token::Func,
                Token::Ident,
                Token::LParen,
                Token::RParen,
                Token::LBrace,
                Token::Go,
                Token::Ident,
                Token::LParen,
                Token::RParen,
                Token::RBrace,
                Token::Eof,
            ]
        );
        assert_eq!(offsets(src), vec![0, 5, 9, 10, 12, 14, 17, 27, 28, 30, 31]);
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let all: Vec<Boundary> = tokens("").collect();
        assert_eq!(
            all,
            vec![Boundary {
                offset: 0,
                byte_offset: 0,
                token: Token::Eof
            }]
        );

        let all: Vec<Boundary> = tokens(" \n\t").collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].offset, 3);
    }

    #[test]
    fn test_scanner_is_fused() {
        let mut scanner = tokens("x");
        assert_eq!(scanner.next().map(|b| b.token), Some(Token::Ident));
        assert_eq!(scanner.next().map(|b| b.token), Some(Token::Eof));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_operators_longest_match() {
        assert_eq!(
            kinds("a &^= b <<= c >>= d &^ e && f <- g ... h := i != j"),
            vec![
                Token::Ident,
                Token::AndNotAssign,
                Token::Ident,
                Token::ShlAssign,
                Token::Ident,
                Token::ShrAssign,
                Token::Ident,
                Token::AndNot,
                Token::Ident,
                Token::LAnd,
                Token::Ident,
                Token::Arrow,
                Token::Ident,
                Token::Ellipsis,
                Token::Ident,
                Token::Define,
                Token::Ident,
                Token::Neq,
                Token::Ident,
                Token::Eof,
            ]
        );
        assert_eq!(
            kinds("i++ j-- k+=1 x.y"),
            vec![
                Token::Ident,
                Token::Inc,
                Token::Ident,
                Token::Dec,
                Token::Ident,
                Token::AddAssign,
                Token::Int,
                Token::Ident,
                Token::Period,
                Token::Ident,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_number_literals() {
        let cases = [
            ("42", Token::Int),
            ("0x1F", Token::Int),
            ("0b1010", Token::Int),
            ("0o755", Token::Int),
            ("1_000_000", Token::Int),
            ("3.14", Token::Float),
            (".5", Token::Float),
            ("1e9", Token::Float),
            ("6.02E+23", Token::Float),
            ("0x1p-2", Token::Float),
            ("2i", Token::Imag),
            ("1.5i", Token::Imag),
        ];
        for (src, expected) in cases {
            assert_eq!(kinds(src), vec![expected, Token::Eof], "{src}");
        }
    }

    #[test]
    fn test_string_rune_and_comment_literals() {
        assert_eq!(
            kinds(r#""a \"quoted\" s" 'x' '\n' `raw
string`"#),
            vec![
                Token::String,
                Token::Char,
                Token::Char,
                Token::String,
                Token::Eof
            ]
        );

        let src = "x // trailing\n/* block\n comment */ y";
        assert_eq!(
            kinds(src),
            vec![
                Token::Ident,
                Token::Comment,
                Token::Comment,
                Token::Ident,
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_unterminated_literals_do_not_stop_scanning() {
        assert_eq!(
            kinds("\"open\nnext"),
            vec![Token::String, Token::Ident, Token::Eof]
        );
        assert_eq!(kinds("/* never closed"), vec![Token::Comment, Token::Eof]);
        assert_eq!(kinds("`raw"), vec![Token::String, Token::Eof]);
    }

    #[test]
    fn test_illegal_chars_are_single_tokens() {
        assert_eq!(
            kinds("a @ b # $"),
            vec![
                Token::Ident,
                Token::Illegal,
                Token::Ident,
                Token::Illegal,
                Token::Illegal,
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_identifiers_take_only_decimal_digits() {
        assert_eq!(
            kinds("x½ y"),
            vec![Token::Ident, Token::Illegal, Token::Ident, Token::Eof]
        );
        assert_eq!(kinds("n²"), vec![Token::Ident, Token::Illegal, Token::Eof]);
        // Arabic-Indic and fullwidth digits are Nd.
        assert_eq!(kinds("x٣ y９"), vec![Token::Ident, Token::Ident, Token::Eof]);
        assert_eq!(kinds("日本語 _ü"), vec![Token::Ident, Token::Ident, Token::Eof]);
        // Letter numbers (Nl) are not letters.
        assert_eq!(kinds("Ⅻ"), vec![Token::Illegal, Token::Eof]);
    }

    #[test]
    fn test_offsets_count_chars() {
        let all: Vec<Boundary> = tokens("ü := \"日本\" + x").collect();
        let pairs: Vec<(usize, usize)> = all.iter().map(|b| (b.offset, b.byte_offset)).collect();
        assert_eq!(pairs, vec![(0, 0), (2, 3), (5, 6), (10, 15), (12, 17), (13, 18)]);
        assert_eq!(all[0].token, Token::Ident);
    }
}

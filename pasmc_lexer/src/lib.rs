pub mod cursor;
pub mod keywords;
pub mod tokens;

use cursor::Cursor;
use keywords::{check_keyword, Keywords, KEYWORDS};
use log::trace;
use tokens::{Token, TokenKind};

/// Pull-based scanner: every call to [`Scanner::next_token`] classifies the
/// next lexeme. Scanning never fails; unknown characters come back as
/// [`TokenKind::Error`] tokens.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a str,
    cursor: Cursor<'a>,
    keywords: &'a Keywords,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self::with_keywords(src, &KEYWORDS)
    }

    pub fn with_keywords(src: &'a str, keywords: &'a Keywords) -> Self {
        Self {
            src,
            cursor: Cursor::new(src),
            keywords,
        }
    }

    /// Byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Returns the next token. Once the input is exhausted every call yields
    /// [`TokenKind::EndOfInput`].
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.eat_while(char::is_whitespace);

        let start = self.cursor.pos();
        let Some(first_char) = self.cursor.bump() else {
            return Token::eof(start);
        };

        let kind = match first_char {
            c if c.is_ascii_digit() => self.number(),

            c if is_id_start(c) => self.ident(start),

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Mul,
            '/' => TokenKind::Div,
            '=' => TokenKind::Assign,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '>' => TokenKind::GreaterThan,

            _ => TokenKind::Error,
        };

        let token = Token::new(kind, &self.src[start..self.cursor.pos()], start);
        trace!("scanned {:?} {:?} at {}", token.kind, token.lexeme, token.offset);
        token
    }

    // Digits with at most one '.'; a second '.' is left for the next token.
    fn number(&mut self) -> TokenKind {
        let mut seen_dot = false;
        self.cursor.eat_while(|c| match c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        });

        if seen_dot {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        }
    }

    fn ident(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_id_continue);
        let ident = &self.src[start..self.cursor.pos()];
        check_keyword(self.keywords, ident).unwrap_or(TokenKind::Identifier)
    }
}

/// Every token of `input` up to, but not including, the end of input.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    let mut scanner = Scanner::new(input);
    std::iter::from_fn(move || {
        let token = scanner.next_token();
        if token.kind != TokenKind::EndOfInput {
            Some(token)
        } else {
            None
        }
    })
}

pub fn is_id_start(c: char) -> bool {
    unicode_ident::is_xid_start(c)
}

pub fn is_id_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

use std::fmt::Display;

/// A classified piece of source text.
///
/// `lexeme` borrows from the scanned source and is empty for
/// [`TokenKind::EndOfInput`]. `offset` is the byte offset where the lexeme
/// starts (the source length for end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, offset: usize) -> Self {
        Self {
            kind,
            lexeme,
            offset,
        }
    }

    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", offset)
    }

    /// `int` and `float` share their kinds with numeric literals; the lexeme
    /// tells them apart since a literal always starts with a digit.
    pub fn is_type_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::IntLiteral | TokenKind::FloatLiteral)
            && !self.lexeme.starts_with(|c: char| c.is_ascii_digit())
    }

    /// Tokens that can be loaded into a register: identifiers and numbers.
    pub fn is_operand(&self) -> bool {
        match self.kind {
            TokenKind::Identifier => true,
            TokenKind::IntLiteral | TokenKind::FloatLiteral => !self.is_type_keyword(),
            _ => false,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    IntLiteral,
    FloatLiteral,
    Identifier,
    Plus,
    Minus,
    Mul,
    Div,
    Assign,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    If,
    Else,
    While,
    Print,
    EndOfInput,
    Error,
    GreaterThan,
}

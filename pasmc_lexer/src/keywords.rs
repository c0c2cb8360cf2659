use phf::phf_map;

use crate::tokens::TokenKind;

/// Maps reserved words to the kind they scan as.
pub type Keywords = phf::Map<&'static str, TokenKind>;

/// The default reserved words. The type keywords reuse the numeric literal
/// kinds, see [`crate::tokens::Token::is_type_keyword`].
pub static KEYWORDS: Keywords = phf_map! {
    "if" => TokenKind::If,
    "else" => TokenKind::Else,
    "while" => TokenKind::While,
    "print" => TokenKind::Print,
    "int" => TokenKind::IntLiteral,
    "float" => TokenKind::FloatLiteral,
};

pub fn check_keyword(keywords: &Keywords, ident: &str) -> Option<TokenKind> {
    keywords.get(ident).copied()
}

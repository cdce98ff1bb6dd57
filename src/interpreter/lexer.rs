use logos::Logos;

/// Represents a lexical unit recognized by a terminal matcher.
///
/// The grammar engine is scannerless: a terminal lexes exactly one lexeme at
/// its starting offset and succeeds only if the lexeme has the expected kind.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    /// Floating-point literals such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// A run of blanks, tabs, feeds and newlines.
    #[regex(r"[ \t\n\r\f]+")]
    Whitespace,
}

/// Lexes the first lexeme of `source`.
///
/// # Parameters
/// - `source`: Text starting at the offset being probed.
///
/// # Returns
/// - `Some((Lexeme, usize))`: The lexeme kind and its length in bytes.
/// - `None`: If `source` is empty or starts with an unrecognized character.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Lexeme, first_lexeme};
///
/// assert_eq!(first_lexeme("12.5 + 1"), Some((Lexeme::Float, 4)));
/// assert_eq!(first_lexeme("12 + 1"), Some((Lexeme::Int, 2)));
/// assert_eq!(first_lexeme("abc"), None);
/// ```
#[must_use]
pub fn first_lexeme(source: &str) -> Option<(Lexeme, usize)> {
    let mut lexer = Lexeme::lexer(source);
    match lexer.next() {
        Some(Ok(lexeme)) => Some((lexeme, lexer.span().end)),
        _ => None,
    }
}

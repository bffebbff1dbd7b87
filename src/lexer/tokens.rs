use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

/// Classifies an identifier-shaped lexeme, only exact matches are keywords.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,
    Int,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    Greater,

    Plus,
    Dash,
    Slash,
    Star,

    Comma,
    Semicolon,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Fn,
    Let,
    If,
    Else,
    Return,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl PartialEq for Token {
    // Spans are ignored, two tokens are equal when they lex the same text.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Int, TokenKind::Illegal]) {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

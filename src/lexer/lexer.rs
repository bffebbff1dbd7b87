use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

pub type RegexHandler = fn(String, Span) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\r\n]+").unwrap();
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
    ];
}

/// Lazy tokenizer over a single immutable source buffer.
///
/// Every call to [`Lexer::next_token`] classifies the next lexeme. Once the
/// input is exhausted it keeps returning an `EOF` token with empty text.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// The character under the cursor, `None` at end of input.
    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// The character after the one under the cursor, without consuming anything.
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(&self.source[self.pos..]) {
            self.advance_n(matched.end());
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;

        let ch = match self.at() {
            Some(ch) => ch,
            None => return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(self, start, start)),
        };

        for pattern in PATTERNS.iter() {
            let matched = pattern
                .regex
                .find(&self.source[self.pos..])
                .map(|m| m.as_str().to_string());

            if let Some(value) = matched {
                self.advance_n(value.len());
                return (pattern.handler)(value, MK_SPAN!(self, start, self.pos));
            }
        }

        let kind = match ch {
            '=' if self.peek() == Some('=') => TokenKind::Equals,
            '=' => TokenKind::Assignment,
            '!' if self.peek() == Some('=') => TokenKind::NotEquals,
            '!' => TokenKind::Not,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Dash,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '{' => TokenKind::OpenCurly,
            '}' => TokenKind::CloseCurly,
            _ => TokenKind::Illegal,
        };

        let len = match kind {
            TokenKind::Equals | TokenKind::NotEquals => 2,
            _ => ch.len_utf8(),
        };

        let value = String::from(&self.source[start..start + len]);
        self.advance_n(len);

        MK_TOKEN!(kind, value, MK_SPAN!(self, start, self.pos))
    }
}

/// Yields every token before end of input, then stops.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

fn number_handler(value: String, span: Span) -> Token {
    MK_TOKEN!(TokenKind::Int, value, span)
}

fn symbol_handler(value: String, span: Span) -> Token {
    MK_TOKEN!(lookup_identifier(&value), value, span)
}

/// Tokenizes the whole source, the returned vector always ends with `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

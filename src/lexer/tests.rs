//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and punctuation
//! - Illegal characters and end of input

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let source = "fn let if else return true false".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::Return);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_baz _underscore CamelCase".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_baz");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("letx".to_string(), None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "letx");
    assert_eq!(lookup_identifier("fnord"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("fn"), TokenKind::Fn);
}

#[test]
fn test_digits_end_identifier() {
    // Identifiers are letters and underscores only
    let tokens = tokenize("x1".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "1");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 838383 -7".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "838383");
    assert_eq!(tokens[3].kind, TokenKind::Dash);
    assert_eq!(tokens[4].kind, TokenKind::Int);
    assert_eq!(tokens[4].value, "7");
}

#[test]
fn test_tokenize_operators() {
    let source = "= + - ! * / < > == !=".to_string();
    let tokens = tokenize(source, None);

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Dash);
    assert_eq!(tokens[3].kind, TokenKind::Not);
    assert_eq!(tokens[4].kind, TokenKind::Star);
    assert_eq!(tokens[5].kind, TokenKind::Slash);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::Equals);
    assert_eq!(tokens[8].value, "==");
    assert_eq!(tokens[9].kind, TokenKind::NotEquals);
    assert_eq!(tokens[9].value, "!=");
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_two_char_operators_without_spaces() {
    let tokens = tokenize("a==b!=!c=d".to_string(), None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } , ;".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let add = fn(x, y) {
  x + y;
};
let result = add(five, 10);
if (5 < 10) {
    return true;
} else {
    return false;
}"
    .to_string();

    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::EOF, ""),
    ];

    let tokens = tokenize(source, None);
    assert_eq!(tokens.len(), expected.len());

    for (token, (kind, value)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize(" \t let\r\n  x   =\n42  ".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_illegal_characters_advance() {
    let tokens = tokenize("@#é 5".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].value, "@");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "#");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].value, "é");
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_empty_input() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_peek_does_not_consume() {
    let mut lexer = Lexer::new("!=".to_string(), None);

    assert_eq!(lexer.at(), Some('!'));
    assert_eq!(lexer.peek(), Some('='));
    assert_eq!(lexer.at(), Some('!'));
    assert_eq!(lexer.next_token().kind, TokenKind::NotEquals);
    assert_eq!(lexer.at(), None);
    assert_eq!(lexer.peek(), None);
}

#[test]
fn test_iterator_stops_before_eof() {
    let lexer = Lexer::new("1 + 2".to_string(), None);
    let values: Vec<String> = lexer.map(|t| t.value).collect();

    assert_eq!(values, vec!["1", "+", "2"]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let abc == 10".to_string(), Some("spans.mk".to_string()));

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(tokens[2].span.end.0, 10);
    assert_eq!(*tokens[3].span.start.1, "spans.mk");
    assert_eq!(tokens[4].span.start.0, 13);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("foo ; @".to_string(), None);

    assert_eq!(tokens[0].to_string(), "Identifier (foo)");
    assert_eq!(tokens[1].to_string(), "Semicolon");
    assert_eq!(tokens[2].to_string(), "Illegal (@)");
}

#[test]
fn test_file_name() {
    assert_eq!(*Lexer::new("x".to_string(), None).file(), "shell");
    assert_eq!(
        *Lexer::new("x".to_string(), Some("main.mk".to_string())).file(),
        "main.mk"
    );
}

//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser pulls tokens lazily from a [`Lexer`] and keeps a two token
//! window (`current` and `peek`). Expressions are parsed Pratt style with
//! NUD/LED handlers, statements are dispatched on their leading token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Malformed input never aborts the parse. A failing statement is recorded
//! in the diagnostic list and skipped.

use std::collections::HashMap;

use crate::{
    ast::ast::{Program, Statement},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions and blocks may be open at once before the parser
/// gives up on a statement with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, pulled on demand
    lexer: Lexer,
    /// The token under the cursor
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Number of tokens consumed so far
    pos: usize,
    /// Expressions and blocks currently being parsed
    depth: usize,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `lexer` with every handler registered.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            pos: 0,
            depth: 0,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// At end of input the cursor stays on `EOF`.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = std::mem::replace(&mut self.peek, next);
        self.pos += 1;

        std::mem::replace(&mut self.current, peek)
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `ExpectedToken` error positioned at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: self.current.kind,
                },
                self.get_position(),
            ));
        }

        Ok(self.advance())
    }

    /// Consumes the current token only if it is of `kind`.
    pub fn skip(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true until the cursor reaches `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Binding power of the current token, `Lowest` when it is not an infix operator.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.current.kind)
            .unwrap_or(&BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Opens one level of nesting, failing once `MAX_NESTING_DEPTH` levels are open.
    ///
    /// Every successful call must be paired with [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Appends a diagnostic without interrupting the parse.
    pub fn record(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Diagnostics recorded so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Diagnostics rendered as plain messages.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Parses one statement, turning a failure into a recorded diagnostic.
    ///
    /// After a failure the rest of the statement is skipped: tokens are
    /// dropped up to and including the next `;`, stopping early before a
    /// `}`, `EOF` or a token that starts a statement. At least one token is
    /// always consumed so the caller's loop makes progress. A lone `;` that
    /// failed is its own terminator.
    pub fn parse_stmt_recovering(&mut self) -> Option<Statement> {
        let start = self.pos;

        match parse_stmt(self) {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.record(error);
                if self.pos == start && self.advance().kind == TokenKind::Semicolon {
                    return None;
                }
                self.synchronize();
                None
            }
        }
    }

    fn synchronize(&mut self) {
        while !matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF
        ) && !self.stmt_lookup.contains_key(&self.current.kind)
        {
            self.advance();
        }

        self.skip(TokenKind::Semicolon);
    }

    /// Parses statements until `EOF`.
    ///
    /// Malformed statements are left out of the returned program; their
    /// diagnostics are available through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while self.has_tokens() {
            if let Some(stmt) = self.parse_stmt_recovering() {
                statements.push(stmt);
            }
        }

        Program { statements }
    }
}

/// Tokenizes and parses `source` in one go.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the diagnostics
/// - The parsed Program, possibly missing malformed statements
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}

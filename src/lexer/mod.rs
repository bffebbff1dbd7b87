//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a lazy stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, integers and operators
//! - Illegal characters, surfaced as tokens rather than errors
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

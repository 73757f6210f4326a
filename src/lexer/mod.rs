//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a flat stream of tokens. It handles:
//!
//! - A hand-built finite-state automaton with one character of pushback
//! - Recognition of keywords, identifiers, literals, and operators
//! - Reinterpreting `0`/`1` as boolean literals after a `bool` declaration
//! - Line comments and whitespace skipping
//! - Token position tracking for error reporting

pub mod cursor;
pub mod lexer;
pub mod tokens;

//! Error types and error handling for the lexer.
//!
//! This module defines the fatal lexical errors. Every error carries the
//! source position it was detected at, a short name and an optional tip
//! used when the error is rendered for the user.

pub mod errors;

#[cfg(test)]
mod tests;

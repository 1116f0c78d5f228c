//! Error types for the SLR(1) toolkit.
//!
//! Split by concern rather than kept as one flat enum: grammar parsing,
//! table construction, the parse driver, and token-file reading each fail
//! in different ways and at different stages of the pipeline.

use thiserror::Error;

/// Errors raised while building a [`crate::grammar::Grammar`] from `.yalp`
/// source text.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrammarError {
    #[error("no '%%' separator found between header and grammar body")]
    MissingBody,

    #[error("malformed production at line {line}")]
    MalformedProduction { line: usize },

    #[error("symbols cannot be both terminal and nonterminal: {symbols:?}")]
    Overlap { symbols: Vec<String> },
}

/// Errors raised while projecting the canonical collection into ACTION/GOTO
/// tables, under [`crate::table::ConflictPolicy::FailOnConflict`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TableBuildError {
    #[error("shift/reduce conflict at state {state}, symbol '{symbol}'")]
    ShiftReduceConflict { state: usize, symbol: String },

    #[error(
        "reduce/reduce conflict at state {state}, symbol '{symbol}' between productions {prod1} and {prod2}"
    )]
    ReduceReduceConflict {
        state: usize,
        symbol: String,
        prod1: usize,
        prod2: usize,
    },

    #[error("shift/shift conflict at state {state}, symbol '{symbol}'")]
    ShiftShiftConflict { state: usize, symbol: String },
}

/// Errors raised while driving tokens through the shift-reduce automaton.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("unexpected token '{kind}' at state {state} (line {line}, column {column})")]
    Unexpected {
        kind: String,
        state: usize,
        line: usize,
        column: usize,
    },

    #[error("no GOTO entry for state {state} on nonterminal '{nonterminal}'")]
    NoGoto { state: usize, nonterminal: String },

    #[error("parse accepted but node stack has {size} entries, expected 1")]
    StackInvariant { size: usize },
}

/// Errors raised while reading a token file (§6 of the spec).
#[derive(Error, Debug)]
pub enum TokenFileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed token-file line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },
}

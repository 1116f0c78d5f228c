//! Symbol types for context-free grammars.
//!
//! This module defines the core `Symbol` type used throughout the toolkit
//! to identify terminals, nonterminals, and the end-of-input marker.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Represents a symbol in a context-free grammar.
///
/// Terminals and nonterminals are identified by name (an
/// `[A-Za-z_][A-Za-z0-9_]*` identifier coming out of a `.yalp` file); `$`
/// is the reserved end-of-input marker. Cloning a `Symbol` is a pointer
/// bump, not a string copy, since sets and maps keyed by symbols compare
/// by identity and symbols get cloned into many items and table keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A terminal symbol.
    Terminal(Rc<str>),
    /// A nonterminal symbol.
    Nonterminal(Rc<str>),
    /// The end-of-input marker (`$`).
    EndMarker,
}

impl Symbol {
    /// Reserved name for the augmented start symbol.
    pub const AUGMENTED_START_NAME: &'static str = "S'";

    /// Builds a terminal symbol with the given name.
    pub fn terminal(name: impl AsRef<str>) -> Self {
        Symbol::Terminal(Rc::from(name.as_ref()))
    }

    /// Builds a nonterminal symbol with the given name.
    pub fn nonterminal(name: impl AsRef<str>) -> Self {
        Symbol::Nonterminal(Rc::from(name.as_ref()))
    }

    /// Checks if this symbol is a terminal.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Checks if this symbol is a nonterminal.
    #[inline]
    pub fn is_nonterminal(&self) -> bool {
        matches!(self, Symbol::Nonterminal(_))
    }

    /// Checks if this symbol is the end marker (`$`).
    #[inline]
    pub fn is_end_marker(&self) -> bool {
        matches!(self, Symbol::EndMarker)
    }

    /// Returns the name of this symbol, if it has one (terminals and
    /// nonterminals only; `$` has no name).
    pub fn name(&self) -> Option<&str> {
        match self {
            Symbol::Terminal(s) | Symbol::Nonterminal(s) => Some(s),
            Symbol::EndMarker => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(s) | Symbol::Nonterminal(s) => write!(f, "{}", s),
            Symbol::EndMarker => write!(f, "$"),
        }
    }
}

/// Custom ordering so item sets (`BTreeSet<Item>`) and diagnostics have a
/// stable, hash-seed-independent order.
///
/// Order: Terminal < Nonterminal < EndMarker; within a variant, by name.
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Symbol::Terminal(a), Symbol::Terminal(b)) => a.cmp(b),
            (Symbol::Terminal(_), _) => Ordering::Less,
            (_, Symbol::Terminal(_)) => Ordering::Greater,

            (Symbol::Nonterminal(a), Symbol::Nonterminal(b)) => a.cmp(b),
            (Symbol::Nonterminal(_), Symbol::EndMarker) => Ordering::Less,
            (Symbol::EndMarker, Symbol::Nonterminal(_)) => Ordering::Greater,

            (Symbol::EndMarker, Symbol::EndMarker) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

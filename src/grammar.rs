//! Grammar model for context-free grammars (component C1).
//!
//! Builds a [`Grammar`] from `.yalp` source text (spec §6): `%token`
//! declarations, a `%%` separator, then `;`-terminated productions of the
//! form `LHS : ALT1 | ALT2 | … ;`.

use crate::error::GrammarError;
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A production rule `LHS → RHS` with a stable index assigned at
/// construction time.
///
/// The index is used verbatim as the `reduce k` payload in the ACTION
/// table (§3) and as the production identifier in diagnostics. Indices are
/// assigned in source order; after [`Grammar::augment`], the augmented
/// production `S' → S` is index 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    pub index: usize,
    pub lhs: Symbol,
    pub rhs: Vec<Symbol>,
}

impl Production {
    fn new(index: usize, lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Self { index, lhs, rhs }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs_str = self
            .rhs
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} → {}", self.lhs, rhs_str)
    }
}

/// A context-free grammar: terminals, nonterminals, productions, start
/// symbol.
///
/// Immutable after construction except for the one-time [`Grammar::augment`]
/// call (§3).
#[derive(Debug, Clone)]
pub struct Grammar {
    terminals: HashSet<Symbol>,
    nonterminals: Vec<Symbol>,
    productions: Vec<Production>,
    /// The original (pre-augmentation) start symbol; stays stable across
    /// [`Grammar::augment`] so FOLLOW-set seeding (§4.2, open question 2)
    /// always has a fixed target.
    start_symbol: Symbol,
    productions_by_lhs: HashMap<Symbol, Vec<usize>>,
    augmented: bool,
}

impl Grammar {
    /// Parses a grammar from `.yalp` source text.
    ///
    /// See spec §6 for the file format and §4.1 for the construction rules
    /// (first LHS is the start symbol, nonterminals recorded in
    /// first-appearance order, RHS symbols not already nonterminals become
    /// terminals).
    pub fn build(spec_text: &str) -> Result<Self, GrammarError> {
        let mut explicit_terminals: HashSet<String> = HashSet::new();
        for line in spec_text.lines() {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix("%token") {
                explicit_terminals.extend(rest.split_whitespace().map(String::from));
            }
        }

        let Some((_, body)) = spec_text.split_once("%%") else {
            return Err(GrammarError::MissingBody);
        };
        let body_offset = spec_text.len() - body.len();

        let mut nonterminal_order: Vec<String> = Vec::new();
        let mut nonterminal_names: HashSet<String> = HashSet::new();
        let mut start_name: Option<String> = None;
        let mut raw_productions: Vec<(String, Vec<String>)> = Vec::new();

        let mut scan_pos = 0usize;
        for block in body.split(';') {
            let block_start = scan_pos;
            scan_pos += block.len() + 1; // account for the ';' we split on
            let trimmed = block.trim();
            if trimmed.is_empty() {
                continue;
            }

            let Some((lhs_part, rhs_part)) = trimmed.split_once(':') else {
                let line = spec_text[..body_offset + block_start].matches('\n').count() + 1;
                return Err(GrammarError::MalformedProduction { line });
            };
            let lhs = lhs_part.trim().to_string();
            if lhs.is_empty() {
                let line = spec_text[..body_offset + block_start].matches('\n').count() + 1;
                return Err(GrammarError::MalformedProduction { line });
            }

            if start_name.is_none() {
                start_name = Some(lhs.clone());
            }
            if nonterminal_names.insert(lhs.clone()) {
                nonterminal_order.push(lhs.clone());
            }

            for alt in rhs_part.split('|') {
                let symbols: Vec<String> =
                    alt.split_whitespace().map(String::from).collect();
                if symbols.is_empty() {
                    let line =
                        spec_text[..body_offset + block_start].matches('\n').count() + 1;
                    return Err(GrammarError::MalformedProduction { line });
                }
                raw_productions.push((lhs.clone(), symbols));
            }
        }

        if raw_productions.is_empty() {
            return Err(GrammarError::MissingBody);
        }

        let mut terminal_names = explicit_terminals;
        for (_, rhs) in &raw_productions {
            for sym in rhs {
                if !nonterminal_names.contains(sym) {
                    terminal_names.insert(sym.clone());
                }
            }
        }

        let overlap: Vec<String> = nonterminal_names
            .intersection(&terminal_names)
            .cloned()
            .collect();
        if !overlap.is_empty() {
            let mut symbols = overlap;
            symbols.sort();
            return Err(GrammarError::Overlap { symbols });
        }

        let terminals: HashSet<Symbol> =
            terminal_names.iter().map(Symbol::terminal).collect();
        let nonterminals: Vec<Symbol> =
            nonterminal_order.iter().map(Symbol::nonterminal).collect();

        let mut productions = Vec::with_capacity(raw_productions.len());
        let mut productions_by_lhs: HashMap<Symbol, Vec<usize>> = HashMap::new();
        for (index, (lhs_name, rhs_names)) in raw_productions.into_iter().enumerate() {
            let lhs = Symbol::nonterminal(&lhs_name);
            let rhs: Vec<Symbol> = rhs_names
                .iter()
                .map(|name| {
                    if nonterminal_names.contains(name) {
                        Symbol::nonterminal(name)
                    } else {
                        Symbol::terminal(name)
                    }
                })
                .collect();
            productions_by_lhs.entry(lhs.clone()).or_default().push(index);
            productions.push(Production::new(index, lhs, rhs));
        }

        let start_symbol = Symbol::nonterminal(start_name.expect("checked non-empty above"));

        Ok(Self {
            terminals,
            nonterminals,
            productions,
            start_symbol,
            productions_by_lhs,
            augmented: false,
        })
    }

    /// Prepends `S'` to nonterminals and `S' → S` to productions,
    /// re-indexing so the augmented production is index 0 (§4.1).
    ///
    /// Must be called exactly once, before building the automaton. Calling
    /// it twice is a programming error.
    pub fn augment(&mut self) {
        assert!(!self.augmented, "Grammar::augment called more than once");

        let augmented_start = Symbol::nonterminal(Symbol::AUGMENTED_START_NAME);
        self.nonterminals.insert(0, augmented_start.clone());

        for prod in &mut self.productions {
            prod.index += 1;
        }
        let shifted: HashMap<Symbol, Vec<usize>> = self
            .productions_by_lhs
            .drain()
            .map(|(sym, indices)| (sym, indices.into_iter().map(|i| i + 1).collect()))
            .collect();
        self.productions_by_lhs = shifted;

        let augmented_prod =
            Production::new(0, augmented_start.clone(), vec![self.start_symbol.clone()]);
        self.productions.insert(0, augmented_prod);
        self.productions_by_lhs.insert(augmented_start, vec![0]);

        self.augmented = true;
    }

    /// Whether [`Grammar::augment`] has been called.
    pub fn is_augmented(&self) -> bool {
        self.augmented
    }

    /// The augmented start symbol (`S'`), once augmented.
    pub fn augmented_start_symbol(&self) -> Option<Symbol> {
        self.augmented
            .then(|| Symbol::nonterminal(Symbol::AUGMENTED_START_NAME))
    }

    /// Returns the indices of all productions for a given nonterminal.
    pub fn production_indices(&self, nt: &Symbol) -> &[usize] {
        self.productions_by_lhs
            .get(nt)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Returns a production by its stable index.
    pub fn production(&self, index: usize) -> &Production {
        &self.productions[index]
    }

    /// Returns all productions in index order.
    pub fn all_productions(&self) -> &[Production] {
        &self.productions
    }

    /// Returns all nonterminals, in first-appearance order (augmented
    /// start prepended, if augmented).
    pub fn nonterminals(&self) -> &[Symbol] {
        &self.nonterminals
    }

    /// Returns all terminals (unordered).
    pub fn terminals(&self) -> &HashSet<Symbol> {
        &self.terminals
    }

    /// Returns the original (pre-augmentation) start symbol.
    pub fn start_symbol(&self) -> &Symbol {
        &self.start_symbol
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prod in &self.productions {
            writeln!(f, "{}", prod)?;
        }
        Ok(())
    }
}

//! FIRST and FOLLOW set computation for context-free grammars (component C2).
//!
//! Implements the fixed-point algorithms from Aho et al., "Compilers:
//! Principles, Techniques, and Tools", §4.4 — with no epsilon handling,
//! since `.yalp` grammars may not contain empty-RHS productions (spec.md
//! §9, open question 1).

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet};

/// Maps each symbol to its FIRST set.
pub type FirstSets = HashMap<Symbol, HashSet<Symbol>>;

/// Maps each nonterminal to its FOLLOW set.
pub type FollowSets = HashMap<Symbol, HashSet<Symbol>>;

/// Computes FIRST sets for every terminal and nonterminal in the grammar.
///
/// FIRST(terminal) = {terminal}. FIRST(A) for a production `A → X₁X₂…Xₙ`
/// is FIRST(X₁), since no symbol can derive the empty string; the result
/// converges by ordinary fixed-point iteration over the production list.
pub fn compute_first_sets(grammar: &Grammar) -> FirstSets {
    let mut first_sets: FirstSets = HashMap::new();

    for terminal in grammar.terminals() {
        first_sets.insert(terminal.clone(), HashSet::from([terminal.clone()]));
    }
    for nonterminal in grammar.nonterminals() {
        first_sets.entry(nonterminal.clone()).or_default();
    }

    let mut changed = true;
    while changed {
        changed = false;

        for production in grammar.all_productions() {
            let lhs = &production.lhs;
            let current_first = first_sets.get(lhs).cloned().unwrap_or_default();

            let rhs_first = first_of_string(&first_sets, &production.rhs);
            let new_first: HashSet<Symbol> =
                current_first.union(&rhs_first).cloned().collect();

            if new_first.len() != current_first.len() {
                first_sets.insert(lhs.clone(), new_first);
                changed = true;
            }
        }
    }

    first_sets
}

/// Computes the FIRST set of a symbol string: simply FIRST of its first
/// symbol, since no production may derive the empty string. An empty
/// string has no FIRST set.
pub fn first_of_string(first_sets: &FirstSets, symbols: &[Symbol]) -> HashSet<Symbol> {
    match symbols.first() {
        Some(first_symbol) => first_sets.get(first_symbol).cloned().unwrap_or_default(),
        None => HashSet::new(),
    }
}

/// Computes FOLLOW sets for every nonterminal in the grammar.
///
/// FOLLOW(start) always contains `$` (seeded on the *original*, pre-
/// augmentation start symbol — spec.md §9, open question 2). For each
/// production `A → αBβ` with `B` a nonterminal: FOLLOW(B) gains FIRST(β);
/// if `β` is empty, FOLLOW(B) also gains FOLLOW(A).
pub fn compute_follow_sets(grammar: &Grammar, first_sets: &FirstSets) -> FollowSets {
    let mut follow_sets: FollowSets = HashMap::new();

    for nonterminal in grammar.nonterminals() {
        follow_sets.entry(nonterminal.clone()).or_default();
    }

    follow_sets
        .entry(grammar.start_symbol().clone())
        .or_default()
        .insert(Symbol::EndMarker);

    let mut changed = true;
    while changed {
        changed = false;

        for production in grammar.all_productions() {
            let lhs = &production.lhs;
            let rhs = &production.rhs;

            for (i, symbol) in rhs.iter().enumerate() {
                if !symbol.is_nonterminal() {
                    continue;
                }

                let current_follow = follow_sets.get(symbol).cloned().unwrap_or_default();
                let mut new_follow = current_follow.clone();

                let beta = &rhs[i + 1..];
                let first_beta = first_of_string(first_sets, beta);
                new_follow.extend(first_beta.iter().cloned());

                if beta.is_empty() {
                    let follow_lhs = follow_sets.get(lhs).cloned().unwrap_or_default();
                    new_follow.extend(follow_lhs);
                }

                if new_follow.len() != current_follow.len() {
                    follow_sets.insert(symbol.clone(), new_follow);
                    changed = true;
                }
            }
        }
    }

    follow_sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn grammar(text: &str) -> Grammar {
        Grammar::build(text).unwrap()
    }

    #[test]
    fn first_of_terminal_is_itself() {
        let g = grammar("%%\nS : a ;\n");
        let first = compute_first_sets(&g);
        assert_eq!(
            first.get(&Symbol::terminal("a")).unwrap(),
            &HashSet::from([Symbol::terminal("a")])
        );
    }

    #[test]
    fn first_of_nonterminal_propagates_through_productions() {
        let g = grammar("%%\nS : A ;\nA : a ;\n");
        let first = compute_first_sets(&g);
        assert_eq!(
            first.get(&Symbol::nonterminal("S")).unwrap(),
            &HashSet::from([Symbol::terminal("a")])
        );
    }

    #[test]
    fn first_propagates_through_chain_of_nonterminals() {
        let g = grammar("%%\nS : A ;\nA : B ;\nB : b ;\n");
        let first = compute_first_sets(&g);
        assert_eq!(
            first.get(&Symbol::nonterminal("S")).unwrap(),
            &HashSet::from([Symbol::terminal("b")])
        );
    }

    #[test]
    fn first_of_string_is_first_of_leading_symbol() {
        let g = grammar("%%\nS : A b ;\nA : a ;\n");
        let first = compute_first_sets(&g);
        let string_first = first_of_string(&first, &[Symbol::nonterminal("A"), Symbol::terminal("b")]);
        assert_eq!(string_first, HashSet::from([Symbol::terminal("a")]));
    }

    #[test]
    fn follow_of_start_contains_end_marker() {
        let g = grammar("%%\nS : a ;\n");
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        assert!(follow.get(&Symbol::nonterminal("S")).unwrap().contains(&Symbol::EndMarker));
    }

    #[test]
    fn follow_gains_first_of_trailing_string() {
        let g = grammar("%%\nS : A b ;\nA : a ;\n");
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        assert_eq!(
            follow.get(&Symbol::nonterminal("A")).unwrap(),
            &HashSet::from([Symbol::terminal("b")])
        );
    }

    #[test]
    fn follow_propagates_from_lhs_when_nonterminal_is_trailing() {
        let g = grammar("%%\nS : a A ;\nA : b ;\n");
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        assert!(follow.get(&Symbol::nonterminal("A")).unwrap().contains(&Symbol::EndMarker));
    }

    #[test]
    fn follow_is_seeded_on_original_start_before_augmentation() {
        let mut g = grammar("%%\nS : a ;\n");
        g.augment();
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        assert!(follow.get(&Symbol::nonterminal("S")).unwrap().contains(&Symbol::EndMarker));
    }
}

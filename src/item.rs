//! LR(0) items and item-set algebra (component C3).
//!
//! An item tracks a production and a dot position into its RHS by index
//! rather than embedding a cloned [`crate::grammar::Production`] — the
//! production index is the stable handle used everywhere else (ACTION
//! table `Reduce` entries, diagnostics), so items carry the same handle
//! instead of a second copy of the rule.

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::BTreeSet;

/// An LR(0) item: a production together with a dot position into its RHS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    pub production: usize,
    pub dot: usize,
}

impl Item {
    pub fn new(production: usize, dot: usize) -> Self {
        Self { production, dot }
    }

    /// The symbol immediately after the dot, or `None` if the dot is at
    /// the end of the production (the item is "complete").
    pub fn next_symbol<'g>(&self, grammar: &'g Grammar) -> Option<&'g Symbol> {
        grammar.production(self.production).rhs.get(self.dot)
    }

    /// Whether the dot has reached the end of the production's RHS.
    pub fn is_complete(&self, grammar: &Grammar) -> bool {
        self.dot >= grammar.production(self.production).rhs.len()
    }

    /// Returns the item with the dot advanced one position.
    pub fn advance(&self) -> Self {
        Self::new(self.production, self.dot + 1)
    }
}

/// A set of items; `BTreeSet` rather than `HashSet` so iteration order is
/// deterministic across runs regardless of hash-seed randomization (the
/// determinism requirement in spec.md §8).
pub type ItemSet = BTreeSet<Item>;

/// Computes the closure of a set of items (spec.md §4.3): repeatedly, for
/// every item `A → α · B β` with `B` a nonterminal, add the initial items
/// `B → · γ` for every production of `B`, until no item is added.
pub fn closure(grammar: &Grammar, items: &ItemSet) -> ItemSet {
    let mut result: ItemSet = items.clone();
    let mut worklist: Vec<Item> = items.iter().copied().collect();

    while let Some(item) = worklist.pop() {
        let Some(symbol) = item.next_symbol(grammar) else {
            continue;
        };
        if !symbol.is_nonterminal() {
            continue;
        }

        for &production_index in grammar.production_indices(symbol) {
            let new_item = Item::new(production_index, 0);
            if result.insert(new_item) {
                worklist.push(new_item);
            }
        }
    }

    result
}

/// Computes `goto(items, symbol)` (spec.md §4.3): advance the dot past
/// `symbol` in every item of `items` that has `symbol` immediately after
/// the dot, then take the closure of the result.
pub fn goto(grammar: &Grammar, items: &ItemSet, symbol: &Symbol) -> ItemSet {
    let moved: ItemSet = items
        .iter()
        .filter(|item| item.next_symbol(grammar) == Some(symbol))
        .map(Item::advance)
        .collect();

    closure(grammar, &moved)
}

//! SLR(1) ACTION/GOTO table construction (component C5).

use crate::automaton::Automaton;
use crate::error::TableBuildError;
use crate::first_follow::FollowSets;
use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::HashMap;

/// A single entry of the ACTION table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Shift(usize),
    Reduce(usize),
    Accept,
}

/// How [`SlrTable::build`] handles a shift/reduce, reduce/reduce, or
/// shift/shift conflict while projecting the canonical collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Resolve with the fixed policy below and keep going, recording every
    /// resolution in [`SlrTable::conflicts`].
    ResolveAndWarn,
    /// Fail immediately with a [`TableBuildError`] on the first conflict.
    FailOnConflict,
}

/// A record of one conflict that [`ConflictPolicy::ResolveAndWarn`]
/// resolved in place of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictRecord {
    pub state: usize,
    pub symbol: Symbol,
    pub existing: Action,
    pub proposed: Action,
    pub resolved: Action,
}

/// The projected ACTION/GOTO tables plus any conflicts resolved along the
/// way.
#[derive(Debug, Clone)]
pub struct SlrTable {
    action: HashMap<(usize, Symbol), Action>,
    goto: HashMap<(usize, Symbol), usize>,
    conflicts: Vec<ConflictRecord>,
}

impl SlrTable {
    /// Projects the canonical collection into ACTION/GOTO tables (spec.md
    /// §4.5).
    ///
    /// For each complete item `A → α ·` in state `i`: if it's the
    /// augmented production, `ACTION[i, $] = Accept`; otherwise
    /// `ACTION[i, a] = Reduce(production)` for every `a` in FOLLOW(A). For
    /// each item `A → α · aβ` with `a` a terminal, `ACTION[i, a] =
    /// Shift(goto(i, a))`. GOTO entries come straight from the automaton's
    /// nonterminal transitions.
    ///
    /// Conflicting entries are resolved (shift wins over reduce; lower
    /// production index wins a reduce/reduce tie; the first-seen action
    /// wins a shift/shift tie) or, under
    /// [`ConflictPolicy::FailOnConflict`], reported as a
    /// [`TableBuildError`].
    pub fn build(
        grammar: &Grammar,
        automaton: &Automaton,
        follow_sets: &FollowSets,
        policy: ConflictPolicy,
    ) -> Result<Self, TableBuildError> {
        let mut action: HashMap<(usize, Symbol), Action> = HashMap::new();
        let mut conflicts: Vec<ConflictRecord> = Vec::new();

        for (state_index, items) in automaton.states.iter().enumerate() {
            for item in items {
                if item.is_complete(grammar) {
                    if item.production == 0 {
                        propose(
                            &mut action,
                            &mut conflicts,
                            policy,
                            state_index,
                            Symbol::EndMarker,
                            Action::Accept,
                        )?;
                        continue;
                    }

                    let production = grammar.production(item.production);
                    if let Some(follow) = follow_sets.get(&production.lhs) {
                        for terminal in follow {
                            propose(
                                &mut action,
                                &mut conflicts,
                                policy,
                                state_index,
                                terminal.clone(),
                                Action::Reduce(item.production),
                            )?;
                        }
                    }
                } else if let Some(next) = item.next_symbol(grammar) {
                    if next.is_terminal() {
                        if let Some(&target) =
                            automaton.transitions.get(&(state_index, next.clone()))
                        {
                            propose(
                                &mut action,
                                &mut conflicts,
                                policy,
                                state_index,
                                next.clone(),
                                Action::Shift(target),
                            )?;
                        }
                    }
                }
            }
        }

        let goto: HashMap<(usize, Symbol), usize> = automaton
            .transitions
            .iter()
            .filter(|((_, symbol), _)| symbol.is_nonterminal())
            .map(|(key, &target)| (key.clone(), target))
            .collect();

        Ok(Self {
            action,
            goto,
            conflicts,
        })
    }

    pub fn action(&self, state: usize, symbol: &Symbol) -> Option<&Action> {
        self.action.get(&(state, symbol.clone()))
    }

    pub fn goto(&self, state: usize, nonterminal: &Symbol) -> Option<usize> {
        self.goto.get(&(state, nonterminal.clone())).copied()
    }

    pub fn conflicts(&self) -> &[ConflictRecord] {
        &self.conflicts
    }
}

fn propose(
    action: &mut HashMap<(usize, Symbol), Action>,
    conflicts: &mut Vec<ConflictRecord>,
    policy: ConflictPolicy,
    state: usize,
    symbol: Symbol,
    proposed: Action,
) -> Result<(), TableBuildError> {
    let key = (state, symbol.clone());
    let Some(existing) = action.get(&key).cloned() else {
        action.insert(key, proposed);
        return Ok(());
    };

    if existing == proposed {
        return Ok(());
    }

    let resolved = resolve(&existing, &proposed);

    match policy {
        ConflictPolicy::FailOnConflict => Err(conflict_error(state, &symbol, &existing, &proposed)),
        ConflictPolicy::ResolveAndWarn => {
            tracing::warn!(
                state,
                symbol = %symbol,
                existing = ?existing,
                proposed = ?proposed,
                resolved = ?resolved,
                "resolved SLR(1) table conflict"
            );
            conflicts.push(ConflictRecord {
                state,
                symbol: symbol.clone(),
                existing,
                proposed,
                resolved: resolved.clone(),
            });
            action.insert((state, symbol), resolved);
            Ok(())
        }
    }
}

/// Shift wins over reduce; a reduce/reduce tie keeps the lower production
/// index; a shift/shift tie keeps the first one seen.
fn resolve(existing: &Action, proposed: &Action) -> Action {
    match (existing, proposed) {
        (Action::Shift(_), Action::Reduce(_)) | (Action::Accept, _) => existing.clone(),
        (Action::Reduce(_), Action::Shift(_)) | (_, Action::Accept) => proposed.clone(),
        (Action::Shift(_), Action::Shift(_)) => existing.clone(),
        (Action::Reduce(a), Action::Reduce(b)) => {
            if a <= b {
                existing.clone()
            } else {
                proposed.clone()
            }
        }
    }
}

fn conflict_error(
    state: usize,
    symbol: &Symbol,
    existing: &Action,
    proposed: &Action,
) -> TableBuildError {
    match (existing, proposed) {
        (Action::Reduce(a), Action::Reduce(b)) => TableBuildError::ReduceReduceConflict {
            state,
            symbol: symbol.to_string(),
            prod1: *a,
            prod2: *b,
        },
        (Action::Shift(_), Action::Shift(_)) => TableBuildError::ShiftShiftConflict {
            state,
            symbol: symbol.to_string(),
        },
        _ => TableBuildError::ShiftReduceConflict {
            state,
            symbol: symbol.to_string(),
        },
    }
}

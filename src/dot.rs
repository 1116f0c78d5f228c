//! DOT graph emitters (component C8).
//!
//! Both functions return a `String` rather than writing a file directly,
//! so callers (the CLI, or tests) decide where the graph goes.

use crate::automaton::Automaton;
use crate::grammar::Grammar;
use crate::parser::ParseTreeNode;
use crate::symbol::Symbol;
use crate::table::{Action, SlrTable};
use std::fmt::Write as _;

/// Renders a parse tree as a DOT digraph: one node per tree node, leaf
/// nodes labeled with their lexeme.
pub fn parse_tree_to_dot(root: &ParseTreeNode) -> String {
    let mut out = String::from("digraph ParseTree {\n");
    let mut next_id = 0usize;
    emit_tree_node(&mut out, root, &mut next_id);
    out.push_str("}\n");
    out
}

fn emit_tree_node(out: &mut String, node: &ParseTreeNode, next_id: &mut usize) -> usize {
    let id = *next_id;
    *next_id += 1;

    let label = match &node.token {
        Some(token) => format!("{} ({})", node.symbol, escape(&token.lexeme)),
        None => node.symbol.to_string(),
    };
    let _ = writeln!(out, "  n{} [label=\"{}\"];", id, label);

    for child in &node.children {
        let child_id = emit_tree_node(out, child, next_id);
        let _ = writeln!(out, "  n{} -> n{};", id, child_id);
    }

    id
}

/// Renders an ACTION table as a DOT digraph: one node per state, one
/// child node per `(terminal, action)` entry.
pub fn action_table_to_dot(grammar: &Grammar, automaton: &Automaton, table: &SlrTable) -> String {
    let mut out = String::from("digraph ActionTable {\n");

    for (state_index, _) in automaton.states.iter().enumerate() {
        let _ = writeln!(out, "  s{} [label=\"state {}\"];", state_index, state_index);

        for terminal in grammar.terminals() {
            if let Some(action) = table.action(state_index, terminal) {
                emit_action_edge(&mut out, state_index, terminal, action);
            }
        }
        if let Some(action) = table.action(state_index, &Symbol::EndMarker) {
            emit_action_edge(&mut out, state_index, &Symbol::EndMarker, action);
        }
    }

    out.push_str("}\n");
    out
}

fn emit_action_edge(out: &mut String, state_index: usize, symbol: &Symbol, action: &Action) {
    let label = match action {
        Action::Shift(target) => format!("shift {}", target),
        Action::Reduce(production) => format!("reduce {}", production),
        Action::Accept => "accept".to_string(),
    };
    let _ = writeln!(
        out,
        "  s{} -> s{}_{} [label=\"{} / {}\"];",
        state_index,
        state_index,
        escape(&symbol.to_string()),
        escape(&symbol.to_string()),
        escape(&label)
    );
    let _ = writeln!(
        out,
        "  s{}_{} [label=\"{}\", shape=box];",
        state_index,
        escape(&symbol.to_string()),
        escape(&label)
    );
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

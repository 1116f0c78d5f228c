//! Integration tests for the grammar module.

use pretty_assertions::assert_eq;
use slrgen::grammar::*;
use slrgen::symbol::Symbol;
use slrgen::GrammarError;

#[test]
fn test_build_simple_grammar() {
    let grammar = Grammar::build("%%\nS : A B ;\nA : a ;\nB : b ;\n").unwrap();
    assert_eq!(grammar.all_productions().len(), 3);
    assert!(grammar.nonterminals().contains(&Symbol::nonterminal("S")));
    assert!(grammar.terminals().contains(&Symbol::terminal("a")));
}

#[test]
fn test_build_splits_alternatives() {
    let grammar = Grammar::build("%%\nS : a | b | c ;\n").unwrap();
    assert_eq!(grammar.all_productions().len(), 3);
}

#[test]
fn test_missing_separator_is_error() {
    let result = Grammar::build("S : a ;\n");
    assert_eq!(result.unwrap_err(), GrammarError::MissingBody);
}

#[test]
fn test_empty_body_is_error() {
    let result = Grammar::build("%%\n");
    assert!(result.is_err());
}

#[test]
fn test_production_indices_groups_by_lhs() {
    let grammar = Grammar::build("%%\nS : A B | A C ;\nA : a ;\nB : b ;\nC : c ;\n").unwrap();
    let indices = grammar.production_indices(&Symbol::nonterminal("S"));
    assert_eq!(indices, &[0, 1]);
}

#[test]
fn test_start_symbol_is_first_lhs() {
    let grammar = Grammar::build("%%\nS : a ;\n").unwrap();
    assert_eq!(grammar.start_symbol(), &Symbol::nonterminal("S"));
}

#[test]
fn test_empty_rhs_alternative_is_malformed() {
    let result = Grammar::build("%%\nS : a | ;\n");
    assert!(matches!(result, Err(GrammarError::MalformedProduction { .. })));
}

#[test]
fn test_complex_grammar_infers_operator_terminals() {
    let grammar = Grammar::build(
        "%%\nS : S PLUS T | T ;\nT : T STAR F | F ;\nF : LPAREN S RPAREN | id ;\n",
    )
    .unwrap();
    assert_eq!(grammar.all_productions().len(), 6);
    assert!(grammar.terminals().contains(&Symbol::terminal("PLUS")));
    assert!(grammar.terminals().contains(&Symbol::terminal("STAR")));
    assert!(grammar.terminals().contains(&Symbol::terminal("LPAREN")));
    assert!(grammar.terminals().contains(&Symbol::terminal("RPAREN")));
    assert!(grammar.terminals().contains(&Symbol::terminal("id")));
}

#[test]
fn test_augment_prepends_reserved_start() {
    let mut grammar = Grammar::build("%%\nS : a ;\n").unwrap();
    grammar.augment();
    assert_eq!(
        grammar.production(0),
        &Production {
            index: 0,
            lhs: Symbol::nonterminal("S'"),
            rhs: vec![Symbol::nonterminal("S")],
        }
    );
    assert_eq!(
        grammar.production(1),
        &Production {
            index: 1,
            lhs: Symbol::nonterminal("S"),
            rhs: vec![Symbol::terminal("a")],
        }
    );
    assert_eq!(grammar.all_productions().len(), 2);
}

//! Integration tests for the symbol module.

use slrgen::symbol::*;

#[test]
fn test_symbol_constructors() {
    assert!(Symbol::terminal("id").is_terminal());
    assert!(Symbol::nonterminal("Expr").is_nonterminal());
    assert!(Symbol::EndMarker.is_end_marker());
}

#[test]
fn test_symbol_ordering() {
    assert!(Symbol::terminal("a") < Symbol::nonterminal("A"));
    assert!(Symbol::nonterminal("Z") < Symbol::EndMarker);
    assert!(Symbol::terminal("a") < Symbol::terminal("b"));
}

#[test]
fn test_symbol_equality() {
    assert_eq!(Symbol::terminal("a"), Symbol::terminal("a"));
    assert_ne!(Symbol::terminal("a"), Symbol::terminal("b"));
    assert_ne!(Symbol::terminal("a"), Symbol::nonterminal("a"));
}

#[test]
fn test_symbol_display() {
    assert_eq!(Symbol::terminal("id").to_string(), "id");
    assert_eq!(Symbol::nonterminal("Expr").to_string(), "Expr");
    assert_eq!(Symbol::EndMarker.to_string(), "$");
}

#[test]
fn test_end_marker_has_no_name() {
    assert_eq!(Symbol::EndMarker.name(), None);
    assert_eq!(Symbol::terminal("a").name(), Some("a"));
}

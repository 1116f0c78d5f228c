//! Interactive REPL for grammar analysis and token-stream parsing.
//!
//! Mirrors the teacher's menu-driven CLI: load a grammar, build its SLR(1)
//! table, inspect ACTION/GOTO, parse a sample token stream, and emit DOT
//! graphs — all over one loaded grammar per session.

use crate::automaton::Automaton;
use crate::error::{GrammarError, ParseError, TableBuildError, TokenFileError};
use crate::first_follow::{compute_first_sets, compute_follow_sets};
use crate::grammar::Grammar;
use crate::parser::{self, ParseTreeNode};
use crate::table::{ConflictPolicy, SlrTable};
use crate::token::{self, Token};
use crate::dot;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the REPL, wrapping every stage of the pipeline.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    TableBuild(#[from] TableBuildError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    TokenFile(#[from] TokenFileError),
}

/// Startup configuration handed down from `main`'s `clap` parsing.
pub struct RunConfig {
    pub grammar_path: PathBuf,
    pub token_path: Option<PathBuf>,
    pub conflict_policy: ConflictPolicy,
}

/// Loads the grammar and table from `config`, then runs the numeric-menu
/// REPL against stdin/stdout.
pub fn run(config: RunConfig) -> Result<(), CliError> {
    let spec_text = fs::read_to_string(&config.grammar_path)?;
    let mut grammar = Grammar::build(&spec_text)?;
    grammar.augment();

    let automaton = Automaton::build(&grammar);
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);
    let table = SlrTable::build(&grammar, &automaton, &follow_sets, config.conflict_policy)?;

    if !table.conflicts().is_empty() {
        tracing::warn!(count = table.conflicts().len(), "grammar has resolved SLR(1) conflicts");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last_tree: Option<ParseTreeNode> = None;

    loop {
        print_menu();
        io::stdout().flush()?;

        let Some(choice) = next_line(&mut lines)? else {
            break;
        };

        match choice.trim() {
            "1" => {
                println!("{}", grammar);
            }
            "2" => {
                print_action_table(&grammar, &automaton, &table);
            }
            "3" => {
                if let Some(path) = &config.token_path {
                    let tokens = token::read_token_file(path)?;
                    for (i, unit) in token::split_into_units(tokens).into_iter().enumerate() {
                        match parser::parse(&grammar, &table, &unit) {
                            Ok(tree) => {
                                println!("unit {}: accepted", i);
                                last_tree = Some(tree);
                            }
                            Err(e) => println!("unit {}: rejected ({})", i, e),
                        }
                    }
                } else {
                    println!("no token file configured; pass --tokens <path>");
                }
            }
            "4" => {
                println!("type tokens as 'KIND LEXEME' pairs, one per line, blank line to parse:");
                let tokens = read_inline_tokens(&mut lines)?;
                match parser::parse(&grammar, &table, &tokens) {
                    Ok(tree) => {
                        println!("accepted");
                        last_tree = Some(tree);
                    }
                    Err(e) => println!("rejected: {}", e),
                }
            }
            "5" => match &last_tree {
                Some(tree) => println!("{}", dot::parse_tree_to_dot(tree)),
                None => println!("no parse tree yet; parse something first"),
            },
            "6" | "q" | "Q" => break,
            _ => println!("unrecognized option"),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("1) print grammar");
    println!("2) print ACTION/GOTO tables");
    println!("3) parse token file (configured via --tokens)");
    println!("4) parse tokens typed inline");
    println!("5) emit DOT for last parse tree");
    println!("6) quit");
}

fn print_action_table(grammar: &Grammar, automaton: &Automaton, table: &SlrTable) {
    for terminal in grammar.terminals() {
        for state in 0..automaton.states.len() {
            if let Some(action) = table.action(state, terminal) {
                println!("ACTION[{}, {}] = {:?}", state, terminal, action);
            }
        }
    }
    for nonterminal in grammar.nonterminals() {
        for state in 0..automaton.states.len() {
            if let Some(target) = table.goto(state, nonterminal) {
                println!("GOTO[{}, {}] = {}", state, nonterminal, target);
            }
        }
    }
}

fn next_line<R: BufRead>(lines: &mut io::Lines<R>) -> Result<Option<String>, CliError> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn read_inline_tokens<R: BufRead>(lines: &mut io::Lines<R>) -> Result<Vec<Token>, CliError> {
    let mut tokens = Vec::new();
    let mut line_number = 1usize;

    while let Some(line) = next_line(lines)? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        match trimmed.split_once(char::is_whitespace) {
            Some((kind, lexeme)) => tokens.push(Token::new(kind, lexeme.trim(), line_number)),
            None => tokens.push(Token::new(trimmed, "", line_number)),
        }
        line_number += 1;
    }

    Ok(tokens)
}

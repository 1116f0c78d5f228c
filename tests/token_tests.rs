//! Integration tests for token-file reading and chunk-splitting.

use slrgen::token::{read_token_file, split_into_units, Token};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp(contents: &str) -> std::path::PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut path = std::env::temp_dir();
    path.push(format!("slrgen-token-integration-{}-{}.tok", std::process::id(), id));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn reads_kind_lexeme_pairs_in_file_order() {
    let path = write_temp("id foo\nPLUS +\nid bar\n");
    let tokens = read_token_file(&path).unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new("id", "foo", 1),
            Token::new("PLUS", "+", 2),
            Token::new("id", "bar", 3),
        ]
    );
    let _ = std::fs::remove_file(path);
}

#[test]
fn rejects_a_line_with_only_one_word_that_is_not_a_delimiter_class() {
    let path = write_temp("id foo\nnotaknownword\n");
    let err = read_token_file(&path).unwrap_err();
    assert!(err.to_string().contains("2"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn splits_on_all_three_separator_kinds() {
    let path = write_temp(
        "id a\nSEMICOLON\nid b\nWHITESPACE\nid c\nCARACTER_NO_DEFINIDO\nid d\n",
    );
    let tokens = read_token_file(&path).unwrap();
    let units = split_into_units(tokens);
    assert_eq!(units.len(), 4);
    for unit in &units {
        assert_eq!(unit.len(), 1);
    }
    let _ = std::fs::remove_file(path);
}

#[test]
fn leading_and_trailing_separators_produce_no_empty_units() {
    let path = write_temp("SEMICOLON\nid a\nSEMICOLON\n");
    let tokens = read_token_file(&path).unwrap();
    let units = split_into_units(tokens);
    assert_eq!(units.len(), 1);
    let _ = std::fs::remove_file(path);
}

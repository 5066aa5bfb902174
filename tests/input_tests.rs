// Integration tests for reading array input

use std::fs;
use std::path::PathBuf;

use sortty::input::{parse, read_file, InputError, ParseError};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sortty-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write temp file");
    path
}

#[test]
fn test_documented_examples() {
    assert_eq!(parse(""), Err(ParseError::EmptyInput));
    assert!(matches!(
        parse("1, 2, a"),
        Err(ParseError::InvalidNumber { .. })
    ));
    assert_eq!(parse(" 3 , -2, 5"), Ok(vec![3, -2, 5]));
}

#[test]
fn test_read_file_trims_trailing_newline() {
    let path = temp_file("numbers.txt", "5, 1, 4\n2, 8\n");
    // newline inside the text is not a separator
    assert!(matches!(read_file(&path), Err(InputError::Parse(_))));
    let _ = fs::remove_file(path);

    let path = temp_file("line.txt", "5, 1, 4, 2, 8\n");
    assert_eq!(read_file(&path).unwrap(), vec![5, 1, 4, 2, 8]);
    let _ = fs::remove_file(path);
}

#[test]
fn test_read_missing_file() {
    let path = std::env::temp_dir().join("sortty-does-not-exist.txt");
    assert!(matches!(read_file(&path), Err(InputError::Read { .. })));
}

#[test]
fn test_read_empty_file() {
    let path = temp_file("empty.txt", "  \n");
    assert!(matches!(
        read_file(&path),
        Err(InputError::Parse(ParseError::EmptyInput))
    ));
    let _ = fs::remove_file(path);
}

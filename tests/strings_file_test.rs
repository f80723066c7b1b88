//! Integration tests for strings file I/O and editing sessions.
//!
//! Usage:
//!   cargo test --test strings_file_test

use std::fs;

use langdat::protocol::{decode, encode};
use langdat::{
    pair_strings, read_strings_file, write_strings_file, Error, Session, StringsFile,
    StringsFileConfig, WriteMode,
};
use tempfile::tempdir;

/// Bytes of a small legacy file as shipped: UTF-16LE, no final terminator.
fn legacy_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    for (i, text) in ["New Game", "Load Game", "Quit"].iter().enumerate() {
        if i > 0 {
            bytes.extend_from_slice(&[0, 0]);
        }
        bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    }
    bytes
}

#[test]
fn test_read_legacy_file_without_terminator() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lang00.dat");
    fs::write(&path, legacy_bytes()).unwrap();

    let strings = read_strings_file(&path).unwrap();
    assert_eq!(strings, vec!["New Game", "Load Game", "Quit"]);
}

#[test]
fn test_rewrite_adds_final_terminator() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lang00.dat");
    let original = legacy_bytes();
    fs::write(&path, &original).unwrap();

    let strings = read_strings_file(&path).unwrap();
    write_strings_file(&path, &strings).unwrap();

    let rewritten = fs::read(&path).unwrap();
    assert_eq!(rewritten.len(), original.len() + 2);
    assert_eq!(&rewritten[..original.len()], original.as_slice());
    assert_eq!(&rewritten[original.len()..], &[0, 0]);
}

#[test]
fn test_non_ascii_roundtrip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lang09.dat");
    let strings = vec!["Größe", "日本語", "", "emoji \u{1F30D}", "Ελληνικά"];

    write_strings_file(&path, &strings).unwrap();
    assert_eq!(read_strings_file(&path).unwrap(), strings);
}

#[test]
fn test_file_bytes_match_codec() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lang00.dat");
    let strings = ["Hello", "World"];

    write_strings_file(&path, strings).unwrap();
    let bytes = fs::read(&path).unwrap();

    assert_eq!(bytes, encode(strings).unwrap());
    assert_eq!(decode(&bytes).unwrap(), strings);
}

#[test]
fn test_error_message_chain() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("odd.dat");
    fs::write(&path, [0u8; 5]).unwrap();

    let err = read_strings_file(&path).unwrap_err();
    let top = err.to_string();
    let cause = std::error::Error::source(&err).unwrap().to_string();

    assert!(top.starts_with("failed to read strings from"));
    assert!(cause.contains("5 bytes"));
}

#[test]
fn test_size_limit_boundary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lang00.dat");
    write_strings_file(&path, ["abc"]).unwrap(); // 8 bytes

    let exact = StringsFile::new(StringsFileConfig::default().with_max_file_size(8));
    assert_eq!(exact.read(&path).unwrap(), vec!["abc"]);

    let under = StringsFile::new(StringsFileConfig::default().with_max_file_size(7));
    assert!(matches!(under.read(&path).unwrap_err().root(), Error::TooLarge { .. }));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("lang00.dat");

    for mode in [WriteMode::Atomic, WriteMode::Truncate] {
        let file = StringsFile::new(StringsFileConfig::default().with_write_mode(mode));
        let err = file.write(&path, ["x"]).unwrap_err();
        assert!(matches!(err.root(), Error::Io { .. }));
    }
}

#[test]
fn test_pairing_loaded_files() {
    let dir = tempdir().unwrap();
    let editable = dir.path().join("lang07.dat");
    let reference = dir.path().join("lang00.dat");
    write_strings_file(&editable, ["Ja", "Nein"]).unwrap();
    write_strings_file(&reference, ["Yes", "No", "Cancel", "OK"]).unwrap();

    let paired = pair_strings(
        read_strings_file(&editable).unwrap(),
        read_strings_file(&reference).unwrap(),
    );

    assert_eq!(paired.len(), 4);
    assert_eq!(paired[1].editable, "Nein");
    assert_eq!(paired[3].editable, "");
    assert_eq!(paired[3].reference(), Some("OK"));
}

#[test]
fn test_translation_workflow() {
    let dir = tempdir().unwrap();
    let reference = dir.path().join("lang00.dat");
    let translation = dir.path().join("lang03.dat");
    write_strings_file(&reference, ["Start", "Options", "Exit"]).unwrap();

    let mut session = Session::new();
    session.open_reference(&reference).unwrap();
    session.new_from_reference().unwrap();
    session.set(0, "Iniciar").unwrap();
    session.set(2, "Salir").unwrap();
    session.save_as(&translation).unwrap();

    // Re-open in a fresh session against the same reference
    let mut session = Session::new();
    session.open_reference(&reference).unwrap();
    session.open(&translation).unwrap();

    let untranslated: Vec<usize> = session
        .comparisons()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_untranslated())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(untranslated, vec![1]);

    session.set(1, "Opciones").unwrap();
    session.save().unwrap();
    assert_eq!(
        read_strings_file(&translation).unwrap(),
        vec!["Iniciar", "Opciones", "Salir"]
    );
}

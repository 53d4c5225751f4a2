//! Tests for dataset loading and name normalization.

use std::io::{Cursor, Write};

use crate::dataset::{load_movies, normalize_cast_name, read_movies};
use crate::error::Error;

const SAMPLE: &str = concat!(
    r#"{"year": 1999, "title": "First Film", "cast": ["[[Ann A]]", "[[b|Bob B]]"]}"#,
    "\n",
    r#"{"year": 2004, "title": "Second Film", "cast": ["Cy C"]}"#,
    "\n",
    r#"{"title": "No Year, No Cast"}"#,
);

#[test]
fn test_read_movies_sample() {
    let movies = read_movies(Cursor::new(SAMPLE)).unwrap();
    assert_eq!(movies.len(), 3);

    let first = &movies["First Film"];
    assert_eq!(first.year, 1999);
    assert_eq!(first.cast, vec!["[[Ann A]]", "[[b|Bob B]]"]);

    // Missing fields default like the upstream records do.
    let bare = &movies["No Year, No Cast"];
    assert_eq!(bare.year, 0);
    assert!(bare.cast.is_empty());
}

#[test]
fn test_read_movies_duplicate_title() {
    let data = concat!(
        r#"{"year": 1, "title": "Twice", "cast": []}"#,
        "\n",
        r#"{"year": 2, "title": "Twice", "cast": []}"#,
    );
    let err = read_movies(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, Error::DuplicateTitle(title) if title == "Twice"));
}

#[test]
fn test_read_movies_bad_line_reports_position() {
    let data = concat!(
        r#"{"year": 1, "title": "Fine", "cast": []}"#,
        "\n",
        "not json at all",
    );
    let err = read_movies(Cursor::new(data)).unwrap_err();
    match err {
        Error::BadRecord { line, .. } => assert_eq!(line, 2),
        other => panic!("expected BadRecord, got {other:?}"),
    }
}

#[test]
fn test_load_movies_plain_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, SAMPLE).unwrap();
    let movies = load_movies(&path).unwrap();
    assert_eq!(movies.len(), 3);
}

#[test]
fn test_load_movies_bz2_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt.bz2");
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = bzip2::write::BzEncoder::new(file, bzip2::Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let movies = load_movies(&path).unwrap();
    assert_eq!(movies.len(), 3);
    assert_eq!(movies["Second Film"].year, 2004);
}

#[test]
fn test_load_movies_missing_file() {
    let err = load_movies(std::path::Path::new("/does/not/exist.bz2")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_normalize_cast_name() {
    assert_eq!(normalize_cast_name("[[Kevin Bacon]]"), "Kevin Bacon");
    assert_eq!(
        normalize_cast_name("[[Diane Keaton (actress)|Diane Keaton]]"),
        "Diane Keaton"
    );
    assert_eq!(normalize_cast_name("Plain Name"), "Plain Name");
    assert_eq!(normalize_cast_name("a|b|c"), "c");
    assert_eq!(normalize_cast_name(""), "");
}

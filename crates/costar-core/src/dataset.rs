//! Film-record loading and cast-name normalization.
//!
//! The dataset is a line-delimited JSON file of film records, usually
//! bzip2-compressed (`data.txt.bz2`). Each line looks like
//! `{"year": 1994, "title": "Cool Movie", "cast": ["[[Some Actor]]", ...]}`.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use bzip2::read::MultiBzDecoder;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};

/// One film record from the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    /// Release year; `0` when the record carries none.
    #[serde(default)]
    pub year: i32,
    /// Film title, unique across the dataset.
    pub title: String,
    /// Cast member display names, possibly wiki-linked.
    #[serde(default)]
    pub cast: Vec<String>,
}

/// Loads film records from `path`, keyed by title.
///
/// Files ending in `.bz2` are decompressed on the fly.
///
/// # Errors
///
/// Fails on I/O errors, unparseable lines, and duplicate titles.
pub fn load_movies(path: &Path) -> Result<FxHashMap<String, Movie>> {
    let file = File::open(path)?;
    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("bz2")) {
        Box::new(MultiBzDecoder::new(file))
    } else {
        Box::new(file)
    };
    read_movies(BufReader::new(reader))
}

/// Parses line-delimited film records from an open reader.
///
/// # Errors
///
/// Fails on I/O errors, unparseable lines, and duplicate titles.
pub fn read_movies<R: BufRead>(reader: R) -> Result<FxHashMap<String, Movie>> {
    let started = Instant::now();
    let mut movies = FxHashMap::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let movie: Movie = serde_json::from_str(&line)
            .map_err(|source| Error::BadRecord {
                line: idx + 1,
                source,
            })?;
        if movies.contains_key(&movie.title) {
            return Err(Error::DuplicateTitle(movie.title));
        }
        movies.insert(movie.title.clone(), movie);
    }
    info!(
        movies = movies.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "loaded film records"
    );
    Ok(movies)
}

/// Strips wiki-link markup from a cast name: `[[Target|Label]]` becomes
/// `Label`, `[[Name]]` becomes `Name`, anything else passes through.
#[must_use]
pub fn normalize_cast_name(raw: &str) -> &str {
    let name = raw.strip_prefix("[[").unwrap_or(raw);
    let name = name.strip_suffix("]]").unwrap_or(name);
    name.rsplit('|').next().unwrap_or(name)
}

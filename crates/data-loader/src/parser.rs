//! Parser for the bundled JSON data files.
//!
//! - genres.json: a JSON array of genre names
//! - movies-*.json: a JSON array of movie objects (wikipedia-movie-data layout)

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a whole file and deserialize it as JSON
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    serde_json::from_str(&content).map_err(|source| DataLoadError::Json {
        file: file_name(path),
        source,
    })
}

/// Parse the genre list
///
/// Names are trimmed; an empty name is rejected.
pub fn parse_genres(path: &Path) -> Result<Vec<Genre>> {
    let raw: Vec<String> = read_json(path)?;
    parse_genre_names(raw)
}

fn parse_genre_names(raw: Vec<String>) -> Result<Vec<Genre>> {
    let mut genres = Vec::with_capacity(raw.len());
    for name in raw {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DataLoadError::InvalidValue {
                field: "genre".to_string(),
                value: name,
            });
        }
        genres.push(trimmed.to_string());
    }
    Ok(genres)
}

/// Parse the movie list
///
/// Tag membership is not checked here; that happens when the catalog is built.
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> = read_json(path)?;
    validate_movies(movies)
}

fn validate_movies(movies: Vec<Movie>) -> Result<Vec<Movie>> {
    if let Some(bad) = movies.iter().find(|m| m.id.trim().is_empty()) {
        return Err(DataLoadError::InvalidValue {
            field: "href".to_string(),
            value: format!("{:?} (title {:?})", bad.id, bad.title),
        });
    }
    Ok(movies)
}

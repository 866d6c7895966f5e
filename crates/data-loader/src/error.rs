//! Error types for the data-loader crate.
//!
//! Everything here is a load-time failure. The catalog is built once at
//! startup, so these errors are surfaced immediately rather than carried
//! into selection.

use thiserror::Error;

/// Errors that can occur while loading the dataset or building the catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File contents are not valid JSON for the expected shape
    ///
    /// serde_json's message already carries the line and column.
    #[error("Malformed JSON in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The indexer was given no genres to build buckets for
    #[error("Genre list is empty; at least one genre is required")]
    EmptyGenreList,

    /// A movie is tagged with a genre that is not in the genre list
    #[error("Movie {movie} references unknown genre {genre:?}")]
    UnknownGenreTag { movie: String, genre: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_message_names_movie_and_genre() {
        let err = DataLoadError::UnknownGenreTag {
            movie: "Tenet_(film)".to_string(),
            genre: "Spy".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Tenet_(film)"));
        assert!(msg.contains("\"Spy\""));
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<()> {
            Err(std::io::Error::other("disk on fire"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(DataLoadError::IoError(_))));
    }
}

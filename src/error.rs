// Error types for trixtag

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TrixError>;

/// Failures from the pure parsers in [`crate::parse`]
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("metadata file has {found} header lines, expected at least 4")]
    HeaderTooShort { found: usize },

    #[error("could not parse show date {value:?} (expected e.g. \"June 22, 1973\")")]
    InvalidDate { value: String },

    #[error("malformed track identifier in line {line:?}")]
    InvalidTrackIdentifier { line: String },

    #[error("track number too large in line {line:?}")]
    TrackNumberOutOfRange { line: String },
}

/// Everything that can stop an album from being processed
#[derive(Debug, Error)]
pub enum TrixError {
    #[error("directory not found or not a directory: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("failed to locate metadata file in {}, place it there or pass it with -m", .0.display())]
    MetadataNotFound(PathBuf),

    #[error("failed to locate cover image in {}, place it there or pass it with -c", .0.display())]
    CoverNotFound(PathBuf),

    #[error("provided {kind} file can not be found: {}", .path.display())]
    OverrideNotFound { kind: &'static str, path: PathBuf },

    #[error("could not extract volume from directory name {0:?}, pass it with -v")]
    VolumeNotFound(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no track metadata found")]
    NoTracks,

    #[error("could not find predicted file {filename}")]
    MissingTrackFile { filename: String },

    #[error("failed to run {program}: {source}")]
    TagWriterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed on {} ({status}): {stderr}", .file.display())]
    TagWriterFailed {
        program: String,
        file: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("rename target already exists: {}", .0.display())]
    RenameTargetExists(PathBuf),

    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a FLAC file", .0.display())]
    NotFlac(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrixError {
    /// Wraps an I/O error with the path it happened on, for `map_err`
    pub(crate) fn read(path: &Path) -> impl FnOnce(std::io::Error) -> TrixError + '_ {
        move |source| TrixError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

// Batch processing of a directory full of untouched downloads

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::album::{process_album, AlbumOptions, DEFAULT_GENRE};
use crate::error::{Result, TrixError};
use crate::parse::is_album_dir_name;
use crate::resolver::{Prompter, VolumeFallback};
use crate::tagger::TagWriter;

/// Options forwarded to every album in a batch
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub genre: String,
    pub rename: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            genre: DEFAULT_GENRE.to_string(),
            rename: false,
        }
    }
}

/// An album directory that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedAlbum {
    pub name: String,
    pub reason: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub failed: Vec<FailedAlbum>,
}

impl BatchResult {
    fn record(&mut self, name: &str, outcome: Result<()>) {
        self.total += 1;
        match outcome {
            Ok(()) => self.succeeded += 1,
            Err(e) => self.failed.push(FailedAlbum {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn failed_directories(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Batches never block on the console
struct Headless;

impl Prompter for Headless {
    fn prompt(&mut self, _message: &str) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "no prompting in batch mode"))
    }
}

/// Child directories of `parent` that follow the download naming, sorted by name
pub fn find_album_dirs(parent: &Path) -> Result<Vec<PathBuf>> {
    if !parent.is_dir() {
        return Err(TrixError::DirectoryNotFound(parent.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(parent).map_err(TrixError::read(parent))? {
        let entry = entry.map_err(TrixError::read(parent))?;
        let name = entry.file_name();
        if entry.path().is_dir() && is_album_dir_name(&name.to_string_lossy()) {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Process every matching album under `parent`, one at a time.
///
/// A failing album is recorded and the batch moves on. `on_album` is called with
/// the 1-based position, the total and the directory name before each album starts.
pub fn run_batch(
    parent: &Path,
    options: &BatchOptions,
    writer: &mut dyn TagWriter,
    mut on_album: impl FnMut(usize, usize, &str),
) -> Result<BatchResult> {
    let dirs = find_album_dirs(parent)?;
    let mut result = BatchResult::default();

    for (index, dir) in dirs.iter().enumerate() {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        on_album(index + 1, dirs.len(), &name);

        let mut album = AlbumOptions::new(dir);
        album.genre = options.genre.clone();
        album.rename = options.rename;
        album.resolve.volume_fallback = VolumeFallback::Fail;

        let outcome = process_album(&album, writer, &mut Headless).map(|report| {
            info!("{}: tagged {} tracks", name, report.tracks.len());
        });
        if let Err(e) = &outcome {
            warn!("{}: {}", name, e);
        }
        result.record(&name, outcome);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut result = BatchResult::default();
        result.record("a", Ok(()));
        result.record("b", Err(TrixError::NoTracks));
        result.record("c", Ok(()));

        assert_eq!(result.total, 3);
        assert_eq!(result.succeeded, 2);
        assert_eq!(result.failed_directories(), vec!["b"]);
        assert_eq!(result.failed[0].reason, "no track metadata found");
        assert!(!result.is_success());
    }
}

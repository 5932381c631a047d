// Single-album pipeline: resolve, tag, then optionally rename

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, TrixError};
use crate::resolver::{self, Prompter, ResolveOptions};
use crate::tagger::{self, TagWriter, TaggedTrack};

pub const DEFAULT_GENRE: &str = "Rock";

/// Options for processing one album directory
#[derive(Debug, Clone)]
pub struct AlbumOptions {
    pub resolve: ResolveOptions,
    pub genre: String,
    /// Rename the directory to the album title after tagging
    pub rename: bool,
}

impl AlbumOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            resolve: ResolveOptions::new(dir),
            genre: DEFAULT_GENRE.to_string(),
            rename: false,
        }
    }
}

/// Outcome of a fully processed album
#[derive(Debug, Clone, Serialize)]
pub struct AlbumReport {
    pub title: String,
    pub directory: PathBuf,
    pub metadata_file: PathBuf,
    pub cover_file: PathBuf,
    pub volume_id: String,
    pub renamed_to: Option<PathBuf>,
    pub tracks: Vec<TaggedTrack>,
}

impl AlbumReport {
    /// Where the album lives now
    pub fn current_dir(&self) -> &Path {
        self.renamed_to.as_deref().unwrap_or(&self.directory)
    }

    /// `path` as it is after the album directory was renamed
    pub fn relocate(&self, path: &Path) -> PathBuf {
        match (&self.renamed_to, path.strip_prefix(&self.directory)) {
            (Some(renamed), Ok(rest)) => renamed.join(rest),
            _ => path.to_path_buf(),
        }
    }

    /// Options that resolve the same album again at its current location,
    /// keeping the artist and fallback settings of `base`
    pub fn relocated_options(&self, base: &ResolveOptions) -> ResolveOptions {
        ResolveOptions {
            dir: self.current_dir().to_path_buf(),
            metadata: Some(self.relocate(&self.metadata_file)),
            cover: Some(self.relocate(&self.cover_file)),
            volume: Some(self.volume_id.clone()),
            ..base.clone()
        }
    }
}

/// Tag every track of one album, renaming the directory afterwards if asked
pub fn process_album(
    options: &AlbumOptions,
    writer: &mut dyn TagWriter,
    prompter: &mut dyn Prompter,
) -> Result<AlbumReport> {
    let album = resolver::resolve(&options.resolve, prompter)?;
    let tracks = tagger::tag_album(&album, &options.genre, writer)?;

    let renamed_to = if options.rename {
        Some(rename_album_dir(&album.dir, &album.metadata.album_title)?)
    } else {
        None
    };

    Ok(AlbumReport {
        title: album.metadata.album_title,
        directory: album.dir,
        metadata_file: album.metadata_path,
        cover_file: album.cover_path,
        volume_id: album.metadata.volume_id,
        renamed_to,
        tracks,
    })
}

/// Directory name for an album title; path separators are not allowed in it
pub fn album_dir_name(title: &str) -> String {
    title.replace(['/', '\\'], "_")
}

/// Rename `dir` to `title` within the same parent directory
pub fn rename_album_dir(dir: &Path, title: &str) -> Result<PathBuf> {
    let parent = dir.parent().unwrap_or_else(|| Path::new(""));
    let target = parent.join(album_dir_name(title));

    if target == dir {
        return Ok(target);
    }
    if target.exists() {
        return Err(TrixError::RenameTargetExists(target));
    }

    info!("Renaming directory to: {}", target.display());
    fs::rename(dir, &target).map_err(|source| TrixError::Rename {
        from: dir.to_path_buf(),
        to: target.clone(),
        source,
    })?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_album_dir_name() {
        assert_eq!(
            album_dir_name("1973-06-22 - P.N.E. Coliseum (Hunter's Trix Vol. 12)"),
            "1973-06-22 - P.N.E. Coliseum (Hunter's Trix Vol. 12)"
        );
        assert_eq!(album_dir_name("1970-02-13 - Fillmore East/West"), "1970-02-13 - Fillmore East_West");
    }

    #[test]
    fn test_rename_keeps_parent() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("gd73-06-22.mtx.seamons.ht12.92375.flac16");
        fs::create_dir(&dir).unwrap();

        let target = rename_album_dir(&dir, "1973-06-22 - P.N.E. Coliseum (Hunter's Trix Vol. 12)").unwrap();
        assert_eq!(target.parent(), Some(root.path()));
        assert!(target.is_dir());
        assert!(!dir.exists());
    }

    #[test]
    fn test_rename_refuses_existing_target() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("a");
        fs::create_dir(&dir).unwrap();
        fs::create_dir(root.path().join("b")).unwrap();

        let err = rename_album_dir(&dir, "b").unwrap_err();
        assert!(matches!(err, TrixError::RenameTargetExists(_)));
        assert!(dir.is_dir());
    }
}

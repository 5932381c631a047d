// Album metadata resolution
//
// Finds the metadata file and cover image for an album directory, works out the
// volume number and turns the metadata file into album-level fields plus the
// track listing.

use chrono::{Datelike, NaiveDate};
use glob::Pattern;
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{Result, TrixError};
use crate::parse::{self, Header, TrackEntry};
use crate::utils::encoding::{decode_lines, TextEncoding};

/// Metadata files are named like "gd73-06-22.mtx.seamons.txt"
pub const METADATA_PATTERN: &str = "*.mtx.seamons.txt";

/// Cover images are named like "gd730622_front1.jpg"
pub const COVER_PATTERN: &str = "*_front*.jpg";

/// What to do when the volume can't be taken from the directory name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeFallback {
    /// Ask on the console
    #[default]
    Prompt,
    /// Fail the album
    Fail,
}

/// Source of interactive answers
pub trait Prompter {
    fn prompt(&mut self, message: &str) -> io::Result<String>;
}

/// Prompts on stdout and reads one line from stdin
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", message)?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }
}

/// Inputs for resolving one album directory
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub dir: PathBuf,
    pub metadata: Option<PathBuf>,
    pub cover: Option<PathBuf>,
    pub artist: Option<String>,
    pub volume: Option<String>,
    pub volume_fallback: VolumeFallback,
}

impl ResolveOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }
}

/// Album-level fields shared by every track
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumMetadata {
    pub artist: String,
    pub venue: String,
    /// Not written to any tag
    pub location: String,
    pub date: NaiveDate,
    pub year: i32,
    pub volume_id: String,
    pub album_title: String,
    /// Two-digit-year date used in the audio file names, e.g. "73-06-22"
    pub short_date_token: String,
}

impl AlbumMetadata {
    pub fn new(header: Header, artist_override: Option<&str>, volume_id: String) -> Self {
        let artist = artist_override
            .map(str::to_string)
            .unwrap_or(header.artist);

        AlbumMetadata {
            album_title: album_title(header.date, &header.venue, &volume_id),
            short_date_token: header.date.format("%y-%m-%d").to_string(),
            year: header.date.year(),
            artist,
            venue: header.venue,
            location: header.location,
            date: header.date,
            volume_id,
        }
    }

    /// Show date as "YYYY-MM-DD"
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Album title, e.g. "1973-06-22 - P.N.E. Coliseum (Hunter's Trix Vol. 12)"
pub fn album_title(date: NaiveDate, venue: &str, volume_id: &str) -> String {
    format!(
        "{} - {} (Hunter's Trix Vol. {})",
        date.format("%Y-%m-%d"),
        venue,
        volume_id
    )
}

/// Everything needed to tag one album
#[derive(Debug, Clone)]
pub struct ResolvedAlbum {
    /// Canonical album directory
    pub dir: PathBuf,
    pub metadata_path: PathBuf,
    pub cover_path: PathBuf,
    pub metadata: AlbumMetadata,
    pub tracks: Vec<TrackEntry>,
}

/// Resolve an album directory into its metadata and track listing
pub fn resolve(options: &ResolveOptions, prompter: &mut dyn Prompter) -> Result<ResolvedAlbum> {
    if !options.dir.is_dir() {
        return Err(TrixError::DirectoryNotFound(options.dir.clone()));
    }
    let dir = fs::canonicalize(&options.dir).map_err(TrixError::read(&options.dir))?;

    let metadata_path = match &options.metadata {
        Some(path) => existing_override("metadata", path)?,
        None => discover(&dir, METADATA_PATTERN)?
            .ok_or_else(|| TrixError::MetadataNotFound(dir.clone()))?,
    };
    info!("Metadata file: {}", metadata_path.display());

    let cover_path = match &options.cover {
        Some(path) => existing_override("cover", path)?,
        None => discover(&dir, COVER_PATTERN)?.ok_or_else(|| TrixError::CoverNotFound(dir.clone()))?,
    };
    info!("Cover file: {}", cover_path.display());

    let volume_id = resolve_volume(&dir, options, prompter)?;

    let lines = read_metadata_file(&metadata_path)?;
    let (metadata, tracks) = parse_metadata_lines(&lines, options.artist.as_deref(), volume_id)?;
    info!("{}", metadata.album_title);

    Ok(ResolvedAlbum {
        dir,
        metadata_path,
        cover_path,
        metadata,
        tracks,
    })
}

/// Build the album metadata and the track listing from the metadata file lines
pub fn parse_metadata_lines<S: AsRef<str>>(
    lines: &[S],
    artist_override: Option<&str>,
    volume_id: String,
) -> Result<(AlbumMetadata, Vec<TrackEntry>)> {
    let (header, body) = parse::split_header(lines)?;
    let metadata = AlbumMetadata::new(header, artist_override, volume_id);

    let tracks = body
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| parse::is_track_line(line))
        .map(parse::parse_track_line)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((metadata, tracks))
}

/// Decoded, trimmed lines of a metadata file
fn read_metadata_file(path: &Path) -> Result<Vec<String>> {
    let (lines, encoding) = decode_lines(&fs::read(path).map_err(TrixError::read(path))?);
    if encoding != TextEncoding::Utf8 {
        debug!("{} decoded as {:?}", path.display(), encoding);
    }
    Ok(lines)
}

/// Overrides are canonicalised so they can follow a renamed album directory
fn existing_override(kind: &'static str, path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        fs::canonicalize(path).map_err(TrixError::read(path))
    } else {
        Err(TrixError::OverrideNotFound {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// First file directly inside `dir` whose name matches `pattern`, by name order
fn discover(dir: &Path, pattern: &str) -> Result<Option<PathBuf>> {
    let pattern = Pattern::new(pattern).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut matches: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(TrixError::read(dir))? {
        let path = entry.map_err(TrixError::read(dir))?.path();
        let matched = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches(name));
        if matched && path.is_file() {
            matches.push(path);
        }
    }
    matches.sort();

    if matches.len() > 1 {
        warn!(
            "{} files match {} in {}, using {}",
            matches.len(),
            pattern,
            dir.display(),
            matches[0].display()
        );
    }

    Ok(matches.into_iter().next())
}

fn resolve_volume(dir: &Path, options: &ResolveOptions, prompter: &mut dyn Prompter) -> Result<String> {
    if let Some(volume) = &options.volume {
        return Ok(volume.clone());
    }

    let dir_name = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(volume) = parse::parse_volume_id(&dir_name) {
        return Ok(volume);
    }

    match options.volume_fallback {
        VolumeFallback::Fail => Err(TrixError::VolumeNotFound(dir_name)),
        VolumeFallback::Prompt => {
            let answer = prompter.prompt("Could not extract Volume from directory name, please enter: ")?;
            if answer.is_empty() {
                Err(TrixError::VolumeNotFound(dir_name))
            } else {
                Ok(answer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    const SHOW: [&str; 5] = [
        "Grateful Dead",
        "P.N.E. Coliseum",
        "Vancouver, BC, Canada",
        "June 22, 1973",
        "d1t01 - Bertha",
    ];

    #[test]
    fn test_album_metadata_from_lines() {
        let (album, tracks) = parse_metadata_lines(&SHOW, None, "12".to_string()).unwrap();
        assert_eq!(album.artist, "Grateful Dead");
        assert_eq!(album.year, 1973);
        assert_eq!(album.iso_date(), "1973-06-22");
        assert_eq!(album.short_date_token, "73-06-22");
        assert_eq!(album.album_title, "1973-06-22 - P.N.E. Coliseum (Hunter's Trix Vol. 12)");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Bertha");
    }

    #[test]
    fn test_album_title_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(1977, 5, 8).unwrap();
        let first = album_title(date, "Barton Hall", "3");
        assert_eq!(first, album_title(date, "Barton Hall", "3"));
        assert_eq!(first, "1977-05-08 - Barton Hall (Hunter's Trix Vol. 3)");
    }

    #[test]
    fn test_artist_override() {
        let (album, _) = parse_metadata_lines(&SHOW, Some("Jerry Garcia Band"), "1".to_string()).unwrap();
        assert_eq!(album.artist, "Jerry Garcia Band");
    }

    #[test]
    fn test_header_lines_are_not_tracks() {
        let lines = ["dead - ish", "d venue - hall", "Somewhere", "June 22, 1973", "Set 1", "d1t01 - Bertha"];
        let (_, tracks) = parse_metadata_lines(&lines, None, "1".to_string()).unwrap();
        assert_eq!(tracks.len(), 1);
    }

    #[test]
    fn test_unreadable_metadata_names_the_file() {
        let path = Path::new("/nonexistent/trixtag/gd73-06-22.mtx.seamons.txt");
        match read_metadata_file(path) {
            Err(TrixError::Read { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected a read error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_track_line_fails_album() {
        let lines = ["Grateful Dead", "Venue", "City", "June 22, 1973", "d1t01 - Bertha", "drums - space"];
        let err = parse_metadata_lines(&lines, None, "1".to_string()).unwrap_err();
        assert!(matches!(
            err,
            TrixError::Parse(ParseError::InvalidTrackIdentifier { .. })
        ));
    }
}

// Read tags back and compare them with what would be written

use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{Result, TrixError};
use crate::field_mapping::{FieldSet, TagField};
use crate::flac::read_vorbis_comment;
use crate::resolver::ResolvedAlbum;
use crate::tagger::predicted_path;

/// A tag whose stored value differs from the expected one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub file: PathBuf,
    pub field: TagField,
    pub expected: String,
    pub found: Vec<String>,
}

/// Check every track's tags against the album's expected field sets
pub fn verify_album(album: &ResolvedAlbum, genre: &str) -> Result<Vec<Mismatch>> {
    if album.tracks.is_empty() {
        return Err(TrixError::NoTracks);
    }

    let mut mismatches = Vec::new();

    for track in &album.tracks {
        let path = predicted_path(album, track);
        if !path.is_file() {
            return Err(TrixError::MissingTrackFile {
                filename: track.predicted_filename(&album.metadata.short_date_token),
            });
        }

        let comment = read_vorbis_comment(&path)?.unwrap_or_default();
        let expected = FieldSet::for_track(&album.metadata, track, genre);

        for (field, value) in expected.iter() {
            let found = comment.values(field);
            if found != [value] {
                debug!("{}: {} is {:?}, expected {:?}", path.display(), field.vorbis_key(), found, value);
                mismatches.push(Mismatch {
                    file: path.clone(),
                    field,
                    expected: value.to_string(),
                    found: found.into_iter().map(str::to_string).collect(),
                });
            }
        }
    }

    Ok(mismatches)
}

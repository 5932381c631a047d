// Track tagging
//
// Walks the track listing in file order, checks that each predicted audio file
// exists and hands the field set to a TagWriter. The first failure stops the
// album; tracks after it are left untouched.

pub mod metaflac;
pub mod recording;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Result, TrixError};
use crate::field_mapping::FieldSet;
use crate::parse::TrackEntry;
use crate::resolver::ResolvedAlbum;

pub use metaflac::MetaflacWriter;
pub use recording::{RecordingWriter, TagCall};

/// Something that can rewrite the tags of an audio file
pub trait TagWriter {
    /// Remove every tag from `file`
    fn clear(&mut self, file: &Path) -> Result<()>;

    /// Write `fields` to `file`, embedding `picture` as cover art if given
    fn apply(&mut self, file: &Path, fields: &FieldSet, picture: Option<&Path>) -> Result<()>;
}

/// A track that was tagged successfully
#[derive(Debug, Clone, Serialize)]
pub struct TaggedTrack {
    pub path: PathBuf,
    #[serde(flatten)]
    pub entry: TrackEntry,
}

/// Path of the audio file expected for `track`
pub fn predicted_path(album: &ResolvedAlbum, track: &TrackEntry) -> PathBuf {
    album
        .dir
        .join(track.predicted_filename(&album.metadata.short_date_token))
}

/// Tag every track of a resolved album.
///
/// Fails with [`TrixError::NoTracks`] when the listing is empty, and stops at the
/// first missing file or writer error.
pub fn tag_album(album: &ResolvedAlbum, genre: &str, writer: &mut dyn TagWriter) -> Result<Vec<TaggedTrack>> {
    if album.tracks.is_empty() {
        return Err(TrixError::NoTracks);
    }

    let mut tagged = Vec::with_capacity(album.tracks.len());

    for track in &album.tracks {
        debug!(
            "Identifier: {}, Disc: {}, Track: {}, Title: {}",
            track.identifier, track.disc_number, track.track_number, track.title
        );

        let path = predicted_path(album, track);
        if !path.is_file() {
            return Err(TrixError::MissingTrackFile {
                filename: track.predicted_filename(&album.metadata.short_date_token),
            });
        }

        // metaflac appends rather than overwrites, so old tags go first
        writer.clear(&path)?;

        let fields = FieldSet::for_track(&album.metadata, track, genre);
        writer.apply(&path, &fields, Some(album.cover_path.as_path()))?;
        info!("Tagged {}", path.display());

        tagged.push(TaggedTrack {
            path,
            entry: track.clone(),
        });
    }

    Ok(tagged)
}

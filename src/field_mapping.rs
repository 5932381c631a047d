// Tag field mapping
//
// The fields written to each track, and their Vorbis comment keys.
// FLAC stores tags as Vorbis comments, so these keys are also what the
// verifier looks for when reading tags back.

use serde::Serialize;

use crate::parse::TrackEntry;
use crate::resolver::AlbumMetadata;

/// Fields written to every track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TagField {
    Artist,
    DiscNumber,
    TrackNumber,
    Title,
    Album,
    AlbumArtist,
    Date,
    Year,
    Genre,
}

impl TagField {
    /// All fields, in the order they are written
    pub const ALL: [TagField; 9] = [
        TagField::Artist,
        TagField::DiscNumber,
        TagField::TrackNumber,
        TagField::Title,
        TagField::Album,
        TagField::AlbumArtist,
        TagField::Date,
        TagField::Year,
        TagField::Genre,
    ];

    /// Vorbis comment key
    pub fn vorbis_key(&self) -> &'static str {
        match self {
            TagField::Artist => "ARTIST",
            TagField::DiscNumber => "DISCNUMBER",
            TagField::TrackNumber => "TRACKNUMBER",
            TagField::Title => "TITLE",
            TagField::Album => "ALBUM",
            TagField::AlbumArtist => "ALBUMARTIST",
            TagField::Date => "DATE",
            TagField::Year => "YEAR",
            TagField::Genre => "GENRE",
        }
    }

    /// Convert a Vorbis comment key to a field, ignoring case
    pub fn from_vorbis(key: &str) -> Option<TagField> {
        Self::ALL
            .into_iter()
            .find(|field| field.vorbis_key().eq_ignore_ascii_case(key))
    }
}

/// Ordered field values for one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    fields: Vec<(TagField, String)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full field set for one track of an album
    pub fn for_track(album: &AlbumMetadata, track: &TrackEntry, genre: &str) -> Self {
        let mut set = Self::new();
        set.push(TagField::Artist, &album.artist);
        set.push(TagField::DiscNumber, track.disc_number.to_string());
        set.push(TagField::TrackNumber, track.track_number.to_string());
        set.push(TagField::Title, &track.title);
        set.push(TagField::Album, &album.album_title);
        set.push(TagField::AlbumArtist, &album.artist);
        set.push(TagField::Date, album.iso_date());
        set.push(TagField::Year, album.year.to_string());
        set.push(TagField::Genre, genre);
        set
    }

    pub fn push(&mut self, field: TagField, value: impl Into<String>) {
        self.fields.push((field, value.into()));
    }

    pub fn get(&self, field: TagField) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagField, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vorbis_keys() {
        assert_eq!(TagField::DiscNumber.vorbis_key(), "DISCNUMBER");
        assert_eq!(TagField::from_vorbis("albumartist"), Some(TagField::AlbumArtist));
        assert_eq!(TagField::from_vorbis("TiTlE"), Some(TagField::Title));
        assert_eq!(TagField::from_vorbis("COMMENT"), None);
    }

    #[test]
    fn test_field_set_lookup() {
        let mut set = FieldSet::new();
        set.push(TagField::Title, "Bertha");
        set.push(TagField::TrackNumber, "1");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(TagField::Title), Some("Bertha"));
        assert_eq!(set.get(TagField::Genre), None);
        let keys: Vec<_> = set.iter().map(|(f, _)| f.vorbis_key()).collect();
        assert_eq!(keys, vec!["TITLE", "TRACKNUMBER"]);
    }
}

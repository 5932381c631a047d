// Track listing lines
//
// Track lines look like "d1t01 - Bertha". Anything else in the listing
// (set headers, notes, blank lines) is ignored.

use serde::Serialize;

use crate::error::ParseError;

const SEPARATOR: &str = " - ";

/// One track from the metadata file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackEntry {
    /// Disc/track code as written, e.g. "d1t01"
    pub identifier: String,
    pub disc_number: u8,
    /// Track number with leading zeros dropped
    pub track_number: u32,
    pub title: String,
}

impl TrackEntry {
    /// File name the audio file is expected to have, e.g. "gd73-06-22d1t01.flac"
    pub fn predicted_filename(&self, short_date: &str) -> String {
        format!("gd{}{}.flac", short_date, self.identifier)
    }
}

/// Whether a line is a track listing
pub fn is_track_line(line: &str) -> bool {
    line.starts_with('d') && line.contains(SEPARATOR)
}

/// Parse a track listing line into its disc, track and title
pub fn parse_track_line(line: &str) -> Result<TrackEntry, ParseError> {
    let invalid = || ParseError::InvalidTrackIdentifier {
        line: line.to_string(),
    };

    let bytes = line.as_bytes();
    if bytes.len() < 4 || bytes[0] != b'd' || !bytes[1].is_ascii_digit() || bytes[2] != b't' {
        return Err(invalid());
    }

    // Only a single disc digit is supported
    let disc_number = bytes[1] - b'0';

    let digits = bytes[3..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Err(invalid());
    }
    let identifier = &line[..3 + digits];
    // all digits, so the only way this fails is overflow
    let track_number = identifier[3..]
        .parse::<u32>()
        .map_err(|_| ParseError::TrackNumberOutOfRange {
            line: line.to_string(),
        })?;

    let (_, title) = line.split_once(SEPARATOR).ok_or_else(invalid)?;

    Ok(TrackEntry {
        identifier: identifier.to_string(),
        disc_number,
        track_number,
        title: title.trim().to_string(),
    })
}

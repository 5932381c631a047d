// Parsers for the Hunter's Trix naming conventions
//
// Every function here works on a single line or file name and has no side effects.
// The assumptions about the tape-trading community's naming live in this module only.

pub mod header;
pub mod naming;
pub mod track;

pub use header::{parse_show_date, split_header, Header, HEADER_LINES};
pub use naming::{is_album_dir_name, parse_volume_id};
pub use track::{is_track_line, parse_track_line, TrackEntry};

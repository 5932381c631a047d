//! Tagging for Hunter's Trix FLAC downloads.
//!
//! An untouched download directory such as `gd73-06-22.mtx.seamons.ht12.92375.flac16`
//! holds a `*.mtx.seamons.txt` metadata file, a `*_front*.jpg` cover and one FLAC
//! file per track. This crate reads the metadata file, works out album and track
//! fields, writes them to every track through a [`TagWriter`] and can rename the
//! directory to the album title.
//!
//! ```no_run
//! use trixtag::{process_album, AlbumOptions, MetaflacWriter, StdinPrompter};
//!
//! let options = AlbumOptions::new("gd73-06-22.mtx.seamons.ht12.92375.flac16");
//! let report = process_album(&options, &mut MetaflacWriter::default(), &mut StdinPrompter)?;
//! println!("{}", report.title);
//! # Ok::<(), trixtag::TrixError>(())
//! ```

pub mod album;
pub mod batch;
pub mod error;
pub mod field_mapping;
pub mod flac;
pub mod parse;
pub mod resolver;
pub mod tagger;
pub mod utils;
pub mod verify;

pub use album::{process_album, rename_album_dir, AlbumOptions, AlbumReport, DEFAULT_GENRE};
pub use batch::{find_album_dirs, run_batch, BatchOptions, BatchResult, FailedAlbum};
pub use error::{ParseError, Result, TrixError};
pub use field_mapping::{FieldSet, TagField};
pub use parse::TrackEntry;
pub use resolver::{
    resolve, AlbumMetadata, Prompter, ResolveOptions, ResolvedAlbum, StdinPrompter, VolumeFallback,
};
pub use tagger::{tag_album, MetaflacWriter, RecordingWriter, TagCall, TagWriter, TaggedTrack};
pub use verify::{verify_album, Mismatch};

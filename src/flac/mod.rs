// FLAC tag read-back
//
// Just enough of the FLAC container to find the VORBIS_COMMENT block, so that
// tags written by metaflac can be checked without shelling out again.

pub mod metadata;
pub mod vorbis;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, TrixError};

pub use metadata::{FlacMetadataBlockHeader, FlacMetadataBlockType, FLAC_SIGNATURE};
pub use vorbis::VorbisComment;

/// Read the Vorbis comment block of a FLAC file, if it has one
pub fn read_vorbis_comment(path: &Path) -> Result<Option<VorbisComment>> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut signature = [0u8; 4];
    reader.read_exact(&mut signature)?;
    if &signature != FLAC_SIGNATURE {
        return Err(TrixError::NotFlac(path.to_path_buf()));
    }

    loop {
        let header = FlacMetadataBlockHeader::read(&mut reader)?;
        if header.block_type == FlacMetadataBlockType::VorbisComment {
            let data = header.read_body(&mut reader)?;
            return Ok(Some(VorbisComment::read(&mut data.as_slice())?));
        }
        header.skip_body(&mut reader)?;
        if header.is_last {
            return Ok(None);
        }
    }
}

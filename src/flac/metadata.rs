// FLAC metadata block headers

use std::io::{self, Read};

/// FLAC file signature
pub const FLAC_SIGNATURE: &[u8; 4] = b"fLaC";

/// FLAC metadata block types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlacMetadataBlockType {
    StreamInfo,
    Padding,
    Application,
    SeekTable,
    VorbisComment,
    CueSheet,
    Picture,
    Reserved(u8),
}

impl FlacMetadataBlockType {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0 => FlacMetadataBlockType::StreamInfo,
            1 => FlacMetadataBlockType::Padding,
            2 => FlacMetadataBlockType::Application,
            3 => FlacMetadataBlockType::SeekTable,
            4 => FlacMetadataBlockType::VorbisComment,
            5 => FlacMetadataBlockType::CueSheet,
            6 => FlacMetadataBlockType::Picture,
            other => FlacMetadataBlockType::Reserved(other),
        }
    }
}

/// FLAC metadata block header
#[derive(Debug)]
pub struct FlacMetadataBlockHeader {
    pub is_last: bool,
    pub block_type: FlacMetadataBlockType,
    pub length: u32,
}

impl FlacMetadataBlockHeader {
    const HEADER_SIZE: usize = 4;

    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut buffer = [0u8; Self::HEADER_SIZE];
        reader.read_exact(&mut buffer)?;

        // Length is big-endian 24-bit
        let length = u32::from_be_bytes([0, buffer[1], buffer[2], buffer[3]]);

        Ok(FlacMetadataBlockHeader {
            is_last: (buffer[0] & 0x80) != 0,
            block_type: FlacMetadataBlockType::from_byte(buffer[0] & 0x7F),
            length,
        })
    }

    pub fn read_body<R: Read>(&self, reader: &mut R) -> io::Result<Vec<u8>> {
        let mut data = vec![0u8; self.length as usize];
        reader.read_exact(&mut data)?;
        Ok(data)
    }

    /// Skip over the block body (cover art can be large)
    pub fn skip_body<R: Read>(&self, reader: &mut R) -> io::Result<()> {
        let skipped = io::copy(&mut reader.take(self.length as u64), &mut io::sink())?;
        if skipped < self.length as u64 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated FLAC metadata block"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_header() {
        let bytes = [0x84u8, 0x00, 0x01, 0x02];
        let header = FlacMetadataBlockHeader::read(&mut bytes.as_slice()).unwrap();
        assert!(header.is_last);
        assert_eq!(header.block_type, FlacMetadataBlockType::VorbisComment);
        assert_eq!(header.length, 0x0102);
    }

    #[test]
    fn test_skip_truncated_body() {
        let header = FlacMetadataBlockHeader {
            is_last: false,
            block_type: FlacMetadataBlockType::Picture,
            length: 10,
        };
        let err = header.skip_body(&mut [0u8; 4].as_slice()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}

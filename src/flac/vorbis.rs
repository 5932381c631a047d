// VORBIS_COMMENT block

use std::io::{self, Read};

use crate::field_mapping::TagField;

/// Vorbis comment structure
#[derive(Debug, Default, PartialEq)]
pub struct VorbisComment {
    pub vendor_string: String,
    pub comments: Vec<(String, String)>,
}

fn read_le_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer)?;
    Ok(u32::from_le_bytes(buffer))
}

fn read_string<R: Read>(reader: &mut R) -> io::Result<String> {
    let length = read_le_u32(reader)? as usize;
    let mut bytes = vec![0u8; length];
    reader.read_exact(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl VorbisComment {
    /// Read a Vorbis comment block body
    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let vendor_string = read_string(reader)?;
        let count = read_le_u32(reader)? as usize;

        let mut comments = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let comment = read_string(reader)?;
            // FIELD=value; entries without '=' are ignored
            if let Some((field, value)) = comment.split_once('=') {
                comments.push((field.to_string(), value.to_string()));
            }
        }

        Ok(VorbisComment {
            vendor_string,
            comments,
        })
    }

    /// Encode as a block body
    pub fn to_bytes(&self) -> Vec<u8> {
        fn put(out: &mut Vec<u8>, s: &str) {
            out.extend_from_slice(&(s.len() as u32).to_le_bytes());
            out.extend_from_slice(s.as_bytes());
        }

        let mut out = Vec::new();
        put(&mut out, &self.vendor_string);
        out.extend_from_slice(&(self.comments.len() as u32).to_le_bytes());
        for (key, value) in &self.comments {
            put(&mut out, &format!("{}={}", key, value));
        }
        out
    }

    /// All values stored under `field`
    pub fn values(&self, field: TagField) -> Vec<&str> {
        self.comments
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(field.vorbis_key()))
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

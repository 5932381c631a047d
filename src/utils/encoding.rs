// Encoding utilities
//
// Metadata files come from many different text editors. Most are UTF-8, some
// carry a BOM, and older ones are Windows-1252 (accented venue names).

use encoding_rs::{UTF_8, WINDOWS_1252};

/// Text encoding detected for a metadata file
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextEncoding {
    Utf8,
    Windows1252,
}

/// Decode a metadata file, returning the text and the encoding that was used
pub fn decode_text(data: &[u8]) -> (String, TextEncoding) {
    // decode_without_bom_handling_and_without_replacement returns None on malformed input
    let body = data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data);
    match UTF_8.decode_without_bom_handling_and_without_replacement(body) {
        Some(text) => (text.into_owned(), TextEncoding::Utf8),
        None => (WINDOWS_1252.decode(data).0.into_owned(), TextEncoding::Windows1252),
    }
}

/// Decode a metadata file into trimmed lines
pub fn decode_lines(data: &[u8]) -> (Vec<String>, TextEncoding) {
    let (text, encoding) = decode_text(data);
    let lines = text.lines().map(|line| line.trim().to_string()).collect();
    (lines, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        let (text, encoding) = decode_text("Théâtre\n".as_bytes());
        assert_eq!(text, "Théâtre\n");
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_utf8_bom_is_dropped() {
        let (lines, encoding) = decode_lines(b"\xEF\xBB\xBFGrateful Dead\r\nVenue\r\n");
        assert_eq!(lines, vec!["Grateful Dead", "Venue"]);
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_windows_1252_fallback() {
        let (text, encoding) = decode_text(b"Th\xe9\xe2tre");
        assert_eq!(text, "Théâtre");
        assert_eq!(encoding, TextEncoding::Windows1252);
    }
}

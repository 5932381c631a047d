// Directory naming convention
//
// Untouched downloads are named like "gd73-06-22.mtx.seamons.ht12.92375.flac16".
// "ht12" is Hunter's Trix volume 12. Volumes 82-94 were released as "Jubal's Trix"
// and use "jt" instead.

use regex::Regex;
use std::sync::LazyLock;

static VOLUME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[hj]t([0-9]+)\.").unwrap());

static ALBUM_DIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.mtx\.seamons\.[hj]t[0-9]+\.[0-9]+\.").unwrap());

/// Extract the volume number from a directory name
pub fn parse_volume_id(dir_name: &str) -> Option<String> {
    VOLUME_PATTERN
        .captures(dir_name)
        .map(|caps| caps[1].to_string())
}

/// Whether a directory name follows the untouched download naming
pub fn is_album_dir_name(name: &str) -> bool {
    ALBUM_DIR_PATTERN.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_from_hunters_trix_dir() {
        assert_eq!(
            parse_volume_id("gd73-06-22.mtx.seamons.ht12.92375.flac16"),
            Some("12".to_string())
        );
    }

    #[test]
    fn test_volume_from_jubals_trix_dir() {
        assert_eq!(
            parse_volume_id("gd78-01-22.mtx.seamons.jt88.12345.flac16"),
            Some("88".to_string())
        );
    }

    #[test]
    fn test_volume_missing() {
        assert_eq!(parse_volume_id("1973-06-22 - P.N.E. Coliseum"), None);
        assert_eq!(parse_volume_id("gd73-06-22.mtx.seamons.ht.92375"), None);
        // needs the trailing dot separator
        assert_eq!(parse_volume_id("gd73-06-22.ht12"), None);
    }

    #[test]
    fn test_album_dir_name() {
        assert!(is_album_dir_name("gd73-06-22.mtx.seamons.ht12.92375.flac16"));
        assert!(is_album_dir_name("gd78-01-22.mtx.seamons.jt88.12345.flac24"));
        assert!(!is_album_dir_name("gd73-06-22.mtx.seamons.ht12"));
        assert!(!is_album_dir_name("gd73-06-22.mtx.seamons.kt12.92375.flac16"));
        assert!(!is_album_dir_name("1973-06-22 - P.N.E. Coliseum (Hunter's Trix Vol. 12)"));
    }
}

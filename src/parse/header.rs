// Metadata file header
//
// The first four lines of a seamons metadata file look like:
//
//   Grateful Dead
//   P.N.E. Coliseum
//   Vancouver, BC, Canada
//   June 22, 1973

use chrono::NaiveDate;

use crate::error::ParseError;

/// Number of header lines before the track listing starts
pub const HEADER_LINES: usize = 4;

/// Format of the show date line
const SHOW_DATE_FORMAT: &str = "%B %d, %Y";

/// Album-level fields taken from the header lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub artist: String,
    pub venue: String,
    pub location: String,
    pub date: NaiveDate,
}

/// Parse a show date such as "June 22, 1973"
///
/// chrono's `%B` also takes abbreviated names and format spaces are optional, so
/// the layout is checked separately: full month name, one space, the day, ", ",
/// a four-digit year.
pub fn parse_show_date(value: &str) -> Result<NaiveDate, ParseError> {
    let value = value.trim();
    let invalid = || ParseError::InvalidDate {
        value: value.to_string(),
    };

    let date = NaiveDate::parse_from_str(value, SHOW_DATE_FORMAT).map_err(|_| invalid())?;

    let (month, rest) = value.split_once(' ').ok_or_else(invalid)?;
    let (day, year) = rest.split_once(", ").ok_or_else(invalid)?;
    let digits = |s: &str, len: std::ops::RangeInclusive<usize>| {
        len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };

    if month.eq_ignore_ascii_case(&date.format("%B").to_string()) && digits(day, 1..=2) && digits(year, 4..=4) {
        Ok(date)
    } else {
        Err(invalid())
    }
}

/// Split trimmed lines into the header and the remaining body.
///
/// Blank lines before and between header lines are skipped. The body is
/// everything after the fourth non-empty line.
pub fn split_header<S: AsRef<str>>(lines: &[S]) -> Result<(Header, &[S]), ParseError> {
    let mut fields: Vec<&str> = Vec::with_capacity(HEADER_LINES);
    let mut consumed = 0;

    for line in lines {
        if fields.len() == HEADER_LINES {
            break;
        }
        consumed += 1;
        let line = line.as_ref().trim();
        if !line.is_empty() {
            fields.push(line);
        }
    }

    if fields.len() < HEADER_LINES {
        return Err(ParseError::HeaderTooShort { found: fields.len() });
    }

    let header = Header {
        artist: fields[0].to_string(),
        venue: fields[1].to_string(),
        location: fields[2].to_string(),
        date: parse_show_date(fields[3])?,
    };

    Ok((header, &lines[consumed..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show_date() {
        assert_eq!(parse_show_date("June 22, 1973"), Ok(NaiveDate::from_ymd_opt(1973, 6, 22).unwrap()));
        assert_eq!(parse_show_date("May 8, 1977"), Ok(NaiveDate::from_ymd_opt(1977, 5, 8).unwrap()));
        assert_eq!(parse_show_date("  December 31, 1978 "), Ok(NaiveDate::from_ymd_opt(1978, 12, 31).unwrap()));
    }

    #[test]
    fn test_parse_show_date_rejects_other_formats() {
        assert!(matches!(parse_show_date("1973-06-22"), Err(ParseError::InvalidDate { .. })));
        assert!(matches!(parse_show_date("June 31, 1973"), Err(ParseError::InvalidDate { .. })));
        assert!(matches!(parse_show_date(""), Err(ParseError::InvalidDate { .. })));
        assert!(matches!(parse_show_date("Jun 22, 1973"), Err(ParseError::InvalidDate { .. })));
        assert!(matches!(parse_show_date("June 22,1973"), Err(ParseError::InvalidDate { .. })));
        assert!(matches!(parse_show_date("June  22, 1973"), Err(ParseError::InvalidDate { .. })));
        assert!(matches!(parse_show_date("June 22, 73"), Err(ParseError::InvalidDate { .. })));
    }

    #[test]
    fn test_split_header() {
        let lines = [
            "Grateful Dead",
            "P.N.E. Coliseum",
            "Vancouver, BC, Canada",
            "June 22, 1973",
            "",
            "d1t01 - Bertha",
        ];
        let (header, body) = split_header(&lines).unwrap();
        assert_eq!(header.artist, "Grateful Dead");
        assert_eq!(header.venue, "P.N.E. Coliseum");
        assert_eq!(header.location, "Vancouver, BC, Canada");
        assert_eq!(header.date, NaiveDate::from_ymd_opt(1973, 6, 22).unwrap());
        assert_eq!(body, &["", "d1t01 - Bertha"]);
    }

    #[test]
    fn test_split_header_skips_leading_blank_lines() {
        let lines = ["", "Grateful Dead", "Venue", "", "City", "June 22, 1973"];
        let (header, body) = split_header(&lines).unwrap();
        assert_eq!(header.location, "City");
        assert!(body.is_empty());
    }

    #[test]
    fn test_split_header_too_short() {
        let lines = ["Grateful Dead", "P.N.E. Coliseum", "Vancouver, BC, Canada"];
        assert_eq!(split_header(&lines), Err(ParseError::HeaderTooShort { found: 3 }));
    }
}

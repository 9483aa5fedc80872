//! Album and track identifiers
//!
//! Album ids are two zero-padded decimal digits (`"01"`). Track ids join the
//! album id and the 1-based track position with a dash (`"01-02"`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CatalogError;

/// Largest position representable in a two-digit id
pub const MAX_ID_NUMBER: usize = 99;

lazy_static! {
    static ref ALBUM_ID_PATTERN: Regex = Regex::new(r"^[0-9]{2}$").unwrap();
    static ref TRACK_ID_PATTERN: Regex = Regex::new(r"^([0-9]{2})-([0-9]{2})$").unwrap();
}

/// A validated track id split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRef<'a> {
    pub album_id: &'a str,
    /// 1-based position within the album
    pub number: usize,
}

/// Check that `album_id` is exactly two decimal digits
pub fn validate_album_id(album_id: &str) -> Result<(), CatalogError> {
    if ALBUM_ID_PATTERN.is_match(album_id) {
        Ok(())
    } else {
        Err(CatalogError::InvalidAlbumId(album_id.to_string()))
    }
}

/// Split a track id into album id and track number
pub fn parse_track_id(track_id: &str) -> Result<TrackRef<'_>, CatalogError> {
    let caps = TRACK_ID_PATTERN
        .captures(track_id)
        .ok_or_else(|| CatalogError::InvalidTrackId(track_id.to_string()))?;

    let (album, number) = match (caps.get(1), caps.get(2)) {
        (Some(album), Some(number)) => (album, number),
        _ => return Err(CatalogError::InvalidTrackId(track_id.to_string())),
    };

    let number = number
        .as_str()
        .parse()
        .map_err(|_| CatalogError::InvalidTrackId(track_id.to_string()))?;

    Ok(TrackRef {
        album_id: album.as_str(),
        number,
    })
}

/// Album id for the album at 0-based `index`
pub fn album_id(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Track id for the track at 0-based `index` on `album_id`
pub fn track_id(album_id: &str, index: usize) -> String {
    format!("{}-{:02}", album_id, index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_ids() {
        assert!(validate_album_id("01").is_ok());
        assert!(validate_album_id("99").is_ok());
        for bad in ["1", "a", "001", "", "0a", " 01"] {
            assert!(
                matches!(validate_album_id(bad), Err(CatalogError::InvalidAlbumId(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_track_ids() {
        let parsed = parse_track_id("01-02").unwrap();
        assert_eq!(parsed.album_id, "01");
        assert_eq!(parsed.number, 2);

        for bad in ["1-02", "01-2", "0102", "a", "10", "1-", "1-01", "1-1", "01-02-03"] {
            assert!(
                matches!(parse_track_id(bad), Err(CatalogError::InvalidTrackId(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_track_number_is_well_formed() {
        let parsed = parse_track_id("01-00").unwrap();
        assert_eq!(parsed.number, 0);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(album_id(0), "01");
        assert_eq!(album_id(11), "12");
        assert_eq!(track_id("03", 1), "03-02");
    }
}

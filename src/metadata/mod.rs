//! EXIF-backed capture timestamp extraction.
//!
//! Opens a file, reads the EXIF block from its container (JPEG, TIFF, HEIF,
//! PNG, WebP) and resolves the first available capture date-time into UTC
//! seconds.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use exif::{In, Tag, Value};
use tracing::trace;

use crate::core::{SourceError, TimestampSource, Timestamp};

/// Date-time tags in preference order, each paired with its offset tag.
const CAPTURE_TAGS: [(Tag, Tag); 3] = [
    (Tag::DateTimeOriginal, Tag::OffsetTimeOriginal),
    (Tag::DateTimeDigitized, Tag::OffsetTimeDigitized),
    (Tag::DateTime, Tag::OffsetTime),
];

/// Production [`TimestampSource`] reading EXIF capture time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifTimestampSource;

impl ExifTimestampSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TimestampSource for ExifTimestampSource {
    fn extract_timestamp(&self, path: &Path) -> Result<Timestamp, SourceError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let exif = exif::Reader::new()
            .read_from_container(&mut reader)
            .map_err(map_exif_error)?;

        for (datetime_tag, offset_tag) in CAPTURE_TAGS {
            let Some(datetime) = first_ascii(&exif, datetime_tag) else {
                continue;
            };
            let offset = first_ascii(&exif, offset_tag);
            trace!(path = %path.display(), tag = %datetime_tag, "capture tag found");
            return parse_exif_datetime(datetime, offset);
        }

        Err(SourceError::MissingTimestamp)
    }
}

/// Parses an EXIF `YYYY:MM:DD HH:MM:SS` value into UTC seconds.
///
/// Without an offset (`+HH:MM` / `-HH:MM`) the value is read as UTC.
pub fn parse_exif_datetime(
    datetime: &[u8],
    offset: Option<&[u8]>,
) -> Result<Timestamp, SourceError> {
    let invalid = || SourceError::InvalidTimestamp(String::from_utf8_lossy(datetime).into_owned());

    let mut parsed = exif::DateTime::from_ascii(datetime).map_err(|_| invalid())?;
    if let Some(offset) = offset {
        parsed.parse_offset(offset).map_err(|_| {
            SourceError::InvalidTimestamp(String::from_utf8_lossy(offset).into_owned())
        })?;
    }

    let naive = NaiveDate::from_ymd_opt(
        i32::from(parsed.year),
        u32::from(parsed.month),
        u32::from(parsed.day),
    )
    .and_then(|date| {
        date.and_hms_opt(
            u32::from(parsed.hour),
            u32::from(parsed.minute),
            u32::from(parsed.second),
        )
    })
    .ok_or_else(invalid)?;

    let offset_seconds = parsed.offset.map_or(0, |minutes| i64::from(minutes) * 60);
    Ok(naive.and_utc().timestamp() - offset_seconds)
}

fn first_ascii(exif: &exif::Exif, tag: Tag) -> Option<&[u8]> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(values) => values
            .first()
            .map(Vec::as_slice)
            .filter(|value| !value.is_empty()),
        _ => None,
    }
}

fn map_exif_error(err: exif::Error) -> SourceError {
    match err {
        exif::Error::Io(err) => SourceError::Io(err),
        exif::Error::NotFound(_) => SourceError::MissingTimestamp,
        other => SourceError::MalformedHeader(other.to_string()),
    }
}

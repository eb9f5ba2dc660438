/*!
 * SRT timecode conversion.
 *
 * Converts between `HH:MM:SS,mmm` strings and millisecond offsets. Decoding
 * accepts a comma, colon or dot in front of the millisecond field.
 */

use crate::errors::ParseError;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Format a millisecond offset as an SRT timecode (HH:MM:SS,mmm)
///
/// Hours are not wrapped at 24.
pub fn encode(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Parse an SRT timecode into milliseconds
pub fn decode(timecode: &str) -> Result<u64, ParseError> {
    let trimmed = timecode.trim();
    let parts: Vec<&str> = trimmed.split([':', ',', '.']).collect();

    if parts.len() != 4 {
        return Err(ParseError::Malformed(format!(
            "expected 4 timecode fields, found {} in '{}'",
            parts.len(),
            trimmed
        )));
    }

    let hours = parse_field(parts[0], "hours", trimmed)?;
    let minutes = parse_field(parts[1], "minutes", trimmed)?;
    let seconds = parse_field(parts[2], "seconds", trimmed)?;
    let millis = parse_field(parts[3], "milliseconds", trimmed)?;

    if minutes >= 60 || seconds >= 60 || millis >= 1000 {
        return Err(ParseError::Malformed(format!(
            "time component out of range in '{}'",
            trimmed
        )));
    }

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis))
        .ok_or_else(|| ParseError::Malformed(format!("timecode overflows: '{}'", trimmed)))
}

fn parse_field(field: &str, name: &str, timecode: &str) -> Result<u64, ParseError> {
    // u64::from_str accepts a leading '+', which is never valid here
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::Malformed(format!(
            "invalid {} field '{}' in '{}'",
            name, field, timecode
        )));
    }

    field
        .parse::<u64>()
        .map_err(|e| ParseError::Malformed(format!("invalid {} in '{}': {}", name, timecode, e)))
}

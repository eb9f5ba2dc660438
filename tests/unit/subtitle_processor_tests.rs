/*!
 * Tests for SRT parsing and serialization
 */

use anyhow::Result;
use std::fmt::Write;

use cuesplit::errors::{ParseError, SubtitleError, ValidationError};
use cuesplit::subtitle_processor::{self, Cue};
use crate::common;

/// Test cue display formatting
#[test]
fn test_cue_display_withValidCue_shouldFormatCorrectly() {
    let cue = Cue::new(1, 5000, 10000, "Test subtitle");
    let mut output = String::new();
    write!(output, "{}", cue).unwrap();

    assert_eq!(output, "1\n00:00:05,000 --> 00:00:10,000\nTest subtitle");
}

/// Test cue accessors
#[test]
fn test_cue_properties_withValidCue_shouldHaveCorrectValues() {
    let cue = Cue::new(42, 61234, 65432, "Hello\nWorld");

    assert_eq!(cue.duration_ms(), 4198);
    assert_eq!(cue.format_start_time(), "00:01:01,234");
    assert_eq!(cue.format_end_time(), "00:01:05,432");
}

/// Test validated construction
#[test]
fn test_cue_newValidated_withEmptyInterval_shouldFail() {
    assert_eq!(
        Cue::new_validated(3, 1000, 1000, "x"),
        Err(ValidationError::NonMonotonicInterval { index: 3, start_ms: 1000, end_ms: 1000 })
    );
    assert!(Cue::new_validated(3, 1000, 1001, "x").is_ok());
}

/// Multi-line cue text is joined with a single space
#[test]
fn test_parse_withMultiLineText_shouldJoinWithSpace() -> Result<()> {
    let parsed = subtitle_processor::parse("1\n00:00:01,000 --> 00:00:02,000\nFirst line\nsecond line\n")?;

    assert_eq!(parsed.cues, vec![Cue::new(1, 1000, 2000, "First line second line")]);
    assert!(parsed.warnings.is_empty());
    Ok(())
}

/// CRLF endings and a byte order mark are accepted
#[test]
fn test_parse_withCrlfAndBom_shouldParse() -> Result<()> {
    let content = "\u{feff}1\r\n00:00:01,000 --> 00:00:02,000\r\nHello\r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nWorld\r\n";

    let parsed = subtitle_processor::parse(content)?;

    assert_eq!(
        parsed.cues,
        vec![Cue::new(1, 1000, 2000, "Hello"), Cue::new(2, 3000, 4000, "World")]
    );
    Ok(())
}

/// Extra blank lines and trailing positioning are tolerated
#[test]
fn test_parse_withLooseFormatting_shouldParse() -> Result<()> {
    let content = "\n\n1\n00:00:01,000 --> 00:00:02,000 X1:40 X2:600\nHello\n\n\n\n2\n00:00:03.000-->00:00:04.000\nWorld";

    let parsed = subtitle_processor::parse(content)?;

    assert_eq!(parsed.cues.len(), 2);
    assert_eq!(parsed.cues[1].start_ms, 3000);
    Ok(())
}

/// An entry without an arrow is dropped with a warning and the rest survive
#[test]
fn test_parse_withMissingArrow_shouldDropEntryAndWarn() -> Result<()> {
    let content = "1
00:00:01,000 --> 00:00:02,000
Good

2
00:00:03,000 00:00:04,000
Broken

3
00:00:05,000 --> 00:00:06,000
Also good
";

    let parsed = subtitle_processor::parse(content)?;

    assert_eq!(
        parsed.cues,
        vec![Cue::new(1, 1000, 2000, "Good"), Cue::new(2, 5000, 6000, "Also good")]
    );
    assert_eq!(parsed.warnings.len(), 1);
    assert_eq!(parsed.warnings[0].entry, 2);
    assert_eq!(parsed.warnings[0].line, 5);
    assert!(matches!(parsed.warnings[0].error, SubtitleError::Parse(ParseError::Malformed(_))));
    Ok(())
}

/// Inverted intervals and bad indices are dropped
#[test]
fn test_parse_withInvalidEntries_shouldReportEach() -> Result<()> {
    let content = "x
00:00:01,000 --> 00:00:02,000
Bad index

2
00:00:04,000 --> 00:00:03,000
Inverted

3
00:00:05,000 --> 00:00:06,000
";

    let result = subtitle_processor::parse(&format!("{}\n4\n00:00:07,000 --> 00:00:08,000\nOk\n", content))?;

    assert_eq!(result.cues, vec![Cue::new(1, 7000, 8000, "Ok")]);
    assert_eq!(result.warnings.len(), 3);
    assert!(matches!(
        result.warnings[1].error,
        SubtitleError::Validation(ValidationError::NonMonotonicInterval { index: 2, .. })
    ));
    Ok(())
}

/// Input with nothing usable is an error
#[test]
fn test_parse_withNoValidEntries_shouldReturnEmptyInput() {
    assert_eq!(subtitle_processor::parse(""), Err(ParseError::EmptyInput));
    assert_eq!(subtitle_processor::parse("\n\n  \n"), Err(ParseError::EmptyInput));
    assert_eq!(
        subtitle_processor::parse("1\nnot a time\nText\n"),
        Err(ParseError::EmptyInput)
    );
}

/// Cues are ordered by start time and renumbered
#[test]
fn test_parse_withUnorderedEntries_shouldSortAndRenumber() -> Result<()> {
    let content = "7\n00:00:05,000 --> 00:00:06,000\nLater\n\n3\n00:00:01,000 --> 00:00:02,000\nEarlier\n";

    let parsed = subtitle_processor::parse(content)?;

    assert_eq!(
        parsed.cues,
        vec![Cue::new(1, 1000, 2000, "Earlier"), Cue::new(2, 5000, 6000, "Later")]
    );
    Ok(())
}

/// Serialization writes the canonical layout
#[test]
fn test_serialize_shouldWriteCanonicalLayout() {
    let cues = vec![Cue::new(1, 0, 1500, "Hello"), Cue::new(2, 1500, 3000, "Two\nlines")];

    assert_eq!(
        subtitle_processor::serialize(&cues),
        "1\n00:00:00,000 --> 00:00:01,500\nHello\n\n2\n00:00:01,500 --> 00:00:03,000\nTwo\nlines\n"
    );
    assert_eq!(subtitle_processor::serialize(&[]), "");
}

/// Parsing serialized output yields the same cues
#[test]
fn test_parse_withSerializedCues_shouldRoundTrip() -> Result<()> {
    let parsed = subtitle_processor::parse(common::ENGLISH_SRT)?;
    let reparsed = subtitle_processor::parse(&subtitle_processor::serialize(&parsed.cues))?;

    assert_eq!(parsed.cues, reparsed.cues);
    Ok(())
}

/*!
 * Transcript input model.
 *
 * The transcription service returns segments with start and end times in
 * fractional seconds. They are converted to whole milliseconds on load.
 */

use serde::Deserialize;

use crate::errors::ParseError;

/// One utterance from the transcription service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    /// Start time in milliseconds
    pub start_ms: u64,
    /// End time in milliseconds
    pub end_ms: u64,
    /// Raw utterance text
    pub text: String,
}

impl TranscriptSegment {
    pub fn new(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            text: text.into(),
        }
    }
}

/// Ordered list of transcript segments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
}

#[derive(Debug, Deserialize)]
struct RawTranscript {
    #[serde(default)]
    segments: Vec<RawSegment>,
}

#[derive(Debug, Deserialize)]
struct RawSegment {
    start: f64,
    end: f64,
    #[serde(default)]
    text: String,
}

impl Transcript {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    /// Load a transcript from the service's JSON response
    ///
    /// Only `segments[].start`, `segments[].end` and `segments[].text` are
    /// read; other fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let raw: RawTranscript = serde_json::from_str(json)
            .map_err(|e| ParseError::Malformed(format!("invalid transcript JSON: {}", e)))?;

        let segments = raw
            .segments
            .into_iter()
            .enumerate()
            .map(|(i, seg)| {
                Ok(TranscriptSegment {
                    start_ms: seconds_to_ms(seg.start, i)?,
                    end_ms: seconds_to_ms(seg.end, i)?,
                    text: seg.text,
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(Self { segments })
    }
}

fn seconds_to_ms(seconds: f64, segment: usize) -> Result<u64, ParseError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ParseError::Malformed(format!(
            "segment {} has invalid time {}",
            segment + 1,
            seconds
        )));
    }
    Ok((seconds * 1000.0).round() as u64)
}

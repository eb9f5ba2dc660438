use log::debug;

use crate::errors::ValidationError;
use crate::punctuation::{is_sentence_terminal, is_strippable, strip_trailing_punctuation};
use super::transcript::TranscriptSegment;

// @module: Sentence splitting of a single transcript segment

/// A sentence-sized piece of a transcript segment with its share of the time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceChunk {
    pub text: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl SentenceChunk {
    pub fn new(text: impl Into<String>, start_ms: u64, end_ms: u64) -> Self {
        Self {
            text: text.into(),
            start_ms,
            end_ms,
        }
    }
}

/// Split text after each run of sentence-terminal punctuation
///
/// The punctuation stays on the sentence it ends. Chunks that are empty or
/// consist only of strippable punctuation (commas included) are dropped, so
/// every returned chunk keeps text after stripping.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut chunk_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_sentence_terminal(c) {
            continue;
        }

        // Keep "?!" and "..." together
        let mut chunk_end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_sentence_terminal(next) {
                break;
            }
            chunk_end = j + next.len_utf8();
            chars.next();
        }

        chunks.push(&text[chunk_start..chunk_end]);
        chunk_start = chunk_end;
    }
    chunks.push(&text[chunk_start..]);

    chunks
        .into_iter()
        .map(str::trim)
        .filter(|chunk| chunk.chars().any(|c| !is_strippable(c) && !c.is_whitespace()))
        .collect()
}

/// Split one transcript segment into timed sentence chunks
///
/// The segment's duration is shared equally between the chunks; the last
/// chunk always ends at the segment's end. Empty text yields no chunks.
pub fn segment(segment: &TranscriptSegment) -> Result<Vec<SentenceChunk>, ValidationError> {
    if segment.end_ms <= segment.start_ms {
        return Err(ValidationError::NonMonotonicInterval {
            index: 0,
            start_ms: segment.start_ms,
            end_ms: segment.end_ms,
        });
    }

    let sentences = split_sentences(&segment.text);
    let count = sentences.len() as u64;
    let duration = segment.end_ms - segment.start_ms;

    if sentences.is_empty() {
        return Ok(Vec::new());
    }

    // One chunk per millisecond at most, otherwise chunks would be empty
    if count == 1 || duration < count {
        if count > 1 {
            debug!(
                "Segment {}-{}ms too short for {} sentences, keeping them together",
                segment.start_ms, segment.end_ms, count
            );
        }
        let text = sentences
            .iter()
            .map(|s| strip_trailing_punctuation(s))
            .collect::<Vec<_>>()
            .join(" ");
        return Ok(vec![SentenceChunk::new(text, segment.start_ms, segment.end_ms)]);
    }

    let share = duration as f64 / count as f64;
    let offset = |i: u64| segment.start_ms + (i as f64 * share).round() as u64;

    let chunks = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let i = i as u64;
            let end_ms = if i + 1 == count { segment.end_ms } else { offset(i + 1) };
            SentenceChunk::new(strip_trailing_punctuation(sentence), offset(i), end_ms)
        })
        .collect();

    Ok(chunks)
}

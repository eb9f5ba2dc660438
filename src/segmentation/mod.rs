/*!
 * Transcript segmentation.
 *
 * Turns transcript segments into provisional subtitle cues, one cue per
 * sentence:
 * - `transcript`: input model loaded from the transcription JSON
 * - `sentence`: sentence splitting and time apportioning for one segment
 */

pub mod sentence;
pub mod transcript;

pub use sentence::{segment, split_sentences, SentenceChunk};
pub use transcript::{Transcript, TranscriptSegment};

use log::{debug, warn};

use crate::errors::ValidationError;
use crate::subtitle_processor::{Cue, CueList};

/// Build a densely numbered cue list from a whole transcript
///
/// Segments with an inverted interval are skipped with a warning so one bad
/// segment does not lose the rest of the transcript.
pub fn segment_transcript(transcript: &Transcript) -> CueList {
    let mut cues = Vec::new();

    for (i, seg) in transcript.segments.iter().enumerate() {
        let chunks = match segment(seg) {
            Ok(chunks) => chunks,
            Err(ValidationError::NonMonotonicInterval { start_ms, end_ms, .. }) => {
                warn!(
                    "Skipping transcript segment {}: end {}ms <= start {}ms",
                    i + 1,
                    end_ms,
                    start_ms
                );
                continue;
            }
        };

        if chunks.is_empty() {
            debug!("Transcript segment {} has no text, no cue emitted", i + 1);
        }

        for chunk in chunks {
            let index = cues.len() as u32 + 1;
            cues.push(Cue::new(index, chunk.start_ms, chunk.end_ms, chunk.text));
        }
    }

    debug!(
        "Segmented {} transcript segments into {} cues",
        transcript.segments.len(),
        cues.len()
    );

    cues
}

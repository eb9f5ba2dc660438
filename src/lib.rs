/*!
 * # cuesplit - subtitle segmentation and timing
 *
 * A Rust library that turns speech transcripts into subtitle cues and
 * re-splits cues whose lines exceed a language-specific display budget.
 *
 * ## Features
 *
 * - Split timed transcript segments into sentence-level cues
 * - Word-based wrapping for space-delimited languages
 * - Per-character wrapping for CJK languages, keeping ASCII runs and
 *   protected brand terms intact
 * - Re-time split cues by dividing the original interval evenly
 * - Tolerant SRT parsing (CRLF, BOM, malformed entries) and canonical output
 * - Timing and line length reports after re-splitting
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: `HH:MM:SS,mmm` encoding and decoding
 * - `subtitle_processor`: cue model and SRT codec
 * - `segmentation`: transcripts and the sentence segmenter
 * - `line_split`: wrap strategies and protected terms
 * - `retiming`: interval subdivision for split cues
 * - `pipeline`: the `Resegmenter` composing the stages
 * - `validation`: timing and line length reports
 * - `language_utils`: language profiles and ISO code helpers
 * - `app_config`: Configuration management
 * - `app_controller`: file and folder workflows
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod line_split;
pub mod pipeline;
pub mod punctuation;
pub mod retiming;
pub mod segmentation;
pub mod subtitle_processor;
pub mod timecode;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{ParseError, SubtitleError, ValidationError};
pub use language_utils::{get_language_name, normalize_to_part2t, LanguageProfile};
pub use line_split::{split_lines, ProtectedTerms};
pub use pipeline::{Resegmenter, ResplitOutput};
pub use retiming::BoundaryPolicy;
pub use segmentation::{Transcript, TranscriptSegment};
pub use subtitle_processor::{Cue, CueList};

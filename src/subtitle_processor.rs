use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use log::{warn, debug};

use crate::errors::{ParseError, SubtitleError, ValidationError};
use crate::timecode;

// @module: Subtitle cue model and SRT reading/writing

// @const: SRT time range line, optional trailing positioning is ignored
static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\S+)\s*-->\s*(\S+)").expect("time range pattern is valid")
});

// @struct: Single timed subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: 1-based position in its list
    pub index: u32,

    // @field: Start time in ms
    pub start_ms: u64,

    // @field: End time in ms (exclusive)
    pub end_ms: u64,

    // @field: Cue text
    pub text: String,
}

/// Ordered cue sequence, owned by whichever stage currently holds it
pub type CueList = Vec<Cue>;

impl Cue {
    /// Creates a cue without checking its interval
    pub fn new(index: u32, start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Cue {
            index,
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    // @creates: Cue with a checked interval
    // @validates: end_ms > start_ms
    pub fn new_validated(index: u32, start_ms: u64, end_ms: u64, text: impl Into<String>) -> Result<Self, ValidationError> {
        if end_ms <= start_ms {
            return Err(ValidationError::NonMonotonicInterval { index, start_ms, end_ms });
        }

        Ok(Self::new(index, start_ms, end_ms, text))
    }

    /// Duration of the cue in milliseconds (zero for an inverted interval)
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        timecode::encode(self.start_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        timecode::encode(self.end_ms)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        write!(f, "{}", self.text)
    }
}

/// A subtitle entry that was dropped while parsing
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    /// 1-based position of the entry block in the input
    pub entry: usize,
    /// 1-based line number where the entry block starts
    pub line: usize,
    /// Why the entry was dropped
    pub error: SubtitleError,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "entry {} (line {}): {}", self.entry, self.line, self.error)
    }
}

/// Result of parsing SRT text: the surviving cues plus every dropped entry
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSubtitles {
    pub cues: CueList,
    pub warnings: Vec<ParseWarning>,
}

/// Parse SRT text into a cue list
///
/// Entries are separated by blank lines. Each entry needs an index line, a
/// `start --> end` line and at least one text line; text lines are joined with
/// a single space. Broken entries are skipped and reported in
/// [`ParsedSubtitles::warnings`]. Surviving cues are ordered by start time and
/// renumbered from 1. Overlapping cues are kept as they are and only logged;
/// the validation report flags them after re-splitting. Returns
/// [`ParseError::EmptyInput`] when nothing survives.
pub fn parse(content: &str) -> Result<ParsedSubtitles, ParseError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut cues = Vec::new();
    let mut warnings = Vec::new();
    let mut block: Vec<(usize, &str)> = Vec::new();
    let mut entry_count = 0;

    // A trailing empty line closes the last block
    for (line_idx, line) in content.lines().chain(std::iter::once("")).enumerate() {
        if !line.trim().is_empty() {
            block.push((line_idx + 1, line));
            continue;
        }
        if block.is_empty() {
            continue;
        }

        entry_count += 1;
        let first_line = block[0].0;
        match parse_entry(&block) {
            Ok(cue) => cues.push(cue),
            Err(error) => {
                warn!("Skipping subtitle entry {} at line {}: {}", entry_count, first_line, error);
                warnings.push(ParseWarning {
                    entry: entry_count,
                    line: first_line,
                    error,
                });
            }
        }
        block.clear();
    }

    if cues.is_empty() {
        warn!("No valid subtitle entries found in content");
        return Err(ParseError::EmptyInput);
    }

    // Stable sort keeps the file order for equal start times
    cues.sort_by_key(|cue| cue.start_ms);

    let overlap_count = cues
        .windows(2)
        .filter(|pair| pair[0].end_ms > pair[1].start_ms)
        .count();
    if overlap_count > 0 {
        warn!("Found {} overlapping subtitle entries", overlap_count);
    }

    renumber(&mut cues);

    debug!("Parsed {} cues, dropped {} entries", cues.len(), warnings.len());

    Ok(ParsedSubtitles { cues, warnings })
}

fn parse_entry(block: &[(usize, &str)]) -> Result<Cue, SubtitleError> {
    let index_line = block[0].1.trim();
    let index: u32 = index_line
        .parse()
        .map_err(|_| ParseError::Malformed(format!("invalid index line '{}'", index_line)))?;

    let range_line = block
        .get(1)
        .map(|(_, line)| line.trim())
        .ok_or_else(|| ParseError::Malformed(format!("entry {} has no time range", index)))?;

    let caps = TIME_RANGE_REGEX
        .captures(range_line)
        .ok_or_else(|| ParseError::Malformed(format!("time range '{}' has no '-->' separator", range_line)))?;

    let start_ms = timecode::decode(&caps[1])?;
    let end_ms = timecode::decode(&caps[2])?;

    let text = block[2..]
        .iter()
        .map(|(_, line)| line.trim())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        return Err(ParseError::Malformed(format!("entry {} has no text", index)).into());
    }

    Ok(Cue::new_validated(index, start_ms, end_ms, text)?)
}

/// Serialize cues to SRT text, entries separated by a blank line
pub fn serialize(cues: &[Cue]) -> String {
    if cues.is_empty() {
        return String::new();
    }

    let mut output = cues
        .iter()
        .map(|cue| cue.to_string())
        .collect::<Vec<_>>()
        .join("\n\n");
    output.push('\n');
    output
}

/// Reassign indices densely from 1 in list order
pub fn renumber(cues: &mut [Cue]) {
    for (i, cue) in cues.iter_mut().enumerate() {
        cue.index = (i + 1) as u32;
    }
}

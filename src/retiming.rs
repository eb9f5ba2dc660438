/*!
 * Cue re-timing.
 *
 * When one cue is split into several lines, its interval is divided into
 * equal, contiguous sub-intervals using integer division.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::subtitle_processor::{renumber, Cue, CueList};

/// What happens to the milliseconds lost to floor division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// The last sub-cue ends exactly at the original end
    #[default]
    ExtendLast,
    /// Every sub-cue is exactly one share long; up to N-1 ms are dropped
    Truncate,
}

/// Divide `[start_ms, end_ms)` into `parts` contiguous intervals
///
/// Returns no intervals for zero parts. When the interval is shorter than
/// `parts` milliseconds a single interval covering everything is returned.
pub fn subdivide(start_ms: u64, end_ms: u64, parts: usize, policy: BoundaryPolicy) -> Vec<(u64, u64)> {
    if parts == 0 || end_ms <= start_ms {
        return Vec::new();
    }

    let share = (end_ms - start_ms) / parts as u64;
    if share == 0 {
        return vec![(start_ms, end_ms)];
    }

    let mut intervals: Vec<(u64, u64)> = (0..parts as u64)
        .map(|i| (start_ms + i * share, start_ms + (i + 1) * share))
        .collect();

    if policy == BoundaryPolicy::ExtendLast {
        if let Some(last) = intervals.last_mut() {
            last.1 = end_ms;
        }
    }

    intervals
}

/// Turn one cue and its split lines into sub-cues
///
/// Indices of the returned cues are provisional; [`retime_all`] renumbers.
pub fn retime(cue: &Cue, lines: Vec<String>, policy: BoundaryPolicy) -> CueList {
    let intervals = subdivide(cue.start_ms, cue.end_ms, lines.len(), policy);

    if intervals.len() == lines.len() {
        return intervals
            .into_iter()
            .zip(lines)
            .map(|((start_ms, end_ms), text)| Cue::new(cue.index, start_ms, end_ms, text))
            .collect();
    }

    if intervals.is_empty() {
        return Vec::new();
    }

    // Too short to give every line a millisecond: keep one multi-line cue
    debug!(
        "Cue {} lasts {}ms, too short for {} lines; keeping them in one cue",
        cue.index,
        cue.duration_ms(),
        lines.len()
    );
    vec![Cue::new(cue.index, cue.start_ms, cue.end_ms, lines.join("\n"))]
}

/// Re-time every cue with its lines and renumber the result from 1
pub fn retime_all<I>(split: I, policy: BoundaryPolicy) -> CueList
where
    I: IntoIterator<Item = (Cue, Vec<String>)>,
{
    let mut cues: CueList = split
        .into_iter()
        .flat_map(|(cue, lines)| retime(&cue, lines, policy))
        .collect();

    renumber(&mut cues);
    cues
}

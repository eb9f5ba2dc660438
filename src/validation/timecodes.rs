/*!
 * Timing checks for re-split cue lists.
 *
 * Reports cues that:
 * - have an inverted or empty interval
 * - are shorter than the display floor or longer than the ceiling
 * - exceed a reading speed limit
 * - overlap or start before their predecessor
 */

use log::debug;

use crate::subtitle_processor::Cue;

/// Maximum characters per second for readable subtitles
pub const DEFAULT_MAX_CPS: f64 = 25.0;

/// Minimum display time for a cue in milliseconds
pub const MIN_CUE_DURATION_MS: u64 = 500;

/// Maximum display time for a single cue in milliseconds (30 seconds)
pub const MAX_CUE_DURATION_MS: u64 = 30_000;

/// Types of timing issues
#[derive(Debug, Clone, PartialEq)]
pub enum TimingIssue {
    /// End time is not after start time
    InvalidTimeRange { start_ms: u64, end_ms: u64 },
    /// Displayed for less than the floor
    DurationTooShort { duration_ms: u64, min_duration_ms: u64 },
    /// Displayed for longer than the ceiling
    DurationTooLong { duration_ms: u64, max_duration_ms: u64 },
    /// More characters per second than a viewer can read
    ReadingSpeedTooHigh { cps: f64, max_cps: f64 },
    /// Starts before the previous cue ends
    OverlapsPrevious { previous_index: u32, overlap_ms: u64 },
    /// Starts before the previous cue starts
    OutOfOrder { previous_index: u32 },
}

impl std::fmt::Display for TimingIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingIssue::InvalidTimeRange { start_ms, end_ms } => {
                write!(f, "Invalid time range: end {}ms <= start {}ms", end_ms, start_ms)
            }
            TimingIssue::DurationTooShort { duration_ms, min_duration_ms } => {
                write!(f, "Duration too short: {}ms (min: {}ms)", duration_ms, min_duration_ms)
            }
            TimingIssue::DurationTooLong { duration_ms, max_duration_ms } => {
                write!(f, "Duration too long: {}ms (max: {}ms)", duration_ms, max_duration_ms)
            }
            TimingIssue::ReadingSpeedTooHigh { cps, max_cps } => {
                write!(f, "Reading speed too high: {:.1} CPS (max: {:.1})", cps, max_cps)
            }
            TimingIssue::OverlapsPrevious { previous_index, overlap_ms } => {
                write!(f, "Overlaps cue {} by {}ms", previous_index, overlap_ms)
            }
            TimingIssue::OutOfOrder { previous_index } => {
                write!(f, "Starts before cue {}", previous_index)
            }
        }
    }
}

/// Issues found for one cue
#[derive(Debug, Clone, PartialEq)]
pub struct CueTimingReport {
    pub index: u32,
    pub issues: Vec<TimingIssue>,
}

/// Thresholds for timing checks
#[derive(Debug, Clone, PartialEq)]
pub struct TimingValidatorConfig {
    pub max_cps: f64,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
}

impl Default for TimingValidatorConfig {
    fn default() -> Self {
        Self {
            max_cps: DEFAULT_MAX_CPS,
            min_duration_ms: MIN_CUE_DURATION_MS,
            max_duration_ms: MAX_CUE_DURATION_MS,
        }
    }
}

/// Timing validator for cue lists
#[derive(Debug, Clone, Default)]
pub struct TimingValidator {
    config: TimingValidatorConfig,
}

impl TimingValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TimingValidatorConfig) -> Self {
        Self { config }
    }

    /// Check one cue on its own
    pub fn check_cue(&self, cue: &Cue) -> Vec<TimingIssue> {
        if cue.end_ms <= cue.start_ms {
            return vec![TimingIssue::InvalidTimeRange {
                start_ms: cue.start_ms,
                end_ms: cue.end_ms,
            }];
        }

        let mut issues = Vec::new();
        let duration_ms = cue.duration_ms();

        if duration_ms < self.config.min_duration_ms {
            issues.push(TimingIssue::DurationTooShort {
                duration_ms,
                min_duration_ms: self.config.min_duration_ms,
            });
        }

        if duration_ms > self.config.max_duration_ms {
            issues.push(TimingIssue::DurationTooLong {
                duration_ms,
                max_duration_ms: self.config.max_duration_ms,
            });
        }

        let cps = Self::calculate_cps(cue);
        if cps > self.config.max_cps {
            issues.push(TimingIssue::ReadingSpeedTooHigh {
                cps,
                max_cps: self.config.max_cps,
            });
        }

        issues
    }

    /// Check every cue and the ordering between neighbours
    ///
    /// Only cues with at least one issue are reported.
    pub fn validate(&self, cues: &[Cue]) -> Vec<CueTimingReport> {
        let mut reports = Vec::new();

        for (i, cue) in cues.iter().enumerate() {
            let mut issues = self.check_cue(cue);

            if let Some(previous) = i.checked_sub(1).map(|p| &cues[p]) {
                if cue.start_ms < previous.start_ms {
                    issues.push(TimingIssue::OutOfOrder { previous_index: previous.index });
                } else if cue.start_ms < previous.end_ms {
                    issues.push(TimingIssue::OverlapsPrevious {
                        previous_index: previous.index,
                        overlap_ms: previous.end_ms - cue.start_ms,
                    });
                }
            }

            if !issues.is_empty() {
                reports.push(CueTimingReport { index: cue.index, issues });
            }
        }

        debug!("Timing validation: {} cues, {} with issues", cues.len(), reports.len());

        reports
    }

    /// Reading speed in characters per second
    pub fn calculate_cps(cue: &Cue) -> f64 {
        if cue.end_ms <= cue.start_ms {
            return f64::INFINITY;
        }

        let char_count = cue.text.chars().filter(|c| *c != '\n').count() as f64;
        char_count / (cue.duration_ms() as f64 / 1000.0)
    }
}

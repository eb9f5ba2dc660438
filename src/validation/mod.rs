/*!
 * Validation of re-split cue lists.
 *
 * Reports problems without changing the cues:
 * - `timecodes`: duration floor/ceiling, reading speed, ordering
 * - `length`: lines over the language budget
 */

pub mod length;
pub mod timecodes;

pub use length::{LineLengthIssue, LineLengthValidator};
pub use timecodes::{CueTimingReport, TimingIssue, TimingValidator, TimingValidatorConfig};

use log::{debug, warn};

use crate::language_utils::LanguageProfile;
use crate::line_split::ProtectedTerms;
use crate::subtitle_processor::Cue;

/// Combined result of all checks for one cue list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub timing: Vec<CueTimingReport>,
    pub line_length: Vec<LineLengthIssue>,
}

impl ValidationReport {
    /// Run every check over a cue list
    pub fn build(
        cues: &[Cue],
        profile: &LanguageProfile,
        terms: &ProtectedTerms,
        timing_config: TimingValidatorConfig,
    ) -> Self {
        Self {
            timing: TimingValidator::with_config(timing_config).validate(cues),
            line_length: LineLengthValidator::new(profile, terms).validate(cues),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.timing.is_empty() && self.line_length.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.timing.iter().map(|r| r.issues.len()).sum::<usize>() + self.line_length.len()
    }

    /// Log a one-line summary and, at debug level, every issue
    pub fn log_summary(&self, label: &str) {
        if self.is_clean() {
            debug!("{}: no timing or length issues", label);
            return;
        }

        warn!(
            "{}: {} timing issue(s) in {} cue(s), {} over-long line(s)",
            label,
            self.timing.iter().map(|r| r.issues.len()).sum::<usize>(),
            self.timing.len(),
            self.line_length.len()
        );

        for report in &self.timing {
            for issue in &report.issues {
                debug!("Cue {}: {}", report.index, issue);
            }
        }
        for issue in &self.line_length {
            debug!("{}", issue);
        }
    }
}

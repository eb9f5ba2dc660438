/*!
 * Line length checks for re-split cues.
 *
 * A cue line may only exceed the language budget when it is a single
 * unsplittable unit (one long word or protected term).
 */

use log::debug;

use crate::language_utils::LanguageProfile;
use crate::line_split::{strategy_for, ProtectedTerms};
use crate::subtitle_processor::Cue;

/// A line that is longer than its budget and could have been split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLengthIssue {
    /// Index of the cue holding the line
    pub index: u32,
    /// Offending line
    pub line: String,
    /// Rendered length of the line
    pub length: usize,
    /// Budget for the language
    pub max_length: usize,
}

impl std::fmt::Display for LineLengthIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cue {}: line of {} chars exceeds {} ('{}')",
            self.index, self.length, self.max_length, self.line
        )
    }
}

/// Checks cue lines against a language profile
#[derive(Debug, Clone)]
pub struct LineLengthValidator<'a> {
    profile: &'a LanguageProfile,
    terms: &'a ProtectedTerms,
}

impl<'a> LineLengthValidator<'a> {
    pub fn new(profile: &'a LanguageProfile, terms: &'a ProtectedTerms) -> Self {
        Self { profile, terms }
    }

    /// Report every over-budget line that holds more than one unit
    pub fn validate(&self, cues: &[Cue]) -> Vec<LineLengthIssue> {
        let strategy = strategy_for(self.profile);
        let max_length = self.profile.max_line_length as usize;

        let issues: Vec<LineLengthIssue> = cues
            .iter()
            .flat_map(|cue| cue.text.lines().map(move |line| (cue.index, line)))
            .filter_map(|(index, line)| {
                let length = strategy.measure(line);
                let unsplittable = strategy.units(line, self.terms).len() <= 1;
                (length > max_length && !unsplittable).then(|| LineLengthIssue {
                    index,
                    line: line.to_string(),
                    length,
                    max_length,
                })
            })
            .collect();

        debug!(
            "Line length validation ({}, max {}): {} issues",
            self.profile.code,
            max_length,
            issues.len()
        );

        issues
    }
}

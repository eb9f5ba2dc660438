/*!
 * Segmentation and re-splitting pipeline.
 *
 * Composes the stages: transcript -> sentence cues, and SRT -> parsed cues
 * -> split lines -> re-timed cues -> SRT. Every stage consumes its input list
 * and returns a new one; nothing is shared between runs, so one
 * `Resegmenter` can serve many files on many threads.
 */

use log::{debug, info};

use crate::app_config::Config;
use crate::errors::{SubtitleError, ValidationError};
use crate::language_utils::{LanguageProfile, ProfileTable};
use crate::line_split::{split_lines, ProtectedTerms};
use crate::retiming::{retime_all, BoundaryPolicy};
use crate::segmentation::{segment_transcript, Transcript};
use crate::subtitle_processor::{self, CueList, ParseWarning};
use crate::validation::{TimingValidatorConfig, ValidationReport};

/// Output of re-splitting one subtitle document
#[derive(Debug, Clone)]
pub struct ResplitOutput {
    /// Cues recovered from the input
    pub input_cues: usize,
    /// Re-split cues, numbered from 1
    pub cues: CueList,
    /// Serialized SRT text of `cues`
    pub srt: String,
    /// Entries dropped while parsing the input
    pub warnings: Vec<ParseWarning>,
    /// Timing and line length findings for `cues`
    pub report: ValidationReport,
}

/// Stateless engine configured with profiles, protected terms and timing policy
#[derive(Debug, Clone)]
pub struct Resegmenter {
    profiles: ProfileTable,
    terms: ProtectedTerms,
    policy: BoundaryPolicy,
    timing: TimingValidatorConfig,
}

impl Default for Resegmenter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Resegmenter {
    pub fn new(profiles: ProfileTable, terms: ProtectedTerms, policy: BoundaryPolicy) -> Self {
        Self {
            profiles,
            terms,
            policy,
            timing: TimingValidatorConfig::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            profiles: config.profile_table(),
            terms: config.protected_terms(),
            policy: config.boundary_policy,
            timing: TimingValidatorConfig::from(&config.validation),
        }
    }

    pub fn profile_for(&self, language: &str) -> LanguageProfile {
        self.profiles.profile_for(language)
    }

    pub fn protected_terms(&self) -> &ProtectedTerms {
        &self.terms
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Turn a transcript into provisional, sentence-sized cues
    pub fn segment_transcript(&self, transcript: &Transcript) -> CueList {
        segment_transcript(transcript)
    }

    /// Turn a transcript straight into SRT text
    pub fn transcript_to_srt(&self, transcript: &Transcript) -> String {
        subtitle_processor::serialize(&self.segment_transcript(transcript))
    }

    /// Split every cue to the language's line budget and re-time the pieces
    ///
    /// Fails without producing output if any cue has `end_ms <= start_ms`.
    pub fn resplit(&self, cues: CueList, language: &str) -> Result<CueList, ValidationError> {
        let profile = self.profile_for(language);
        self.resplit_with_profile(cues, &profile)
    }

    /// Same as [`Resegmenter::resplit`] with an explicit profile
    pub fn resplit_with_profile(&self, cues: CueList, profile: &LanguageProfile) -> Result<CueList, ValidationError> {
        if let Some(bad) = cues.iter().find(|cue| cue.end_ms <= cue.start_ms) {
            return Err(ValidationError::NonMonotonicInterval {
                index: bad.index,
                start_ms: bad.start_ms,
                end_ms: bad.end_ms,
            });
        }

        let input_count = cues.len();
        let split = cues.into_iter().map(|cue| {
            let lines = split_lines(&cue.text, profile, &self.terms);
            debug!("Cue {} -> {} line(s)", cue.index, lines.len());
            (cue, lines)
        });
        let output = retime_all(split, self.policy);

        debug!(
            "Re-split {} cues into {} for {} (max {}, logographic: {})",
            input_count,
            output.len(),
            profile.code,
            profile.max_line_length,
            profile.is_logographic
        );

        Ok(output)
    }

    /// Parse SRT text, re-split it and serialize the result
    pub fn resplit_srt(&self, content: &str, language: &str) -> Result<ResplitOutput, SubtitleError> {
        let profile = self.profile_for(language);
        let parsed = subtitle_processor::parse(content)?;
        let input_cues = parsed.cues.len();
        let cues = self.resplit_with_profile(parsed.cues, &profile)?;
        let report = ValidationReport::build(&cues, &profile, &self.terms, self.timing.clone());

        if !parsed.warnings.is_empty() {
            info!("Dropped {} malformed subtitle entries", parsed.warnings.len());
        }

        Ok(ResplitOutput {
            input_cues,
            srt: subtitle_processor::serialize(&cues),
            cues,
            warnings: parsed.warnings,
            report,
        })
    }
}

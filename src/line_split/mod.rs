/*!
 * Line splitting for subtitle cues.
 *
 * Breaks one cue's text into display lines that fit the language's line
 * budget without breaking words or protected terms.
 *
 * - `strategy`: word-wrapped vs. logographic atomic units
 * - `accumulator`: the fit-or-flush line builder
 * - `protected`: ordered protected-term list
 */

pub mod accumulator;
pub mod protected;
pub mod strategy;

pub use accumulator::{LineAccumulator, Placement};
pub use protected::ProtectedTerms;
pub use strategy::{strategy_for, AtomicUnit, CharacterWrap, UnitKind, WordWrap, WrapStrategy};

use log::trace;

use crate::language_utils::LanguageProfile;
use crate::punctuation::strip_trailing_punctuation;

/// Split text into display lines for the given language
///
/// Trailing sentence punctuation is removed from the last line only. Lines
/// exceed `max_line_length` only when a single word or term is longer than
/// the budget. Blank text yields no lines.
pub fn split_lines(text: &str, profile: &LanguageProfile, terms: &ProtectedTerms) -> Vec<String> {
    let strategy = strategy_for(profile);
    let mut accumulator = LineAccumulator::new(profile.max_line_length as usize, strategy.separator());

    for unit in strategy.units(text.trim(), terms) {
        let placement = accumulator.push(unit.text, strategy.measure(unit.text));
        trace!("{:?} '{}' -> {:?}", unit.kind, unit.text, placement);
    }

    let mut lines = accumulator.finish();

    if let Some(last) = lines.pop() {
        let stripped = strip_trailing_punctuation(&last);
        if !stripped.is_empty() {
            lines.push(stripped.to_string());
        }
    }

    lines
}

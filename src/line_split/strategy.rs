/*!
 * Line-wrap strategies.
 *
 * A strategy decides which pieces of text are atomic (never broken across
 * lines), how long a piece renders, and what goes between two pieces on the
 * same line. Word-wrapped scripts break on whitespace; logographic scripts
 * break between characters while keeping protected terms and ASCII words whole.
 */

use crate::language_utils::LanguageProfile;
use super::protected::ProtectedTerms;

/// Kind of atomic unit produced by a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Whitespace-delimited word
    Word,
    /// Configured protected term
    ProtectedTerm,
    /// Run of ASCII letters and digits inside logographic text
    AsciiRun,
    /// Single character of logographic text
    Character,
}

/// Smallest piece of text the accumulator places as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomicUnit<'a> {
    pub text: &'a str,
    pub kind: UnitKind,
}

impl<'a> AtomicUnit<'a> {
    fn new(text: &'a str, kind: UnitKind) -> Self {
        Self { text, kind }
    }
}

/// How one family of scripts is wrapped into lines
pub trait WrapStrategy: Sync {
    /// Split text into the units that may not be broken
    fn units<'a>(&self, text: &'a str, terms: &ProtectedTerms) -> Vec<AtomicUnit<'a>>;

    /// Rendered length of a piece of text
    fn measure(&self, text: &str) -> usize {
        text.chars().count()
    }

    /// Inserted between two units on the same line
    fn separator(&self) -> &'static str;
}

/// Greedy wrap on whitespace for alphabetic scripts
#[derive(Debug, Clone, Copy, Default)]
pub struct WordWrap;

/// Per-character wrap for CJK-family scripts
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterWrap;

static WORD_WRAP: WordWrap = WordWrap;
static CHARACTER_WRAP: CharacterWrap = CharacterWrap;

/// Pick the strategy for a language profile
pub fn strategy_for(profile: &LanguageProfile) -> &'static dyn WrapStrategy {
    if profile.is_logographic {
        &CHARACTER_WRAP
    } else {
        &WORD_WRAP
    }
}

impl WrapStrategy for WordWrap {
    fn units<'a>(&self, text: &'a str, terms: &ProtectedTerms) -> Vec<AtomicUnit<'a>> {
        let mut units = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            let word_start = rest.len() - rest.trim_start().len();
            if word_start == rest.len() {
                break;
            }
            pos += word_start;
            let rest = &text[pos..];

            // A protected term only counts when no letter or digit follows it
            let term = terms.match_at(rest).filter(|term| {
                rest[term.len()..]
                    .chars()
                    .next()
                    .is_none_or(|c| !c.is_alphanumeric())
            });

            let unit = match term {
                Some(term) => {
                    // Punctuation glued to the term travels with it
                    let tail = &rest[term.len()..];
                    let tail_len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                    AtomicUnit::new(&rest[..term.len() + tail_len], UnitKind::ProtectedTerm)
                }
                None => {
                    let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    AtomicUnit::new(&rest[..word_len], UnitKind::Word)
                }
            };

            pos += unit.text.len();
            units.push(unit);
        }

        units
    }

    fn separator(&self) -> &'static str {
        " "
    }
}

impl WrapStrategy for CharacterWrap {
    fn units<'a>(&self, text: &'a str, terms: &ProtectedTerms) -> Vec<AtomicUnit<'a>> {
        let mut units = Vec::new();
        let mut pos = 0;

        while let Some(first) = text[pos..].chars().next() {
            let rest = &text[pos..];

            let unit = if let Some(term) = terms.match_at(rest) {
                AtomicUnit::new(&rest[..term.len()], UnitKind::ProtectedTerm)
            } else if first.is_ascii_alphanumeric() {
                let run_len = rest
                    .find(|c: char| !c.is_ascii_alphanumeric())
                    .unwrap_or(rest.len());
                AtomicUnit::new(&rest[..run_len], UnitKind::AsciiRun)
            } else {
                AtomicUnit::new(&rest[..first.len_utf8()], UnitKind::Character)
            };

            pos += unit.text.len();
            units.push(unit);

            // One whitespace character right after a unit is dropped
            if let Some(next) = text[pos..].chars().next() {
                if next.is_whitespace() {
                    pos += next.len_utf8();
                }
            }
        }

        units
    }

    fn separator(&self) -> &'static str {
        ""
    }
}

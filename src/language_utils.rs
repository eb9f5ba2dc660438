use anyhow::{Result, anyhow};
use isolang::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Language utilities for line-splitting profiles
///
/// This module resolves language tags (ISO 639-1, ISO 639-2 and the short
/// region-style tags used in pipeline file names such as `JP` or `HK`) to the
/// profile that drives line splitting.
/// Line budget for scripts wrapped on word boundaries
pub const DEFAULT_MAX_LINE_LENGTH: u32 = 24;

/// Line budget for CJK-family scripts
pub const LOGOGRAPHIC_MAX_LINE_LENGTH: u32 = 16;

// Pipeline file-name tags; these are region codes, not ISO language codes
const LEGACY_LOGOGRAPHIC_TAGS: [&str; 5] = ["CN", "JP", "KR", "HK", "TW"];

// ISO 639-3 codes of languages segmented per character
const LOGOGRAPHIC_LANGUAGES: [&str; 4] = ["zho", "jpn", "kor", "yue"];

/// How text in one language is wrapped into display lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Language tag as supplied by the caller
    pub code: String,
    /// Wrap per character instead of per word
    pub is_logographic: bool,
    /// Maximum rendered characters per line
    pub max_line_length: u32,
}

impl LanguageProfile {
    /// Profile for a language wrapped on whitespace
    pub fn word_wrapped(code: &str, max_line_length: u32) -> Self {
        Self {
            code: code.to_string(),
            is_logographic: false,
            max_line_length,
        }
    }

    /// Profile for a CJK-family language
    pub fn logographic(code: &str, max_line_length: u32) -> Self {
        Self {
            code: code.to_string(),
            is_logographic: true,
            max_line_length,
        }
    }
}

/// Per-language override loaded from configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageOverride {
    /// Tag the override applies to (matched case-insensitively)
    pub code: String,
    /// Force the wrapping regime; keeps the built-in classification when absent
    #[serde(default)]
    pub is_logographic: Option<bool>,
    /// Line budget for this language
    pub max_line_length: u32,
}

/// Static language profile table with optional overrides
#[derive(Debug, Clone)]
pub struct ProfileTable {
    default_max_line_length: u32,
    logographic_max_line_length: u32,
    overrides: Vec<LanguageOverride>,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            default_max_line_length: DEFAULT_MAX_LINE_LENGTH,
            logographic_max_line_length: LOGOGRAPHIC_MAX_LINE_LENGTH,
            overrides: Vec::new(),
        }
    }
}

impl ProfileTable {
    /// Create a table with custom budgets and overrides
    pub fn new(default_max_line_length: u32, logographic_max_line_length: u32, overrides: Vec<LanguageOverride>) -> Self {
        Self {
            default_max_line_length,
            logographic_max_line_length,
            overrides,
        }
    }

    /// Resolve the profile for a language tag
    ///
    /// Unrecognized tags fall back to a word-wrapped profile with the default budget.
    pub fn profile_for(&self, code: &str) -> LanguageProfile {
        let trimmed = code.trim();
        let is_logographic = is_logographic_code(trimmed);

        if let Some(over) = self.overrides.iter().find(|o| o.code.eq_ignore_ascii_case(trimmed)) {
            return LanguageProfile {
                code: trimmed.to_string(),
                is_logographic: over.is_logographic.unwrap_or(is_logographic),
                max_line_length: over.max_line_length,
            };
        }

        if is_logographic {
            LanguageProfile::logographic(trimmed, self.logographic_max_line_length)
        } else {
            LanguageProfile::word_wrapped(trimmed, self.default_max_line_length)
        }
    }
}

/// Check whether a tag names a language wrapped per character
pub fn is_logographic_code(code: &str) -> bool {
    let trimmed = code.trim();

    if LEGACY_LOGOGRAPHIC_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(trimmed)) {
        return true;
    }

    match normalize_to_part2t(trimmed) {
        Ok(part2t) => LOGOGRAPHIC_LANGUAGES.contains(&part2t.as_str()),
        Err(_) => false,
    }
}

/// Check whether a tag is known to the profile table
pub fn is_known_tag(code: &str) -> bool {
    LEGACY_LOGOGRAPHIC_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(code))
        || normalize_to_part2t(code).is_ok()
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    // If it's a 2-letter code, convert to 3-letter
    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    }
    // If it's already a 3-letter code, ensure it's ISO 639-2/T
    else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }

        // ISO 639-2/B codes that differ from ISO 639-2/T
        let part2t = match normalized_code.as_str() {
            "chi" => Some("zho"),
            "fre" => Some("fra"),
            "ger" => Some("deu"),
            "dut" => Some("nld"),
            "gre" => Some("ell"),
            "cze" => Some("ces"),
            "per" => Some("fas"),
            "may" => Some("msa"),
            "rum" => Some("ron"),
            "slo" => Some("slk"),
            _ => None,
        };
        if let Some(part2t) = part2t {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    if let Some(tag) = LEGACY_LOGOGRAPHIC_TAGS.iter().find(|tag| tag.eq_ignore_ascii_case(code.trim())) {
        let name = match *tag {
            "CN" => "Chinese (Simplified)",
            "JP" => "Japanese",
            "KR" => "Korean",
            "HK" => "Chinese (Hong Kong)",
            _ => "Chinese (Traditional)",
        };
        return Ok(name.to_string());
    }

    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

/// Detect the language tag embedded in a subtitle file name
///
/// Pipeline outputs are named like `promo_v2_JP.srt`; the last upper-case
/// `_`-separated segment that names a known language wins.
pub fn detect_language_tag<P: AsRef<Path>>(path: P) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_string_lossy().to_string();

    stem.split(['_', '.', '-'])
        .skip(1)
        .filter(|segment| {
            (2..=3).contains(&segment.len()) && segment.chars().all(|c| c.is_ascii_uppercase())
        })
        .filter(|segment| is_known_tag(segment))
        .last()
        .map(|segment| segment.to_string())
}

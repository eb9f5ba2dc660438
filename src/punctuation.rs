// @module: Sentence punctuation rules shared by segmentation and line splitting

/// Characters that end a sentence, half- and full-width
pub const SENTENCE_TERMINALS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

// Trailing characters dropped from emitted text; commas are included
const STRIPPABLE_TRAILING: [char; 8] = ['.', ',', '。', '!', '?', '！', '？', '，'];

/// Check whether a character ends a sentence
pub fn is_sentence_terminal(c: char) -> bool {
    SENTENCE_TERMINALS.contains(&c)
}

/// Check whether a character is punctuation that may be stripped from emitted text
pub fn is_strippable(c: char) -> bool {
    STRIPPABLE_TRAILING.contains(&c)
}

/// Remove exactly one trailing punctuation character, if present
///
/// Surrounding whitespace is trimmed first. Only a single character is
/// removed, so `"Really?!"` becomes `"Really?"`.
pub fn strip_trailing_punctuation(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.chars().last() {
        Some(last) if STRIPPABLE_TRAILING.contains(&last) => {
            trimmed[..trimmed.len() - last.len_utf8()].trim_end()
        }
        _ => trimmed,
    }
}

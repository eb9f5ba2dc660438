use serde::{Deserialize, Serialize};

// @module: Literal terms that must never be broken across lines

/// Ordered list of protected terms, first configured match wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtectedTerms {
    terms: Vec<String>,
}

impl ProtectedTerms {
    /// Build the list, dropping empty terms and keeping the given order
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(Into::into)
                .filter(|term: &String| !term.is_empty())
                .collect(),
        }
    }

    /// Find the first term that `text` starts with
    ///
    /// This is a linear scan in configured order, not a longest match: with
    /// `["AI", "AI Backgrounds"]` the text `"AI Backgrounds"` matches `"AI"`.
    pub fn match_at<'t>(&'t self, text: &str) -> Option<&'t str> {
        self.terms
            .iter()
            .find(|term| text.starts_with(term.as_str()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

//! Stopword filtering and word tokenization for sentence scoring.

use std::collections::HashSet;
use stop_words::{LANGUAGE, get};

/// A case-insensitive stopword filter.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("es")
    }
}

impl StopwordFilter {
    /// Create a filter for the given language code or name.
    ///
    /// Supported languages: es, en, pt, fr, it, de. Unknown languages fall
    /// back to Spanish.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "fr" | "french" => LANGUAGE::French,
            "it" | "italian" => LANGUAGE::Italian,
            "de" | "german" => LANGUAGE::German,
            _ => LANGUAGE::Spanish,
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Create a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Lowercased alphanumeric words of `sentence` that are not stopwords.
    pub fn content_words(&self, sentence: &str) -> Vec<String> {
        tokenize(sentence)
            .into_iter()
            .filter(|w| !self.stopwords.contains(w))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Splits on anything that is not a letter or digit and lowercases the words.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

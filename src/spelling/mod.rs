pub mod dictionary;

#[cfg(test)]
mod tests;

pub use dictionary::{Dictionary, HunspellDictionary, WordList};

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens must be longer than this many characters to be checked
pub const MIN_TOKEN_CHARS: usize = 4;

// Word characters are letters, digits and underscore; combining marks are
// punctuation here, so stress marks vanish instead of splitting words
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("punctuation pattern is valid"));

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));

/// Splits text into lowercase word tokens eligible for checking.
///
/// Punctuation is deleted rather than treated as a separator, so
/// `"don't"` becomes `"dont"`. Only tokens of at least
/// [`MIN_TOKEN_CHARS`] characters are returned, in order, with duplicates.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&lowered, "");

    WORD.find_iter(&cleaned)
        .map(|m| m.as_str())
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Returns the tokens of `text` that `dictionary` does not know
pub fn check_spelling(text: &str, dictionary: &dyn Dictionary) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|word| !dictionary.contains(word))
        .collect()
}

/// A dictionary together with the words that should never be reported
pub struct SpellChecker {
    dictionary: Box<dyn Dictionary>,
    ignored: HashSet<String>,
}

impl SpellChecker {
    pub fn new(dictionary: Box<dyn Dictionary>) -> Self {
        Self {
            dictionary,
            ignored: HashSet::new(),
        }
    }

    /// Adds words that are accepted regardless of the dictionary
    pub fn with_ignore_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Returns the misspelled tokens of `text` in order of appearance
    pub fn check(&self, text: &str) -> Vec<String> {
        check_spelling(text, self.dictionary.as_ref())
            .into_iter()
            .filter(|word| !self.ignored.contains(word))
            .collect()
    }
}

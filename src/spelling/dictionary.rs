use crate::config::DictionarySource;
use crate::error::DictionaryError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A read-only lookup of known words for one language
pub trait Dictionary {
    /// Returns true if the (lowercase) word is spelled correctly
    fn contains(&self, word: &str) -> bool;
}

/// Loads the dictionary described by the configuration
pub fn load(source: &DictionarySource) -> Result<Box<dyn Dictionary>, DictionaryError> {
    match source {
        DictionarySource::Hunspell { aff, dic } => {
            let dictionary = HunspellDictionary::from_files(aff, dic)?;
            Ok(Box::new(dictionary))
        }
        DictionarySource::WordList { path } => {
            let dictionary = WordList::from_file(path)?;
            ::log::info!("Loaded {} words from {}", dictionary.len(), path.display());
            Ok(Box::new(dictionary))
        }
    }
}

fn read(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Hunspell dictionary, which understands affixes and inflected forms
pub struct HunspellDictionary {
    inner: spellbook::Dictionary,
}

impl HunspellDictionary {
    pub fn new(aff: &str, dic: &str) -> Result<Self, DictionaryError> {
        let inner = spellbook::Dictionary::new(aff, dic)
            .map_err(|e| DictionaryError::Hunspell(e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn from_files(aff: &Path, dic: &Path) -> Result<Self, DictionaryError> {
        let start = std::time::Instant::now();
        let dictionary = Self::new(&read(aff)?, &read(dic)?)?;
        ::log::info!(
            "Loaded hunspell dictionary {} in {:.2} seconds",
            dic.display(),
            start.elapsed().as_secs_f64()
        );
        Ok(dictionary)
    }
}

impl Dictionary for HunspellDictionary {
    fn contains(&self, word: &str) -> bool {
        self.inner.check(word)
    }
}

/// Flat set of known words
///
/// Files hold one word per line. Anything after the first whitespace or `/`
/// is ignored, so frequency lists and bare `.dic` files both load.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        Ok(Self::parse(&read(path)?))
    }

    pub fn parse(contents: &str) -> Self {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_whitespace().next())
            .filter_map(|entry| entry.split('/').next())
            // A leading entry count in .dic files is not a word
            .filter(|word| !word.chars().all(|c| c.is_ascii_digit()));

        Self::from_words(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

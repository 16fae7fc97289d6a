use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::error::CoreError;

/// Characters removed from submitted text before tokenizing.
const STRIPPED: &[char] = &[
    ',', '.', '?', '!', '/', '\'', '"', ';', ':', '-', '<', '>', '(', ')', '{', '}', '[', ']',
    '|', '\\', '_', '@', '#', '$', '%', '^', '&', '*', '+', '=',
];

/// Immutable set of lowercase forbidden words.
#[derive(Debug, Clone, Default)]
pub struct ForbiddenWords {
    words: HashSet<String>,
}

impl ForbiddenWords {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read a newline-separated word list. Blank lines are ignored.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, CoreError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_words(lines))
    }

    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let file = std::fs::File::open(path).map_err(|source| CoreError::WordList {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True if any space-separated token of `text`, with punctuation removed,
    /// matches a forbidden word exactly (case-insensitive).
    pub fn contains_profanity(&self, text: &str) -> bool {
        let stripped: String = text.chars().filter(|c| !STRIPPED.contains(c)).collect();
        stripped
            .split(' ')
            .any(|token| self.words.contains(&token.to_lowercase()))
    }
}

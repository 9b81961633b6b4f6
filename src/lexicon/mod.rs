//! Sentiment lexicon: word -> mean intensity.
//!
//! The lexicon maps lowercase tokens to a mean sentiment rating,
//! empirically in [-4, +4]. It is built once at startup and never
//! mutated afterwards, so concurrent request handlers can share it
//! without synchronization.
//!
//! The default lexicon ships embedded in the binary. A custom lexicon
//! can be loaded from a file with the same `word<TAB>score` format;
//! blank lines and `#` comments are skipped.

pub mod modifiers;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::LexiconError;

/// Default lexicon shipped with the crate.
const EMBEDDED_LEXICON: &str = include_str!("vader_lexicon.txt");

/// Immutable mapping from normalized word to mean sentiment intensity.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse the lexicon that ships embedded in the binary.
    ///
    /// Failure here means the shipped resource is corrupt, which the
    /// caller should treat as fatal.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::parse(EMBEDDED_LEXICON)
    }

    /// Load a lexicon from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let data = fs::read_to_string(path.as_ref()).map_err(|source| LexiconError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::parse(&data)
    }

    /// Parse `word<TAB>score` lines into a lexicon.
    pub fn parse(data: &str) -> Result<Self, LexiconError> {
        let mut entries = HashMap::new();

        for (idx, raw) in data.lines().enumerate() {
            let line_num = idx + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, score) = line
                .split_once('\t')
                .ok_or_else(|| LexiconError::parse(line_num, "missing tab separator"))?;

            let word = word.trim();
            if word.is_empty() {
                return Err(LexiconError::parse(line_num, "empty word"));
            }

            let score: f64 = score.trim().parse().map_err(|_| {
                LexiconError::parse(line_num, format!("invalid score {:?}", score.trim()))
            })?;

            entries.insert(word.to_lowercase(), score);
        }

        Ok(Self { entries })
    }

    /// Mean sentiment intensity for a word. Entries are keyed by
    /// lowercase form; callers normalize case before lookup.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lexicon_parses() {
        let lexicon = Lexicon::embedded().unwrap();
        assert!(lexicon.len() > 500);
    }

    #[test]
    fn lookup_is_lowercase_keyed() {
        let lexicon = Lexicon::embedded().unwrap();
        assert!(lexicon.get("good").is_some());
        // Callers normalize case before lookup.
        assert!(lexicon.get("GOOD").is_none());
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let lexicon = Lexicon::parse("# header\n\ngood\t1.9\n").unwrap();
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.get("good"), Some(1.9));
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let err = Lexicon::parse("good 1.9\n").unwrap_err();
        assert!(matches!(err, LexiconError::Parse { line: 1, .. }));
    }

    #[test]
    fn parse_rejects_bad_score() {
        let err = Lexicon::parse("good\tnope\n").unwrap_err();
        assert!(matches!(err, LexiconError::Parse { line: 1, .. }));
    }

    #[test]
    fn booster_words_are_not_lexicon_entries() {
        // Boosters modify neighbors instead of carrying sentiment of
        // their own; a lexicon entry would shadow the modifier path.
        let lexicon = Lexicon::embedded().unwrap();
        for word in ["very", "really", "extremely", "barely", "hardly"] {
            assert!(!lexicon.contains(word), "{word} must stay out of the lexicon");
        }
    }
}

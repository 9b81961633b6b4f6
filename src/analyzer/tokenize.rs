//! Whitespace tokenization that keeps emphasis cues.
//!
//! Tokens are split on whitespace and stripped of surrounding
//! punctuation, but original case is retained so the scorer can detect
//! ALL-CAPS emphasis. Tokens that would shrink to two characters or
//! fewer keep their punctuation, which preserves emoticons like ":)".

/// Input text broken into scorable tokens.
#[derive(Debug, Clone)]
pub struct TokenizedText {
    /// Tokens with original case, surrounding punctuation stripped.
    pub words: Vec<String>,
    /// Lowercase mirror of `words`, used for lexicon and modifier lookup.
    pub words_lower: Vec<String>,
    /// True when the text mixes ALL-CAPS words with other words.
    /// Capitalization emphasis only applies to mixed-case texts; a
    /// fully shouted text carries no differential signal.
    pub mixed_caps: bool,
}

impl TokenizedText {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Tokenize input text for scoring.
pub fn tokenize(text: &str) -> TokenizedText {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|token| strip_punctuation(token).to_string())
        .collect();

    let words_lower = words.iter().map(|w| w.to_lowercase()).collect();

    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    let mixed_caps = caps > 0 && caps < words.len();

    TokenizedText {
        words,
        words_lower,
        mixed_caps,
    }
}

/// Strip surrounding punctuation unless doing so would reduce the token
/// to two characters or fewer.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// True when every alphabetic character in the word is uppercase and at
/// least one alphabetic character exists.
pub fn is_all_caps(word: &str) -> bool {
    let mut has_alpha = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_surrounding_punctuation() {
        let t = tokenize("amazing!!! (truly)");
        assert_eq!(t.words, vec!["amazing", "truly"]);
    }

    #[test]
    fn keeps_embedded_punctuation() {
        let t = tokenize("don't stop");
        assert_eq!(t.words, vec!["don't", "stop"]);
    }

    #[test]
    fn short_tokens_keep_punctuation() {
        // ":)" would strip to nothing; the emoticon must survive.
        let t = tokenize("great :)");
        assert_eq!(t.words, vec!["great", ":)"]);
    }

    #[test]
    fn detects_mixed_caps() {
        assert!(tokenize("this is GREAT news").mixed_caps);
        assert!(!tokenize("THIS IS GREAT NEWS").mixed_caps);
        assert!(!tokenize("this is great news").mixed_caps);
    }

    #[test]
    fn all_caps_requires_letters() {
        assert!(is_all_caps("GREAT"));
        assert!(is_all_caps("I"));
        assert!(!is_all_caps("Great"));
        assert!(!is_all_caps("123"));
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }
}

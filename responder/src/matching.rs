//! Text matching over normalized (lowercased, trimmed) utterances.
//!
//! Phrases match as substrings. Short words match only as whole words, so "bem" does not fire on
//! "também" and "cara" does not fire on "máscara".

/// Splits on anything that is not a letter or digit (accented letters count as letters).
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

pub fn contains_word(text: &str, word: &str) -> bool {
    words(text).any(|w| w == word)
}

pub fn contains_any_word(text: &str, vocabulary: &[&str]) -> bool {
    words(text).any(|w| vocabulary.contains(&w))
}

pub fn equals_any(text: &str, vocabulary: &[&str]) -> bool {
    vocabulary.contains(&text)
}

/// How a keyword-table pattern is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Substring anywhere in the utterance.
    Contains(&'static str),
    /// Whole word only.
    Word(&'static str),
}

impl Pattern {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Contains(p) => text.contains(p),
            Pattern::Word(w) => contains_word(text, w),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Contains(p) | Pattern::Word(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_match_ignores_substrings() {
        assert!(contains_word("estou bem, obrigado", "bem"));
        assert!(!contains_word("também quero", "bem"));
        assert!(!contains_word("uso máscara", "cara"));
        assert!(contains_word("achei cara demais", "cara"));
    }

    #[test]
    fn test_word_match_handles_accents_and_punctuation() {
        assert!(contains_word("perdi minha mãe.", "mãe"));
        assert!(contains_word("tô cansado!!!", "tô"));
        assert!(contains_any_word("isso é péssimo", &["ruim", "péssimo"]));
    }

    #[test]
    fn test_phrase_and_exact_match() {
        assert!(contains_any("estou comparando preços", &["comparando preços"]));
        assert!(equals_any("triste", &["mal", "triste"]));
        assert!(!equals_any("muito triste", &["mal", "triste"]));
    }

    #[test]
    fn test_pattern_matches() {
        assert!(Pattern::Word("oi").matches("oi, tudo certo?"));
        assert!(!Pattern::Word("oi").matches("foi ontem"));
        assert!(Pattern::Contains("implante").matches("quero implantes"));
        assert_eq!(Pattern::Contains("siso").as_str(), "siso");
    }
}

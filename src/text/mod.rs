//! Text normalization shared by every similarity scorer.

pub mod aliases;
pub mod stopwords;

use crate::types::config::MatchConfig;
use std::collections::HashSet;

/// Lower-cases, tokenizes and filters free text.
///
/// Holds only immutable settings, so the same input always yields the same
/// tokens and one instance can serve any number of requests.
#[derive(Debug, Clone)]
pub struct Normalizer {
    min_token_len: usize,
    extra_stop_words: HashSet<String>,
}

impl Normalizer {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            min_token_len: config.min_token_len(),
            extra_stop_words: config
                .extra_stop_words()
                .iter()
                .map(|word| word.trim().to_lowercase())
                .collect(),
        }
    }

    /// Normalized token sequence for `text`; empty input gives no tokens.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let folded = text
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect::<String>();

        folded
            .split_whitespace()
            .filter(|token| token.chars().count() >= self.min_token_len)
            .filter(|token| !self.is_stop_word(token))
            .map(|token| aliases::canonicalize(token).to_string())
            .collect()
    }

    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.tokens(text).into_iter().collect()
    }

    pub fn profile(&self, text: &str) -> Profile {
        let tokens = self.tokens(text);
        let token_set = tokens.iter().cloned().collect();
        let terms = raw_terms(text);
        Profile {
            tokens,
            token_set,
            terms,
        }
    }

    fn is_stop_word(&self, token: &str) -> bool {
        stopwords::is_builtin_stop_word(token) || self.extra_stop_words.contains(token)
    }
}

/// A normalized user profile, ready to be scored against repositories.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub tokens: Vec<String>,
    pub token_set: HashSet<String>,
    /// Lower-cased words with `+` and `#` kept, so `c++` and `c#` survive.
    pub terms: HashSet<String>,
}

impl Profile {
    /// True when nothing usable survived normalization.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn mentions(&self, term: &str) -> bool {
        self.token_set.contains(term) || self.terms.contains(term)
    }
}

/// Characters that join alternatives inside one word, as in `C/C++` or `Rust|Go`.
const TERM_SEPARATORS: [char; 5] = ['/', ',', '(', ')', '|'];

fn raw_terms(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || TERM_SEPARATORS.contains(&c))
        .map(|word| word.trim_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#')))
        .filter(|word| !word.is_empty())
        .map(|word| aliases::canonicalize(word).to_string())
        .collect()
}

/// Number of whitespace-separated words, as a user would count them.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(&MatchConfig::default())
    }

    #[test]
    fn tokens_fold_case_and_strip_punctuation() {
        let tokens = normalizer().tokens("Building FAST, reliable CLI tools!");
        assert_eq!(tokens, vec!["building", "fast", "reliable", "cli", "tools"]);
    }

    #[test]
    fn tokens_split_on_separators() {
        let tokens = normalizer().tokens("react-native snake_case node.js");
        assert_eq!(
            tokens,
            vec!["react", "native", "snake", "case", "node", "javascript"]
        );
    }

    #[test]
    fn tokens_drop_short_words_and_stop_words() {
        let tokens = normalizer().tokens("I am a developer of the x web");
        assert_eq!(tokens, vec!["developer", "web"]);
    }

    #[test]
    fn tokens_empty_input_is_empty() {
        assert!(normalizer().tokens("").is_empty());
        assert!(normalizer().tokens("   \n\t").is_empty());
        assert!(normalizer().tokens("the and of").is_empty());
    }

    #[test]
    fn tokens_are_deterministic() {
        let normalizer = normalizer();
        let text = "Rust, Go and TypeScript for distributed systems";
        assert_eq!(normalizer.tokens(text), normalizer.tokens(text));
    }

    #[test]
    fn tokens_respect_extra_stop_words_and_min_length() {
        let cfg: MatchConfig = toml::from_str(
            r#"
[text]
min_token_len = 4
extra_stop_words = ["Projects"]
"#,
        )
        .expect("config should parse");
        let tokens = Normalizer::new(&cfg).tokens("rust projects for web backends");
        assert_eq!(tokens, vec!["rust", "backends"]);
    }

    #[test]
    fn profile_keeps_language_terms() {
        let profile = normalizer().profile("I write C++ and C# (mostly), some golang.");
        assert!(profile.mentions("c++"));
        assert!(profile.mentions("c#"));
        assert!(profile.mentions("go"));
        assert!(!profile.is_empty());
    }

    #[test]
    fn profile_of_stop_words_is_empty() {
        let profile = normalizer().profile("I am who I am");
        assert!(profile.is_empty());
    }

    #[test]
    fn word_count_counts_whitespace_words() {
        assert_eq!(word_count("  one two\tthree\nfour "), 4);
        assert_eq!(word_count(""), 0);
    }
}

// TextNormalizer: deterministic raw-string to cleaned-string transform.
//
// The order of operations is load-bearing: character-level cleanup,
// punctuation and digit scrubbing, tokenization, the token filters
// (length, stopwords, part of speech, domain stoplists), lemmatization,
// the post-lemma re-pass, and ASCII transliteration, in that order.
// Identical input and identical stoplists always produce identical
// output, and the transform is a fixed point: normalizing its own output
// changes nothing.

use std::sync::LazyLock;

use deunicode::deunicode;
use regex_lite::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use super::lemma;
use super::pos;
use super::stoplists::Stoplists;

/// Tokens containing a digit, including letter/digit mixes ("h4ck3r").
static DIGIT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S*\d\S*").expect("digit-token pattern"));

const MIN_TOKEN_LEN: usize = 3;
const MAX_TOKEN_LEN: usize = 20;

/// Normalizes course descriptions for vectorization.
pub struct TextNormalizer {
    stoplists: Stoplists,
    stemmer: Option<Stemmer>,
}

impl TextNormalizer {
    pub fn new(stoplists: Stoplists) -> Self {
        Self {
            stoplists,
            stemmer: None,
        }
    }

    /// Enable Snowball stemming before lemmatization. Off by default.
    pub fn with_stemming(mut self, enabled: bool) -> Self {
        self.stemmer = enabled.then(|| Stemmer::create(Algorithm::English));
        self
    }

    /// Normalize one raw description. Empty input yields an empty string.
    pub fn normalize(&self, raw: &str) -> String {
        // (a) character-level cleanup: commas out, slashes to spaces,
        // line breaks stripped, case folded
        let text = raw.replace(',', "").replace('/', " ");
        let text = text.trim_end_matches(['\n', '\r']).to_lowercase();

        // (b) strip non-word punctuation; accented letters survive until
        // transliteration
        let text: String = text
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        // (c) scrub tokens that are numeric or carry embedded digits
        let text = DIGIT_TOKEN.replace_all(&text, " ");

        // (d) tokenize, (e)-(h) token filters
        let mut tokens: Vec<String> = text
            .split_whitespace()
            .filter(|t| self.keep(t))
            .map(str::to_string)
            .collect();

        // optional stemming, then (i) lemmatization
        if let Some(stemmer) = &self.stemmer {
            tokens = tokens
                .iter()
                .map(|t| stemmer.stem(t).into_owned())
                .collect();
        }
        tokens = tokens.iter().map(|t| lemma::lemmatize(t)).collect();

        // (j) a lemma can resurface a noise base form
        tokens.retain(|t| !self.stoplists.other_words.contains(t.as_str()));

        // (k) transliterate to plain ASCII
        tokens = tokens.iter().map(|t| deunicode(t)).collect();

        // Transliteration can itself resurface a filtered form, so the
        // full filter chain runs once more. This is what makes the
        // transform idempotent.
        tokens.retain(|t| self.keep(t));

        // (l) rejoin
        tokens.join(" ")
    }

    /// Pure, order-preserving corpus map.
    pub fn normalize_corpus(&self, corpus: &[String]) -> Vec<String> {
        corpus.iter().map(|doc| self.normalize(doc)).collect()
    }

    /// The (e)-(h) token filter: length bounds, digit backstop, language
    /// stopwords, part-of-speech exclusion, domain stoplists.
    fn keep(&self, token: &str) -> bool {
        let len = token.chars().count();
        if len < MIN_TOKEN_LEN || len > MAX_TOKEN_LEN {
            return false;
        }
        // Unicode numerals slip past the ASCII \d scrub
        if token.chars().any(char::is_numeric) {
            return false;
        }
        if self.stoplists.language.contains(token) {
            return false;
        }
        if pos::is_excluded(token) {
            return false;
        }
        if self.stoplists.course_prefixes.contains(token) {
            return false;
        }
        if self.stoplists.other_words.contains(token) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TextNormalizer {
        TextNormalizer::new(Stoplists::from_parts(vec![], vec![]))
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(plain().normalize(""), "");
        assert_eq!(plain().normalize("   \n"), "");
    }

    #[test]
    fn commas_and_slashes_handled() {
        let out = plain().normalize("Loops, arrays/structures");
        assert_eq!(out, "loop array structure");
    }

    #[test]
    fn digit_tokens_removed() {
        let out = plain().normalize("h4ck3r culture 2024 algorithms");
        assert_eq!(out, "culture algorithm");
    }

    #[test]
    fn transliterates_to_ascii() {
        let out = plain().normalize("café culture");
        assert_eq!(out, "cafe culture");
    }

    #[test]
    fn stemming_flag_applies_snowball() {
        let stemmed = TextNormalizer::new(Stoplists::from_parts(vec![], vec![]))
            .with_stemming(true)
            .normalize("computational theories");
        // Snowball truncates; the exact stem is the stemmer's business
        assert_ne!(stemmed, "computational theory");
        assert!(stemmed.starts_with("comput"), "got {stemmed}");
    }
}

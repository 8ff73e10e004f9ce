//! Pattern Matcher
//!
//! Decides whether a chat message matches a list of trigger phrases, by
//! substring containment first and then by fuzzy per-word matching.

use super::text_normalizer::{self, TextNormalizer};
use crate::utils::fuzzy::{fuzzy_eq, DEFAULT_THRESHOLD};

/// Phrase words shorter than this never anchor a fuzzy match
pub const ANCHOR_WORD_LEN: usize = 4;

/// Common words that are long enough to anchor but too frequent to carry a
/// fuzzy match alone
const FUNCTION_WORDS: &[&str] = &[
    "about", "also", "been", "could", "does", "doing", "from", "have", "here", "into", "just",
    "many", "much", "some", "than", "that", "their", "them", "then", "there", "they", "this",
    "very", "what", "when", "where", "which", "will", "with", "would", "your",
];

/// A trigger phrase, normalized once up front
#[derive(Debug, Clone, PartialEq)]
pub struct Phrase {
    source: &'static str,
    text: String,
    /// Anchor words only, shorter words take no part in fuzzy matching
    anchors: Vec<String>,
}

impl Phrase {
    /// Normalize a trigger phrase. Blank phrases yield `None`.
    pub fn compile(source: &'static str, normalizer: &TextNormalizer) -> Option<Self> {
        let text = normalizer.normalize(source);
        if text.is_empty() {
            return None;
        }
        let mut anchors: Vec<String> = text_normalizer::words(&text)
            .filter(|w| w.chars().count() >= ANCHOR_WORD_LEN)
            .map(str::to_string)
            .collect();
        // "how much" or "what is app" match as substrings only
        if anchors.iter().all(|w| FUNCTION_WORDS.contains(&w.as_str())) {
            anchors.clear();
        }
        Some(Self {
            source,
            text,
            anchors,
        })
    }

    /// Compile a list of phrases, dropping blank ones
    pub fn compile_all(sources: &[&'static str], normalizer: &TextNormalizer) -> Vec<Self> {
        sources
            .iter()
            .filter_map(|s| Self::compile(s, normalizer))
            .collect()
    }

    /// The phrase as written in the rule table
    pub fn source(&self) -> &'static str {
        self.source
    }
}

/// A normalized message prepared for matching
#[derive(Debug, Clone)]
pub struct MatchInput<'a> {
    normalized: &'a str,
    words: Vec<&'a str>,
}

impl<'a> MatchInput<'a> {
    /// Only the first `max_words` words of `normalized` take part in fuzzy
    /// matching, with surrounding punctuation stripped. Substring checks
    /// always see the whole text.
    pub fn new(normalized: &'a str, max_words: usize) -> Self {
        Self {
            normalized,
            words: text_normalizer::words(normalized).take(max_words).collect(),
        }
    }
}

/// Matches messages against trigger phrases
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher {
    threshold: f64,
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl PatternMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Test a single phrase.
    ///
    /// Every phrase word of at least `ANCHOR_WORD_LEN` chars must be
    /// fuzzy-equal to some input word, and at least one of them must be a
    /// content word rather than one of `FUNCTION_WORDS`. Shorter words are
    /// ignored.
    pub fn matches_phrase(&self, input: &MatchInput<'_>, phrase: &Phrase) -> bool {
        if input.normalized.contains(phrase.text.as_str()) {
            return true;
        }
        if phrase.anchors.is_empty() {
            return false;
        }

        phrase.anchors.iter().all(|anchor| {
            input
                .words
                .iter()
                .any(|w| fuzzy_eq(anchor, w, self.threshold))
        })
    }

    /// First phrase in `phrases` the input matches
    pub fn first_match<'p>(
        &self,
        input: &MatchInput<'_>,
        phrases: &'p [Phrase],
    ) -> Option<&'p Phrase> {
        phrases.iter().find(|p| self.matches_phrase(input, p))
    }

    /// Whether the input matches any of the phrases
    pub fn matches(&self, input: &MatchInput<'_>, phrases: &[Phrase]) -> bool {
        self.first_match(input, phrases).is_some()
    }
}

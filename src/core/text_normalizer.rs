//! Text Normalization
//!
//! Expands chat shortcuts ("u", "idk", "w/o") and lowercases input before
//! intent matching.

use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Built-in chat shortcuts. No word of any expansion is itself a key, which
/// keeps `TextNormalizer::normalize` idempotent.
const BUILTIN_SHORTCUTS: &[(&str, &str)] = &[
    // Pronouns and glue words
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("y", "why"),
    ("w", "with"),
    ("b", "be"),
    ("n", "and"),
    ("k", "okay"),
    ("ok", "okay"),
    ("w/", "with"),
    ("w/o", "without"),
    ("b4", "before"),
    ("2", "to"),
    ("4", "for"),
    // Chat slang
    ("pls", "please"),
    ("plz", "please"),
    ("thx", "thanks"),
    ("ty", "thank you"),
    ("bc", "because"),
    ("cuz", "because"),
    ("coz", "because"),
    ("idk", "i do not know"),
    ("idc", "i do not care"),
    ("imo", "in my opinion"),
    ("tbh", "to be honest"),
    ("rn", "right now"),
    ("asap", "as soon as possible"),
    ("btw", "by the way"),
    ("fyi", "for your information"),
    ("lmk", "let me know"),
    ("hmu", "hit me up"),
    ("msg", "message"),
    ("txt", "text"),
    ("info", "information"),
    ("abt", "about"),
    ("gr8", "great"),
    ("m8", "mate"),
    ("l8", "late"),
    ("l8r", "later"),
    ("wanna", "want to"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("kinda", "kind of"),
    ("sorta", "sort of"),
    ("outta", "out of"),
    ("coulda", "could have"),
    ("shoulda", "should have"),
    ("woulda", "would have"),
    // Contractions typed without the apostrophe
    ("aint", "is not"),
    ("cant", "cannot"),
    ("dont", "do not"),
    ("wont", "will not"),
    ("didnt", "did not"),
    ("doesnt", "does not"),
    ("isnt", "is not"),
    ("wasnt", "was not"),
    ("werent", "were not"),
    ("havent", "have not"),
    ("hasnt", "has not"),
    ("hadnt", "had not"),
    ("wouldnt", "would not"),
    ("couldnt", "could not"),
    ("shouldnt", "should not"),
    ("mustnt", "must not"),
    ("whats", "what is"),
    ("thats", "that is"),
    ("heres", "here is"),
    ("theres", "there is"),
    ("wheres", "where is"),
    ("hows", "how is"),
    ("whos", "who is"),
    ("whens", "when is"),
    ("whys", "why is"),
    ("im", "i am"),
    ("ive", "i have"),
    ("youre", "you are"),
    ("youve", "you have"),
    ("youd", "you would"),
    ("youll", "you will"),
    ("hes", "he is"),
    ("shes", "she is"),
    ("theyre", "they are"),
    ("weve", "we have"),
    ("theyve", "they have"),
    // Abbreviations
    ("dev", "developer"),
    ("devs", "developers"),
    ("biz", "business"),
    ("tech", "technology"),
    ("govt", "government"),
    ("mgmt", "management"),
    ("yrs", "years"),
    ("yr", "year"),
    ("mo", "month"),
    ("mos", "months"),
    ("hr", "hour"),
    ("hrs", "hours"),
    ("min", "minute"),
    ("mins", "minutes"),
    ("sec", "second"),
    ("secs", "seconds"),
    ("approx", "approximately"),
    ("est", "estimated"),
    ("amt", "amount"),
    ("qty", "quantity"),
    ("sm", "small"),
    ("med", "medium"),
    ("lg", "large"),
    ("xl", "extra large"),
    ("fb", "facebook"),
    ("ig", "instagram"),
    ("tw", "twitter"),
    ("li", "linkedin"),
    ("yt", "youtube"),
    ("wp", "wordpress"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("exp", "experience"),
    ("xp", "experience"),
    ("xperience", "experience"),
];

/// Characters that can form a shortcut token
fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '/'
}

/// Split text into tokens, dropping the punctuation and spaces between them
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_token_char(c))
        .filter(|w| !w.is_empty())
}

/// Lookup table from informal token to its expansion
#[derive(Debug, Clone, Default)]
pub struct ShortcutTable {
    entries: HashMap<String, String>,
}

impl ShortcutTable {
    /// Table holding only the built-in chat shortcuts
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for (key, expansion) in BUILTIN_SHORTCUTS {
            table.insert(key, expansion);
        }
        table
    }

    /// Add an entry, replacing any previous expansion for the same key.
    ///
    /// Malformed entries are skipped: the key must be a single token of
    /// alphanumerics or `/`, the expansion must not be blank.
    /// Returns whether the entry was accepted.
    pub fn insert(&mut self, key: &str, expansion: &str) -> bool {
        let key = key.trim().to_lowercase();
        let expansion = expansion.trim().to_lowercase();

        if key.is_empty() || !key.chars().all(is_token_char) || expansion.is_empty() {
            debug!("Skipping malformed shortcut '{}' -> '{}'", key, expansion);
            return false;
        }

        self.entries.insert(key, expansion);
        true
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn contains_key(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, expansion)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Normalizes typed chat text before matching
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    shortcuts: ShortcutTable,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&BTreeMap::new())
    }
}

impl TextNormalizer {
    /// Create a normalizer from the built-in table plus extra shortcuts from config
    pub fn new(extra_shortcuts: &BTreeMap<String, String>) -> Self {
        let mut shortcuts = ShortcutTable::builtin();
        for (key, expansion) in extra_shortcuts {
            shortcuts.insert(key, expansion);
        }
        Self::with_table(shortcuts)
    }

    pub fn with_table(shortcuts: ShortcutTable) -> Self {
        Self { shortcuts }
    }

    pub fn shortcuts(&self) -> &ShortcutTable {
        &self.shortcuts
    }

    /// Lowercase, trim and expand shortcuts.
    ///
    /// Runs a single pass over the original tokens: an expansion is emitted
    /// as-is and never scanned again. Everything between tokens (spaces,
    /// punctuation) is copied unchanged.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let trimmed = lowered.trim();

        let mut result = String::with_capacity(trimmed.len());
        let mut token = String::new();

        for c in trimmed.chars() {
            if is_token_char(c) {
                token.push(c);
            } else {
                self.flush_token(&mut token, &mut result);
                result.push(c);
            }
        }
        self.flush_token(&mut token, &mut result);

        result
    }

    fn flush_token(&self, token: &mut String, out: &mut String) {
        if token.is_empty() {
            return;
        }
        match self.shortcuts.get(token) {
            Some(expansion) => out.push_str(expansion),
            None => out.push_str(token),
        }
        token.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("  HELLO WORLD  "), "hello world");
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("   "), "");
    }

    #[test]
    fn test_normalize_shortcuts() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("idk what u do"), "i do not know what you do");
        assert_eq!(
            normalizer.normalize("Pls LMK asap!"),
            "please let me know as soon as possible!"
        );
        assert_eq!(normalizer.normalize("w/o a form"), "without a form");
        assert_eq!(normalizer.normalize("w/ paypal"), "with paypal");
        assert_eq!(normalizer.normalize("ur exp?"), "your experience?");
    }

    #[test]
    fn test_normalize_whole_words_only() {
        let normalizer = TextNormalizer::default();
        // "u" inside "build" and "4" inside "24/7" must stay untouched
        assert_eq!(normalizer.normalize("build"), "build");
        assert_eq!(normalizer.normalize("support 24/7"), "support 24/7");
        assert_eq!(normalizer.normalize("mobile"), "mobile");
    }

    #[test]
    fn test_words_drop_punctuation() {
        let split: Vec<&str> = words("timline? (asap), w/o... i'm ok!").collect();
        assert_eq!(split, ["timline", "asap", "w/o", "i", "m", "ok"]);
        assert_eq!(words(" ?! ").count(), 0);
    }

    #[test]
    fn test_apostrophe_free_contractions() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize("im new here"), "i am new here");
        assert_eq!(normalizer.normalize("hows it going"), "how is it going");
        assert_eq!(normalizer.normalize("youre fast"), "you are fast");
        // real words stay
        assert_eq!(normalizer.normalize("its my id"), "its my id");
    }

    #[test]
    fn test_expansion_not_rescanned() {
        let mut table = ShortcutTable::default();
        table.insert("a1", "b2 x");
        table.insert("b2", "should not appear");
        let normalizer = TextNormalizer::with_table(table);
        assert_eq!(normalizer.normalize("a1"), "b2 x");
    }

    #[test]
    fn test_builtin_expansions_are_not_keys() {
        let table = ShortcutTable::builtin();
        for (key, expansion) in table.iter() {
            for word in expansion.split_whitespace() {
                assert!(
                    !table.contains_key(word),
                    "expansion of '{}' contains shortcut key '{}'",
                    key,
                    word
                );
            }
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let normalizer = TextNormalizer::default();
        for text in [
            "idk how much u charge tbh",
            "Hi!! can i pay w/ paypal?",
            "ty, l8r m8",
            "whats ur exp in shopify dev",
        ] {
            let once = normalizer.normalize(text);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn test_malformed_extra_shortcuts_skipped() {
        let mut extra = BTreeMap::new();
        extra.insert("".to_string(), "nothing".to_string());
        extra.insert("two words".to_string(), "bad".to_string());
        extra.insert("wip".to_string(), "   ".to_string());
        extra.insert("ASAP".to_string(), "Right Away".to_string());
        let normalizer = TextNormalizer::new(&extra);

        assert_eq!(normalizer.normalize("wip"), "wip");
        assert_eq!(normalizer.normalize("two words"), "two words");
        // Overrides the built-in entry
        assert_eq!(normalizer.normalize("asap"), "right away");
    }
}

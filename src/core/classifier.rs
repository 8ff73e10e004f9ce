//! Intent Classifier
//!
//! Resolves a chat message to exactly one intent: closed-set replies first
//! (greeting, yes, no), then the phrase rules in priority order, then the
//! help-menu fallback.

use super::pattern_matcher::{MatchInput, PatternMatcher, Phrase};
use super::text_normalizer::TextNormalizer;
use crate::intents::{CategoryRule, Exclusion, Intent, EXCLUSIONS, RULES};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

pub const DEFAULT_MAX_INPUT_CHARS: usize = 500;
pub const DEFAULT_MAX_INPUT_WORDS: usize = 64;

/// Short openers like "start" are greetings unless they ask how to get started
const SHORT_OPENER_MAX_CHARS: usize = 20;

lazy_static! {
    static ref GREETING: Regex = Regex::new(
        r"(?i)^(hello|hi|hey|hola|greetings|yo|sup|howdy|good morning|good afternoon|good evening)[\s!?.]*$"
    )
    .expect("greeting pattern");
    static ref AFFIRMATIVE: Regex = Regex::new(
        r"(?i)^(yes|yeah|yep|yup|sure|k|ok|okay|definitely|absolutely|of course)[\s!?.]*$"
    )
    .expect("affirmative pattern");
    static ref NEGATIVE: Regex = Regex::new(
        r"(?i)^(no|nope|nah|not really|no,? thanks|no,? thank you|im good|i'm good|i am good)[\s!?.]*$"
    )
    .expect("negative pattern");
}

/// Bounds applied to every message before matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Longer messages are truncated
    pub max_chars: usize,
    /// Words past this take no part in fuzzy matching
    pub max_words: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_INPUT_CHARS,
            max_words: DEFAULT_MAX_INPUT_WORDS,
        }
    }
}

/// What made the classifier pick an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    GreetingWord,
    ShortOpener,
    ClosedSetReply,
    Phrase(&'static str),
    Fallback,
}

/// Outcome of classifying one message
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub intent: Intent,
    pub trigger: Trigger,
    /// The normalized (and truncated) message
    pub normalized: String,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    intent: Intent,
    priority: u16,
    phrases: Vec<Phrase>,
}

#[derive(Debug, Clone)]
struct CompiledExclusion {
    suppressed: Intent,
    vocabulary: Vec<Phrase>,
}

/// Rule-based intent classifier.
///
/// Immutable after construction, so one instance can serve any number of
/// sessions concurrently.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    normalizer: TextNormalizer,
    matcher: PatternMatcher,
    limits: InputLimits,
    rules: Vec<CompiledRule>,
    exclusions: Vec<CompiledExclusion>,
}

impl IntentClassifier {
    /// Classifier over the built-in rule table
    pub fn new(normalizer: TextNormalizer, matcher: PatternMatcher, limits: InputLimits) -> Self {
        Self::with_rules(normalizer, matcher, limits, RULES, EXCLUSIONS)
    }

    /// Classifier over a custom rule table. Rules are sorted by priority;
    /// equal priorities keep their declaration order.
    pub fn with_rules(
        normalizer: TextNormalizer,
        matcher: PatternMatcher,
        limits: InputLimits,
        rules: &[CategoryRule],
        exclusions: &[Exclusion],
    ) -> Self {
        let mut compiled: Vec<CompiledRule> = rules
            .iter()
            .map(|rule| CompiledRule {
                intent: rule.intent,
                priority: rule.priority,
                phrases: Phrase::compile_all(rule.phrases, &normalizer),
            })
            .collect();
        compiled.sort_by_key(|rule| rule.priority);

        let exclusions = exclusions
            .iter()
            .map(|ex| CompiledExclusion {
                suppressed: ex.suppressed,
                vocabulary: Phrase::compile_all(ex.vocabulary, &normalizer),
            })
            .collect();

        debug!("Compiled {} intent rules", compiled.len());

        Self {
            normalizer,
            matcher,
            limits,
            rules: compiled,
            exclusions,
        }
    }

    /// Intents of the phrase rules in the order they are tried
    pub fn rule_order(&self) -> Vec<Intent> {
        self.rules.iter().map(|r| r.intent).collect()
    }

    /// Classify a message. Never fails: unmatched input yields `Intent::Default`.
    pub fn classify(&self, message: &str) -> Intent {
        self.classify_detailed(message).intent
    }

    /// Classify a message and report what triggered the result
    pub fn classify_detailed(&self, message: &str) -> Classification {
        let raw = truncate_chars(message, self.limits.max_chars);
        let trimmed = raw.trim();
        let normalized = self.normalizer.normalize(trimmed);

        let (intent, trigger) = self.resolve(trimmed, &normalized);
        debug!("Classified '{}' as {} ({:?})", normalized, intent, trigger);

        Classification {
            intent,
            trigger,
            normalized,
        }
    }

    fn resolve(&self, trimmed: &str, normalized: &str) -> (Intent, Trigger) {
        if GREETING.is_match(trimmed) {
            return (Intent::Greeting, Trigger::GreetingWord);
        }
        if is_short_opener(normalized) {
            return (Intent::Greeting, Trigger::ShortOpener);
        }
        if AFFIRMATIVE.is_match(trimmed) {
            return (Intent::Affirmative, Trigger::ClosedSetReply);
        }
        if NEGATIVE.is_match(trimmed) {
            return (Intent::Negative, Trigger::ClosedSetReply);
        }

        let input = MatchInput::new(normalized, self.limits.max_words);
        for rule in &self.rules {
            let Some(phrase) = self.matcher.first_match(&input, &rule.phrases) else {
                continue;
            };
            if self.is_suppressed(rule.intent, &input) {
                debug!(
                    "Rule {} (priority {}) suppressed by exclusion",
                    rule.intent, rule.priority
                );
                continue;
            }
            return (rule.intent, Trigger::Phrase(phrase.source()));
        }

        (Intent::Default, Trigger::Fallback)
    }

    fn is_suppressed(&self, intent: Intent, input: &MatchInput<'_>) -> bool {
        self.exclusions
            .iter()
            .filter(|ex| ex.suppressed == intent)
            .any(|ex| self.matcher.matches(input, &ex.vocabulary))
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(
            TextNormalizer::default(),
            PatternMatcher::default(),
            InputLimits::default(),
        )
    }
}

fn is_short_opener(normalized: &str) -> bool {
    normalized.contains("start")
        && normalized.chars().count() < SHORT_OPENER_MAX_CHARS
        && !normalized.contains("get")
        && !normalized.contains("how")
}

/// Cut `text` to at most `max_chars` chars, on a char boundary
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings() {
        let classifier = IntentClassifier::default();
        for text in ["Hi", "hello!!", "  Hey ", "good morning.", "HOWDY?!"] {
            assert_eq!(classifier.classify(text), Intent::Greeting, "{}", text);
        }
        // greeting word followed by a real question is not a bare greeting
        assert_ne!(classifier.classify("hi, how much does it cost"), Intent::Greeting);
    }

    #[test]
    fn test_short_opener() {
        let classifier = IntentClassifier::default();
        let result = classifier.classify_detailed("start");
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(result.trigger, Trigger::ShortOpener);

        // asking how to start is a getting-started question
        assert_eq!(classifier.classify("how to start"), Intent::Started);
        assert_eq!(classifier.classify("Get Started"), Intent::Started);
    }

    #[test]
    fn test_closed_set_replies() {
        let classifier = IntentClassifier::default();
        assert_eq!(classifier.classify("yes"), Intent::Affirmative);
        assert_eq!(classifier.classify("Sure!"), Intent::Affirmative);
        assert_eq!(classifier.classify("no"), Intent::Negative);
        assert_eq!(classifier.classify("no thanks"), Intent::Negative);
        assert_eq!(classifier.classify("Nope."), Intent::Negative);
        assert_eq!(classifier.classify("i'm good"), Intent::Negative);
    }

    #[test]
    fn test_trigger_reports_phrase() {
        let classifier = IntentClassifier::default();
        let result = classifier.classify_detailed("how much does it cost");
        assert_eq!(result.intent, Intent::Pricing);
        assert_eq!(result.trigger, Trigger::Phrase("cost"));
        assert_eq!(result.normalized, "how much does it cost");
    }

    #[test]
    fn test_exclusion_independent_of_order() {
        // Pricing tried before Payment: the exclusion alone must keep
        // payment-method questions out of Pricing
        let rules = [
            CategoryRule {
                intent: Intent::Pricing,
                priority: 1,
                phrases: &["cost", "how much"],
            },
            CategoryRule {
                intent: Intent::Payment,
                priority: 2,
                phrases: &["paypal", "bank transfer"],
            },
        ];
        let classifier = IntentClassifier::with_rules(
            TextNormalizer::default(),
            PatternMatcher::default(),
            InputLimits::default(),
            &rules,
            EXCLUSIONS,
        );

        assert_eq!(classifier.classify("how much does it cost"), Intent::Pricing);
        assert_eq!(
            classifier.classify("how much extra does paypal cost"),
            Intent::Payment
        );
        assert_eq!(
            classifier.classify("does a bank transfer cost more"),
            Intent::Payment
        );
    }

    #[test]
    fn test_rules_sorted_by_priority() {
        let rules = [
            CategoryRule {
                intent: Intent::Goodbye,
                priority: 9,
                phrases: &["later"],
            },
            CategoryRule {
                intent: Intent::Timeline,
                priority: 3,
                phrases: &["later"],
            },
        ];
        let classifier = IntentClassifier::with_rules(
            TextNormalizer::default(),
            PatternMatcher::default(),
            InputLimits::default(),
            &rules,
            &[],
        );
        assert_eq!(classifier.rule_order(), vec![Intent::Timeline, Intent::Goodbye]);
        assert_eq!(classifier.classify("see you later"), Intent::Timeline);
    }

    #[test]
    fn test_builtin_rule_order() {
        let order = IntentClassifier::default().rule_order();
        assert_eq!(
            order,
            vec![
                Intent::Experience,
                Intent::Payment,
                Intent::Benefits,
                Intent::Mobile,
                Intent::Services,
                Intent::Pricing,
                Intent::Packages,
                Intent::Process,
                Intent::Timeline,
                Intent::Revisions,
                Intent::Domain,
                Intent::Started,
                Intent::Contact,
                Intent::WhatsApp,
                Intent::Form,
                Intent::Navigation,
                Intent::Technologies,
                Intent::Shopify,
                Intent::Redesign,
                Intent::Remote,
                Intent::Projects,
                Intent::About,
                Intent::Skills,
                Intent::Reviews,
                Intent::Thanks,
                Intent::Goodbye,
            ]
        );
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn test_truncation_applies_before_matching() {
        let limits = InputLimits {
            max_chars: 10,
            max_words: 64,
        };
        let classifier =
            IntentClassifier::new(TextNormalizer::default(), PatternMatcher::default(), limits);
        // "pricing" lies past the cut
        assert_eq!(classifier.classify("zzzzzzzzzzzz pricing"), Intent::Default);
    }
}

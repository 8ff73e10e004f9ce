//! Chat Processor
//!
//! The single entry point the chat UI calls: classify a message and pick
//! the reply. Stateless per call.

use crate::config::Config;
use crate::core::classifier::{Classification, IntentClassifier};
use crate::core::pattern_matcher::PatternMatcher;
use crate::core::text_normalizer::TextNormalizer;
use crate::intents::Intent;
use crate::responses;
use tracing::debug;

/// Result of processing one message
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub intent: Intent,
    pub text: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct ChatProcessor {
    classifier: IntentClassifier,
}

impl ChatProcessor {
    pub fn new(config: &Config) -> Self {
        let normalizer = TextNormalizer::new(&config.extra_shortcuts);
        let matcher = PatternMatcher::new(config.similarity_threshold);
        debug!(
            "Chat processor ready: {} shortcuts, threshold {:.2}",
            normalizer.shortcuts().len(),
            matcher.threshold()
        );

        Self {
            classifier: IntentClassifier::new(normalizer, matcher, config.input_limits()),
        }
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Which intent a message resolves to
    pub fn classify(&self, message: &str) -> Intent {
        self.classifier.classify(message)
    }

    pub fn classify_detailed(&self, message: &str) -> Classification {
        self.classifier.classify_detailed(message)
    }

    /// Classify a message and select the reply
    pub fn process(&self, message: &str) -> Reply {
        let classification = self.classifier.classify_detailed(message);
        Reply {
            intent: classification.intent,
            text: responses::respond_to(&classification),
        }
    }

    /// Reply text for a message
    pub fn classify_and_respond(&self, message: &str) -> String {
        self.process(message).text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_pricing() {
        let processor = ChatProcessor::default();
        let reply = processor.process("how much does it cost");
        assert_eq!(reply.intent, Intent::Pricing);
        assert_eq!(reply.text, responses::respond(Intent::Pricing));
    }

    #[test]
    fn test_contact_form_reply() {
        let processor = ChatProcessor::default();
        let reply = processor.process("how do i contact you, is there a form?");
        assert_eq!(reply.intent, Intent::Contact);
        assert_eq!(reply.text, responses::respond(Intent::Form));
    }

    #[test]
    fn test_extra_shortcuts_from_config() {
        let mut config = Config::default();
        config
            .extra_shortcuts
            .insert("$$".to_string(), "ignored".to_string());
        config
            .extra_shortcuts
            .insert("quo".to_string(), "quote".to_string());
        let processor = ChatProcessor::new(&config);
        assert_eq!(processor.classify("can i get a quo"), Intent::Pricing);
    }

    #[test]
    fn test_processor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChatProcessor>();
    }
}

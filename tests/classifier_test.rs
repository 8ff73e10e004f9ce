use chatdesk::core::text_normalizer::TextNormalizer;
use chatdesk::responses::respond;
use chatdesk::session::QUICK_REPLIES;
use chatdesk::utils::similarity;
use chatdesk::{ChatProcessor, Intent};

fn classify(text: &str) -> Intent {
    ChatProcessor::default().classify(text)
}

#[test]
fn test_greetings() {
    assert_eq!(classify("Hi"), Intent::Greeting);
    assert_eq!(classify("hello!!"), Intent::Greeting);
    assert_eq!(classify("Good evening"), Intent::Greeting);
}

#[test]
fn test_pricing_not_payment() {
    assert_eq!(classify("how much does it cost"), Intent::Pricing);
}

#[test]
fn test_payment_not_pricing() {
    assert_eq!(classify("can i pay with paypal"), Intent::Payment);
    assert_eq!(classify("Do you accept PayPal?"), Intent::Payment);
    assert_eq!(
        classify("whats the price if i pay by credit card"),
        Intent::Payment
    );
    assert_eq!(classify("what payment methods do you take"), Intent::Payment);
}

#[test]
fn test_closed_set_replies() {
    assert_eq!(classify("yes"), Intent::Affirmative);
    assert_eq!(classify("no thanks"), Intent::Negative);
}

#[test]
fn test_fallback() {
    assert_eq!(classify("asdkjfh nonsense"), Intent::Default);
    assert_eq!(classify(""), Intent::Default);
    assert_eq!(classify("   \t "), Intent::Default);
}

#[test]
fn test_unrelated_what_questions_fall_back() {
    for text in ["what is the weather", "what is this?", "whats up"] {
        assert_eq!(classify(text), Intent::Default, "'{}'", text);
    }
    assert_eq!(classify("thank you so much"), Intent::Thanks);
    // the spelled-out app name still works
    assert_eq!(classify("do you have whats app"), Intent::WhatsApp);
}

#[test]
fn test_typos_next_to_punctuation() {
    assert_eq!(classify("timline?"), Intent::Timeline);
    assert_eq!(classify("whats ur pricng?"), Intent::Pricing);
    assert_eq!(classify("whats ur experiance?!"), Intent::Experience);
}

#[test]
fn test_quick_replies_regression() {
    let processor = ChatProcessor::default();
    for quick in QUICK_REPLIES {
        assert_eq!(
            processor.classify(quick.text),
            quick.intent,
            "quick reply '{}'",
            quick.text
        );
        assert_eq!(
            processor.classify_and_respond(quick.text),
            respond(quick.intent)
        );
    }
}

#[test]
fn test_typical_questions() {
    let cases = [
        ("whats ur experiance", Intent::Experience),
        ("how long will it take", Intent::Timeline),
        ("is the site mobile friendly?", Intent::Mobile),
        ("what technologies do you use", Intent::Technologies),
        ("can you redesign my old website", Intent::Redesign),
        ("how do i contact you", Intent::Contact),
        ("i want to see your portfolio", Intent::Projects),
        ("thx!", Intent::Thanks),
        ("bye", Intent::Goodbye),
    ];
    for (text, expected) in cases {
        assert_eq!(classify(text), expected, "'{}'", text);
    }
}

#[test]
fn test_contact_form_sub_response() {
    let processor = ChatProcessor::default();
    let reply = processor.process("where is the contact form");
    assert_eq!(reply.intent, Intent::Contact);
    assert_eq!(reply.text, respond(Intent::Form));
}

#[test]
fn test_classification_is_deterministic() {
    let processor = ChatProcessor::default();
    for text in ["Services", "how much does it cost", "idk", "Get Started"] {
        let first = processor.classify_and_respond(text);
        for _ in 0..3 {
            assert_eq!(processor.classify_and_respond(text), first);
        }
    }
}

#[test]
fn test_normalize_idempotent() {
    let normalizer = TextNormalizer::default();
    for text in [
        "",
        "HELLO",
        "idk how much u charge",
        "w/o a domain, can u still build it b4 friday?",
        "thx m8, ttyl",
    ] {
        let once = normalizer.normalize(text);
        assert_eq!(normalizer.normalize(&once), once, "'{}'", text);
    }
}

#[test]
fn test_similarity_properties() {
    let words = ["", "a", "pricing", "pricng", "shopify", "services"];
    for a in words {
        if !a.is_empty() {
            assert_eq!(similarity(a, a), 1.0);
        }
        for b in words {
            assert_eq!(similarity(a, b), similarity(b, a));
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score));
        }
    }
    assert_eq!(similarity("", ""), 1.0);
}

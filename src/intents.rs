//! Intent catalogue
//!
//! The closed set of chat intents, the trigger phrases behind each one and the
//! priority in which they are tried.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A topic bucket a chat message is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Affirmative,
    Negative,
    Experience,
    Payment,
    Benefits,
    Mobile,
    Services,
    Pricing,
    Packages,
    Process,
    Timeline,
    Revisions,
    Domain,
    Started,
    Contact,
    #[serde(rename = "whatsapp")]
    WhatsApp,
    Form,
    Navigation,
    Technologies,
    Shopify,
    Redesign,
    Remote,
    Projects,
    About,
    Skills,
    Reviews,
    Thanks,
    Goodbye,
    /// Nothing matched, answer with the help menu
    Default,
}

impl Intent {
    pub const ALL: [Intent; 30] = [
        Intent::Greeting,
        Intent::Affirmative,
        Intent::Negative,
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
        Intent::Default,
    ];

    /// Stable snake_case name, same as the serde representation
    pub fn name(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Affirmative => "affirmative",
            Intent::Negative => "negative",
            Intent::Experience => "experience",
            Intent::Payment => "payment",
            Intent::Benefits => "benefits",
            Intent::Mobile => "mobile",
            Intent::Services => "services",
            Intent::Pricing => "pricing",
            Intent::Packages => "packages",
            Intent::Process => "process",
            Intent::Timeline => "timeline",
            Intent::Revisions => "revisions",
            Intent::Domain => "domain",
            Intent::Started => "started",
            Intent::Contact => "contact",
            Intent::WhatsApp => "whatsapp",
            Intent::Form => "form",
            Intent::Navigation => "navigation",
            Intent::Technologies => "technologies",
            Intent::Shopify => "shopify",
            Intent::Redesign => "redesign",
            Intent::Remote => "remote",
            Intent::Projects => "projects",
            Intent::About => "about",
            Intent::Skills => "skills",
            Intent::Reviews => "reviews",
            Intent::Thanks => "thanks",
            Intent::Goodbye => "goodbye",
            Intent::Default => "default",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named intent with its trigger phrases.
///
/// Rules are tried in ascending `priority`; the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub intent: Intent,
    pub priority: u16,
    pub phrases: &'static [&'static str],
}

/// Suppresses a rule when the message also matches `vocabulary`
#[derive(Debug, Clone, Copy)]
pub struct Exclusion {
    pub suppressed: Intent,
    pub vocabulary: &'static [&'static str],
}

/// Payment-method words that must never be answered as a pricing question
pub const PAYMENT_METHOD_VOCABULARY: &[&str] = &[
    "paypal",
    "instapay",
    "vodafone cash",
    "bank transfer",
    "wire transfer",
    "credit card",
    "debit card",
    "payment method",
    "payment options",
];

pub const EXCLUSIONS: &[Exclusion] = &[Exclusion {
    suppressed: Intent::Pricing,
    vocabulary: PAYMENT_METHOD_VOCABULARY,
}];

pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        intent: Intent::Experience,
        priority: 10,
        phrases: &[
            "experience",
            "years of experience",
            "how long have you been",
            "how many years",
            "how much experience",
            "background",
            "track record",
            "how experienced",
            "work history",
            "career",
            "been doing this",
            "been working",
            "in the field",
            "expertise level",
            "skill level",
            "how skilled",
            "qualifications",
            "credentials",
        ],
    },
    CategoryRule {
        intent: Intent::Payment,
        priority: 20,
        phrases: &[
            "payment",
            "payment method",
            "payment options",
            "how do i pay",
            "how can i pay",
            "can i pay",
            "pay you",
            "send money",
            "transfer money",
            "paypal",
            "vodafone cash",
            "instapay",
            "bank transfer",
            "wire transfer",
            "accept payment",
            "receive payment",
            "get paid",
            "money transfer",
            "payment gateway",
            "credit card",
            "debit card",
            "billing",
            "invoice",
        ],
    },
    CategoryRule {
        intent: Intent::Benefits,
        priority: 30,
        phrases: &[
            "benefit",
            "what will a website do",
            "why need website",
            "why do i need a website",
            "advantages",
            "worth it",
            "return on investment",
            "help my business",
            "grow my business",
            "what can a website do",
            "why should i hire you",
            "need a website",
            "purpose of website",
            "website importance",
            "advantage of",
            "help me grow",
            "increase sales",
            "get more customers",
            "good for business",
        ],
    },
    CategoryRule {
        intent: Intent::Mobile,
        priority: 40,
        phrases: &[
            "mobile",
            "responsive",
            "tablet",
            "mobile friendly",
            "work on phone",
            "look on phone",
            "iphone",
            "android",
            "smartphone",
            "small screen",
            "touch screen",
            "different screen sizes",
        ],
    },
    CategoryRule {
        intent: Intent::Services,
        priority: 50,
        phrases: &[
            "service",
            "services",
            "offer",
            "do you do",
            "can you do",
            "provide",
            "build",
            "create",
            "develop",
            "make website",
            "make site",
            "offerings",
            "landing page",
        ],
    },
    CategoryRule {
        intent: Intent::Pricing,
        priority: 60,
        phrases: &[
            "price",
            "pricing",
            "cost",
            "how much",
            "budget",
            "quote",
            "estimate",
            "hourly rate",
            "your rate",
            "charge",
            "fees",
            "expensive",
            "cheap",
            "affordable",
            "investment",
            "money",
            "dollar",
            "usd",
            "egp",
            "currency",
        ],
    },
    CategoryRule {
        intent: Intent::Packages,
        priority: 70,
        phrases: &[
            "package",
            "packages",
            "bundle",
            "plan",
            "plans",
            "tier",
            "tiers",
            "subscription",
            "membership",
            "price list",
        ],
    },
    CategoryRule {
        intent: Intent::Process,
        priority: 80,
        phrases: &[
            "process",
            "workflow",
            "steps",
            "how does it work",
            "working process",
            "development process",
            "procedure",
            "work together",
            "approach",
            "methodology",
        ],
    },
    CategoryRule {
        intent: Intent::Timeline,
        priority: 90,
        phrases: &[
            "time",
            "timeline",
            "how long",
            "duration",
            "deadline",
            "deliver",
            "delivery",
            "when",
            "week",
            "days",
            "month",
            "turnaround",
            "how soon",
            "finish",
            "launch date",
            "how quickly",
            "timeframe",
            "time frame",
        ],
    },
    CategoryRule {
        intent: Intent::Revisions,
        priority: 100,
        phrases: &[
            "revision",
            "revisions",
            "change",
            "changes",
            "edit",
            "edits",
            "modify",
            "modification",
            "tweak",
            "adjust",
            "not satisfied",
            "unhappy with",
            "make changes",
        ],
    },
    CategoryRule {
        intent: Intent::Domain,
        priority: 110,
        phrases: &[
            "domain",
            "url",
            "hosting",
            "website address",
            "web address",
            "domain name",
            "godaddy",
            "namecheap",
            "register domain",
        ],
    },
    CategoryRule {
        intent: Intent::Started,
        priority: 120,
        phrases: &[
            "get started",
            "getting started",
            "start",
            "begin",
            "how to start",
            "start a project",
            "starting",
            "kick off",
            "next step",
            "first step",
            "hire",
            "hire you",
            "book you",
            "proceed",
        ],
    },
    CategoryRule {
        intent: Intent::Contact,
        priority: 130,
        phrases: &[
            "contact",
            "email",
            "phone number",
            "reach",
            "get in touch",
            "talk to you",
            "speak",
            "call",
            "connect",
            "contact info",
            "contact details",
            "how to reach",
        ],
    },
    CategoryRule {
        intent: Intent::WhatsApp,
        priority: 140,
        phrases: &[
            "whatsapp",
            "whats app",
            "message you",
            "text you",
            "direct message",
            "green button",
            "chat with you",
            "instant message",
        ],
    },
    CategoryRule {
        intent: Intent::Form,
        priority: 150,
        phrases: &[
            "forms",
            "contact form",
            "fill out",
            "submit",
            "send message",
            "inquiry",
            "enquiry",
        ],
    },
    CategoryRule {
        intent: Intent::Navigation,
        priority: 160,
        phrases: &[
            "navigate",
            "navigation",
            "menu",
            "pages",
            "where can i find",
            "find",
            "go to",
            "how to find",
            "website sections",
            "sitemap",
        ],
    },
    CategoryRule {
        intent: Intent::Technologies,
        priority: 170,
        phrases: &[
            "tech",
            "technologies",
            "stack",
            "framework",
            "language",
            "react",
            "javascript",
            "typescript",
            "built with",
            "tools",
            "do you use",
            "programming",
            "coding",
        ],
    },
    CategoryRule {
        intent: Intent::Shopify,
        priority: 180,
        phrases: &[
            "shopify",
            "ecommerce",
            "e-commerce",
            "online store",
            "shop",
            "store",
            "sell online",
            "products",
            "shopping cart",
            "checkout",
            "woocommerce",
            "selling",
            "inventory",
        ],
    },
    CategoryRule {
        intent: Intent::Redesign,
        priority: 190,
        phrases: &[
            "redesign",
            "rebuild",
            "improve",
            "existing",
            "already have",
            "current website",
            "old website",
            "makeover",
            "refresh",
            "revamp",
            "modernize",
            "outdated",
            "new look",
        ],
    },
    CategoryRule {
        intent: Intent::Remote,
        priority: 200,
        phrases: &[
            "remote",
            "location",
            "located",
            "based in",
            "where are you based",
            "worldwide",
            "international",
            "country",
            "timezone",
            "time zone",
            "distance",
            "work remotely",
            "anywhere",
        ],
    },
    CategoryRule {
        intent: Intent::Projects,
        priority: 210,
        phrases: &[
            "project",
            "projects",
            "portfolio",
            "example",
            "examples",
            "work",
            "past work",
            "show me",
            "sample",
            "samples",
            "case study",
            "case studies",
            "showcase",
            "what have you built",
        ],
    },
    CategoryRule {
        intent: Intent::About,
        priority: 220,
        phrases: &[
            "about",
            "who are you",
            "yourself",
            "introduce",
            "introduction",
            "tell me about",
            "bio",
            "biography",
            "developer behind",
            "creator",
        ],
    },
    CategoryRule {
        intent: Intent::Skills,
        priority: 230,
        phrases: &[
            "skill",
            "skills",
            "abilities",
            "capable",
            "expertise",
            "proficient",
            "specialize",
            "specialty",
            "competencies",
        ],
    },
    CategoryRule {
        intent: Intent::Reviews,
        priority: 240,
        phrases: &[
            "review",
            "reviews",
            "testimonial",
            "testimonials",
            "feedback",
            "client",
            "clients",
            "rating",
            "ratings",
            "people say",
            "recommendations",
            "references",
        ],
    },
    CategoryRule {
        intent: Intent::Thanks,
        priority: 250,
        phrases: &["thank", "thanks", "thx", "appreciate", "grateful", "cheers"],
    },
    CategoryRule {
        intent: Intent::Goodbye,
        priority: 260,
        phrases: &["bye", "goodbye", "see you", "later", "gotta go", "leaving", "cya"],
    },
];

//! Canned Responses
//!
//! Maps each intent to the text the chat widget shows. Text uses `**bold**`
//! markers and newlines; rendering is up to the caller.

use crate::core::classifier::Classification;
use crate::intents::Intent;

const GREETING: &str = "Hey there! 👋 I'm the studio assistant. Ask me about services, pricing, \
experience, how to get started, or anything else. What would you like to know?";

const AFFIRMATIVE: &str = "Great! What would you like to know more about? Feel free to ask about \
services, pricing, experience, timeline, or anything else!";

const NEGATIVE: &str = "No problem! If you have questions later, I'm here to help. You can also \
reach out on WhatsApp or through the contact form. 😊";

const EXPERIENCE: &str = "I have **3+ years of professional web development experience**! 🚀

In that time I've:
• Built business, personal and e-commerce websites
• Specialized in online stores
• Worked extensively with WordPress and Shopify
• Delivered projects for clients across many industries";

const PAYMENT: &str = "I accept several payment methods:

💳 **PayPal** - for international clients
📱 **Vodafone Cash** - for local payments
🏦 **Instapay** - fast local bank transfers
🏛️ **Bank Transfer** - direct wire transfers

Payment is usually split 50% upfront and 50% on completion. Flexible arrangements are possible.";

const BENEFITS: &str = "Here's what a professional website can do for your business:

📈 **Credibility** - look professional and trustworthy
💰 **More Leads** - turn visitors into customers around the clock
🌍 **Wider Reach** - be found by customers anywhere
🔍 **Visibility** - rank higher in search results
🏆 **Competitive Edge** - stand out from competitors";

const MOBILE: &str = "Absolutely! **Mobile optimization is included in every project.** 📱

Every site is fully responsive, designed mobile-first, touch-friendly and tested on real devices.";

const SERVICES: &str = "I offer professional web development services:

• **New Website Development** - custom sites built from scratch
• **Website Redesign** - turn an existing site into something modern and fast
• **E-commerce & Shopify** - online stores that convert
• **Landing Pages** - high-converting pages for campaigns and launches

Would you like details on any of these?";

const PRICING: &str = "There's no fixed price list. Every project is quoted on **your goals and \
needs**, so you only pay for what adds value.

Fill out the contact form or message me on WhatsApp for a custom quote!";

const PACKAGES: &str = "I don't sell pre-made packages. Every business is different, so we'll \
**build the solution that fits yours** instead of squeezing you into a tier.

Reach out through the contact form or WhatsApp to talk it through. 📱";

const PROCESS: &str = "Here's how we'll work together:

1️⃣ **Discovery** - your vision, goals and requirements
2️⃣ **Strategy** - a plan tailored to the project
3️⃣ **Design & Development** - building the site
4️⃣ **Review & Revisions** - refining until you're happy
5️⃣ **Launch** - your site goes live!";

const TIMELINE: &str = "Most projects take **1-8 weeks** depending on complexity:

• Landing page: 1-2 weeks
• Business website: 2-4 weeks
• E-commerce store: 3-6 weeks
• Complex projects: 6-8 weeks

Rush delivery is available for urgent projects. ⚡";

const REVISIONS: &str = "**Unlimited revisions** during development! ✨

We'll refine every detail until the site matches what you had in mind.";

const DOMAIN: &str = "Domains aren't included since they're bought from a registrar \
(GoDaddy, Namecheap and so on). 🌐

I'll **walk you through it for free**: picking a name, buying it, and connecting it to your new site. \
Domains usually cost around $10-15 a year.";

const STARTED: &str = "Getting started is easy! 🚀

**Option 1:** Fill out the contact form on this website.
**Option 2:** Message me on WhatsApp using the **green button** in the bottom left corner.

Once you reach out, I'll guide you through every step.";

const CONTACT: &str = "You can reach me through:

📧 **Email:** hello@example.com
📱 **WhatsApp:** the green button in the bottom left corner
📝 **Contact Form:** on the Contact page";

const WHATSAPP: &str = "To reach me on WhatsApp, **click the green WhatsApp button** in the \
**bottom left corner** of your screen. It opens a chat with me directly.

I typically reply within a few hours! 💬";

const FORM: &str = "To use the contact form:

1. Open the **Contact** page from the top menu, or scroll down on the homepage
2. Enter your **Name** and **Email** (required)
3. Pick a **Service** if you like (optional)
4. Describe your project in the **Message** field
5. Click **Send Message**

I'll get back to you soon. 📬";

const NAVIGATION: &str = "Here's how the site is organized:

🏠 **Home** - about, projects, skills and contact
💼 **Projects** - portfolio of completed websites
🛠️ **Services** - what I offer in detail
📧 **Contact** - contact form and details

Use the menu at the top of the page to move around.";

const TECHNOLOGIES: &str = "I work with a modern stack:

• **Frontend:** React, Next.js, TypeScript, Tailwind CSS
• **E-commerce:** Shopify and custom solutions
• **Backend:** Node.js and APIs
• **Performance:** optimized for speed and SEO";

const SHOPIFY: &str = "Yes! I build Shopify stores:

• Custom themes
• Store setup and configuration
• Product migration
• Payment and shipping setup
• App integrations

Shopify falls under the E-commerce service. 🛍️";

const REDESIGN: &str = "A redesign includes:

✨ A modern, fresh design
📱 Mobile responsiveness
⚡ Faster loading
🔍 SEO improvements
📦 Content migration";

const REMOTE: &str = "Yes, I work **100% remotely** with clients worldwide! 🌍

We can collaborate over video calls, WhatsApp, email and screen sharing, whatever the time zone.";

const PROJECTS: &str = "You can browse my portfolio on the **Projects** page!

Click \"Projects\" in the top menu or scroll down on the homepage to see featured work across \
different industries.";

const ABOUT: &str = "I'm a web developer with 3+ years of experience building modern, \
high-performance websites that help businesses succeed online. I work remotely with clients \
worldwide.

Check out the About section on the homepage to learn more! 💬";

const SKILLS: &str = "My main skills:

**Frontend:** React, TypeScript, Next.js, Tailwind CSS, Framer Motion
**Backend & E-commerce:** Node.js, Shopify, WordPress, REST APIs
**Tools:** Git, Figma, Vercel

The Skills section on the homepage has the full list.";

const REVIEWS: &str = "Client testimonials are on the homepage!

Scroll past the projects section to read what clients say about working with me. ⭐";

const THANKS: &str = "You're welcome! 😊 Is there anything else you'd like to know?";

const GOODBYE: &str =
    "Goodbye! 👋 Come back anytime you have questions. Good luck with your project!";

const DEFAULT: &str = "I'm not sure about that one, but I'd love to help!

Here's what I can tell you about:
• **Services** - what I offer
• **Experience** - my background
• **Pricing** - how pricing works
• **Payment** - how to pay
• **Timeline** - how long projects take
• **Getting Started** - how to begin
• **Contact** - ways to reach me

What would you like to know?";

/// Response text for an intent
pub fn respond(intent: Intent) -> &'static str {
    match intent {
        Intent::Greeting => GREETING,
        Intent::Affirmative => AFFIRMATIVE,
        Intent::Negative => NEGATIVE,
        Intent::Experience => EXPERIENCE,
        Intent::Payment => PAYMENT,
        Intent::Benefits => BENEFITS,
        Intent::Mobile => MOBILE,
        Intent::Services => SERVICES,
        Intent::Pricing => PRICING,
        Intent::Packages => PACKAGES,
        Intent::Process => PROCESS,
        Intent::Timeline => TIMELINE,
        Intent::Revisions => REVISIONS,
        Intent::Domain => DOMAIN,
        Intent::Started => STARTED,
        Intent::Contact => CONTACT,
        Intent::WhatsApp => WHATSAPP,
        Intent::Form => FORM,
        Intent::Navigation => NAVIGATION,
        Intent::Technologies => TECHNOLOGIES,
        Intent::Shopify => SHOPIFY,
        Intent::Redesign => REDESIGN,
        Intent::Remote => REMOTE,
        Intent::Projects => PROJECTS,
        Intent::About => ABOUT,
        Intent::Skills => SKILLS,
        Intent::Reviews => REVIEWS,
        Intent::Thanks => THANKS,
        Intent::Goodbye => GOODBYE,
        Intent::Default => DEFAULT,
    }
}

/// Response text for a classified message.
///
/// Contact questions that mention the form get the form walkthrough.
pub fn respond_to(classification: &Classification) -> &'static str {
    match classification.intent {
        Intent::Contact if mentions_form(&classification.normalized) => FORM,
        intent => respond(intent),
    }
}

fn mentions_form(normalized: &str) -> bool {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| w == "form" || w == "forms")
}

//! Everything the page says, as literal data.

use crate::error::Result;
use crate::reveal::{staggered, validate_stagger, ContentBlock, Stagger};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecentProject {
    pub title: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub images: [&'static str; 3],
    pub delay: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub categories: &'static [&'static str],
    pub services: &'static str,
    pub delay: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

pub const BRAND: &str = "FlowBIT";

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Work", anchor: "#portfolio" },
    NavLink { label: "Services", anchor: "#services" },
    NavLink { label: "Testimonials", anchor: "#testimonials" },
    NavLink { label: "Pricing", anchor: "#pricing" },
    NavLink { label: "FAQ", anchor: "#faq" },
];

pub const HERO_TITLE: &str = "We design and build MVPs founders are proud to launch";
pub const HERO_SUBTITLE: &str = "Product design, web and mobile development for early-stage startups. From idea to a shipped product in weeks, not quarters.";
pub const HERO_STAGGER: Stagger = Stagger::new(0.0, 0.1);

pub static RECENT_WORK: [RecentProject; 6] = [
    RecentProject { title: "Horoscope AI", image: "horoscope.PNG" },
    RecentProject { title: "CRM Dashboard", image: "crm.png" },
    RecentProject { title: "Don Platform", image: "don.png" },
    RecentProject { title: "Email AI Assistant", image: "emailai.png" },
    RecentProject { title: "Nuro Deep Analytics", image: "nurodeep.png" },
    RecentProject { title: "Outreach Pro", image: "outreach.png" },
];
pub const RECENT_WORK_STAGGER: Stagger = Stagger::new(0.0, 0.1);

pub static WHY_US: [Feature; 4] = [
    Feature {
        icon: "⚡",
        title: "Fast delivery",
        description: "A working MVP in four to eight weeks, with weekly demos so you always know where things stand.",
    },
    Feature {
        icon: "🎯",
        title: "Product thinking",
        description: "We question scope and push for what users actually need before a single screen is designed.",
    },
    Feature {
        icon: "🧩",
        title: "Design and code in one team",
        description: "No hand-off gaps. The people who design your product are the people who build it.",
    },
    Feature {
        icon: "🔒",
        title: "NDA by default",
        description: "Every engagement starts under NDA and you own all of the code and design files.",
    },
];
pub const WHY_US_STAGGER: Stagger = Stagger::new(0.1, 0.1);

pub static HOW_IT_WORKS: [Step; 4] = [
    Step {
        number: "01",
        title: "Discovery call",
        description: "We learn about your idea, your users and your deadline, and agree on what the first release must do.",
    },
    Step {
        number: "02",
        title: "Design sprint",
        description: "Wireframes, then high-fidelity screens, reviewed with you until the flow feels right.",
    },
    Step {
        number: "03",
        title: "Build",
        description: "Weekly releases to a staging environment you can click through and share with early users.",
    },
    Step {
        number: "04",
        title: "Launch and iterate",
        description: "We ship to production, watch how people use it and help you plan what comes next.",
    },
];
pub const HOW_IT_WORKS_STAGGER: Stagger = Stagger::new(0.2, 0.15);

pub static SERVICES: [ServiceItem; 5] = [
    ServiceItem {
        title: "Websites",
        images: ["services/websites-1.png", "services/websites-2.png", "services/websites-3.png"],
        delay: 0.2,
    },
    ServiceItem {
        title: "Mobile Apps",
        images: ["services/apps-1.png", "services/apps-2.png", "services/apps-3.png"],
        delay: 0.3,
    },
    ServiceItem {
        title: "Product Design",
        images: ["services/product-1.png", "services/product-2.png", "services/product-3.png"],
        delay: 0.4,
    },
    ServiceItem {
        title: "Logo Design",
        images: ["services/logo-1.png", "services/logo-2.png", "services/logo-3.png"],
        delay: 0.5,
    },
    ServiceItem {
        title: "Branding",
        images: ["services/branding-1.png", "services/branding-2.png", "services/branding-3.png"],
        delay: 0.6,
    },
];

pub const PORTFOLIO_TITLE: &str = "MVP's Built for Founders and Startups";
pub const PORTFOLIO_SUBTITLE: &str = "We sign NDAs with all clients, so most projects aren't public and we can't share much code. If a preview exists, it's usually just the frontend clone.";

pub static PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        title: "Horoscope AI",
        description: "An AI-powered horoscope application that provides personalized astrological insights and predictions with modern design and intuitive user experience.",
        image: "horoscope.PNG",
        categories: &["AI", "Mobile App", "Astrology"],
        services: "App Design - AI Integration - UX/UI",
        delay: 0.2,
    },
    PortfolioItem {
        title: "CRM Dashboard",
        description: "A comprehensive customer relationship management system with advanced analytics, lead tracking, and automated workflows for sales teams.",
        image: "crm.png",
        categories: &["SaaS", "CRM", "Analytics"],
        services: "Web Design - Dashboard Design - Data Visualization",
        delay: 0.3,
    },
    PortfolioItem {
        title: "Don Platform",
        description: "A modern business platform designed to streamline operations and enhance productivity with clean interfaces and powerful functionality.",
        image: "don.png",
        categories: &["Business", "Platform", "Productivity"],
        services: "Web Design - Platform Development - UX Strategy",
        delay: 0.4,
    },
    PortfolioItem {
        title: "Email AI Assistant",
        description: "An intelligent email management system that uses AI to automate responses, categorize emails, and improve communication efficiency.",
        image: "emailai.png",
        categories: &["AI", "Email", "Automation"],
        services: "AI Integration - Email Design - Automation",
        delay: 0.5,
    },
    PortfolioItem {
        title: "Nuro Deep Analytics",
        description: "Advanced analytics platform providing deep insights into business data with interactive visualizations and predictive modeling capabilities.",
        image: "nurodeep.png",
        categories: &["Analytics", "Data Science", "SaaS"],
        services: "Data Visualization - Analytics Design - Dashboard",
        delay: 0.6,
    },
    PortfolioItem {
        title: "Outreach Pro",
        description: "A comprehensive outreach and marketing automation platform designed to help businesses scale their customer acquisition efforts.",
        image: "outreach.png",
        categories: &["Marketing", "Automation", "SaaS"],
        services: "Web Design - Marketing Automation - UX Design",
        delay: 0.7,
    },
];

pub const TESTIMONIALS_TITLE: &str = "Hear why people recommend us";
pub const TESTIMONIALS_SUBTITLE: &str = "Your satisfaction is our top priority. We're honored to share the experiences and feedback from the founders we've worked with.";
pub const TESTIMONIALS_STAGGER: Stagger = Stagger::new(0.0, 0.1);

pub static TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Anubhav",
        role: "Co-Founder and CTO",
        company: "Nuro AI",
        content: "I've worked with agencies before, but none have matched the level of dedication and detail FlowBIT brought to the table. From our first call, they understood our vision, user needs, and brand identity. They designed and built an MVP that not only looked beautiful but also functioned without a hitch.",
        image: "anubhav.jpeg",
    },
    Testimonial {
        name: "Sourav M",
        role: "Founder",
        company: "Wealth AI",
        content: "We needed a quick launch and FlowBIT delivered big time. Their UI/UX sense is unmatched.",
        image: "sourav.jpeg",
    },
    Testimonial {
        name: "David",
        role: "Founder",
        company: "Mono",
        content: "We were under pressure to launch fast, and FlowBIT came through with flying colors. Their approach to product development is lean, focused, and insanely efficient.",
        image: "daveed.jpeg",
    },
    Testimonial {
        name: "Mira",
        role: "Co-Founder and CEO",
        company: "Planirium",
        content: "FlowBIT didn't just build what we asked. They questioned, iterated, and improved it. We were struggling with defining our product scope, but their clarity and product thinking helped us focus on what actually mattered to users.",
        image: "MIRA.jpeg",
    },
    Testimonial {
        name: "Shelina",
        role: "Founder and CEO",
        company: "Flexfi",
        content: "What stood out to me about FlowBIT was how invested they became in our mission. They were brainstorming ideas, challenging assumptions, and proactively suggesting improvements.",
        image: "shelina.jpeg",
    },
    Testimonial {
        name: "Raghu",
        role: "Founder",
        company: "Mono",
        content: "We were under pressure to launch fast, and FlowBIT came through with flying colors. Their approach to product development is lean, focused, and insanely efficient.",
        image: "raghu.jpeg",
    },
];

pub const PRICING_STAGGER: Stagger = Stagger::new(0.2, 0.1);

pub static PRICING: [PricingTier; 3] = [
    PricingTier {
        name: "Landing Page",
        price: "$2,500",
        cadence: "one-time",
        summary: "A conversion-focused marketing site to validate your idea.",
        features: &[
            "Custom design, up to 5 sections",
            "Responsive build",
            "Copywriting review",
            "Delivered in 2 weeks",
        ],
        cta: "Start a landing page",
        highlighted: false,
    },
    PricingTier {
        name: "MVP",
        price: "$9,500",
        cadence: "per project",
        summary: "Design and development of your first product release.",
        features: &[
            "Product discovery workshop",
            "UX/UI design for web or mobile",
            "Full-stack development",
            "Launch support",
            "Delivered in 6 to 8 weeks",
        ],
        cta: "Build my MVP",
        highlighted: true,
    },
    PricingTier {
        name: "Product Partner",
        price: "$6,000",
        cadence: "per month",
        summary: "An ongoing design and engineering team for growing products.",
        features: &[
            "Dedicated designer and developer",
            "Weekly releases",
            "Roadmap planning",
            "Pause or cancel anytime",
        ],
        cta: "Talk to us",
        highlighted: false,
    },
];

pub static FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "How long does an MVP take?",
        answer: "Most MVPs ship in six to eight weeks. Smaller scopes like a landing page or a clickable prototype take one to two weeks.",
    },
    FaqEntry {
        question: "Do I own the code and designs?",
        answer: "Yes. Everything we produce is yours from day one, including source code, design files and deployment credentials.",
    },
    FaqEntry {
        question: "Can you work with my existing team?",
        answer: "Absolutely. We regularly join in-house teams, either owning a feature end to end or supporting your engineers with design.",
    },
    FaqEntry {
        question: "Why can't I see more of your code?",
        answer: "We sign NDAs with every client, so most projects are private. Where a preview exists it's usually a frontend clone.",
    },
    FaqEntry {
        question: "What happens after launch?",
        answer: "You can keep us on as a product partner, or we hand over documentation and walk your team through the codebase.",
    },
];
pub const FAQ_STAGGER: Stagger = Stagger::new(0.1, 0.1);

pub const FOOTER_BLURB: &str = "Design and development studio for founders building their first product.";
pub const CONTACT_EMAIL: &str = "hello@flowbit.studio";

pub static FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        heading: "Studio",
        links: &[
            NavLink { label: "Work", anchor: "#portfolio" },
            NavLink { label: "Process", anchor: "#how-it-works" },
            NavLink { label: "Pricing", anchor: "#pricing" },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavLink { label: "Why us", anchor: "#why-us" },
            NavLink { label: "Testimonials", anchor: "#testimonials" },
            NavLink { label: "FAQ", anchor: "#faq" },
        ],
    },
];

pub fn services_blocks() -> Vec<ContentBlock<&'static ServiceItem>> {
    staggered(SERVICES.iter(), |_, item| item.delay)
}

pub fn portfolio_blocks() -> Vec<ContentBlock<&'static PortfolioItem>> {
    staggered(PORTFOLIO.iter(), |_, item| item.delay)
}

/// Runs the stagger checks over every section's content.
pub fn validate_all() -> Result<()> {
    validate_stagger("hero", &HERO_STAGGER.blocks(0..3))?;
    validate_stagger("recent-work", &RECENT_WORK_STAGGER.blocks(RECENT_WORK.iter()))?;
    validate_stagger("why-us", &WHY_US_STAGGER.blocks(WHY_US.iter()))?;
    validate_stagger("how-it-works", &HOW_IT_WORKS_STAGGER.blocks(HOW_IT_WORKS.iter()))?;
    validate_stagger("services", &services_blocks())?;
    validate_stagger("portfolio", &portfolio_blocks())?;
    validate_stagger("testimonials", &TESTIMONIALS_STAGGER.blocks(TESTIMONIALS.iter()))?;
    validate_stagger("pricing", &PRICING_STAGGER.blocks(PRICING.iter()))?;
    validate_stagger("faq", &FAQ_STAGGER.blocks(FAQ.iter()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{sequence, RevealState};

    #[test]
    fn all_configured_ladders_are_valid() {
        assert!(validate_all().is_ok());
    }

    #[test]
    fn portfolio_gallery_keeps_its_delays() {
        let delays: Vec<f64> = portfolio_blocks().iter().map(|b| b.reveal_delay).collect();
        assert_eq!(delays, vec![0.2, 0.3, 0.4, 0.5, 0.6, 0.7]);
    }

    #[test]
    fn services_ladder_starts_at_a_fifth_of_a_second() {
        let blocks = services_blocks();
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0].reveal_delay, 0.2);
        assert_eq!(blocks[4].reveal_delay, 0.6);
        assert_eq!(blocks[2].payload.title, "Product Design");
    }

    #[test]
    fn gallery_reveals_in_place_when_triggered() {
        let blocks = portfolio_blocks();
        let hidden = sequence(&blocks, RevealState::NotObserved);
        assert!(hidden.iter().all(|i| !i.visible));

        let shown = sequence(&blocks, RevealState::Revealed);
        for (block, instruction) in blocks.iter().zip(shown) {
            assert!(instruction.visible);
            assert_eq!(instruction.applied_delay, block.payload.delay);
        }
    }

    #[test]
    fn exactly_one_highlighted_pricing_tier() {
        assert_eq!(PRICING.iter().filter(|t| t.highlighted).count(), 1);
    }

    #[test]
    fn nav_links_point_at_sections() {
        assert!(NAV_LINKS.iter().all(|l| l.anchor.starts_with('#')));
        assert!(FOOTER_COLUMNS.iter().flat_map(|c| c.links).all(|l| l.anchor.starts_with('#')));
    }
}

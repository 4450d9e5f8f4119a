//! Static site content.
//!
//! Every list here is a compiled-in constant. Order is significant: it is the
//! order the cards appear on screen. Nothing in this module allocates or can
//! fail.

use crate::glyph::Glyph;

/// A service offered by the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    /// Card heading.
    pub title: &'static str,
    /// One-sentence summary.
    pub description: &'static str,
    /// Icon shown in the card tile.
    pub icon: Glyph,
}

/// A "why choose us" selling point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueProposition {
    /// Heading.
    pub title: &'static str,
    /// One-sentence summary.
    pub description: &'static str,
    /// Icon.
    pub icon: Glyph,
}

/// One step of the delivery process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    /// Ordinal label, e.g. `"01"`.
    pub step: &'static str,
    /// Heading.
    pub title: &'static str,
    /// One-sentence summary.
    pub description: &'static str,
    /// Icon.
    pub icon: Glyph,
}

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioItem {
    /// Project name.
    pub title: &'static str,
    /// Category tag revealed on hover.
    pub category: &'static str,
    /// Image path, relative to the site root.
    pub image: &'static str,
}

/// A client review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    /// Reviewer name.
    pub name: &'static str,
    /// Reviewer role and company.
    pub role: &'static str,
    /// Quote.
    pub content: &'static str,
    /// Star rating out of five.
    pub rating: u8,
}

impl Testimonial {
    /// First character of the reviewer's name, shown in the avatar tile.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// One entry per star to draw.
    pub fn stars(&self) -> std::ops::Range<usize> {
        0..usize::from(self.rating)
    }
}

/// The content categories exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// [`SERVICES`]
    Services,
    /// [`VALUE_PROPOSITIONS`]
    ValuePropositions,
    /// [`PROCESS_STEPS`]
    ProcessSteps,
    /// [`PORTFOLIO_ITEMS`]
    Portfolio,
    /// [`TESTIMONIALS`]
    Testimonials,
    /// [`TECHNOLOGIES`]
    Technologies,
}

impl ContentKind {
    /// All categories.
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Services,
        ContentKind::ValuePropositions,
        ContentKind::ProcessSteps,
        ContentKind::Portfolio,
        ContentKind::Testimonials,
        ContentKind::Technologies,
    ];
}

/// Number of services listed in the footer column.
pub const FOOTER_SERVICE_COUNT: usize = 5;

/// Number of testimonials shown on the page.
pub const FEATURED_TESTIMONIAL_COUNT: usize = 2;

/// Services grid, in display order.
pub const SERVICES: &[Service] = &[
    Service {
        title: "Data Entry & Back-Office",
        description: "Accurate and efficient data management and back-office support services.",
        icon: Glyph::Database,
    },
    Service {
        title: "Website Designing",
        description: "Creative and responsive website designs that capture your brand essence.",
        icon: Glyph::Layout,
    },
    Service {
        title: "UI/UX Designing",
        description: "User-centric design interfaces for seamless digital experiences.",
        icon: Glyph::Palette,
    },
    Service {
        title: "Web Development",
        description: "Robust and scalable websites built with modern technologies.",
        icon: Glyph::Globe,
    },
    Service {
        title: "Web App Development",
        description: "Custom web applications tailored to your specific business needs.",
        icon: Glyph::Code,
    },
    Service {
        title: "Data Analytics",
        description: "Transforming raw data into actionable business insights.",
        icon: Glyph::BarChart,
    },
    Service {
        title: "Graphic Designing",
        description: "Visual communication that makes your brand stand out.",
        icon: Glyph::Palette,
    },
    Service {
        title: "Digital Marketing",
        description: "Comprehensive marketing strategies to grow your online presence.",
        icon: Glyph::Megaphone,
    },
    Service {
        title: "SEO Optimization",
        description: "Improving your search rankings to drive organic traffic.",
        icon: Glyph::Search,
    },
    Service {
        title: "Social Media Promotion",
        description: "Engaging your audience across all major social platforms.",
        icon: Glyph::Share,
    },
    Service {
        title: "GMB Optimization",
        description: "Optimizing your Google My Business for local search dominance.",
        icon: Glyph::MapPin,
    },
];

/// Selling points. Not rendered on the current page.
pub const VALUE_PROPOSITIONS: &[ValueProposition] = &[
    ValueProposition {
        title: "Experienced Team",
        description: "Certified professionals with 5+ years of industry experience.",
        icon: Glyph::Users,
    },
    ValueProposition {
        title: "Affordable Pricing",
        description: "High-quality services at competitive market rates.",
        icon: Glyph::Zap,
    },
    ValueProposition {
        title: "Quality Driven",
        description: "Rigorous quality checks to ensure excellence in every delivery.",
        icon: Glyph::ShieldCheck,
    },
    ValueProposition {
        title: "Timely Delivery",
        description: "We value your time and adhere to strict project timelines.",
        icon: Glyph::Clock,
    },
    ValueProposition {
        title: "24/7 Support",
        description: "Round-the-clock assistance for all your queries and needs.",
        icon: Glyph::Headset,
    },
    ValueProposition {
        title: "100% Satisfaction",
        description: "Our goal is to exceed client expectations every single time.",
        icon: Glyph::CheckCircle,
    },
];

/// Delivery process, strictly ordered by `step`.
pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Requirement Discussion",
        description: "We start by understanding your vision and business goals.",
        icon: Glyph::MessageSquare,
    },
    ProcessStep {
        step: "02",
        title: "Strategy & Planning",
        description: "Creating a detailed roadmap for your project's success.",
        icon: Glyph::Lightbulb,
    },
    ProcessStep {
        step: "03",
        title: "Design & Development",
        description: "Bringing ideas to life with precision and creativity.",
        icon: Glyph::Settings,
    },
    ProcessStep {
        step: "04",
        title: "Testing & Quality Check",
        description: "Ensuring everything works perfectly before launch.",
        icon: Glyph::Shield,
    },
    ProcessStep {
        step: "05",
        title: "Delivery & Launch",
        description: "Deploying your solution to the real world.",
        icon: Glyph::Rocket,
    },
    ProcessStep {
        step: "06",
        title: "Ongoing Support",
        description: "Continuous maintenance and updates for long-term growth.",
        icon: Glyph::Headset,
    },
];

/// Portfolio gallery, in display order.
pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Sales Dashboard",
        category: "Data Analytics",
        image: "/sales_dashboard.png",
    },
    PortfolioItem {
        title: "Swiggy Dashboard",
        category: "Data Analytics",
        image: "/swiggy_dashboard.png",
    },
    PortfolioItem {
        title: "Enterprise Web App",
        category: "Web Application",
        image: "/Screenshot (18).png",
    },
    PortfolioItem {
        title: "E-commerce Platform",
        category: "Web Development",
        image: "/e commerce plateform.png",
    },
    PortfolioItem {
        title: "Fintech App UI",
        category: "UI/UX Design",
        image: "/uiux.png",
    },
    PortfolioItem {
        title: "Brand Identity",
        category: "Graphic Design",
        image: "/brand identity.png",
    },
];

/// Client reviews. Only the first [`FEATURED_TESTIMONIAL_COUNT`] are shown.
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rajesh Kumar",
        role: "CEO, TechFlow Solutions",
        content: "W Tech IT Solution transformed our digital presence. Their attention to detail and technical expertise is unmatched.",
        rating: 5,
    },
    Testimonial {
        name: "Anjali Sharma",
        role: "Founder, GreenEarth NGO",
        content: "The web application they developed for us has streamlined our entire operation. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Vikram Singh",
        role: "Marketing Head, Global Retail",
        content: "Their SEO strategies helped us achieve a 200% increase in organic traffic within just 6 months.",
        rating: 5,
    },
    Testimonial {
        name: "Priya Patel",
        role: "Director, Creative Hub",
        content: "Professional, timely, and creative. They truly understand the meaning of customer satisfaction.",
        rating: 5,
    },
];

/// Technology stack labels. Not rendered on the current page.
pub const TECHNOLOGIES: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Node.js",
    "MySQL",
    "Python",
    "Figma",
    "Canva",
    "Power BI",
    "SEO Tools",
    "Bootstrap",
    "Tailwind CSS",
];

/// All services, in display order.
pub fn services() -> &'static [Service] {
    SERVICES
}

/// All value propositions, in display order.
pub fn value_propositions() -> &'static [ValueProposition] {
    VALUE_PROPOSITIONS
}

/// All process steps, in order.
pub fn process_steps() -> &'static [ProcessStep] {
    PROCESS_STEPS
}

/// All portfolio items, in display order.
pub fn portfolio() -> &'static [PortfolioItem] {
    PORTFOLIO_ITEMS
}

/// All testimonials.
pub fn testimonials() -> &'static [Testimonial] {
    TESTIMONIALS
}

/// Technology labels.
pub fn technologies() -> &'static [&'static str] {
    TECHNOLOGIES
}

/// Services listed in the footer column.
pub fn footer_services() -> &'static [Service] {
    &SERVICES[..FOOTER_SERVICE_COUNT.min(SERVICES.len())]
}

/// Testimonials shown on the page.
pub fn featured_testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS[..FEATURED_TESTIMONIAL_COUNT.min(TESTIMONIALS.len())]
}

/// Record count for a category.
pub fn len(kind: ContentKind) -> usize {
    match kind {
        ContentKind::Services => SERVICES.len(),
        ContentKind::ValuePropositions => VALUE_PROPOSITIONS.len(),
        ContentKind::ProcessSteps => PROCESS_STEPS.len(),
        ContentKind::Portfolio => PORTFOLIO_ITEMS.len(),
        ContentKind::Testimonials => TESTIMONIALS.len(),
        ContentKind::Technologies => TECHNOLOGIES.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_sizes() {
        assert_eq!(len(ContentKind::Services), 11);
        assert_eq!(len(ContentKind::ValuePropositions), 6);
        assert_eq!(len(ContentKind::ProcessSteps), 6);
        assert_eq!(len(ContentKind::Portfolio), 6);
        assert_eq!(len(ContentKind::Testimonials), 4);
        assert_eq!(len(ContentKind::Technologies), 13);
    }

    #[test]
    fn every_list_is_non_empty() {
        for kind in ContentKind::ALL {
            assert!(len(kind) > 0, "{kind:?} is empty");
        }
    }

    #[test]
    fn every_field_is_populated() {
        for s in services() {
            assert!(!s.title.is_empty() && !s.description.is_empty());
        }
        for v in value_propositions() {
            assert!(!v.title.is_empty() && !v.description.is_empty());
        }
        for p in process_steps() {
            assert!(!p.step.is_empty() && !p.title.is_empty() && !p.description.is_empty());
        }
        for p in portfolio() {
            assert!(!p.title.is_empty() && !p.category.is_empty() && p.image.starts_with('/'));
        }
        for t in testimonials() {
            assert!(!t.name.is_empty() && !t.role.is_empty() && !t.content.is_empty());
            assert_eq!(t.rating, 5);
        }
        assert!(technologies().iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn process_steps_are_strictly_ordered() {
        let labels: Vec<_> = process_steps().iter().map(|p| p.step).collect();
        assert_eq!(labels, vec!["01", "02", "03", "04", "05", "06"]);
    }

    #[test]
    fn footer_shows_first_five_services_in_order() {
        let titles: Vec<_> = footer_services().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Data Entry & Back-Office",
                "Website Designing",
                "UI/UX Designing",
                "Web Development",
                "Web App Development",
            ]
        );
    }

    #[test]
    fn only_two_testimonials_are_featured() {
        let names: Vec<_> = featured_testimonials().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Rajesh Kumar", "Anjali Sharma"]);
    }

    #[test]
    fn testimonial_initial_and_stars() {
        let review = &testimonials()[1];
        assert_eq!(review.initial(), 'A');
        assert_eq!(review.stars().count(), 5);
    }

    #[test]
    fn titles_are_unique_keys() {
        // Titles double as stable element identities for reveal latches.
        let mut titles: Vec<_> = services().iter().map(|s| s.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), services().len());

        let mut items: Vec<_> = portfolio().iter().map(|p| p.title).collect();
        items.sort_unstable();
        items.dedup();
        assert_eq!(items.len(), portfolio().len());
    }
}

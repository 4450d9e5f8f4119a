//! Symbolic glyph names.
//!
//! Content records refer to icons by name only. The presentation layer owns
//! the lookup table that turns a [`Glyph`] into drawable SVG data, so this
//! enum carries no behavior beyond its name.

use serde::{Deserialize, Serialize};

/// A small vector icon from the site's icon set, referenced by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Glyph {
    // Services
    Database,
    Layout,
    Palette,
    Globe,
    Code,
    BarChart,
    Megaphone,
    Search,
    Share,
    MapPin,
    // Value propositions
    Users,
    Zap,
    ShieldCheck,
    Clock,
    Headset,
    CheckCircle,
    // Process
    MessageSquare,
    Lightbulb,
    Settings,
    Shield,
    Rocket,
    // Page chrome
    Phone,
    Mail,
    ChevronRight,
    Menu,
    X,
    Star,
    ExternalLink,
    ArrowRight,
    Sparkles,
    Send,
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
}

impl Glyph {
    /// Every glyph, in declaration order.
    pub const ALL: &'static [Glyph] = &[
        Glyph::Database,
        Glyph::Layout,
        Glyph::Palette,
        Glyph::Globe,
        Glyph::Code,
        Glyph::BarChart,
        Glyph::Megaphone,
        Glyph::Search,
        Glyph::Share,
        Glyph::MapPin,
        Glyph::Users,
        Glyph::Zap,
        Glyph::ShieldCheck,
        Glyph::Clock,
        Glyph::Headset,
        Glyph::CheckCircle,
        Glyph::MessageSquare,
        Glyph::Lightbulb,
        Glyph::Settings,
        Glyph::Shield,
        Glyph::Rocket,
        Glyph::Phone,
        Glyph::Mail,
        Glyph::ChevronRight,
        Glyph::Menu,
        Glyph::X,
        Glyph::Star,
        Glyph::ExternalLink,
        Glyph::ArrowRight,
        Glyph::Sparkles,
        Glyph::Send,
        Glyph::Facebook,
        Glyph::Twitter,
        Glyph::Instagram,
        Glyph::Linkedin,
    ];

    /// Icon-set name, also used as a CSS hook (`glyph-<name>`).
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Database => "database",
            Glyph::Layout => "layout",
            Glyph::Palette => "palette",
            Glyph::Globe => "globe",
            Glyph::Code => "code",
            Glyph::BarChart => "bar-chart",
            Glyph::Megaphone => "megaphone",
            Glyph::Search => "search",
            Glyph::Share => "share",
            Glyph::MapPin => "map-pin",
            Glyph::Users => "users",
            Glyph::Zap => "zap",
            Glyph::ShieldCheck => "shield-check",
            Glyph::Clock => "clock",
            Glyph::Headset => "headset",
            Glyph::CheckCircle => "check-circle",
            Glyph::MessageSquare => "message-square",
            Glyph::Lightbulb => "lightbulb",
            Glyph::Settings => "settings",
            Glyph::Shield => "shield",
            Glyph::Rocket => "rocket",
            Glyph::Phone => "phone",
            Glyph::Mail => "mail",
            Glyph::ChevronRight => "chevron-right",
            Glyph::Menu => "menu",
            Glyph::X => "x",
            Glyph::Star => "star",
            Glyph::ExternalLink => "external-link",
            Glyph::ArrowRight => "arrow-right",
            Glyph::Sparkles => "sparkles",
            Glyph::Send => "send",
            Glyph::Facebook => "facebook",
            Glyph::Twitter => "twitter",
            Glyph::Instagram => "instagram",
            Glyph::Linkedin => "linkedin",
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Glyph::ALL.iter().map(|g| g.name()).collect();
        assert_eq!(names.len(), Glyph::ALL.len());
    }

    #[test]
    fn serde_name_matches_display_name() {
        for glyph in Glyph::ALL {
            let encoded = toml::Value::try_from(glyph).expect("glyph serializes");
            assert_eq!(encoded.as_str(), Some(glyph.name()));
        }
    }
}

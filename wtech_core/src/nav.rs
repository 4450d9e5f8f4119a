//! Navigation targets, nav bar style and the mobile menu toggle.

use tracing::debug;

/// Scroll offset, in CSS pixels, past which the nav bar turns solid.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// An in-page navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Link label.
    pub name: &'static str,
    /// Anchor, including the leading `#`.
    pub href: &'static str,
}

impl NavLink {
    /// Element id the anchor points at (the href without `#`).
    pub fn target_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

/// Navigation targets shared by the desktop bar, the mobile overlay and the
/// footer's quick links.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "Process", href: "#process" },
    NavLink { name: "Portfolio", href: "#portfolio" },
    NavLink { name: "Contact", href: "#contact" },
];

/// Call-to-action anchor used by "Start a Project" / "Get Started Now".
pub const CONTACT_CTA: NavLink = NavLink { name: "Start a Project", href: "#contact" };

/// Visual treatment of the fixed navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBarStyle {
    /// Transparent background, tall padding. Used at the top of the page.
    Transparent,
    /// Solid blurred background, compact padding. Used once scrolled.
    Solid,
}

impl NavBarStyle {
    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            NavBarStyle::Transparent => "nav nav-transparent",
            NavBarStyle::Solid => "nav nav-solid",
        }
    }
}

/// Tracks whether the page has scrolled past the threshold.
///
/// The style is a pure function of the latest offset: `offset > threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBar {
    threshold: f64,
    scrolled: bool,
}

impl NavBar {
    /// New bar at the top of the page.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Record the current vertical scroll offset. Returns `true` when the
    /// style changed.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        if changed {
            debug!(offset, scrolled, "nav bar style changed");
        }
        changed
    }

    /// Whether the page is past the threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Current style.
    pub fn style(&self) -> NavBarStyle {
        if self.scrolled {
            NavBarStyle::Solid
        } else {
            NavBarStyle::Transparent
        }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

/// The full-screen mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the overlay.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "mobile menu toggled");
    }

    /// Close the overlay.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A link in the overlay was chosen: close and hand back the anchor so
    /// the browser's default anchor scroll can proceed.
    pub fn follow(&mut self, link: &NavLink) -> &'static str {
        self.close();
        debug!(href = link.href, "mobile menu link followed");
        link.href
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut bar = NavBar::default();
        bar.observe(49.0);
        assert_eq!(bar.style(), NavBarStyle::Transparent);
        bar.observe(50.0);
        assert_eq!(bar.style(), NavBarStyle::Transparent);
        bar.observe(50.5);
        assert_eq!(bar.style(), NavBarStyle::Solid);
        bar.observe(51.0);
        assert_eq!(bar.style(), NavBarStyle::Solid);
    }

    #[test]
    fn style_follows_offset_not_history() {
        let mut bar = NavBar::default();
        assert_eq!(bar.style(), NavBarStyle::Transparent);
        assert!(bar.observe(600.0));
        assert_eq!(bar.style(), NavBarStyle::Solid);
        assert!(bar.observe(0.0));
        assert_eq!(bar.style(), NavBarStyle::Transparent);
        assert!(!bar.observe(10.0));
    }

    #[test]
    fn observe_reports_only_flips() {
        let mut bar = NavBar::new(100.0);
        assert!(!bar.observe(20.0));
        assert!(bar.observe(150.0));
        assert!(!bar.observe(900.0));
        assert!(bar.is_scrolled());
    }

    #[test]
    fn every_link_closes_the_menu() {
        for link in NAV_LINKS {
            let mut menu = MobileMenu::default();
            menu.toggle();
            assert!(menu.is_open());
            assert_eq!(menu.follow(link), link.href);
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn cta_closes_the_menu() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert_eq!(menu.follow(&CONTACT_CTA), "#contact");
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_twice_is_closed() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn links_target_page_sections() {
        let ids: Vec<_> = NAV_LINKS.iter().map(NavLink::target_id).collect();
        assert_eq!(ids, vec!["about", "services", "process", "portfolio", "contact"]);
    }
}

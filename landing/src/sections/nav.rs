// Top navigation and mobile menu overlay
// Developed by the W Tech IT Solution web team (c)2025

use leptos::prelude::*;
use wtech_core::glyph::Glyph;
use wtech_core::motion::{MotionPreset, stagger, transition_style};
use wtech_core::nav::{CONTACT_CTA, MobileMenu, NAV_LINKS, NavBar};

use super::Brand;
use crate::icons::GlyphIcon;

/// Fixed top bar: brand, desktop links, contact CTA and the mobile toggle.
#[component]
pub fn Nav(nav: RwSignal<NavBar>, menu: RwSignal<MobileMenu>) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(i, link)| {
            view! {
                <a
                    href=link.href
                    class="nav-link"
                    style=transition_style(MotionPreset::FadeUp, stagger(i))
                >
                    {link.name}
                    <span class="nav-link-underline"></span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class=move || nav.with(|n| n.style().class())>
            <div class="container nav-inner">
                <a href="#about" class="nav-brand">
                    <Brand />
                </a>

                <div class="nav-links">
                    {links}
                    <a href=CONTACT_CTA.href class="nav-cta">{CONTACT_CTA.name}</a>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.with(MobileMenu::is_open).to_string()
                    on:click=move |_| menu.update(MobileMenu::toggle)
                >
                    {move || {
                        let glyph = if menu.with(MobileMenu::is_open) { Glyph::X } else { Glyph::Menu };
                        view! { <GlyphIcon glyph=glyph /> }
                    }}
                </button>
            </div>
        </nav>
    }
}

/// Full-screen overlay shown while the mobile menu is open.
#[component]
pub fn MobileMenuOverlay(menu: RwSignal<MobileMenu>) -> impl IntoView {
    view! {
        <Show when=move || menu.with(MobileMenu::is_open)>
            <div class="mobile-menu" data-open="true">
                {NAV_LINKS
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        view! {
                            <a
                                href=link.href
                                class="mobile-menu-link"
                                style=transition_style(MotionPreset::SlideRight, stagger(i))
                                on:click=move |_| {
                                    menu.update(|m| {
                                        m.follow(link);
                                    })
                                }
                            >
                                {link.name}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a
                    href=CONTACT_CTA.href
                    class="mobile-menu-cta"
                    on:click=move |_| menu.update(MobileMenu::close)
                >
                    "Get Started Now"
                </a>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_nav(offset: f64, open: bool) -> String {
        Owner::new().with(|| {
            let mut bar = NavBar::default();
            bar.observe(offset);
            let mut m = MobileMenu::default();
            if open {
                m.toggle();
            }
            let nav = RwSignal::new(bar);
            let menu = RwSignal::new(m);
            view! {
                <Nav nav=nav menu=menu />
                <MobileMenuOverlay menu=menu />
            }
            .to_html()
        })
    }

    #[test]
    fn bar_style_follows_offset() {
        assert!(render_nav(0.0, false).contains("nav nav-transparent"));
        assert!(render_nav(600.0, false).contains("nav nav-solid"));
    }

    #[test]
    fn desktop_links_in_order() {
        let html = render_nav(0.0, false);
        let positions: Vec<usize> = NAV_LINKS
            .iter()
            .map(|link| html.find(&format!("href=\"{}\"", link.href)).expect("link rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("Start a Project"));
    }

    #[test]
    fn overlay_only_when_open() {
        let closed = render_nav(0.0, false);
        assert!(!closed.contains("mobile-menu-link"));
        assert!(closed.contains("glyph-menu"));

        let open = render_nav(0.0, true);
        assert_eq!(open.matches("mobile-menu-link").count(), NAV_LINKS.len());
        assert!(open.contains("Get Started Now"));
        assert!(open.contains("glyph-x"));
    }
}

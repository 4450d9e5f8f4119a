// Footer: newsletter, links, socials, legal
// Developed by the W Tech IT Solution web team (c)2025

use chrono::Datelike;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracing::debug;
use wtech_core::content;
use wtech_core::forms::{Field, FormStatus, NewsletterForm};
use wtech_core::glyph::Glyph;
use wtech_core::nav::NAV_LINKS;

use super::Brand;
use super::contact::invalid;
use crate::icons::GlyphIcon;
use crate::{use_site_config, use_submitter};

const SOCIALS: &[(Glyph, &str)] = &[
    (Glyph::Facebook, "Facebook"),
    (Glyph::Twitter, "Twitter"),
    (Glyph::Instagram, "Instagram"),
    (Glyph::Linkedin, "LinkedIn"),
];

const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Cookies"];

/// Year shown in the copyright line.
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
fn FooterColumn(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">
                <span class="footer-heading-bar"></span>
                {title}
            </h4>
            {children()}
        </div>
    }
}

#[component]
pub fn NewsletterSignup() -> impl IntoView {
    let form = RwSignal::new(NewsletterForm::default());
    let status = RwSignal::new(FormStatus::Idle);
    let submitter = use_submitter();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let next = FormStatus::submit(form.with_untracked(NewsletterForm::validate), submitter.as_ref());
        debug!(status = ?next, "newsletter form submitted");
        if matches!(next, FormStatus::Sent(_)) {
            form.set(NewsletterForm::default());
        }
        status.set(next);
    };

    view! {
        <form class="newsletter-form" novalidate=true on:submit=on_submit>
            <input
                type="email"
                placeholder="Your Email"
                aria-label="Your Email"
                aria-invalid=move || status.with(|s| invalid(s, Field::Email))
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <button type="submit" class="newsletter-button" aria-label="Subscribe">
                <GlyphIcon glyph=Glyph::Send size=18 />
            </button>
        </form>
        <p class=move || status.with(FormStatus::class) role="status">
            {move || status.with(FormStatus::message)}
        </p>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let legal_name = use_site_config().brand.legal_name;

    view! {
        <footer class="footer">
            <div class="footer-decor" aria-hidden="true"></div>
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-company">
                        <Brand />
                        <p class="footer-blurb">
                            "Empowering businesses with smart, scalable, and result-oriented IT solutions across India. Your growth is our priority."
                        </p>
                        <div class="footer-socials">
                            {SOCIALS
                                .iter()
                                .map(|(glyph, label)| {
                                    view! {
                                        <a href="#" class="footer-social" aria-label=*label>
                                            <GlyphIcon glyph=*glyph size=18 />
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <FooterColumn title="Quick Links">
                        <ul class="footer-list">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a href=link.href class="footer-link" data-footer="quick-link">
                                                <GlyphIcon glyph=Glyph::ChevronRight size=14 />
                                                {link.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </FooterColumn>

                    <FooterColumn title="Our Services">
                        <ul class="footer-list">
                            {content::footer_services()
                                .iter()
                                .map(|service| {
                                    view! {
                                        <li>
                                            <a href="#services" class="footer-link" data-footer="service">
                                                <GlyphIcon glyph=Glyph::ChevronRight size=14 />
                                                {service.title}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </FooterColumn>

                    <FooterColumn title="Newsletter">
                        <p class="footer-blurb">
                            "Subscribe to our newsletter to get the latest updates and news."
                        </p>
                        <NewsletterSignup />
                    </FooterColumn>
                </div>

                <div class="footer-bottom">
                    <div class="footer-copyright">
                        <span>{format!("\u{a9} {} {}.", copyright_year(), legal_name)}</span>
                        <span class="footer-dot"></span>
                        <span>"ALL RIGHTS RESERVED."</span>
                    </div>
                    <div class="footer-legal">
                        {LEGAL_LINKS
                            .iter()
                            .map(|label| view! { <a href="#" class="footer-legal-link">{*label}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

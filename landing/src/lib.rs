//! # wtech-landing
//!
//! The W TECH IT SOLUTION landing page as a Leptos 0.8 application.
//!
//! All content and state machines come from [`wtech_core`]; this crate turns
//! them into views and connects them to the browser. Built with the `csr`
//! feature it mounts into the document (see `main.rs`). Without it the same
//! components render to static HTML, which is how the tests inspect them:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use wtech_landing::App;
//!
//! let html = Owner::new().with(|| view! { <App /> }.to_html());
//! assert!(html.contains("id=\"services\""));
//! ```

pub mod browser;
pub mod icons;
pub mod reveal;
pub mod sections;

use std::sync::Arc;

use leptos::prelude::*;
use tracing::info;
use wtech_core::SiteConfig;
use wtech_core::forms::{FormSubmitter, UnwiredSubmitter};
use wtech_core::nav::{MobileMenu, NavBar};
use wtech_core::reveal::RevealRegistry;
use wtech_core::scroll::ScrollProgress;

use sections::*;

/// Where both page forms send validated payloads.
#[derive(Clone)]
pub struct Submitter(pub Arc<dyn FormSubmitter>);

impl Default for Submitter {
    fn default() -> Self {
        Self(Arc::new(UnwiredSubmitter))
    }
}

/// Site configuration from context, or the compiled defaults.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Form submitter from context, or the unwired one.
pub fn use_submitter() -> Arc<dyn FormSubmitter> {
    use_context::<Submitter>().unwrap_or_default().0
}

/// The whole page.
#[component]
pub fn App(
    /// Brand, contact and motion settings.
    #[prop(optional)]
    config: SiteConfig,
    /// Form hand-off. Defaults to [`UnwiredSubmitter`].
    #[prop(optional)]
    submitter: Option<Submitter>,
) -> impl IntoView {
    let nav = RwSignal::new(NavBar::new(config.nav.scroll_threshold_px));
    let menu = RwSignal::new(MobileMenu::default());
    let progress = RwSignal::new(ScrollProgress::new(config.progress.spring()));
    let reveals = RwSignal::new(RevealRegistry::new());

    info!(site = %config.brand.legal_name, "mounting landing page");
    provide_context(config);
    provide_context(reveals);
    provide_context(submitter.unwrap_or_default());

    browser::track_scroll(nav, progress);

    view! {
        <ConsoleGreeting />
        <ScrollProgressBar progress=progress />
        <Nav nav=nav menu=menu />
        <MobileMenuOverlay menu=menu />
        <main>
            <Hero />
            <Services />
            <Portfolio />
            <Process />
            <Testimonials />
            <Contact />
        </main>
        <Footer />
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Text as it appears in rendered HTML.
    pub fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
    }

    /// Each needle occurs in `html`, after the previous one.
    pub fn assert_in_order(html: &str, needles: &[String]) {
        let mut from = 0;
        for needle in needles {
            match html[from..].find(needle.as_str()) {
                Some(at) => from += at + needle.len(),
                None => panic!("{needle:?} missing or out of order"),
            }
        }
    }
}

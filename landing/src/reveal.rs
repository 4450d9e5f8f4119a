//! Viewport-triggered reveals.
//!
//! `<Reveal>` wraps its children in a div that starts in the preset's offset
//! pose and switches to its resting pose the first time it scrolls into view.
//! The latch itself lives in the shared [`RevealRegistry`]; this module only
//! connects it to an `IntersectionObserver`.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use wtech_core::SiteConfig;
use wtech_core::motion::{MotionPreset, transition_style};
use wtech_core::reveal::{ElementId, RevealRegistry, RevealTransition};

/// Root margin for cards: reveal as soon as any part is visible.
pub const CARD_ROOT_MARGIN: &str = "0px";

/// The registry from context, or a private one when rendered standalone.
pub fn use_reveals() -> RwSignal<RevealRegistry> {
    use_context::<RwSignal<RevealRegistry>>().unwrap_or_else(|| RwSignal::new(RevealRegistry::new()))
}

/// Reveal children once they enter the viewport.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Reveal id=ElementId::new("service", "SEO") preset=MotionPreset::Scale delay=stagger(3)>
///         <p>"Search Engine Optimization"</p>
///     </Reveal>
/// }
/// ```
#[component]
pub fn Reveal(
    /// Stable identity of the revealed element.
    id: ElementId,
    /// Starting pose and duration.
    #[prop(default = MotionPreset::FadeUp)]
    preset: MotionPreset,
    /// Transition delay, usually `stagger(index)`.
    #[prop(default = Duration::ZERO)]
    delay: Duration,
    /// Extra classes on the wrapper.
    #[prop(optional)]
    class: &'static str,
    /// Observer root margin. Defaults to the configured section margin.
    #[prop(optional)]
    root_margin: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let reveals = use_reveals();
    reveals.update_untracked(|r| r.register(id.clone()));

    let root_margin = match root_margin {
        Some(margin) => margin.to_string(),
        None => use_context::<SiteConfig>()
            .unwrap_or_default()
            .reveal
            .root_margin,
    };
    let node = NodeRef::<html::Div>::new();

    let watched = id.clone();
    let margin = root_margin.clone();
    Effect::new(move || {
        if let Some(el) = node.get() {
            if !reveals.with_untracked(|r| r.is_revealed(&watched)) {
                observe_once(&el, watched.clone(), &margin, reveals);
            }
        }
    });

    let label = id.to_string();
    // Only this wrapper's latch, so other reveals do not re-render it.
    let state = Memo::new(move |_| reveals.with(|r| r.state(&id)));
    let class = move || format!("reveal {} {} {}", preset.class(), state.get().class(), class);

    view! {
        <div
            node_ref=node
            class=class
            style=transition_style(preset, delay)
            data-reveal=label
            data-root-margin=root_margin
        >
            {children()}
        </div>
    }
}

/// Watch `el` until it first intersects, then latch `id` and stop watching.
fn observe_once(
    el: &web_sys::Element,
    id: ElementId,
    root_margin: &str,
    reveals: RwSignal<RevealRegistry>,
) {
    let callback_id = id.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let seen = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !seen {
                return;
            }
            let transition = reveals
                .try_update(|r| r.observe(&callback_id, true))
                .unwrap_or(RevealTransition::Unchanged);
            if transition == RevealTransition::Revealed {
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(el);
            callback.forget();
        }
        Err(_) => {
            // No observer support: show the element rather than hide it forever.
            tracing::warn!(element = %id, "IntersectionObserver unavailable");
            reveals.update(|r| {
                r.observe(&id, true);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_starts_unseen_with_preset_pose() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let reveals = RwSignal::new(RevealRegistry::new());
            provide_context(reveals);
            let html = view! {
                <Reveal id=ElementId::new("service", "SEO") preset=MotionPreset::Scale delay=Duration::from_millis(300)>
                    <p>"Search Engine Optimization"</p>
                </Reveal>
            }
            .to_html();
            assert_eq!(reveals.with_untracked(RevealRegistry::len), 1);
            html
        });
        assert!(html.contains("reveal motion-scale reveal-unseen"));
        assert!(html.contains("transition-delay: 0.30s;"));
        assert!(html.contains("data-reveal=\"service/SEO\""));
        assert!(html.contains("Search Engine Optimization"));
    }

    #[test]
    fn revealed_latch_renders_resting_pose() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let reveals = RwSignal::new(RevealRegistry::new());
            let id = ElementId::new("process", "Strategy");
            reveals.update(|r| {
                r.register(id.clone());
                r.observe(&id, true);
            });
            provide_context(reveals);
            view! { <Reveal id=id><span>"02"</span></Reveal> }.to_html()
        });
        assert!(html.contains("reveal-revealed"));
        assert!(!html.contains("reveal-unseen"));
    }

    #[test]
    fn sections_use_configured_margin_and_cards_override_it() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(SiteConfig::default());
            view! {
                <Reveal id=ElementId::new("services", "title")><h2>"Services"</h2></Reveal>
                <Reveal id=ElementId::new("service", "SEO") root_margin=CARD_ROOT_MARGIN>
                    <p>"SEO"</p>
                </Reveal>
            }
            .to_html()
        });
        assert!(html.contains("data-reveal=\"services/title\" data-root-margin=\"-100px\""));
        assert!(html.contains("data-reveal=\"service/SEO\" data-root-margin=\"0px\""));
    }

    #[test]
    fn each_wrapper_follows_its_own_latch() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let reveals = RwSignal::new(RevealRegistry::new());
            let seo = ElementId::new("service", "SEO");
            reveals.update(|r| {
                r.register(seo.clone());
                r.observe(&seo, true);
            });
            provide_context(reveals);
            view! {
                <Reveal id=seo><p>"SEO"</p></Reveal>
                <Reveal id=ElementId::new("service", "Ads")><p>"Ads"</p></Reveal>
            }
            .to_html()
        });
        assert_eq!(html.matches("reveal-revealed").count(), 1);
        assert_eq!(html.matches("reveal-unseen").count(), 1);
        assert!(html.find("reveal-revealed") < html.find("reveal-unseen"));
    }
}

// Portfolio section and project cards
// Developed by the W Tech IT Solution web team (c)2025

use leptos::prelude::*;
use tracing::debug;
use wtech_core::content::{self, PortfolioItem};
use wtech_core::glyph::Glyph;
use wtech_core::hover::CardHover;
use wtech_core::motion::{MotionPreset, stagger};
use wtech_core::reveal::ElementId;

use crate::icons::GlyphIcon;
use crate::reveal::{CARD_ROOT_MARGIN, Reveal};

fn shown(visible: bool) -> &'static str {
    if visible { "is-visible" } else { "is-hidden" }
}

/// Project tile. Each card owns its hover flag, so hovering one never
/// changes another.
#[component]
pub fn PortfolioCard(item: &'static PortfolioItem, index: usize) -> impl IntoView {
    let hover = RwSignal::new(CardHover::default());
    let pose = move || hover.with(CardHover::presentation);

    view! {
        <Reveal
            id=ElementId::new("portfolio", item.title)
            preset=MotionPreset::RiseCard
            delay=stagger(index)
            class="card-shell"
            root_margin=CARD_ROOT_MARGIN
        >
            <article
                class="portfolio-card"
                data-card="portfolio"
                on:mouseenter=move |_| {
                    hover.update(CardHover::enter);
                    debug!(card = item.title, "portfolio card hovered");
                }
                on:mouseleave=move |_| hover.update(CardHover::leave)
            >
                <img
                    src=item.image
                    alt=item.title
                    class="portfolio-image"
                    referrerpolicy="no-referrer"
                    style=move || pose().image_style()
                />
                <div class="portfolio-gradient"></div>
                <div class="portfolio-content" style=move || pose().content_style()>
                    <div class=move || format!("portfolio-category {}", shown(pose().category_visible))>
                        {item.category}
                    </div>
                    <h3 class="portfolio-title">{item.title}</h3>
                    <div class=move || format!("portfolio-cta {}", shown(pose().cta_visible))>
                        "View Case Study"
                        <GlyphIcon glyph=Glyph::ArrowRight size=18 />
                    </div>
                </div>
                <div class="portfolio-link" style=move || pose().link_glyph_style()>
                    <GlyphIcon glyph=Glyph::ExternalLink size=20 />
                </div>
            </article>
        </Reveal>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let cards = content::portfolio()
        .iter()
        .enumerate()
        .map(|(index, item)| view! { <PortfolioCard item=item index=index /> })
        .collect::<Vec<_>>();

    view! {
        <section id="portfolio" class="section portfolio">
            <div class="container">
                <div class="portfolio-header">
                    <div>
                        <Reveal id=ElementId::new("portfolio", "eyebrow") preset=MotionPreset::SlideRight>
                            <div class="eyebrow">"Showcase"</div>
                        </Reveal>
                        <Reveal id=ElementId::new("portfolio", "title") delay=stagger(2)>
                            <h2 class="section-title">
                                "Selected " <span class="text-accent">"Projects"</span>
                            </h2>
                        </Reveal>
                    </div>
                    <a href="#portfolio" class="btn btn-outline">
                        "View All Work"
                        <GlyphIcon glyph=Glyph::ArrowRight size=22 />
                    </a>
                </div>
                <div class="portfolio-grid">{cards}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assert_in_order, escape};
    use pretty_assertions::assert_eq;

    #[test]
    fn one_card_per_project_in_order() {
        let html = Owner::new().with(|| view! { <Portfolio /> }.to_html());
        assert_eq!(
            html.matches("data-card=\"portfolio\"").count(),
            content::len(content::ContentKind::Portfolio)
        );
        let titles: Vec<String> = content::portfolio().iter().map(|p| escape(p.title)).collect();
        assert_in_order(&html, &titles);
    }

    #[test]
    fn cards_render_idle_overlay() {
        let html = Owner::new().with(|| view! { <Portfolio /> }.to_html());
        let cards = content::len(content::ContentKind::Portfolio);
        assert_eq!(html.matches("transform: scale(1);").count(), cards);
        assert_eq!(html.matches("portfolio-category is-hidden").count(), cards);
        assert_eq!(html.matches("rotate(-90deg)").count(), cards);
        assert!(!html.contains("is-visible"));
    }
}

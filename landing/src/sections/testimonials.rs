// Testimonials section and review cards
// Developed by the W Tech IT Solution web team (c)2025

use leptos::prelude::*;
use wtech_core::content::{self, Testimonial};
use wtech_core::glyph::Glyph;
use wtech_core::motion::{MotionPreset, stagger};
use wtech_core::reveal::ElementId;

use crate::icons::GlyphIcon;
use crate::reveal::{CARD_ROOT_MARGIN, Reveal};

#[component]
pub fn TestimonialCard(review: &'static Testimonial, index: usize) -> impl IntoView {
    let stars = review
        .stars()
        .map(|_| view! { <GlyphIcon glyph=Glyph::Star size=20 class="star" /> })
        .collect::<Vec<_>>();

    view! {
        <Reveal
            id=ElementId::new("testimonial", review.name)
            preset=MotionPreset::Scale
            delay=stagger(index)
            class="card-shell"
            root_margin=CARD_ROOT_MARGIN
        >
            <article class="testimonial-card" data-card="testimonial">
                <div class="testimonial-stars" aria-label=format!("{} out of 5", review.rating)>
                    {stars}
                </div>
                <p class="testimonial-quote">"\u{201c}" {review.content} "\u{201d}"</p>
                <div class="testimonial-author">
                    <div class="testimonial-avatar">{review.initial().to_string()}</div>
                    <div>
                        <div class="testimonial-name">{review.name}</div>
                        <div class="testimonial-role">{review.role}</div>
                    </div>
                </div>
            </article>
        </Reveal>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="section testimonials">
            <div class="container testimonials-grid">
                <div class="testimonials-intro">
                    <div class="eyebrow">"Testimonials"</div>
                    <h2 class="section-title">
                        "What Our " <br /> <span class="text-accent">"Clients"</span> " Say."
                    </h2>
                    <p class="section-lead">
                        "Trusted by hundreds of businesses across India for our commitment to quality and innovation."
                    </p>
                    <div class="testimonials-controls" aria-hidden="true">
                        <button class="round-button flipped" tabindex="-1">
                            <GlyphIcon glyph=Glyph::ChevronRight />
                        </button>
                        <button class="round-button" tabindex="-1">
                            <GlyphIcon glyph=Glyph::ChevronRight />
                        </button>
                    </div>
                </div>
                <div class="testimonials-cards">
                    {content::featured_testimonials()
                        .iter()
                        .enumerate()
                        .map(|(index, review)| view! { <TestimonialCard review=review index=index /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_in_order;
    use pretty_assertions::assert_eq;

    #[test]
    fn shows_the_two_featured_reviews() {
        let html = Owner::new().with(|| view! { <Testimonials /> }.to_html());
        assert_eq!(
            html.matches("data-card=\"testimonial\"").count(),
            content::FEATURED_TESTIMONIAL_COUNT
        );
        let names: Vec<String> = content::featured_testimonials()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_in_order(&html, &names);
        assert!(!html.contains(content::testimonials()[2].name));
    }

    #[test]
    fn card_draws_rating_stars_and_initial() {
        let review = &content::testimonials()[0];
        let html = Owner::new().with(|| view! { <TestimonialCard review=review index=0 /> }.to_html());
        assert_eq!(html.matches("glyph-star").count(), usize::from(review.rating));
        assert!(html.contains(&format!("testimonial-avatar\">{}", review.initial())));
    }
}

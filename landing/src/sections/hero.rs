// Hero section (#about)
// Developed by the W Tech IT Solution web team (c)2025

use std::time::Duration;

use leptos::prelude::*;
use wtech_core::glyph::Glyph;
use wtech_core::motion::MotionPreset;
use wtech_core::reveal::ElementId;

use crate::icons::GlyphIcon;
use crate::reveal::Reveal;
use crate::use_site_config;

#[component]
pub fn Hero() -> impl IntoView {
    let brand = use_site_config().brand;

    view! {
        <section id="about" class="hero">
            <div class="hero-blob" aria-hidden="true"></div>
            <div class="container hero-grid">
                <div class="hero-copy">
                    <Reveal id=ElementId::new("hero", "badge")>
                        <div class="hero-badge">
                            <GlyphIcon glyph=Glyph::Sparkles size=16 />
                            {brand.tagline}
                        </div>
                    </Reveal>
                    <Reveal id=ElementId::new("hero", "headline") delay=Duration::from_millis(200)>
                        <h1 class="hero-title">
                            "WE BUILD " <br />
                            <span class="hero-title-accent">"DIGITAL"</span> <br />
                            "EXCELLENCE."
                        </h1>
                    </Reveal>
                    <Reveal id=ElementId::new("hero", "lead") delay=Duration::from_millis(500)>
                        <p class="hero-lead">
                            "Transforming businesses with innovative technology, creative design, and strategic digital marketing. Your vision, our expertise."
                        </p>
                    </Reveal>
                    <Reveal id=ElementId::new("hero", "actions") delay=Duration::from_millis(700)>
                        <div class="hero-actions">
                            <a href="#services" class="btn btn-primary">
                                "Our Services"
                                <GlyphIcon glyph=Glyph::ArrowRight size=22 class="nudge" />
                            </a>
                            <a href="#portfolio" class="btn btn-ghost">"View Work"</a>
                        </div>
                    </Reveal>
                </div>

                <Reveal id=ElementId::new("hero", "banner") preset=MotionPreset::Scale class="hero-visual">
                    <div class="hero-banner">
                        <img src=brand.banner alt="IT Solutions" referrerpolicy="no-referrer" />
                    </div>
                    <div class="hero-rating">
                        <div class="hero-rating-star">
                            <GlyphIcon glyph=Glyph::Star size=24 />
                        </div>
                        <div>
                            <div class="hero-rating-score">"4.9/5"</div>
                            <div class="hero-rating-label">"Client Rating"</div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

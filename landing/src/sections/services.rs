// Services section and service cards
// Developed by the W Tech IT Solution web team (c)2025

use leptos::prelude::*;
use wtech_core::content::{self, Service};
use wtech_core::glyph::Glyph;
use wtech_core::motion::{MotionPreset, stagger};
use wtech_core::reveal::ElementId;

use crate::icons::GlyphIcon;
use crate::reveal::{CARD_ROOT_MARGIN, Reveal};

#[component]
pub fn ServiceCard(service: &'static Service, index: usize) -> impl IntoView {
    view! {
        <Reveal
            id=ElementId::new("service", service.title)
            preset=MotionPreset::Scale
            delay=stagger(index)
            class="card-shell"
            root_margin=CARD_ROOT_MARGIN
        >
            <article class="service-card" data-card="service">
                <div class="service-card-glow"></div>
                <div class="service-card-body">
                    <div class="service-icon">
                        <GlyphIcon glyph=service.icon size=32 />
                    </div>
                    <h3 class="service-title">{service.title}</h3>
                    <p class="service-description">{service.description}</p>
                    <div class="service-more">
                        "Learn More"
                        <GlyphIcon glyph=Glyph::ArrowRight size=16 />
                    </div>
                </div>
            </article>
        </Reveal>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let cards = content::services()
        .iter()
        .enumerate()
        .map(|(index, service)| view! { <ServiceCard service=service index=index /> })
        .collect::<Vec<_>>();

    view! {
        <section id="services" class="section services">
            <div class="container">
                <header class="section-header section-header-center">
                    <Reveal id=ElementId::new("services", "eyebrow")>
                        <div class="eyebrow">"Expertise"</div>
                    </Reveal>
                    <Reveal id=ElementId::new("services", "title") delay=stagger(2)>
                        <h2 class="section-title">
                            "Services We " <span class="text-accent">"Master"</span>
                        </h2>
                    </Reveal>
                    <Reveal id=ElementId::new("services", "lead") delay=stagger(4)>
                        <p class="section-lead">
                            "We don't just provide services; we craft digital success stories tailored to your unique business needs."
                        </p>
                    </Reveal>
                </header>
                <div class="services-grid">{cards}</div>
            </div>
        </section>
    }
}

// Process section and step cards
// Developed by the W Tech IT Solution web team (c)2025

use leptos::prelude::*;
use wtech_core::content::{self, ProcessStep};
use wtech_core::motion::stagger;
use wtech_core::reveal::ElementId;

use crate::icons::GlyphIcon;
use crate::reveal::{CARD_ROOT_MARGIN, Reveal};

#[component]
pub fn ProcessStepCard(step: &'static ProcessStep, index: usize) -> impl IntoView {
    view! {
        <Reveal
            id=ElementId::new("process", step.title)
            delay=stagger(index)
            class="card-shell"
            root_margin=CARD_ROOT_MARGIN
        >
            <article class="process-card" data-card="process">
                <div class="process-ordinal" aria-hidden="true">{step.step}</div>
                <div class="process-body">
                    <div class="process-icon">
                        <GlyphIcon glyph=step.icon size=36 />
                    </div>
                    <h3 class="process-title">{step.title}</h3>
                    <p class="process-description">{step.description}</p>
                </div>
            </article>
        </Reveal>
    }
}

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="section process">
            <div class="container">
                <header class="section-header section-header-center">
                    <h2 class="section-title">"How We " <span class="text-accent">"Work"</span></h2>
                    <p class="section-lead">"A transparent and efficient workflow designed for excellence."</p>
                </header>
                <div class="process-grid">
                    {content::process_steps()
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! { <ProcessStepCard step=step index=index /> })
                        .collect::<Vec<_>>()}
                </div>
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
    fn steps_render_in_sequence() {
        let html = Owner::new().with(|| view! { <Process /> }.to_html());
        assert_eq!(
            html.matches("data-card=\"process\"").count(),
            content::len(content::ContentKind::ProcessSteps)
        );
        let titles: Vec<String> = content::process_steps().iter().map(|s| escape(s.title)).collect();
        assert_in_order(&html, &titles);
    }
}

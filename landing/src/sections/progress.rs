// Scroll progress bar
// Developed by the W Tech IT Solution web team (c)2025

use leptos::prelude::*;
use wtech_core::scroll::ScrollProgress;

/// Thin bar pinned to the top of the viewport, scaled by the smoothed ratio.
#[component]
pub fn ScrollProgressBar(progress: RwSignal<ScrollProgress>) -> impl IntoView {
    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.with(ScrollProgress::ratio) * 100.0)
            style=move || format!("transform: scaleX({:.4});", progress.with(ScrollProgress::ratio))
        ></div>
    }
}

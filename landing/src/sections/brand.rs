// Brand mark: logo plus wordmark
// Developed by the W Tech IT Solution web team (c)2025

use leptos::prelude::*;

use crate::use_site_config;

/// Logo tile plus the two-tone wordmark ("W TECH" + accent "IT").
#[component]
pub fn Brand() -> impl IntoView {
    let brand = use_site_config().brand;
    view! {
        <span class="brand">
            <span class="brand-logo">
                <img src=brand.logo alt="W Tech Logo" />
            </span>
            <span class="brand-wordmark">
                {brand.name} " " <span class="brand-accent">{brand.accent}</span>
            </span>
        </span>
    }
}

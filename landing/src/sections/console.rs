// Developer console greeting
// Developed by the W Tech IT Solution web team (c)2025

//! A hello for visitors who open the developer console.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::use_site_config;

/// Banner line printed once at mount.
pub fn greeting(name: &str, accent: &str, tagline: &str) -> String {
    format!("%c{name} {accent} :: {tagline}")
}

#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleGreeting() -> impl IntoView {
    let brand = use_site_config().brand;
    let line = greeting(&brand.name, &brand.accent, &brand.tagline);

    Effect::new(move || {
        if web_sys::window().is_some() {
            web_sys::console::log_2(
                &JsValue::from_str(&line),
                &JsValue::from_str("color: #ff6b00; font-weight: bold; font-size: 14px;"),
            );
            web_sys::console::log_2(
                &JsValue::from_str("%cCurious how this page works? Let's build something together: #contact"),
                &JsValue::from_str("color: #888888; font-family: monospace;"),
            );
        }
    });

    view! {}
}

// W TECH IT SOLUTION landing page, Leptos 0.8 client build.

use leptos::prelude::*;
use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;
use wtech_core::SiteConfig;
use wtech_core::config::EMBEDDED_TOML;
use wtech_landing::App;

fn main() {
    console_error_panic_hook::set_once();

    // The subscriber needs the level before the config loader can log.
    let level = SiteConfig::from_toml_str(EMBEDDED_TOML).map_or(Level::INFO, |c| c.log.level());
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(level).build(),
    );

    let config = SiteConfig::load_embedded();
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

//! Lead Intake Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod models;
mod state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    init_logging(&config);
    tracing::info!(api_base = %config.api_base, "starting lead intake");
    mount_to_body(move || view! { <App config=config.clone() /> });
}

#[cfg(target_arch = "wasm32")]
fn init_logging(config: &AppConfig) {
    let layer_config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(config.log_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(layer_config);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(_config: &AppConfig) {}

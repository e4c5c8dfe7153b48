//! App Grid - Yew WASM Frontend
//!
//! Loads the static app list, renders it into `#appGrid` and keeps the
//! page theme in sync with the OS preference or the manual toggle.

mod app;
mod components;
mod console_log;
mod dom;
mod loader;
mod theme;

pub use app::{AppGrid, AppGridProps};

use grid_core::GridConfig;
use log::LevelFilter;
use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let config = dom::read_config();
    wasm_bindgen_futures::spawn_local(run(config));
}

/// Load, render, then wire the theme.
async fn run(config: GridConfig) {
    let payload = loader::load_app_list(&config.data_path).await;

    if let Err(err) = app::render_grid(&config, &payload) {
        log::error!("Failed to render app grid: {err}");
    }

    if let Err(err) = theme::install(&config) {
        log::error!("Failed to initialise theme: {err}");
    }
}

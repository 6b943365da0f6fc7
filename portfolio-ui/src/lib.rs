pub mod animation;
pub mod controller;
pub mod filter;
pub mod interop;
pub mod nav;
pub mod theme;

use dioxus_logger::tracing::Level;
use portfolio_core::init::InitPlan;
use portfolio_core::{PageConfig, PageError};
use wasm_bindgen::prelude::*;

pub use controller::{PageController, SharedController};

pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Page config from `<script type="application/json" id="page-config">`.
/// Falls back to defaults, returning the reason when the embedded config
/// was present but unusable.
pub fn load_config() -> (PageConfig, Option<PageError>) {
    let payload = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match payload {
        None => (PageConfig::default(), None),
        Some(payload) => match PageConfig::from_json(&payload) {
            Ok(config) => (config, None),
            Err(e) => (PageConfig::default(), Some(e)),
        },
    }
}

fn log_level(config: &PageConfig) -> Level {
    match config.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn boot() {
    let (config, config_error) = load_config();
    dioxus_logger::init(log_level(&config)).ok();
    if let Some(e) = config_error {
        dioxus_logger::tracing::warn!("Ignoring embedded page config: {}", e);
    }

    let plan = match InitPlan::from_config(&config) {
        Ok(plan) => plan,
        Err(e) => {
            dioxus_logger::tracing::error!("Page behaviours disabled: {}", e);
            return;
        }
    };

    let controller = PageController::shared(config);
    wasm_bindgen_futures::spawn_local(controller::run_plan(controller, plan));
}

/// Attach every page behaviour once the document is ready.
#[wasm_bindgen(js_name = initPage)]
pub fn init_page() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let attached = interop::listen(&document, "DOMContentLoaded", |_| boot());
        if attached.is_err() {
            boot();
        }
    } else {
        boot();
    }
}

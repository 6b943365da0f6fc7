use portfolio_core::theme::{PreferenceStore, Theme};
use portfolio_core::Result;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryListEvent, Storage};

use crate::controller::SharedController;
use crate::interop::{document, listen, prefers_dark_scheme, window};

/// `window.localStorage`, or nothing when storage is unavailable.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            dioxus_logger::tracing::debug!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                dioxus_logger::tracing::debug!("Failed to persist theme preference: {:?}", e);
            }
        }
    }
}

pub fn apply_theme_to_document(theme: Theme) {
    if let Some(root) = document().ok().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn update_theme_toggle_icon(theme: Theme) {
    let Ok(document) = document() else {
        return;
    };
    let icon = document
        .get_element_by_id("theme-toggle")
        .and_then(|toggle| toggle.query_selector(".theme-icon").ok().flatten());
    if let Some(icon) = icon {
        icon.set_text_content(Some(theme.toggle_icon()));
    }
}

pub fn render_theme(theme: Theme) {
    apply_theme_to_document(theme);
    update_theme_toggle_icon(theme);
}

/// Resolve and apply the initial theme, then hook the toggle button and the
/// OS colour-scheme query.
pub fn wire_theme(controller: &SharedController) -> Result<()> {
    let theme = controller
        .borrow_mut()
        .theme
        .initialize(prefers_dark_scheme());
    render_theme(theme);
    dioxus_logger::tracing::info!("Theme initialized: {}", theme);

    if let Some(toggle) = document()?.get_element_by_id("theme-toggle") {
        let controller = controller.clone();
        listen(&toggle, "click", move |_| {
            let theme = controller.borrow_mut().theme.toggle();
            render_theme(theme);
        })?;
    }

    if let Some(query) = window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
    {
        let controller = controller.clone();
        listen(&query, "change", move |event| {
            let Ok(event) = event.dyn_into::<MediaQueryListEvent>() else {
                return;
            };
            if let Some(theme) = controller.borrow_mut().theme.on_system_change(event.matches()) {
                render_theme(theme);
            }
        })?;
    }

    Ok(())
}

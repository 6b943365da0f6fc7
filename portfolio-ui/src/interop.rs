use portfolio_core::{PageError, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions, Window,
};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| PageError::Dom("no global `window` exists".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| PageError::Dom("no document on window".to_string()))
}

pub fn js_error(context: &str, err: JsValue) -> PageError {
    PageError::Dom(format!("{context}: {err:?}"))
}

/// First match for `selector`, or `MissingElement`.
pub fn query(selector: &str) -> Result<Element> {
    document()?
        .query_selector(selector)
        .map_err(|e| js_error(selector, e))?
        .ok_or_else(|| PageError::missing(selector))
}

pub fn query_html(selector: &str) -> Result<HtmlElement> {
    query(selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::Dom(format!("{selector} is not an HTML element")))
}

pub fn element_by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| PageError::missing(&format!("#{id}")))
}

/// All matches for `selector` in document order. No matches is an empty vec.
pub fn query_all(selector: &str) -> Result<Vec<Element>> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|e| js_error(selector, e))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_html(selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(query_all(selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Set or clear `class` from a boolean rather than toggling.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        dioxus_logger::tracing::debug!("class update '{}' failed: {:?}", class, e);
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        dioxus_logger::tracing::debug!("style update '{}' failed: {:?}", property, e);
    }
}

/// Effective `display`, after stylesheets are applied.
pub fn computed_display(element: &Element) -> Option<String> {
    web_sys::window()?
        .get_computed_style(element)
        .ok()
        .flatten()?
        .get_property_value("display")
        .ok()
}

/// Attach a listener that lives for the rest of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| js_error(&format!("failed to add {event} listener"), e))?;

    // Leak the closure to keep it alive (released when the page unloads)
    closure.forget();
    Ok(())
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn event_target_element(event: &Event) -> Option<Element> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

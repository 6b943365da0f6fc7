use gloo_timers::future::TimeoutFuture;
use portfolio_core::animation::{
    TypingSequence, TypingStep, HOVER_LIFT, HOVER_REST, REVEAL_CLASS, REVEAL_SELECTOR,
};
use portfolio_core::{PageConfig, PageError, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::interop::{js_error, listen, query, query_all, query_all_html, set_class, set_style};

/// Fade in sections and cards the first time they scroll into view.
pub fn wire_reveal(config: &PageConfig) -> Result<()> {
    let targets = query_all(REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    set_class(&entry.target(), REVEAL_CLASS, true);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin());

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| js_error("IntersectionObserver", e))?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    dioxus_logger::tracing::debug!("Observing {} elements for reveal", targets.len());
    Ok(())
}

/// Lift project cards while hovered.
pub fn wire_hover() -> Result<()> {
    for card in query_all_html(".project")? {
        let lifted = card.clone();
        listen(&card, "mouseenter", move |_| set_style(&lifted, "transform", HOVER_LIFT))?;
        let rested = card.clone();
        listen(&card, "mouseleave", move |_| set_style(&rested, "transform", HOVER_REST))?;
    }
    Ok(())
}

/// Replace the about heading with a typing reveal and play it once.
pub fn start_typing(config: &PageConfig) -> Result<()> {
    let heading = query(".about-intro h1")?;
    let text = heading.text_content().unwrap_or_default();
    heading.set_inner_html(
        "<span class=\"typing-text\"></span><span class=\"typing-cursor\">|</span>",
    );

    let typing_text = heading
        .query_selector(".typing-text")
        .map_err(|e| js_error(".typing-text", e))?
        .ok_or_else(|| PageError::missing(".typing-text"))?;
    let cursor = heading
        .query_selector(".typing-cursor")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let sequence = TypingSequence::new(&text, config);
    dioxus_logger::tracing::debug!("Typing {} characters", sequence.len());

    wasm_bindgen_futures::spawn_local(async move {
        let mut typed = String::new();
        for (delay, step) in sequence {
            TimeoutFuture::new(delay).await;
            match step {
                TypingStep::Append(ch) => {
                    typed.push(ch);
                    typing_text.set_text_content(Some(&typed));
                }
                TypingStep::HideCursor => {
                    if let Some(cursor) = &cursor {
                        set_style(cursor, "display", "none");
                    }
                }
            }
        }
    });

    Ok(())
}

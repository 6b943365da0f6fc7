use portfolio_core::nav::{anchor_target, navbar_scrolled, scroll_target, NavState, SectionBounds};
use portfolio_core::Result;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::controller::SharedController;
use crate::interop::{
    document, element_by_id, event_target_element, listen, query, query_all, query_all_html,
    scroll_y, set_class, smooth_scroll_into_view, smooth_scroll_to, window,
};

/// Write menu and dropdown state onto their elements.
pub fn render_nav(state: &NavState) {
    if let Ok(toggle) = element_by_id("nav-toggle") {
        set_class(&toggle, "active", state.menu.is_open());
    }
    if let Ok(menu) = element_by_id("nav-menu") {
        set_class(&menu, "active", state.menu.is_open());
    }
    if let Ok(dropdown) = query(".nav-dropdown") {
        set_class(&dropdown, "active", state.dropdown.is_open());
    }
}

/// Exactly one `.nav-link` carries `active`: the one pointing at `section_id`.
pub fn render_active_link(section_id: &str) -> Result<()> {
    let target = format!("#{section_id}");
    for link in query_all(".nav-link")? {
        let is_target = link.get_attribute("href").as_deref() == Some(target.as_str());
        set_class(&link, "active", is_target);
    }
    Ok(())
}

/// Smooth scroll to the section an in-page anchor points at, below the
/// fixed header. Returns false when the href is not a resolvable anchor.
fn scroll_to_anchor(href: &str, header_offset: f64) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    let Some(section) = document()
        .ok()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let top = scroll_target(f64::from(section.offset_top()), header_offset);
    if let Err(e) = smooth_scroll_to(top) {
        dioxus_logger::tracing::warn!("Smooth scroll to #{} failed: {}", id, e);
    }
    true
}

fn wire_anchor(controller: &SharedController, element: &Element, closes_menu: bool) -> Result<()> {
    let controller = controller.clone();
    let anchor = element.clone();
    listen(element, "click", move |event| {
        let href = anchor.get_attribute("href").unwrap_or_default();
        if anchor_target(&href).is_none() {
            // Real link; let the browser follow it.
            return;
        }
        event.prevent_default();

        let header_offset = {
            let mut page = controller.borrow_mut();
            if closes_menu {
                page.nav.follow_nav_link();
                render_nav(&page.nav);
            }
            page.config.header_offset
        };
        scroll_to_anchor(&href, header_offset);
    })
}

pub fn wire_navigation(controller: &SharedController) -> Result<()> {
    let document = document()?;

    if let Some(toggle) = document.get_element_by_id("nav-toggle") {
        let controller = controller.clone();
        listen(&toggle, "click", move |_| {
            let mut page = controller.borrow_mut();
            page.nav.toggle_menu();
            render_nav(&page.nav);
        })?;
    }

    for link in query_all(".nav-link")? {
        wire_anchor(controller, &link, true)?;
    }
    for button in query_all(".btn[href^=\"#\"]")? {
        wire_anchor(controller, &button, false)?;
    }

    wire_dropdown(controller)?;
    wire_navbar_scroll(controller)
}

fn wire_dropdown(controller: &SharedController) -> Result<()> {
    let (Ok(toggle), Ok(dropdown)) = (query(".nav-dropdown-toggle"), query(".nav-dropdown")) else {
        dioxus_logger::tracing::debug!("No project dropdown on this page");
        return Ok(());
    };

    {
        let controller = controller.clone();
        listen(&toggle, "click", move |event| {
            event.prevent_default();
            let mut page = controller.borrow_mut();
            page.nav.toggle_dropdown();
            render_nav(&page.nav);
        })?;
    }

    for item in query_all(".nav-dropdown-item")? {
        let controller = controller.clone();
        let anchor = item.clone();
        listen(&item, "click", move |event| {
            event.prevent_default();
            {
                let mut page = controller.borrow_mut();
                page.nav.select_dropdown_item();
                render_nav(&page.nav);
                // Deep links must never land on a filtered-out project.
                if let Err(e) = page.clear_filters() {
                    dioxus_logger::tracing::warn!("Failed to clear project filters: {}", e);
                }
            }

            let target = anchor
                .get_attribute("href")
                .as_deref()
                .and_then(anchor_target)
                .and_then(|id| document().ok()?.get_element_by_id(id));
            if let Some(target) = target {
                smooth_scroll_into_view(&target);
            }
        })?;
    }

    let controller = controller.clone();
    listen(document()?.as_ref(), "click", move |event| {
        let Some(target) = event_target_element(&event) else {
            return;
        };
        if dropdown.contains(Some(target.as_ref())) || toggle.contains(Some(target.as_ref())) {
            return;
        }
        let mut page = controller.borrow_mut();
        if page.nav.dropdown.is_open() {
            page.nav.close_dropdown();
            render_nav(&page.nav);
        }
    })
}

fn wire_navbar_scroll(controller: &SharedController) -> Result<()> {
    let Ok(navbar) = element_by_id("navbar") else {
        dioxus_logger::tracing::debug!("No #navbar, skipping scrolled styling");
        return Ok(());
    };
    let threshold = controller.borrow().config.navbar_scrolled_threshold;

    set_class(&navbar, "scrolled", navbar_scrolled(scroll_y(), threshold));
    listen(window()?.as_ref(), "scroll", move |_| {
        set_class(&navbar, "scrolled", navbar_scrolled(scroll_y(), threshold));
    })
}

fn section_bounds() -> Result<Vec<SectionBounds>> {
    Ok(query_all_html("section[id]")?
        .iter()
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect())
}

/// Re-run the scroll spy against current layout. Section geometry is read
/// per call since images and fonts move it after load.
pub fn update_active_nav(controller: &SharedController) -> Result<()> {
    let sections = section_bounds()?;
    let mut page = controller.borrow_mut();
    let spy_offset = page.config.scroll_spy_offset;
    if page
        .nav
        .update_active_section(&sections, scroll_y(), spy_offset)
    {
        if let Some(id) = page.nav.active_section.as_deref() {
            render_active_link(id)?;
        }
    }
    Ok(())
}

pub fn wire_scroll_spy(controller: &SharedController) -> Result<()> {
    update_active_nav(controller)?;

    let controller = controller.clone();
    listen(window()?.as_ref(), "scroll", move |_| {
        if let Err(e) = update_active_nav(&controller) {
            dioxus_logger::tracing::debug!("Scroll spy update skipped: {}", e);
        }
    })
}

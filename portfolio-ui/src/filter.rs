use portfolio_core::filter::{
    alternating_layout, FilterControl, ProjectEntry, ProjectFilter, LAYOUT_CLASSES,
};
use portfolio_core::Result;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

use crate::controller::SharedController;
use crate::interop::{computed_display, listen, query_all, query_all_html, set_class, set_style};

pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PROJECT_SELECTOR: &str = ".project[data-tags]";

/// Filter bar and project elements paired with their state.
pub struct FilterBinding {
    pub buttons: Vec<Element>,
    pub projects: Vec<HtmlElement>,
    pub state: ProjectFilter,
}

fn is_disabled(button: &Element) -> bool {
    button.class_list().contains("disabled")
        || button
            .dyn_ref::<HtmlButtonElement>()
            .map(|b| b.disabled())
            .unwrap_or(false)
}

impl FilterBinding {
    /// Read the bar and projects from the DOM.
    pub fn from_document() -> Result<Self> {
        let buttons = query_all(FILTER_BUTTON_SELECTOR)?;
        let projects = query_all_html(PROJECT_SELECTOR)?;

        let controls = buttons
            .iter()
            .map(|button| FilterControl {
                value: button.get_attribute("data-filter").unwrap_or_default(),
                disabled: is_disabled(button),
            })
            .collect();
        let entries = projects
            .iter()
            .map(|project| {
                ProjectEntry::new(&project.get_attribute("data-tags").unwrap_or_default())
            })
            .collect();
        let initially_active = buttons
            .iter()
            .position(|button| button.class_list().contains("active"));

        Ok(Self {
            buttons,
            projects,
            state: ProjectFilter::new(controls, entries).with_active_control(initially_active),
        })
    }

    pub fn is_wireable(&self) -> bool {
        !self.buttons.is_empty() && !self.projects.is_empty()
    }

    /// Handle a click on button `index`. Returns false when it was ignored.
    pub fn apply_filter(&mut self, index: usize) -> bool {
        if let Some(button) = self.buttons.get(index) {
            self.state.set_control_disabled(index, is_disabled(button));
        }
        match self.state.apply_filter(index) {
            Some(selection) => {
                dioxus_logger::tracing::debug!("Project filter set to '{}'", selection.as_str());
                self.render();
                true
            }
            None => false,
        }
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
        self.render();
    }

    /// Write active control, entry visibility and layout to the DOM.
    pub fn render(&self) {
        let active = self.state.active_control();
        for (index, button) in self.buttons.iter().enumerate() {
            set_class(button, "active", active == Some(index));
        }

        for (project, entry) in self.projects.iter().zip(self.state.entries()) {
            set_style(project, "display", entry.visibility.display());
            set_style(project, "opacity", entry.visibility.opacity());
        }

        update_alternating_layout(&self.projects);
    }
}

fn is_effectively_visible(project: &HtmlElement) -> bool {
    let inline_hidden = project
        .style()
        .get_property_value("display")
        .map(|display| display == "none")
        .unwrap_or(false);
    let computed_hidden = computed_display(project).as_deref() == Some("none");
    !inline_hidden && !computed_hidden
}

/// Alternate left/right over the projects that are actually displayed.
pub fn update_alternating_layout(projects: &[HtmlElement]) {
    let visible: Vec<bool> = projects.iter().map(is_effectively_visible).collect();
    for (project, side) in projects.iter().zip(alternating_layout(&visible)) {
        for class in LAYOUT_CLASSES {
            set_class(project, class, false);
        }
        if let Some(side) = side {
            set_class(project, side.class_name(), true);
        }
    }
}

/// Attach click handlers to every filter button.
pub fn wire_filters(controller: &SharedController) -> Result<()> {
    let buttons = {
        let mut page = controller.borrow_mut();
        let binding = page.filter_binding()?;
        if !binding.is_wireable() {
            dioxus_logger::tracing::debug!("No filter buttons or projects, filter disabled");
            return Ok(());
        }
        binding.buttons.clone()
    };

    for (index, button) in buttons.iter().enumerate() {
        let controller = controller.clone();
        listen(button, "click", move |_| {
            let mut page = controller.borrow_mut();
            match page.filter_binding() {
                Ok(binding) => {
                    binding.apply_filter(index);
                }
                Err(e) => dioxus_logger::tracing::warn!("Filter click failed: {}", e),
            }
        })?;
    }

    dioxus_logger::tracing::info!("Project filter wired with {} buttons", buttons.len());
    Ok(())
}

/// Initial layout pass once the page has settled.
pub fn settle_layout() -> Result<()> {
    update_alternating_layout(&query_all_html(PROJECT_SELECTOR)?);
    Ok(())
}

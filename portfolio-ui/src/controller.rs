use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use portfolio_core::init::{InitPlan, InitStage};
use portfolio_core::nav::NavState;
use portfolio_core::theme::ThemeManager;
use portfolio_core::{PageConfig, Result};

use crate::animation::{start_typing, wire_hover, wire_reveal};
use crate::filter::{settle_layout, wire_filters, FilterBinding};
use crate::nav::{wire_navigation, wire_scroll_spy};
use crate::theme::{wire_theme, LocalStorageStore};

pub type SharedController = Rc<RefCell<PageController>>;

/// All page state, shared by the event handlers. Borrows never outlive a
/// single handler invocation.
pub struct PageController {
    pub config: PageConfig,
    pub nav: NavState,
    pub theme: ThemeManager<LocalStorageStore>,
    filter: Option<FilterBinding>,
}

impl PageController {
    pub fn new(config: PageConfig) -> Self {
        let theme = ThemeManager::new(LocalStorageStore::new(), config.storage_key.clone());
        Self {
            config,
            nav: NavState::new(),
            theme,
            filter: None,
        }
    }

    pub fn shared(config: PageConfig) -> SharedController {
        Rc::new(RefCell::new(Self::new(config)))
    }

    /// Filter binding, read from the DOM on first use. Dropdown navigation
    /// can need it before the filter buttons are wired.
    pub fn filter_binding(&mut self) -> Result<&mut FilterBinding> {
        let binding = match self.filter.take() {
            Some(binding) => binding,
            None => FilterBinding::from_document()?,
        };
        Ok(self.filter.insert(binding))
    }

    pub fn clear_filters(&mut self) -> Result<()> {
        self.filter_binding()?.clear_filters();
        Ok(())
    }
}

pub fn run_stage(controller: &SharedController, stage: InitStage) -> Result<()> {
    let config = controller.borrow().config.clone();
    match stage {
        InitStage::Theme => wire_theme(controller),
        InitStage::Navigation => wire_navigation(controller),
        InitStage::ScrollSpy => wire_scroll_spy(controller),
        InitStage::Animations => {
            wire_reveal(&config)?;
            wire_hover()
        }
        InitStage::Typing => start_typing(&config),
        InitStage::FilterWiring => wire_filters(controller),
        InitStage::LayoutSettle => settle_layout(),
    }
}

/// Run every stage in plan order. A failing stage is logged and skipped so
/// later behaviours still attach.
pub async fn run_plan(controller: SharedController, plan: InitPlan) {
    for (wait, stage) in plan.waits() {
        if wait > 0 {
            TimeoutFuture::new(wait).await;
        }
        match run_stage(&controller, stage) {
            Ok(()) => dioxus_logger::tracing::debug!("Init stage '{}' complete", stage),
            Err(e) if e.is_missing_element() => {
                dioxus_logger::tracing::debug!("Init stage '{}' skipped: {}", stage, e)
            }
            Err(e) => dioxus_logger::tracing::warn!("Init stage '{}' failed: {}", stage, e),
        }
    }
}

use std::fmt;

use crate::config::PageConfig;
use crate::error::Result;

/// Named page setup stages, in the order they must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InitStage {
    Theme,
    Navigation,
    ScrollSpy,
    Animations,
    Typing,
    FilterWiring,
    LayoutSettle,
}

impl InitStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitStage::Theme => "theme",
            InitStage::Navigation => "navigation",
            InitStage::ScrollSpy => "scroll_spy",
            InitStage::Animations => "animations",
            InitStage::Typing => "typing",
            InitStage::FilterWiring => "filter_wiring",
            InitStage::LayoutSettle => "layout_settle",
        }
    }
}

impl fmt::Display for InitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStage {
    pub stage: InitStage,
    /// Offset from page ready
    pub at_ms: u32,
}

/// Ordered, finite init queue. Offsets never decrease along the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPlan {
    stages: Vec<ScheduledStage>,
}

impl InitPlan {
    pub fn from_config(config: &PageConfig) -> Result<Self> {
        config.validate()?;

        let immediate = |stage| ScheduledStage { stage, at_ms: 0 };
        let stages = vec![
            immediate(InitStage::Theme),
            immediate(InitStage::Navigation),
            immediate(InitStage::ScrollSpy),
            immediate(InitStage::Animations),
            immediate(InitStage::Typing),
            ScheduledStage {
                stage: InitStage::FilterWiring,
                at_ms: config.filter_wiring_delay_ms,
            },
            ScheduledStage {
                stage: InitStage::LayoutSettle,
                at_ms: config.layout_settle_delay_ms,
            },
        ];

        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[ScheduledStage] {
        &self.stages
    }

    /// Pairs of (wait before stage, stage) for a sequential driver.
    pub fn waits(&self) -> Vec<(u32, InitStage)> {
        let mut elapsed = 0;
        self.stages
            .iter()
            .map(|scheduled| {
                let wait = scheduled.at_ms.saturating_sub(elapsed);
                elapsed = elapsed.max(scheduled.at_ms);
                (wait, scheduled.stage)
            })
            .collect()
    }

    pub fn position(&self, stage: InitStage) -> Option<usize> {
        self.stages.iter().position(|s| s.stage == stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;

    #[test]
    fn filter_wiring_precedes_layout_settle() {
        let plan = InitPlan::from_config(&PageConfig::default()).unwrap();
        let wiring = plan.position(InitStage::FilterWiring).unwrap();
        let settle = plan.position(InitStage::LayoutSettle).unwrap();
        assert!(wiring < settle);
        assert_eq!(plan.stages().last().unwrap().stage, InitStage::LayoutSettle);
    }

    #[test]
    fn waits_are_relative_to_previous_stage() {
        let plan = InitPlan::from_config(&PageConfig::default()).unwrap();
        let waits = plan.waits();
        assert_eq!(waits[0], (0, InitStage::Theme));
        assert_eq!(waits[5], (500, InitStage::FilterWiring));
        assert_eq!(waits[6], (100, InitStage::LayoutSettle));
        let total: u32 = waits.iter().map(|(w, _)| w).sum();
        assert_eq!(total, 600);
    }

    #[test]
    fn equal_delays_still_keep_order() {
        let config = PageConfig {
            filter_wiring_delay_ms: 0,
            layout_settle_delay_ms: 0,
            ..PageConfig::default()
        };
        let plan = InitPlan::from_config(&config).unwrap();
        assert!(plan.waits().iter().all(|(wait, _)| *wait == 0));
        assert!(
            plan.position(InitStage::FilterWiring) < plan.position(InitStage::LayoutSettle)
        );
    }

    #[test]
    fn inverted_delays_are_rejected() {
        let config = PageConfig {
            filter_wiring_delay_ms: 900,
            layout_settle_delay_ms: 100,
            ..PageConfig::default()
        };
        assert!(matches!(
            InitPlan::from_config(&config),
            Err(PageError::InvalidConfig(_))
        ));
    }

    #[test]
    fn stage_names() {
        assert_eq!(InitStage::LayoutSettle.to_string(), "layout_settle");
    }
}

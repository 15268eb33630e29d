use super::config::DesignConfig;
use crate::core::thermo::stability::{EndStability, ThermoError};
use crate::core::utils::predicates::{gc_content, has_long_run};
use std::fmt;

/// Why a window was discarded. Variants are listed in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    GcContent,
    HomopolymerRun,
    Stability,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectionReason::GcContent => "GC content outside 40-60%",
            RejectionReason::HomopolymerRun => "homopolymer run too long",
            RejectionReason::Stability => "5' end not less stable than 3' end",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Accepted,
    Rejected(RejectionReason),
}

impl FilterOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, FilterOutcome::Accepted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    GcContent,
    HomopolymerRun { threshold: usize },
    EndStability,
}

impl FilterStage {
    fn passes(&self, window: &str) -> Result<bool, ThermoError> {
        Ok(match self {
            FilterStage::GcContent => gc_content(window),
            FilterStage::HomopolymerRun { threshold } => !has_long_run(window, *threshold),
            FilterStage::EndStability => EndStability::of(window)?.favors_five_prime(),
        })
    }

    fn reason(&self) -> RejectionReason {
        match self {
            FilterStage::GcContent => RejectionReason::GcContent,
            FilterStage::HomopolymerRun { .. } => RejectionReason::HomopolymerRun,
            FilterStage::EndStability => RejectionReason::Stability,
        }
    }
}

/// Ordered viability checks; evaluation stops at the first failing stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPipeline {
    stages: Vec<FilterStage>,
}

impl FilterPipeline {
    pub fn new(config: &DesignConfig) -> Self {
        Self {
            stages: vec![
                FilterStage::GcContent,
                FilterStage::HomopolymerRun {
                    threshold: config.run_length_threshold,
                },
                FilterStage::EndStability,
            ],
        }
    }

    pub fn stages(&self) -> &[FilterStage] {
        &self.stages
    }

    pub fn evaluate(&self, window: &str) -> Result<FilterOutcome, ThermoError> {
        for stage in &self.stages {
            if !stage.passes(window)? {
                return Ok(FilterOutcome::Rejected(stage.reason()));
            }
        }
        Ok(FilterOutcome::Accepted)
    }
}

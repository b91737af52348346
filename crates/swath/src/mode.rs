use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::plan::PlanOpportunitySet;
use crate::properties::SwathProperties;

/// Global swath visibility mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityMode {
    Off,
    SelectedPlan,
    #[default]
    Filtered,
    All,
}

impl VisibilityMode {
    /// Fixed cycle order.
    pub const CYCLE: [VisibilityMode; 4] = [
        VisibilityMode::Off,
        VisibilityMode::SelectedPlan,
        VisibilityMode::Filtered,
        VisibilityMode::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisibilityMode::Off => "off",
            VisibilityMode::SelectedPlan => "selected_plan",
            VisibilityMode::Filtered => "filtered",
            VisibilityMode::All => "all",
        }
    }

    /// The next mode in [`VisibilityMode::CYCLE`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::CYCLE.iter().position(|m| *m == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    /// Mode-level visibility predicate. `All` admits everything; the count
    /// cap is applied afterwards by the LOD gate.
    pub fn admits(
        &self,
        swath: &SwathProperties,
        plan: &PlanOpportunitySet,
        filter: &FilterState,
    ) -> bool {
        match self {
            VisibilityMode::Off => false,
            VisibilityMode::SelectedPlan => plan.contains(&swath.opportunity_id),
            VisibilityMode::Filtered => filter.matches(&swath.target_id, swath.run_id.as_deref()),
            VisibilityMode::All => true,
        }
    }
}

impl std::fmt::Display for VisibilityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    pub input: String,
}

impl std::fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown visibility mode {:?} (expected off, selected_plan, filtered or all)",
            self.input
        )
    }
}

impl std::error::Error for ParseModeError {}

impl std::str::FromStr for VisibilityMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .iter()
            .copied()
            .find(|m| m.label() == s)
            .ok_or_else(|| ParseModeError {
                input: s.to_string(),
            })
    }
}

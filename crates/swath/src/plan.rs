use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One item of the active planning result's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub opportunity_id: String,
    #[serde(default)]
    pub satellite_id: Option<String>,
    #[serde(default)]
    pub target_id: Option<String>,
}

impl ScheduleItem {
    pub fn new(opportunity_id: impl Into<String>) -> Self {
        Self {
            opportunity_id: opportunity_id.into(),
            satellite_id: None,
            target_id: None,
        }
    }
}

/// Membership set of opportunities scheduled by the active plan.
///
/// Rebuilt wholesale whenever the plan changes; never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanOpportunitySet {
    ids: HashSet<String>,
}

impl PlanOpportunitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_schedule(items: &[ScheduleItem]) -> Self {
        Self {
            ids: items.iter().map(|i| i.opportunity_id.clone()).collect(),
        }
    }

    pub fn contains(&self, opportunity_id: &str) -> bool {
        self.ids.contains(opportunity_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{PlanOpportunitySet, ScheduleItem};

    #[test]
    fn builds_membership_from_schedule() {
        let set = PlanOpportunitySet::from_schedule(&[
            ScheduleItem::new("OPP1"),
            ScheduleItem::new("OPP2"),
            ScheduleItem::new("OPP1"),
        ]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("OPP1"));
        assert!(!set.contains("OPP3"));
    }

    #[test]
    fn schedule_items_deserialize_with_optional_fields() {
        let items: Vec<ScheduleItem> =
            serde_json::from_str(r#"[{"opportunity_id":"OPP9","satellite_id":"SAT-2"}]"#)
                .unwrap();
        assert_eq!(items[0].opportunity_id, "OPP9");
        assert_eq!(items[0].satellite_id.as_deref(), Some("SAT-2"));
        assert_eq!(items[0].target_id, None);
    }
}

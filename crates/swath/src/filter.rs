use serde::Serialize;

/// Target/run filter applied inside `filtered` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub filtered_target_id: Option<String>,
    pub active_run_id: Option<String>,
    pub auto_filter_enabled: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            filtered_target_id: None,
            active_run_id: None,
            auto_filter_enabled: true,
        }
    }
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        self.filtered_target_id.is_some() || self.active_run_id.is_some()
    }

    /// A candidate passes unless a set filter id differs from its own.
    ///
    /// A candidate without a run id fails an active run filter.
    pub fn matches(&self, target_id: &str, run_id: Option<&str>) -> bool {
        if let Some(target) = self.filtered_target_id.as_deref()
            && target != target_id
        {
            return false;
        }
        if let Some(run) = self.active_run_id.as_deref()
            && run_id != Some(run)
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::FilterState;

    #[test]
    fn inactive_filter_matches_everything() {
        let f = FilterState::default();
        assert!(!f.is_active());
        assert!(f.matches("T1", None));
        assert!(f.matches("T2", Some("R1")));
    }

    #[test]
    fn target_filter() {
        let f = FilterState {
            filtered_target_id: Some("T1".to_string()),
            ..FilterState::default()
        };
        assert!(f.is_active());
        assert!(f.matches("T1", Some("R9")));
        assert!(!f.matches("T2", Some("R9")));
    }

    #[test]
    fn run_filter_requires_matching_run() {
        let f = FilterState {
            active_run_id: Some("R1".to_string()),
            ..FilterState::default()
        };
        assert!(f.matches("T1", Some("R1")));
        assert!(!f.matches("T1", Some("R2")));
        assert!(!f.matches("T1", None));
    }

    #[test]
    fn both_filters_must_pass() {
        let f = FilterState {
            filtered_target_id: Some("T1".to_string()),
            active_run_id: Some("R1".to_string()),
            auto_filter_enabled: false,
        };
        assert!(f.matches("T1", Some("R1")));
        assert!(!f.matches("T2", Some("R1")));
        assert!(!f.matches("T1", Some("R2")));
    }

    #[test]
    fn substring_ids_do_not_match() {
        let f = FilterState {
            filtered_target_id: Some("T1".to_string()),
            ..FilterState::default()
        };
        assert!(!f.matches("T10", None));
        assert!(!f.matches("", None));
    }
}

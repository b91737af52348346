//! Count cap for `all` mode.
//!
//! "LOD" here is a flat visible-count limit. Geometry is never simplified;
//! `simplified` is only a label for "the cap was reached".

use serde::{Deserialize, Serialize};

use crate::mode::VisibilityMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LodConfig {
    pub max_all_swaths: usize,
    /// Camera altitude (meters). Reserved; the count cap ignores it.
    pub lod_threshold_altitude: f64,
    pub filter_debounce_ms: u64,
    pub show_cap_warning: bool,
}

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            max_all_swaths: 200,
            lod_threshold_altitude: 5_000_000.0,
            filter_debounce_ms: 150,
            show_cap_warning: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LodLevel {
    #[default]
    Full,
    Simplified,
    Hidden,
}

/// Admits mode-eligible candidates in enumeration order until the cap is hit.
///
/// Only gates in `all` mode; in every other mode each eligible candidate is admitted.
#[derive(Debug, Clone)]
pub struct LodGate {
    mode: VisibilityMode,
    max: usize,
    admitted: usize,
    eligible: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LodOutcome {
    pub rendered: usize,
    pub eligible: usize,
    pub capped: bool,
    pub level: LodLevel,
}

impl LodGate {
    pub fn new(mode: VisibilityMode, config: &LodConfig) -> Self {
        Self {
            mode,
            max: config.max_all_swaths,
            admitted: 0,
            eligible: 0,
        }
    }

    /// Call once per mode-eligible candidate, in scene order.
    pub fn admit(&mut self) -> bool {
        self.eligible += 1;
        if self.mode == VisibilityMode::All && self.admitted >= self.max {
            return false;
        }
        self.admitted += 1;
        true
    }

    pub fn finish(self) -> LodOutcome {
        let capped = self.mode == VisibilityMode::All && self.admitted >= self.max;
        let level = match self.mode {
            VisibilityMode::Off => LodLevel::Hidden,
            _ if capped => LodLevel::Simplified,
            _ => LodLevel::Full,
        };
        LodOutcome {
            rendered: self.admitted,
            eligible: self.eligible,
            capped,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LodConfig, LodGate, LodLevel};
    use crate::mode::VisibilityMode;

    fn cfg(max: usize) -> LodConfig {
        LodConfig {
            max_all_swaths: max,
            ..LodConfig::default()
        }
    }

    #[test]
    fn caps_all_mode_in_order() {
        let mut gate = LodGate::new(VisibilityMode::All, &cfg(3));
        let admitted: Vec<bool> = (0..5).map(|_| gate.admit()).collect();
        assert_eq!(admitted, vec![true, true, true, false, false]);
        let out = gate.finish();
        assert_eq!(out.rendered, 3);
        assert_eq!(out.eligible, 5);
        assert!(out.capped);
        assert_eq!(out.level, LodLevel::Simplified);
    }

    #[test]
    fn under_cap_is_full() {
        let mut gate = LodGate::new(VisibilityMode::All, &cfg(10));
        for _ in 0..4 {
            assert!(gate.admit());
        }
        let out = gate.finish();
        assert!(!out.capped);
        assert_eq!(out.level, LodLevel::Full);
    }

    #[test]
    fn reaching_cap_exactly_counts_as_capped() {
        let mut gate = LodGate::new(VisibilityMode::All, &cfg(2));
        gate.admit();
        gate.admit();
        assert!(gate.finish().capped);
    }

    #[test]
    fn other_modes_are_not_capped() {
        let mut gate = LodGate::new(VisibilityMode::Filtered, &cfg(1));
        for _ in 0..5 {
            assert!(gate.admit());
        }
        let out = gate.finish();
        assert_eq!(out.rendered, 5);
        assert!(!out.capped);
        assert_eq!(out.level, LodLevel::Full);
    }

    #[test]
    fn off_reports_hidden() {
        let out = LodGate::new(VisibilityMode::Off, &cfg(200)).finish();
        assert_eq!(out.level, LodLevel::Hidden);
        assert_eq!(out.rendered, 0);
    }

    #[test]
    fn config_defaults_fill_missing_json_fields() {
        let c: LodConfig = serde_json::from_str(r#"{"max_all_swaths": 50}"#).unwrap();
        assert_eq!(c.max_all_swaths, 50);
        assert_eq!(c.filter_debounce_ms, 150);
        assert!(c.show_cap_warning);
    }
}

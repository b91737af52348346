use foundation::time::Time;
use serde::Serialize;

use crate::lod::LodLevel;
use crate::mode::VisibilityMode;

/// What the most recent click resolved to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickHitType {
    /// No click has been processed yet.
    #[default]
    None,
    SarSwath,
    /// An entity that is not a swath.
    Entity,
    /// Nothing pickable, or a primitive without an entity.
    Empty,
}

impl PickHitType {
    pub fn label(&self) -> &'static str {
        match self {
            PickHitType::None => "none",
            PickHitType::SarSwath => "sar_swath",
            PickHitType::Entity => "entity",
            PickHitType::Empty => "empty",
        }
    }
}

/// Read-only snapshot of engine state for debug overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugInfo {
    pub current_run_id: Option<String>,
    pub rendered_swath_count: usize,
    pub selected_opportunity_id: Option<String>,
    pub hovered_opportunity_id: Option<String>,
    pub picking_hit_type: PickHitType,
    pub last_pick_time: Option<Time>,
    pub visibility_mode: VisibilityMode,
    pub lod_level: LodLevel,
    pub filter_active: bool,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            current_run_id: None,
            rendered_swath_count: 0,
            selected_opportunity_id: None,
            hovered_opportunity_id: None,
            picking_hit_type: PickHitType::None,
            last_pick_time: None,
            visibility_mode: VisibilityMode::default(),
            lod_level: LodLevel::Full,
            filter_active: false,
        }
    }
}

/// Owner of [`DebugInfo`]. Only the engine mutates it.
///
/// `revision` increases on every effective change so overlays can poll
/// without diffing snapshots.
#[derive(Debug, Default)]
pub struct DebugTelemetry {
    info: DebugInfo,
    revision: u64,
}

impl DebugTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &DebugInfo {
        &self.info
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `f` and bumps the revision if anything changed.
    pub(crate) fn update(&mut self, f: impl FnOnce(&mut DebugInfo)) {
        let mut next = self.info.clone();
        f(&mut next);
        if next != self.info {
            self.info = next;
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DebugTelemetry, PickHitType};
    use foundation::time::Time;

    #[test]
    fn revision_moves_only_on_change() {
        let mut t = DebugTelemetry::new();
        assert_eq!(t.revision(), 0);
        t.update(|i| i.rendered_swath_count = 3);
        assert_eq!(t.revision(), 1);
        t.update(|i| i.rendered_swath_count = 3);
        assert_eq!(t.revision(), 1);
        t.update(|i| {
            i.picking_hit_type = PickHitType::SarSwath;
            i.last_pick_time = Some(Time(2.0));
        });
        assert_eq!(t.revision(), 2);
        assert_eq!(t.snapshot().picking_hit_type.label(), "sar_swath");
    }

    #[test]
    fn serializes_labels() {
        let t = DebugTelemetry::new();
        let json = serde_json::to_value(t.snapshot()).unwrap();
        assert_eq!(json["picking_hit_type"], "none");
        assert_eq!(json["visibility_mode"], "filtered");
        assert_eq!(json["lod_level"], "full");
        assert_eq!(json["last_pick_time"], serde_json::Value::Null);
    }
}

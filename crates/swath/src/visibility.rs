//! The visibility pass: mode → filter → count cap → style, per swath object.

use scene::Scene;
use tracing::debug;

use crate::filter::FilterState;
use crate::lod::{LodConfig, LodGate, LodOutcome};
use crate::mode::VisibilityMode;
use crate::plan::PlanOpportunitySet;
use crate::properties::extract;
use crate::style::{StyleTable, StyleTier};

/// Everything the pass reads. Borrowed from the engine for one evaluation.
pub struct PassInputs<'a> {
    pub mode: VisibilityMode,
    pub selected: Option<&'a str>,
    pub hovered: Option<&'a str>,
    pub filter: &'a FilterState,
    pub plan: &'a PlanOpportunitySet,
    pub lod: &'a LodConfig,
    pub styles: &'a StyleTable,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub swaths: usize,
    pub lod: LodOutcome,
}

/// Writes visibility (and, for visible swaths, style) onto every swath object.
///
/// Ordering contract:
/// - Candidates are visited in `Scene::entities()` order; under the `all`
///   cap the first `max_all_swaths` eligible swaths win.
///
/// Notes:
/// - Non-swath objects are left untouched.
/// - Hidden swaths keep their previous style.
/// - `dimmed` only applies to visible swaths that fail an active filter.
///   Filtered mode already hides those, so in practice it is not reached.
pub fn apply<S: Scene + ?Sized>(scene: &mut S, inputs: &PassInputs<'_>) -> PassSummary {
    let mut gate = LodGate::new(inputs.mode, inputs.lod);
    let mut swaths = 0usize;

    for entity in scene.entities() {
        let Some(swath) = extract(scene.properties(entity)) else {
            continue;
        };
        swaths += 1;

        let eligible = inputs.mode.admits(&swath, inputs.plan, inputs.filter);
        let visible = eligible && gate.admit();
        scene.set_visible(entity, visible);
        if !visible {
            continue;
        }

        let id = swath.opportunity_id.as_str();
        let dimmed = inputs.mode == VisibilityMode::Filtered
            && inputs.filter.is_active()
            && !inputs.filter.matches(&swath.target_id, swath.run_id.as_deref());
        let tier = StyleTier::resolve(
            inputs.selected == Some(id),
            inputs.hovered == Some(id),
            dimmed,
        );
        scene.set_style(entity, inputs.styles.style(tier, swath.look_side));
    }

    let lod = gate.finish();
    debug!(
        mode = %inputs.mode,
        swaths,
        rendered = lod.rendered,
        capped = lod.capped,
        "visibility pass"
    );
    scene.request_repaint();
    PassSummary { swaths, lod }
}

use foundation::math::Vec2;
use scene::{Scene, World};
use serde::Serialize;
use swath::properties::extract;
use swath::{
    DebugInfo, EngineConfig, PickHitType, ScheduleItem, SwathEngine, SwathProperties,
    VisibilityMode,
};

/// Session state to establish before evaluating or picking.
#[derive(Debug, Clone, Default)]
pub struct SessionSetup {
    pub mode: Option<VisibilityMode>,
    pub filtered_target: Option<String>,
    pub active_run: Option<String>,
    pub plan: Option<Vec<ScheduleItem>>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub visible_opportunity_ids: Vec<String>,
    pub cap_warning: bool,
    pub debug: DebugInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickReport {
    pub hit_type: PickHitType,
    pub is_swath: bool,
    pub entity: Option<u32>,
    pub opportunity_id: Option<String>,
    pub properties: Option<SwathProperties>,
    pub selected_opportunity_id: Option<String>,
}

fn session(world: World, config: EngineConfig, setup: &SessionSetup) -> SwathEngine<World> {
    let mut engine = SwathEngine::with_config(world, config);
    if let Some(plan) = &setup.plan {
        engine.set_active_plan(plan);
    }
    if let Some(mode) = setup.mode {
        engine.set_mode(mode);
    }
    engine.set_filtered_target(setup.filtered_target.as_deref());
    engine.set_active_run_id(setup.active_run.as_deref());
    engine.select_swath(setup.selected.as_deref());
    engine.refresh();
    engine
}

pub fn evaluate(world: World, config: EngineConfig, setup: &SessionSetup) -> EvaluationReport {
    let engine = session(world, config, setup);
    let scene = engine.scene();
    let visible_opportunity_ids = scene
        .entities()
        .into_iter()
        .filter(|e| scene.is_visible(*e))
        .filter_map(|e| extract(scene.properties(e)))
        .map(|swath| swath.opportunity_id)
        .collect();

    EvaluationReport {
        visible_opportunity_ids,
        cap_warning: engine.cap_warning(),
        debug: engine.debug_info().clone(),
    }
}

/// Clicks at `point` after the session's visibility pass has run.
pub fn pick(world: World, config: EngineConfig, setup: &SessionSetup, point: Vec2) -> PickReport {
    let mut engine = session(world, config, setup);
    let result = engine.on_click(point);
    PickReport {
        hit_type: result.hit_type(),
        is_swath: result.is_swath,
        entity: result.entity_id.map(|e| e.index()),
        opportunity_id: result.opportunity_id,
        properties: result.properties,
        selected_opportunity_id: engine.selection().selected_opportunity_id.clone(),
    }
}

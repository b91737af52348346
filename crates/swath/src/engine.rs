use foundation::math::Vec2;
use foundation::time::Time;
use runtime::metrics::Metrics;
use scene::Scene;
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::debug::{DebugInfo, DebugTelemetry};
use crate::filter::FilterState;
use crate::lod::LodConfig;
use crate::mode::VisibilityMode;
use crate::picking::{PickResult, resolve_pick};
use crate::plan::{PlanOpportunitySet, ScheduleItem};
use crate::scheduler::{Decision, UpdateKey, UpdateScheduler};
use crate::style::StyleTable;
use crate::visibility::{self, PassInputs};

/// Cross-panel selection sync (results table, inspector, node explorer).
///
/// The engine only pushes; it never reads back.
pub trait SelectionSink {
    fn notify_selected(&mut self, opportunity_id: &str);

    fn notify_hovered(&mut self, _opportunity_id: Option<&str>) {}
}

/// At most one selected and one hovered opportunity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub selected_opportunity_id: Option<String>,
    pub hovered_opportunity_id: Option<String>,
}

/// Owns visibility mode, filters, selection, LOD config and debug telemetry
/// for one hosting session, and is the sole writer of swath visibility and
/// style onto the scene.
///
/// Time only moves through [`SwathEngine::tick`]. Setters that change filter
/// state defer the visibility pass by `filter_debounce_ms`; selection, hover
/// and mode changes apply it before returning.
///
/// Selection and hover ids are not checked against the scene after a data
/// refresh. Hosts that replace scene content call [`SwathEngine::clear_selection`].
pub struct SwathEngine<S: Scene> {
    scene: S,
    mode: VisibilityMode,
    selection: SelectionState,
    filter: FilterState,
    plan: PlanOpportunitySet,
    lod: LodConfig,
    styles: StyleTable,
    scheduler: UpdateScheduler,
    telemetry: DebugTelemetry,
    metrics: Metrics,
    sinks: Vec<Box<dyn SelectionSink>>,
    now: Time,
    capped: bool,
    debug_enabled: bool,
}

impl<S: Scene> SwathEngine<S> {
    pub fn new(scene: S) -> Self {
        Self::with_config(scene, EngineConfig::default())
    }

    /// Builds the engine without touching the scene; call [`SwathEngine::refresh`]
    /// once content is loaded.
    pub fn with_config(scene: S, config: EngineConfig) -> Self {
        let mut engine = Self {
            scene,
            mode: config.initial_mode,
            selection: SelectionState::default(),
            filter: FilterState {
                auto_filter_enabled: config.auto_filter_enabled,
                ..FilterState::default()
            },
            plan: PlanOpportunitySet::new(),
            scheduler: UpdateScheduler::new(config.lod.filter_debounce_ms),
            lod: config.lod,
            styles: StyleTable::default(),
            telemetry: DebugTelemetry::new(),
            metrics: Metrics::new(),
            sinks: Vec::new(),
            now: Time::ZERO,
            capped: false,
            debug_enabled: false,
        };
        engine.sync_telemetry();
        engine
    }

    pub fn add_selection_sink(&mut self, sink: Box<dyn SelectionSink>) {
        self.sinks.push(sink);
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Direct scene access for content replacement. Follow with
    /// [`SwathEngine::refresh`] (and usually [`SwathEngine::clear_selection`]).
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn now(&self) -> Time {
        self.now
    }

    pub fn mode(&self) -> VisibilityMode {
        self.mode
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn plan(&self) -> &PlanOpportunitySet {
        &self.plan
    }

    pub fn lod_config(&self) -> &LodConfig {
        &self.lod
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn debug_info(&self) -> &DebugInfo {
        self.telemetry.snapshot()
    }

    pub fn debug_revision(&self) -> u64 {
        self.telemetry.revision()
    }

    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.debug_enabled = enabled;
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    /// Snapshot for a debug overlay; `None` while the host has it toggled off.
    pub fn debug_overlay(&self) -> Option<DebugInfo> {
        self.debug_enabled
            .then(|| self.telemetry.snapshot().clone())
    }

    /// True when the last pass hit the `all`-mode cap and warnings are enabled.
    pub fn cap_warning(&self) -> bool {
        self.lod.show_cap_warning && self.capped
    }

    pub fn pending_update_deadline(&self) -> Option<Time> {
        self.scheduler.pending_deadline()
    }

    /// Advances engine time and runs a deferred pass that has come due.
    pub fn tick(&mut self, now: Time) {
        if now > self.now {
            self.now = now;
        }
        if self.scheduler.poll(self.now) {
            self.run_deferred();
        }
    }

    /// Runs a pending deferred pass now instead of waiting for its deadline.
    pub fn flush(&mut self) {
        if self.scheduler.take_pending() {
            self.run_deferred();
        }
    }

    /// Re-evaluates everything, e.g. after the host replaced scene content.
    pub fn refresh(&mut self) {
        self.metrics.inc("recompute.forced");
        self.scheduler.invalidate();
        self.schedule_update();
    }

    pub fn set_mode(&mut self, mode: VisibilityMode) {
        if self.mode == mode {
            return;
        }
        info!(from = %self.mode, to = %mode, "visibility mode changed");
        self.mode = mode;
        self.schedule_update();
    }

    /// Advances through `off → selected_plan → filtered → all → off`.
    pub fn cycle_mode(&mut self) -> VisibilityMode {
        self.set_mode(self.mode.next());
        self.mode
    }

    pub fn set_filtered_target(&mut self, target_id: Option<&str>) {
        if self.filter.filtered_target_id.as_deref() == target_id {
            return;
        }
        info!(target_id = ?target_id, "target filter changed");
        self.filter.filtered_target_id = target_id.map(str::to_string);
        self.schedule_update();
    }

    pub fn set_active_run_id(&mut self, run_id: Option<&str>) {
        if self.filter.active_run_id.as_deref() == run_id {
            return;
        }
        info!(run_id = ?run_id, "active run changed");
        self.filter.active_run_id = run_id.map(str::to_string);
        self.schedule_update();
    }

    pub fn clear_filters(&mut self) {
        if !self.filter.is_active() {
            return;
        }
        info!("filters cleared");
        self.filter.filtered_target_id = None;
        self.filter.active_run_id = None;
        self.schedule_update();
    }

    pub fn set_auto_filter_enabled(&mut self, enabled: bool) {
        self.filter.auto_filter_enabled = enabled;
    }

    /// A target panel focused `target_id`. Applied as the target filter only
    /// while auto filtering is enabled; returns whether it was applied.
    pub fn focus_target(&mut self, target_id: Option<&str>) -> bool {
        if !self.filter.auto_filter_enabled {
            debug!(target_id = ?target_id, "auto filter disabled; focus ignored");
            return false;
        }
        self.set_filtered_target(target_id);
        true
    }

    /// Inbound selection from another panel. Sinks are not notified.
    /// Selecting the current id again changes nothing.
    pub fn select_swath(&mut self, opportunity_id: Option<&str>) {
        if self.selection.selected_opportunity_id.as_deref() == opportunity_id {
            return;
        }
        self.selection.selected_opportunity_id = opportunity_id.map(str::to_string);
        self.schedule_update();
    }

    /// Inbound hover from another panel. Sinks are not notified.
    pub fn set_hovered_swath(&mut self, opportunity_id: Option<&str>) {
        if self.selection.hovered_opportunity_id.as_deref() == opportunity_id {
            return;
        }
        self.selection.hovered_opportunity_id = opportunity_id.map(str::to_string);
        self.schedule_update();
    }

    /// Clears selected and hovered ids; hosts call this when the dataset is replaced.
    pub fn clear_selection(&mut self) {
        if self.selection == SelectionState::default() {
            return;
        }
        self.selection = SelectionState::default();
        self.schedule_update();
    }

    /// Rebuilds plan membership from the active planning result's schedule.
    pub fn set_active_plan(&mut self, schedule: &[ScheduleItem]) {
        self.plan = PlanOpportunitySet::from_schedule(schedule);
        info!(opportunities = self.plan.len(), "active plan changed");
        self.refresh();
    }

    pub fn clear_active_plan(&mut self) {
        self.plan = PlanOpportunitySet::new();
        info!("active plan cleared");
        self.refresh();
    }

    pub fn set_lod_config(&mut self, lod: LodConfig) {
        info!(
            max_all_swaths = lod.max_all_swaths,
            filter_debounce_ms = lod.filter_debounce_ms,
            "lod config changed"
        );
        self.scheduler.set_debounce_ms(lod.filter_debounce_ms);
        self.lod = lod;
        self.refresh();
    }

    /// Pointer click: selects the swath under `point`, or clears swath
    /// selection when the click lands on anything else.
    pub fn on_click(&mut self, point: Vec2) -> PickResult {
        self.metrics.inc("pick.click");
        let result = resolve_pick(&self.scene, point);
        let hit_type = result.hit_type();
        let now = self.now;
        self.telemetry.update(|info| {
            info.picking_hit_type = hit_type;
            info.last_pick_time = Some(now);
        });
        debug!(hit = hit_type.label(), opportunity = ?result.opportunity_id, "click");

        if let Some(id) = result.opportunity_id.as_deref() {
            for sink in &mut self.sinks {
                sink.notify_selected(id);
            }
        }
        // A pending filter deadline only moves for filter changes.
        if self.selection.selected_opportunity_id != result.opportunity_id {
            self.selection.selected_opportunity_id = result.opportunity_id.clone();
            self.schedule_update();
        }
        result
    }

    /// Pointer move: re-picks on every call, but only a change of the
    /// hovered opportunity updates state and notifies sinks.
    ///
    /// Returns `true` when the hovered id changed.
    pub fn on_pointer_move(&mut self, point: Vec2) -> bool {
        let hovered = resolve_pick(&self.scene, point).opportunity_id;
        if hovered == self.selection.hovered_opportunity_id {
            return false;
        }
        trace!(from = ?self.selection.hovered_opportunity_id, to = ?hovered, "hover changed");
        self.metrics.inc("pick.hover_changed");
        self.selection.hovered_opportunity_id = hovered;
        for sink in &mut self.sinks {
            sink.notify_hovered(self.selection.hovered_opportunity_id.as_deref());
        }
        self.schedule_update();
        true
    }

    fn current_key(&self) -> UpdateKey {
        UpdateKey {
            mode: self.mode,
            selected: self.selection.selected_opportunity_id.clone(),
            hovered: self.selection.hovered_opportunity_id.clone(),
            filtered_target: self.filter.filtered_target_id.clone(),
            active_run: self.filter.active_run_id.clone(),
        }
    }

    fn schedule_update(&mut self) {
        self.sync_telemetry();
        let key = self.current_key();
        match self.scheduler.request(&key, self.now) {
            Decision::Skip => self.metrics.inc("recompute.skipped"),
            Decision::Immediate => {
                self.metrics.inc("recompute.immediate");
                self.recompute(key);
            }
            Decision::Deferred { deadline } => {
                debug!(deadline_s = deadline.seconds(), "visibility pass deferred");
            }
        }
    }

    fn run_deferred(&mut self) {
        let key = self.current_key();
        if self.scheduler.is_current(&key) {
            self.metrics.inc("recompute.skipped");
            return;
        }
        self.metrics.inc("recompute.debounced");
        self.recompute(key);
    }

    fn recompute(&mut self, key: UpdateKey) {
        let summary = visibility::apply(
            &mut self.scene,
            &PassInputs {
                mode: self.mode,
                selected: self.selection.selected_opportunity_id.as_deref(),
                hovered: self.selection.hovered_opportunity_id.as_deref(),
                filter: &self.filter,
                plan: &self.plan,
                lod: &self.lod,
                styles: &self.styles,
            },
        );

        self.capped = summary.lod.capped;
        self.metrics
            .set_gauge("swaths.rendered", summary.lod.rendered as i64);
        self.metrics
            .record_histogram("recompute.candidates", summary.swaths as i64);
        self.telemetry.update(|info| {
            info.rendered_swath_count = summary.lod.rendered;
            info.lod_level = summary.lod.level;
        });
        self.scheduler.mark_evaluated(key);
    }

    fn sync_telemetry(&mut self) {
        let mode = self.mode;
        let selected = self.selection.selected_opportunity_id.clone();
        let hovered = self.selection.hovered_opportunity_id.clone();
        let run = self.filter.active_run_id.clone();
        let filter_active = self.filter.is_active();
        self.telemetry.update(|info| {
            info.visibility_mode = mode;
            info.selected_opportunity_id = selected;
            info.hovered_opportunity_id = hovered;
            info.current_run_id = run;
            info.filter_active = filter_active;
        });
    }
}

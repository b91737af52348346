use foundation::handles::Handle;
use foundation::math::Vec2;

use crate::components::{ComponentProperties, ScreenFootprint, SurfaceStyle};
use crate::entity::EntityId;
use crate::picking::{PickOptions, pick_screen};
use crate::scene::{Picked, Scene};

/// In-memory scene: per-entity component columns indexed by `EntityId::index()`.
#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    properties: Vec<Option<ComponentProperties>>,
    visible: Vec<bool>,
    styles: Vec<Option<SurfaceStyle>>,
    footprints: Vec<Option<ScreenFootprint>>,
    primitives: Vec<ScreenFootprint>,
    repaint_requests: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(Handle::new(self.next_index, 0));
        self.next_index += 1;
        self.ensure_capacity(id.index() as usize);
        id
    }

    pub fn spawn_with_properties(&mut self, properties: ComponentProperties) -> EntityId {
        let id = self.spawn();
        self.set_properties(id, properties);
        id
    }

    pub fn len(&self) -> usize {
        self.next_index as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }

    pub fn set_properties(&mut self, entity: EntityId, properties: ComponentProperties) {
        self.ensure_capacity(entity.index() as usize);
        self.properties[entity.index() as usize] = Some(properties);
    }

    pub fn set_footprint(&mut self, entity: EntityId, footprint: ScreenFootprint) {
        self.ensure_capacity(entity.index() as usize);
        self.footprints[entity.index() as usize] = Some(footprint);
    }

    pub fn set_visible(&mut self, entity: EntityId, visible: bool) {
        self.ensure_capacity(entity.index() as usize);
        self.visible[entity.index() as usize] = visible;
    }

    pub fn visible(&self, entity: EntityId) -> bool {
        self.visible
            .get(entity.index() as usize)
            .copied()
            .unwrap_or(false)
    }

    pub fn style(&self, entity: EntityId) -> Option<SurfaceStyle> {
        self.styles.get(entity.index() as usize).and_then(|s| *s)
    }

    /// Adds a pickable primitive that has no entity behind it.
    pub fn add_primitive(&mut self, footprint: ScreenFootprint) {
        self.primitives.push(footprint);
    }

    pub fn primitives(&self) -> &[ScreenFootprint] {
        &self.primitives
    }

    /// Visible entities with a footprint, in ascending index order.
    pub fn pickable_footprints(&self) -> Vec<(EntityId, ScreenFootprint)> {
        let mut out = Vec::new();
        for (idx, footprint) in self.footprints.iter().enumerate() {
            let Some(footprint) = footprint else { continue };
            if !self.visible.get(idx).copied().unwrap_or(false) {
                continue;
            }
            out.push((EntityId(Handle::new(idx as u32, 0)), *footprint));
        }
        out
    }

    pub fn visible_entities(&self) -> Vec<EntityId> {
        (0..self.next_index)
            .map(|idx| EntityId(Handle::new(idx, 0)))
            .filter(|e| self.visible(*e))
            .collect()
    }

    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.visible.len() <= idx {
            let new_len = idx + 1;
            self.properties.resize(new_len, None);
            self.visible.resize(new_len, true);
            self.styles.resize(new_len, None);
            self.footprints.resize(new_len, None);
        }
    }
}

impl Scene for World {
    fn entities(&self) -> Vec<EntityId> {
        (0..self.next_index)
            .map(|idx| EntityId(Handle::new(idx, 0)))
            .collect()
    }

    fn properties(&self, entity: EntityId) -> Option<&ComponentProperties> {
        self.properties
            .get(entity.index() as usize)
            .and_then(|p| p.as_ref())
    }

    fn is_visible(&self, entity: EntityId) -> bool {
        self.visible(entity)
    }

    fn set_visible(&mut self, entity: EntityId, visible: bool) {
        World::set_visible(self, entity, visible);
    }

    fn set_style(&mut self, entity: EntityId, style: SurfaceStyle) {
        self.ensure_capacity(entity.index() as usize);
        self.styles[entity.index() as usize] = Some(style);
    }

    fn pick_at_point(&self, point: Vec2) -> Option<Picked> {
        pick_screen(self, point, PickOptions::default())
    }

    fn request_repaint(&mut self) {
        self.repaint_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::components::{ComponentProperties, ScreenFootprint, ScreenRect, SurfaceStyle};
    use crate::scene::{Picked, Scene};
    use foundation::math::Vec2;

    #[test]
    fn entities_enumerate_in_insertion_order() {
        let mut world = World::new();
        let a = world.spawn();
        let b = world.spawn();
        let c = world.spawn();
        assert_eq!(world.entities(), vec![a, b, c]);
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn entities_start_visible_without_style() {
        let mut world = World::new();
        let e = world.spawn();
        assert!(world.is_visible(e));
        assert_eq!(world.style(e), None);
        assert!(world.properties(e).is_none());
    }

    #[test]
    fn scene_writes_land_in_columns() {
        let mut world = World::new();
        let e = world.spawn_with_properties(ComponentProperties::default().with("k", "v"));
        Scene::set_visible(&mut world, e, false);
        world.set_style(e, SurfaceStyle::default());
        world.request_repaint();

        assert!(!world.is_visible(e));
        assert!(world.visible_entities().is_empty());
        assert_eq!(world.style(e), Some(SurfaceStyle::default()));
        assert_eq!(world.repaint_requests(), 1);
        assert_eq!(world.properties(e).and_then(|p| p.text("k").ok()), Some("v"));
    }

    #[test]
    fn pick_at_point_goes_through_scene_trait() {
        let mut world = World::new();
        let e = world.spawn();
        world.set_footprint(
            e,
            ScreenFootprint::new(ScreenRect::from_xywh(0.0, 0.0, 4.0, 4.0), 0.0),
        );
        let scene: &dyn Scene = &world;
        assert_eq!(scene.pick_at_point(Vec2::new(1.0, 1.0)), Some(Picked::Entity(e)));
        assert_eq!(scene.pick_at_point(Vec2::new(9.0, 9.0)), None);
    }
}

use foundation::math::Vec2;

use crate::components::{ComponentProperties, SurfaceStyle};
use crate::entity::EntityId;

/// What a screen-space pick landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Picked {
    Entity(EntityId),
    /// A primitive with no entity behind it (globe tiles, imagery).
    Unrecognized,
}

/// Scene collaborator contract.
///
/// Ordering contract:
/// - `entities()` enumerates in a stable order (insertion order). Consumers
///   that cap counts depend on it, so implementations must not reorder.
pub trait Scene {
    fn entities(&self) -> Vec<EntityId>;

    fn properties(&self, entity: EntityId) -> Option<&ComponentProperties>;

    fn is_visible(&self, entity: EntityId) -> bool;

    fn set_visible(&mut self, entity: EntityId, visible: bool);

    fn set_style(&mut self, entity: EntityId, style: SurfaceStyle);

    fn pick_at_point(&self, point: Vec2) -> Option<Picked>;

    /// Fire-and-forget hint; coalescing repaints is the scene's business.
    fn request_repaint(&mut self);
}

impl<S: Scene + ?Sized> Scene for &mut S {
    fn entities(&self) -> Vec<EntityId> {
        (**self).entities()
    }

    fn properties(&self, entity: EntityId) -> Option<&ComponentProperties> {
        (**self).properties(entity)
    }

    fn is_visible(&self, entity: EntityId) -> bool {
        (**self).is_visible(entity)
    }

    fn set_visible(&mut self, entity: EntityId, visible: bool) {
        (**self).set_visible(entity, visible)
    }

    fn set_style(&mut self, entity: EntityId, style: SurfaceStyle) {
        (**self).set_style(entity, style)
    }

    fn pick_at_point(&self, point: Vec2) -> Option<Picked> {
        (**self).pick_at_point(point)
    }

    fn request_repaint(&mut self) {
        (**self).request_repaint()
    }
}

use foundation::math::Vec2;

use crate::World;
use crate::scene::Picked;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    /// Hits farther than this are ignored.
    pub max_depth: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self { max_depth: 1.0e30 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Candidate {
    depth: f64,
    rank: (u8, u32),
    picked: Picked,
}

/// Deterministic screen-space picking.
///
/// Ordering contract:
/// - The nearest footprint (smallest depth) under `point` wins.
/// - At equal depth, entities beat unrecognized primitives, then the lower
///   `EntityId::index()` (or primitive insertion order) wins.
///
/// Notes:
/// - Hidden entities and entities without a footprint are not pickable.
/// - Non-finite points never hit anything.
pub fn pick_screen(world: &World, point: Vec2, opts: PickOptions) -> Option<Picked> {
    if !point.is_finite() {
        return None;
    }

    let mut best: Option<Candidate> = None;
    let mut consider = |c: Candidate| {
        if c.depth > opts.max_depth {
            return;
        }
        best = match best {
            None => Some(c),
            Some(b) => {
                let ord = c
                    .depth
                    .total_cmp(&b.depth)
                    .then_with(|| c.rank.cmp(&b.rank));
                if ord.is_lt() { Some(c) } else { Some(b) }
            }
        };
    };

    for (entity, footprint) in world.pickable_footprints() {
        if !footprint.rect.contains(point) {
            continue;
        }
        consider(Candidate {
            depth: footprint.depth,
            rank: (0, entity.index()),
            picked: Picked::Entity(entity),
        });
    }

    for (order, footprint) in world.primitives().iter().enumerate() {
        if !footprint.rect.contains(point) {
            continue;
        }
        consider(Candidate {
            depth: footprint.depth,
            rank: (1, order as u32),
            picked: Picked::Unrecognized,
        });
    }

    best.map(|c| c.picked)
}

#[cfg(test)]
mod tests {
    use super::{PickOptions, pick_screen};
    use crate::World;
    use crate::components::{ScreenFootprint, ScreenRect};
    use crate::entity::EntityId;
    use crate::scene::Picked;
    use foundation::math::Vec2;

    fn pick_entity(world: &World, point: Vec2) -> Option<EntityId> {
        match pick_screen(world, point, PickOptions::default())? {
            Picked::Entity(entity) => Some(entity),
            Picked::Unrecognized => None,
        }
    }

    fn footprint(x: f64, y: f64, depth: f64) -> ScreenFootprint {
        ScreenFootprint::new(ScreenRect::from_xywh(x, y, 10.0, 10.0), depth)
    }

    #[test]
    fn picks_nearest_hit() {
        let mut world = World::new();
        let far = world.spawn();
        world.set_footprint(far, footprint(0.0, 0.0, 5.0));
        let near = world.spawn();
        world.set_footprint(near, footprint(0.0, 0.0, 1.0));

        assert_eq!(pick_entity(&world, Vec2::new(5.0, 5.0)), Some(near));
    }

    #[test]
    fn tie_breaks_by_entity_index() {
        let mut world = World::new();
        let first = world.spawn();
        world.set_footprint(first, footprint(0.0, 0.0, 1.0));
        let second = world.spawn();
        world.set_footprint(second, footprint(0.0, 0.0, 1.0));

        assert_eq!(pick_entity(&world, Vec2::new(5.0, 5.0)), Some(first));
    }

    #[test]
    fn hidden_entities_are_not_pickable() {
        let mut world = World::new();
        let e = world.spawn();
        world.set_footprint(e, footprint(0.0, 0.0, 1.0));
        world.set_visible(e, false);

        assert_eq!(
            pick_screen(&world, Vec2::new(5.0, 5.0), PickOptions::default()),
            None
        );
    }

    #[test]
    fn primitive_on_top_is_unrecognized() {
        let mut world = World::new();
        let e = world.spawn();
        world.set_footprint(e, footprint(0.0, 0.0, 3.0));
        world.add_primitive(footprint(0.0, 0.0, 1.0));

        assert_eq!(
            pick_screen(&world, Vec2::new(5.0, 5.0), PickOptions::default()),
            Some(Picked::Unrecognized)
        );
        assert_eq!(pick_entity(&world, Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn empty_space_and_nan_miss() {
        let mut world = World::new();
        let e = world.spawn();
        world.set_footprint(e, footprint(0.0, 0.0, 1.0));

        assert_eq!(
            pick_screen(&world, Vec2::new(50.0, 50.0), PickOptions::default()),
            None
        );
        assert_eq!(
            pick_screen(&world, Vec2::new(f64::NAN, 5.0), PickOptions::default()),
            None
        );
    }

    #[test]
    fn max_depth_limits_hits() {
        let mut world = World::new();
        let e = world.spawn();
        world.set_footprint(e, footprint(0.0, 0.0, 100.0));

        let opts = PickOptions { max_depth: 10.0 };
        assert_eq!(pick_screen(&world, Vec2::new(5.0, 5.0), opts), None);
    }
}

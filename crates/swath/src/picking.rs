use foundation::math::Vec2;
use scene::Scene;
use scene::entity::EntityId;
use scene::Picked;

use crate::debug::PickHitType;
use crate::properties::{SwathProperties, extract};

/// Outcome of resolving a screen point to a swath.
#[derive(Debug, Clone, PartialEq)]
pub struct PickResult {
    pub is_swath: bool,
    pub entity_id: Option<EntityId>,
    /// Present only for swaths with a non-empty opportunity id.
    pub opportunity_id: Option<String>,
    pub properties: Option<SwathProperties>,
}

impl PickResult {
    pub fn empty() -> Self {
        Self {
            is_swath: false,
            entity_id: None,
            opportunity_id: None,
            properties: None,
        }
    }

    pub fn hit_type(&self) -> PickHitType {
        if self.is_swath {
            PickHitType::SarSwath
        } else if self.entity_id.is_some() {
            PickHitType::Entity
        } else {
            PickHitType::Empty
        }
    }
}

/// Resolves the topmost object under `point`.
///
/// Never fails: misses, unrecognized primitives and malformed property bags
/// all come back as well-formed non-swath results.
pub fn resolve_pick<S: Scene + ?Sized>(scene: &S, point: Vec2) -> PickResult {
    let entity = match scene.pick_at_point(point) {
        Some(Picked::Entity(entity)) => entity,
        Some(Picked::Unrecognized) | None => return PickResult::empty(),
    };

    match extract(scene.properties(entity)) {
        Some(props) => PickResult {
            is_swath: true,
            entity_id: Some(entity),
            opportunity_id: Some(props.opportunity_id.clone()).filter(|id| !id.is_empty()),
            properties: Some(props),
        },
        None => PickResult {
            is_swath: false,
            entity_id: Some(entity),
            opportunity_id: None,
            properties: None,
        },
    }
}

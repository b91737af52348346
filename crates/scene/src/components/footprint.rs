use foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned screen-space rectangle in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ScreenRect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Where an object projects on screen, with its depth from the camera.
///
/// Smaller depth is nearer (on top).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenFootprint {
    pub rect: ScreenRect,
    #[serde(default)]
    pub depth: f64,
}

impl ScreenFootprint {
    pub fn new(rect: ScreenRect, depth: f64) -> Self {
        Self { rect, depth }
    }
}

#[cfg(test)]
mod tests {
    use super::ScreenRect;
    use foundation::math::Vec2;

    #[test]
    fn contains_point_inside_and_on_edge() {
        let r = ScreenRect::from_xywh(10.0, 10.0, 20.0, 5.0);
        assert!(r.contains(Vec2::new(15.0, 12.0)));
        assert!(r.contains(Vec2::new(30.0, 15.0)));
    }

    #[test]
    fn rejects_point_outside() {
        let r = ScreenRect::from_xywh(10.0, 10.0, 20.0, 5.0);
        assert!(!r.contains(Vec2::new(9.0, 12.0)));
        assert!(!r.contains(Vec2::new(15.0, 16.0)));
    }
}

use serde::{Deserialize, Serialize};

pub type Rgba = [f32; 4];

/// Fill/outline style slots on a scene object.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    pub fill: Rgba,
    pub outline: Rgba,
}

impl SurfaceStyle {
    pub const fn new(fill: Rgba, outline: Rgba) -> Self {
        Self { fill, outline }
    }
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            fill: [1.0, 1.0, 1.0, 0.25],
            outline: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

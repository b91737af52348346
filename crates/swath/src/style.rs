use scene::components::{Rgba, SurfaceStyle};
use serde::Serialize;

use crate::properties::LookSide;

/// Style tiers, highest priority first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleTier {
    Selected,
    Hovered,
    Dimmed,
    Default,
}

impl StyleTier {
    /// `selected > hovered > dimmed > default`.
    pub fn resolve(selected: bool, hovered: bool, dimmed: bool) -> Self {
        if selected {
            StyleTier::Selected
        } else if hovered {
            StyleTier::Hovered
        } else if dimmed {
            StyleTier::Dimmed
        } else {
            StyleTier::Default
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SideStyles {
    pub default: SurfaceStyle,
    pub hovered: SurfaceStyle,
    pub selected: SurfaceStyle,
}

/// Fill/outline per (tier, look side). `dimmed` ignores look side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleTable {
    pub left: SideStyles,
    pub right: SideStyles,
    pub dimmed: SurfaceStyle,
}

const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            left: SideStyles {
                default: SurfaceStyle::new([0.20, 0.55, 0.95, 0.25], [0.20, 0.55, 0.95, 0.80]),
                hovered: SurfaceStyle::new([0.35, 0.70, 1.00, 0.45], [0.60, 0.85, 1.00, 1.00]),
                selected: SurfaceStyle::new([0.10, 0.45, 1.00, 0.60], WHITE),
            },
            right: SideStyles {
                default: SurfaceStyle::new([0.95, 0.55, 0.20, 0.25], [0.95, 0.55, 0.20, 0.80]),
                hovered: SurfaceStyle::new([1.00, 0.70, 0.35, 0.45], [1.00, 0.85, 0.60, 1.00]),
                selected: SurfaceStyle::new([1.00, 0.45, 0.10, 0.60], WHITE),
            },
            dimmed: SurfaceStyle::new([0.50, 0.50, 0.50, 0.15], [0.50, 0.50, 0.50, 0.40]),
        }
    }
}

impl StyleTable {
    pub fn style(&self, tier: StyleTier, side: LookSide) -> SurfaceStyle {
        let side_styles = match side {
            LookSide::Left => &self.left,
            LookSide::Right => &self.right,
        };
        match tier {
            StyleTier::Selected => side_styles.selected,
            StyleTier::Hovered => side_styles.hovered,
            StyleTier::Dimmed => self.dimmed,
            StyleTier::Default => side_styles.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StyleTable, StyleTier};
    use crate::properties::LookSide;

    #[test]
    fn priority_order() {
        assert_eq!(StyleTier::resolve(true, true, true), StyleTier::Selected);
        assert_eq!(StyleTier::resolve(false, true, true), StyleTier::Hovered);
        assert_eq!(StyleTier::resolve(false, false, true), StyleTier::Dimmed);
        assert_eq!(StyleTier::resolve(false, false, false), StyleTier::Default);
    }

    #[test]
    fn look_side_picks_palette() {
        let t = StyleTable::default();
        assert_ne!(
            t.style(StyleTier::Default, LookSide::Left),
            t.style(StyleTier::Default, LookSide::Right)
        );
        assert_eq!(t.style(StyleTier::Selected, LookSide::Left), t.left.selected);
    }

    #[test]
    fn dimmed_is_side_independent() {
        let t = StyleTable::default();
        assert_eq!(
            t.style(StyleTier::Dimmed, LookSide::Left),
            t.style(StyleTier::Dimmed, LookSide::Right)
        );
    }
}

//! Screen to world conversion for pointer input.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest accepted scale.
pub const MIN_SCALE: f64 = 0.1;
/// Largest accepted scale.
pub const MAX_SCALE: f64 = 10.0;

/// Maps screen coordinates onto the world space elements live in.
///
/// The default is the identity, which is what an overlay canvas uses.
/// The scale always stays within [`MIN_SCALE`, `MAX_SCALE`] so the
/// inverse transform is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCanvasSpace")]
pub struct CanvasSpace {
    /// Screen-space translation of the world origin.
    pub offset: Vec2,
    /// World units to screen pixels.
    scale: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawCanvasSpace {
    offset: Vec2,
    scale: f64,
}

impl Default for RawCanvasSpace {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl From<RawCanvasSpace> for CanvasSpace {
    fn from(raw: RawCanvasSpace) -> Self {
        Self::new(raw.offset, raw.scale)
    }
}

impl Default for CanvasSpace {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CanvasSpace {
    /// Create a space from an offset and scale.
    ///
    /// A scale that is not a positive number falls back to 1.0. Others
    /// are clamped to the accepted range.
    pub fn new(offset: Vec2, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            log::warn!("Invalid canvas scale {}, using 1.0", scale);
            1.0
        };
        Self { offset, scale }
    }

    /// World units to screen pixels.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// World to screen.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Screen to world.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.offset)
    }

    /// Convert a screen-space point to world space.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a world-space point to screen space.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_by_default() {
        let space = CanvasSpace::default();
        let point = Point::new(12.5, -3.0);
        assert_eq!(space.screen_to_world(point), point);
        assert_eq!(space.world_to_screen(point), point);
    }

    #[test]
    fn test_screen_to_world() {
        let space = CanvasSpace::new(Vec2::new(100.0, 50.0), 2.0);
        let world = space.screen_to_world(Point::new(300.0, 250.0));
        assert!((world.x - 100.0).abs() < f64::EPSILON);
        assert!((world.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        let space = CanvasSpace::new(Vec2::new(-40.0, 10.0), 0.5);
        let world = Point::new(123.0, 456.0);
        let back = space.screen_to_world(space.world_to_screen(world));
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_scale_falls_back_to_identity_scale() {
        for scale in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let space = CanvasSpace::new(Vec2::ZERO, scale);
            assert_eq!(space.scale(), 1.0);
            let world = space.screen_to_world(Point::new(30.0, 40.0));
            assert!(world.x.is_finite() && world.y.is_finite());
        }
    }

    #[test]
    fn test_scale_is_clamped() {
        assert_eq!(CanvasSpace::new(Vec2::ZERO, 1e-6).scale(), MIN_SCALE);
        assert_eq!(CanvasSpace::new(Vec2::ZERO, 500.0).scale(), MAX_SCALE);
    }

    #[test]
    fn test_deserialize_sanitizes_scale() {
        let space: CanvasSpace = serde_json::from_str(r#"{ "scale": 0.0 }"#).unwrap();
        assert_eq!(space.scale(), 1.0);
        assert_eq!(space.offset, Vec2::ZERO);

        let space: CanvasSpace =
            serde_json::from_str(r#"{ "offset": { "x": 5.0, "y": 0.0 }, "scale": 2.0 }"#).unwrap();
        assert_eq!(space.scale(), 2.0);
        let back = serde_json::to_string(&space).unwrap();
        assert_eq!(serde_json::from_str::<CanvasSpace>(&back).unwrap(), space);
    }
}

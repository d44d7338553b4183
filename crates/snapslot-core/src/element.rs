//! Rectangular UI elements.

use crate::geometry::RectGeometry;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// An axis-aligned rectangle placed in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectElement {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: ElementId,
    /// World-space position of the pivot.
    pub position: Point,
    /// Width and height.
    pub size: Size,
    /// Pivot in normalized rectangle coordinates (0,0 = min corner).
    #[serde(default)]
    pub pivot: Vec2,
}

impl RectElement {
    /// Create an element whose pivot sits on its min corner.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            pivot: Vec2::ZERO,
        }
    }

    /// Set the pivot.
    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    /// Use a specific ID instead of a generated one.
    pub fn with_id(mut self, id: ElementId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The area the element actually covers.
    pub fn world_rect(&self) -> Rect {
        let min = Point::new(
            self.position.x - self.pivot.x * self.size.width,
            self.position.y - self.pivot.y * self.size.height,
        );
        Rect::from_origin_size(min, self.size)
    }

    /// The area tested against when this element is a drop target.
    ///
    /// Built straight from position and size; the pivot is not applied.
    pub fn target_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

impl RectGeometry for RectElement {
    fn world_corners(&self) -> [Point; 4] {
        self.world_rect().world_corners()
    }

    fn contains_point(&self, point: Point) -> bool {
        self.world_rect().contains_point(point)
    }
}

//! Minimal 2D geometry used by the overlap test.

use kurbo::{Point, Rect};

/// The two rectangle operations the drop logic depends on.
///
/// Anything that can report its world-space corners and answer a
/// point-containment query can take part in an overlap test, so hosts with
/// their own rectangle types only need to implement this trait.
pub trait RectGeometry {
    /// World-space corners: bottom-left, top-left, top-right, bottom-right.
    fn world_corners(&self) -> [Point; 4];

    /// Whether `point` lies inside the rectangle.
    ///
    /// Min edges are inclusive, max edges exclusive.
    fn contains_point(&self, point: Point) -> bool;
}

impl RectGeometry for Rect {
    fn world_corners(&self) -> [Point; 4] {
        let r = self.abs();
        [
            Point::new(r.x0, r.y0),
            Point::new(r.x0, r.y1),
            Point::new(r.x1, r.y1),
            Point::new(r.x1, r.y0),
        ]
    }

    fn contains_point(&self, point: Point) -> bool {
        self.abs().contains(point)
    }
}

/// Whether any corner of `moving` lies inside `target`.
pub fn any_corner_inside<A, B>(moving: &A, target: &B) -> bool
where
    A: RectGeometry + ?Sized,
    B: RectGeometry + ?Sized,
{
    moving
        .world_corners()
        .iter()
        .any(|corner| target.contains_point(*corner))
}

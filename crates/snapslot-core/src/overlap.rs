//! Corner-in-rectangle overlap test.

use crate::element::{ElementId, RectElement};
use crate::geometry::any_corner_inside;
use crate::registry::TargetRegistry;

/// Whether any of the draggable's world corners lies inside the target.
pub fn overlaps(draggable: &RectElement, target: &RectElement) -> bool {
    any_corner_inside(draggable, &target.target_rect())
}

/// First candidate the draggable overlaps, in candidate order.
///
/// This is "first acceptable" rather than "best": a later candidate with a
/// larger overlap never wins over an earlier one.
pub fn find_first_overlap<'a>(
    draggable: &RectElement,
    candidates: &[ElementId],
    registry: &'a TargetRegistry,
) -> Option<&'a RectElement> {
    candidates
        .iter()
        .filter_map(|id| registry.get(*id))
        .find(|target| overlaps(draggable, target))
}

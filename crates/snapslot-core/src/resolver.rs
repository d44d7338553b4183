//! Candidate target resolution.

use crate::config::{DragConfig, TargetType};
use crate::element::ElementId;
use crate::registry::TargetRegistry;

/// Tag query run once at startup when targets are not refreshed per drop.
///
/// Returns no IDs in Object mode, when refreshing every drop, or when the
/// tag is empty.
pub fn startup_targets(config: &DragConfig, registry: &TargetRegistry) -> Vec<ElementId> {
    if config.target_type != TargetType::Tag
        || config.refresh_targets_every_drop
        || config.target_tag.is_empty()
    {
        return Vec::new();
    }
    registry.find_with_tag(&config.target_tag)
}

/// Candidates for one drop attempt, in the order they must be tested.
///
/// `cached` is the result of [`startup_targets`]. Cached IDs no longer in
/// the registry are skipped.
pub fn resolve_candidates(
    config: &DragConfig,
    cached: &[ElementId],
    registry: &TargetRegistry,
) -> Vec<ElementId> {
    match config.target_type {
        TargetType::Object => match config.target_object {
            Some(id) if registry.contains(id) => vec![id],
            Some(id) => {
                log::warn!("Target object {} is not in the registry", id);
                Vec::new()
            }
            None => Vec::new(),
        },
        TargetType::Tag => {
            if config.target_tag.is_empty() {
                log::debug!("Skipping target resolution: empty tag");
                return Vec::new();
            }
            if config.refresh_targets_every_drop {
                registry.find_with_tag(&config.target_tag)
            } else {
                cached
                    .iter()
                    .copied()
                    .filter(|id| registry.contains(*id))
                    .collect()
            }
        }
    }
}

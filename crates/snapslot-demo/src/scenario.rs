//! Scripted drag scenarios loaded from JSON.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use snapslot_core::{
    CanvasSpace, DragConfig, DragSurface, DropOutcome, ElementId, PointerEvent, RectElement,
    TargetRegistry,
};
use std::path::Path;
use thiserror::Error;

/// Scenario loading errors.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// A draggable to place on the surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraggableSpec {
    pub element: RectElement,
    #[serde(default)]
    pub config: DragConfig,
}

/// A scene, the draggables over it, and the pointer input to replay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub space: CanvasSpace,
    pub scene: TargetRegistry,
    pub draggables: Vec<DraggableSpec>,
    /// Screen-space pointer events, in order.
    pub gestures: Vec<PointerEvent>,
}

/// What happened when a scenario was replayed.
#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    /// One entry per completed drag.
    pub outcomes: Vec<(ElementId, DropOutcome)>,
    /// Where each draggable ended up, in the order they were added.
    pub final_positions: Vec<(ElementId, Point)>,
}

impl Scenario {
    pub fn from_json(json: &str) -> ScenarioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> ScenarioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Two tagged slots and a piece dragged onto the second one, then a
    /// second piece dropped in empty space.
    pub fn builtin() -> Self {
        let mut scene = TargetRegistry::new();
        scene.insert(RectElement::new(Point::new(100.0, 300.0), Size::new(60.0, 60.0)), "slot");
        scene.insert(RectElement::new(Point::new(300.0, 300.0), Size::new(60.0, 60.0)), "slot");

        let config = DragConfig::by_tag("slot")
            .with_reset_if_not_found(true)
            .with_refresh_every_drop(true);
        let draggables = vec![
            DraggableSpec {
                element: RectElement::new(Point::new(0.0, 0.0), Size::new(40.0, 40.0)),
                config: config.clone(),
            },
            DraggableSpec {
                element: RectElement::new(Point::new(100.0, 0.0), Size::new(40.0, 40.0)),
                config,
            },
        ];

        let gestures = vec![
            PointerEvent::down(Point::new(0.0, 0.0)),
            PointerEvent::moved(Point::new(150.0, 150.0)),
            PointerEvent::moved(Point::new(290.0, 290.0)),
            PointerEvent::up(Point::new(290.0, 290.0)),
            PointerEvent::down(Point::new(110.0, 10.0)),
            PointerEvent::moved(Point::new(500.0, 500.0)),
            PointerEvent::up(Point::new(500.0, 500.0)),
        ];

        Self {
            space: CanvasSpace::default(),
            scene,
            draggables,
            gestures,
        }
    }

    /// Replay the gestures, logging every drop as it happens.
    pub fn run(self) -> ScenarioReport {
        let mut surface = DragSurface::new(self.scene).with_space(self.space);
        let mut ids = Vec::with_capacity(self.draggables.len());
        for spec in self.draggables {
            let id = surface.add_draggable(spec.element, spec.config);
            if let Some(draggable) = surface.draggable_mut(id) {
                draggable.on_dropped(|event| {
                    log::info!(
                        "{} dropped on {} (started at {:?})",
                        event.draggable,
                        event.target,
                        event.initial_position
                    );
                });
            }
            ids.push(id);
        }

        let mut report = ScenarioReport::default();
        for gesture in self.gestures {
            if let Some((id, outcome)) = surface.handle_pointer_event(gesture) {
                log::debug!("{} released: {:?}", id, outcome);
                report.outcomes.push((id, outcome));
            }
        }

        report.final_positions = ids
            .into_iter()
            .filter_map(|id| surface.draggable(id).map(|d| (id, d.position())))
            .collect();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_scenario() {
        let scenario = Scenario::builtin();
        let second_slot = scenario.scene.iter().nth(1).map(|e| e.id());
        let report = scenario.run();

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.outcomes[0].1.target(), second_slot);
        assert_eq!(report.outcomes[1].1, DropOutcome::Reset);
        assert_eq!(report.final_positions[0].1, Point::new(300.0, 300.0));
        assert_eq!(report.final_positions[1].1, Point::new(100.0, 0.0));
    }

    #[test]
    fn test_load_from_file() {
        let json = r#"{
            "scene": [
                {
                    "element": {
                        "id": "6f1c1a8e-4d3b-4a57-9d0e-2b1f8a7c9e01",
                        "position": { "x": 100.0, "y": 100.0 },
                        "size": { "width": 50.0, "height": 50.0 }
                    }
                }
            ],
            "draggables": [
                {
                    "element": {
                        "position": { "x": 0.0, "y": 0.0 },
                        "size": { "width": 40.0, "height": 40.0 }
                    },
                    "config": {
                        "target_type": "object",
                        "target_object": "6f1c1a8e-4d3b-4a57-9d0e-2b1f8a7c9e01"
                    }
                }
            ],
            "gestures": [
                { "type": "down", "position": { "x": 0.0, "y": 0.0 } },
                { "type": "move", "position": { "x": 90.0, "y": 90.0 } },
                { "type": "up", "position": { "x": 90.0, "y": 90.0 } }
            ]
        }"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let report = Scenario::load(file.path()).unwrap().run();
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.outcomes[0].1.is_dropped());
        assert_eq!(report.final_positions[0].1, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Scenario::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ScenarioError::Io(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Scenario::from_json("{ not json"),
            Err(ScenarioError::Parse(_))
        ));
    }
}

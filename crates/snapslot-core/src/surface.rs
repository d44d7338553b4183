//! Routes pointer input across several draggables sharing one scene.

use crate::config::DragConfig;
use crate::draggable::{Draggable, DropOutcome};
use crate::element::{ElementId, RectElement};
use crate::input::PointerEvent;
use crate::registry::TargetRegistry;
use crate::space::CanvasSpace;

/// Owns the target scene and every draggable placed over it.
///
/// Draggables added later sit on top and win presses over earlier ones.
/// Incoming events are in screen space and converted through the
/// surface's [`CanvasSpace`].
#[derive(Debug, Default)]
pub struct DragSurface {
    registry: TargetRegistry,
    space: CanvasSpace,
    draggables: Vec<Draggable>,
    /// Index of the draggable holding the pointer.
    active: Option<usize>,
}

impl DragSurface {
    pub fn new(registry: TargetRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn with_space(mut self, space: CanvasSpace) -> Self {
        self.space = space;
        self
    }

    pub fn space(&self) -> &CanvasSpace {
        &self.space
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Scene access for adding, moving or retagging targets.
    pub fn registry_mut(&mut self) -> &mut TargetRegistry {
        &mut self.registry
    }

    /// Add a draggable on top of the existing ones.
    ///
    /// Its startup target query runs against the current scene.
    pub fn add_draggable(&mut self, element: RectElement, config: DragConfig) -> ElementId {
        let draggable = Draggable::new(element, config, &self.registry);
        let id = draggable.id();
        self.draggables.push(draggable);
        id
    }

    pub fn draggable(&self, id: ElementId) -> Option<&Draggable> {
        self.draggables.iter().find(|d| d.id() == id)
    }

    pub fn draggable_mut(&mut self, id: ElementId) -> Option<&mut Draggable> {
        self.draggables.iter_mut().find(|d| d.id() == id)
    }

    pub fn draggables(&self) -> impl Iterator<Item = &Draggable> {
        self.draggables.iter()
    }

    /// The draggable currently held by the pointer.
    pub fn active(&self) -> Option<ElementId> {
        self.active.map(|index| self.draggables[index].id())
    }

    /// Send every draggable back to its initial position.
    pub fn reset_all(&mut self) {
        for draggable in &mut self.draggables {
            draggable.reset_position();
        }
    }

    /// Process a screen-space pointer event.
    ///
    /// Returns the draggable and its outcome when a drag ended.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<(ElementId, DropOutcome)> {
        let world = event.with_position(self.space.screen_to_world(event.position()));

        match world {
            PointerEvent::Down { .. } => {
                if self.active.is_some() {
                    return None;
                }
                let hit = self
                    .draggables
                    .iter()
                    .rposition(|d| d.hit_test(world.position()))?;
                self.draggables[hit].handle_pointer_event(&world, &self.registry);
                if self.draggables[hit].is_grabbed() {
                    log::debug!("Grabbed {}", self.draggables[hit].id());
                    self.active = Some(hit);
                }
                None
            }
            PointerEvent::Move { .. } => {
                let index = self.active?;
                self.draggables[index].handle_pointer_event(&world, &self.registry);
                None
            }
            PointerEvent::Up { .. } => {
                let index = self.active?;
                let draggable = &mut self.draggables[index];
                let outcome = draggable.handle_pointer_event(&world, &self.registry)?;
                self.active = None;
                Some((draggable.id(), outcome))
            }
        }
    }
}

//! A draggable element that snaps onto drop targets.

use crate::config::DragConfig;
use crate::element::{ElementId, RectElement};
use crate::event::{DropEvent, DropListeners, ListenerId};
use crate::geometry::RectGeometry;
use crate::input::PointerEvent;
use crate::overlap::find_first_overlap;
use crate::registry::TargetRegistry;
use crate::resolver::{resolve_candidates, startup_targets};
use crate::state::DragState;
use kurbo::{Point, Vec2};

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// Snapped onto a target; the event was delivered to listeners.
    Dropped(DropEvent),
    /// No target found; moved back to the initial position.
    Reset,
    /// No target found; left where it was dragged to.
    Stayed,
}

impl DropOutcome {
    /// Whether the release snapped onto a target.
    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::Dropped(_))
    }

    /// Target of a successful drop.
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Self::Dropped(event) => Some(event.target),
            _ => None,
        }
    }
}

/// A rectangle the user can drag onto targets from a [`TargetRegistry`].
///
/// The position at construction is the initial position; it is captured
/// once and every reset returns there.
#[derive(Debug)]
pub struct Draggable {
    element: RectElement,
    initial_position: Point,
    /// Added to the pointer position while dragging.
    offset: Vec2,
    state: DragState,
    /// Held by the pointer between a routed press and release.
    grabbed: bool,
    config: DragConfig,
    /// Tag query made at startup, unused when refreshing every drop.
    cached_targets: Vec<ElementId>,
    listeners: DropListeners,
}

impl Draggable {
    /// Create a draggable and run its startup target query.
    ///
    /// An invalid config is logged and leaves the draggable without targets.
    pub fn new(element: RectElement, config: DragConfig, registry: &TargetRegistry) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("{}", e);
        }
        let cached_targets = startup_targets(&config, registry);
        Self {
            initial_position: element.position,
            element,
            offset: Vec2::ZERO,
            state: DragState::Idle,
            grabbed: false,
            config,
            cached_targets,
            listeners: DropListeners::new(),
        }
    }

    /// Get the ID of the dragged element.
    pub fn id(&self) -> ElementId {
        self.element.id()
    }

    /// Get the dragged element.
    pub fn element(&self) -> &RectElement {
        &self.element
    }

    /// Get the current world-space position.
    pub fn position(&self) -> Point {
        self.element.position
    }

    /// Get the position captured at construction.
    pub fn initial_position(&self) -> Point {
        self.initial_position
    }

    /// Get the offset recorded by the last press.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Get the current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Check if the element is resting on a target.
    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }

    /// Check if the pointer is holding the element.
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Get the configuration fixed at construction.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Get the drop listeners for subscribing or removing handlers.
    pub fn listeners_mut(&mut self) -> &mut DropListeners {
        &mut self.listeners
    }

    /// Subscribe to successful drops.
    pub fn on_dropped(&mut self, handler: impl FnMut(&DropEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(handler)
    }

    /// Whether a world-space point lies on the element.
    pub fn hit_test(&self, point: Point) -> bool {
        self.element.contains_point(point)
    }

    /// Pointer pressed on the element.
    pub fn on_pointer_down(&mut self, pointer: Point) {
        self.offset = pointer - self.element.position;
    }

    /// Pointer moved during a drag. Returns whether the element moved.
    ///
    /// A permitted drag off a target leaves the settled state.
    pub fn on_drag(&mut self, pointer: Point) -> bool {
        if !self.state.can_move(self.config.can_move_again) {
            return false;
        }
        self.state = DragState::Idle;
        self.element.position = pointer + self.offset;
        true
    }

    /// Pointer released: look for a target and settle on the first match.
    ///
    /// Resolution runs on every release, including while settled.
    pub fn on_pointer_up(&mut self, registry: &TargetRegistry) -> DropOutcome {
        let candidates = resolve_candidates(&self.config, &self.cached_targets, registry);
        if let Some(target) = find_first_overlap(&self.element, &candidates, registry) {
            self.element.position = target.position;
            self.state = DragState::Settled;
            let event = DropEvent {
                draggable: self.element.id(),
                target: target.id(),
                initial_position: self.initial_position,
            };
            log::debug!("Element {} dropped on {}", event.draggable, event.target);
            self.listeners.notify(&event);
            return DropOutcome::Dropped(event);
        }

        if self.config.reset_position_if_target_not_found {
            log::debug!("Element {} found no target, resetting", self.element.id());
            self.reset_position();
            DropOutcome::Reset
        } else {
            self.state = DragState::Idle;
            DropOutcome::Stayed
        }
    }

    /// Return to the initial position and leave any target.
    pub fn reset_position(&mut self) {
        self.state = DragState::Idle;
        self.element.position = self.initial_position;
    }

    /// Route a world-space pointer event through the press/drag/release callbacks.
    ///
    /// Only primary-button presses on the element start a drag. Returns the
    /// outcome when the event ended one.
    pub fn handle_pointer_event(
        &mut self,
        event: &PointerEvent,
        registry: &TargetRegistry,
    ) -> Option<DropOutcome> {
        match *event {
            PointerEvent::Down { position, button } => {
                if button.is_primary() && !self.grabbed && self.hit_test(position) {
                    self.grabbed = true;
                    self.on_pointer_down(position);
                }
                None
            }
            PointerEvent::Move { position } => {
                if self.grabbed {
                    self.on_drag(position);
                }
                None
            }
            PointerEvent::Up { button, .. } => {
                if button.is_primary() && self.grabbed {
                    self.grabbed = false;
                    Some(self.on_pointer_up(registry))
                } else {
                    None
                }
            }
        }
    }
}

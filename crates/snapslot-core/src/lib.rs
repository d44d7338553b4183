//! Snapslot Core Library
//!
//! Drag-and-drop for rectangular UI elements: drag with a pointer, and on
//! release snap onto the first overlapping target or fall back to the
//! starting position.

pub mod config;
pub mod draggable;
pub mod element;
pub mod event;
pub mod geometry;
pub mod input;
pub mod overlap;
pub mod registry;
pub mod resolver;
pub mod space;
pub mod state;
pub mod surface;

pub use config::{ConfigError, ConfigResult, DragConfig, TargetType};
pub use draggable::{Draggable, DropOutcome};
pub use element::{ElementId, RectElement};
pub use event::{DropEvent, DropListeners, ListenerId};
pub use geometry::RectGeometry;
pub use input::{MouseButton, PointerEvent};
pub use registry::{TaggedElement, TargetRegistry};
pub use space::{CanvasSpace, MAX_SCALE, MIN_SCALE};
pub use state::DragState;
pub use surface::DragSurface;

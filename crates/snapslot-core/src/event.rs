//! Drop notifications.

use crate::element::ElementId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Fired when a draggable settles on a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropEvent {
    /// The element that was dropped.
    pub draggable: ElementId,
    /// The target it snapped to.
    pub target: ElementId,
    /// Where the draggable started before any drag.
    pub initial_position: Point,
}

/// Handle returned by [`DropListeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler = Box<dyn FnMut(&DropEvent)>;

/// Synchronous observers of drop events, called in subscription order.
#[derive(Default)]
pub struct DropListeners {
    handlers: Vec<(ListenerId, Handler)>,
    next_id: u64,
}

impl DropListeners {
    /// Create an empty listener list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers run in subscription order.
    pub fn subscribe(&mut self, handler: impl FnMut(&DropEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false if the listener was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(other, _)| *other != id);
        self.handlers.len() != before
    }

    /// Call every handler with `event`.
    pub fn notify(&mut self, event: &DropEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for DropListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropListeners")
            .field("len", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use uuid::Uuid;

    fn event() -> DropEvent {
        DropEvent {
            draggable: Uuid::new_v4(),
            target: Uuid::new_v4(),
            initial_position: Point::new(1.0, 2.0),
        }
    }

    #[test]
    fn test_notify_in_subscription_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = DropListeners::new();

        let first = Rc::clone(&calls);
        listeners.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&calls);
        listeners.subscribe(move |_| second.borrow_mut().push("second"));

        listeners.notify(&event());
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_handler_receives_event() {
        let seen = Rc::new(RefCell::new(None));
        let mut listeners = DropListeners::new();
        let sink = Rc::clone(&seen);
        listeners.subscribe(move |e| *sink.borrow_mut() = Some(*e));

        let e = event();
        listeners.notify(&e);
        assert_eq!(*seen.borrow(), Some(e));
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = DropListeners::new();
        let counter = Rc::clone(&count);
        let id = listeners.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        assert!(listeners.is_empty());

        listeners.notify(&event());
        assert_eq!(*count.borrow(), 0);
    }
}

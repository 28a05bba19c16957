//! Stage notifications
//!
//! The stage queues one [`StageEvent`] per completed widget click and per
//! scene transition while a frame runs, then hands the queue to the
//! handlers registered for each [`EventType`] at the end of the frame.
//! A handler that returns `true` consumes the event; later handlers for the
//! same type do not see it.

use std::collections::HashMap;

use crate::foundation::math::Vec2;

/// Kind of stage event, used to route events to handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Button click completed
    ButtonClicked,
    /// Element was pressed
    ElementClicked,
    /// A scene became current
    SceneEntered,
    /// A scene stopped being current
    SceneExited,
}

/// What happened
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    /// A button's click was released over it
    ButtonClicked {
        /// Button name from the scene layout
        button: String,
        /// Cursor position on release
        position: Vec2,
    },
    /// An element was pressed
    ElementClicked {
        /// Element id from the scene layout
        element: String,
        /// Cursor position on press
        position: Vec2,
    },
    /// Scene entered
    SceneEntered(String),
    /// Scene left
    SceneExited(String),
}

impl StageEvent {
    /// Routing type
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::ButtonClicked { .. } => EventType::ButtonClicked,
            Self::ElementClicked { .. } => EventType::ElementClicked,
            Self::SceneEntered(_) => EventType::SceneEntered,
            Self::SceneExited(_) => EventType::SceneExited,
        }
    }

    /// Widget or scene the event is about
    pub fn name(&self) -> &str {
        match self {
            Self::ButtonClicked { button, .. } => button,
            Self::ElementClicked { element, .. } => element,
            Self::SceneEntered(scene) | Self::SceneExited(scene) => scene,
        }
    }

    /// Cursor position for click events
    pub const fn position(&self) -> Option<Vec2> {
        match self {
            Self::ButtonClicked { position, .. } | Self::ElementClicked { position, .. } => Some(*position),
            Self::SceneEntered(_) | Self::SceneExited(_) => None,
        }
    }
}

/// A stage event stamped with the stage time it happened at
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Seconds of stage time
    pub timestamp: f64,
    /// Payload
    pub kind: StageEvent,
}

impl Event {
    /// Stamp `kind` with `timestamp`
    pub const fn new(kind: StageEvent, timestamp: f64) -> Self {
        Self { timestamp, kind }
    }

    /// Routing type of the payload
    pub const fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Widget or scene name
    pub fn name(&self) -> &str {
        self.kind.name()
    }
}

/// Receives events of the types it was registered for
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &Event) -> bool;
}

impl<F> EventHandler for F
where
    F: FnMut(&Event) -> bool,
{
    fn on_event(&mut self, event: &Event) -> bool {
        self(event)
    }
}

/// Per-frame event queue and handler table
#[derive(Default)]
pub struct EventSystem {
    queue: Vec<Event>,
    handlers: HashMap<EventType, Vec<Box<dyn EventHandler>>>,
}

impl EventSystem {
    /// Create a system with no handlers
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler for `event_type`; handlers run in registration order
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Number of handlers for `event_type`
    pub fn handler_count(&self, event_type: EventType) -> usize {
        self.handlers.get(&event_type).map_or(0, Vec::len)
    }

    /// Queue an event for the next [`dispatch`](Self::dispatch)
    pub fn send(&mut self, event: Event) {
        log::trace!("queued {:?} '{}'", event.event_type(), event.name());
        self.queue.push(event);
    }

    /// Events waiting for dispatch
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deliver queued events in order; returns how many were consumed
    pub fn dispatch(&mut self) -> usize {
        let mut consumed = 0;
        for event in std::mem::take(&mut self.queue) {
            let Some(handlers) = self.handlers.get_mut(&event.event_type()) else {
                continue;
            };
            if handlers.iter_mut().any(|handler| handler.on_event(&event)) {
                consumed += 1;
            }
        }
        consumed
    }

    /// Drop queued events without delivering them
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl std::fmt::Debug for EventSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSystem")
            .field("queued", &self.queue.len())
            .field("handler_types", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Seen = Rc<RefCell<Vec<String>>>;

    fn recorder(seen: &Seen, consume: bool) -> Box<dyn EventHandler> {
        let seen = seen.clone();
        Box::new(move |event: &Event| {
            seen.borrow_mut().push(event.name().to_string());
            consume
        })
    }

    fn clicked(button: &str) -> Event {
        Event::new(StageEvent::ButtonClicked { button: button.to_string(), position: Vec2::new(3.0, 4.0) }, 0.5)
    }

    #[test]
    fn test_routes_by_type() {
        let mut system = EventSystem::new();
        let seen = Seen::default();
        system.register_handler(EventType::ButtonClicked, recorder(&seen, false));

        system.send(clicked("start"));
        system.send(Event::new(StageEvent::SceneEntered("GameScene".to_string()), 0.5));
        assert_eq!(system.pending(), 2);
        assert_eq!(system.dispatch(), 0);

        assert_eq!(*seen.borrow(), ["start"]);
        assert_eq!(system.pending(), 0);
    }

    #[test]
    fn test_consumed_event_stops() {
        let mut system = EventSystem::new();
        let first = Seen::default();
        let second = Seen::default();
        system.register_handler(EventType::ButtonClicked, recorder(&first, true));
        system.register_handler(EventType::ButtonClicked, recorder(&second, false));
        assert_eq!(system.handler_count(EventType::ButtonClicked), 2);

        system.send(clicked("start"));
        system.send(clicked("settings"));
        assert_eq!(system.dispatch(), 2);
        assert_eq!(*first.borrow(), ["start", "settings"]);
        assert!(second.borrow().is_empty());
    }

    #[test]
    fn test_event_accessors() {
        let event = clicked("start");
        assert_eq!(event.event_type(), EventType::ButtonClicked);
        assert_eq!(event.kind.position(), Some(Vec2::new(3.0, 4.0)));

        let exited = StageEvent::SceneExited("MainMenuScene".to_string());
        assert_eq!(exited.event_type(), EventType::SceneExited);
        assert_eq!(exited.name(), "MainMenuScene");
        assert_eq!(exited.position(), None);
    }

    #[test]
    fn test_clear_drops_queue() {
        let mut system = EventSystem::new();
        let seen = Seen::default();
        system.register_handler(EventType::ButtonClicked, recorder(&seen, false));
        system.send(clicked("start"));
        system.clear();
        system.dispatch();
        assert!(seen.borrow().is_empty());
    }
}

use std::cell::RefCell;
use crate::event::{EventHandler, ToolbarEvent};

/// A simple event bus for broadcasting toolbar events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: ToolbarEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventLog;

    #[test]
    fn test_every_subscriber_sees_events_in_order() {
        let bus = EventBus::new();
        let first = EventLog::new();
        let second = EventLog::new();
        bus.subscribe(first.handle());
        bus.subscribe(second.handle());

        bus.emit(ToolbarEvent::DrawingDisabled);
        bus.emit(ToolbarEvent::DrawingEnabled);

        let expected = vec![ToolbarEvent::DrawingDisabled, ToolbarEvent::DrawingEnabled];
        assert_eq!(first.events(), expected);
        assert_eq!(second.events(), expected);

        first.clear();
        bus.emit(ToolbarEvent::PickerOpened(crate::picker::PickerKind::Color));
        assert_eq!(first.events(), vec![ToolbarEvent::PickerOpened(crate::picker::PickerKind::Color)]);
        assert_eq!(second.events().len(), 3);
    }
}

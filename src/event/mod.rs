mod bus;
mod events;

pub use bus::EventBus;
pub use events::ToolbarEvent;

/// Receives toolbar events. Handlers run on the event-loop thread.
pub trait EventHandler {
    fn handle_event(&mut self, event: &ToolbarEvent);
}

/// Handler that keeps every event it receives, in order
#[derive(Debug, Default)]
pub struct EventLog {
    events: std::rc::Rc<std::cell::RefCell<Vec<ToolbarEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second handle onto the same log, for subscribing to a bus
    pub fn handle(&self) -> Box<dyn EventHandler> {
        Box::new(Self {
            events: self.events.clone(),
        })
    }

    pub fn events(&self) -> Vec<ToolbarEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: &ToolbarEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

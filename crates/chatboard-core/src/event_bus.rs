//! Single-threaded event queue between the session controller and the UI.
//!
//! The controller pushes `SessionEvent`s as state changes happen; the UI
//! drains the queue once per frame and folds the batch into its view
//! state. Interior mutability via RefCell — everything runs on the one
//! WASM thread.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chatboard_types::event::SessionEvent;

/// Shared event queue — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called by the session controller.
    pub fn emit(&self, event: SessionEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all buffered events in emit order. Called by the UI each frame.
    pub fn drain(&self) -> Vec<SessionEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

//! One-shot login redirect.
//!
//! HTTP 401/403 is terminal for the session: after the notice delay the
//! client navigates to the login page exactly once, no matter how many
//! auth failures stack up before the page unloads.

use std::cell::Cell;
use std::rc::Rc;

use crate::ports::NavigationPort;

pub struct LoginRedirect {
    nav: Rc<dyn NavigationPort>,
    path: String,
    fired: Cell<bool>,
}

impl LoginRedirect {
    pub fn new(nav: Rc<dyn NavigationPort>, path: impl Into<String>) -> Self {
        Self {
            nav,
            path: path.into(),
            fired: Cell::new(false),
        }
    }

    /// Navigate to the login page. Later calls are no-ops.
    pub fn fire(&self) {
        if self.fired.replace(true) {
            return;
        }
        log::info!("Session expired, redirecting to {}", self.path);
        self.nav.redirect(&self.path);
    }
}

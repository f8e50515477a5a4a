//! Browser navigation adapter.
//!
//! Used only for the login redirect after an expired session. Navigation
//! failures are logged, never surfaced: the page is about to go away.

use std::rc::Rc;
use gloo_timers::future::TimeoutFuture;

use chatboard_core::ports::NavigationPort;
use chatboard_core::redirect::LoginRedirect;

pub struct BrowserNavigator;

impl NavigationPort for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window object; cannot redirect to {}", path);
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::warn!("Redirect to {} failed: {:?}", path, e);
        }
    }
}

/// Fire the login redirect after `delay_ms`.
/// Fire-and-forget on the browser task queue; `LoginRedirect` guarantees
/// at most one navigation however many timers get scheduled.
pub fn redirect_after(redirect: Rc<LoginRedirect>, delay_ms: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        redirect.fire();
    });
}

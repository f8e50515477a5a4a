use serde::{Deserialize, Serialize};
use crate::message::{Role, SidebarItem};

/// Whether the welcome screen or the transcript is shown.
///
/// Empty → Active on the first appended message or a non-empty history
/// load; Active → Empty only via session reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    Empty,
    Active,
}

/// Events emitted by the session controller.
/// The UI drains these from the bus each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A message was rendered (transcript append or inline notice)
    MessageAppended { role: Role, content: String },

    /// A chat request went out; show the typing indicator
    TypingStarted,

    /// The request settled; remove the typing indicator
    TypingStopped,

    /// Welcome screen / transcript visibility changed
    DisplayChanged { state: DisplayState },

    /// The recent-history sidebar was recomputed
    SidebarUpdated { items: Vec<SidebarItem> },

    /// The session was reset to the empty state
    SessionCleared,

    /// The backend rejected the request with 401/403.
    /// The app layer schedules a single redirect to the login page.
    AuthExpired,

    /// Diagnostic for the status line; the transcript already carries
    /// the user-facing notice
    Fault { message: String },
}

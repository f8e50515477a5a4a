//! Session controller — the core chat loop.
//!
//! Owns the in-memory transcript and drives one exchange at a time:
//! 1. Append the user's message and announce it on the bus
//! 2. Show the typing indicator and call the chat API (sole await point)
//! 3. Append the reply, or render the matching failure notice
//! 4. Recompute the sidebar summary
//!
//! Every operation is split into synchronous phases around its single
//! network await. The `*_shared` variants borrow the controller only
//! inside those phases, never across the await, so tasks spawned from
//! the UI can overlap without a RefCell borrow conflict — an overlapping
//! submit is gated into a no-op instead of a panic.
//!
//! All rendering happens indirectly through `SessionEvent`s; the
//! controller never touches the UI.

use std::cell::RefCell;
use std::rc::Rc;

use chatboard_types::{
    ClientError,
    Result,
    config::ClientConfig,
    event::{DisplayState, SessionEvent},
    message::{ChatMessage, Role},
};
use crate::event_bus::EventBus;
use crate::ports::ChatApiPort;
use crate::sidebar;

/// Inline notice shown when the backend answers 401/403.
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Redirecting to login...";

/// Inline notice shown for any other failed chat request.
pub const REQUEST_FAILED_NOTICE: &str = "Sorry, something went wrong. Please try again.";

/// The chat session state
pub struct SessionController {
    pub config: ClientConfig,
    pub transcript: Vec<ChatMessage>,
    pub event_bus: EventBus,
    pub display: DisplayState,
    pub(crate) in_flight: bool,
}

impl SessionController {
    pub fn new(config: ClientConfig, event_bus: EventBus) -> Self {
        Self {
            config,
            transcript: Vec::new(),
            event_bus,
            display: DisplayState::Empty,
            in_flight: false,
        }
    }

    /// Whether a chat request is currently awaiting its response.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Run one exchange: user text → remote call → reply or notice.
    ///
    /// Whitespace-only input is a silent no-op, as is a submit while a
    /// request is already in flight. Exactly one user message is appended
    /// before the network call goes out. No failure is retried
    /// automatically.
    pub async fn submit(&mut self, input: &str, api: &dyn ChatApiPort) -> Result<()> {
        let Some(text) = self.begin_submit(input) else {
            return Ok(());
        };
        let outcome = api.send_message(&text).await;
        self.finish_submit(outcome)
    }

    /// `submit` through a shared handle, for tasks spawned off the UI.
    /// The controller is free while the request is in flight.
    pub async fn submit_shared(
        session: Rc<RefCell<Self>>,
        input: &str,
        api: Rc<dyn ChatApiPort>,
    ) -> Result<()> {
        let Some(text) = session.borrow_mut().begin_submit(input) else {
            return Ok(());
        };
        let outcome = api.send_message(&text).await;
        session.borrow_mut().finish_submit(outcome)
    }

    /// Synchronous first phase of an exchange: validate, gate, append the
    /// user message, show the typing indicator. Returns the trimmed text
    /// to send, or None when the submit is a no-op.
    pub(crate) fn begin_submit(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        if self.in_flight {
            log::debug!("Submit ignored: request already in flight");
            return None;
        }

        self.in_flight = true;
        self.append(ChatMessage::user(text));
        self.event_bus.emit(SessionEvent::TypingStarted);
        Some(text.to_string())
    }

    /// Synchronous second phase: apply the network outcome.
    pub(crate) fn finish_submit(&mut self, outcome: Result<String>) -> Result<()> {
        self.event_bus.emit(SessionEvent::TypingStopped);
        self.in_flight = false;

        match outcome {
            Ok(reply) => {
                self.append(ChatMessage::assistant(reply));
                Ok(())
            }
            Err(ClientError::AuthExpired) => {
                // Terminal for the session: the app layer schedules the
                // login redirect when it sees AuthExpired on the bus.
                self.notice(SESSION_EXPIRED_NOTICE);
                self.event_bus.emit(SessionEvent::AuthExpired);
                Err(ClientError::AuthExpired)
            }
            Err(e) => {
                log::error!("Chat request failed: {}", e);
                self.notice(REQUEST_FAILED_NOTICE);
                self.event_bus.emit(SessionEvent::Fault {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Fetch the persisted transcript on session start.
    ///
    /// A non-empty result replaces the welcome screen and rebuilds the
    /// sidebar. Failure is logged and otherwise silent — not
    /// distinguishable from absent history.
    pub async fn load_history(&mut self, api: &dyn ChatApiPort) {
        let outcome = api.fetch_history().await;
        self.apply_history(outcome);
    }

    /// `load_history` through a shared handle; the controller is only
    /// borrowed once the fetch has settled.
    pub async fn load_history_shared(session: Rc<RefCell<Self>>, api: Rc<dyn ChatApiPort>) {
        let outcome = api.fetch_history().await;
        session.borrow_mut().apply_history(outcome);
    }

    pub(crate) fn apply_history(&mut self, outcome: Result<Vec<ChatMessage>>) {
        let history = match outcome {
            Ok(h) => h,
            Err(e) => {
                log::warn!("Failed to load chat history: {}", e);
                return;
            }
        };
        if history.is_empty() {
            return;
        }

        self.set_display(DisplayState::Active);
        for msg in history {
            self.event_bus.emit(SessionEvent::MessageAppended {
                role: msg.role,
                content: msg.content.clone(),
            });
            self.transcript.push(msg);
        }
        self.rebuild_sidebar();
    }

    /// Clear the remote store (best-effort) and restore the empty state.
    /// Idempotent: repeated calls converge to the same empty session.
    pub async fn reset(&mut self, api: &dyn ChatApiPort) {
        let outcome = api.clear_history().await;
        self.finish_reset(outcome);
    }

    /// `reset` through a shared handle; the controller is only borrowed
    /// once the delete call has settled.
    pub async fn reset_shared(session: Rc<RefCell<Self>>, api: Rc<dyn ChatApiPort>) {
        let outcome = api.clear_history().await;
        session.borrow_mut().finish_reset(outcome);
    }

    pub(crate) fn finish_reset(&mut self, outcome: Result<()>) {
        if let Err(e) = outcome {
            log::warn!("Failed to clear remote history: {}", e);
        }

        self.transcript.clear();
        self.in_flight = false;
        self.set_display(DisplayState::Empty);
        self.event_bus.emit(SessionEvent::SessionCleared);
    }

    /// Append a message to the transcript and announce it.
    /// The first appended message flips the display from Empty to Active.
    fn append(&mut self, msg: ChatMessage) {
        self.set_display(DisplayState::Active);
        self.event_bus.emit(SessionEvent::MessageAppended {
            role: msg.role,
            content: msg.content.clone(),
        });
        self.transcript.push(msg);
        self.rebuild_sidebar();
    }

    /// Render-only notice: shown like an assistant message but never part
    /// of the transcript, so it cannot leak into the sidebar or a later
    /// history sync.
    fn notice(&self, text: &str) {
        self.event_bus.emit(SessionEvent::MessageAppended {
            role: Role::Assistant,
            content: text.to_string(),
        });
    }

    fn set_display(&mut self, state: DisplayState) {
        if self.display != state {
            self.display = state;
            self.event_bus.emit(SessionEvent::DisplayChanged { state });
        }
    }

    /// Recompute the sidebar summary. A transcript without user messages
    /// leaves the sidebar as it is.
    fn rebuild_sidebar(&self) {
        let items = sidebar::summarize(&self.transcript, &self.config.sidebar);
        if !items.is_empty() {
            self.event_bus.emit(SessionEvent::SidebarUpdated { items });
        }
    }
}

//! UI-level state that drives rendering.
//! This is a read-only projection of the session controller state,
//! updated each frame by draining the EventBus.

use chatboard_core::format::format_message;
use chatboard_types::block::ContentBlock;
use chatboard_types::event::{DisplayState, SessionEvent};
use chatboard_types::message::{Role, SidebarItem};

/// Sidebar label shown before any conversation exists.
pub const SIDEBAR_PLACEHOLDER: &str = "New Chat";

/// State visible to UI panels
pub struct UiState {
    /// Rendered transcript (user + assistant + inline notices)
    pub messages: Vec<ChatEntry>,
    /// Recent-history sidebar entries, most recent first
    pub sidebar_entries: Vec<SidebarEntry>,
    /// Welcome screen vs transcript
    pub display: DisplayState,
    /// Whether a reply is pending (typing indicator shown)
    pub typing: bool,
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
}

/// A chat entry for display — content already split into blocks
#[derive(Clone)]
pub struct ChatEntry {
    pub role: Role,
    pub blocks: Vec<ContentBlock>,
}

/// A sidebar entry for display
#[derive(Clone)]
pub struct SidebarEntry {
    pub label: String,
    pub active: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            sidebar_entries: vec![SidebarEntry {
                label: SIDEBAR_PLACEHOLDER.to_string(),
                active: true,
            }],
            display: DisplayState::Empty,
            typing: false,
            input_text: String::new(),
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::MessageAppended { role, content } => {
                    self.messages.push(ChatEntry {
                        role,
                        blocks: format_message(&content),
                    });
                }
                SessionEvent::TypingStarted => {
                    self.typing = true;
                    self.status_text = "Waiting for reply...".to_string();
                }
                SessionEvent::TypingStopped => {
                    self.typing = false;
                    self.status_text = "Ready".to_string();
                }
                SessionEvent::DisplayChanged { state } => {
                    self.display = state;
                }
                SessionEvent::SidebarUpdated { items } => {
                    self.set_sidebar(items);
                }
                SessionEvent::SessionCleared => {
                    self.messages.clear();
                    self.sidebar_entries = vec![SidebarEntry {
                        label: SIDEBAR_PLACEHOLDER.to_string(),
                        active: true,
                    }];
                    self.display = DisplayState::Empty;
                    self.typing = false;
                    self.status_text = "Ready".to_string();
                }
                SessionEvent::AuthExpired => {
                    self.status_text = "Session expired".to_string();
                }
                SessionEvent::Fault { message } => {
                    self.status_text = format!("Error: {}", message);
                }
            }
        }
    }

    /// The first (most recent) entry is marked active.
    fn set_sidebar(&mut self, items: Vec<SidebarItem>) {
        self.sidebar_entries = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| SidebarEntry {
                label: item.label,
                active: idx == 0,
            })
            .collect();
    }

    /// Send is disabled while a request is pending
    pub fn is_busy(&self) -> bool {
        self.typing
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

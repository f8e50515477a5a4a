//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `chatboard-core` (pure Rust).
//! Implementations live in `chatboard-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chatboard_types::{Result, message::ChatMessage};

// ─── Chat API Port ───────────────────────────────────────────

/// The remote chat backend.
///
/// `send_message` must map HTTP 401/403 to `ClientError::AuthExpired`,
/// other non-2xx statuses to `ClientError::Api`, and transport failures
/// to `ClientError::Network`, so the controller can apply the right
/// recovery policy without knowing about HTTP.
#[async_trait(?Send)]
pub trait ChatApiPort {
    /// POST the user's text; returns the assistant's reply text
    async fn send_message(&self, message: &str) -> Result<String>;

    /// GET the persisted transcript, oldest first
    async fn fetch_history(&self) -> Result<Vec<ChatMessage>>;

    /// DELETE the persisted transcript (best-effort)
    async fn clear_history(&self) -> Result<()>;
}

// ─── Navigation Port ─────────────────────────────────────────

/// Page navigation, used only for the post-auth-failure login redirect.
pub trait NavigationPort {
    fn redirect(&self, path: &str);
}

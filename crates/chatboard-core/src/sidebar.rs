//! Recent-history sidebar summarization.
//!
//! A pure projection of the transcript: the last N user-authored messages,
//! most-recent-first, truncated for display.

use chatboard_types::config::SidebarConfig;
use chatboard_types::message::{ChatMessage, Role, SidebarItem};

/// Build the sidebar summary from a transcript.
///
/// Returns an empty list when the transcript holds no user messages; the
/// caller must then leave the sidebar unchanged.
pub fn summarize(transcript: &[ChatMessage], config: &SidebarConfig) -> Vec<SidebarItem> {
    let user_messages: Vec<&ChatMessage> = transcript
        .iter()
        .filter(|m| m.role == Role::User)
        .collect();

    user_messages
        .iter()
        .rev()
        .take(config.recent_limit)
        .map(|m| SidebarItem::new(truncate_label(&m.content, config.truncate_chars)))
        .collect()
}

/// Truncate to `max_chars` characters, appending an ellipsis when cut.
/// Counts chars rather than bytes so multi-byte text never splits.
fn truncate_label(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let mut label: String = content.chars().take(max_chars).collect();
    label.push_str("...");
    label
}

use serde::{Deserialize, Serialize};

/// Structured render representation of formatted message content.
///
/// `format_message` in chatboard-core produces blocks; the UI layer turns
/// them into concrete widgets. No markup strings cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A paragraph; each element is one line, separated by line breaks.
    Paragraph { lines: Vec<String> },
    /// A bullet list with markers already stripped.
    List { items: Vec<String> },
}

impl ContentBlock {
    pub fn paragraph(lines: Vec<String>) -> Self {
        ContentBlock::Paragraph { lines }
    }

    pub fn list(items: Vec<String>) -> Self {
        ContentBlock::List { items }
    }

    /// Plain-text projection, used for logging and assertions.
    pub fn as_text(&self) -> String {
        match self {
            ContentBlock::Paragraph { lines } => lines.join("\n"),
            ContentBlock::List { items } => items.join("\n"),
        }
    }
}

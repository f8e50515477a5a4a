//! WASM-target tests for chatboard-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chatboard_types::message::*;
use chatboard_types::block::*;
use chatboard_types::event::*;
use chatboard_types::config::*;
use chatboard_types::error::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = ChatMessage::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
    assert!(msg.timestamp.is_some());
}

#[wasm_bindgen_test]
fn message_assistant() {
    let msg = ChatMessage::assistant("Hi there");
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "Hi there");
}

#[wasm_bindgen_test]
fn message_serialization_roundtrip() {
    let msg = ChatMessage::user("test input");
    let json = serde_json::to_string(&msg).unwrap();
    let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.role, Role::User);
    assert_eq!(deserialized.content, "test input");
}

#[wasm_bindgen_test]
fn message_without_timestamp_deserializes() {
    let msg: ChatMessage =
        serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
    assert_eq!(msg.role, Role::Assistant);
    assert!(msg.timestamp.is_none());
}

#[wasm_bindgen_test]
fn role_serialization() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
}

// ─── ContentBlock Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn block_paragraph_as_text() {
    let block = ContentBlock::paragraph(vec!["Hello".to_string(), "World".to_string()]);
    assert_eq!(block.as_text(), "Hello\nWorld");
}

#[wasm_bindgen_test]
fn block_serialization() {
    let block = ContentBlock::list(vec!["item".to_string()]);
    let json = serde_json::to_string(&block).unwrap();
    let back: ContentBlock = serde_json::from_str(&json).unwrap();
    assert_eq!(back, block);
}

// ─── Event Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn session_event_serialization() {
    let event = SessionEvent::MessageAppended {
        role: Role::User,
        content: "hello".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("MessageAppended"));
}

// ─── Config Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.api.chat_path, "/api/chat");
    assert_eq!(config.auth.login_path, "/login");
    assert_eq!(config.sidebar.recent_limit, 5);
}

// ─── Error Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn error_retryability() {
    assert!(!ClientError::AuthExpired.is_retryable());
    assert!(ClientError::Network("offline".to_string()).is_retryable());
}

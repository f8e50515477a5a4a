//! Chat API adapter.
//!
//! Speaks the dashboard backend's JSON protocol over the browser
//! `fetch()` via gloo-net. HTTP status codes are mapped onto
//! `ClientError` variants here, so the core never sees raw statuses.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use chatboard_core::ports::ChatApiPort;
use chatboard_types::{
    ClientError, Result,
    config::ApiConfig,
    message::ChatMessage,
};

pub struct HttpChatApi {
    config: ApiConfig,
}

impl HttpChatApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Absolute or same-origin endpoint URL for a configured path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

#[async_trait(?Send)]
impl ChatApiPort for HttpChatApi {
    async fn send_message(&self, message: &str) -> Result<String> {
        let response = Request::post(&self.endpoint(&self.config.chat_path))
            .header("Content-Type", "application/json")
            .json(&ChatPayload { message })
            .map_err(|e| ClientError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check_status(&response).await?;

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(reply.response)
    }

    async fn fetch_history(&self) -> Result<Vec<ChatMessage>> {
        let response = Request::get(&self.endpoint(&self.config.history_path))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check_status(&response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }

    async fn clear_history(&self) -> Result<()> {
        let response = Request::delete(&self.endpoint(&self.config.history_path))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        // Response body is ignored; only the status matters
        check_status(&response).await
    }
}

/// Map non-2xx statuses onto the error taxonomy: 401/403 mean the session
/// expired, anything else is a server/application fault.
async fn check_status(response: &Response) -> Result<()> {
    if response.ok() {
        return Ok(());
    }
    match response.status() {
        401 | 403 => Err(ClientError::AuthExpired),
        status => {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(ClientError::Api { status, message })
        }
    }
}

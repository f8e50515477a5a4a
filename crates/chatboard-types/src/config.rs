use serde::{Deserialize, Serialize};

/// Top-level client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub sidebar: SidebarConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
            sidebar: SidebarConfig::default(),
        }
    }
}

/// Remote chat API endpoints. `base_url` is empty for same-origin requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub chat_path: String,
    pub history_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            chat_path: "/api/chat".to_string(),
            history_path: "/api/chat/history".to_string(),
        }
    }
}

/// How the client reacts to an expired session (HTTP 401/403).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub login_path: String,
    pub redirect_delay_ms: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            redirect_delay_ms: 2000,
        }
    }
}

/// Bounds for the recent-history sidebar summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarConfig {
    pub recent_limit: usize,
    pub truncate_chars: usize,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            recent_limit: 5,
            truncate_chars: 30,
        }
    }
}

use std::time::Duration;

use serde::Deserialize;

use crate::environment;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Request {
    /// Request user agent
    pub user_agent: String,
    /// Request timeout in milliseconds
    ///
    /// Requests wait indefinitely when unset
    pub timeout_ms: Option<u64>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            user_agent: environment::user_agent(),
            timeout_ms: None,
        }
    }
}

impl Request {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

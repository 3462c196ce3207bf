use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
}

fn default_max_notifications() -> usize {
    5
}

fn default_notification_ttl_ms() -> u64 {
    12_000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_notifications: default_max_notifications(),
            notification_ttl_ms: default_notification_ttl_ms(),
        }
    }
}

impl SessionConfig {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

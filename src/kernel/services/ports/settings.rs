use serde::{Deserialize, Serialize};

use super::config::SessionConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub session: SessionConfig,
}

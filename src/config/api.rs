use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    /// Seconds; `0` or absent disables the per-request timeout.
    #[serde(default)]
    pub timeout: Option<u64>,
}

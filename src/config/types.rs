use serde::{Deserialize, Serialize};

use crate::ui::lookup::StalePolicy;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Settings for the lexical lookup service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Service root (e.g., "https://api.datamuse.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query parameter naming the relation; "ml" is means-like.
    #[serde(default = "default_relation")]
    pub relation: String,
    /// Whole-request timeout. Unset means the transport default.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
    /// Drop completions of lookups that were superseded by a newer one.
    #[serde(default)]
    pub discard_stale_responses: bool,
}

fn default_base_url() -> String {
    "https://api.datamuse.com".to_string()
}

fn default_relation() -> String {
    "ml".to_string()
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            relation: default_relation(),
            request_timeout_seconds: None,
            discard_stale_responses: false,
        }
    }
}

impl LookupConfig {
    pub fn stale_policy(&self) -> StalePolicy {
        if self.discard_stale_responses {
            StalePolicy::DiscardStale
        } else {
            StalePolicy::LastWriteWins
        }
    }
}

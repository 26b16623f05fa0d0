//! Agent configuration handling.
//!
//! Agents are configured from an optional JSON object. The standard `seed`
//! field is extracted; every other field is kept under `custom` for the agent
//! to interpret.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for agents.
///
/// ```json
/// {"seed": 12345, "aggression": 0.7}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// RNG seed for reproducible decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Agent-specific fields.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Parse an optional JSON config; malformed input yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// No seed, no custom fields.
    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}

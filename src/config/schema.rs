//! Persona schema types
//!
//! This module defines the core types for agent persona documents.
//! These types are deserialized from JSON persona files.
//!
//! The schema is intentionally open: unknown fields at any level are
//! preserved opaquely rather than rejected, so new providers and new
//! persona attributes can ship without a schema change here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

// ============================================================================
// Agent Persona
// ============================================================================

/// A fully loaded agent persona document.
///
/// Describes the voice (`bio`, `traits`, `examples`), the external service
/// connections (`config`), and the task-weighting configuration consumed by
/// an agent runtime. The value is constructed once by the loader and frozen
/// behind an `Arc`; a reload replaces the whole value atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPersona {
    /// Persona name (required, unique identifier)
    pub name: String,

    /// Descriptive sentences, in prompt-assembly order
    #[serde(default)]
    pub bio: Vec<String>,

    /// Personality adjectives
    #[serde(default)]
    pub traits: Vec<String>,

    /// Sample utterances used as few-shot prompt material
    #[serde(default)]
    pub examples: Vec<String>,

    /// Identifiers of accounts associated with the persona
    #[serde(default)]
    pub example_accounts: Vec<String>,

    /// Polling interval in seconds for the agent runtime's main loop
    pub loop_delay: u64,

    /// Provider connection entries, one per external service
    #[serde(default)]
    pub config: Vec<ProviderConfig>,

    /// Weighted tasks for probabilistic action selection
    #[serde(default)]
    pub tasks: Vec<WeightedTask>,

    /// Whether `time_based_multipliers` applies
    #[serde(default)]
    pub use_time_based_weights: bool,

    /// Multiplier factors keyed by named time-bucket
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub time_based_multipliers: IndexMap<String, f64>,

    /// Unknown top-level fields, preserved for re-serialization
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AgentPersona {
    /// Looks up a provider config entry by its unique name.
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.config.iter().find(|p| p.name == name)
    }

    /// Iterates provider names in document order.
    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.config.iter().map(|p| p.name.as_str())
    }

    /// Joins the `bio` lines into a system prompt.
    ///
    /// Line order follows the document; it matters for prompt assembly.
    #[must_use]
    pub fn system_prompt(&self) -> String {
        self.bio.join("\n")
    }

    /// Returns `loop_delay` as a [`Duration`].
    #[must_use]
    pub const fn loop_interval(&self) -> Duration {
        Duration::from_secs(self.loop_delay)
    }

    /// Returns the multiplier for a time bucket.
    ///
    /// Yields `None` unless `use_time_based_weights` is set, so callers
    /// never apply multipliers the document has toggled off.
    #[must_use]
    pub fn multiplier(&self, bucket: &str) -> Option<f64> {
        if !self.use_time_based_weights {
            return None;
        }
        self.time_based_multipliers.get(bucket).copied()
    }
}

// ============================================================================
// Provider Config
// ============================================================================

/// A provider connection entry.
///
/// `name` discriminates the provider (e.g. "ollama", "discord"); everything
/// else is a provider-specific open key set (`base_url`, `model`,
/// `server_id`, ...) kept opaque so new providers need no schema change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name (unique across the `config` list)
    pub name: String,

    /// Provider-specific settings, preserved verbatim
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl ProviderConfig {
    /// Returns a string-valued setting.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(Value::as_str)
    }

    /// Returns an unsigned integer setting.
    #[must_use]
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.settings.get(key).and_then(Value::as_u64)
    }

    /// Returns a boolean setting.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.settings.get(key).and_then(Value::as_bool)
    }
}

// ============================================================================
// Weighted Task
// ============================================================================

/// A named action with a relative selection probability.
///
/// Weights are relative, not normalized; an external scheduler selects
/// among tasks proportionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTask {
    /// Task name
    pub name: String,

    /// Relative selection weight (strictly positive)
    pub weight: f64,

    /// Unknown task fields, preserved for re-serialization
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Tests
// ============================================================================

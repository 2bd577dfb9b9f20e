//! Persona configuration module
//!
//! Handles loading and validation of agent persona documents: the JSON
//! files describing a persona's voice, provider connections, and task
//! weighting.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLimits, ConfigLoader, LoadResult, LoadWarning};
pub use schema::{AgentPersona, ProviderConfig, WeightedTask};
pub use validation::{ValidationResult, Validator};

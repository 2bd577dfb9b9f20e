//! Persona loader
//!
//! This module implements the persona loading pipeline:
//! 1. File size check
//! 2. Read raw content (UTF-8 BOM stripped)
//! 3. JSON parsing
//! 4. Schema validation on the raw JSON tree
//! 5. Duplicate provider check
//! 6. Deserialization to the typed persona
//! 7. Freeze with `Arc`
//!
//! Loading has no side effects beyond reading the input source. The frozen
//! `Arc<AgentPersona>` supports atomic whole-value replacement on reload;
//! consumers never observe a partially updated persona.

use crate::config::schema::AgentPersona;
use crate::config::validation::Validator;
use crate::error::ConfigError;

use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// Public API
// ============================================================================

/// Limits for persona documents to prevent resource exhaustion.
#[derive(Debug, Clone)]
pub struct ConfigLimits {
    /// Maximum persona file size in bytes.
    pub max_config_size: usize,

    /// Maximum number of provider config entries.
    pub max_providers: usize,

    /// Maximum number of weighted tasks.
    pub max_tasks: usize,
}

impl Default for ConfigLimits {
    fn default() -> Self {
        Self {
            max_config_size: env_or("PERSONAFORGE_MAX_CONFIG_SIZE", 1024 * 1024),
            max_providers: env_or("PERSONAFORGE_MAX_PROVIDERS", 64),
            max_tasks: env_or("PERSONAFORGE_MAX_TASKS", 256),
        }
    }
}

/// Result of loading a persona document.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated persona.
    pub persona: Arc<AgentPersona>,

    /// Warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during persona loading.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Field path or file location the warning refers to.
    pub location: Option<String>,
}

/// Persona loader.
///
/// Handles the full pipeline from JSON file to frozen [`AgentPersona`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    limits: ConfigLimits,
}

impl ConfigLoader {
    /// Creates a new loader with the given limits.
    #[must_use]
    pub const fn new(limits: ConfigLimits) -> Self {
        Self { limits }
    }

    /// Creates a new loader with default limits.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ConfigLimits::default())
    }

    /// Loads a persona file and returns the frozen persona.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, exceeds the size limit,
    /// is not well-formed JSON, violates the schema, or names the same
    /// provider twice.
    pub fn load(&self, path: &Path) -> Result<LoadResult, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        if usize::try_from(metadata.len()).unwrap_or(usize::MAX) > self.limits.max_config_size {
            return Err(ConfigError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: self.limits.max_config_size,
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        self.load_str(&raw, path)
    }

    /// Loads a persona from an in-memory JSON string.
    ///
    /// `origin` is used in error messages only; no file is read.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not well-formed JSON, violates the
    /// schema, or names the same provider twice.
    pub fn load_str(&self, text: &str, origin: &Path) -> Result<LoadResult, ConfigError> {
        // Handle UTF-8 BOM
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let root: Value = serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            line: Some(e.line()).filter(|&l| l > 0),
            message: e.to_string(),
        })?;

        if root.is_null() {
            return Err(ConfigError::Parse {
                path: origin.to_path_buf(),
                line: None,
                message: "persona document is empty".to_string(),
            });
        }

        let mut validator = Validator::new();
        let validation = validator.validate(&root, &self.limits);

        if validation.has_errors() {
            return Err(ConfigError::Schema {
                path: origin.display().to_string(),
                errors: validation.errors,
            });
        }

        check_duplicate_providers(&root)?;

        // Validation guarantees this succeeds; keep the error mapped anyway
        // so a schema/validator drift never panics.
        let persona: AgentPersona =
            serde_json::from_value(root).map_err(|e| ConfigError::Parse {
                path: origin.to_path_buf(),
                line: None,
                message: format!("failed to deserialize persona: {e}"),
            })?;

        let warnings = validation
            .warnings
            .into_iter()
            .map(|issue| LoadWarning {
                message: issue.message,
                location: Some(issue.path),
            })
            .collect();

        Ok(LoadResult {
            persona: Arc::new(persona),
            warnings,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Rejects documents whose `config` list names the same provider twice.
///
/// Provider lookup is by unique name; a duplicate would shadow an entry.
fn check_duplicate_providers(root: &Value) -> Result<(), ConfigError> {
    let Some(providers) = root.get("config").and_then(Value::as_array) else {
        return Ok(());
    };

    let mut seen = HashSet::new();
    for provider in providers {
        if let Some(name) = provider.get("name").and_then(Value::as_str) {
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateProvider {
                    name: name.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Parses an environment variable with a default value.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================

//! Persona validation
//!
//! Schema and semantic validation for persona documents. Validation runs
//! on the raw JSON tree, before typed deserialization, so every issue can
//! carry the full path of the offending field (e.g. `tasks[0].weight`).
//!
//! Validation collects ALL errors (doesn't stop at first) to provide
//! comprehensive feedback to users.

use crate::config::loader::ConfigLimits;
use crate::error::{Severity, ValidationIssue};

use serde_json::Value;

// ============================================================================
// Public API
// ============================================================================

/// Result of persona validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Persona document validator.
///
/// Performs structural and semantic validation on a parsed JSON document.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a persona document and returns the result.
    ///
    /// This method collects all errors and warnings rather than stopping
    /// at the first issue.
    pub fn validate(&mut self, root: &Value, limits: &ConfigLimits) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        let Some(doc) = root.as_object() else {
            self.add_error("", "persona document root must be a JSON object");
            return ValidationResult {
                errors: std::mem::take(&mut self.errors),
                warnings: std::mem::take(&mut self.warnings),
            };
        };

        self.validate_name(doc.get("name"));

        for field in ["bio", "traits", "examples", "example_accounts"] {
            if let Some(value) = doc.get(field) {
                self.validate_string_seq(value, field);
            }
        }

        self.validate_loop_delay(doc.get("loop_delay"));
        self.validate_tasks(doc.get("tasks"), limits);
        self.validate_providers(doc.get("config"), limits);
        self.validate_weight_toggle(doc);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Field Validation
    // ========================================================================

    /// Validates the persona name.
    fn validate_name(&mut self, name: Option<&Value>) {
        match name {
            None => self.add_error("name", "persona name is required"),
            Some(Value::String(s)) => {
                if s.is_empty() {
                    self.add_error("name", "persona name cannot be empty");
                } else if s.len() > 100 {
                    self.add_warning("name", "persona name is unusually long (> 100 characters)");
                }
            }
            Some(_) => self.add_error("name", "persona name must be a string"),
        }
    }

    /// Validates a sequence-of-strings field.
    fn validate_string_seq(&mut self, value: &Value, path: &str) {
        let Some(items) = value.as_array() else {
            self.add_error(path, "must be an array of strings");
            return;
        };
        for (idx, item) in items.iter().enumerate() {
            if !item.is_string() {
                self.add_error(&format!("{path}[{idx}]"), "must be a string");
            }
        }
    }

    /// Validates the runtime loop interval.
    fn validate_loop_delay(&mut self, value: Option<&Value>) {
        match value {
            None => self.add_error("loop_delay", "loop_delay is required"),
            Some(v) if v.as_u64().is_some() => {}
            Some(v) if v.as_i64().is_some() => {
                self.add_error("loop_delay", "loop_delay must be non-negative");
            }
            Some(v) if v.is_number() => {
                self.add_error("loop_delay", "loop_delay must be an integer number of seconds");
            }
            Some(_) => self.add_error("loop_delay", "loop_delay must be an integer"),
        }
    }

    /// Validates the weighted task list.
    fn validate_tasks(&mut self, value: Option<&Value>, limits: &ConfigLimits) {
        let Some(value) = value else {
            self.add_error("tasks", "at least one task is required");
            return;
        };
        let Some(tasks) = value.as_array() else {
            self.add_error("tasks", "tasks must be an array");
            return;
        };
        if tasks.is_empty() {
            self.add_error("tasks", "tasks cannot be empty");
            return;
        }
        if tasks.len() > limits.max_tasks {
            self.add_error(
                "tasks",
                &format!(
                    "too many tasks: {} (maximum: {}). \
                     Set PERSONAFORGE_MAX_TASKS to increase the limit.",
                    tasks.len(),
                    limits.max_tasks
                ),
            );
        }

        for (idx, task) in tasks.iter().enumerate() {
            let path = format!("tasks[{idx}]");

            let Some(entry) = task.as_object() else {
                self.add_error(&path, "task must be an object with 'name' and 'weight'");
                continue;
            };

            match entry.get("name") {
                None => self.add_error(&format!("{path}.name"), "task name is required"),
                Some(Value::String(s)) if s.is_empty() => {
                    self.add_error(&format!("{path}.name"), "task name cannot be empty");
                }
                Some(Value::String(_)) => {}
                Some(_) => self.add_error(&format!("{path}.name"), "task name must be a string"),
            }

            match entry.get("weight").map(Value::as_f64) {
                None => self.add_error(&format!("{path}.weight"), "task weight is required"),
                Some(None) => {
                    self.add_error(&format!("{path}.weight"), "task weight must be a number");
                }
                Some(Some(w)) if w <= 0.0 => {
                    self.add_error(&format!("{path}.weight"), "task weight must be positive");
                }
                Some(Some(_)) => {}
            }
        }
    }

    /// Validates the provider config list.
    ///
    /// Name uniqueness is enforced by the loader as a separate stage, since
    /// a duplicate is its own error kind rather than a schema violation.
    fn validate_providers(&mut self, value: Option<&Value>, limits: &ConfigLimits) {
        let Some(value) = value else {
            return;
        };
        let Some(providers) = value.as_array() else {
            self.add_error("config", "config must be an array of provider entries");
            return;
        };
        if providers.len() > limits.max_providers {
            self.add_error(
                "config",
                &format!(
                    "too many provider entries: {} (maximum: {}). \
                     Set PERSONAFORGE_MAX_PROVIDERS to increase the limit.",
                    providers.len(),
                    limits.max_providers
                ),
            );
        }

        for (idx, provider) in providers.iter().enumerate() {
            let path = format!("config[{idx}]");

            let Some(entry) = provider.as_object() else {
                self.add_error(&path, "provider entry must be an object");
                continue;
            };

            match entry.get("name") {
                None => self.add_error(&format!("{path}.name"), "provider name is required"),
                Some(Value::String(s)) if s.is_empty() => {
                    self.add_error(&format!("{path}.name"), "provider name cannot be empty");
                }
                Some(Value::String(_)) => {}
                Some(_) => {
                    self.add_error(&format!("{path}.name"), "provider name must be a string");
                }
            }
        }
    }

    /// Validates `use_time_based_weights` and `time_based_multipliers`.
    fn validate_weight_toggle(&mut self, doc: &serde_json::Map<String, Value>) {
        let enabled = match doc.get("use_time_based_weights") {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.add_error("use_time_based_weights", "must be a boolean");
                false
            }
        };

        let mut have_multipliers = false;
        if let Some(value) = doc.get("time_based_multipliers") {
            if let Some(multipliers) = value.as_object() {
                have_multipliers = !multipliers.is_empty();
                for (key, factor) in multipliers {
                    if factor.as_f64().is_none() {
                        self.add_error(
                            &format!("time_based_multipliers.{key}"),
                            "multiplier must be a number",
                        );
                    }
                }
            } else {
                self.add_error(
                    "time_based_multipliers",
                    "must be a map of bucket names to numbers",
                );
            }
        }

        if enabled && !have_multipliers {
            self.add_warning(
                "time_based_multipliers",
                "use_time_based_weights is enabled but no multipliers are defined",
            );
        }
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Error types for `PersonaForge`
//!
//! All failure modes are detected at load time and surfaced synchronously
//! to the caller; nothing is silently recovered or defaulted.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `PersonaForge` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid JSON, schema violation)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `PersonaForge` operations.
///
/// Aggregates the domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum PersonaForgeError {
    /// Persona loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersonaForgeError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Persona loading and validation errors.
///
/// These errors cover all failure modes during parsing and validation
/// of a persona document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the persona file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// One or more schema violations were found
    #[error("schema validation failed for {path}")]
    Schema {
        /// Path to the persona file
        path: String,
        /// List of schema violations found, each with a field path
        errors: Vec<ValidationIssue>,
    },

    /// Two provider config entries share the same name
    #[error("duplicate provider config '{name}': provider names must be unique")]
    DuplicateProvider {
        /// The repeated provider name
        name: String,
    },

    /// Persona file not found or unreadable
    #[error("persona file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Persona file exceeds the configured size limit
    #[error("persona file {path} is {size} bytes (limit: {limit})")]
    TooLarge {
        /// Path to the oversized file
        path: PathBuf,
        /// Actual file size in bytes
        size: u64,
        /// Configured size limit in bytes
        limit: usize,
    },
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single issue found during persona validation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// JSON path to the problematic field (e.g., "tasks[0].weight")
    pub path: String,
    /// Description of the issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - violation that prevents the persona from being used
    Error,
    /// Warning - potential issue that does not prevent loading
    Warning,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `PersonaForge` operations.
pub type Result<T> = std::result::Result<T, PersonaForgeError>;

// ============================================================================
// Tests
// ============================================================================

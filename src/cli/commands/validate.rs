//! `validate` command
//!
//! Validates persona files and reports every schema violation with its
//! field path. Exits non-zero on the first file that fails to load.

use serde_json::json;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::ConfigLoader;
use crate::error::{ConfigError, PersonaForgeError, Severity, ValidationIssue};

/// Validate one or more persona files.
///
/// # Errors
///
/// Returns an error for the first file that is unreadable, malformed, or
/// schema-invalid. With `--strict`, warnings fail the file as well.
pub fn run(args: &ValidateArgs) -> Result<(), PersonaForgeError> {
    let loader = ConfigLoader::with_defaults();
    let mut reports = Vec::new();

    for path in &args.files {
        if !path.exists() {
            return Err(PersonaForgeError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )));
        }
        tracing::info!(file = %path.display(), "validating persona");

        match loader.load(path) {
            Ok(result) => {
                for warning in &result.warnings {
                    tracing::warn!(
                        location = warning.location.as_deref().unwrap_or("<unknown>"),
                        "{}",
                        warning.message
                    );
                }

                if args.strict && !result.warnings.is_empty() {
                    return Err(ConfigError::Schema {
                        path: path.display().to_string(),
                        errors: result
                            .warnings
                            .iter()
                            .map(|w| ValidationIssue {
                                path: w.location.clone().unwrap_or_default(),
                                message: format!("{} (strict mode)", w.message),
                                severity: Severity::Error,
                            })
                            .collect(),
                    }
                    .into());
                }

                tracing::info!(
                    file = %path.display(),
                    persona = %result.persona.name,
                    "persona valid"
                );
                reports.push(json!({
                    "file": path.display().to_string(),
                    "valid": true,
                    "persona": result.persona.name,
                    "warnings": result.warnings.iter()
                        .map(|w| w.message.clone())
                        .collect::<Vec<_>>(),
                }));
            }
            Err(err) => {
                if let ConfigError::Schema { errors, .. } = &err {
                    for issue in errors {
                        tracing::error!("{issue}");
                    }
                }
                if args.format == OutputFormat::Json {
                    let report = json!({
                        "file": path.display().to_string(),
                        "valid": false,
                        "error": err.to_string(),
                    });
                    println!("{report}");
                }
                return Err(err.into());
            }
        }
    }

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

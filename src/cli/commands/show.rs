//! `show` command
//!
//! Loads a persona file and prints a summary or its JSON re-serialization.

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::ConfigLoader;
use crate::error::PersonaForgeError;

/// Load a persona and display it.
///
/// # Errors
///
/// Returns an error if the file fails to load or re-serialize.
pub fn run(args: &ShowArgs) -> Result<(), PersonaForgeError> {
    let loader = ConfigLoader::with_defaults();
    let result = loader.load(&args.file)?;
    let persona = &result.persona;

    match args.format {
        OutputFormat::Human => {
            println!("persona: {}", persona.name);
            println!("loop delay: {}s", persona.loop_delay);
            println!("bio lines: {}", persona.bio.len());
            if !persona.traits.is_empty() {
                println!("traits: {}", persona.traits.join(", "));
            }
            println!("providers ({}):", persona.config.len());
            for provider in &persona.config {
                println!("  - {}", provider.name);
            }
            println!("tasks ({}):", persona.tasks.len());
            for task in &persona.tasks {
                println!("  - {} (weight {})", task.name, task.weight);
            }
            if persona.use_time_based_weights {
                println!("time-based multipliers:");
                for (bucket, factor) in &persona.time_based_multipliers {
                    println!("  - {bucket}: {factor}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(persona.as_ref())?);
        }
    }

    Ok(())
}

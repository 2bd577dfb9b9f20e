//! CLI argument definitions
//!
//! All Clap derive structs for `PersonaForge` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Loader and validator for agent persona configuration files.
#[derive(Parser, Debug)]
#[command(name = "personaforge", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "PERSONAFORGE_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate persona files without loading them into a runtime.
    Validate(ValidateArgs),

    /// Load a persona file and display its contents.
    Show(ShowArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Persona files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Persona file to load.
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_with_file() {
        let cli = Cli::try_parse_from(["personaforge", "validate", "zerecall.json"]);
        assert!(cli.is_ok(), "Failed to parse: {cli:?}");
    }

    #[test]
    fn test_validate_requires_files() {
        let result = Cli::try_parse_from(["personaforge", "validate"]);
        assert!(result.is_err(), "Expected error for missing files");
    }

    #[test]
    fn test_validate_multiple_files() {
        let cli =
            Cli::try_parse_from(["personaforge", "validate", "a.json", "b.json"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert!(!args.strict);
            return;
        }
        panic!("Expected ValidateArgs");
    }

    #[test]
    fn test_validate_strict_flag() {
        let cli =
            Cli::try_parse_from(["personaforge", "validate", "--strict", "a.json"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert!(args.strict);
            return;
        }
        panic!("Expected ValidateArgs");
    }

    #[test]
    fn test_show_default_format() {
        let cli = Cli::try_parse_from(["personaforge", "show", "zerecall.json"]).unwrap();
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Human);
            return;
        }
        panic!("Expected ShowArgs");
    }

    #[test]
    fn test_show_json_format() {
        let cli =
            Cli::try_parse_from(["personaforge", "show", "--format", "json", "z.json"]).unwrap();
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Json);
            return;
        }
        panic!("Expected ShowArgs");
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["personaforge", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let result = Cli::try_parse_from(["personaforge", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli =
                Cli::try_parse_from(["personaforge", "--color", variant, "validate", "x.json"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["personaforge", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["personaforge", "-vvv", "validate", "x.json"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["personaforge", "--quiet", "validate", "x.json"]).unwrap();
        assert!(cli.quiet);
    }
}

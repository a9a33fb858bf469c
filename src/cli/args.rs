//! Command-line argument parsing for ConsentRight

use clap::Parser;
use std::path::PathBuf;

/// ConsentRight - terminal medical consultation assistant
#[derive(Parser, Debug)]
#[command(name = "consentright")]
#[command(version)]
#[command(about = "Describe your symptoms, get a specialist recommendation", long_about = None)]
pub struct Args {
    /// One-shot symptom description; starts the interactive loop when omitted
    #[arg(value_name = "SYMPTOMS")]
    pub symptoms: Option<String>,

    /// Gemini model to use (overrides the config file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run the bundled sample cases instead of a consultation
    #[arg(long)]
    pub cases: bool,

    /// Verbosity level: -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Tracing filter directive for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "consentright=info",
            Verbosity::VeryVerbose => "consentright=debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_mapping() {
        let args = Args::parse_from(["consentright"]);
        assert_eq!(args.verbosity(), Verbosity::Normal);

        let args = Args::parse_from(["consentright", "-v"]);
        assert_eq!(args.verbosity(), Verbosity::Verbose);

        let args = Args::parse_from(["consentright", "-vv"]);
        assert_eq!(args.verbosity(), Verbosity::VeryVerbose);

        let args = Args::parse_from(["consentright", "-q"]);
        assert_eq!(args.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_one_shot_symptoms() {
        let args = Args::parse_from(["consentright", "persistent cough for three weeks"]);
        assert_eq!(
            args.symptoms.as_deref(),
            Some("persistent cough for three weeks")
        );
        assert!(!args.cases);
    }

    #[test]
    fn test_cases_flag() {
        let args = Args::parse_from(["consentright", "--cases"]);
        assert!(args.cases);
    }
}

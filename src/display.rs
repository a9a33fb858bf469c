//! Terminal output formatting
//!
//! Renders consultation results and failure guidance with colored
//! output, and provides the in-flight spinner.

use crate::consultation::{ConsultationResult, Urgency};
use crate::errors::{ConsultError, ProviderError};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const RULE: &str = "------------------------------------------------------------";

/// Print the welcome banner for the interactive loop
pub fn print_welcome() {
    println!();
    println!("{}", "=".repeat(60));
    println!(
        "{}",
        "Welcome to ConsentRight - Medical Consultation Assistant".bold()
    );
    println!("{}", "=".repeat(60));
    println!("\nDescribe your symptoms in detail. Type 'quit' or 'exit' to end.");
    println!("{}", RULE);
}

/// Spinner shown while a consultation is in flight
pub fn consultation_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing symptoms...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn urgency_colored(urgency: Urgency) -> colored::ColoredString {
    match urgency {
        Urgency::High => urgency.name().red().bold(),
        Urgency::Medium => urgency.name().yellow(),
        Urgency::Low => urgency.name().green(),
    }
}

/// Render one consultation result
pub fn print_result(result: &ConsultationResult) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{}", "CONSULTATION RESULT".bold());
    println!("{}", "=".repeat(60));

    if result.fallback {
        println!(
            "\n{}",
            "Note: the recommendation could not be fully interpreted; showing a safe default."
                .yellow()
        );
    }

    println!(
        "\n{} {}",
        "RECOMMENDED SPECIALIST:".bold(),
        result.specialist.name().cyan().bold()
    );
    println!(
        "{} {}",
        "URGENCY LEVEL:".bold(),
        urgency_colored(result.urgency)
    );
    println!("\n{}\n   {}", "REASONING:".bold(), result.reasoning);

    if let Some(alternative) = result.alternative {
        println!(
            "\n{} {}",
            "ALTERNATIVE SPECIALIST:".bold(),
            alternative.name().cyan()
        );
    }
    if !result.notes.is_empty() {
        println!("\n{}\n   {}", "ADDITIONAL NOTES:".bold(), result.notes);
    }

    println!("\n{}", RULE);
    println!(
        "{}",
        "IMPORTANT: This is AI-generated. Consult a healthcare professional.".dimmed()
    );
    println!("{}", RULE);
}

/// Render a terminal failure with category-specific suggestions
pub fn print_error_guidance(error: &ConsultError) {
    let (message, suggestions): (&str, &[&str]) = match error {
        ConsultError::Validation(e) => {
            println!("\n{} {}", "✗".red(), e);
            return;
        }
        ConsultError::Interrupted => {
            println!("\n{} Consultation interrupted.", "!".yellow());
            return;
        }
        _ => match error.provider_error() {
            Some(ProviderError::NetworkUnreachable(_)) | Some(ProviderError::Timeout { .. }) => (
                "Network connection issue.",
                &[
                    "Check your internet connection",
                    "Try again in a few moments",
                ],
            ),
            Some(ProviderError::AuthFailed) => (
                "API authentication issue.",
                &[
                    "Verify your GEMINI_API_KEY environment variable",
                    "Check that the key is active and has the needed permissions",
                ],
            ),
            Some(ProviderError::RateLimited) => (
                "API rate limit exceeded.",
                &["Wait a few minutes before trying again"],
            ),
            Some(ProviderError::ServerError { .. }) => (
                "The AI service is temporarily unavailable.",
                &["Try again later", "If the problem persists, consult a General Physician"],
            ),
            Some(ProviderError::MalformedRequest(_)) => (
                "The request was rejected by the AI service.",
                &["Try rephrasing your symptoms", "Avoid unusual characters"],
            ),
            _ => (
                "Unexpected error.",
                &["Try again", "Restart the application if it keeps failing"],
            ),
        },
    };

    println!("\n{} {}", "✗".red(), message);
    println!("  ({})", error.to_string().dimmed());
    println!("\nSuggestions:");
    for suggestion in suggestions {
        println!("   • {}", suggestion);
    }
    println!("\nIf this is urgent, contact a doctor or emergency services.");
}

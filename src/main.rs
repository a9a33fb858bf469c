//! ConsentRight - main CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use consentright::cases;
use consentright::cli::Args;
use consentright::config::Config;
use consentright::consultation::{ConsultationClient, ConsultationResult};
use consentright::display;
use consentright::errors::ConsultError;
use consentright::provider::GeminiProvider;
use consentright::validation::{validate_symptoms, SymptomInput};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let model = args.model.clone().unwrap_or_else(|| config.model.clone());
    let api_key = Config::api_key()?;

    let provider = GeminiProvider::new(api_key, model, config.request_timeout())
        .context("Failed to initialize the Gemini provider")?;

    let client = ConsultationClient::new(
        Box::new(provider),
        config.retry_policy(),
        config.validator_config(),
    );

    if args.cases {
        return cases::run_cases(&client).await;
    }

    if let Some(symptoms) = &args.symptoms {
        return run_once(&client, symptoms).await;
    }

    run_interactive(&client).await
}

/// One-shot mode: consult once and exit nonzero on terminal failure
async fn run_once(client: &ConsultationClient, symptoms: &str) -> Result<()> {
    match consult_cancellable(client, symptoms).await {
        Ok(result) => {
            display::print_result(&result);
            Ok(())
        }
        Err(e) => {
            display::print_error_guidance(&e);
            std::process::exit(1);
        }
    }
}

/// Interactive consultation loop
async fn run_interactive(client: &ConsultationClient) -> Result<()> {
    display::print_welcome();

    let mut editor = DefaultEditor::new().context("Failed to initialize input editor")?;

    loop {
        let Some(input) = read_symptoms(&mut editor, client) else {
            break;
        };

        let spinner = display::consultation_spinner();
        let outcome = tokio::select! {
            result = client.consult_validated(&input) => result,
            _ = tokio::signal::ctrl_c() => Err(ConsultError::Interrupted),
        };
        spinner.finish_and_clear();

        match outcome {
            Ok(result) => display::print_result(&result),
            Err(e) => display::print_error_guidance(&e),
        }

        if !ask_continue(&mut editor) {
            break;
        }
    }

    println!("\nThank you for using ConsentRight!");
    println!("Remember: always consult healthcare professionals for medical concerns.");
    Ok(())
}

/// Consult with Ctrl-C aborting a pending call or backoff sleep
async fn consult_cancellable(
    client: &ConsultationClient,
    symptoms: &str,
) -> consentright::Result<ConsultationResult> {
    tokio::select! {
        result = client.consult(symptoms) => result,
        _ = tokio::signal::ctrl_c() => Err(ConsultError::Interrupted),
    }
}

/// Read and validate symptoms, re-prompting until accepted.
///
/// Returns None when the user quits or the input stream ends.
fn read_symptoms(editor: &mut DefaultEditor, client: &ConsultationClient) -> Option<SymptomInput> {
    loop {
        let line = match editor.readline("\nPlease describe your symptoms:\n> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return None,
            Err(e) => {
                eprintln!("{} input error: {}", "✗".red(), e);
                return None;
            }
        };

        let trimmed = line.trim();
        if matches!(
            trimmed.to_lowercase().as_str(),
            "quit" | "exit" | "q" | "stop"
        ) {
            return None;
        }

        let _ = editor.add_history_entry(trimmed);

        match validate_symptoms(trimmed, client.validator_config()) {
            Ok(input) => return Some(input),
            Err(e) => println!("\n{} {}", "✗".red(), e),
        }
    }
}

/// Ask whether to run another consultation
fn ask_continue(editor: &mut DefaultEditor) -> bool {
    loop {
        let answer = match editor.readline("\nWould you like another consultation? (y/n): ") {
            Ok(line) => line.trim().to_lowercase(),
            Err(_) => return false,
        };

        match answer.as_str() {
            "y" | "yes" => return true,
            "n" | "no" | "quit" | "exit" => return false,
            _ => println!("Please answer 'y' or 'n'."),
        }
    }
}

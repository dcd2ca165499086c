//! Interactive career-guidance chat on the terminal
//!
//! Reads `API_KEY` and friends from the environment or a `.env` file.
//!
//! Commands:
//! - `/reset` clears the conversation
//! - `/system <instruction>` replaces the system instruction
//! - `/model <name>` switches to another model option
//! - `/temp <value>` changes the sampling temperature
//! - `/file <path> <question>` asks a question about a PDF
//! - `/quit` exits

use aetheria::client::{Config, ConversationManager, TurnOutcome, MODEL_OPTIONS};
use aetheria::providers::OpenAI;
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let provider = OpenAI::from_config(config.provider_config())?;
    let mut session = ConversationManager::from_config(provider, &config)?;

    info!(
        session = %session.session_id(),
        model = session.settings().model(),
        token_budget = session.token_budget(),
        "career assistant ready"
    );
    println!("Models: {}", MODEL_OPTIONS.join(", "));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "/quit" => break,
            "/reset" => {
                session.reset();
                println!("Conversation cleared.");
            }
            "/system" => {
                session.set_system_instruction(rest);
                println!("System instruction updated; conversation cleared.");
            }
            "/model" => match session.settings_mut().set_model(rest.trim()) {
                Ok(()) => println!("Model set to {}.", rest.trim()),
                Err(e) => println!("{}", e),
            },
            "/temp" => {
                let result = rest
                    .trim()
                    .parse::<f32>()
                    .map_err(|e| e.to_string())
                    .and_then(|t| {
                        session
                            .settings_mut()
                            .set_temperature(t)
                            .map_err(|e| e.to_string())
                    });
                match result {
                    Ok(()) => println!("Temperature set to {}.", rest.trim()),
                    Err(e) => println!("{}", e),
                }
            }
            "/file" => {
                let (path, question) = rest.split_once(' ').unwrap_or((rest, ""));
                let bytes = match tokio::fs::read(path).await {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!(path, error = %e, "failed to read document");
                        println!("Could not read {}: {}", path, e);
                        continue;
                    }
                };
                match session.submit_document(&bytes, question).await {
                    Ok(outcome) => print_outcome(&outcome),
                    Err(e) => println!("{}", e),
                }
            }
            _ => {
                let outcome = session.submit(line).await;
                print_outcome(&outcome);
            }
        }
    }

    Ok(())
}

fn print_outcome(outcome: &TurnOutcome) {
    match outcome {
        TurnOutcome::Answered(text) | TurnOutcome::Refused(text) => println!("\n{}\n", text),
        TurnOutcome::NoResponse(e) => println!("\nNo response: {}\n", e),
    }
}

//! Terminal chat front end for a RAG document-QA backend.
//!
//! Binds a line-oriented REPL to the client library: plain input asks a
//! question, slash commands cover document selection, upload and database
//! clearing. Every action's outcome lands in the transcript and is printed
//! before the prompt returns.

use mimalloc::MiMalloc;

/// Global allocator for improved performance.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use dialoguer::Confirm;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ragchat::chat::{ChatSession, Confirmer};
use ragchat::client::RagClient;
use ragchat::config::AppConfig;
use ragchat::ui;

/// Terminal confirmation prompt for destructive actions.
#[derive(Debug)]
struct TerminalConfirm;

impl Confirmer for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load().context("failed to load configuration")?;
    let client = RagClient::new(&config.api.base_url, config.api.request_timeout())
        .with_context(|| format!("invalid base URL '{}'", config.api.base_url))?;
    info!(base_url = %client.base_url(), "starting chat session");

    let mut session = ChatSession::new(client);
    let mut confirm = TerminalConfirm;

    println!("ragchat — connected to {}", config.api.base_url);
    println!("{}\n", ui::help_text());

    let stdin = io::stdin();
    let mut printed = 0;
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{}\n", ui::help_text());
                continue;
            }
            "/upload" => session.upload_document().await,
            "/clear" => session.clear_database(&mut confirm).await,
            _ if line == "/file" || line.starts_with("/file ") => {
                let path = line.trim_start_matches("/file").trim();
                if path.is_empty() {
                    session.select_file(None);
                    println!("Selection cleared.\n");
                } else {
                    session.select_file(Some(PathBuf::from(path)));
                    if let Some(selected) = session.selected_file() {
                        println!("Selected {}. Use /upload to send it.\n", selected.display());
                    }
                }
            }
            _ if line.starts_with('/') => {
                println!("Unknown command: {line}. Try /help.\n");
                continue;
            }
            question => session.ask_question(question).await,
        }

        // Print whatever the last action appended.
        for entry in &session.transcript().entries()[printed..] {
            ui::print_entry(entry);
        }
        printed = session.transcript().len();
    }

    Ok(())
}

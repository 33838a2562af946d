// Main entry point
use clap::Parser;
use colored::Colorize;

use tl::application::translate::translate_request;
use tl::domain::model::TranslationRequest;
use tl::infrastructure::config::load_config;
use tl::infrastructure::network::client::GoogleTranslator;
use tl::interfaces::cli::Cli;
use tl::presentation::table::render_grid;
use tl::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    // Spawn signal handler task
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        tl::infrastructure::config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = tl::infrastructure::config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor)
                    .arg(&config_path)
                    .status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }

    let state = AppState::new(config.clone())?;

    // Text from args, or one interactive line
    let text = if cli.query.is_empty() {
        prompt_for_input()?
    } else {
        cli.query.join(" ")
    };

    let lang = cli.lang.as_deref().unwrap_or(config.target_lang.as_str());
    let request = TranslationRequest::new(text, lang);
    let translator = GoogleTranslator::new(state.http_client.clone());

    // Use select! to handle shutdown during the network call
    let result = tokio::select! {
        result = translate_request(&translator, &request) => result?,
        _ = shutdown_rx => {
            eprintln!("{}", "Translation interrupted".yellow());
            return Ok(());
        }
    };

    // Output result
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_grid(&result, &config.display_label));
    }

    Ok(())
}

/// Prompt on stdout and read one line from stdin (trailing newline stripped)
fn prompt_for_input() -> anyhow::Result<String> {
    use std::io::{BufRead, Write};

    print!("Enter Word/Sentence...");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &tl::infrastructure::config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}

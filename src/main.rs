//! unsplash-search CLI
//!
//! - `search -q <term>`: one-shot search, prints the rendered session
//! - `interactive` (default with no command): one search per stdin line;
//!   a newer line supersedes a search still in flight
//! - `docs`: prints the Unsplash API documentation

mod cli;
mod config;
mod error;
mod http;
mod render;
mod session;
mod unsplash;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{ApiArgs, Cli, Commands, SearchArgs};
use error::{exit_code_for, AppError};
use session::SearchSession;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let result = match cli.command {
        Some(Commands::Docs) => {
            println!("{}", render::api_documentation());
            Ok(0)
        }
        Some(Commands::Search(args)) => run_search(&cli.api, args).await,
        Some(Commands::Interactive) | None => run_interactive(&cli.api).await,
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Initialize logging based on verbosity flags; RUST_LOG wins when set
fn init_logging(cli: &Cli) -> Result<()> {
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}

/// Execute one search and print the settled state; returns the exit code
async fn run_search(api: &ApiArgs, args: SearchArgs) -> Result<i32, AppError> {
    let config = api.to_config(args.limit)?;
    let session = SearchSession::connect(config)?;

    session.submit(&args.query).await;
    let state = session.state();

    if args.json {
        let json = serde_json::to_string_pretty(&state)
            .map_err(|e| AppError::Internal(format!("failed to serialize state: {}", e)))?;
        println!("{}", json);
    } else {
        println!("{}", render::session_markdown(&state));
    }

    Ok(state.error_code.map(exit_code_for).unwrap_or(0))
}

/// Submit every stdin line without waiting for the previous search
async fn run_interactive(api: &ApiArgs) -> Result<i32, AppError> {
    let config = api.to_config(None)?;
    let session = Arc::new(SearchSession::connect(config)?);

    println!("{}", render::session_markdown(&session.state()));
    info!("Reading search terms from stdin (Ctrl-D to quit)");

    let mut updates = session.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            if !state.phase.is_settled() && !state.is_loading() {
                continue;
            }
            println!("{}", render::session_markdown(&state));
        }
    });

    let mut searches = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| AppError::Internal(format!("failed to read stdin: {}", e)))?
    {
        session.spawn_submit(line, &mut searches);
    }

    while let Some(joined) = searches.join_next().await {
        if let Ok(None) = joined {
            debug!("A superseded search finished");
        }
    }

    // Last sender handle goes away here, which ends the printer loop
    drop(session);
    printer
        .await
        .map_err(|e| AppError::Internal(format!("printer task failed: {}", e)))?;
    Ok(0)
}

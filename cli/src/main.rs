//! CLI entrypoint for Switchboard
//!
//! This is the main binary that wires together all layers using
//! dependency injection: config loading, the HTTP collaborator
//! adapters, the session store, and the process-turn use case behind a
//! line-oriented chat loop.

use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use switchboard_application::{ProcessTurnUseCase, RuntimeParams};
use switchboard_domain::{ChannelSession, SessionStore};
use switchboard_infrastructure::{
    ConfigLoader, HttpGenerationGateway, InMemorySessionStore, JsonFileSessionStore,
    OpenMeteoWeatherGateway,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Conversational request router
#[derive(Parser, Debug)]
#[command(name = "switchboard", version, about)]
struct Cli {
    /// Process a single message and exit (chat loop otherwise)
    message: Option<String>,

    /// Explicit config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Session store file (overrides the configured path)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Skip config files, use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Switchboard");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    let timeout = config.runtime.collaborator_timeout();
    let params = RuntimeParams::default().with_collaborator_timeout(timeout);

    // === Dependency Injection ===
    let generation = Arc::new(HttpGenerationGateway::new(&config.generation, timeout)?);
    let weather = Arc::new(OpenMeteoWeatherGateway::new(&config.weather, timeout)?);

    let store: Arc<dyn SessionStore> = match cli.store.or(config.store.path.clone()) {
        Some(path) => Arc::new(JsonFileSessionStore::open(path)?),
        None => Arc::new(InMemorySessionStore::new()),
    };

    let use_case = ProcessTurnUseCase::new(generation, weather, store, &params);

    // The CLI is one calling channel; its identity pointer lives here.
    let mut channel = ChannelSession::new();

    // Single message mode
    if let Some(message) = cli.message {
        let response = use_case.execute(&message, &mut channel).await;
        println!("{}", response);
        return Ok(());
    }

    // Chat loop
    println!("Chatbot is running. Type 'exit' or 'quit' to end the conversation.");

    let stdin = std::io::stdin();
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if matches!(message.to_lowercase().as_str(), "exit" | "quit") {
            println!("Chatbot: Goodbye! Have a great day!");
            break;
        }

        let response = use_case.execute(message, &mut channel).await;
        println!("Chatbot: {}", response);
    }

    Ok(())
}

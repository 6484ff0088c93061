use anyhow::{Context, Result};
use botworks_mcp::client::McpClient;
use botworks_mcp::{api, config};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "botworks-mcp")]
#[command(about = "Toy MCP demo backend and client", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Override log format (pretty, json)
    #[arg(long)]
    log_format: Option<String>,

    /// Override the client base URL
    #[arg(long, env = "BOTWORKS_API_URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the MCP backend server (default)
    Serve,
    /// Probe the backend health endpoint
    Health,
    /// Ping the MCP server
    Ping,
    /// Fetch the static server info
    Info,
    /// List advertised resources
    Resources,
    /// List advertised tools
    Tools,
    /// Call a tool by name
    Call {
        /// Tool name
        #[arg(default_value = "processData")]
        name: String,

        /// Value passed as arguments.input
        #[arg(long)]
        input: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = config::load_config(&cli.config).with_context(|| {
        format!(
            "Failed to load configuration from: {}",
            cli.config.display()
        )
    })?;

    // Apply CLI overrides
    if let Some(log_level) = cli.log_level {
        config.logging.level = log_level;
    }
    if let Some(log_format) = cli.log_format {
        config.logging.format = log_format;
    }
    if let Some(url) = cli.url {
        config.client.base_url = url;
    }

    init_logging(&config.logging)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            print_banner(&config);
            info!("Starting BOTWorks MCP server...");
            api::start_server(config).await?;
        }
        command => {
            let client = McpClient::new(config.client.base_url.clone());
            run_client_command(&client, command).await?;
        }
    }

    Ok(())
}

/// Execute one client call and print its JSON result, the way the original
/// mobile app screen surfaced each button press.
async fn run_client_command(client: &McpClient, command: Command) -> Result<()> {
    let output = match command {
        Command::Serve => unreachable!("handled by the caller"),
        Command::Health => serde_json::to_value(client.health_check().await?)?,
        Command::Ping => serde_json::to_value(client.ping().await?)?,
        Command::Info => serde_json::to_value(client.get_server_info().await?)?,
        Command::Resources => serde_json::to_value(client.list_resources().await?)?,
        Command::Tools => serde_json::to_value(client.list_tools().await?)?,
        Command::Call { name, input } => {
            let arguments = match input {
                Some(input) => json!({"input": input}),
                None => json!({}),
            };
            serde_json::to_value(client.call_tool(&name, arguments).await?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_logging(config: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Default to pretty format
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

fn print_banner(config: &config::AppConfig) {
    let version = env!("CARGO_PKG_VERSION");

    info!("BOTWORKS-MCP v{}", version);
    info!("");
    info!("Server Configuration:");
    info!("  → Address: {}:{}", config.server.host, config.server.port);
    info!("  → Log Level: {}", config.logging.level);
    info!("  → Log Format: {}", config.logging.format);
    info!("");
}

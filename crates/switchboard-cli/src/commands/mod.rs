use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use switchboard_config::{ConfigLoader, LoggingConfig, SwitchboardConfig};
use switchboard_core::{Result, SwitchboardError};
use switchboard_mcp::{HttpMcpClient, McpClient};
use switchboard_runtime::build_registry;

mod chat;

/// Switchboard: route chat messages to skills with an LLM planner
#[derive(Parser)]
#[command(name = "switchboard", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to switchboard.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat in the terminal
    Chat,
    /// Answer a single message with no prior history
    Ask {
        /// The message to answer
        message: String,
        /// Output the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration (API key masked)
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List configured MCP tool and prompt connectors
    Connectors,
}

/// Resolve log level: --verbose > --quiet > --log-level > config
fn resolve_log_level<'a>(
    verbose: bool,
    quiet: bool,
    flag: Option<&'a str>,
    config: &'a LoggingConfig,
) -> &'a str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        flag.unwrap_or(&config.level)
    }
}

/// Config problems found while loading. The loader logs them before the
/// subscriber exists, so they are re-emitted once logging is up.
fn startup_warnings(config: &SwitchboardConfig, config_path: &Path) -> Vec<String> {
    let mut warnings = Vec::new();
    if !config_path.exists() {
        warnings.push(format!(
            "config file not found at {}, using defaults",
            config_path.display()
        ));
    }
    if let Ok(found) = config.validate() {
        warnings.extend(found.iter().map(ToString::to_string));
    }
    warnings
}

/// RUST_LOG wins over everything else.
fn init_tracing(log_level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        "json" => builder.json().with_target(true).init(),
        "compact" => builder.compact().with_target(false).init(),
        _ => builder.with_target(false).init(),
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config_path = config_loader.path().to_path_buf();
        let config = config_loader.into_config();

        let log_level = resolve_log_level(
            self.verbose,
            self.quiet,
            self.log_level.as_deref(),
            &config.logging,
        )
        .to_string();
        init_tracing(&log_level, &config.logging.format);
        for w in startup_warnings(&config, &config_path) {
            warn!("{w}");
        }
        debug!(path = ?config_path, provider = %config.llm.provider, "configuration loaded");

        match self.command {
            Commands::Chat => chat::cmd_chat(&config).await,
            Commands::Ask { message, json } => chat::cmd_ask(&config, &message, json).await,
            Commands::Config { json } => Self::cmd_config(&config, json),
            Commands::Connectors => Self::cmd_connectors(&config),
        }
    }

    fn cmd_config(config: &SwitchboardConfig, json: bool) -> Result<()> {
        let shown = config.redacted();
        if json {
            println!("{}", serde_json::to_string_pretty(&shown)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&shown)
                    .map_err(|e| SwitchboardError::Config(e.to_string()))?
            );
        }
        Ok(())
    }

    fn cmd_connectors(config: &SwitchboardConfig) -> Result<()> {
        let client: std::sync::Arc<dyn McpClient> = std::sync::Arc::new(HttpMcpClient::default());
        let registry = build_registry(&config.mcp, client)?;

        if registry.is_empty() {
            println!("No MCP connectors configured.");
            println!("Add [mcp.tools.<alias>] or [mcp.prompts.<alias>] sections to switchboard.toml.");
            return Ok(());
        }

        println!("{}", console::style("Tools").bold());
        for alias in registry.tool_aliases() {
            if let Some(tool) = registry.tool(alias) {
                println!("  {:<20} {} @ {}", alias, tool.tool_name(), tool.server());
            }
        }
        println!("{}", console::style("Prompts").bold());
        for alias in registry.prompt_aliases() {
            if let Some(prompt) = registry.prompt(alias) {
                println!("  {:<20} {} @ {}", alias, prompt.prompt_name(), prompt.server());
            }
        }
        Ok(())
    }
}

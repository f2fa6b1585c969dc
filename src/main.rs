use std::sync::Arc;

use clap::{Parser, Subcommand};
use covid::client::DiseaseClient;
use covid::commands;
use covid::config::{self, Config};
use covid::data_provider::CovidDataProvider;
use covid::tui;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "covid")]
#[command(
    about = "COVID-19 statistics panel",
    long_about = "COVID-19 statistics panel\n\nIf no command is specified, the program starts in interactive mode."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Use fixture data instead of the live API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display worldwide totals
    Global,
    /// Display the country table
    Countries {
        /// Only the countries of the own list
        #[arg(short, long)]
        own: bool,

        /// Sort alphabetically instead of by the API's order
        #[arg(short, long)]
        sort: bool,
    },
    /// Display current configuration
    Config,
}

fn create_client(cli: &Cli, config: &Config) -> Arc<dyn CovidDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        tracing::info!("Using mock data provider");
        return Arc::new(covid::dev::mock_client::MockClient::new());
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    match DiseaseClient::with_base_url(config.api_url.as_str()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create COVID-19 API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(client: &dyn CovidDataProvider, config: &Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Global => commands::global::run(client, config).await,
        Commands::Countries { own, sort } => {
            let options = commands::countries::CountriesOptions { own, sort };
            commands::countries::run(client, config, options).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Config command doesn't need the network
    if let Some(Commands::Config) = cli.command {
        commands::config::run();
        return;
    }

    let client = create_client(&cli, &config);

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(client, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(client.as_ref(), &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}

// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use babelgate::app_config::{Config, LogLevel};
use babelgate::server::{run_server, AppState};
use babelgate::translation::dispatch::ProviderBackend;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for babelgate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// babelgate - LLM translation gateway
///
/// An HTTP service that routes text to LLM providers (Anthropic, OpenAI,
/// Google) for translation, optionally post-edits the result with a second
/// model, and exports translations as DOCX.
#[derive(Parser, Debug)]
#[command(name = "babelgate")]
#[command(version = "1.0.0")]
#[command(about = "LLM translation gateway")]
#[command(long_about = "babelgate serves a JSON API for LLM-backed translation.

EXAMPLES:
    babelgate                              # Serve using conf.json defaults
    babelgate --port 9090                  # Override the listen port
    babelgate --log-level debug            # Verbose logging
    babelgate completions bash > bg.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't exist,
    a default one will be created automatically.

API:
    POST /translate   Translate text (provider keys travel in the request)
    POST /docx        Package translated HTML as a DOCX attachment
    GET  /models      Model catalog, domains, and language pairs
    GET  /health      Liveness probe")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    //
    // The handler itself accepts everything; filtering happens through
    // log::set_max_level so the level can change after config load.
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} [{}] {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "babelgate", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::from_file_or_default(&cli.config_path)?;

    // CLI flags override the config file
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    info!("Loaded configuration from {}", cli.config_path);

    let backend = Arc::new(ProviderBackend::new(config.translation.max_output_tokens));
    let state = AppState::new(config, backend);

    run_server(state).await
}

// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use derdiedas::app_config::{self, Config, TranslationProvider};
use derdiedas::app_controller::{read_input, write_output, Controller};
use derdiedas::gender::theme;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Google,
    Ollama,
    Mock,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Google => TranslationProvider::Google,
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
            CliTranslationProvider::Mock => TranslationProvider::Mock,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

/// Where the German text comes from
#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Input text file, or '-' to read stdin
    #[arg(value_name = "INPUT", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Inline German text
    #[arg(long)]
    text: Option<String>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Color articles and nouns by grammatical gender (HTML fragment)
    Colorize(InputArgs),

    /// Print the token analysis of every line as JSON
    Analyze(InputArgs),

    /// Translate the text, keeping speaker names untouched
    Translate {
        #[command(flatten)]
        input: InputArgs,

        /// Target language code (e.g., 'en', 'es', 'fr')
        #[arg(short, long)]
        target_language: Option<String>,

        /// Translate the whole text in one call instead of line by line
        #[arg(long)]
        plain: bool,
    },

    /// Render a full HTML page with colorized text and all translations
    Render(InputArgs),

    /// Print the gender color legend
    Legend,

    /// Generate shell completions for derdiedas
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// DerDieDas - German gender colorizer and dialog translator
///
/// Colors German articles and nouns by grammatical gender and translates
/// dialogs while keeping speaker names intact.
#[derive(Parser, Debug)]
#[command(name = "derdiedas")]
#[command(version)]
#[command(about = "German gender colorizer and dialog translator")]
#[command(long_about = "DerDieDas colors German articles and nouns by grammatical gender and translates dialogs line by line.

EXAMPLES:
    derdiedas colorize dialog.txt                  # Gender-colored HTML fragment
    derdiedas colorize --text 'Der Hund bellt.'    # Colorize inline text
    derdiedas analyze dialog.txt                   # Token analysis as JSON
    derdiedas translate -t en dialog.txt           # Translate, keeping speaker names
    derdiedas -p ollama translate -t es -          # Translate stdin with Ollama
    derdiedas render dialog.txt -o page.html       # Full page with all target languages
    derdiedas completions bash > derdiedas.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

SUPPORTED PROVIDERS:
    google - Google Translate web endpoint (default)
    ollama - Local Ollama server (default: llama3.2:3b)
    mock   - Offline provider that echoes the input")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Translation provider to use
    #[arg(short, long, global = true, value_enum)]
    provider: Option<CliTranslationProvider>,
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
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
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
    // Info until the config is loaded; only the max level changes afterwards
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "derdiedas", &mut std::io::stdout());
            Ok(())
        }
        Commands::Legend => {
            let config = load_config(&cli.config, cli.log_level, cli.provider)?;
            theme::ensure_installed(&config.theme);
            for entry in theme::color_legend() {
                println!("{:<10} {}", entry.label, entry.color);
            }
            Ok(())
        }
        command => {
            let config = load_config(&cli.config, cli.log_level, cli.provider)?;
            run(command, config).await
        }
    }
}

/// Load the config, apply CLI overrides and validate it
fn load_config(path: &Path, log_level: Option<CliLogLevel>, provider: Option<CliTranslationProvider>) -> Result<Config> {
    // A log level given on the command line applies before the config is read
    if let Some(level) = &log_level {
        log::set_max_level(level_filter(&level.clone().into()));
    }

    let mut config = Config::load_or_create(path)?;

    if let Some(provider) = provider {
        config.translation.provider = provider.into();
    }
    if let Some(level) = log_level {
        config.log_level = level.into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(level_filter(&config.log_level));
    debug!("Using provider {}", config.translation.provider.display_name());

    Ok(config)
}

async fn run(command: Commands, config: Config) -> Result<()> {
    let controller = Controller::with_config(config)?;

    match command {
        Commands::Colorize(input) => {
            let text = read_input(input.input.as_deref(), input.text.as_deref()).await?;
            write_output(input.output.as_deref(), &controller.colorize(&text)).await
        }
        Commands::Analyze(input) => {
            let text = read_input(input.input.as_deref(), input.text.as_deref()).await?;
            let json = serde_json::to_string_pretty(&controller.analyze(&text))
                .context("Failed to serialize analysis")?;
            write_output(input.output.as_deref(), &json).await
        }
        Commands::Translate { input, target_language, plain } => {
            let text = read_input(input.input.as_deref(), input.text.as_deref()).await?;
            let target = target_language
                .or_else(|| controller.config().target_languages.first().cloned())
                .context("No target language given")?;
            info!("Translating to {}", target);
            let translated = controller.translate(&text, &target, plain).await;
            write_output(input.output.as_deref(), &translated).await
        }
        Commands::Render(input) => {
            let text = read_input(input.input.as_deref(), input.text.as_deref()).await?;
            let page = controller.render_page(&text).await;
            write_output(input.output.as_deref(), &page).await
        }
        Commands::Legend | Commands::Completions { .. } => Ok(()),
    }
}

// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use lyralign::app_config::{self, Config};
use lyralign::file_utils::FileManager;
use lyralign::lyrics_processor::Document;
use lyralign::validation;

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a lyrics file and report what loaded
    Inspect(InputArgs),

    /// Re-serialize a lyrics file in canonical form
    Fmt(FmtArgs),

    /// Check recorded timings for inconsistencies
    Check(InputArgs),

    /// Generate shell completions for lyralign
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Lyrics file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FmtArgs {
    /// Lyrics file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Write the canonical text to the `.elrc` path next to each input
    /// instead of stdout
    #[arg(short, long)]
    write: bool,

    /// Overwrite existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

/// Lyralign - word-level lyrics alignment tool
///
/// Parses word-and-line timed lyrics (extended LRC), reports on and
/// canonicalizes them, and hosts the alignment core used to time words
/// against audio playback.
#[derive(Parser, Debug)]
#[command(name = "lyralign")]
#[command(version = "1.0.0")]
#[command(about = "Word-level lyrics alignment tool")]
#[command(long_about = "Lyralign parses word-and-line timed lyrics and keeps them in canonical form.

EXAMPLES:
    lyralign inspect song.lrc              # Show what parses from a file
    lyralign fmt song.lrc                  # Print the canonical form
    lyralign fmt -w song.lrc               # Write song.elrc next to the source
    lyralign check song.elrc               # Report timing inconsistencies
    lyralign inspect /lyrics/              # Process a whole directory
    lyralign completions bash > lyralign.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
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
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::color_for_level(record.level()),
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

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "lyralign", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli.config_path, cli.log_level.as_ref())?;
    log::set_max_level(level_filter(&config.log_level));

    match &cli.command {
        Commands::Inspect(args) => run_inspect(&args.input_path),
        Commands::Fmt(args) => run_fmt(args),
        Commands::Check(args) => run_check(&args.input_path),
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load the configuration, creating a default file when missing, and
/// apply command line overrides
fn load_config(config_path: &str, cli_level: Option<&CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    if let Some(level) = cli_level {
        config.log_level = level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

/// Resolve the input path to the lyrics files it names
fn collect_inputs(input_path: &Path) -> Result<Vec<PathBuf>> {
    if input_path.is_file() {
        Ok(vec![input_path.to_path_buf()])
    } else if input_path.is_dir() {
        let files = FileManager::find_lyrics_files(input_path)?;
        if files.is_empty() {
            warn!("No lyrics files found under {:?}", input_path);
        }
        Ok(files)
    } else {
        Err(anyhow!("Input path does not exist: {:?}", input_path))
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let text = FileManager::read_to_string(path)?;
    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::parse(&text, &source_name))
}

fn run_inspect(input_path: &Path) -> Result<()> {
    for path in collect_inputs(input_path)? {
        let document = load_document(&path)?;
        print!("{}", document);
        for (idx, line) in document.lines.iter().enumerate() {
            let timed = line.words.iter().filter(|w| w.is_fully_timed()).count();
            let start = line
                .line_start
                .map(|ts| ts.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:>4}  [{}]  {} words ({} timed)",
                idx,
                start,
                line.word_count(),
                timed
            );
        }
    }
    Ok(())
}

fn run_fmt(args: &FmtArgs) -> Result<()> {
    for path in collect_inputs(&args.input_path)? {
        let document = load_document(&path)?;
        let canonical = document.to_text();

        if args.write {
            let output = FileManager::elrc_output_path(&path);
            if output.exists() && !args.force_overwrite {
                warn!("Output file already exists: {:?}. Use -f to force overwrite.", output);
                continue;
            }
            FileManager::write_to_file(&output, &canonical)?;
            info!("Success: {:?}", output);
        } else {
            println!("{}", canonical);
        }
    }
    Ok(())
}

fn run_check(input_path: &Path) -> Result<()> {
    let mut total_issues = 0;
    for path in collect_inputs(input_path)? {
        let document = load_document(&path)?;
        let results = validation::validate_document(&document);
        let issues = validation::issue_count(&results);
        total_issues += issues;

        if issues == 0 {
            info!("{}: timings consistent", document.source_name);
            continue;
        }
        warn!("{}: {} timing issue(s)", document.source_name, issues);
        for result in results.iter().filter(|r| !r.passed) {
            for issue in &result.issues {
                println!("  line {}: {}", result.line_index, issue);
            }
        }
    }

    if total_issues > 0 {
        std::process::exit(1);
    }
    Ok(())
}

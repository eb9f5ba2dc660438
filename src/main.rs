// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use cuesplit::app_config::{self, Config};
use cuesplit::app_controller::{Controller, FileOutcome};
use cuesplit::retiming::BoundaryPolicy;

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

/// CLI Wrapper for BoundaryPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliBoundaryPolicy {
    ExtendLast,
    Truncate,
}

impl From<CliBoundaryPolicy> for BoundaryPolicy {
    fn from(cli_policy: CliBoundaryPolicy) -> Self {
        match cli_policy {
            CliBoundaryPolicy::ExtendLast => BoundaryPolicy::ExtendLast,
            CliBoundaryPolicy::Truncate => BoundaryPolicy::Truncate,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Turn a transcript JSON file into sentence-level SRT cues
    Segment(SegmentArgs),

    /// Re-split an SRT file, or every SRT file under a directory
    #[command(alias = "resplit")]
    Split(SplitArgs),

    /// Generate shell completions for cuesplit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct SegmentArgs {
    /// Transcript JSON (`{"segments": [{"start", "end", "text"}]}`, seconds)
    #[arg(value_name = "TRANSCRIPT_JSON")]
    input_path: PathBuf,

    /// Output SRT path (defaults to the transcript path with an .srt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Language tag used with --split (e.g. 'JP', 'en', 'zho')
    #[arg(short, long)]
    language: Option<String>,

    /// Re-split the segmented cues to the language's line budget
    #[arg(long)]
    split: bool,
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Input SRT file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Language tag (detected from a `_XX` file name tag when omitted)
    #[arg(short, long)]
    language: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Override how leftover milliseconds are handled when splitting a cue
    #[arg(long, value_enum)]
    boundary_policy: Option<CliBoundaryPolicy>,
}

/// cuesplit - subtitle segmentation and timing
///
/// Turns speech transcripts into sentence-level subtitles and re-splits
/// subtitle cues so every line fits its language's display budget.
#[derive(Parser, Debug)]
#[command(name = "cuesplit")]
#[command(version)]
#[command(about = "Subtitle segmentation and line re-splitting tool")]
#[command(long_about = "cuesplit segments transcripts into subtitle cues and re-splits cues whose lines are too long.

EXAMPLES:
    cuesplit segment talk.json                  # Transcript to talk.srt
    cuesplit segment talk.json --split -l JP    # Segment and re-split for Japanese
    cuesplit split promo_JP.srt                 # Writes promo_JP_split.srt
    cuesplit split -l en -f subtitles/          # Whole directory, overwrite outputs
    cuesplit completions bash > cuesplit.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
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

    // @returns: Label and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
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
            let (label, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, label, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logger accepts everything; the effective level is set via set_max_level below
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "cuesplit", &mut std::io::stdout());
        return Ok(());
    }

    // Apply the command line level before loading config so config warnings respect it
    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;
    match &cli.log_level {
        Some(level) => config.log_level = level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    match cli.command {
        Commands::Segment(args) => run_segment(config, args),
        Commands::Split(args) => run_split(config, args).await,
        Commands::Completions { .. } => Ok(()),
    }
}

fn run_segment(config: Config, args: SegmentArgs) -> Result<()> {
    if !args.input_path.is_file() {
        return Err(anyhow!("Input file does not exist: {:?}", args.input_path));
    }

    let controller = Controller::with_config(config)?;
    controller.segment_transcript_file(&args.input_path, args.output, args.language.as_deref(), args.split)?;

    Ok(())
}

async fn run_split(mut config: Config, args: SplitArgs) -> Result<()> {
    if let Some(policy) = args.boundary_policy {
        config.boundary_policy = policy.into();
    }

    let controller = Controller::with_config(config)?;

    if args.input_path.is_file() {
        match controller.run(args.input_path, args.language, args.force_overwrite).await? {
            FileOutcome::Written { output, .. } => info!("Success: {:?}", output),
            FileOutcome::Skipped(reason) => info!("Nothing to do: {}", reason),
        }
    } else if args.input_path.is_dir() {
        let summary = controller.run_folder(args.input_path, args.language, args.force_overwrite).await?;
        if summary.failed > 0 {
            return Err(anyhow!("{} file(s) failed to process", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", args.input_path));
    }

    Ok(())
}

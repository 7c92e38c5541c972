use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use punctuation_engine::config::LoggingConfig;
use punctuation_engine::{
    analyze_with_config, load_config, Config, InputFormat, Pipeline, PunctuationProcessor,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

mod utils;

#[derive(Parser)]
#[command(name = "ukr-punctuation")]
#[command(about = "Restore punctuation and capitalization in Ukrainian transcriptions", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/ukr-punctuation/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Punctuate text from the argument, a file or stdin")]
    Process {
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    #[command(about = "Show the category and rule chosen for each sentence")]
    Explain {
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
    #[command(about = "Show which word lists a word or phrase belongs to")]
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },
    #[command(about = "Print the effective configuration")]
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Plain,
    VoskJson,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => InputFormat::Plain,
            FormatArg::VoskJson => InputFormat::VoskJson,
        }
    }
}

type LogFilterHandle = reload::Handle<EnvFilter, Registry>;

/// Start logging before the config is read so problems loading it are
/// reported. Returns a handle for applying the configured level, or `None`
/// when `RUST_LOG` already decides the filter.
fn init_logging() -> Option<LogFilterHandle> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let env_set = from_env.is_some();
    let filter = from_env.unwrap_or_else(|| EnvFilter::new(LoggingConfig::default().level));

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .ok()?;

    (!env_set).then_some(handle)
}

fn apply_log_level(handle: Option<LogFilterHandle>, level: &str) {
    let Some(handle) = handle else {
        return;
    };
    if let Err(e) = handle.reload(EnvFilter::new(level)) {
        warn!("Failed to apply log level '{}': {}", level, e);
    }
}

fn read_transcription(
    config: &Config,
    text: Option<&str>,
    file: Option<&std::path::Path>,
    format: Option<FormatArg>,
) -> Result<String> {
    let format = format.map(InputFormat::from).unwrap_or(config.input.format);
    let raw = utils::read_input(text, file)?;
    utils::extract_transcription(&raw, format)
}

/// Run the configured pipeline, or `None` when there is nothing to punctuate.
fn punctuate(config: &Config, transcription: &str) -> Result<Option<String>> {
    // Absent recognizer output never reaches the engine
    if transcription.trim().is_empty() {
        info!("Empty transcription, nothing to punctuate");
        return Ok(None);
    }

    let pipeline = Pipeline::from_config(&config.pipeline);
    pipeline.process(transcription).map(Some)
}

fn explain(config: &Config, transcription: &str, json: bool) -> Result<()> {
    if !config.pipeline.punctuation {
        warn!("Punctuation is disabled in the configuration, nothing to explain");
    }

    let reports = analyze_with_config(&config.pipeline, transcription)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!(
            "{:<12} {:<26} {}",
            report.category.as_str(),
            report.rule.unwrap_or("-"),
            report.sentence
        );
    }
    Ok(())
}

fn lookup(words: &[String]) {
    let query = words.join(" ");
    let engine = PunctuationProcessor::new();
    let classes = engine.lexicon().classes_of(&query);

    if classes.is_empty() {
        println!("'{}' is not in any word list", query);
        return;
    }
    for class in classes {
        println!("{}", class);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = init_logging();
    let (config, source) = load_config(cli.config.as_deref())?;
    apply_log_level(log_filter, &config.logging.level);

    match cli.command {
        Commands::Process { text, file, format } => {
            let transcription = read_transcription(&config, text.as_deref(), file.as_deref(), format)?;
            if let Some(punctuated) = punctuate(&config, &transcription)? {
                println!("{}", punctuated);
            }
        }
        Commands::Explain { text, file, format, json } => {
            let transcription = read_transcription(&config, text.as_deref(), file.as_deref(), format)?;
            explain(&config, &transcription, json)?;
        }
        Commands::Lookup { words } => lookup(&words),
        Commands::Config => {
            match source {
                Some(path) => println!("# Loaded from {}", path.display()),
                None => println!("# Built-in defaults"),
            }
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}

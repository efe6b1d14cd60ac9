// Code Intel - command-line entry point
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use code_intel::{build_chain, logging, AnalysisSession, ConfigService, SettingsUpdate};

#[derive(Parser)]
#[command(
    name = "code-intel",
    version,
    about = "Explain, audit, or refactor code with a fallback chain of Gemini models"
)]
struct Cli {
    /// Config file (defaults to ~/.code-intel/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze source code read from a file or stdin
    Analyze {
        /// explain, find-issues, or refactor; anything else explains
        #[arg(long, short, default_value = "explain")]
        mode: String,
        /// Source file; stdin when omitted
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List candidate models in the order they are tried
    Models,
    /// Show or update the configuration
    Config {
        #[arg(long)]
        api_key: Option<String>,
        /// Candidate models, comma separated, highest priority first
        #[arg(long = "models", value_delimiter = ',')]
        models: Option<Vec<String>>,
        #[arg(long)]
        timeout_ms: Option<u64>,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        proxy: Option<String>,
        /// Restore defaults before applying other flags
        #[arg(long)]
        reset: bool,
    },
}

fn open_config(path: Option<PathBuf>) -> Result<ConfigService> {
    let service = match path {
        Some(path) => ConfigService::open(path),
        None => ConfigService::new(),
    };
    service.context("load configuration")
}

fn read_source(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("read stdin")?;
            Ok(source)
        }
    }
}

async fn analyze(
    service: &ConfigService,
    mode: &str,
    file: Option<PathBuf>,
    json: bool,
) -> Result<ExitCode> {
    let source = read_source(file)?;
    let chain = build_chain(&service.effective_config())?;
    let session = AnalysisSession::new(chain);

    let Some(result) = session.analyze(&source, mode).await else {
        eprintln!("Nothing to analyze: input is empty.");
        return Ok(ExitCode::SUCCESS);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("# {}\n\n{}", result.title, result.content);
        if let Some(model) = &result.source_model {
            println!("\n---\nModel: {}", model);
        }
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn configure(mut service: ConfigService, reset: bool, update: SettingsUpdate) -> Result<()> {
    if reset {
        service.reset()?;
    }
    service.update_config(update)?;
    let config = service.effective_config();
    println!("{}", serde_json::to_string_pretty(&config.redacted())?);
    eprintln!("config: {}", service.path().display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logging::init();
    let cli = Cli::parse();
    let service = open_config(cli.config)?;

    match cli.command {
        Command::Analyze { mode, file, json } => analyze(&service, &mode, file, json).await,
        Command::Models => {
            for (idx, model) in service.effective_config().models.iter().enumerate() {
                println!("{:>2}. {}", idx + 1, model);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Config {
            api_key,
            models,
            timeout_ms,
            language,
            proxy,
            reset,
        } => {
            let update = SettingsUpdate {
                api_key,
                models,
                attempt_timeout_ms: timeout_ms,
                response_language: language,
                proxy,
                ..Default::default()
            };
            configure(service, reset, update)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

//! CLI entrypoint for pdftext.

use std::path::PathBuf;
use clap::Parser;
use anyhow::Result;
use pdftext_core::{error_message, ExtractionEvent, Pipeline, PdfTextConfig, StrategyKind};

#[derive(Parser)]
#[command(name = "pdftext")]
#[command(about = "pdftext: extract readable text from a PDF file", long_about = None)]
struct Cli {
    /// PDF file to read (defaults to the configured path)
    path: Option<String>,
    /// Strategy to try (pdf-extract, lopdf, byte-scan); repeat to set the order
    #[arg(long = "strategy", value_name = "NAME")]
    strategies: Vec<StrategyKind>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Config file to use instead of the standard locations
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print a default config file and exit
    #[arg(long)]
    init_config: bool,
}

/// Notice printed when a preferred library is missing from this build.
fn notice(event: &ExtractionEvent) -> Option<String> {
    match event {
        ExtractionEvent::StrategyUnavailable(kind, Some(next)) if *next != StrategyKind::ByteScan => {
            Some(format!("{} not available, trying {}...", kind, next))
        }
        ExtractionEvent::StrategyUnavailable(kind, _) => Some(format!("{} not available...", kind)),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init_config {
        print!("{}", PdfTextConfig::generate_default_config());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => PdfTextConfig::load_from(path)?,
        None => PdfTextConfig::load()?,
    };
    let path = match &cli.path {
        Some(p) => PathBuf::from(shellexpand::tilde(p).to_string()),
        None => config.extract.default_path.clone(),
    };
    let pipeline = if cli.strategies.is_empty() {
        Pipeline::from_config(&config)
    } else {
        Pipeline::from_kinds(&cli.strategies)
    };
    log::debug!("extracting {} with {:?}", path.display(), pipeline.kinds());

    let json = cli.json;
    let result = pipeline
        .run(path, move |event| {
            // Keep stdout valid JSON in --json mode
            if !json {
                if let Some(line) = notice(&event) {
                    println!("{}", line);
                }
            }
        })
        .await;

    match (result, json) {
        (Ok(extraction), false) => println!("{}", extraction.text),
        (Ok(extraction), true) => println!("{}", serde_json::to_string_pretty(&extraction)?),
        (Err(e), false) => println!("{}", error_message(&e)),
        (Err(e), true) => {
            let body = serde_json::json!({ "error": error_message(&e) });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }
    Ok(())
}

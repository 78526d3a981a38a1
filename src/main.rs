use clap::Parser;
use tracing_subscriber::EnvFilter;
use worklist_ai_rust::{cli, config, engine, error, extractor, payload};

use cli::{Cli, Commands};
use config::Config;
use engine::GeminiEngine;
use error::{Result, WorklistAiError};
use payload::ImagePayload;
use worklist_ai_common::ReferenceEntry;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Extract {
            image,
            catalog,
            output,
            model,
        } => {
            println!("🩻 worklist-ai - worklist extraction\n");

            // 1. Load the reference catalog
            println!("[1/3] Loading reference catalog...");
            let entries = load_catalog(&catalog)?;
            println!("✔ {} catalog entries\n", entries.len());

            // 2. Load and validate the worklist image
            println!("[2/3] Loading worklist image...");
            let payload = ImagePayload::from_file(&image)?;
            println!("✔ {} ({})\n", image.display(), payload.mime_type());

            // 3. Extract and match
            println!("[3/3] Extracting procedures...");
            let mut config = config;
            if let Some(model) = model {
                config.model = model;
            }
            let engine = GeminiEngine::from_config(&config)?;
            let studies = extractor::extract_and_match(&engine, payload, &entries).await;
            println!("✔ {} procedure(s) identified\n", studies.len());

            let json = serde_json::to_string_pretty(&studies)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ Results written to {}", path.display());
                }
                None => println!("{}", json),
            }

            println!("\n✅ Done");
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("Configuration:");
                println!("  Model: {}", config.model);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!(
                    "  API key: {}",
                    if config.api_key.is_some() {
                        "set"
                    } else {
                        "not set"
                    }
                );
            }
        }
    }

    Ok(())
}

/// Load the reference catalog file: a JSON array of `{name, cpt}` entries.
/// The catalog is shape-checked only; names and codes are passed through
/// verbatim, duplicates included.
fn load_catalog(path: &std::path::Path) -> Result<Vec<ReferenceEntry>> {
    if !path.exists() {
        return Err(WorklistAiError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| WorklistAiError::InvalidCatalog(format!("JSON parse error: {}", e)))
}

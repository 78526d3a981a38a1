use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "worklist-ai")]
#[command(about = "Radiology worklist OCR extraction and CPT catalog matching", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose diagnostic logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract procedures from a worklist image and match them to a catalog
    Extract {
        /// Worklist image file (photo or scan)
        #[arg(required = true)]
        image: PathBuf,

        /// Reference catalog JSON file: an array of {"name", "cpt"} entries
        #[arg(short, long)]
        catalog: PathBuf,

        /// Output JSON file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the configured engine model
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Show or edit configuration
    Config {
        /// Set the engine API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

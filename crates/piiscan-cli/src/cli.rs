use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "piiscan")]
#[command(about = "Detect and mask PII in CSV records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: nearest piiscan.toml, then the global config)
    #[arg(long, global = true, env = "PIISCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a CSV file and write the redacted report
    Scan {
        /// Input CSV with a record id column and a JSON data column
        input: PathBuf,

        /// Report path (default from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify and redact a single JSON record
    Check {
        /// JSON object, e.g. '{"phone": "9876543210"}'
        record: String,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Write a default piiscan.toml in the current directory
    Init,

    /// Show the resolved configuration
    Config,
}

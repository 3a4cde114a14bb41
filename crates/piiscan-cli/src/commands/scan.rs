use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use piiscan_config::Config;
use piiscan_engine::Scanner;

pub fn handle(config: &Config, input: &Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| config.output.path.clone());
    let scanner = Scanner::new(config.input.clone());

    let summary = scanner
        .scan_file(input, &output)
        .with_context(|| format!("Failed to scan {}", input.display()))?;

    println!("✓ Processing complete");
    println!("  Records: {}", summary.records);
    println!("  With PII: {}", summary.pii_records);
    if summary.invalid_records > 0 {
        println!("  Invalid JSON (scanned as empty): {}", summary.invalid_records);
    }
    println!("  Output saved to {}", output.display());

    Ok(())
}

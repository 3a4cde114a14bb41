//! Check command - scan one record given on the command line

use anyhow::{Context, Result};
use piiscan_core::scan_record;
use piiscan_engine::decode_record;

pub fn handle(record: &str, format: &str) -> Result<()> {
    let record = decode_record(Some(record))
        .map_err(anyhow::Error::msg)
        .context("Record must be a JSON object")?;

    let outcome = scan_record(&record);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        _ => {
            println!("PII: {}", if outcome.is_pii { "yes" } else { "no" });

            let flagged: Vec<_> = outcome.flags.flagged().map(|k| k.as_str()).collect();
            if !flagged.is_empty() {
                println!("Flagged: {}", flagged.join(", "));
            }

            println!("{}", serde_json::to_string_pretty(&outcome.redacted)?);
        }
    }

    Ok(())
}

//! CSV scan driver
//!
//! Reads rows carrying a JSON blob per record, runs each through the
//! classifier and redactor, and writes one report row per input row.

pub mod error;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use piiscan_config::InputConfig;
use piiscan_core::{Record, scan_record};
use serde::{Serialize, Serializer};
use serde_json::Value;

pub use error::{EngineError, Result};

/// Header of the report file
pub const REPORT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// One line of the output report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub record_id: String,
    pub redacted_data_json: String,
    #[serde(serialize_with = "title_case_bool")]
    pub is_pii: bool,
}

fn title_case_bool<S: Serializer>(
    value: &bool,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

/// Counters reported after a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub records: usize,
    pub pii_records: usize,
    /// Rows whose blob could not be decoded and were scanned as empty
    pub invalid_records: usize,
}

/// Column positions resolved from the input header
struct Columns {
    id: usize,
    /// Present data columns in preference order
    data: Vec<usize>,
}

impl Columns {
    /// First non-empty data cell of a row
    fn data_cell<'r>(&self, row: &'r csv::StringRecord) -> Option<&'r str> {
        self.data
            .iter()
            .filter_map(|&idx| row.get(idx))
            .find(|cell| !cell.trim().is_empty())
    }
}

pub struct Scanner {
    input: InputConfig,
}

impl Scanner {
    pub fn new(input: InputConfig) -> Self {
        Self { input }
    }

    /// Scan `input_path` and write the report to `output_path`
    pub fn scan_file(&self, input_path: &Path, output_path: &Path) -> Result<ScanSummary> {
        let input = File::open(input_path)?;
        let output = File::create(output_path)?;
        tracing::info!(
            "Scanning {} -> {}",
            input_path.display(),
            output_path.display()
        );
        self.scan(input, output)
    }

    /// Scan CSV from `reader`, writing the report CSV to `writer`
    pub fn scan<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<ScanSummary> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let columns = self.resolve_columns(reader.headers()?)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(REPORT_HEADER)?;

        let mut summary = ScanSummary::default();
        for row in reader.records() {
            let row = row?;
            let record_id = row.get(columns.id).unwrap_or_default();

            let record = match decode_record(columns.data_cell(&row)) {
                Ok(record) => record,
                Err(reason) => {
                    tracing::warn!("Invalid JSON for record_id {}: {}", record_id, reason);
                    summary.invalid_records += 1;
                    Record::new()
                }
            };

            let report = self.process(record_id, &record);
            summary.records += 1;
            if report.is_pii {
                summary.pii_records += 1;
            }
            writer.serialize(report)?;
        }

        writer.flush()?;
        tracing::info!(
            "Scanned {} records, {} with PII, {} invalid",
            summary.records,
            summary.pii_records,
            summary.invalid_records
        );
        Ok(summary)
    }

    /// Build the report row for one decoded record
    pub fn process(&self, record_id: &str, record: &Record) -> ReportRow {
        let outcome = scan_record(record);

        if outcome.is_pii {
            let fields: Vec<_> = outcome.flags.flagged().map(|k| k.as_str()).collect();
            tracing::debug!("record {} flagged: {}", record_id, fields.join(", "));
        }

        ReportRow {
            record_id: record_id.to_string(),
            redacted_data_json: Value::Object(outcome.redacted).to_string(),
            is_pii: outcome.is_pii,
        }
    }

    fn resolve_columns(&self, headers: &csv::StringRecord) -> Result<Columns> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let id = position(self.input.id_column.as_str())
            .ok_or_else(|| EngineError::MissingColumn(self.input.id_column.clone()))?;
        let data: Vec<usize> = self
            .input
            .data_columns
            .iter()
            .filter_map(|name| position(name.as_str()))
            .collect();
        if data.is_empty() {
            return Err(EngineError::MissingColumn(
                self.input.data_columns.join(" | "),
            ));
        }

        Ok(Columns { id, data })
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

/// Decode a JSON blob into a record.
///
/// The error is a human-readable reason; callers substitute an empty record.
pub fn decode_record(raw: Option<&str>) -> std::result::Result<Record, String> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err("empty data cell".to_string()),
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(_) => Err("not a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

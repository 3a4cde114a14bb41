//! PII detection and masking for structured records
//!
//! This crate contains:
//! - The recognized field set and its detection patterns
//! - The classifier (standalone and combinatorial rules)
//! - The redactor (per-field masking)
//!
//! Everything here is pure: no I/O, no configuration, no shared mutable state.

pub mod classifier;
pub mod field;
pub mod record;
pub mod redactor;

use serde::Serialize;

pub use classifier::{FlagSet, classify};
pub use field::{Detection, FieldKind};
pub use record::Record;
pub use redactor::{REDACTED_MARKER, mask, redact};

/// Result of scanning a single record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanOutcome {
    pub redacted: Record,
    pub flags: FlagSet,
    pub is_pii: bool,
}

/// Classify then redact one record
pub fn scan_record(record: &Record) -> ScanOutcome {
    let flags = classify(record);
    ScanOutcome {
        redacted: redact(record, &flags),
        is_pii: flags.any(),
        flags,
    }
}

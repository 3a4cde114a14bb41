//! PII classification
//!
//! Standalone fields are flagged on their own pattern. Combinatorial fields
//! are only flagged when at least two of them are eligible in the same record.

use std::collections::BTreeSet;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::{Detection, FieldKind};
use crate::record::{Record, field_text, is_truthy};

/// Minimum number of eligible combinatorial fields before any is flagged
pub const COMBINATORIAL_THRESHOLD: usize = 2;

/// Per-field PII flags for one record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: [bool; FieldKind::COUNT],
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: FieldKind) -> bool {
        self.flags[kind as usize]
    }

    pub fn set(&mut self, kind: FieldKind, flagged: bool) {
        self.flags[kind as usize] = flagged;
    }

    /// Flag for a record key; unrecognized keys are never flagged
    pub fn is_flagged(&self, key: &str) -> bool {
        FieldKind::from_key(key).is_some_and(|kind| self.get(kind))
    }

    /// True if any field is flagged
    pub fn any(&self) -> bool {
        self.flags.iter().any(|&f| f)
    }

    /// Flagged fields in declaration order
    pub fn flagged(&self) -> impl Iterator<Item = FieldKind> + '_ {
        FieldKind::ALL.into_iter().filter(|&kind| self.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, bool)> + '_ {
        FieldKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

impl Serialize for FlagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FieldKind::COUNT))?;
        for (kind, flagged) in self.iter() {
            map.serialize_entry(kind.as_str(), &flagged)?;
        }
        map.end()
    }
}

/// Decide, for every recognized field, whether it holds PII
pub fn classify(record: &Record) -> FlagSet {
    let mut flags = FlagSet::new();

    for kind in FieldKind::ALL {
        if kind.detection() == Detection::Standalone && is_eligible(record, kind) {
            flags.set(kind, true);
        }
    }

    for kind in combinatorial_hits(&eligible_combinatorial(record)) {
        flags.set(kind, true);
    }

    flags
}

fn is_eligible(record: &Record, kind: FieldKind) -> bool {
    if kind.pattern().is_none() && !record.get(kind.as_str()).is_some_and(is_truthy) {
        return false;
    }
    field_text(record, kind).is_some_and(|text| kind.matches(&text))
}

/// Combinatorial fields present in the record that pass their own rule
pub fn eligible_combinatorial(record: &Record) -> BTreeSet<FieldKind> {
    FieldKind::ALL
        .into_iter()
        .filter(|kind| kind.detection() == Detection::Combinatorial)
        .filter(|&kind| is_eligible(record, kind))
        .collect()
}

/// Apply the two-or-more rule to an eligibility set
pub fn combinatorial_hits(eligible: &BTreeSet<FieldKind>) -> BTreeSet<FieldKind> {
    if eligible.len() >= COMBINATORIAL_THRESHOLD {
        eligible.clone()
    } else {
        BTreeSet::new()
    }
}

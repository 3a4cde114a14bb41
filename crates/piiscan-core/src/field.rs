//! The fixed set of fields the scanner understands

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[6-9]\d{9}\b").unwrap());

// 12 digits, optionally grouped 4-4-4 by single spaces
static AADHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4} ?\d{4} ?\d{4}\b").unwrap());

// Series letter excludes Q, X and Z
static PASSPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[A-PR-WY][1-9]\d{6}\b").unwrap());

static UPI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w.\-]{2,}@[a-zA-Z]{2,}\b").unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static IPV4_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").unwrap());

/// How a field becomes PII
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Identifying on its own
    Standalone,
    /// Identifying only alongside another combinatorial field
    Combinatorial,
}

/// A recognized record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Phone,
    Aadhar,
    Passport,
    UpiId,
    Name,
    Email,
    Address,
    IpAddress,
    DeviceId,
}

impl FieldKind {
    pub const COUNT: usize = 9;

    pub const ALL: [FieldKind; Self::COUNT] = [
        FieldKind::Phone,
        FieldKind::Aadhar,
        FieldKind::Passport,
        FieldKind::UpiId,
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Address,
        FieldKind::IpAddress,
        FieldKind::DeviceId,
    ];

    /// Key used for this field in a record
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Phone => "phone",
            FieldKind::Aadhar => "aadhar",
            FieldKind::Passport => "passport",
            FieldKind::UpiId => "upi_id",
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Address => "address",
            FieldKind::IpAddress => "ip_address",
            FieldKind::DeviceId => "device_id",
        }
    }

    /// Look up a field by its record key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }

    pub fn detection(self) -> Detection {
        match self {
            FieldKind::Phone | FieldKind::Aadhar | FieldKind::Passport | FieldKind::UpiId => {
                Detection::Standalone
            }
            FieldKind::Name
            | FieldKind::Email
            | FieldKind::Address
            | FieldKind::IpAddress
            | FieldKind::DeviceId => Detection::Combinatorial,
        }
    }

    /// Shape the value must have to count as this field.
    ///
    /// Fields without a pattern qualify on presence alone.
    pub fn pattern(self) -> Option<&'static Regex> {
        match self {
            FieldKind::Phone => Some(&*PHONE_REGEX),
            FieldKind::Aadhar => Some(&*AADHAR_REGEX),
            FieldKind::Passport => Some(&*PASSPORT_REGEX),
            FieldKind::UpiId => Some(&*UPI_REGEX),
            FieldKind::Email => Some(&*EMAIL_REGEX),
            FieldKind::IpAddress => Some(&*IPV4_REGEX),
            FieldKind::Name | FieldKind::Address | FieldKind::DeviceId => None,
        }
    }

    /// Whether a (coerced) value satisfies this field's detection rule
    pub fn matches(self, value: &str) -> bool {
        match self.pattern() {
            Some(pattern) => pattern.is_match(value),
            None => !value.is_empty(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

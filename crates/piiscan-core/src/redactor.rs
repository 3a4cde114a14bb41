//! Field-specific masking

use serde_json::Value;

use crate::classifier::FlagSet;
use crate::field::FieldKind;
use crate::record::{Record, coerce};

/// Replacement for values that cannot be partially masked
pub const REDACTED_MARKER: &str = "[REDACTED_PII]";

/// Copy `record`, masking every flagged field.
///
/// Unflagged and unrecognized fields are copied untouched and key order is kept.
pub fn redact(record: &Record, flags: &FlagSet) -> Record {
    record
        .iter()
        .map(|(key, value)| {
            let masked = match FieldKind::from_key(key) {
                Some(kind) if flags.get(kind) => {
                    Value::String(mask(kind, &coerce(value).unwrap_or_default()))
                }
                _ => value.clone(),
            };
            (key.clone(), masked)
        })
        .collect()
}

/// Mask a single value as the given field kind.
///
/// Values too short or lacking the expected separators are fully redacted.
pub fn mask(kind: FieldKind, value: &str) -> String {
    let masked = match kind {
        FieldKind::Phone => mask_phone(value),
        FieldKind::Aadhar => mask_aadhar(value),
        FieldKind::Passport => mask_passport(value),
        FieldKind::UpiId => mask_upi(value),
        FieldKind::Name => mask_name(value),
        FieldKind::Email => mask_email(value),
        FieldKind::Address => None,
        FieldKind::IpAddress => mask_ip(value),
        FieldKind::DeviceId => mask_device(value),
    };
    masked.unwrap_or_else(|| REDACTED_MARKER.to_string())
}

fn head(value: &str, n: usize) -> &str {
    match value.char_indices().nth(n) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

fn tail(value: &str, n: usize) -> &str {
    let len = value.chars().count();
    if len <= n {
        return value;
    }
    match value.char_indices().nth(len - n) {
        Some((idx, _)) => &value[idx..],
        None => value,
    }
}

/// Keep `keep_head` and `keep_tail` chars around a fixed mask
fn mask_middle(value: &str, keep_head: usize, keep_tail: usize, fill: &str) -> Option<String> {
    if value.chars().count() < keep_head + keep_tail {
        return None;
    }
    Some(format!(
        "{}{}{}",
        head(value, keep_head),
        fill,
        tail(value, keep_tail)
    ))
}

/// 9876543210 -> 98XXXXXX10
fn mask_phone(value: &str) -> Option<String> {
    mask_middle(value, 2, 2, "XXXXXX")
}

/// 1234 5678 9012 -> 1234 XXXX XXXX
fn mask_aadhar(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(|c| *c != ' ').collect();
    if digits.chars().count() < 4 {
        return None;
    }
    Some(format!("{} XXXX XXXX", head(&digits, 4)))
}

/// P1234567 -> PXXXXXXX
fn mask_passport(value: &str) -> Option<String> {
    let first = value.chars().next()?;
    Some(format!("{first}XXXXXXX"))
}

/// user123@ybl -> usXXX23@ybl
fn mask_upi(value: &str) -> Option<String> {
    let (local, domain) = split_at_sign(value)?;
    if local.chars().count() < 2 {
        return None;
    }
    Some(format!("{}XXX{}@{}", head(local, 2), tail(local, 2), domain))
}

/// Jane Doe -> JXXX DXXX
fn mask_name(value: &str) -> Option<String> {
    let tokens: Vec<String> = value
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .map(|first| format!("{first}XXX"))
        .collect();
    if tokens.is_empty() {
        return None;
    }
    Some(tokens.join(" "))
}

/// jane@x.com -> jaXXX@x.com
fn mask_email(value: &str) -> Option<String> {
    let (local, domain) = split_at_sign(value)?;
    if local.is_empty() {
        return None;
    }
    Some(format!("{}XXX@{}", head(local, 2), domain))
}

/// 192.168.1.1 -> 192.168.x.x
fn mask_ip(value: &str) -> Option<String> {
    let octets: Vec<&str> = value.split('.').collect();
    match octets.as_slice() {
        [a, b, _, _] => Some(format!("{a}.{b}.x.x")),
        _ => None,
    }
}

/// DEV123456 -> DEVXXXX456
fn mask_device(value: &str) -> Option<String> {
    mask_middle(value, 3, 3, "XXXX")
}

/// Split into exactly two parts around a single `@`
fn split_at_sign(value: &str) -> Option<(&str, &str)> {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => Some((local, domain)),
        _ => None,
    }
}

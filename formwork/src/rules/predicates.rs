//! Built-in rule predicates.
//!
//! Every predicate is a total function over string values: no I/O, no
//! panics. Rules never imply `required`; empty input simply fails the
//! predicates whose character classes demand content.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::FieldKind;

static NUMBER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-0-9.]+$").expect("Invalid regex pattern"));

static ALPHA_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("Invalid regex pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[*+!.&#$|'\\%/0-9a-z^_`{}=?~:-]+@([0-9a-z-]+\.)+[0-9a-z]{2,}$")
        .expect("Invalid regex pattern")
});

/// Presence check, dispatched by kind.
///
/// Grouped kinds receive a sentinel value (non-empty iff any member is
/// checked); selects pass when the value differs from the configured
/// default; everything else requires trimmed non-empty text.
pub fn required(value: &str, kind: FieldKind, default: &str) -> bool {
    match kind {
        FieldKind::Radio | FieldKind::Checkbox => !value.is_empty(),
        FieldKind::Select => value != default,
        _ => !value.trim().is_empty(),
    }
}

/// Trimmed character count is at least `n`.
pub fn min(value: &str, n: usize) -> bool {
    value.trim().chars().count() >= n
}

/// Trimmed character count is at most `n`.
pub fn max(value: &str, n: usize) -> bool {
    value.trim().chars().count() <= n
}

/// Trimmed character count within `[lo, hi]`, inclusive on both ends.
pub fn between(value: &str, lo: usize, hi: usize) -> bool {
    (lo..=hi).contains(&value.trim().chars().count())
}

/// Trimmed value is non-empty, made of number characters, and parses as a
/// float. `"1.2.3"` passes the character test but fails the parse.
pub fn number(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && NUMBER_CHARS.is_match(value) && value.parse::<f64>().is_ok()
}

/// Trimmed value is ASCII letters and digits only; empty input fails.
pub fn alpha_numeric(value: &str) -> bool {
    ALPHA_NUMERIC.is_match(value.trim())
}

/// Trimmed value has email address shape: local part, `@`, one or more
/// dotted labels and a final label of two characters or more. `a@b` does
/// not qualify.
pub fn email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Raw equality against another field's current value.
pub fn equal_to(value: &str, other: &str) -> bool {
    value == other
}

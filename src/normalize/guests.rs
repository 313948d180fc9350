//! Guest-count parsing and its lossy inverse.
//!
//! The public booking form stores guest counts as range strings such as
//! `"15-25 guests"`. The canonical record keeps a single number, the
//! lower bound. Writing back re-encodes the number as `"<n>-<n+10> guests"`,
//! so `"15-25 guests"` survives a round trip but `"15-20"` comes back as
//! `"15-25 guests"`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static FIRST_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[0-9]+").ok());

/// Extracts a guest count from a source value.
///
/// Numbers are used directly (fractional parts are dropped); strings
/// yield their first run of decimal digits; anything else is absent.
#[must_use]
pub fn parse_guest_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => FIRST_NUMBER
            .as_ref()?
            .find(s)
            .and_then(|m| m.as_str().parse().ok()),
        _ => None,
    }
}

/// Encodes a guest count the way the booking form does.
#[must_use]
pub fn encode_guest_range(count: u32) -> String {
    format!("{count}-{} guests", count.saturating_add(10))
}

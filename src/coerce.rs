//! Lenient value coercion
//!
//! Payment and event records reach this crate as loosely-typed JSON exported
//! from the application database. A malformed field must never abort a
//! calculation, so every conversion below falls back to a neutral value:
//!
//! | input          | numeric                  | truthy           |
//! |----------------|--------------------------|------------------|
//! | absent / null  | 0                        | false            |
//! | bool           | 1 / 0                    | value            |
//! | number         | value (NaN -> 0)         | != 0 and not NaN |
//! | string         | finite parse, else 0     | non-empty        |
//! | array / object | 0                        | true             |

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Replace NaN with zero, keep every other value (including infinities).
pub fn numeric_or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Replace NaN and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round to cents, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse a textual amount. Blank, unparsable or non-finite text
/// (`"inf"`, `"NaN"`) yields 0.
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Numeric view of an arbitrary JSON value.
pub fn numeric(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => numeric_or_zero(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => parse_amount(s),
        Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// Truthiness of an arbitrary JSON value.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0 && !v.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Serde helper: any JSON value into an amount.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(numeric(&value))
}

/// Serde helper: keeps `null` distinct from a present value (even `0`).
/// Pair with `#[serde(default)]` so a missing key also becomes `None`.
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(numeric(&other)),
    })
}

/// Serde helper: any JSON value into a flag.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(truthy(&value))
}

/// Serde helper: any JSON value into an optional string, numbers rendered as text.
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

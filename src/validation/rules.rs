//! Per-field rules: coercion of the raw JSON value followed by a predicate.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use validator::{ValidateLength, ValidateRange};

pub const CODE_REQUIRED: &str = "required";
pub const CODE_TYPE: &str = "type";
pub const CODE_INTEGER: &str = "integer";
pub const CODE_FLOAT: &str = "float";
pub const CODE_RANGE: &str = "range";
pub const CODE_LENGTH: &str = "length";
pub const CODE_ISO8601: &str = "iso8601";
pub const CODE_ONE_OF: &str = "one_of";
pub const CODE_BOOLEAN: &str = "boolean";

/// What a single field must look like.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Whole number, coerced from JSON numbers or numeric strings
    Int { min: Option<i64>, max: Option<i64> },
    /// Finite number, coerced from JSON numbers or numeric strings
    Float { min: Option<f64>, max: Option<f64> },
    /// String whose length in characters lies within bounds
    Text {
        min: Option<u64>,
        max: Option<u64>,
        trim: bool,
    },
    /// ISO-8601 calendar date or date-time
    Date,
    /// One of a fixed set of strings
    OneOf(&'static [&'static str]),
    /// Boolean, coerced from common truthy/falsy spellings
    Bool,
}

impl Rule {
    /// Coerce `raw` and check it. On success the coerced value is returned,
    /// otherwise the failure code.
    pub fn apply(&self, raw: &Value) -> Result<Value, &'static str> {
        match self {
            Rule::Int { min, max } => {
                let n = coerce_int(raw).ok_or(CODE_INTEGER)?;
                if !n.validate_range(*min, *max, None, None) {
                    return Err(CODE_RANGE);
                }
                Ok(Value::from(n))
            }
            Rule::Float { min, max } => {
                let n = coerce_float(raw).ok_or(CODE_FLOAT)?;
                if !n.validate_range(*min, *max, None, None) {
                    return Err(CODE_RANGE);
                }
                Ok(Value::from(n))
            }
            Rule::Text { min, max, trim } => {
                let text = coerce_text(raw).ok_or(CODE_TYPE)?;
                let text = if *trim { text.trim().to_string() } else { text };
                if !text.validate_length(*min, *max, None) {
                    return Err(CODE_LENGTH);
                }
                Ok(Value::String(text))
            }
            Rule::Date => match raw {
                Value::String(s) if is_iso8601(s) => Ok(raw.clone()),
                _ => Err(CODE_ISO8601),
            },
            Rule::OneOf(allowed) => match raw {
                Value::String(s) if allowed.contains(&s.as_str()) => Ok(raw.clone()),
                _ => Err(CODE_ONE_OF),
            },
            Rule::Bool => coerce_bool(raw).map(Value::Bool).ok_or(CODE_BOOLEAN),
        }
    }
}

fn coerce_int(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_float(raw: &Value) -> Option<f64> {
    let n = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn coerce_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn coerce_bool(raw: &Value) -> Option<bool> {
    match raw {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

const LOCAL_DATE_TIMES: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_DATE_TIMES: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];

fn is_iso8601(s: &str) -> bool {
    is_calendar_date(s)
        || DateTime::parse_from_rfc3339(s).is_ok()
        || OFFSET_DATE_TIMES
            .iter()
            .any(|f| DateTime::parse_from_str(s, f).is_ok())
        || is_local_date_time(s.strip_suffix('Z').unwrap_or(s))
}

/// Extended (`YYYY-MM-DD`) or basic (`YYYYMMDD`) calendar date
fn is_calendar_date(s: &str) -> bool {
    if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        return true;
    }
    s.len() == 8
        && s.bytes().all(|b| b.is_ascii_digit())
        && NaiveDate::parse_from_str(&format!("{}-{}-{}", &s[..4], &s[4..6], &s[6..]), "%Y-%m-%d")
            .is_ok()
}

fn is_local_date_time(s: &str) -> bool {
    LOCAL_DATE_TIMES
        .iter()
        .any(|f| NaiveDateTime::parse_from_str(s, f).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const POSITIVE: Rule = Rule::Int {
        min: Some(1),
        max: None,
    };

    #[test]
    fn test_int_coerces_numeric_strings() {
        assert_eq!(POSITIVE.apply(&json!("42")), Ok(json!(42)));
        assert_eq!(POSITIVE.apply(&json!(" 7 ")), Ok(json!(7)));
        assert_eq!(POSITIVE.apply(&json!(3)), Ok(json!(3)));
    }

    #[test]
    fn test_int_rejects_non_integers() {
        assert_eq!(POSITIVE.apply(&json!("abc")), Err(CODE_INTEGER));
        assert_eq!(POSITIVE.apply(&json!(1.5)), Err(CODE_INTEGER));
        assert_eq!(POSITIVE.apply(&json!("1.5")), Err(CODE_INTEGER));
        assert_eq!(POSITIVE.apply(&json!(true)), Err(CODE_INTEGER));
    }

    #[test]
    fn test_int_range() {
        assert_eq!(POSITIVE.apply(&json!(0)), Err(CODE_RANGE));
        assert_eq!(POSITIVE.apply(&json!("-4")), Err(CODE_RANGE));

        let bounded = Rule::Int {
            min: Some(1),
            max: Some(10),
        };
        assert_eq!(bounded.apply(&json!(10)), Ok(json!(10)));
        assert_eq!(bounded.apply(&json!(11)), Err(CODE_RANGE));
    }

    #[test]
    fn test_float_bounds_and_coercion() {
        let price = Rule::Float {
            min: Some(0.0),
            max: Some(100.0),
        };
        assert_eq!(price.apply(&json!(10.5)), Ok(json!(10.5)));
        assert_eq!(price.apply(&json!("0")), Ok(json!(0.0)));
        assert_eq!(price.apply(&json!(-1)), Err(CODE_RANGE));
        assert_eq!(price.apply(&json!(100.01)), Err(CODE_RANGE));
        assert_eq!(price.apply(&json!("NaN")), Err(CODE_FLOAT));
        assert_eq!(price.apply(&json!("ten")), Err(CODE_FLOAT));
    }

    #[test]
    fn test_text_length_counts_characters_after_trim() {
        let title = Rule::Text {
            min: Some(2),
            max: Some(5),
            trim: true,
        };
        assert_eq!(title.apply(&json!("  ab  ")), Ok(json!("ab")));
        assert_eq!(title.apply(&json!(" a ")), Err(CODE_LENGTH));
        assert_eq!(title.apply(&json!("ééééé")), Ok(json!("ééééé")));
        assert_eq!(title.apply(&json!("abcdef")), Err(CODE_LENGTH));
    }

    #[test]
    fn test_text_without_trim_keeps_whitespace() {
        let raw = Rule::Text {
            min: None,
            max: None,
            trim: false,
        };
        assert_eq!(raw.apply(&json!(" x ")), Ok(json!(" x ")));
        assert_eq!(raw.apply(&json!(12)), Ok(json!("12")));
        assert_eq!(raw.apply(&json!(["x"])), Err(CODE_TYPE));
    }

    #[test]
    fn test_date_accepts_iso8601_forms() {
        for ok in [
            "2024-12-25",
            "2024-12-25T10:30:00",
            "2024-12-25T10:30:00.123",
            "2024-12-25T10:30:00Z",
            "2024-12-25T10:30:00+05:30",
            "2024-12-25T10:30",
            "2024-12-25T10:30Z",
            "2024-12-25T10:30+05:30",
            "2024-12-25T10:30:00+0530",
            "20241225",
        ] {
            assert_eq!(Rule::Date.apply(&json!(ok)), Ok(json!(ok)), "{}", ok);
        }
        for bad in [
            "25/12/2024",
            "2024-02-30",
            "tomorrow",
            "",
            "20241325",
            "2024122",
            "2024-12-25T25:00",
            "2024-12-25T10",
        ] {
            assert_eq!(Rule::Date.apply(&json!(bad)), Err(CODE_ISO8601), "{}", bad);
        }
        assert_eq!(Rule::Date.apply(&json!(20241225)), Err(CODE_ISO8601));
    }

    #[test]
    fn test_one_of() {
        let granularity = Rule::OneOf(&["day", "week", "month"]);
        assert_eq!(granularity.apply(&json!("week")), Ok(json!("week")));
        assert_eq!(granularity.apply(&json!("year")), Err(CODE_ONE_OF));
        assert_eq!(granularity.apply(&json!("Week")), Err(CODE_ONE_OF));
    }

    #[test]
    fn test_bool_coercion() {
        for (raw, expected) in [
            (json!(true), true),
            (json!("yes"), true),
            (json!("ON"), true),
            (json!(1), true),
            (json!("0"), false),
            (json!("false"), false),
            (json!(" off "), false),
        ] {
            assert_eq!(Rule::Bool.apply(&raw), Ok(json!(expected)), "{}", raw);
        }
        assert_eq!(Rule::Bool.apply(&json!("maybe")), Err(CODE_BOOLEAN));
        assert_eq!(Rule::Bool.apply(&json!(2)), Err(CODE_BOOLEAN));
    }
}

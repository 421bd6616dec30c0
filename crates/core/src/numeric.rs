//! Lenient numeric coercion for count-like draft fields.
//!
//! Editors type counts into free-text inputs. Whatever arrives is coerced to
//! an integer by reading its leading digits; anything unreadable becomes 0.

use serde::{Deserialize, Deserializer};

/// Parse the leading integer of `input`, returning 0 when there is none.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit (`"12 comments"` is 12, `"abc"` is 0). Values outside the
/// `i32` range saturate.
pub fn coerce_count(input: &str) -> i32 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let leading: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if leading.is_empty() {
        return 0;
    }

    let magnitude = leading.parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Serde adapter accepting a number, a numeric string, or null for a count.
///
/// Floats are truncated toward zero; everything unparseable is 0.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            } else {
                n.as_f64().map(|f| f.trunc() as i32).unwrap_or(0)
            }
        }
        serde_json::Value::String(s) => coerce_count(&s),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "lenient_count")]
        count: i32,
    }

    fn probe(json: serde_json::Value) -> i32 {
        serde_json::from_value::<Probe>(serde_json::json!({ "count": json }))
            .unwrap()
            .count
    }

    #[test]
    fn test_plain_integers() {
        assert_eq!(coerce_count("42"), 42);
        assert_eq!(coerce_count("  7"), 7);
        assert_eq!(coerce_count("-3"), -3);
        assert_eq!(coerce_count("+5"), 5);
    }

    #[test]
    fn test_leading_digits_win() {
        assert_eq!(coerce_count("12 comments"), 12);
        assert_eq!(coerce_count("3.9"), 3);
    }

    #[test]
    fn test_unparseable_is_zero() {
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("abc"), 0);
        assert_eq!(coerce_count("-"), 0);
    }

    #[test]
    fn test_saturates_out_of_range() {
        assert_eq!(coerce_count("99999999999999999999"), i32::MAX);
        assert_eq!(coerce_count("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_lenient_count_accepts_mixed_json() {
        assert_eq!(probe(serde_json::json!(8)), 8);
        assert_eq!(probe(serde_json::json!("15")), 15);
        assert_eq!(probe(serde_json::json!("n/a")), 0);
        assert_eq!(probe(serde_json::json!(2.7)), 2);
        assert_eq!(probe(serde_json::Value::Null), 0);
    }
}

//! Loose value coercions used by the display filters.
//!
//! Templates hand filters whatever they have, so filters work on
//! `serde_json::Value` and coerce it the way a browser would when text or a
//! number is needed.

use serde_json::Value;

/// Convert a value to the text a browser would show for it.
///
/// `None` stands for an undefined value.
pub fn to_display_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(v) => value_to_string(v),
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Array joins render null holes as empty strings
                Value::Null => String::new(),
                other => value_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_string(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => float_to_string(f),
        None => n.to_string(),
    }
}

/// Shortest round-trip text for a float, in browser number notation:
/// plain decimals for exponents in `-7..21`, otherwise `1.5e+21` style.
fn float_to_string(f: f64) -> String {
    if f == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    if !f.is_finite() {
        return if f.is_nan() {
            "NaN".to_string()
        } else if f > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    // `{:e}` yields the shortest digits, e.g. "-1.25e-7"
    let scientific = format!("{:e}", f.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, (n - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, (n - 1).abs())
        }
    };

    if f < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Coerce an argument to an integer, truncating toward zero.
///
/// Accepts numbers and numeric strings. Returns `None` for anything that is
/// not a number.
pub fn to_integer(value: Option<&Value>) -> Option<i64> {
    let f = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    if f.is_nan() {
        return None;
    }
    // `as` saturates for out-of-range floats
    Some(f.trunc() as i64)
}

/// Compare two strings by UTF-16 code units.
pub fn cmp_utf16(a: &str, b: &str) -> std::cmp::Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_string_primitives() {
        assert_eq!(to_display_string(None), "undefined");
        assert_eq!(to_display_string(Some(&Value::Null)), "null");
        assert_eq!(to_display_string(Some(&json!(true))), "true");
        assert_eq!(to_display_string(Some(&json!(42))), "42");
        assert_eq!(to_display_string(Some(&json!(1.5))), "1.5");
        assert_eq!(to_display_string(Some(&json!(3.0))), "3");
        assert_eq!(to_display_string(Some(&json!("text"))), "text");
    }

    #[test]
    fn test_display_string_compound() {
        assert_eq!(to_display_string(Some(&json!([1, "b", null]))), "1,b,");
        assert_eq!(to_display_string(Some(&json!([[1, 2], 3]))), "1,2,3");
        assert_eq!(to_display_string(Some(&json!({"a": 1}))), "[object Object]");
    }

    #[test]
    fn test_display_string_float_notation() {
        let show = |f: f64| to_display_string(Some(&json!(f)));
        assert_eq!(show(1e21), "1e+21");
        assert_eq!(show(1e20), "100000000000000000000");
        assert_eq!(show(1e-7), "1e-7");
        assert_eq!(show(1.5e-7), "1.5e-7");
        assert_eq!(show(0.000001), "0.000001");
        assert_eq!(show(-0.0), "0");
        assert_eq!(show(-2.5), "-2.5");
        assert_eq!(show(123.456), "123.456");
        assert_eq!(show(2.5e25), "2.5e+25");
        assert_eq!(
            to_display_string(Some(&json!([1e21, 1e-7]))),
            "1e+21,1e-7"
        );
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer(Some(&json!(3))), Some(3));
        assert_eq!(to_integer(Some(&json!(-2.7))), Some(-2));
        assert_eq!(to_integer(Some(&json!("5"))), Some(5));
        assert_eq!(to_integer(Some(&json!("abc"))), None);
        assert_eq!(to_integer(Some(&Value::Null)), None);
        assert_eq!(to_integer(None), None);
    }

    #[test]
    fn test_cmp_utf16_orders_by_code_units() {
        use std::cmp::Ordering;
        assert_eq!(cmp_utf16("a", "b"), Ordering::Less);
        assert_eq!(cmp_utf16("B", "a"), Ordering::Less);
        assert_eq!(cmp_utf16("10", "9"), Ordering::Less);
        // Astral chars encode as surrogates, which sort below U+FF61
        assert_eq!(cmp_utf16("\u{1F600}", "\u{FF61}"), Ordering::Less);
    }
}

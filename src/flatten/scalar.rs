use serde_json::{Number, Value};

/// Render a leaf as text: strings unquoted, numbers in canonical form,
/// `true`/`false`, and `null` as the literal word.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => unreachable!("containers are never leaves"),
    }
}

/// Integers keep every digit, however large; other numbers print as the
/// shortest decimal that round-trips through f64 (`2.50` -> `2.5`).
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }

    // Number keeps its source text
    let raw = n.to_string();
    if is_integer_literal(&raw) {
        return raw;
    }
    match n.as_f64().and_then(Number::from_f64) {
        Some(canonical) => canonical.to_string(),
        None => raw,
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_strings_are_raw() {
        assert_eq!(scalar_text(&json!("Beijing")), "Beijing");
        assert_eq!(scalar_text(&json!("say \"hi\"")), "say \"hi\"");
        assert_eq!(scalar_text(&json!("")), "");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(scalar_text(&json!(25)), "25");
        assert_eq!(scalar_text(&json!(-7)), "-7");
        assert_eq!(scalar_text(&json!(2.5)), "2.5");
        assert_eq!(scalar_text(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_numbers_are_canonical() {
        assert_eq!(scalar_text(&parsed("2.50")), "2.5");
        assert_eq!(scalar_text(&parsed("2.0e3")), "2000.0");
        assert_eq!(scalar_text(&parsed("-0")), "0");
    }

    #[test]
    fn test_big_integers_keep_digits() {
        assert_eq!(
            scalar_text(&parsed("12345678901234567890123")),
            "12345678901234567890123"
        );
        assert_eq!(
            scalar_text(&parsed("-98765432109876543210")),
            "-98765432109876543210"
        );
    }

    #[test]
    fn test_bool_and_null() {
        assert_eq!(scalar_text(&json!(true)), "true");
        assert_eq!(scalar_text(&json!(false)), "false");
        assert_eq!(scalar_text(&Value::Null), "null");
    }

    #[test]
    #[should_panic(expected = "containers are never leaves")]
    fn test_container_is_not_a_leaf() {
        scalar_text(&json!([1]));
    }
}

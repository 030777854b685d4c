use serde_json::Value;

/// Renders a JSON value for console output: strings without quotes,
/// everything else as compact JSON.
pub fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_print_bare() {
        assert_eq!(display_value(&json!("Watches")), "Watches");
        assert_eq!(display_value(&json!(7)), "7");
        assert_eq!(display_value(&json!({"id": 3})), r#"{"id":3}"#);
    }

    #[test]
    fn kinds() {
        assert_eq!(kind_of(&json!([])), "array");
        assert_eq!(kind_of(&json!({})), "object");
        assert_eq!(kind_of(&Value::Null), "null");
    }
}

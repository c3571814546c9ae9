//! Literal rendering of parameter values, used only for debug interpolation.

use serde_json::Value;

/// Render a JSON value as Cypher literal text.
///
/// Strings are single quoted without any escaping, so the output must never be
/// sent to a database.
///
/// # Examples
/// ```
/// use cypher_builder::utils::value_literal::stringify_value;
/// use serde_json::json;
///
/// assert_eq!(stringify_value(&json!("Steve")), "'Steve'");
/// assert_eq!(stringify_value(&json!([1, 2])), "[ 1, 2 ]");
/// assert_eq!(stringify_value(&json!({"a": true})), "{ a: true }");
/// ```
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(stringify_value).collect();
            format!("[ {} ]", items.join(", "))
        }
        Value::Object(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(key, value)| format!("{}: {}", key, stringify_value(value)))
                .collect();
            format!("{{ {} }}", pairs.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringify_scalars() {
        assert_eq!(stringify_value(&json!(18)), "18");
        assert_eq!(stringify_value(&json!(1.5)), "1.5");
        assert_eq!(stringify_value(&json!(false)), "false");
        assert_eq!(stringify_value(&Value::Null), "null");
    }

    #[test]
    fn test_stringify_nested() {
        let value = json!({"name": "Steve", "tags": ["a", "b"], "meta": {"x": 1}});
        assert_eq!(
            stringify_value(&value),
            "{ name: 'Steve', tags: [ 'a', 'b' ], meta: { x: 1 } }"
        );
    }

    #[test]
    fn test_stringify_empty_collections() {
        assert_eq!(stringify_value(&json!([])), "[  ]");
        assert_eq!(stringify_value(&json!({})), "{  }");
    }
}

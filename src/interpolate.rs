//! Debug-only substitution of parameter values into query text.
//!
//! Values are written as literals with no escaping whatsoever. The result is
//! meant for reading, never for sending to a database.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::{Map, Value};

use crate::utils::value_literal::stringify_value;

lazy_static! {
    /// A `$name` token; the name is the whole run of Unicode letters, numbers
    /// and underscores after `$`, the same characters parameter names are built from
    pub(crate) static ref PARAM_TOKEN: Regex =
        Regex::new(r"\$([\p{Alphabetic}\p{N}_]+)").unwrap();
}

/// Replace every `$name` token that names a parameter with its literal value.
///
/// Tokens are matched as whole identifiers, so `$name` never rewrites the
/// prefix of `$name2`. Unknown tokens are left alone.
pub fn interpolate(text: &str, params: &Map<String, Value>) -> String {
    if params.is_empty() {
        return text.to_string();
    }
    log::warn!("interpolating parameter values into query text; output is for debugging only");

    PARAM_TOKEN
        .replace_all(text, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => stringify_value(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_boundary_tokens_do_not_cross() {
        let text = "$name $name2";
        let params = params(json!({"name": "a", "name2": "b"}));
        assert_eq!(interpolate(text, &params), "'a' 'b'");
    }

    #[test]
    fn test_non_ascii_tokens_do_not_cross() {
        let params = params(json!({"n": 1, "né": 2, "m²": 3}));
        assert_eq!(interpolate("$n $né $m² $m", &params), "1 2 3 $m");
    }

    #[test]
    fn test_prefix_only_parameter() {
        let params = params(json!({"name": "a"}));
        assert_eq!(interpolate("$name2 = $name", &params), "$name2 = 'a'");
    }

    #[test]
    fn test_values_render_as_literals() {
        let params = params(json!({"conditions": {"age": 3, "tags": ["x"]}, "n": null}));
        assert_eq!(
            interpolate("CREATE (p $conditions) SET p.x = $n", &params),
            "CREATE (p { age: 3, tags: [ 'x' ] }) SET p.x = null"
        );
    }

    #[test]
    fn test_no_parameters() {
        assert_eq!(interpolate("RETURN $x", &Map::new()), "RETURN $x");
    }
}

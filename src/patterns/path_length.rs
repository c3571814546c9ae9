use serde_json::Value;
use std::fmt;

/// Variable-length bounds of a relationship pattern.
///
/// - `*` → [`PathLength::Unbounded`]
/// - `*3` → [`PathLength::Exact`]
/// - `*2..5`, `*2..`, `*..5` → [`PathLength::Range`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathLength {
    Unbounded,
    Exact(u64),
    Range(Option<u64>, Option<u64>),
}

impl PathLength {
    pub fn range(min: u64, max: u64) -> Self {
        PathLength::Range(Some(min), Some(max))
    }

    pub fn min_only(min: u64) -> Self {
        PathLength::Range(Some(min), None)
    }

    pub fn max_only(max: u64) -> Self {
        PathLength::Range(None, Some(max))
    }

    /// Interpret a loosely typed value as a path length.
    ///
    /// Accepts the string `"*"`, a non-negative integer, or an array of one or
    /// two entries that are each a non-negative integer or null. Anything else
    /// is not a path length.
    pub fn from_value(value: &Value) -> Option<PathLength> {
        match value {
            Value::String(s) if s == "*" => Some(PathLength::Unbounded),
            Value::Number(n) => n.as_u64().map(PathLength::Exact),
            Value::Array(items) if !items.is_empty() && items.len() <= 2 => {
                let mut bounds = [None, None];
                for (slot, item) in bounds.iter_mut().zip(items) {
                    *slot = match item {
                        Value::Null => None,
                        Value::Number(n) => Some(n.as_u64()?),
                        _ => return None,
                    };
                }
                Some(PathLength::Range(bounds[0], bounds[1]))
            }
            _ => None,
        }
    }
}

impl fmt::Display for PathLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathLength::Unbounded | PathLength::Range(None, None) => write!(f, "*"),
            PathLength::Exact(n) => write!(f, "*{}", n),
            PathLength::Range(min, max) => {
                let min = min.map(|n| n.to_string()).unwrap_or_default();
                let max = max.map(|n| n.to_string()).unwrap_or_default();
                write!(f, "*{}..{}", min, max)
            }
        }
    }
}

/// Render labels for a pattern: `:A:B` for nodes, `:A|B` for relationships
pub fn labels_text(labels: &[String], relation: bool) -> String {
    if labels.is_empty() {
        return String::new();
    }
    let separator = if relation { "|" } else { ":" };
    format!(":{}", labels.join(separator))
}

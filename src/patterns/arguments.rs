//! Positional argument resolution for node and relationship patterns.
//!
//! Pattern constructors accept up to four optional positional arguments
//! (`name`, `labels`, `conditions`, `length`). Callers may leave out any of
//! them, so each value is assigned to a slot by its shape rather than by its
//! position alone:
//!
//! ```text
//! node("p")                      -> name
//! node(["Person"])               -> labels
//! node({"age": 3})               -> conditions
//! relation(out, [2, 4])          -> length
//! relation(out, "r", "T", 3)     -> name, labels, length
//! ```

use serde_json::{Map, Value};

use super::path_length::PathLength;
use crate::errors::{describe_value, BuilderError};

/// Unresolved positional arguments. `None` marks an absent slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPatternArgs {
    pub name: Option<Value>,
    pub labels: Option<Value>,
    pub conditions: Option<Value>,
    pub length: Option<Value>,
}

impl RawPatternArgs {
    /// Fill the slots in order from a positional list; `null` entries are absent.
    pub fn from_positional(args: &[Value], max_slots: usize) -> Result<Self, BuilderError> {
        if args.len() > max_slots {
            return Err(BuilderError::ArgumentShape(format!(
                "expected at most {} pattern arguments, got {}",
                max_slots,
                args.len()
            )));
        }
        let mut slots = args
            .iter()
            .map(|arg| (!arg.is_null()).then(|| arg.clone()))
            .chain(std::iter::repeat(None));
        Ok(RawPatternArgs {
            name: slots.next().flatten(),
            labels: slots.next().flatten(),
            conditions: slots.next().flatten(),
            length: slots.next().flatten(),
        })
    }
}

/// Canonical form of a pattern's arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPattern {
    pub name: String,
    pub labels: Vec<String>,
    pub conditions: Map<String, Value>,
    pub length: Option<PathLength>,
}

/// A non-array object: the only shape accepted as property conditions
pub fn is_conditions_shape(value: &Value) -> bool {
    value.is_object()
}

/// `"*"`, a count, or a non-empty `[min?, max?]` array
pub fn is_path_length_shape(value: &Value) -> bool {
    PathLength::from_value(value).is_some()
}

fn holds_path_length(slot: &Option<Value>) -> bool {
    slot.as_ref().is_some_and(is_path_length_shape)
}

fn holds_conditions(slot: &Option<Value>) -> bool {
    slot.as_ref().is_some_and(is_conditions_shape)
}

/// Resolve node pattern arguments (`name`, `labels`, `conditions`)
pub fn resolve_node_args(raw: RawPatternArgs) -> Result<ResolvedPattern, BuilderError> {
    if raw.length.is_some() {
        return Err(BuilderError::ArgumentShape(
            "node patterns do not take a path length".to_string(),
        ));
    }
    resolve_common(raw.name, raw.labels, raw.conditions)
}

/// Resolve relationship pattern arguments (`name`, `labels`, `conditions`, `length`)
pub fn resolve_relation_args(raw: RawPatternArgs) -> Result<ResolvedPattern, BuilderError> {
    let RawPatternArgs {
        mut name,
        mut labels,
        mut conditions,
        mut length,
    } = raw;

    // A trailing path length may have been passed in an earlier slot
    if length.is_none() {
        if holds_path_length(&conditions) {
            length = conditions.take();
        } else if conditions.is_none() && holds_path_length(&labels) {
            length = labels.take();
        } else if conditions.is_none() && labels.is_none() && holds_path_length(&name) {
            length = name.take();
        }
        if length.is_some() {
            log::debug!("relation pattern: path length shifted into the length slot");
        }
    }

    for (slot, value) in [("name", &name), ("labels", &labels), ("conditions", &conditions)] {
        if holds_path_length(value) {
            return Err(BuilderError::ArgumentShape(format!(
                "a path length was given in the {} position",
                slot
            )));
        }
    }

    let length = match length {
        None => None,
        Some(value) => Some(PathLength::from_value(&value).ok_or_else(|| {
            BuilderError::type_mismatch(
                "length",
                "'*', a non-negative integer or an array of up to two bounds",
            )
        })?),
    };

    let mut resolved = resolve_common(name, labels, conditions)?;
    resolved.length = length;
    Ok(resolved)
}

fn resolve_common(
    mut name: Option<Value>,
    mut labels: Option<Value>,
    mut conditions: Option<Value>,
) -> Result<ResolvedPattern, BuilderError> {
    if conditions.is_none() {
        if holds_conditions(&labels) {
            conditions = labels.take();
        } else if labels.is_none() && holds_conditions(&name) {
            conditions = name.take();
        }
    }

    // Labels must be an array when they come first
    if labels.is_none() && matches!(name, Some(Value::Array(_))) {
        labels = name.take();
    }

    let name = match name {
        None => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => {
            log::debug!("pattern name resolved to {}", describe_value(&other));
            return Err(BuilderError::type_mismatch("name", "a string"));
        }
    };

    let labels = match labels {
        None => Vec::new(),
        Some(Value::String(s)) => vec![s],
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(BuilderError::type_mismatch(
                    "labels",
                    "a string or an array of strings",
                )),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(BuilderError::type_mismatch(
                "labels",
                "a string or an array of strings",
            ))
        }
    };

    let conditions = match conditions {
        None => Map::new(),
        Some(Value::Object(map)) => map,
        Some(_) => return Err(BuilderError::type_mismatch("conditions", "an object")),
    };

    Ok(ResolvedPattern {
        name,
        labels,
        conditions,
        length: None,
    })
}

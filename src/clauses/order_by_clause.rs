use serde_json::Value;

use crate::clauses::Clause;
use crate::errors::{describe_value, BuilderError};
use crate::parameters::ParamScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// No keyword, the database default
    #[default]
    Ascending,
    Descending,
}

impl OrderDirection {
    /// `"DESC"`, `"DESCENDING"` (any case) and `true` mean descending;
    /// everything else falls back to the default order
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::from_keyword(s),
            Value::Bool(true) => OrderDirection::Descending,
            _ => OrderDirection::Ascending,
        }
    }

    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_uppercase().as_str() {
            "DESC" | "DESCENDING" => OrderDirection::Descending,
            _ => OrderDirection::Ascending,
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            OrderDirection::Ascending => "",
            OrderDirection::Descending => "DESC",
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// `ORDER BY a.x DESC, a.y`
#[derive(Debug)]
pub struct OrderBy {
    scope: ParamScope,
    constraints: Vec<(String, OrderDirection)>,
}

impl OrderBy {
    pub fn new<S: Into<String>>(
        constraints: impl IntoIterator<Item = (S, OrderDirection)>,
    ) -> Self {
        OrderBy {
            scope: ParamScope::new(),
            constraints: constraints
                .into_iter()
                .map(|(field, direction)| (field.into(), direction))
                .collect(),
        }
    }

    /// Build from loosely typed fields.
    ///
    /// - `"a.x"` orders by one field in `direction`
    /// - `["a.x", ["a.y", "DESC"]]` lists fields, optionally with their own direction
    /// - `{"a.x": "DESC", "a.y": null}` maps fields to directions
    pub fn from_value(fields: &Value, direction: Option<&Value>) -> Result<Self, BuilderError> {
        let default = direction
            .map(OrderDirection::from_value)
            .unwrap_or_default();

        let constraints = match fields {
            Value::String(field) => vec![(field.clone(), default)],
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(field) => Ok((field.clone(), default)),
                    Value::Array(pair) => match pair.as_slice() {
                        [Value::String(field)] => Ok((field.clone(), default)),
                        [Value::String(field), dir] => {
                            let direction = if is_falsy(dir) {
                                default
                            } else {
                                OrderDirection::from_value(dir)
                            };
                            Ok((field.clone(), direction))
                        }
                        _ => Err(BuilderError::InvalidOrderBy(format!(
                            "expected a [field, direction] pair, got {}",
                            item
                        ))),
                    },
                    other => Err(BuilderError::InvalidOrderBy(format!(
                        "expected a field name, got {}",
                        describe_value(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Value::Object(map) => map
                .iter()
                .map(|(field, dir)| (field.clone(), OrderDirection::from_value(dir)))
                .collect(),
            other => {
                return Err(BuilderError::InvalidOrderBy(format!(
                    "expected a field, a list of fields or a field map, got {}",
                    describe_value(other)
                )))
            }
        };

        Ok(OrderBy::new(constraints))
    }
}

impl Clause for OrderBy {
    fn build(&self) -> String {
        let constraints: Vec<String> = self
            .constraints
            .iter()
            .map(|(field, direction)| format!("{} {}", field, direction.keyword()).trim().to_string())
            .collect();
        format!("ORDER BY {}", constraints.join(", "))
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}

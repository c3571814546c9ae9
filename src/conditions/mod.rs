//! Boolean condition trees for `WHERE` clauses.
//!
//! A tree is built from literals (implied equality), regular expressions,
//! [`Comparator`]s and the `and` / `or` / `xor` / `not` combinators. JSON
//! values convert structurally: an object is an `AND` over its keys, each key
//! extending the field path, and an array is an `OR` over its items.
//!
//! ```text
//! {"person": {"age": 18, "name": "Ali"}}    person.age = $age AND person.name = $name
//! {"age": [18, 21]}                         age = $age OR age = $age2
//! not(or([{"a": 1}, {"b": 2}]))             NOT (a = $a OR b = $b)
//! ```

pub mod comparators;
mod serializer;

pub use comparators::{
    between, contains, ends_with, equals, exists, greater_equal_to, greater_than, has_label,
    in_array, is_null, less_equal_to, less_than, regexp, starts_with, Between, Compare,
    Comparator, Exists, HasLabel, IsNull,
};
pub use serializer::{compile, compile_at, Precedence};

use regex::Regex;
use serde_json::Value;

#[derive(Debug)]
pub enum Condition {
    /// Compared for equality against a parameter named after the field
    Literal(Value),
    /// Matched with `=~`
    Pattern(Regex),
    Compare(Box<dyn Comparator>),
    /// Keyed children; a non-empty key extends the field path
    And(Vec<(String, Condition)>),
    Or(Vec<Condition>),
    Xor(Vec<Condition>),
    Not(Box<Condition>),
}

/// `AND` over keyed entries
pub fn and<K, C>(entries: impl IntoIterator<Item = (K, C)>) -> Condition
where
    K: Into<String>,
    C: Into<Condition>,
{
    Condition::And(
        entries
            .into_iter()
            .map(|(key, condition)| (key.into(), condition.into()))
            .collect(),
    )
}

pub fn or<C: Into<Condition>>(conditions: impl IntoIterator<Item = C>) -> Condition {
    Condition::Or(conditions.into_iter().map(Into::into).collect())
}

pub fn xor<C: Into<Condition>>(conditions: impl IntoIterator<Item = C>) -> Condition {
    Condition::Xor(conditions.into_iter().map(Into::into).collect())
}

pub fn not(condition: impl Into<Condition>) -> Condition {
    Condition::Not(Box::new(condition.into()))
}

impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Condition::And(
                map.into_iter()
                    .map(|(key, value)| (key, Condition::from(value)))
                    .collect(),
            ),
            Value::Array(items) => Condition::Or(items.into_iter().map(Condition::from).collect()),
            literal => Condition::Literal(literal),
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Condition::Literal(Value::from(value))
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::Literal(Value::from(value))
    }
}

impl From<i64> for Condition {
    fn from(value: i64) -> Self {
        Condition::Literal(Value::from(value))
    }
}

impl From<f64> for Condition {
    fn from(value: f64) -> Self {
        Condition::Literal(Value::from(value))
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Literal(Value::from(value))
    }
}

impl From<Regex> for Condition {
    fn from(pattern: Regex) -> Self {
        Condition::Pattern(pattern)
    }
}

impl From<Box<dyn Comparator>> for Condition {
    fn from(comparator: Box<dyn Comparator>) -> Self {
        Condition::Compare(comparator)
    }
}

macro_rules! comparator_into_condition {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Condition {
                fn from(comparator: $ty) -> Self {
                    Condition::Compare(Box::new(comparator))
                }
            }
        )*
    };
}

comparator_into_condition!(Compare, Between, IsNull, HasLabel, Exists);

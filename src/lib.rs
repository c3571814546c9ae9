//! cypher-builder - a fluent builder for Cypher queries
//!
//! Clauses are assembled in call order into a [`Query`], which produces the
//! query text plus a table of named parameters:
//! - Node and relationship patterns from loosely typed positional arguments
//! - Boolean condition trees with minimal parenthesization
//! - Projection term lists for `RETURN` / `WITH`
//! - Collision-free parameter naming across clauses

/// Build a node pattern from positional JSON-like arguments.
///
/// Evaluates to `Result<NodePattern, BuilderError>`.
///
/// ```
/// use cypher_builder::{node, Clause};
///
/// let pattern = node!("p", ["A", "B"], {"x": 1}).unwrap();
/// assert_eq!(pattern.build(), "(p:A:B { x: $x })");
/// ```
#[macro_export]
macro_rules! node {
    ($($arg:tt),* $(,)?) => {
        $crate::patterns::node(&[$($crate::__serde_json::json!($arg)),*])
    };
}

/// Build a relationship pattern from a [`Direction`](patterns::Direction) and
/// positional JSON-like arguments.
///
/// ```
/// use cypher_builder::{relation, Clause, Direction};
///
/// assert_eq!(relation!(Direction::Out, "r", "T").unwrap().build(), "-[r:T]->");
/// assert_eq!(relation!(Direction::Either, [3, 5]).unwrap().build(), "-[*3..5]-");
/// ```
#[macro_export]
macro_rules! relation {
    ($direction:expr $(, $arg:tt)*) => {
        $crate::patterns::relation($direction, &[$($crate::__serde_json::json!($arg)),*])
    };
}

/// `AND` over `key => condition` entries.
///
/// ```
/// use cypher_builder::{conditions, Clause, Query};
/// use cypher_builder::conditions::greater_than;
///
/// let query = Query::new().where_(conditions! {
///     "person.age" => greater_than(18),
///     "person.name" => "Ali",
/// });
/// assert_eq!(query.build(), "WHERE person.age > $age AND person.name = $name;");
/// ```
#[macro_export]
macro_rules! conditions {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::conditions::Condition::And(vec![
            $((
                ::std::string::String::from($key),
                $crate::conditions::Condition::from($value),
            )),*
        ])
    };
}

#[doc(hidden)]
pub use serde_json as __serde_json;

pub mod clauses;
pub mod conditions;
pub mod config;
pub mod document;
pub mod errors;
pub mod interpolate;
pub mod parameters;
pub mod patterns;
pub mod query;
pub mod utils;

pub use clauses::Clause;
pub use errors::BuilderError;
pub use parameters::{ParamRef, ParameterTable};
pub use patterns::{Direction, NodePattern, Pattern, RelationPattern};
pub use query::{Query, QueryObject};

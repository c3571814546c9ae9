//! Projection terms for `RETURN` and `WITH`.
//!
//! Accepted shapes, freely nested inside arrays:
//!
//! ```text
//! "people"                                  people
//! ["people", "pets"]                        people, pets
//! {"people": "employees"}                   people AS employees
//! {"people": ["name", "age"]}               people.name, people.age
//! {"people": [{"name": "personName"}]}      people.name AS personName
//! ```

use serde_json::Value;

use crate::clauses::Clause;
use crate::errors::{describe_value, BuilderError};
use crate::parameters::ParamScope;

/// One entry of an entity's property list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyTerm {
    /// `entity.prop`
    Property(String),
    /// `entity.prop AS alias`, as `(prop, alias)` pairs
    Aliased(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Plain(String),
    List(Vec<Term>),
    /// `(entity, alias)` pairs
    AliasMap(Vec<(String, String)>),
    /// `(entity, properties)` pairs
    PropertyList(Vec<(String, Vec<PropertyTerm>)>),
}

impl Term {
    fn render_into(&self, out: &mut Vec<String>) {
        match self {
            Term::Plain(name) => out.push(name.clone()),
            Term::List(terms) => {
                for term in terms {
                    term.render_into(out);
                }
            }
            Term::AliasMap(aliases) => {
                out.extend(
                    aliases
                        .iter()
                        .map(|(entity, alias)| format!("{} AS {}", entity, alias)),
                );
            }
            Term::PropertyList(entities) => {
                for (entity, properties) in entities {
                    for property in properties {
                        match property {
                            PropertyTerm::Property(prop) => {
                                out.push(format!("{}.{}", entity, prop))
                            }
                            PropertyTerm::Aliased(pairs) => {
                                out.extend(pairs.iter().map(|(prop, alias)| {
                                    format!("{}.{} AS {}", entity, prop, alias)
                                }))
                            }
                        }
                    }
                }
            }
        }
    }

    /// Render as a comma separated list, flattening nested lists
    pub fn render(&self) -> String {
        let mut out = Vec::new();
        self.render_into(&mut out);
        out.join(", ")
    }
}

impl From<&str> for Term {
    fn from(name: &str) -> Self {
        Term::Plain(name.to_string())
    }
}

impl From<String> for Term {
    fn from(name: String) -> Self {
        Term::Plain(name)
    }
}

impl<T: Into<Term>> From<Vec<T>> for Term {
    fn from(terms: Vec<T>) -> Self {
        Term::List(terms.into_iter().map(Into::into).collect())
    }
}

fn property_term(value: Value) -> Result<PropertyTerm, BuilderError> {
    match value {
        Value::String(prop) => Ok(PropertyTerm::Property(prop)),
        Value::Object(map) => map
            .into_iter()
            .map(|(prop, alias)| match alias {
                Value::String(alias) => Ok((prop, alias)),
                other => Err(BuilderError::InvalidTerm(format!(
                    "alias of property '{}' must be a string, got {}",
                    prop,
                    describe_value(&other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(PropertyTerm::Aliased),
        other => Err(BuilderError::InvalidTerm(format!(
            "a property must be a string or an alias object, got {}",
            describe_value(&other)
        ))),
    }
}

impl TryFrom<Value> for Term {
    type Error = BuilderError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(name) => Ok(Term::Plain(name)),
            Value::Array(items) => items
                .into_iter()
                .map(Term::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Term::List),
            Value::Object(map) => {
                // Each key becomes its own term so mixed objects keep their order
                let mut terms = Vec::with_capacity(map.len());
                for (entity, entry) in map {
                    let term = match entry {
                        Value::String(alias) => Term::AliasMap(vec![(entity, alias)]),
                        Value::Array(props) => Term::PropertyList(vec![(
                            entity,
                            props
                                .into_iter()
                                .map(property_term)
                                .collect::<Result<Vec<_>, _>>()?,
                        )]),
                        other => {
                            return Err(BuilderError::InvalidTerm(format!(
                                "entry for '{}' must be an alias or a property list, got {}",
                                entity,
                                describe_value(&other)
                            )))
                        }
                    };
                    terms.push(term);
                }
                Ok(if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Term::List(terms)
                })
            }
            other => Err(BuilderError::InvalidTerm(format!(
                "expected a string, array or object term, got {}",
                describe_value(&other)
            ))),
        }
    }
}

/// `RETURN [DISTINCT] terms`
#[derive(Debug)]
pub struct Return {
    scope: ParamScope,
    terms: Term,
    distinct: bool,
}

impl Return {
    pub fn new(terms: impl Into<Term>) -> Self {
        Return {
            scope: ParamScope::new(),
            terms: terms.into(),
            distinct: false,
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

impl Clause for Return {
    fn build(&self) -> String {
        let keyword = if self.distinct { "RETURN DISTINCT" } else { "RETURN" };
        format!("{} {}", keyword, self.terms.render())
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}

/// `WITH terms`
#[derive(Debug)]
pub struct With {
    scope: ParamScope,
    terms: Term,
}

impl With {
    pub fn new(terms: impl Into<Term>) -> Self {
        With {
            scope: ParamScope::new(),
            terms: terms.into(),
        }
    }
}

impl Clause for With {
    fn build(&self) -> String {
        format!("WITH {}", self.terms.render())
    }

    fn scope(&self) -> &ParamScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut ParamScope {
        &mut self.scope
    }
}
